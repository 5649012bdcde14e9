//! Fixed page chrome: header, donation panel, footer.

use super::RenderContext;
use crate::config::SiteConfig;
use maud::{Markup, html};

/// Navigation bar with the theme toggle button.
pub fn header(ctx: &RenderContext<'_>, route: &str) -> Markup {
    let dark = ctx.theme.is_dark();

    html! {
        header itemscope itemtype="http://schema.org/Menu" {
            nav class="menu" {
                ul {
                    @for item in ctx.menu.items(route) {
                        li {
                            a href=(item.url)
                                itemprop="url"
                                class=(if item.active { "header-link active" } else { "header-link" })
                                aria-current=[item.active.then_some("page")] {
                                (item.name)
                            }
                        }
                    }
                }
                button type="button"
                    id="theme-toggle"
                    class="theme-toggle"
                    aria-label="Toggle dark mode"
                    aria-pressed=(if dark { "true" } else { "false" }) {
                    span class="icon-moon" { "☾" }
                    span class="icon-sun" { "☀" }
                }
            }
        }
    }
}

/// Donation call-to-action; empty when no donation url is configured.
pub fn donation_panel(ctx: &RenderContext<'_>) -> Markup {
    let donation = &ctx.config.donation;

    html! {
        @if let Some(url) = donation.active_url() {
            aside class="donation" {
                div class="donation-text" { (donation.text) }
                a class="donation-button" href=(url) rel="nofollow noopener noreferrer" {
                    span { (donation.label) }
                }
            }
        }
    }
}

pub fn footer(ctx: &RenderContext<'_>) -> Markup {
    let author = &ctx.config.site.author;

    html! {
        footer itemscope itemtype="http://schema.org/Links" {
            div class="footer-links" {
                @for (name, url) in footer_links(ctx.config) {
                    a itemprop="url" href=(url) target="_blank" rel="noopener noreferrer" {
                        (name)
                    }
                    " "
                }
            }
            small {
                "© " (ctx.year) " "
                span itemprop="author" { (author) "." }
            }
        }
    }
}

/// Footer links in display order, skipping the unset ones.
fn footer_links(config: &SiteConfig) -> Vec<(&'static str, String)> {
    let mut links = Vec::with_capacity(4);
    if let Some(url) = &config.social.github {
        links.push(("Github", url.clone()));
    }
    if let Some(url) = &config.social.linkedin {
        links.push(("LinkedIn", url.clone()));
    }
    if !config.site.email.is_empty() {
        links.push(("Email", format!("mailto:{}", config.site.email)));
    }
    if let Some(url) = &config.site.resume {
        links.push(("Resume", url.clone()));
    }
    links
}
