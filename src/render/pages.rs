//! Page bodies: home, blog listing, post and not-found pages.

use super::{PageKind, PageMeta, RenderContext, render_page};
use crate::{
    content::PostRecord,
    feed::{ContentFeed, FeedEntry},
    utils::slug::slug_route,
};
use maud::{Markup, PreEscaped, html};

/// Route of the blog listing page.
pub const BLOG_ROUTE: &str = "/blog/";

/// Home page: intro paragraphs followed by the feed.
pub fn home(ctx: &RenderContext<'_>, feed: &ContentFeed) -> String {
    let site = &ctx.config.site;
    let intro = site.description.lines().map(str::trim).filter(|l| !l.is_empty());

    let content = html! {
        section class="intro" {
            @for paragraph in intro {
                p { (paragraph) }
            }
        }
        (feed_list(feed))
    };

    let meta = PageMeta {
        title: site.title.clone(),
        kind: PageKind::Website,
        route: "/".into(),
        description: None,
    };
    render_page(ctx, &meta, content)
}

pub fn blog_index(ctx: &RenderContext<'_>, feed: &ContentFeed) -> String {
    let content = html! {
        h1 class="page-title" { "Blog" }
        (feed_list(feed))
    };

    let meta = PageMeta {
        title: "Blog".into(),
        kind: PageKind::Website,
        route: BLOG_ROUTE.into(),
        description: None,
    };
    render_page(ctx, &meta, content)
}

/// The post list, empty when there are no posts. Each link carries its
/// click event as `data-analytics-*` attributes for the client script.
pub fn feed_list(feed: &ContentFeed) -> Markup {
    html! {
        ol class="feed" itemscope itemtype="http://schema.org/Blog" {
            @for entry in feed.entries() {
                (feed_item(&entry))
            }
        }
    }
}

fn feed_item(entry: &FeedEntry<'_>) -> Markup {
    let event = entry.click_event();
    let date = entry.post().date;

    html! {
        li itemprop="blogPost" itemscope itemtype="http://schema.org/BlogPosting" {
            h1 {
                a class="post"
                    href=(entry.link())
                    itemprop="url"
                    data-analytics-category=(event.category)
                    data-analytics-action=(event.action)
                    data-analytics-label=(event.label) {
                    span itemprop="headline" { (entry.title()) }
                }
            }
            @if let Some(date) = date {
                small {
                    time datetime=(date.to_ymd()) itemprop="datePublished" { (date.to_display()) }
                }
            }
            (tag_list(entry.tags()))
        }
    }
}

fn tag_list(tags: &[String]) -> Markup {
    html! {
        @if !tags.is_empty() {
            ul class="tags" {
                @for tag in tags {
                    li class="tag" { (tag) }
                }
            }
        }
    }
}

/// A single post. The body is trusted HTML from the content directory.
pub fn post_page(ctx: &RenderContext<'_>, post: &PostRecord) -> String {
    let content = html! {
        article class="post" itemscope itemtype="http://schema.org/BlogPosting" {
            header {
                h1 itemprop="headline" { (post.display_title()) }
                @if let Some(date) = post.date {
                    small {
                        time datetime=(date.to_ymd()) itemprop="datePublished" { (date.to_display()) }
                    }
                }
                (tag_list(&post.tags))
            }
            section itemprop="articleBody" {
                (PreEscaped(&post.body))
            }
        }
    };

    let meta = PageMeta {
        title: post.display_title().to_owned(),
        kind: PageKind::Article,
        route: slug_route(&post.slug),
        description: post.summary.clone(),
    };
    render_page(ctx, &meta, content)
}

pub fn not_found(ctx: &RenderContext<'_>) -> String {
    let content = html! {
        h1 class="page-title" { "Not found" }
        p { "This page does not exist. " a href="/" { "Back home" } "." }
    };

    let meta = PageMeta {
        title: "Not found".into(),
        kind: PageKind::Website,
        route: "/404.html".into(),
        description: None,
    };
    render_page(ctx, &meta, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::SiteConfig, nav::NavigationMenu, theme::ThemePreference, utils::date::PostDate,
    };

    fn sample_feed() -> ContentFeed {
        let mut newer = PostRecord::new("blog/newer", Some("Newer"), PostDate::parse("2024-03-01"));
        newer.tags = vec!["rust".into(), "web".into()];
        let older = PostRecord::new("blog/older", None, PostDate::parse("2023-01-01"));
        ContentFeed::new(vec![older, newer])
    }

    fn with_ctx<R>(config: &SiteConfig, f: impl FnOnce(&RenderContext<'_>) -> R) -> R {
        let menu = NavigationMenu::new(config.menu.clone());
        let ctx = RenderContext::new(config, &menu, ThemePreference::Dark, "dark".into());
        f(&ctx)
    }

    #[test]
    fn test_feed_list_order_and_attributes() {
        let html = feed_list(&sample_feed()).into_string();

        let newer = html.find("Newer").unwrap();
        let older = html.find(">blog/older<").unwrap();
        assert!(newer < older);
        assert!(html.contains(r#"data-analytics-category="Newer""#));
        assert!(html.contains(r#"data-analytics-action="click""#));
        assert!(html.contains(r#"data-analytics-label="View a blogpost""#));
        assert!(html.contains(r#"<time datetime="2024-03-01" itemprop="datePublished">March 01, 2024</time>"#));
        assert!(html.contains(r#"<li class="tag">rust</li>"#));
    }

    #[test]
    fn test_feed_list_empty() {
        let html = feed_list(&ContentFeed::default()).into_string();
        assert_eq!(
            html,
            r#"<ol class="feed" itemscope itemtype="http://schema.org/Blog"></ol>"#
        );
    }

    #[test]
    fn test_feed_item_without_date_has_no_time() {
        let feed = ContentFeed::new(vec![PostRecord::new("a", Some("A"), None)]);
        let html = feed_list(&feed).into_string();
        assert!(!html.contains("<time"));
        assert!(!html.contains("<small"));
    }

    #[test]
    fn test_home_intro_paragraphs() {
        let mut config = SiteConfig::default();
        config.site.description = "A personal blog.\n\nI code.".into();
        let html = with_ctx(&config, |ctx| home(ctx, &sample_feed()));

        assert!(html.contains("<p>A personal blog.</p><p>I code.</p>"));
        assert!(html.contains(r#"class="feed""#));
        assert!(html.contains(r#"class="header-link active" aria-current="page">Home"#));
    }

    #[test]
    fn test_blog_index_marks_blog_active() {
        let config = SiteConfig::default();
        let html = with_ctx(&config, |ctx| blog_index(ctx, &sample_feed()));
        assert!(html.contains(r#"class="header-link active" aria-current="page">Blog"#));
        assert!(html.contains(r#"<a href="/" itemprop="url" class="header-link">Home</a>"#));
    }

    #[test]
    fn test_post_page_body_and_meta() {
        let mut post = PostRecord::new("blog/hello", Some("Hello"), PostDate::parse("2024-03-01"));
        post.body = "<p>Hi <em>there</em></p>".into();
        post.summary = Some("Greeting".into());

        let config = SiteConfig::default();
        let html = with_ctx(&config, |ctx| post_page(ctx, &post));

        assert!(html.contains("<p>Hi <em>there</em></p>"));
        assert!(html.contains(r#"<h1 itemprop="headline">Hello</h1>"#));
        assert!(html.contains(r#"content="article""#));
        assert!(html.contains(r#"content="Greeting""#));
        assert!(html.contains(r#"class="header-link active" aria-current="page">Blog"#));
    }

    #[test]
    fn test_not_found_page() {
        let config = SiteConfig::default();
        let html = with_ctx(&config, not_found);
        assert!(html.contains("Not found"));
        assert!(!html.contains("aria-current"));
    }
}
