//! HTML rendering.
//!
//! Every page goes through [`render_page`], which puts the content inside
//! the fixed chrome (navigation, donation panel, footer) and writes the
//! page's discovery metadata into `<head>` so crawlers see it without
//! running any script.

pub mod chrome;
pub mod pages;
pub mod script;

use crate::{config::SiteConfig, nav::NavigationMenu, theme::ThemePreference};
use chrono::Datelike;
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Everything page rendering reads, threaded explicitly instead of globals.
pub struct RenderContext<'a> {
    pub config: &'a SiteConfig,
    pub menu: &'a NavigationMenu,
    /// Theme the pages are rendered in before any client preference applies.
    pub theme: ThemePreference,
    /// `class` attribute of `<html>`, from the theme toggle's root classes.
    pub root_class: String,
    /// Copyright year in the footer.
    pub year: i32,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        config: &'a SiteConfig,
        menu: &'a NavigationMenu,
        theme: ThemePreference,
        root_class: String,
    ) -> Self {
        Self {
            config,
            menu,
            theme,
            root_class,
            year: chrono::Local::now().year(),
        }
    }
}

/// `og:type` of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Website,
    Article,
}

impl PageKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Article => "article",
        }
    }
}

/// Per-page discovery metadata.
#[derive(Debug, Clone)]
pub struct PageMeta {
    pub title: String,
    pub kind: PageKind,
    /// Canonical route, e.g. `/blog/hello/`.
    pub route: String,
    pub description: Option<String>,
}

/// Render a complete HTML document.
pub fn render_page(ctx: &RenderContext<'_>, meta: &PageMeta, content: Markup) -> String {
    let site = &ctx.config.site;
    let canonical = ctx.config.page_url(&meta.route);
    let description = meta.description.as_deref().unwrap_or(&site.description);
    let full_title = if meta.title == site.title {
        meta.title.clone()
    } else {
        format!("{} | {}", meta.title, site.title)
    };
    let root_class = Some(ctx.root_class.as_str()).filter(|c| !c.is_empty());
    let feed_href = ctx
        .config
        .build
        .rss
        .enable
        .then(|| format!("/{}", ctx.config.build.rss.path.to_string_lossy()));

    let markup = html! {
        (DOCTYPE)
        html lang=(site.language) class=[root_class] {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="color-scheme" content="dark light";
                title { (full_title) }
                @if !description.is_empty() {
                    meta name="description" content=(description);
                }
                meta name="author" content=(site.author);
                meta property="og:title" content=(meta.title);
                meta property="og:type" content=(meta.kind.as_str());
                meta property="og:url" content=(canonical);
                link rel="canonical" href=(canonical);
                @if let Some(href) = &feed_href {
                    link rel="alternate" type="application/rss+xml" title=(site.title) href=(href);
                }
                link rel="stylesheet" href="/style.css";
                script { (PreEscaped(script::theme_bootstrap(ctx.theme))) }
            }
            body {
                (chrome::header(ctx, &meta.route))
                main { (content) }
                (chrome::donation_panel(ctx))
                (chrome::footer(ctx))
                script { (PreEscaped(script::client(ctx.config))) }
            }
        }
    };
    markup.into_string()
}
