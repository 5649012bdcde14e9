//! Site building orchestration.
//!
//! ```text
//! build_site()
//!     │
//!     ├── DirectorySource::posts() ──► ContentFeed (published, newest first)
//!     │
//!     ├── prepare_output() ──► clean, style.css, copy assets/
//!     │
//!     ├── render pages ──► index.html, blog/index.html, <slug>/index.html, 404.html
//!     │
//!     └── rayon::join(build_rss, build_sitemap)
//! ```

use crate::{
    config::SiteConfig,
    content::{ContentSource, DirectorySource},
    feed::ContentFeed,
    generator::{build_rss, build_sitemap},
    log,
    logger::ProgressBars,
    nav::NavigationMenu,
    render::{
        RenderContext,
        pages::{self, BLOG_ROUTE},
        script::STYLESHEET,
    },
    theme::{FileStore, ThemeToggle},
    utils::{
        minify::{MinifyKind, minify},
        slug::slug_route,
    },
};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// File name of the not-found page, served by `folio serve` for unknown paths.
pub const NOT_FOUND_PAGE: &str = "404.html";

/// Build the site from the configured content directory.
///
/// Returns the feed that was rendered.
pub fn build_site(config: &SiteConfig) -> Result<ContentFeed> {
    let source = DirectorySource::new(&config.build.content);
    build_from_source(config, &source)
}

/// Build the site from any content source.
pub fn build_from_source(config: &SiteConfig, source: &dyn ContentSource) -> Result<ContentFeed> {
    let posts = source.posts()?;
    let total = posts.len();
    let feed = ContentFeed::new(posts);
    log!("content"; "{} posts, {} published", total, feed.len());

    prepare_output(config)?;

    let toggle = ThemeToggle::load_or(FileStore::new(&config.theme.state), config.theme.default);
    let menu = NavigationMenu::new(config.menu.clone());
    let ctx = RenderContext::new(config, &menu, toggle.preference(), toggle.root().to_attr());

    write_page(config, "/", &pages::home(&ctx, &feed))?;
    write_page(config, BLOG_ROUTE, &pages::blog_index(&ctx, &feed))?;
    write_page(config, &format!("/{NOT_FOUND_PAGE}"), &pages::not_found(&ctx))?;

    let progress = ProgressBars::new_filtered(&[("pages", feed.len())]);
    let result = feed.posts().par_iter().try_for_each(|post| {
        write_page(config, &slug_route(&post.slug), &pages::post_page(&ctx, post))
            .with_context(|| format!("Failed to write post `{}`", post.slug))?;
        if let Some(progress) = &progress {
            progress.inc(0);
        }
        Ok::<_, anyhow::Error>(())
    });
    if let Some(progress) = &progress {
        progress.finish();
    }
    result?;

    let (rss_result, sitemap_result) = rayon::join(
        || build_rss(config, &feed),
        || build_sitemap(config, &feed),
    );
    rss_result?;
    sitemap_result?;

    if feed.is_empty() {
        log!("warn"; "no published posts, check `published = true` in frontmatter");
    }
    log!("build"; "done");

    Ok(feed)
}

/// Create (or clean) the output directory, then write the stylesheet and
/// copy static assets.
fn prepare_output(config: &SiteConfig) -> Result<()> {
    let output = &config.build.output;

    if config.build.clean && output.exists() {
        fs::remove_dir_all(output).with_context(|| {
            format!("Failed to clear output directory: {}", output.display())
        })?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))?;

    fs::write(output.join("style.css"), STYLESHEET)?;
    copy_assets(&config.build.assets, output)
}

/// Copy `assets` into `output`, keeping relative paths. A missing directory
/// is not an error.
fn copy_assets(assets: &Path, output: &Path) -> Result<()> {
    if !assets.is_dir() {
        return Ok(());
    }

    let files: Vec<PathBuf> = WalkDir::new(assets)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .collect();

    files.par_iter().try_for_each(|path| {
        let relative = path.strip_prefix(assets)?;
        let dest = output.join(relative);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(path, &dest)
            .with_context(|| format!("Failed to copy asset {}", path.display()))?;
        Ok::<_, anyhow::Error>(())
    })?;

    log!("assets"; "copied {} files", files.len());
    Ok(())
}

/// Output file of a route: `/` → `index.html`, `/blog/x/` → `blog/x/index.html`,
/// `/404.html` → `404.html`.
pub fn route_to_file(output: &Path, route: &str) -> PathBuf {
    let relative = route.trim_matches('/');
    if relative.ends_with(".html") {
        output.join(relative)
    } else if relative.is_empty() {
        output.join("index.html")
    } else {
        output.join(relative).join("index.html")
    }
}

fn write_page(config: &SiteConfig, route: &str, html: &str) -> Result<()> {
    let path = route_to_file(&config.build.output, route);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let html = minify(MinifyKind::Html, html, config);
    fs::write(&path, html.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
