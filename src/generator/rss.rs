//! RSS feed generation.
//!
//! The channel lists the same published posts as the home page, in the same
//! order.

use crate::{
    config::SiteConfig,
    content::PostRecord,
    feed::ContentFeed,
    log,
    utils::{
        minify::{MinifyKind, minify},
        slug::slug_route,
    },
};
use anyhow::{Context, Result, anyhow};
use regex::Regex;
use rss::{CategoryBuilder, ChannelBuilder, GuidBuilder, ItemBuilder, validation::Validate};
use std::{fs, sync::LazyLock};

/// Build the RSS feed if enabled in config.
pub fn build_rss(config: &SiteConfig, feed: &ContentFeed) -> Result<()> {
    if config.build.rss.enable {
        write_rss(config, &rss_xml(config, feed)?)?;
    }
    Ok(())
}

/// Render and validate the channel.
fn rss_xml(config: &SiteConfig, feed: &ContentFeed) -> Result<String> {
    let site = &config.site;
    let author = rss_author(config);
    let items: Vec<_> = feed
        .posts()
        .iter()
        .map(|post| post_to_item(post, config, &author))
        .collect();

    let channel = ChannelBuilder::default()
        .title(&site.title)
        .link(config.page_url("/"))
        .description(&site.description)
        .language(site.language.clone())
        .generator("folio".to_owned())
        .items(items)
        .build();

    channel
        .validate()
        .map_err(|e| anyhow!("rss validation failed: {e}"))?;
    Ok(channel.to_string())
}

fn write_rss(config: &SiteConfig, xml: &str) -> Result<()> {
    let xml = minify(MinifyKind::Xml, xml, config);
    let path = config.build.output.join(&config.build.rss.path);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, xml.as_bytes())
        .with_context(|| format!("Failed to write rss feed to {}", path.display()))?;

    log!("rss"; "{}", path.file_name().unwrap_or_default().to_string_lossy());
    Ok(())
}

fn post_to_item(post: &PostRecord, config: &SiteConfig, author: &str) -> rss::Item {
    let link = config.page_url(&slug_route(&post.slug));
    let categories = post
        .tags
        .iter()
        .map(|tag| CategoryBuilder::default().name(tag.as_str()).build())
        .collect::<Vec<_>>();

    ItemBuilder::default()
        .title(post.display_title().to_owned())
        .link(Some(link.clone()))
        .guid(GuidBuilder::default().permalink(true).value(link).build())
        .description(post.summary.clone())
        .pub_date(post.date.map(|d| d.to_rfc2822()))
        .author(author.to_owned())
        .categories(categories)
        .build()
}

/// Author in RSS form: `email@example.com (Name)`.
///
/// `[site].author` is used as is when it already has that form, otherwise
/// it is combined with `[site].email`.
fn rss_author(config: &SiteConfig) -> String {
    static RE_VALID_AUTHOR: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}[ \t]*\([^)]+\)$").unwrap()
    });

    let author = &config.site.author;
    if RE_VALID_AUTHOR.is_match(author) {
        author.clone()
    } else {
        format!("{} ({author})", config.site.email)
    }
}
