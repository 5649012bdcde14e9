//! Output minification, skipped when `[build].minify` is off.

use crate::config::SiteConfig;
use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

/// Whitespace-only runs between two tags.
static RE_INTER_TAG_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r">\s+<").unwrap());

/// Kind of document being written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinifyKind {
    Html,
    Xml,
}

/// Minify `content` if the site has minification enabled.
pub fn minify<'a>(kind: MinifyKind, content: &'a str, config: &SiteConfig) -> Cow<'a, str> {
    if !config.build.minify {
        return Cow::Borrowed(content);
    }
    match kind {
        MinifyKind::Html => minify_html_page(content),
        MinifyKind::Xml => Cow::Owned(minify_xml(content)),
    }
}

fn minify_html_page(html: &str) -> Cow<'_, str> {
    let mut cfg = minify_html::Cfg::new();
    cfg.keep_closing_tags = true;
    cfg.keep_html_and_head_opening_tags = true;
    cfg.keep_comments = false;
    cfg.minify_css = true;
    cfg.minify_js = true;

    let bytes = minify_html::minify(html.as_bytes(), &cfg);
    // Output of UTF-8 input is UTF-8; fall back to the input otherwise
    match String::from_utf8(bytes) {
        Ok(min) => Cow::Owned(min),
        Err(_) => Cow::Borrowed(html),
    }
}

/// Drop indentation and line breaks between elements. Text nodes keep
/// their inner line breaks.
fn minify_xml(xml: &str) -> String {
    RE_INTER_TAG_SPACE.replace_all(xml.trim(), "><").into_owned()
}
