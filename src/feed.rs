//! The post feed shown on the home and blog pages.
//!
//! Only published posts make it in, newest first. Posts with the same date
//! keep their source order, and undated posts go last.

use crate::{
    analytics::{AnalyticsEvent, AnalyticsSink, emit},
    content::PostRecord,
    utils::slug::slug_route,
};

/// Published posts in display order.
#[derive(Debug, Clone, Default)]
pub struct ContentFeed {
    posts: Vec<PostRecord>,
}

impl ContentFeed {
    pub fn new(posts: impl IntoIterator<Item = PostRecord>) -> Self {
        let mut posts: Vec<_> = posts.into_iter().filter(|p| p.published).collect();
        // sort_by is stable
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        Self { posts }
    }

    pub fn posts(&self) -> &[PostRecord] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn entries(&self) -> impl ExactSizeIterator<Item = FeedEntry<'_>> {
        self.posts.iter().map(FeedEntry::new)
    }

    /// Consume the feed. The returned iterator cannot be restarted.
    pub fn into_entries(self) -> impl ExactSizeIterator<Item = OwnedFeedEntry> {
        self.posts.into_iter().map(|post| OwnedFeedEntry {
            title: post.display_title().to_owned(),
            date: post.date.map(|d| d.to_display()).unwrap_or_default(),
            link: slug_route(&post.slug),
            tags: post.tags,
        })
    }
}

/// One rendered line of the feed, borrowing its post.
#[derive(Debug, Clone, Copy)]
pub struct FeedEntry<'a> {
    post: &'a PostRecord,
}

impl<'a> FeedEntry<'a> {
    fn new(post: &'a PostRecord) -> Self {
        Self { post }
    }

    pub fn post(&self) -> &'a PostRecord {
        self.post
    }

    pub fn title(&self) -> &'a str {
        self.post.display_title()
    }

    /// Display date, empty for undated posts.
    pub fn date(&self) -> String {
        self.post.date.map(|d| d.to_display()).unwrap_or_default()
    }

    pub fn tags(&self) -> &'a [String] {
        &self.post.tags
    }

    pub fn link(&self) -> String {
        slug_route(&self.post.slug)
    }

    /// Analytics event recorded when this entry's link is followed.
    pub fn click_event(&self) -> AnalyticsEvent {
        AnalyticsEvent::post_click(self.title())
    }

    /// Follow the link: report the click to `sink` without waiting on it and
    /// return where to navigate.
    pub fn activate(&self, sink: &dyn AnalyticsSink) -> String {
        emit(sink, &self.click_event());
        self.link()
    }
}

/// Owned counterpart of [`FeedEntry`], yielded by [`ContentFeed::into_entries`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedFeedEntry {
    pub title: String,
    pub date: String,
    pub tags: Vec<String>,
    pub link: String,
}
