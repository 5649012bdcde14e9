//! Feed and sitemap files written next to the pages.

pub mod rss;
pub mod sitemap;

pub use self::rss::build_rss;
pub use sitemap::build_sitemap;
