//! Blog content.
//!
//! The site never reads storage itself: the build is handed a
//! [`ContentSource`] and consumes the [`PostRecord`]s it returns.

mod error;
mod post;
mod source;

pub use error::ContentError;
pub use post::{PostRecord, parse_post};
pub use source::{DirectorySource, MemorySource};

/// Read-only provider of post records.
pub trait ContentSource {
    /// All posts, published or not, in source order.
    fn posts(&self) -> Result<Vec<PostRecord>, ContentError>;
}
