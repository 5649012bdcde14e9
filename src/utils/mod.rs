//! Small helpers shared by content loading, rendering and output.

pub mod date;
pub mod minify;
pub mod slug;
