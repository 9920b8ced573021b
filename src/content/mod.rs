//! Content module - documents, posts, and the queryable index

pub mod frontmatter;
mod index;
pub mod loader;
mod markdown;
mod post;

pub use index::PostIndex;
pub use markdown::MarkdownRenderer;
pub use post::{Metadata, Post, RawDocument};
