//! In-memory repositories - used when no database is configured, and in tests.
//!
//! Note: Data is lost on process restart.

mod catalog;
mod posts;
mod store;

use newsroom_core::domain::{Author, BlogSeries, Image, Post};

pub use store::{InMemoryRepository, Record};

pub type InMemoryPostRepository = InMemoryRepository<Post>;
pub type InMemoryAuthorRepository = InMemoryRepository<Author>;
pub type InMemoryImageRepository = InMemoryRepository<Image>;
pub type InMemoryBlogSeriesRepository = InMemoryRepository<BlogSeries>;
