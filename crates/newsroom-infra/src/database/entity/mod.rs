//! SeaORM entities for the content schema.

pub mod author;
pub mod blog_series;
pub mod image;
pub mod post;
pub mod post_author;
