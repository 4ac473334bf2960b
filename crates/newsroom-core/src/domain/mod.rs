//! Domain entities - the editorial objects of the newsroom.

mod author;
mod blog_series;
mod image;
mod post;

pub use author::Author;
pub use blog_series::BlogSeries;
pub use image::Image;
pub use post::Post;

/// Blank means empty after trimming whitespace.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
