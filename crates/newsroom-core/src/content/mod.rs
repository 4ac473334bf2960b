//! The post logic engine: pure rules over a post's raw fields.
//!
//! Nothing here touches storage or the clock. Callers pass the instant and
//! the configuration explicitly, which keeps every rule deterministic.

pub mod embed;
pub mod media;
pub mod section;
pub mod slug;
pub mod visibility;

pub use embed::EmbedUrlError;
pub use media::{MediaKind, MediaTag};
pub use section::{Dimension, SectionPath, Taxonomy};
pub use slug::SlugConfig;
pub use visibility::Visibility;
