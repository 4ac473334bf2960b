//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod clock;
mod media;
mod repository;

pub use auth::{AuthError, TokenClaims, TokenService};
pub use clock::{Clock, FixedClock, SystemClock};
pub use media::{EmbeddedMediaResolver, ResolverError};
pub use repository::{
    AuthorRepository, BaseRepository, BlogSeriesRepository, ImageRepository, PostRepository,
};
