//! # Newsroom Infrastructure
//!
//! Concrete implementations of the ports defined in `newsroom-core`.
//! This crate contains the repositories, the embedded-media renderer and
//! token validation.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory only
//! - `postgres` - PostgreSQL repositories via SeaORM
//! - `auth` - JWT token validation

pub mod database;
pub mod media;
pub mod memory;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports - In-Memory
pub use media::MediaRenderer;
pub use memory::{
    InMemoryAuthorRepository, InMemoryBlogSeriesRepository, InMemoryImageRepository,
    InMemoryPostRepository,
};

#[cfg(feature = "auth")]
pub use auth::{JwtConfig, JwtTokenService};

pub use database::DatabaseConfig;

// Re-exports - PostgreSQL
#[cfg(feature = "postgres")]
pub use database::{
    PostgresAuthorRepository, PostgresBlogSeriesRepository, PostgresImageRepository,
    PostgresPostRepository,
};
