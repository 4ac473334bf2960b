//! # Newsroom Core
//!
//! The domain layer of the Newsroom content backend.
//! This crate contains the editorial entities and the post logic engine
//! (visibility, sections, slugs, embedded media, video embeds) with zero
//! infrastructure dependencies. Storage, rendering and authentication are
//! reached through the traits in [`ports`].

pub mod config;
pub mod content;
pub mod domain;
pub mod error;
pub mod ports;

pub use config::ContentConfig;
pub use error::{DomainError, RepoError, ValidationErrors};
