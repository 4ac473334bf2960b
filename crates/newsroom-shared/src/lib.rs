//! # Newsroom Shared
//!
//! Wire types shared between the API server and its clients. This crate has
//! no dependency on the domain so clients can use it on its own.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
