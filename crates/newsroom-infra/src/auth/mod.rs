//! Token validation for editorial endpoints.

mod jwt;

pub use jwt::{JwtConfig, JwtTokenService};
