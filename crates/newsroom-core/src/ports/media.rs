//! Rendering of embedded-media tags into real markup.

use thiserror::Error;

/// Turns a raw post body into display markup.
///
/// Implementations replace every `{{Kind:id}}` tag with the widget it stands
/// for. Callers return the output untouched and propagate failures as they are.
pub trait EmbeddedMediaResolver: Send + Sync {
    fn render(&self, body: &str) -> Result<String, ResolverError>;
}

#[derive(Debug, Error)]
pub enum ResolverError {
    #[error("{kind} {id} referenced in the body was not found")]
    MissingAsset { kind: String, id: String },

    #[error("{kind} reference '{id}' is not valid")]
    InvalidReference { kind: String, id: String },

    #[error("Unsupported embedded media tag: {0}")]
    UnsupportedTag(String),
}
