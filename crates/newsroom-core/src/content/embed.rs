//! Video embed codes and the URLs editors paste in.

use thiserror::Error;
use url::Url;

/// Canonical watch URL, protocol-relative so pages work over http and https.
pub const WATCH_URL_PREFIX: &str = "//www.youtube.com/watch?v=";

/// Iframe source for a video player.
pub const EMBED_URL_PREFIX: &str = "//www.youtube.com/embed/";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmbedUrlError {
    #[error("is not a valid URL: {0}")]
    Malformed(String),

    #[error("is not from a supported video provider: {0}")]
    UnsupportedProvider(String),

    #[error("does not contain a video id: {0}")]
    MissingVideoId(String),
}

/// The watch URL for `embed_code`, or `None` when there is no embed.
pub fn watch_url(embed_code: &str) -> Option<String> {
    if embed_code.is_empty() {
        None
    } else {
        Some(format!("{}{}", WATCH_URL_PREFIX, embed_code))
    }
}

/// Whether `code` looks like a provider video id.
pub fn is_valid_code(code: &str) -> bool {
    !code.is_empty()
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Extract the video id from a pasted URL.
///
/// Accepted forms: `youtube.com/watch?v=<id>` (with or without `www.`/`m.`),
/// `youtu.be/<id>`, `youtube.com/embed/<id>`, `youtube.com/v/<id>` and
/// `youtube.com/shorts/<id>`, with an http(s) scheme, no scheme, or the
/// protocol-relative `//` prefix.
pub fn parse_embed_code(input: &str) -> Result<String, EmbedUrlError> {
    let input = input.trim();
    let url = parse_lenient(input)?;

    let host = url
        .host_str()
        .ok_or_else(|| EmbedUrlError::Malformed(input.to_string()))?
        .to_ascii_lowercase();
    let host = host
        .strip_prefix("www.")
        .or_else(|| host.strip_prefix("m."))
        .unwrap_or(&host);

    let mut segments = url.path_segments().into_iter().flatten();
    let code = match host {
        "youtube.com" | "youtube-nocookie.com" => match segments.next() {
            Some("watch") => url
                .query_pairs()
                .find(|(key, _)| key == "v")
                .map(|(_, value)| value.into_owned()),
            Some("embed" | "v" | "shorts") => segments.next().map(str::to_string),
            _ => None,
        },
        "youtu.be" => segments.next().map(str::to_string),
        _ => return Err(EmbedUrlError::UnsupportedProvider(input.to_string())),
    };

    match code {
        Some(code) if is_valid_code(&code) => Ok(code),
        _ => Err(EmbedUrlError::MissingVideoId(input.to_string())),
    }
}

fn parse_lenient(input: &str) -> Result<Url, EmbedUrlError> {
    let candidate = if input.starts_with("//") {
        format!("https:{}", input)
    } else if input.contains("://") {
        input.to_string()
    } else {
        format!("https://{}", input)
    };

    let url = Url::parse(&candidate).map_err(|_| EmbedUrlError::Malformed(input.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(EmbedUrlError::Malformed(input.to_string())),
    }
}
