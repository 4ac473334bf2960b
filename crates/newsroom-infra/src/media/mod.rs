//! Embedded-media renderer: turns `{{Image:..}}` and `{{Video:..}}` tags into
//! HTML using a preloaded set of images.

use std::collections::HashMap;

use html_escape::{encode_double_quoted_attribute, encode_text};
use uuid::Uuid;

use newsroom_core::content::embed::{self, EMBED_URL_PREFIX};
use newsroom_core::content::media::{self, MediaKind, MediaTag};
use newsroom_core::domain::Image;
use newsroom_core::ports::{EmbeddedMediaResolver, ResolverError};

/// Renders a body against the images it references.
///
/// The renderer is synchronous; callers load the images named by
/// `Post::media_tags` first and hand them over here.
#[derive(Debug, Default)]
pub struct MediaRenderer {
    images: HashMap<Uuid, Image>,
}

impl MediaRenderer {
    pub fn new(images: impl IntoIterator<Item = Image>) -> Self {
        Self {
            images: images.into_iter().map(|image| (image.id, image)).collect(),
        }
    }

    /// Image ids referenced by `tags`, ignoring ids that are not UUIDs.
    pub fn image_ids(tags: &[MediaTag]) -> Vec<Uuid> {
        let mut ids: Vec<Uuid> = tags
            .iter()
            .filter(|tag| tag.kind == MediaKind::Image)
            .filter_map(|tag| Uuid::parse_str(&tag.id).ok())
            .collect();
        ids.sort();
        ids.dedup();
        ids
    }

    fn render_tag(&self, tag: &MediaTag) -> Result<String, ResolverError> {
        match &tag.kind {
            MediaKind::Image => self.render_image(tag),
            MediaKind::Video => render_video(tag),
            MediaKind::Other(name) => Err(ResolverError::UnsupportedTag(name.clone())),
        }
    }

    fn render_image(&self, tag: &MediaTag) -> Result<String, ResolverError> {
        let image = Uuid::parse_str(&tag.id)
            .ok()
            .and_then(|id| self.images.get(&id))
            .ok_or_else(|| ResolverError::MissingAsset {
                kind: tag.kind.to_string(),
                id: tag.id.clone(),
            })?;

        let mut html = format!(
            r#"<figure class="embedded-image"><img src="{}" alt="{}">"#,
            encode_double_quoted_attribute(&image.published_url),
            encode_double_quoted_attribute(&image.caption),
        );
        if !image.caption.is_empty() || !image.credit.is_empty() {
            html.push_str("<figcaption>");
            html.push_str(&encode_text(&image.caption));
            if !image.credit.is_empty() {
                html.push_str(r#" <span class="credit">"#);
                html.push_str(&encode_text(&image.credit));
                html.push_str("</span>");
            }
            html.push_str("</figcaption>");
        }
        html.push_str("</figure>");
        Ok(html)
    }
}

fn render_video(tag: &MediaTag) -> Result<String, ResolverError> {
    if !embed::is_valid_code(&tag.id) {
        return Err(ResolverError::InvalidReference {
            kind: tag.kind.to_string(),
            id: tag.id.clone(),
        });
    }
    Ok(format!(
        r#"<iframe class="embedded-video" src="{}{}" allowfullscreen></iframe>"#,
        EMBED_URL_PREFIX, tag.id
    ))
}

impl EmbeddedMediaResolver for MediaRenderer {
    fn render(&self, body: &str) -> Result<String, ResolverError> {
        media::replace_tags(body, |tag| self.render_tag(tag))
    }
}
