//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Tell a key sent as `null` (`Some(None)`) apart from an absent one (`None`).
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Create or update a post.
///
/// Every field is optional: an update changes only the keys it carries. On
/// create, absent text fields stay blank and surface as validation errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostRequest {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub teaser: Option<String>,
    pub body: Option<String>,
    /// Textual section path, `News/University`.
    pub section: Option<String>,
    /// `null` unpublishes.
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub published_at: Option<Option<DateTime<Utc>>>,
    /// Video page URL. Absent leaves the embed alone, blank removes it.
    pub embed_url: Option<String>,
    pub author_ids: Option<Vec<Uuid>>,
    /// `null` detaches the lead image.
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub image_id: Option<Option<Uuid>>,
    /// Re-derive the slug from the current title and date.
    pub regenerate_slug: bool,
}

/// Listing filter for `GET /api/posts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostListQuery {
    pub section: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub subtitle: String,
    pub teaser: String,
    pub body: String,
    /// Body with embedded-media tags removed.
    pub body_text: String,
    /// Body with embedded media rendered to HTML. Only set on single-post reads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rendered_body: Option<String>,
    pub section: String,
    pub published_at: Option<DateTime<Utc>>,
    pub embed_code: String,
    pub embed_url: Option<String>,
    pub author_ids: Vec<Uuid>,
    pub image_id: Option<Uuid>,
    pub slug: Option<String>,
    pub permalink: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create or update an image's metadata. Absent keys are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageRequest {
    pub caption: Option<String>,
    pub location: Option<String>,
    pub credit: Option<String>,
    /// Calendar date the photo was taken, `YYYY-MM-DD`.
    pub date: Option<String>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub photographer_id: Option<Option<Uuid>>,
    pub original_file_name: Option<String>,
    pub original_content_type: Option<String>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub original_file_size: Option<Option<i64>>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub original_updated_at: Option<Option<DateTime<Utc>>>,
    pub published_url: Option<String>,
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageResponse {
    pub id: Uuid,
    pub caption: String,
    pub location: String,
    pub credit: String,
    pub date: NaiveDate,
    pub photographer_id: Option<Uuid>,
    pub original_file_name: String,
    pub original_content_type: String,
    pub original_file_size: Option<i64>,
    pub original_updated_at: Option<DateTime<Utc>>,
    pub published_url: String,
    pub thumbnail_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorRequest {
    pub name: String,
    pub affiliation: String,
    pub tagline: String,
    pub twitter: String,
    pub columnist: bool,
    pub biography: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorResponse {
    pub id: Uuid,
    pub name: String,
    pub affiliation: String,
    pub tagline: String,
    pub twitter: String,
    pub columnist: bool,
    pub biography: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogSeriesRequest {
    pub blog: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogSeriesResponse {
    pub id: Uuid,
    pub blog: String,
    pub name: String,
    pub description: String,
    /// Public page of the series, `/blogs/<blog>/tagged/<name>`.
    pub location: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
