use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationErrors;

/// Image entity - metadata for a stored photo or graphic.
///
/// The binary lives in external storage; this record only knows the URLs it
/// was published under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub id: Uuid,
    pub caption: String,
    pub location: String,
    pub credit: String,
    /// Day the photo was taken.
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

impl Image {
    pub fn new(date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            caption: String::new(),
            location: String::new(),
            credit: String::new(),
            date,
            photographer_id: None,
            original_file_name: String::new(),
            original_content_type: String::new(),
            original_file_size: None,
            original_updated_at: None,
            published_url: String::new(),
            thumbnail_url: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if matches!(self.original_file_size, Some(size) if size < 0) {
            errors.add("original_file_size", "must be greater than or equal to 0");
        }
        if !self.original_content_type.is_empty() && !self.original_content_type.starts_with("image/")
        {
            errors.add("original_content_type", "must be an image type");
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image() -> Image {
        Image::new(NaiveDate::from_ymd_opt(2013, 1, 1).unwrap())
    }

    #[test]
    fn test_new_image_is_valid() {
        assert!(image().validate().is_ok());
    }

    #[test]
    fn test_rejects_negative_size_and_non_image_type() {
        let mut image = image();
        image.original_file_size = Some(-1);
        image.original_content_type = "text/plain".to_string();

        let errors = image.validate().unwrap_err();

        assert!(errors.contains("original_file_size"));
        assert!(errors.contains("original_content_type"));
    }
}
