use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;
use uuid::Uuid;

use super::is_blank;
use crate::error::ValidationErrors;

/// BlogSeries entity - a named, recurring thread of posts within a blog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogSeries {
    pub id: Uuid,
    /// Short name of the blog the series belongs to.
    pub blog: String,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogSeries {
    pub fn new(blog: String, name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            blog,
            name,
            description: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Public listing of the series' posts, `/blogs/<blog>/tagged/<name>`.
    pub fn tagged_path(&self) -> String {
        format!("/blogs/{}/tagged/{}", encode(&self.blog), encode(&self.name))
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if is_blank(&self.blog) {
            errors.add("blog", "can't be blank");
        }
        if is_blank(&self.name) {
            errors.add("name", "can't be blank");
        }
        errors.into_result()
    }
}

fn encode(segment: &str) -> String {
    form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_path_is_url_safe() {
        let series = BlogSeries::new("sports".to_string(), "Gym Leaders & Rivals".to_string());
        assert_eq!(
            series.tagged_path(),
            "/blogs/sports/tagged/Gym%20Leaders%20%26%20Rivals"
        );
    }

    #[test]
    fn test_requires_blog_and_name() {
        let errors = BlogSeries::new(String::new(), String::new())
            .validate()
            .unwrap_err();
        assert!(errors.contains("blog"));
        assert!(errors.contains("name"));
    }
}
