use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::is_blank;
use crate::error::ValidationErrors;

/// Author entity - a writer or photographer credited on posts and images.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub id: Uuid,
    pub name: String,
    pub affiliation: String,
    pub tagline: String,
    /// Twitter handle without the leading `@`.
    pub twitter: String,
    pub columnist: bool,
    pub biography: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Author {
    pub fn new(name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            affiliation: String::new(),
            tagline: String::new(),
            twitter: String::new(),
            columnist: false,
            biography: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Accept `@handle` or `handle`.
    pub fn set_twitter(&mut self, handle: &str) {
        self.twitter = handle.trim().trim_start_matches('@').to_string();
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if is_blank(&self.name) {
            errors.add("name", "can't be blank");
        }
        if self.twitter.contains(char::is_whitespace) {
            errors.add("twitter", "can't contain spaces");
        }
        errors.into_result()
    }
}
