//! Hierarchical section paths and taxonomy queries.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::Post;
use crate::error::ValidationErrors;

/// Separator of the textual form (`News/University`).
pub const SEPARATOR: char = '/';

/// A root-to-leaf path through the section hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionPath(Vec<String>);

impl SectionPath {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Parse the textual form. Leading, trailing and doubled separators are
    /// ignored, so `/News/University/` and `News/University` are the same path.
    pub fn parse(text: &str) -> Self {
        Self(
            text.split(SEPARATOR)
                .map(str::trim)
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// True when `self` equals `ancestor` or extends it with more segments.
    ///
    /// Segments compare exactly, so `news` does not fall under `News`.
    pub fn is_within(&self, ancestor: &SectionPath) -> bool {
        self.0.starts_with(&ancestor.0)
    }

    pub fn parent(&self) -> Option<SectionPath> {
        self.0.split_last().map(|(_, rest)| Self(rest.to_vec()))
    }

    pub(crate) fn validate(&self, field: &str, errors: &mut ValidationErrors) {
        for segment in &self.0 {
            if segment.trim().is_empty() {
                errors.add(field, "can't contain blank sections");
            } else if segment.contains(SEPARATOR) {
                errors.add(field, format!("section names can't contain '{}'", SEPARATOR));
            }
        }
    }
}

impl fmt::Display for SectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(&SEPARATOR.to_string()))
    }
}

impl From<&str> for SectionPath {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

/// Classification dimension a taxonomy query runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Sections,
}

/// A query for everything filed at or below a node of a hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Taxonomy {
    dimension: Dimension,
    path: SectionPath,
}

impl Taxonomy {
    pub fn new(dimension: Dimension, path: SectionPath) -> Self {
        Self { dimension, path }
    }

    pub fn sections(path: SectionPath) -> Self {
        Self::new(Dimension::Sections, path)
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn path(&self) -> &SectionPath {
        &self.path
    }

    /// Posts filed exactly at the target node or anywhere beneath it.
    /// Posts filed only at an ancestor of the target never match.
    pub fn matches(&self, post: &Post) -> bool {
        match self.dimension {
            Dimension::Sections => post.section.is_within(&self.path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn post_in(section: &[&str]) -> Post {
        let mut post = Post::new(
            "Oak arrives just in time".to_string(),
            "Ash becomes new Pokemon Champion.".to_string(),
            vec![Uuid::new_v4()],
        );
        post.section = SectionPath::new(section.iter().copied());
        post
    }

    #[test]
    fn test_section_query_matches_node_and_descendants() {
        let posts = [
            post_in(&["News"]),
            post_in(&["News", "University"]),
            post_in(&["News", "University", "Academics"]),
        ];
        let query = Taxonomy::sections(SectionPath::new(["News", "University"]));

        let matched: Vec<bool> = posts.iter().map(|p| query.matches(p)).collect();

        assert_eq!(matched, vec![false, true, true]);
    }

    #[test]
    fn test_section_query_is_case_sensitive() {
        let query = Taxonomy::sections(SectionPath::new(["News"]));
        assert!(!query.matches(&post_in(&["news", "University"])));
    }

    #[test]
    fn test_sibling_with_common_prefix_does_not_match() {
        let query = Taxonomy::sections(SectionPath::new(["News", "Uni"]));
        assert!(!query.matches(&post_in(&["News", "University"])));
    }

    #[test]
    fn test_parse_ignores_surrounding_separators() {
        let path = SectionPath::parse("/news/university/");
        assert_eq!(path, SectionPath::new(["news", "university"]));
        assert_eq!(path.to_string(), "news/university");
        assert_eq!(path.parent(), Some(SectionPath::new(["news"])));
        assert!(SectionPath::parse("").is_empty());
    }

    #[test]
    fn test_rejects_segments_with_separator() {
        let mut errors = ValidationErrors::new();
        SectionPath::new(["News/University"]).validate("section", &mut errors);
        assert!(errors.contains("section"));
    }
}
