//! Time-based default scope for posts.

use std::borrow::Borrow;

use chrono::{DateTime, Utc};

use crate::domain::Post;

/// Visibility predicate evaluated at a fixed instant.
///
/// A post is visible when it has a publication time and that time is not
/// after `now`. Nothing is stored on the post, so querying again with a later
/// instant picks up posts whose publication time has since passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    now: DateTime<Utc>,
}

impl Visibility {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    pub fn admits(&self, published_at: Option<DateTime<Utc>>) -> bool {
        matches!(published_at, Some(at) if at <= self.now)
    }

    pub fn includes(&self, post: &Post) -> bool {
        self.admits(post.published_at)
    }

    /// Keep only the visible posts, preserving input order.
    pub fn filter<I>(self, posts: I) -> impl Iterator<Item = I::Item>
    where
        I: IntoIterator,
        I::Item: Borrow<Post>,
    {
        posts
            .into_iter()
            .filter(move |post| self.includes(<I::Item as Borrow<Post>>::borrow(post)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use uuid::Uuid;

    fn post_published(published_at: Option<DateTime<Utc>>) -> Post {
        let mut post = Post::new(
            "Oak arrives just in time".to_string(),
            "**Pikachu** wrecks everyone. The End.".to_string(),
            vec![Uuid::new_v4()],
        );
        post.published_at = published_at;
        post
    }

    #[test]
    fn test_excludes_unpublished_and_future_posts() {
        let now = Utc::now();
        let posts = vec![
            post_published(None),
            post_published(Some(now - TimeDelta::seconds(1))),
            post_published(Some(now + TimeDelta::seconds(1))),
        ];

        let visible: Vec<&Post> = Visibility::at(now).filter(&posts).collect();

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, posts[1].id);
    }

    #[test]
    fn test_includes_post_published_exactly_now() {
        let now = Utc::now();
        assert!(Visibility::at(now).admits(Some(now)));
    }

    #[test]
    fn test_uses_the_instant_of_the_query() {
        let now = Utc::now();
        let scheduled = post_published(Some(now + TimeDelta::seconds(1)));

        assert!(!Visibility::at(now).includes(&scheduled));
        assert!(Visibility::at(now + TimeDelta::seconds(2)).includes(&scheduled));
        assert_eq!(scheduled.published_at, Some(now + TimeDelta::seconds(1)));
    }
}
