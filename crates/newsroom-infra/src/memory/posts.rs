use async_trait::async_trait;

use newsroom_core::content::{Taxonomy, Visibility};
use newsroom_core::domain::Post;
use newsroom_core::error::RepoError;
use newsroom_core::ports::PostRepository;

use super::store::InMemoryRepository;

fn newest_first(mut posts: Vec<Post>) -> Vec<Post> {
    posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    posts
}

#[async_trait]
impl PostRepository for InMemoryRepository<Post> {
    async fn find_visible(&self, scope: Visibility) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        let posts = scope.filter(store.values()).cloned().collect();
        Ok(newest_first(posts))
    }

    async fn find_in_taxonomy(
        &self,
        taxonomy: &Taxonomy,
        scope: Visibility,
    ) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        let posts = scope
            .filter(store.values())
            .filter(|post| taxonomy.matches(post))
            .cloned()
            .collect();
        Ok(newest_first(posts))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.values().find(|post| post.slug() == Some(slug)).cloned())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeDelta, Utc};
    use uuid::Uuid;

    use newsroom_core::content::{SectionPath, SlugConfig};
    use newsroom_core::ports::BaseRepository;

    use super::*;

    fn article(section: &[&str], published_at: Option<DateTime<Utc>>) -> Post {
        let mut post = Post::new(
            format!("Report from {}", section.join(" ")),
            "**Pikachu** wrecks everyone. The End.".to_string(),
            vec![Uuid::new_v4()],
        );
        post.section = SectionPath::new(section.iter().copied());
        post.published_at = published_at;
        post
    }

    #[tokio::test]
    async fn test_default_scope_is_evaluated_at_query_time() {
        let now = Utc::now();
        let repo = InMemoryRepository::<Post>::new();
        let draft = repo.save(article(&["News"], None)).await.unwrap();
        let past = repo
            .save(article(&["News"], Some(now - TimeDelta::seconds(1))))
            .await
            .unwrap();
        let future = repo
            .save(article(&["News"], Some(now + TimeDelta::seconds(1))))
            .await
            .unwrap();

        let visible: Vec<Uuid> = repo
            .find_visible(Visibility::at(now))
            .await
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(visible, vec![past.id]);

        let later: Vec<Uuid> = repo
            .find_visible(Visibility::at(now + TimeDelta::seconds(2)))
            .await
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(later, vec![future.id, past.id]);
        assert!(!later.contains(&draft.id));
    }

    #[tokio::test]
    async fn test_section_query_includes_children_but_not_parents() {
        let now = Utc::now();
        let published = Some(now - TimeDelta::hours(1));
        let repo = InMemoryRepository::<Post>::new();
        let parent = repo.save(article(&["News"], published)).await.unwrap();
        let exact = repo
            .save(article(&["News", "University"], published))
            .await
            .unwrap();
        let child = repo
            .save(article(&["News", "University", "Academics"], published))
            .await
            .unwrap();

        let taxonomy = Taxonomy::sections(SectionPath::new(["News", "University"]));
        let found = repo
            .find_in_taxonomy(&taxonomy, Visibility::at(now))
            .await
            .unwrap();

        assert_eq!(found.len(), 2);
        assert!(found.iter().any(|p| p.id == exact.id));
        assert!(found.iter().any(|p| p.id == child.id));
        assert!(!found.iter().any(|p| p.id == parent.id));
    }

    #[tokio::test]
    async fn test_section_query_respects_visibility() {
        let now = Utc::now();
        let repo = InMemoryRepository::<Post>::new();
        repo.save(article(&["News", "University"], None))
            .await
            .unwrap();

        let taxonomy = Taxonomy::sections(SectionPath::new(["News"]));
        let found = repo
            .find_in_taxonomy(&taxonomy, Visibility::at(now))
            .await
            .unwrap();

        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_find_by_slug_and_unique_slugs() {
        let repo = InMemoryRepository::<Post>::new();
        let published = Some(Utc::now());
        let mut first = article(&["News"], published);
        first.ensure_slug(&SlugConfig::default());
        let slug = first.slug().unwrap().to_string();
        repo.save(first.clone()).await.unwrap();

        let found = repo.find_by_slug(&slug).await.unwrap().unwrap();
        assert_eq!(found.id, first.id);

        let mut clash = article(&["News"], published);
        clash.ensure_slug(&SlugConfig::default());
        assert!(matches!(
            repo.save(clash).await,
            Err(RepoError::Constraint(_))
        ));
    }
}
