use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use newsroom_core::domain::{Author, BlogSeries, Image};
use newsroom_core::error::RepoError;
use newsroom_core::ports::{AuthorRepository, BlogSeriesRepository, ImageRepository};

use super::store::InMemoryRepository;

/// Records for `ids` in the order asked for, skipping unknown ids.
fn pick<T: Clone>(store: &HashMap<Uuid, T>, ids: &[Uuid]) -> Vec<T> {
    ids.iter().filter_map(|id| store.get(id).cloned()).collect()
}

#[async_trait]
impl AuthorRepository for InMemoryRepository<Author> {
    async fn find_all(&self) -> Result<Vec<Author>, RepoError> {
        let mut authors: Vec<Author> = self.store.read().await.values().cloned().collect();
        authors.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(authors)
    }

    async fn find_many(&self, ids: &[Uuid]) -> Result<Vec<Author>, RepoError> {
        Ok(pick(&*self.store.read().await, ids))
    }
}

#[async_trait]
impl ImageRepository for InMemoryRepository<Image> {
    async fn find_all(&self) -> Result<Vec<Image>, RepoError> {
        let mut images: Vec<Image> = self.store.read().await.values().cloned().collect();
        images.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(images)
    }

    async fn find_many(&self, ids: &[Uuid]) -> Result<Vec<Image>, RepoError> {
        Ok(pick(&*self.store.read().await, ids))
    }
}

#[async_trait]
impl BlogSeriesRepository for InMemoryRepository<BlogSeries> {
    async fn find_all(&self) -> Result<Vec<BlogSeries>, RepoError> {
        let mut series: Vec<BlogSeries> = self.store.read().await.values().cloned().collect();
        series.sort_by(|a, b| (&a.blog, &a.name).cmp(&(&b.blog, &b.name)));
        Ok(series)
    }

    async fn find_by_name(&self, blog: &str, name: &str) -> Result<Option<BlogSeries>, RepoError> {
        Ok(self
            .store
            .read()
            .await
            .values()
            .find(|s| s.blog == blog && s.name == name)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsroom_core::ports::BaseRepository;

    #[tokio::test]
    async fn test_find_many_keeps_requested_order_and_skips_unknown() {
        let repo = InMemoryRepository::<Author>::new();
        let ash = repo.save(Author::new("Ash".into())).await.unwrap();
        let misty = repo.save(Author::new("Misty".into())).await.unwrap();

        let found = repo
            .find_many(&[misty.id, Uuid::new_v4(), ash.id])
            .await
            .unwrap();

        let names: Vec<&str> = found.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Misty", "Ash"]);
    }

    #[tokio::test]
    async fn test_find_series_by_name() {
        let repo = InMemoryRepository::<BlogSeries>::new();
        repo.save(BlogSeries::new("sports".into(), "Gym Leaders".into()))
            .await
            .unwrap();

        assert!(
            repo.find_by_name("sports", "Gym Leaders")
                .await
                .unwrap()
                .is_some()
        );
        assert!(repo.find_by_name("news", "Gym Leaders").await.unwrap().is_none());
    }
}
