use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use newsroom_core::domain::{Author, BlogSeries, Image, Post};
use newsroom_core::error::RepoError;
use newsroom_core::ports::BaseRepository;

/// An entity the in-memory store can hold.
pub trait Record: Clone + Send + Sync + 'static {
    const ENTITY: &'static str;

    fn id(&self) -> Uuid;

    /// Describe the unique constraint `self` would break next to `other`.
    fn conflicts_with(&self, _other: &Self) -> Option<String> {
        None
    }
}

impl Record for Post {
    const ENTITY: &'static str = "post";

    fn id(&self) -> Uuid {
        self.id
    }

    fn conflicts_with(&self, other: &Self) -> Option<String> {
        match (self.slug(), other.slug()) {
            (Some(a), Some(b)) if a == b => Some(format!("slug '{}' is already taken", a)),
            _ => None,
        }
    }
}

impl Record for Author {
    const ENTITY: &'static str = "author";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for Image {
    const ENTITY: &'static str = "image";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for BlogSeries {
    const ENTITY: &'static str = "blog_series";

    fn id(&self) -> Uuid {
        self.id
    }

    fn conflicts_with(&self, other: &Self) -> Option<String> {
        (self.blog == other.blog && self.name == other.name)
            .then(|| format!("series '{}' already exists in blog '{}'", self.name, self.blog))
    }
}

/// HashMap-backed repository behind an async RwLock.
pub struct InMemoryRepository<T> {
    pub(crate) store: RwLock<HashMap<Uuid, T>>,
}

impl<T: Record> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

impl<T: Record> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> BaseRepository<T, Uuid> for InMemoryRepository<T> {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn save(&self, entity: T) -> Result<T, RepoError> {
        let mut store = self.store.write().await;

        let id = entity.id();
        if let Some(conflict) = store
            .values()
            .filter(|other| other.id() != id)
            .find_map(|other| entity.conflicts_with(other))
        {
            return Err(RepoError::Constraint(conflict));
        }

        tracing::debug!(entity = T::ENTITY, %id, "Saving record in memory");
        store.insert(id, entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        match self.store.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_and_find() {
        let repo = InMemoryRepository::<Author>::new();
        let author = Author::new("Samuel Oak".to_string());

        repo.save(author.clone()).await.unwrap();

        let found = repo.find_by_id(author.id).await.unwrap().unwrap();
        assert_eq!(found.name, "Samuel Oak");
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let repo = InMemoryRepository::<Image>::new();
        let result = repo.delete(Uuid::new_v4()).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_rejects_duplicate_series_name() {
        let repo = InMemoryRepository::<BlogSeries>::new();
        repo.save(BlogSeries::new("sports".into(), "Gym Leaders".into()))
            .await
            .unwrap();

        let result = repo
            .save(BlogSeries::new("sports".into(), "Gym Leaders".into()))
            .await;

        assert!(matches!(result, Err(RepoError::Constraint(_))));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_updating_a_record_is_not_a_conflict() {
        let repo = InMemoryRepository::<BlogSeries>::new();
        let mut series = repo
            .save(BlogSeries::new("sports".into(), "Gym Leaders".into()))
            .await
            .unwrap();

        series.description = "Weekly gym reports".to_string();
        repo.save(series).await.unwrap();

        assert_eq!(repo.len().await, 1);
    }
}
