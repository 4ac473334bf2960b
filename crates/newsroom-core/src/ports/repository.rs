use async_trait::async_trait;
use uuid::Uuid;

use crate::content::{Taxonomy, Visibility};
use crate::domain::{Author, BlogSeries, Image, Post};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository.
///
/// Public listings go through `find_visible` and `find_in_taxonomy`, which
/// apply the visibility scope at the instant the caller supplies.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// Visible posts, newest publication first.
    async fn find_visible(&self, scope: Visibility) -> Result<Vec<Post>, RepoError>;

    /// Visible posts filed at or below the taxonomy node, newest first.
    async fn find_in_taxonomy(
        &self,
        taxonomy: &Taxonomy,
        scope: Visibility,
    ) -> Result<Vec<Post>, RepoError>;

    /// Any post, draft or not, by its full slug (`YYYY/MM/DD/body`).
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError>;
}

/// Author repository.
#[async_trait]
pub trait AuthorRepository: BaseRepository<Author, Uuid> {
    async fn find_all(&self) -> Result<Vec<Author>, RepoError>;

    /// The authors among `ids` that exist.
    async fn find_many(&self, ids: &[Uuid]) -> Result<Vec<Author>, RepoError>;
}

/// Image repository.
#[async_trait]
pub trait ImageRepository: BaseRepository<Image, Uuid> {
    async fn find_all(&self) -> Result<Vec<Image>, RepoError>;

    /// The images among `ids` that exist.
    async fn find_many(&self, ids: &[Uuid]) -> Result<Vec<Image>, RepoError>;
}

/// Blog series repository.
#[async_trait]
pub trait BlogSeriesRepository: BaseRepository<BlogSeries, Uuid> {
    async fn find_all(&self) -> Result<Vec<BlogSeries>, RepoError>;

    async fn find_by_name(&self, blog: &str, name: &str) -> Result<Option<BlogSeries>, RepoError>;
}
