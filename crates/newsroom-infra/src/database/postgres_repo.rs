//! PostgreSQL repository implementations.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, LikeExpr};
use sea_orm::{
    ColumnTrait, Condition, DbConn, EntityTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};
use uuid::Uuid;

use newsroom_core::content::{Dimension, Taxonomy, Visibility};
use newsroom_core::domain::{Author, BlogSeries, Image, Post};
use newsroom_core::error::RepoError;
use newsroom_core::ports::{
    AuthorRepository, BaseRepository, BlogSeriesRepository, ImageRepository, PostRepository,
};

use super::entity::author::{self, Entity as AuthorEntity};
use super::entity::blog_series::{self, Entity as BlogSeriesEntity};
use super::entity::image::{self, Entity as ImageEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::entity::post_author::{self, Entity as PostAuthorEntity};
use super::postgres_base::{PostgresBaseRepository, query_error, upsert, write_error};

/// PostgreSQL author repository.
pub type PostgresAuthorRepository = PostgresBaseRepository<AuthorEntity>;

/// PostgreSQL image repository.
pub type PostgresImageRepository = PostgresBaseRepository<ImageEntity>;

/// PostgreSQL blog series repository.
pub type PostgresBlogSeriesRepository = PostgresBaseRepository<BlogSeriesEntity>;

/// PostgreSQL post repository. Bylines live in `post_authors`, so posts are
/// written and read together with their link rows.
pub struct PostgresPostRepository {
    pub(crate) db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    async fn with_authors(&self, models: Vec<post::Model>) -> Result<Vec<Post>, RepoError> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        let links = PostAuthorEntity::find()
            .filter(post_author::Column::PostId.is_in(ids))
            .order_by_asc(post_author::Column::Position)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        let mut bylines: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for link in links {
            bylines.entry(link.post_id).or_default().push(link.author_id);
        }

        Ok(models
            .into_iter()
            .map(|model| {
                let authors = bylines.remove(&model.id).unwrap_or_default();
                model.into_post(authors)
            })
            .collect())
    }
}

fn visible(scope: Visibility) -> Condition {
    Condition::all()
        .add(post::Column::PublishedAt.is_not_null())
        .add(post::Column::PublishedAt.lte(scope.now()))
}

/// Escape `%`, `_` and the escape character itself for a LIKE pattern.
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn in_taxonomy(taxonomy: &Taxonomy) -> Condition {
    match taxonomy.dimension() {
        Dimension::Sections => {
            if taxonomy.path().is_empty() {
                return Condition::all();
            }
            let path = taxonomy.path().to_string();
            let below = LikeExpr::new(format!("{}/%", escape_like(&path))).escape('\\');
            Condition::any()
                .add(post::Column::Section.eq(path))
                .add(Expr::col(post::Column::Section).like(below))
        }
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for PostgresPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let Some(model) = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_error)?
        else {
            return Ok(None);
        };

        Ok(self.with_authors(vec![model]).await?.pop())
    }

    async fn save(&self, entity: Post) -> Result<Post, RepoError> {
        let txn = self.db.begin().await.map_err(query_error)?;

        let model = upsert(post::ActiveModel::from(&entity), &txn)
            .await
            .map_err(write_error)?;

        PostAuthorEntity::delete_many()
            .filter(post_author::Column::PostId.eq(entity.id))
            .exec(&txn)
            .await
            .map_err(query_error)?;

        if !entity.author_ids.is_empty() {
            let links = entity
                .author_ids
                .iter()
                .enumerate()
                .map(|(position, author_id)| post_author::ActiveModel {
                    post_id: Set(entity.id),
                    author_id: Set(*author_id),
                    position: Set(position as i32),
                });
            PostAuthorEntity::insert_many(links)
                .exec_without_returning(&txn)
                .await
                .map_err(write_error)?;
        }

        txn.commit().await.map_err(query_error)?;
        tracing::debug!(post_id = %entity.id, "Post saved");

        Ok(model.into_post(entity.author_ids))
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let txn = self.db.begin().await.map_err(query_error)?;

        PostAuthorEntity::delete_many()
            .filter(post_author::Column::PostId.eq(id))
            .exec(&txn)
            .await
            .map_err(query_error)?;

        let result = PostEntity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(query_error)?;
        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        txn.commit().await.map_err(query_error)
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_visible(&self, scope: Visibility) -> Result<Vec<Post>, RepoError> {
        let models = PostEntity::find()
            .filter(visible(scope))
            .order_by_desc(post::Column::PublishedAt)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        self.with_authors(models).await
    }

    async fn find_in_taxonomy(
        &self,
        taxonomy: &Taxonomy,
        scope: Visibility,
    ) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(
            dimension = ?taxonomy.dimension(),
            path = %taxonomy.path(),
            "Finding posts in taxonomy"
        );

        let models = PostEntity::find()
            .filter(visible(scope))
            .filter(in_taxonomy(taxonomy))
            .order_by_desc(post::Column::PublishedAt)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        // Stored sections are re-parsed, so the prefix match is confirmed
        // segment by segment.
        let posts = self.with_authors(models).await?;
        Ok(posts
            .into_iter()
            .filter(|post| taxonomy.matches(post))
            .collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        let Some(model) = PostEntity::find()
            .filter(post::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(query_error)?
        else {
            return Ok(None);
        };

        Ok(self.with_authors(vec![model]).await?.pop())
    }
}

/// Rows for `ids` in the order asked for, skipping unknown ids.
fn in_requested_order<M, T>(models: Vec<M>, ids: &[Uuid], id_of: impl Fn(&M) -> Uuid) -> Vec<T>
where
    T: From<M>,
{
    let mut by_id: HashMap<Uuid, M> = models.into_iter().map(|m| (id_of(&m), m)).collect();
    ids.iter()
        .filter_map(|id| by_id.remove(id))
        .map(Into::into)
        .collect()
}

#[async_trait]
impl AuthorRepository for PostgresAuthorRepository {
    async fn find_all(&self) -> Result<Vec<Author>, RepoError> {
        let result = AuthorEntity::find()
            .order_by_asc(author::Column::Name)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_many(&self, ids: &[Uuid]) -> Result<Vec<Author>, RepoError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let result = AuthorEntity::find()
            .filter(author::Column::Id.is_in(ids.to_vec()))
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(in_requested_order(result, ids, |m| m.id))
    }
}

#[async_trait]
impl ImageRepository for PostgresImageRepository {
    async fn find_all(&self) -> Result<Vec<Image>, RepoError> {
        let result = ImageEntity::find()
            .order_by_desc(image::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_many(&self, ids: &[Uuid]) -> Result<Vec<Image>, RepoError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let result = ImageEntity::find()
            .filter(image::Column::Id.is_in(ids.to_vec()))
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(in_requested_order(result, ids, |m| m.id))
    }
}

#[async_trait]
impl BlogSeriesRepository for PostgresBlogSeriesRepository {
    async fn find_all(&self) -> Result<Vec<BlogSeries>, RepoError> {
        let result = BlogSeriesEntity::find()
            .order_by_asc(blog_series::Column::Blog)
            .order_by_asc(blog_series::Column::Name)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_name(&self, blog: &str, name: &str) -> Result<Option<BlogSeries>, RepoError> {
        let result = BlogSeriesEntity::find()
            .filter(blog_series::Column::Blog.eq(blog))
            .filter(blog_series::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("News/100%_real"), "News/100\\%\\_real");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
    }
}
