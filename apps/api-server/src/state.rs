//! Application state - shared across all handlers.

use std::sync::Arc;

use newsroom_core::ContentConfig;
use newsroom_core::ports::{
    AuthorRepository, BlogSeriesRepository, Clock, ImageRepository, PostRepository, SystemClock,
};
use newsroom_infra::{
    InMemoryAuthorRepository, InMemoryBlogSeriesRepository, InMemoryImageRepository,
    InMemoryPostRepository,
};

#[cfg(feature = "postgres")]
use newsroom_infra::{
    PostgresAuthorRepository, PostgresBlogSeriesRepository, PostgresImageRepository,
    PostgresPostRepository,
};

use crate::config::{AppConfig, EmbedUrlPolicy};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub authors: Arc<dyn AuthorRepository>,
    pub images: Arc<dyn ImageRepository>,
    pub blog_series: Arc<dyn BlogSeriesRepository>,
    pub clock: Arc<dyn Clock>,
    pub content: ContentConfig,
    pub embed_url_policy: EmbedUrlPolicy,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        #[cfg(feature = "postgres")]
        if let Some(db_config) = &config.database {
            match newsroom_infra::database::connect(db_config).await {
                Ok(db) => {
                    tracing::info!("Application state initialized (postgres)");
                    return Self {
                        posts: Arc::new(PostgresPostRepository::new(db.clone())),
                        authors: Arc::new(PostgresAuthorRepository::new(db.clone())),
                        images: Arc::new(PostgresImageRepository::new(db.clone())),
                        blog_series: Arc::new(PostgresBlogSeriesRepository::new(db)),
                        clock,
                        content: config.content.clone(),
                        embed_url_policy: config.embed_url_policy,
                    };
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                }
            }
        } else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        }

        #[cfg(not(feature = "postgres"))]
        tracing::info!("Running without postgres feature - using in-memory repositories");

        Self::in_memory(config.content.clone(), config.embed_url_policy, clock)
    }

    /// State backed by in-memory repositories.
    pub fn in_memory(
        content: ContentConfig,
        embed_url_policy: EmbedUrlPolicy,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            posts: Arc::new(InMemoryPostRepository::new()),
            authors: Arc::new(InMemoryAuthorRepository::new()),
            images: Arc::new(InMemoryImageRepository::new()),
            blog_series: Arc::new(InMemoryBlogSeriesRepository::new()),
            clock,
            content,
            embed_url_policy,
        }
    }
}
