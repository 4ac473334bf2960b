//! HTTP handlers and route configuration.

mod authors;
mod blog_series;
mod health;
mod images;
mod posts;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::index))
                    .route("", web::post().to(posts::create))
                    .route("/{year}/{month}/{day}/{slug}", web::get().to(posts::show))
                    .route("/{id}", web::put().to(posts::update))
                    .route("/{id}", web::delete().to(posts::destroy)),
            )
            .service(
                web::scope("/images")
                    .route("", web::get().to(images::index))
                    .route("", web::post().to(images::create))
                    .route("/{id}", web::get().to(images::show))
                    .route("/{id}", web::put().to(images::update))
                    .route("/{id}", web::delete().to(images::destroy)),
            )
            .service(
                web::scope("/admin")
                    .service(
                        web::scope("/authors")
                            .route("", web::get().to(authors::index))
                            .route("", web::post().to(authors::create))
                            .route("/{id}", web::get().to(authors::show))
                            .route("/{id}", web::put().to(authors::update))
                            .route("/{id}", web::delete().to(authors::destroy)),
                    )
                    .service(
                        web::scope("/blog-series")
                            .route("", web::get().to(blog_series::index))
                            .route("", web::post().to(blog_series::create))
                            .route("/{id}", web::get().to(blog_series::show))
                            .route("/{id}", web::put().to(blog_series::update))
                            .route("/{id}", web::delete().to(blog_series::destroy)),
                    ),
            ),
    );
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use actix_web::web;
    use chrono::{DateTime, TimeZone, Utc};
    use uuid::Uuid;

    use newsroom_core::ContentConfig;
    use newsroom_core::ports::{FixedClock, TokenService};
    use newsroom_infra::{JwtConfig, JwtTokenService};

    use crate::config::EmbedUrlPolicy;
    use crate::state::AppState;

    pub fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2013, 4, 1, 12, 0, 0).unwrap()
    }

    pub struct TestContext {
        pub state: web::Data<AppState>,
        pub tokens: web::Data<Arc<dyn TokenService>>,
        pub clock: Arc<FixedClock>,
    }

    impl TestContext {
        pub fn new(policy: EmbedUrlPolicy) -> Self {
            let clock = Arc::new(FixedClock::new(now()));
            let state = AppState::in_memory(ContentConfig::default(), policy, clock.clone());
            let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(JwtConfig {
                secret: "test-secret-key".to_string(),
                expiration_hours: 1,
                issuer: "newsroom-test".to_string(),
            }));

            Self {
                state: web::Data::new(state),
                tokens: web::Data::new(tokens),
                clock,
            }
        }

        /// `Authorization` header value for an editor.
        pub fn bearer(&self) -> String {
            let token = self
                .tokens
                .generate_token(Uuid::new_v4(), "editor@pallet.edu", vec!["editor".into()])
                .unwrap();
            format!("Bearer {token}")
        }
    }

    /// Initialise the routed app around a [`TestContext`].
    macro_rules! test_app {
        ($ctx:expr) => {
            actix_web::test::init_service(
                actix_web::App::new()
                    .app_data($ctx.state.clone())
                    .app_data($ctx.tokens.clone())
                    .configure($crate::handlers::configure_routes),
            )
            .await
        };
    }
    pub(crate) use test_app;

    impl Default for TestContext {
        fn default() -> Self {
            Self::new(EmbedUrlPolicy::Reject)
        }
    }
}
