//! # Newsroom API Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;

use config::AppConfig;
use newsroom_core::ports::TokenService;
use newsroom_infra::JwtTokenService;
use observability::RequestIdMiddleware;
use state::AppState;
use telemetry::LogFormat;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(LogFormat::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        embed_url_policy = ?config.embed_url_policy,
        teaser_max_chars = config.content.teaser_max_chars,
        slug_max_length = config.content.slug.max_length,
        "Starting Newsroom API Server on {}:{}",
        config.host,
        config.port
    );

    let state = web::Data::new(AppState::new(&config).await);
    let tokens: web::Data<Arc<dyn TokenService>> =
        web::Data::new(Arc::new(JwtTokenService::new(config.jwt.clone())));

    HttpServer::new(move || {
        App::new()
            .wrap(RequestIdMiddleware)
            .wrap(TracingLogger::default())
            .app_data(state.clone())
            .app_data(tokens.clone())
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
