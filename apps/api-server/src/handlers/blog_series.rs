//! Admin handlers for blog series.

use actix_web::http::header;
use actix_web::{HttpResponse, web};
use uuid::Uuid;

use newsroom_core::domain::BlogSeries;
use newsroom_core::error::{DomainError, ValidationErrors};
use newsroom_shared::ApiResponse;
use newsroom_shared::dto::{BlogSeriesRequest, BlogSeriesResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_response(series: BlogSeries) -> BlogSeriesResponse {
    BlogSeriesResponse {
        location: series.tagged_path(),
        id: series.id,
        blog: series.blog,
        name: series.name,
        description: series.description,
        created_at: series.created_at,
        updated_at: series.updated_at,
    }
}

async fn find(state: &AppState, id: Uuid) -> AppResult<BlogSeries> {
    Ok(state
        .blog_series
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "BlogSeries",
            id,
        })?)
}

/// Copy the request onto `series` and check it, including that no other
/// series in the same blog already uses the name.
async fn apply(state: &AppState, series: &mut BlogSeries, req: BlogSeriesRequest) -> AppResult<()> {
    series.blog = req.blog.trim().to_string();
    series.name = req.name.trim().to_string();
    series.description = req.description;

    let mut errors = ValidationErrors::new();
    if let Err(e) = series.validate() {
        errors.extend(e);
    }
    if errors.is_empty() {
        let existing = state
            .blog_series
            .find_by_name(&series.blog, &series.name)
            .await?;
        if existing.is_some_and(|other| other.id != series.id) {
            errors.add("name", "has already been taken");
        }
    }

    errors.into_result()?;
    series.updated_at = state.clock.now();
    Ok(())
}

/// GET /api/admin/blog-series
pub async fn index(_editor: Identity, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let series = state.blog_series.find_all().await?;
    let body: Vec<BlogSeriesResponse> = series.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(body)))
}

/// GET /api/admin/blog-series/{id}
pub async fn show(
    _editor: Identity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let series = find(&state, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_response(series))))
}

/// POST /api/admin/blog-series
pub async fn create(
    editor: Identity,
    state: web::Data<AppState>,
    body: web::Json<BlogSeriesRequest>,
) -> AppResult<HttpResponse> {
    let mut series = BlogSeries::new(String::new(), String::new());
    series.created_at = state.clock.now();
    apply(&state, &mut series, body.into_inner()).await?;

    let saved = state.blog_series.save(series).await?;
    tracing::info!(series_id = %saved.id, editor = %editor.email, "Blog series created");

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, saved.tagged_path()))
        .json(ApiResponse::ok(to_response(saved))))
}

/// PUT /api/admin/blog-series/{id}
///
/// Responds with the series' public page in `Location`.
pub async fn update(
    editor: Identity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<BlogSeriesRequest>,
) -> AppResult<HttpResponse> {
    let mut series = find(&state, path.into_inner()).await?;
    apply(&state, &mut series, body.into_inner()).await?;

    let saved = state.blog_series.save(series).await?;
    tracing::info!(series_id = %saved.id, editor = %editor.email, "Blog series updated");

    Ok(HttpResponse::NoContent()
        .insert_header((header::LOCATION, saved.tagged_path()))
        .finish())
}

/// DELETE /api/admin/blog-series/{id}
pub async fn destroy(
    editor: Identity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.blog_series.delete(id).await?;
    tracing::info!(series_id = %id, editor = %editor.email, "Blog series deleted");

    Ok(HttpResponse::NoContent().finish())
}
