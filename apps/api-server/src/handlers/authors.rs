//! Admin handlers for authors.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use newsroom_core::domain::Author;
use newsroom_core::error::DomainError;
use newsroom_shared::ApiResponse;
use newsroom_shared::dto::{AuthorRequest, AuthorResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_response(author: Author) -> AuthorResponse {
    AuthorResponse {
        id: author.id,
        name: author.name,
        affiliation: author.affiliation,
        tagline: author.tagline,
        twitter: author.twitter,
        columnist: author.columnist,
        biography: author.biography,
        created_at: author.created_at,
        updated_at: author.updated_at,
    }
}

fn apply(author: &mut Author, req: AuthorRequest) {
    author.name = req.name;
    author.affiliation = req.affiliation;
    author.tagline = req.tagline;
    author.set_twitter(&req.twitter);
    author.columnist = req.columnist;
    author.biography = req.biography;
}

async fn find(state: &AppState, id: Uuid) -> AppResult<Author> {
    Ok(state
        .authors
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "Author",
            id,
        })?)
}

/// GET /api/admin/authors
pub async fn index(_editor: Identity, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let authors = state.authors.find_all().await?;
    let body: Vec<AuthorResponse> = authors.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(body)))
}

/// GET /api/admin/authors/{id}
pub async fn show(
    _editor: Identity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let author = find(&state, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_response(author))))
}

/// POST /api/admin/authors
pub async fn create(
    editor: Identity,
    state: web::Data<AppState>,
    body: web::Json<AuthorRequest>,
) -> AppResult<HttpResponse> {
    let mut author = Author::new(String::new());
    author.created_at = state.clock.now();
    author.updated_at = author.created_at;
    apply(&mut author, body.into_inner());
    author.validate()?;

    let saved = state.authors.save(author).await?;
    tracing::info!(author_id = %saved.id, editor = %editor.email, "Author created");

    Ok(HttpResponse::Created().json(ApiResponse::ok(to_response(saved))))
}

/// PUT /api/admin/authors/{id}
pub async fn update(
    editor: Identity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<AuthorRequest>,
) -> AppResult<HttpResponse> {
    let mut author = find(&state, path.into_inner()).await?;
    apply(&mut author, body.into_inner());
    author.validate()?;
    author.updated_at = state.clock.now();

    let saved = state.authors.save(author).await?;
    tracing::info!(author_id = %saved.id, editor = %editor.email, "Author updated");

    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_response(saved))))
}

/// DELETE /api/admin/authors/{id}
pub async fn destroy(
    editor: Identity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.authors.delete(id).await?;
    tracing::info!(author_id = %id, editor = %editor.email, "Author deleted");

    Ok(HttpResponse::NoContent().finish())
}
