//! Image metadata handlers.

use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use uuid::Uuid;

use newsroom_core::domain::Image;
use newsroom_core::error::{DomainError, ValidationErrors};
use newsroom_shared::ApiResponse;
use newsroom_shared::dto::{ImageRequest, ImageResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_response(image: Image) -> ImageResponse {
    ImageResponse {
        id: image.id,
        caption: image.caption,
        location: image.location,
        credit: image.credit,
        date: image.date,
        photographer_id: image.photographer_id,
        original_file_name: image.original_file_name,
        original_content_type: image.original_content_type,
        original_file_size: image.original_file_size,
        original_updated_at: image.original_updated_at,
        published_url: image.published_url,
        thumbnail_url: image.thumbnail_url,
        created_at: image.created_at,
        updated_at: image.updated_at,
    }
}

/// Copy the keys present in the request onto `image`. An absent `date` keeps
/// the current one unless `require_date` is set.
async fn apply(
    state: &AppState,
    image: &mut Image,
    req: ImageRequest,
    require_date: bool,
) -> AppResult<()> {
    let mut errors = ValidationErrors::new();

    match req.date.as_deref().map(str::trim) {
        None if !require_date => {}
        None | Some("") => errors.add("date", "can't be blank"),
        Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => image.date = date,
            Err(_) => errors.add("date", "is not a valid date"),
        },
    }

    let ImageRequest {
        caption,
        location,
        credit,
        date: _,
        photographer_id,
        original_file_name,
        original_content_type,
        original_file_size,
        original_updated_at,
        published_url,
        thumbnail_url,
    } = req;

    if let Some(caption) = caption {
        image.caption = caption;
    }
    if let Some(location) = location {
        image.location = location;
    }
    if let Some(credit) = credit {
        image.credit = credit;
    }
    if let Some(photographer_id) = photographer_id {
        image.photographer_id = photographer_id;
    }
    if let Some(name) = original_file_name {
        image.original_file_name = name;
    }
    if let Some(content_type) = original_content_type {
        image.original_content_type = content_type;
    }
    if let Some(size) = original_file_size {
        image.original_file_size = size;
    }
    if let Some(at) = original_updated_at {
        image.original_updated_at = at;
    }
    if let Some(url) = published_url {
        image.published_url = url;
    }
    if let Some(url) = thumbnail_url {
        image.thumbnail_url = url;
    }

    if let Err(e) = image.validate() {
        errors.extend(e);
    }

    if let Some(photographer_id) = image.photographer_id {
        if state.authors.find_by_id(photographer_id).await?.is_none() {
            errors.add("photographer_id", "must reference an existing author");
        }
    }

    errors.into_result()?;
    image.updated_at = state.clock.now();
    Ok(())
}

/// GET /api/images
pub async fn index(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let images = state.images.find_all().await?;
    let body: Vec<ImageResponse> = images.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(body)))
}

/// GET /api/images/{id}
pub async fn show(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let image = state
        .images
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "Image",
            id,
        })?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_response(image))))
}

/// POST /api/images
pub async fn create(
    editor: Identity,
    state: web::Data<AppState>,
    body: web::Json<ImageRequest>,
) -> AppResult<HttpResponse> {
    let mut image = Image::new(state.clock.now().date_naive());
    image.created_at = state.clock.now();
    apply(&state, &mut image, body.into_inner(), true).await?;

    let saved = state.images.save(image).await?;
    tracing::info!(image_id = %saved.id, editor = %editor.email, "Image created");

    Ok(HttpResponse::Created().json(ApiResponse::ok(to_response(saved))))
}

/// PUT /api/images/{id}
pub async fn update(
    editor: Identity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<ImageRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let mut image = state
        .images
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "Image",
            id,
        })?;

    apply(&state, &mut image, body.into_inner(), false).await?;
    state.images.save(image).await?;
    tracing::info!(image_id = %id, editor = %editor.email, "Image updated");

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /api/images/{id}
pub async fn destroy(
    editor: Identity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.images.delete(id).await?;
    tracing::info!(image_id = %id, editor = %editor.email, "Image deleted");

    Ok(HttpResponse::NoContent().finish())
}
