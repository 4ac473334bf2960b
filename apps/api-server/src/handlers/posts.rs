//! Post handlers: public listings and reads, authenticated writes.

use std::collections::HashSet;

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use newsroom_core::content::{SectionPath, Taxonomy, Visibility};
use newsroom_core::domain::Post;
use newsroom_core::error::{DomainError, ValidationErrors};
use newsroom_infra::MediaRenderer;
use newsroom_shared::ApiResponse;
use newsroom_shared::dto::{PostListQuery, PostRequest, PostResponse};

use crate::config::EmbedUrlPolicy;
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(post: &Post, rendered_body: Option<String>) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title.clone(),
        subtitle: post.subtitle.clone(),
        teaser: post.teaser.clone(),
        body: post.body.clone(),
        body_text: post.body_text(),
        rendered_body,
        section: post.section.to_string(),
        published_at: post.published_at,
        embed_code: post.embed_code.clone(),
        embed_url: post.embed_url(),
        author_ids: post.author_ids.clone(),
        image_id: post.image_id,
        slug: post.slug().map(str::to_string),
        permalink: post.permalink(),
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}

/// GET /api/posts?section=News/University
pub async fn index(
    state: web::Data<AppState>,
    query: web::Query<PostListQuery>,
) -> AppResult<HttpResponse> {
    let scope = Visibility::at(state.clock.now());

    let posts = match query.section.as_deref().map(SectionPath::parse) {
        Some(section) if !section.is_empty() => {
            state
                .posts
                .find_in_taxonomy(&Taxonomy::sections(section), scope)
                .await?
        }
        _ => state.posts.find_visible(scope).await?,
    };

    let body: Vec<PostResponse> = posts.iter().map(|post| to_response(post, None)).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(body)))
}

/// GET /api/posts/{year}/{month}/{day}/{slug}
pub async fn show(
    state: web::Data<AppState>,
    path: web::Path<(String, String, String, String)>,
) -> AppResult<HttpResponse> {
    let (year, month, day, slug) = path.into_inner();
    let slug = format!("{year}/{month}/{day}/{slug}");

    let post = state
        .posts
        .find_by_slug(&slug)
        .await?
        .filter(|post| post.is_published(state.clock.now()))
        .ok_or_else(|| AppError::NotFound(format!("No post at /{slug}")))?;

    let images = state
        .images
        .find_many(&MediaRenderer::image_ids(&post.media_tags()))
        .await?;
    let rendered = post.render_body(&MediaRenderer::new(images))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_response(&post, Some(rendered)))))
}

/// Copy the keys present in the request onto `post`, check it, and settle
/// its slug.
async fn apply(state: &AppState, post: &mut Post, req: PostRequest) -> AppResult<()> {
    if let Some(title) = req.title {
        post.title = title;
    }
    if let Some(subtitle) = req.subtitle {
        post.subtitle = subtitle;
    }
    if let Some(teaser) = req.teaser {
        post.teaser = teaser;
    }
    if let Some(body) = req.body {
        post.body = body;
    }
    if let Some(section) = req.section.as_deref() {
        post.section = SectionPath::parse(section);
    }
    if let Some(published_at) = req.published_at {
        post.published_at = published_at;
    }
    if let Some(author_ids) = req.author_ids {
        post.author_ids = author_ids;
    }
    if let Some(image_id) = req.image_id {
        post.image_id = image_id;
    }

    let mut errors = ValidationErrors::new();

    if let Some(url) = req.embed_url.as_deref() {
        if let Err(e) = post.set_embed_url(url) {
            match state.embed_url_policy {
                EmbedUrlPolicy::Reject => errors.add("embed_url", e.to_string()),
                EmbedUrlPolicy::Ignore => {
                    tracing::debug!(post_id = %post.id, error = %e, "Ignoring embed URL")
                }
            }
        }
    }

    if let Err(e) = post.validate(&state.content) {
        errors.extend(e);
    }

    if !post.author_ids.is_empty() {
        let known: HashSet<Uuid> = state
            .authors
            .find_many(&post.author_ids)
            .await?
            .iter()
            .map(|author| author.id)
            .collect();
        if post.author_ids.iter().any(|id| !known.contains(id)) {
            errors.add("authors", "must reference existing authors");
        }
    }

    if let Some(image_id) = post.image_id {
        if state.images.find_by_id(image_id).await?.is_none() {
            errors.add("image_id", "must reference an existing image");
        }
    }

    errors.into_result()?;

    if req.regenerate_slug {
        post.regenerate_slug(&state.content.slug);
    } else {
        post.ensure_slug(&state.content.slug);
    }
    post.updated_at = state.clock.now();
    Ok(())
}

/// POST /api/posts
pub async fn create(
    editor: Identity,
    state: web::Data<AppState>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let mut post = Post::new(String::new(), String::new(), Vec::new());
    post.created_at = state.clock.now();
    apply(&state, &mut post, body.into_inner()).await?;

    let saved = state.posts.save(post).await?;
    tracing::info!(post_id = %saved.id, editor = %editor.email, "Post created");

    Ok(HttpResponse::Created().json(ApiResponse::ok(to_response(&saved, None))))
}

/// PUT /api/posts/{id}
pub async fn update(
    editor: Identity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let mut post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "Post",
            id,
        })?;

    apply(&state, &mut post, body.into_inner()).await?;

    let saved = state.posts.save(post).await?;
    tracing::info!(post_id = %saved.id, editor = %editor.email, "Post updated");

    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_response(&saved, None))))
}

/// DELETE /api/posts/{id}
pub async fn destroy(
    editor: Identity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.posts.delete(id).await?;
    tracing::info!(post_id = %id, editor = %editor.email, "Post deleted");

    Ok(HttpResponse::NoContent().finish())
}
