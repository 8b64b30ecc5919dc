//! Post handlers.

use actix_web::{HttpResponse, http::header::ContentType, web};

use quill_core::DomainError;
use quill_core::domain::{Post, PostId, SearchCriteria};
use quill_shared::dto::{CreatePostRequest, PostResponse, SearchPostsQuery};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        content: post.content,
        created_at: post.created_at,
        updated_at: post.updated_at,
        published_at: post.published_at,
        draft: post.is_draft,
    }
}

fn to_responses(posts: Vec<Post>) -> Vec<PostResponse> {
    posts.into_iter().map(to_response).collect()
}

/// POST /api/posts/drafts
pub async fn create_draft(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let content = body.into_inner().into_content()?;
    let post = state.posts.create_draft(content);

    tracing::info!(post_id = ?post.id, "Draft created");
    Ok(HttpResponse::Created().json(to_response(post)))
}

/// PUT /api/posts/drafts/{id}/publish
///
/// Unknown ids and already-published posts both answer 404.
pub async fn publish_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state
        .posts
        .publish_post(id)
        .ok_or_else(|| DomainError::post_not_found(id))?;

    tracing::info!(post_id = id, "Post published");
    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state
        .posts
        .get_post(id)
        .ok_or_else(|| DomainError::post_not_found(id))?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    if !state.posts.delete_post(id) {
        return Err(DomainError::post_not_found(id).into());
    }

    tracing::info!(post_id = id, "Post deleted");
    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/posts/published
pub async fn list_published(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(to_responses(state.posts.list_published()))
}

/// GET /api/posts/drafts
pub async fn list_drafts(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(to_responses(state.posts.list_drafts()))
}

/// GET /api/posts/search?keyword=&publishedAfter=&publishedBefore=
///
/// Timestamps are RFC 3339. A `+` offset must be sent percent-encoded
/// (`%2B09:00`); a bare `+` decodes to a space and is rejected with 400.
pub async fn search_posts(
    state: web::Data<AppState>,
    query: web::Query<SearchPostsQuery>,
) -> HttpResponse {
    let query = query.into_inner();
    let criteria = SearchCriteria {
        keyword: query.keyword,
        published_after: query.published_after,
        published_before: query.published_before,
    };

    let posts = state.posts.search_published(&criteria);
    tracing::debug!(?criteria, hits = posts.len(), "Searched published posts");
    HttpResponse::Ok().json(to_responses(posts))
}

/// GET /api/posts/test - deployment banner.
pub async fn deployment_page(state: web::Data<AppState>) -> HttpResponse {
    let body = format!(
        "<html><body><h1 style='font-size:48px;'>Hello World! 🌍</h1>\
         <p style='font-size:24px;'>Deployed at: {}</p></body></html>",
        state.deployment.deployed_at_jst()
    );

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}
