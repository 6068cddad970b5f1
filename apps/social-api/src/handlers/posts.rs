//! Post endpoints.
//!
//! Every handler follows the same shape: check required query parameters,
//! run the repository calls, answer with the post as JSON. Mutating
//! endpoints read current state first and write second; the two statements
//! are not wrapped in a transaction, so concurrent requests against the
//! same post can interleave between them (two simultaneous likes may both
//! observe the same counter and lose one increment).

use std::collections::HashMap;

use actix_web::{HttpResponse, web};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

type Params = web::Query<HashMap<String, String>>;

fn id_param(params: &HashMap<String, String>) -> Result<i64, AppError> {
    params
        .get("id")
        .ok_or(AppError::BadRequest)?
        .parse()
        .map_err(|_| AppError::BadRequest)
}

fn content_param(params: &HashMap<String, String>) -> Result<&str, AppError> {
    params
        .get("content")
        .map(String::as_str)
        .ok_or(AppError::BadRequest)
}

/// GET /posts.get - all active posts, newest first.
pub async fn get(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_active().await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// GET /posts.getById?id=N
pub async fn get_by_id(state: web::Data<AppState>, params: Params) -> AppResult<HttpResponse> {
    let id = id_param(&params)?;

    let post = state
        .posts
        .find_active(id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(HttpResponse::Ok().json(post))
}

/// POST /posts.post?content=...
pub async fn create(state: web::Data<AppState>, params: Params) -> AppResult<HttpResponse> {
    let content = content_param(&params)?;

    let id = state.posts.create(content).await?;

    // Read the row back so the response carries the store-assigned
    // defaults (likes, created).
    let post = state
        .posts
        .find_active(id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(HttpResponse::Ok().json(post))
}

/// POST /posts.edit?id=N&content=...
pub async fn edit(state: web::Data<AppState>, params: Params) -> AppResult<HttpResponse> {
    let id = id_param(&params)?;
    let content = content_param(&params)?;

    // The update is scoped to active rows; editing a missing or removed
    // post is a no-op that the read-back below turns into a 404.
    state.posts.update_content(id, content).await?;

    let post = state
        .posts
        .find_active(id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(HttpResponse::Ok().json(post))
}

/// POST /posts.delete?id=N - soft-delete; answers with the pre-delete state.
pub async fn delete(state: web::Data<AppState>, params: Params) -> AppResult<HttpResponse> {
    let id = id_param(&params)?;

    let post = state.posts.find_active(id).await?;

    // Flag the row even when the read found nothing; the update matches no
    // row in that case.
    state.posts.set_removed(id, true).await?;

    let post = post.ok_or(AppError::NotFound)?;

    Ok(HttpResponse::Ok().json(post))
}

/// POST /posts.restore?id=N - undo a soft-delete; answers with the
/// pre-restore state.
pub async fn restore(state: web::Data<AppState>, params: Params) -> AppResult<HttpResponse> {
    let id = id_param(&params)?;

    let post = state.posts.find_removed(id).await?;

    state.posts.set_removed(id, false).await?;

    let post = post.ok_or(AppError::NotFound)?;

    Ok(HttpResponse::Ok().json(post))
}

/// POST /posts.like?id=N
pub async fn like(state: web::Data<AppState>, params: Params) -> AppResult<HttpResponse> {
    let id = id_param(&params)?;

    let mut post = state
        .posts
        .find_active(id)
        .await?
        .ok_or(AppError::NotFound)?;

    post.likes += 1;
    state.posts.set_likes(id, post.likes).await?;

    Ok(HttpResponse::Ok().json(post))
}

/// POST /posts.dislike?id=N
///
/// Clamps at zero: a dislike on a post with no likes writes nothing and
/// still answers 200 with the unchanged post.
pub async fn dislike(state: web::Data<AppState>, params: Params) -> AppResult<HttpResponse> {
    let id = id_param(&params)?;

    let mut post = state
        .posts
        .find_active(id)
        .await?
        .ok_or(AppError::NotFound)?;

    if post.likes > 0 {
        post.likes -= 1;
        state.posts.set_likes(id, post.likes).await?;
    }

    Ok(HttpResponse::Ok().json(post))
}
