use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{CommentDto, CreateCommentDto, UpdateCommentDto};
use super::service::CommentService;

/// Comment on a post
#[utoipa::path(
    post,
    path = "/api/posts/{post_id}/comments",
    params(("post_id" = i64, Path, description = "Post ID")),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = CommentDto),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    ),
    tag = "Comments",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_comment(
    State(state): State<AppState>,
    AuthUser(_caller): AuthUser,
    Path(post_id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<CreateCommentDto>,
) -> Result<(StatusCode, Json<CommentDto>), AppError> {
    let comment = CommentService::create_comment(&state.db, post_id, dto).await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

/// List the comments on a post
#[utoipa::path(
    get,
    path = "/api/posts/{post_id}/comments",
    params(("post_id" = i64, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Comments on the post", body = Vec<CommentDto>)
    ),
    tag = "Comments"
)]
#[instrument(skip(state))]
pub async fn get_comments_by_post_id(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> Result<Json<Vec<CommentDto>>, AppError> {
    let comments = CommentService::get_comments_by_post_id(&state.db, post_id).await?;
    Ok(Json(comments))
}

/// Get a single comment on a post
#[utoipa::path(
    get,
    path = "/api/posts/{post_id}/comments/{comment_id}",
    params(
        ("post_id" = i64, Path, description = "Post ID"),
        ("comment_id" = i64, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Comment details", body = CommentDto),
        (status = 400, description = "Comment belongs to another post", body = ErrorResponse),
        (status = 404, description = "Post or comment not found", body = ErrorResponse)
    ),
    tag = "Comments"
)]
#[instrument(skip(state))]
pub async fn get_comment_by_id(
    State(state): State<AppState>,
    Path((post_id, comment_id)): Path<(i64, i64)>,
) -> Result<Json<CommentDto>, AppError> {
    let comment = CommentService::get_comment_by_id(&state.db, post_id, comment_id).await?;
    Ok(Json(comment))
}

/// Update a comment
#[utoipa::path(
    put,
    path = "/api/posts/{post_id}/comments/{comment_id}",
    params(
        ("post_id" = i64, Path, description = "Post ID"),
        ("comment_id" = i64, Path, description = "Comment ID")
    ),
    request_body = UpdateCommentDto,
    responses(
        (status = 200, description = "Comment updated", body = CommentDto),
        (status = 400, description = "Comment belongs to another post", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Post or comment not found", body = ErrorResponse)
    ),
    tag = "Comments",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_comment(
    State(state): State<AppState>,
    AuthUser(_caller): AuthUser,
    Path((post_id, comment_id)): Path<(i64, i64)>,
    ValidatedJson(dto): ValidatedJson<UpdateCommentDto>,
) -> Result<Json<CommentDto>, AppError> {
    let comment = CommentService::update_comment(&state.db, post_id, comment_id, dto).await?;
    Ok(Json(comment))
}

/// Delete a comment
#[utoipa::path(
    delete,
    path = "/api/posts/{post_id}/comments/{comment_id}",
    params(
        ("post_id" = i64, Path, description = "Post ID"),
        ("comment_id" = i64, Path, description = "Comment ID")
    ),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 400, description = "Comment belongs to another post", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Post or comment not found", body = ErrorResponse)
    ),
    tag = "Comments",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_comment(
    State(state): State<AppState>,
    AuthUser(_caller): AuthUser,
    Path((post_id, comment_id)): Path<(i64, i64)>,
) -> Result<StatusCode, AppError> {
    CommentService::delete_comment(&state.db, post_id, comment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
