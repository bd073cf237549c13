use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{CreatePostDto, PostDto, PostListParams, PostResponse, UpdatePostDto};
use super::service::PostService;

/// Create a post
#[utoipa::path(
    post,
    path = "/api/posts",
    request_body = CreatePostDto,
    responses(
        (status = 201, description = "Post created", body = PostDto),
        (status = 400, description = "Duplicate title", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    tag = "Posts",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_post(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ValidatedJson(dto): ValidatedJson<CreatePostDto>,
) -> Result<(StatusCode, Json<PostDto>), AppError> {
    let post = PostService::create_post(&state.db, caller.role, dto).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// List posts, paginated and sorted
#[utoipa::path(
    get,
    path = "/api/posts",
    params(PostListParams),
    responses(
        (status = 200, description = "One page of posts", body = PostResponse),
        (status = 400, description = "Invalid paging or sort parameters", body = ErrorResponse)
    ),
    tag = "Posts"
)]
#[instrument(skip(state, params))]
pub async fn get_all_posts(
    State(state): State<AppState>,
    Query(params): Query<PostListParams>,
) -> Result<Json<PostResponse>, AppError> {
    let page = PostService::get_all_posts(&state.db, params, &state.page_defaults).await?;
    Ok(Json(page))
}

/// Get a post by id
#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    params(("id" = i64, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Post details", body = PostDto),
        (status = 404, description = "Post not found", body = ErrorResponse)
    ),
    tag = "Posts"
)]
#[instrument(skip(state))]
pub async fn get_post_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PostDto>, AppError> {
    let post = PostService::get_post_by_id(&state.db, id).await?;
    Ok(Json(post))
}

/// Update a post
#[utoipa::path(
    put,
    path = "/api/posts/{id}",
    params(("id" = i64, Path, description = "Post ID")),
    request_body = UpdatePostDto,
    responses(
        (status = 200, description = "Post updated", body = PostDto),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (status = 404, description = "Post or category not found", body = ErrorResponse)
    ),
    tag = "Posts",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_post(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<UpdatePostDto>,
) -> Result<Json<PostDto>, AppError> {
    let post = PostService::update_post(&state.db, caller.role, id, dto).await?;
    Ok(Json(post))
}

/// Delete a post and its comments
#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    params(("id" = i64, Path, description = "Post ID")),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    ),
    tag = "Posts",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_post(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    PostService::delete_post(&state.db, caller.role, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List every post in a category
#[utoipa::path(
    get,
    path = "/api/posts/categories/{category_id}",
    params(("category_id" = i64, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Posts in the category", body = Vec<PostDto>),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    tag = "Posts"
)]
#[instrument(skip(state))]
pub async fn get_posts_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
) -> Result<Json<Vec<PostDto>>, AppError> {
    let posts = PostService::get_posts_by_category(&state.db, category_id).await?;
    Ok(Json(posts))
}
