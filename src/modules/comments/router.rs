use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_comment, delete_comment, get_comment_by_id, get_comments_by_post_id, update_comment,
};

/// Nested under `/api/posts/{post_id}/comments`.
pub fn init_comments_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_comment).get(get_comments_by_post_id))
        .route(
            "/{comment_id}",
            get(get_comment_by_id)
                .put(update_comment)
                .delete(delete_comment),
        )
}
