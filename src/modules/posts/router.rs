use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_post, delete_post, get_all_posts, get_post_by_id, get_posts_by_category, update_post,
};

pub fn init_posts_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_post).get(get_all_posts))
        .route(
            "/{id}",
            get(get_post_by_id).put(update_post).delete(delete_post),
        )
        .route("/categories/{category_id}", get(get_posts_by_category))
}
