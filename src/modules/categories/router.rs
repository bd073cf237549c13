use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    add_category, delete_category, get_categories, get_category, update_category,
};

pub fn init_categories_router() -> Router<AppState> {
    Router::new()
        .route("/", post(add_category).get(get_categories))
        .route(
            "/{id}",
            get(get_category)
                .put(update_category)
                .delete(delete_category),
        )
}
