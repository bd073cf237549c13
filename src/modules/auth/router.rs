use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{login, register};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/signin", post(login))
        .route("/register", post(register))
        .route("/signup", post(register))
}
