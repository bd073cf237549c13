use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use inkpost::config::cors::CorsConfig;
use inkpost::config::jwt::JwtConfig;
use inkpost::config::pagination::PageDefaults;
use inkpost::router::init_router;
use inkpost::state::AppState;
use inkpost::utils::password::hash_password;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

/// Well-known role IDs seeded by the initial migration.
pub mod roles {
    pub const ADMIN: i64 = 1;
    pub const USER: i64 = 2;
}

pub async fn setup_test_app(pool: PgPool) -> axum::Router {
    dotenvy::dotenv().ok();
    let state = AppState {
        db: pool,
        jwt_config: JwtConfig::from_env(),
        page_defaults: PageDefaults::default(),
        cors_config: CorsConfig::from_env(),
    };
    init_router(state)
}

/// Inserts a user with the given role directly; `role_id` should be one
/// of the [`roles`] constants.
pub async fn create_test_user(pool: &PgPool, username: &str, password: &str, role_id: i64) -> i64 {
    let hashed = hash_password(password).unwrap();

    let user_id: i64 = sqlx::query_scalar(
        r#"INSERT INTO users (name, username, email, password)
           VALUES ($1, $2, $3, $4)
           RETURNING id"#,
    )
    .bind("Test User")
    .bind(username)
    .bind(format!("{username}@test.com"))
    .bind(hashed)
    .fetch_one(pool)
    .await
    .unwrap();

    sqlx::query("INSERT INTO user_roles (user_id, role_id) VALUES ($1, $2)")
        .bind(user_id)
        .bind(role_id)
        .execute(pool)
        .await
        .unwrap();

    user_id
}

pub async fn get_auth_token(app: axum::Router, username: &str, password: &str) -> String {
    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "username_or_email": username,
                "password": password
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    body["access_token"].as_str().unwrap().to_string()
}

#[allow(dead_code)]
pub async fn seed_category(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO categories (name, description) VALUES ($1, NULL) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[allow(dead_code)]
pub async fn seed_post(pool: &PgPool, category_id: i64, title: &str) -> i64 {
    sqlx::query_scalar(
        r#"INSERT INTO posts (title, description, content, category_id)
           VALUES ($1, 'A long enough description', 'Some post body.', $2)
           RETURNING id"#,
    )
    .bind(title)
    .bind(category_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Sends `request` and returns the status plus the parsed JSON body.
#[allow(dead_code)]
pub async fn send(
    app: axum::Router,
    request: Request<Body>,
) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[allow(dead_code)]
pub fn json_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

#[allow(dead_code)]
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}
