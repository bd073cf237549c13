use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use sqlx::{FromRow, PgPool};

use crate::modules::auth::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::token_subject;

/// The caller resolved from a verified bearer token.
///
/// The token only asserts a username; identity and role come from the
/// store at request time, so a deleted user's token stops working
/// immediately.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
    pub role: UserRole,
}

/// Extractor that authenticates the request. Handlers that take an
/// [`AuthUser`] reject anonymous callers with 401.
#[derive(Debug, Clone)]
pub struct AuthUser(pub CurrentUser);

#[derive(FromRow)]
struct UserRoleRow {
    id: i64,
    username: String,
    role: String,
}

pub async fn resolve_user(db: &PgPool, username: &str) -> Result<CurrentUser, AppError> {
    // A user holds one role in practice; if several are assigned the most
    // privileged one (lowest role id) wins.
    let row = sqlx::query_as::<_, UserRoleRow>(
        r#"SELECT u.id, u.username, r.name AS role
           FROM users u
           JOIN user_roles ur ON ur.user_id = u.id
           JOIN roles r ON r.id = ur.role_id
           WHERE u.username = $1
           ORDER BY r.id
           LIMIT 1"#,
    )
    .bind(username)
    .fetch_optional(db)
    .await?
    .ok_or_else(|| AppError::unauthorized("User no longer exists"))?;

    let role = UserRole::from_name(&row.role)
        .ok_or_else(|| AppError::internal(format!("Unknown role in store: {}", row.role)))?;

    Ok(CurrentUser {
        id: row.id,
        username: row.username,
        role,
    })
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid authorization header format"))?;

        let username = token_subject(token, &state.jwt_config)?;
        let user = resolve_user(&state.db, &username).await?;

        Ok(AuthUser(user))
    }
}
