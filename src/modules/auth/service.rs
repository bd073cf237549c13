use sqlx::PgPool;
use tracing::instrument;

use crate::config::jwt::JwtConfig;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_token;
use crate::utils::password::{hash_password, verify_password};

use super::model::{LoginRequest, LoginResponse, RegisterRequest, User, UserRole};

pub struct AuthService;

impl AuthService {
    /// Registers a new user with the default `ROLE_USER` role.
    #[instrument(skip(db, dto))]
    pub async fn register(db: &PgPool, dto: RegisterRequest) -> Result<User, AppError> {
        Self::register_with_role(db, dto, UserRole::User).await
    }

    /// Bootstrap path for the `create-admin` CLI command; not reachable
    /// through the HTTP surface.
    #[instrument(skip(db, dto))]
    pub async fn create_admin(db: &PgPool, dto: RegisterRequest) -> Result<User, AppError> {
        Self::register_with_role(db, dto, UserRole::Admin).await
    }

    /// The user row and its role assignment commit together or not at
    /// all; a user without a role would pass login but fail every
    /// authenticated request. Uniqueness is enforced by the schema's
    /// constraints rather than pre-checks, so concurrent registrations
    /// cannot race past each other.
    async fn register_with_role(
        db: &PgPool,
        dto: RegisterRequest,
        role: UserRole,
    ) -> Result<User, AppError> {
        let mut tx = db.begin().await?;

        let role_id = sqlx::query_scalar::<_, i64>("SELECT id FROM roles WHERE name = $1")
            .bind(role.as_str())
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::not_found("Role", "name", role.as_str()))?;

        let hashed_password = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(
            r#"INSERT INTO users (name, username, email, password)
               VALUES ($1, $2, $3, $4)
               RETURNING id, name, username, email"#,
        )
        .bind(&dto.name)
        .bind(&dto.username)
        .bind(&dto.email)
        .bind(&hashed_password)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return match db_err.constraint() {
                        Some("users_email_key") => AppError::bad_request("Email is already in use"),
                        _ => AppError::bad_request("Username is already taken"),
                    };
                }
            }
            AppError::from(e)
        })?;

        sqlx::query("INSERT INTO user_roles (user_id, role_id) VALUES ($1, $2)")
            .bind(user.id)
            .bind(role_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(user)
    }

    /// Authenticates by username or email and issues a bearer token whose
    /// subject is the account's username.
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct Credentials {
            username: String,
            password: String,
        }

        let credentials = sqlx::query_as::<_, Credentials>(
            "SELECT username, password FROM users WHERE username = $1 OR email = $1",
        )
        .bind(&dto.username_or_email)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::unauthorized("Invalid username/email or password"))?;

        let is_valid = verify_password(&dto.password, &credentials.password)?;

        if !is_valid {
            return Err(AppError::unauthorized("Invalid username/email or password"));
        }

        let access_token = create_token(&credentials.username, jwt_config)?;

        Ok(LoginResponse::bearer(access_token))
    }
}
