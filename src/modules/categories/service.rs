use sqlx::PgPool;
use tracing::instrument;

use crate::modules::auth::model::UserRole;
use crate::utils::errors::AppError;

use super::model::{Category, CategoryDto, CreateCategoryDto, UpdateCategoryDto};

pub struct CategoryService;

impl CategoryService {
    #[instrument(skip(db, dto))]
    pub async fn add_category(
        db: &PgPool,
        caller_role: UserRole,
        dto: CreateCategoryDto,
    ) -> Result<CategoryDto, AppError> {
        caller_role.require_admin()?;

        let category = sqlx::query_as::<_, Category>(
            r#"INSERT INTO categories (name, description)
               VALUES ($1, $2)
               RETURNING id, name, description"#,
        )
        .bind(&dto.name)
        .bind(&dto.description)
        .fetch_one(db)
        .await?;

        Ok(category.into())
    }

    #[instrument(skip(db))]
    pub async fn get_category(db: &PgPool, category_id: i64) -> Result<CategoryDto, AppError> {
        let category = sqlx::query_as::<_, Category>(
            "SELECT id, name, description FROM categories WHERE id = $1",
        )
        .bind(category_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found("Category", "id", category_id))?;

        Ok(category.into())
    }

    #[instrument(skip(db))]
    pub async fn get_all_categories(db: &PgPool) -> Result<Vec<CategoryDto>, AppError> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, name, description FROM categories ORDER BY id",
        )
        .fetch_all(db)
        .await?;

        Ok(categories.into_iter().map(Into::into).collect())
    }

    /// Full-field overwrite; there is no partial patch.
    #[instrument(skip(db, dto))]
    pub async fn update_category(
        db: &PgPool,
        caller_role: UserRole,
        category_id: i64,
        dto: UpdateCategoryDto,
    ) -> Result<CategoryDto, AppError> {
        caller_role.require_admin()?;

        let category = sqlx::query_as::<_, Category>(
            r#"UPDATE categories
               SET name = $1, description = $2
               WHERE id = $3
               RETURNING id, name, description"#,
        )
        .bind(&dto.name)
        .bind(&dto.description)
        .bind(category_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found("Category", "id", category_id))?;

        Ok(category.into())
    }

    #[instrument(skip(db))]
    pub async fn delete_category(
        db: &PgPool,
        caller_role: UserRole,
        category_id: i64,
    ) -> Result<(), AppError> {
        caller_role.require_admin()?;

        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(category_id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Category", "id", category_id));
        }

        Ok(())
    }
}
