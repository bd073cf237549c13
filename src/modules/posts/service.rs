use sqlx::PgPool;
use tracing::instrument;

use crate::config::pagination::PageDefaults;
use crate::modules::auth::model::UserRole;
use crate::utils::errors::AppError;
use crate::utils::pagination::Page;

use super::model::{CreatePostDto, Post, PostDto, PostListParams, PostResponse, UpdatePostDto};

pub struct PostService;

impl PostService {
    #[instrument(skip(db, dto))]
    pub async fn create_post(
        db: &PgPool,
        caller_role: UserRole,
        dto: CreatePostDto,
    ) -> Result<PostDto, AppError> {
        caller_role.require_admin()?;
        Self::ensure_category_exists(db, dto.category_id).await?;

        let post = sqlx::query_as::<_, Post>(
            r#"INSERT INTO posts (title, description, content, category_id)
               VALUES ($1, $2, $3, $4)
               RETURNING id, title, description, content, category_id"#,
        )
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(&dto.content)
        .bind(dto.category_id)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::bad_request("A post with this title already exists");
                }
            }
            AppError::from(e)
        })?;

        Ok(post.into())
    }

    /// One page of posts, counted and sorted per the resolved query.
    /// Ties on the sort column break by id ascending so pages never
    /// overlap between requests.
    #[instrument(skip(db, params, defaults))]
    pub async fn get_all_posts(
        db: &PgPool,
        params: PostListParams,
        defaults: &PageDefaults,
    ) -> Result<PostResponse, AppError> {
        let query = params.resolve(defaults)?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(db)
            .await?;

        // Column and direction come from enums, never from the raw request.
        let sql = format!(
            r#"SELECT id, title, description, content, category_id
               FROM posts
               ORDER BY {} {}, id ASC
               LIMIT $1 OFFSET $2"#,
            query.sort_by.column(),
            query.sort_dir.as_sql(),
        );

        let posts = sqlx::query_as::<_, Post>(&sql)
            .bind(query.page.page_size())
            .bind(query.page.offset())
            .fetch_all(db)
            .await?;

        Ok(Page::assemble(posts, &query.page, total).map(PostDto::from))
    }

    #[instrument(skip(db))]
    pub async fn get_post_by_id(db: &PgPool, post_id: i64) -> Result<PostDto, AppError> {
        let post = sqlx::query_as::<_, Post>(
            "SELECT id, title, description, content, category_id FROM posts WHERE id = $1",
        )
        .bind(post_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found("Post", "id", post_id))?;

        Ok(post.into())
    }

    /// Full-field overwrite, including moving the post to another category.
    #[instrument(skip(db, dto))]
    pub async fn update_post(
        db: &PgPool,
        caller_role: UserRole,
        post_id: i64,
        dto: UpdatePostDto,
    ) -> Result<PostDto, AppError> {
        caller_role.require_admin()?;
        Self::ensure_category_exists(db, dto.category_id).await?;

        let post = sqlx::query_as::<_, Post>(
            r#"UPDATE posts
               SET title = $1, description = $2, content = $3, category_id = $4
               WHERE id = $5
               RETURNING id, title, description, content, category_id"#,
        )
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(&dto.content)
        .bind(dto.category_id)
        .bind(post_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found("Post", "id", post_id))?;

        Ok(post.into())
    }

    /// Deleting a post cascades to its comments at the schema level.
    #[instrument(skip(db))]
    pub async fn delete_post(
        db: &PgPool,
        caller_role: UserRole,
        post_id: i64,
    ) -> Result<(), AppError> {
        caller_role.require_admin()?;

        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(post_id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Post", "id", post_id));
        }

        Ok(())
    }

    /// All posts in a category, unpaginated.
    #[instrument(skip(db))]
    pub async fn get_posts_by_category(
        db: &PgPool,
        category_id: i64,
    ) -> Result<Vec<PostDto>, AppError> {
        Self::ensure_category_exists(db, category_id).await?;

        let posts = sqlx::query_as::<_, Post>(
            r#"SELECT id, title, description, content, category_id
               FROM posts
               WHERE category_id = $1
               ORDER BY id"#,
        )
        .bind(category_id)
        .fetch_all(db)
        .await?;

        Ok(posts.into_iter().map(Into::into).collect())
    }

    async fn ensure_category_exists(db: &PgPool, category_id: i64) -> Result<(), AppError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
            .bind(category_id)
            .fetch_one(db)
            .await?;

        if !exists {
            return Err(AppError::not_found("Category", "id", category_id));
        }

        Ok(())
    }
}
