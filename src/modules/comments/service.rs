use sqlx::PgPool;
use tracing::instrument;

use crate::utils::errors::AppError;

use super::model::{Comment, CommentDto, CreateCommentDto, UpdateCommentDto};

pub struct CommentService;

impl CommentService {
    #[instrument(skip(db, dto))]
    pub async fn create_comment(
        db: &PgPool,
        post_id: i64,
        dto: CreateCommentDto,
    ) -> Result<CommentDto, AppError> {
        Self::ensure_post_exists(db, post_id).await?;

        let comment = sqlx::query_as::<_, Comment>(
            r#"INSERT INTO comments (name, email, body, post_id)
               VALUES ($1, $2, $3, $4)
               RETURNING id, name, email, body, post_id"#,
        )
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&dto.body)
        .bind(post_id)
        .fetch_one(db)
        .await?;

        Ok(comment.into())
    }

    /// Comments for a post, oldest first. An unknown post id yields an
    /// empty list rather than an error; only the single-comment routes
    /// verify the post.
    #[instrument(skip(db))]
    pub async fn get_comments_by_post_id(
        db: &PgPool,
        post_id: i64,
    ) -> Result<Vec<CommentDto>, AppError> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"SELECT id, name, email, body, post_id
               FROM comments
               WHERE post_id = $1
               ORDER BY id"#,
        )
        .bind(post_id)
        .fetch_all(db)
        .await?;

        Ok(comments.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(db))]
    pub async fn get_comment_by_id(
        db: &PgPool,
        post_id: i64,
        comment_id: i64,
    ) -> Result<CommentDto, AppError> {
        let comment = Self::owned_comment(db, post_id, comment_id).await?;
        Ok(comment.into())
    }

    #[instrument(skip(db, dto))]
    pub async fn update_comment(
        db: &PgPool,
        post_id: i64,
        comment_id: i64,
        dto: UpdateCommentDto,
    ) -> Result<CommentDto, AppError> {
        Self::owned_comment(db, post_id, comment_id).await?;

        let comment = sqlx::query_as::<_, Comment>(
            r#"UPDATE comments
               SET name = $1, email = $2, body = $3
               WHERE id = $4
               RETURNING id, name, email, body, post_id"#,
        )
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&dto.body)
        .bind(comment_id)
        .fetch_one(db)
        .await?;

        Ok(comment.into())
    }

    #[instrument(skip(db))]
    pub async fn delete_comment(
        db: &PgPool,
        post_id: i64,
        comment_id: i64,
    ) -> Result<(), AppError> {
        Self::owned_comment(db, post_id, comment_id).await?;

        sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(comment_id)
            .execute(db)
            .await?;

        Ok(())
    }

    /// Checks run in a fixed order: the post must exist, then the
    /// comment, and only then is ownership compared. A comment that
    /// exists under a different post is a bad request, not a miss.
    async fn owned_comment(
        db: &PgPool,
        post_id: i64,
        comment_id: i64,
    ) -> Result<Comment, AppError> {
        Self::ensure_post_exists(db, post_id).await?;

        let comment = sqlx::query_as::<_, Comment>(
            "SELECT id, name, email, body, post_id FROM comments WHERE id = $1",
        )
        .bind(comment_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found("Comment", "id", comment_id))?;

        if comment.post_id != post_id {
            return Err(AppError::bad_request("Comment does not belong to the post"));
        }

        Ok(comment)
    }

    async fn ensure_post_exists(db: &PgPool, post_id: i64) -> Result<(), AppError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)")
            .bind(post_id)
            .fetch_one(db)
            .await?;

        if !exists {
            return Err(AppError::not_found("Post", "id", post_id));
        }

        Ok(())
    }
}
