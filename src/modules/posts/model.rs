use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::config::pagination::PageDefaults;
use crate::utils::errors::AppError;
use crate::utils::pagination::{Page, PageRequest, SortDir};

/// A blog post as stored. Comments hang off it in their own table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub content: String,
    pub category_id: i64,
}

/// Wire projection of [`Post`]; field-for-field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub content: String,
    pub category_id: i64,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            description: post.description,
            content: post.content,
            category_id: post.category_id,
        }
    }
}

impl From<PostDto> for Post {
    fn from(dto: PostDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            description: dto.description,
            content: dto.content,
            category_id: dto.category_id,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePostDto {
    #[validate(length(min = 2, message = "title must be at least 2 characters"))]
    pub title: String,
    #[validate(length(min = 10, message = "description must be at least 10 characters"))]
    pub description: String,
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,
    pub category_id: i64,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePostDto {
    #[validate(length(min = 2, message = "title must be at least 2 characters"))]
    pub title: String,
    #[validate(length(min = 10, message = "description must be at least 10 characters"))]
    pub description: String,
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,
    pub category_id: i64,
}

/// The post columns a listing may sort by. Parsing the client's string
/// through this enum is what keeps the ORDER BY clause injection-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostSortField {
    Id,
    Title,
    Description,
    Content,
}

impl PostSortField {
    pub fn parse(s: &str) -> Result<Self, AppError> {
        match s {
            "id" => Ok(Self::Id),
            "title" => Ok(Self::Title),
            "description" => Ok(Self::Description),
            "content" => Ok(Self::Content),
            other => Err(AppError::bad_request(format!(
                "Cannot sort posts by '{}'; expected one of: id, title, description, content",
                other
            ))),
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::Description => "description",
            Self::Content => "content",
        }
    }
}

/// Raw listing query parameters; absent values fall back to the
/// configured defaults at resolution time.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct PostListParams {
    pub page_no: Option<i64>,
    pub page_size: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_dir: Option<String>,
}

/// A fully validated listing query.
#[derive(Debug, Clone, Copy)]
pub struct PostListQuery {
    pub page: PageRequest,
    pub sort_by: PostSortField,
    pub sort_dir: SortDir,
}

impl PostListParams {
    pub fn resolve(self, defaults: &PageDefaults) -> Result<PostListQuery, AppError> {
        let page = PageRequest::new(
            self.page_no.unwrap_or(defaults.page_no),
            self.page_size.unwrap_or(defaults.page_size),
        )?;
        let sort_by = PostSortField::parse(self.sort_by.as_deref().unwrap_or(&defaults.sort_by))?;
        let sort_dir = SortDir::parse(self.sort_dir.as_deref().unwrap_or(&defaults.sort_dir));

        Ok(PostListQuery {
            page,
            sort_by,
            sort_dir,
        })
    }
}

pub type PostResponse = Page<PostDto>;
