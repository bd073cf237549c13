use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{LoginRequest, LoginResponse, RegisterRequest, User, UserRole};
use crate::modules::categories::model::{CategoryDto, CreateCategoryDto, UpdateCategoryDto};
use crate::modules::comments::model::{CommentDto, CreateCommentDto, UpdateCommentDto};
use crate::modules::posts::model::{CreatePostDto, PostDto, UpdatePostDto};
use crate::utils::pagination::Page;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register,
        crate::modules::auth::controller::login,
        crate::modules::posts::controller::create_post,
        crate::modules::posts::controller::get_all_posts,
        crate::modules::posts::controller::get_post_by_id,
        crate::modules::posts::controller::update_post,
        crate::modules::posts::controller::delete_post,
        crate::modules::posts::controller::get_posts_by_category,
        crate::modules::comments::controller::create_comment,
        crate::modules::comments::controller::get_comments_by_post_id,
        crate::modules::comments::controller::get_comment_by_id,
        crate::modules::comments::controller::update_comment,
        crate::modules::comments::controller::delete_comment,
        crate::modules::categories::controller::add_category,
        crate::modules::categories::controller::get_categories,
        crate::modules::categories::controller::get_category,
        crate::modules::categories::controller::update_category,
        crate::modules::categories::controller::delete_category,
    ),
    components(
        schemas(
            User,
            UserRole,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            PostDto,
            CreatePostDto,
            UpdatePostDto,
            Page<PostDto>,
            CommentDto,
            CreateCommentDto,
            UpdateCommentDto,
            CategoryDto,
            CreateCategoryDto,
            UpdateCategoryDto,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration and login"),
        (name = "Posts", description = "Blog post management"),
        (name = "Comments", description = "Comments on posts"),
        (name = "Categories", description = "Post categories")
    ),
    info(
        title = "Inkpost API",
        version = "0.1.0",
        description = "A blog REST API built with Rust, Axum, and PostgreSQL featuring JWT-based authentication."
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
