mod common;

use axum::http::StatusCode;
use common::{
    create_test_user, get_auth_token, get_request, json_request, roles, seed_category, seed_post,
    send, setup_test_app,
};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
async fn test_create_post_as_admin(pool: PgPool) {
    create_test_user(&pool, "admin", "adminpass123", roles::ADMIN).await;
    let category_id = seed_category(&pool, "Rust").await;

    let app = setup_test_app(pool.clone()).await;
    let token = get_auth_token(app, "admin", "adminpass123").await;

    let app = setup_test_app(pool.clone()).await;
    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/api/posts",
            Some(&token),
            json!({
                "title": "Hello",
                "description": "A long enough description",
                "content": "Some post body.",
                "category_id": category_id
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["title"], "Hello");
    assert_eq!(body["category_id"], category_id);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_post_as_plain_user_is_forbidden(pool: PgPool) {
    create_test_user(&pool, "reader", "readerpass123", roles::USER).await;
    let category_id = seed_category(&pool, "Rust").await;

    let app = setup_test_app(pool.clone()).await;
    let token = get_auth_token(app, "reader", "readerpass123").await;

    let app = setup_test_app(pool.clone()).await;
    let (status, _) = send(
        app,
        json_request(
            "POST",
            "/api/posts",
            Some(&token),
            json!({
                "title": "Hello",
                "description": "A long enough description",
                "content": "Some post body.",
                "category_id": category_id
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_post_without_token_is_unauthorized(pool: PgPool) {
    let category_id = seed_category(&pool, "Rust").await;

    let app = setup_test_app(pool.clone()).await;
    let (status, _) = send(
        app,
        json_request(
            "POST",
            "/api/posts",
            None,
            json!({
                "title": "Hello",
                "description": "A long enough description",
                "content": "Some post body.",
                "category_id": category_id
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_posts_is_public_and_paginated(pool: PgPool) {
    let category_id = seed_category(&pool, "Rust").await;
    for i in 0..5 {
        seed_post(&pool, category_id, &format!("Post {i}")).await;
    }

    let app = setup_test_app(pool.clone()).await;
    let (status, body) = send(app, get_request("/api/posts?page_no=1&page_size=2")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"].as_array().unwrap().len(), 2);
    assert_eq!(body["page_no"], 1);
    assert_eq!(body["page_size"], 2);
    assert_eq!(body["total_elements"], 5);
    assert_eq!(body["total_pages"], 3);
    assert_eq!(body["last"], false);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_posts_sorted_by_title_desc(pool: PgPool) {
    let category_id = seed_category(&pool, "Rust").await;
    for title in ["Apple", "Cherry", "Banana"] {
        seed_post(&pool, category_id, title).await;
    }

    let app = setup_test_app(pool.clone()).await;
    let (status, body) = send(
        app,
        get_request("/api/posts?sort_by=title&sort_dir=desc"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let titles: Vec<_> = body["content"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Cherry", "Banana", "Apple"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_posts_unknown_sort_field_is_bad_request(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;
    let (status, body) = send(app, get_request("/api/posts?sort_by=likes")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("likes"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_post_not_found_names_the_resource(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;
    let (status, body) = send(app, get_request("/api/posts/999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Post not found with id: 999");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_post(pool: PgPool) {
    create_test_user(&pool, "admin", "adminpass123", roles::ADMIN).await;
    let category_id = seed_category(&pool, "Rust").await;
    let post_id = seed_post(&pool, category_id, "Before").await;

    let app = setup_test_app(pool.clone()).await;
    let token = get_auth_token(app, "admin", "adminpass123").await;

    let app = setup_test_app(pool.clone()).await;
    let (status, body) = send(
        app,
        json_request(
            "PUT",
            &format!("/api/posts/{post_id}"),
            Some(&token),
            json!({
                "title": "After",
                "description": "A different long description",
                "content": "Updated body.",
                "category_id": category_id
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], post_id);
    assert_eq!(body["title"], "After");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_post(pool: PgPool) {
    create_test_user(&pool, "admin", "adminpass123", roles::ADMIN).await;
    let category_id = seed_category(&pool, "Rust").await;
    let post_id = seed_post(&pool, category_id, "Doomed").await;

    let app = setup_test_app(pool.clone()).await;
    let token = get_auth_token(app, "admin", "adminpass123").await;

    let app = setup_test_app(pool.clone()).await;
    let request = axum::http::Request::builder()
        .method("DELETE")
        .uri(format!("/api/posts/{post_id}"))
        .header("authorization", format!("Bearer {token}"))
        .body(axum::body::Body::empty())
        .unwrap();
    let (status, _) = send(app, request).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let app = setup_test_app(pool.clone()).await;
    let (status, _) = send(app, get_request(&format!("/api/posts/{post_id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_posts_by_category_is_unpaginated(pool: PgPool) {
    let rust = seed_category(&pool, "Rust").await;
    let other = seed_category(&pool, "Other").await;
    for i in 0..3 {
        seed_post(&pool, rust, &format!("Rust post {i}")).await;
    }
    seed_post(&pool, other, "Unrelated").await;

    let app = setup_test_app(pool.clone()).await;
    let (status, body) = send(app, get_request(&format!("/api/posts/categories/{rust}"))).await;

    assert_eq!(status, StatusCode::OK);
    // Plain array, not a page envelope.
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_posts_by_unknown_category_not_found(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;
    let (status, body) = send(app, get_request("/api/posts/categories/999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Category not found with id: 999");
}
