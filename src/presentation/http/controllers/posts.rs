// src/presentation/http/controllers/posts.rs
use crate::application::{commands::posts::PublishPostCommand, dto::PostDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublishPostRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    pub publish_date: String,
    pub category: String,
    pub image: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub likes: Option<i64>,
    #[serde(default)]
    pub dislikes: Option<i64>,
    #[serde(default)]
    pub featured: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PostResponse {
    pub post: PostDto,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PostListResponse {
    pub posts: Vec<PostDto>,
}

#[utoipa::path(
    get,
    path = "/api/v1/posts",
    responses(
        (status = 200, description = "Every post, newest first.", body = PostListResponse),
        (status = 401, description = "Missing or invalid bearer token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
) -> HttpResult<Json<PostListResponse>> {
    let posts = state
        .services
        .post_queries
        .list_posts()
        .await
        .into_http()?;

    Ok(Json(PostListResponse { posts }))
}

#[utoipa::path(
    post,
    path = "/api/v1/posts",
    request_body = PublishPostRequest,
    responses(
        (status = 201, description = "Post created with a unique slug and the next id.", body = PostResponse),
        (status = 400, description = "Payload failed validation.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "A concurrent publish already took the slug.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "The store rejected the write.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn publish_post(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Json(payload): Json<PublishPostRequest>,
) -> HttpResult<(StatusCode, Json<PostResponse>)> {
    let command = PublishPostCommand {
        title: payload.title,
        description: payload.description,
        content: payload.content,
        author: payload.author,
        publish_date: payload.publish_date,
        category: payload.category,
        image: payload.image,
        slug: payload.slug,
        likes: payload.likes,
        dislikes: payload.dislikes,
        featured: payload.featured,
    };

    let post = state
        .services
        .post_commands
        .publish_post(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(PostResponse { post })))
}
