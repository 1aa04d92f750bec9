// src/presentation/http/controllers/public_posts.rs
use crate::application::queries::posts::GetPostBySlugQuery;
use crate::presentation::http::controllers::posts::{PostListResponse, PostResponse};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

#[utoipa::path(
    get,
    path = "/api/v1/public/posts",
    responses(
        (status = 200, description = "Every post, newest first.", body = PostListResponse)
    ),
    tag = "Public"
)]
pub async fn list_public_posts(
    Extension(state): Extension<HttpState>,
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
    get,
    path = "/api/v1/public/posts/{slug}",
    params(("slug" = String, Path, description = "Post slug, matched exactly.")),
    responses(
        (status = 200, description = "The post for the slug.", body = PostResponse),
        (status = 404, description = "No post carries the slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Public"
)]
pub async fn get_public_post(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<PostResponse>> {
    let post = state
        .services
        .post_queries
        .get_post_by_slug(GetPostBySlugQuery { slug })
        .await
        .into_http()?;

    Ok(Json(PostResponse { post }))
}
