// src/presentation/http/openapi.rs
use axum::Router;
use serde::{Deserialize, Serialize};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::auth::me,
        crate::presentation::http::controllers::posts::list_posts,
        crate::presentation::http::controllers::posts::publish_post,
        crate::presentation::http::controllers::public_posts::list_public_posts,
        crate::presentation::http::controllers::public_posts::get_public_post,
        crate::presentation::http::controllers::uploads::sign_upload,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::auth::LoginRequest,
            crate::presentation::http::controllers::auth::LoginResponse,
            crate::presentation::http::controllers::posts::PublishPostRequest,
            crate::presentation::http::controllers::posts::PostResponse,
            crate::presentation::http::controllers::posts::PostListResponse,
            crate::application::dto::PostDto,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::AdminUserDto,
            crate::application::dto::AdminProfileDto,
            crate::application::dto::UploadTicketDto,
            crate::domain::admin::Role
        )
    ),
    tags(
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Posts", description = "Admin publishing endpoints"),
        (name = "Public", description = "Unauthenticated read API"),
        (name = "Uploads", description = "Image upload signing"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&SecurityAddon),
    security(("bearerAuth" = [])),
    info(
        title = "Newsdesk API",
        description = "Blog publishing backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("JWT".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
    }
}

pub fn docs_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
