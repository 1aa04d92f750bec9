// src/presentation/http/controllers/uploads.rs
use crate::application::{dto::UploadTicketDto, error::ApplicationError};
use crate::presentation::http::error::{HttpError, HttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/v1/uploads/sign",
    responses(
        (status = 200, description = "Signed parameters for a direct image upload.", body = UploadTicketDto),
        (status = 401, description = "Missing or invalid bearer token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Upload signing is not configured.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Uploads"
)]
pub async fn sign_upload(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
) -> HttpResult<Json<UploadTicketDto>> {
    let signer = state.services.upload_signer().ok_or_else(|| {
        HttpError::from_error(ApplicationError::infrastructure(
            "upload signing is not configured",
        ))
    })?;

    Ok(Json(signer.issue_ticket()))
}
