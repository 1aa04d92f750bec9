use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Everything a browser needs to upload an image straight to the host.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadTicketDto {
    pub cloud_name: String,
    pub api_key: String,
    pub timestamp: i64,
    pub folder: String,
    pub signature: String,
}
