// src/application/ports/uploads.rs
use crate::application::dto::UploadTicketDto;

/// Produces signed tickets for direct browser uploads to the image host.
pub trait UploadSigner: Send + Sync {
    fn issue_ticket(&self) -> UploadTicketDto;
}
