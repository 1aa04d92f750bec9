// src/infrastructure/uploads.rs
use std::sync::Arc;

use sha2::{Digest, Sha256};

use crate::application::{
    dto::UploadTicketDto,
    ports::{ClockPort, uploads::UploadSigner},
};
use crate::config::UploadConfig;

/// Signs direct-upload requests for a Cloudinary-style image host. The
/// browser sends the signed parameters with the file; the API secret never
/// leaves the server.
pub struct CloudinaryUploadSigner {
    config: UploadConfig,
    clock: Arc<ClockPort>,
}

impl CloudinaryUploadSigner {
    pub fn new(config: UploadConfig, clock: Arc<ClockPort>) -> Self {
        Self { config, clock }
    }

    fn sign(&self, timestamp: i64) -> String {
        // The host expects the signed parameters in alphabetical order.
        let payload = format!(
            "folder={}&timestamp={}{}",
            self.config.folder, timestamp, self.config.api_secret
        );
        let digest = Sha256::digest(payload.as_bytes());
        digest.iter().map(|byte| format!("{byte:02x}")).collect()
    }
}

impl UploadSigner for CloudinaryUploadSigner {
    fn issue_ticket(&self) -> UploadTicketDto {
        let timestamp = self.clock.now().timestamp();
        let signature = self.sign(timestamp);

        UploadTicketDto {
            cloud_name: self.config.cloud_name.clone(),
            api_key: self.config.api_key.clone(),
            timestamp,
            folder: self.config.folder.clone(),
            signature,
        }
    }
}
