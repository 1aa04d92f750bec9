// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::domain::post::{
    repository::{PostReadRepository, PostWriteRepository},
    services::PostSlugService,
};

pub struct PostCommandService {
    pub(super) write_repo: Arc<dyn PostWriteRepository>,
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) slug_service: Arc<PostSlugService>,
}

impl PostCommandService {
    pub fn new(
        write_repo: Arc<dyn PostWriteRepository>,
        read_repo: Arc<dyn PostReadRepository>,
        slug_service: Arc<PostSlugService>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
        }
    }
}
