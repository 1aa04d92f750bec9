// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{posts::PostCommandService, sessions::SessionCommandService},
        ports::{PasswordHasherPort, SlugGeneratorPort, TokenManagerPort, UploadSignerPort},
        queries::posts::PostQueryService,
    },
    domain::{
        admin::AdminDirectory,
        post::{
            repository::{PostReadRepository, PostWriteRepository},
            services::PostSlugService,
        },
    },
};

pub struct ApplicationServices {
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    pub session_commands: Arc<SessionCommandService>,
    token_manager: Arc<TokenManagerPort>,
    upload_signer: Option<Arc<UploadSignerPort>>,
}

impl ApplicationServices {
    pub fn new(
        post_write_repo: Arc<dyn PostWriteRepository>,
        post_read_repo: Arc<dyn PostReadRepository>,
        directory: Arc<dyn AdminDirectory>,
        password_hasher: Arc<PasswordHasherPort>,
        token_manager: Arc<TokenManagerPort>,
        slugger: Arc<SlugGeneratorPort>,
        upload_signer: Option<Arc<UploadSignerPort>>,
    ) -> Self {
        let slug_service = Arc::new(PostSlugService::new(
            Arc::clone(&post_read_repo),
            Arc::clone(&slugger),
        ));

        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&post_write_repo),
            Arc::clone(&post_read_repo),
            slug_service,
        ));

        let post_queries = Arc::new(PostQueryService::new(Arc::clone(&post_read_repo)));

        let session_commands = Arc::new(SessionCommandService::new(
            directory,
            password_hasher,
            Arc::clone(&token_manager),
        ));

        Self {
            post_commands,
            post_queries,
            session_commands,
            token_manager,
            upload_signer,
        }
    }

    pub fn token_manager(&self) -> Arc<TokenManagerPort> {
        Arc::clone(&self.token_manager)
    }

    pub fn upload_signer(&self) -> Option<Arc<UploadSignerPort>> {
        self.upload_signer.as_ref().map(Arc::clone)
    }
}
