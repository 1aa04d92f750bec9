// src/application/commands/sessions/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{PasswordHasherPort, TokenManagerPort},
    domain::admin::AdminDirectory,
};

pub struct SessionCommandService {
    pub(super) directory: Arc<dyn AdminDirectory>,
    pub(super) password_hasher: Arc<PasswordHasherPort>,
    pub(super) token_manager: Arc<TokenManagerPort>,
}

impl SessionCommandService {
    pub fn new(
        directory: Arc<dyn AdminDirectory>,
        password_hasher: Arc<PasswordHasherPort>,
        token_manager: Arc<TokenManagerPort>,
    ) -> Self {
        Self {
            directory,
            password_hasher,
            token_manager,
        }
    }
}
