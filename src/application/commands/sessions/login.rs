// src/application/commands/sessions/login.rs
use super::SessionCommandService;
use crate::application::{
    dto::{AdminUserDto, AuthTokenDto, TokenSubject},
    error::{ApplicationError, ApplicationResult},
};

pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

pub struct LoginOutcome {
    pub token: AuthTokenDto,
    pub user: AdminUserDto,
}

impl SessionCommandService {
    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<LoginOutcome> {
        let email = command.email.trim().to_lowercase();
        let user = self
            .directory
            .find_by_email(&email)
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        self.password_hasher
            .verify(&command.password, &user.password_hash)
            .await?;

        let token = self
            .token_manager
            .issue(TokenSubject::from_admin(&user))
            .await?;

        Ok(LoginOutcome {
            token,
            user: user.into(),
        })
    }
}
