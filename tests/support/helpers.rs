// tests/support/helpers.rs
use std::{sync::Arc, time::Duration};

use axum::body::{self, Body};
use axum::http::{Request, header};
use axum::response::Response;
use serde_json::Value;

use newsdesk::application::ports::security::{PasswordHasher as _, TokenManager as _};
use newsdesk::application::ports::time::Clock;
use newsdesk::application::ports::uploads::UploadSigner;
use newsdesk::application::{dto::TokenSubject, services::ApplicationServices};
use newsdesk::config::UploadConfig;
use newsdesk::domain::admin::{AdminDirectory, AdminUser, Role};
use newsdesk::domain::post::{PostReadRepository, PostWriteRepository};
use newsdesk::infrastructure::security::{
    directory::StaticAdminDirectory, password::Argon2PasswordHasher, token::JwtTokenManager,
};
use newsdesk::infrastructure::time::SystemClock;
use newsdesk::infrastructure::uploads::CloudinaryUploadSigner;
use newsdesk::infrastructure::util::DefaultSlugGenerator;
use newsdesk::presentation::http::{routes::build_router, state::HttpState};

use super::mocks::{InMemoryPostRepo, RacySlugReads};

pub const TEST_ADMIN_EMAIL: &str = "marketing@example.com";
pub const TEST_ADMIN_PASSWORD: &str = "correct-horse-battery";
pub const TEST_JWT_SECRET: &str = "integration-test-secret-0123456789";

pub struct TestApp {
    pub router: axum::Router,
    pub state: HttpState,
    pub store: Arc<InMemoryPostRepo>,
}

/// Router over an in-memory store with one configured admin.
pub async fn spawn_app() -> TestApp {
    build_app(false, None).await
}

/// Like `spawn_app`, but slug-collision reads always come back empty,
/// reproducing two publishes racing through the read-then-write window.
pub async fn spawn_racy_app() -> TestApp {
    build_app(true, None).await
}

/// Like `spawn_app`, with upload signing configured.
pub async fn spawn_app_with_uploads(upload: UploadConfig) -> TestApp {
    build_app(false, Some(upload)).await
}

async fn build_app(blind_slug_reads: bool, upload: Option<UploadConfig>) -> TestApp {
    let store = Arc::new(InMemoryPostRepo::new());
    let write_repo: Arc<dyn PostWriteRepository> = store.clone();
    let read_repo: Arc<dyn PostReadRepository> = if blind_slug_reads {
        Arc::new(RacySlugReads(Arc::clone(&store)))
    } else {
        store.clone()
    };

    let hasher = Argon2PasswordHasher::default();
    let password_hash = hasher
        .hash(TEST_ADMIN_PASSWORD)
        .await
        .expect("hash test password");
    let directory: Arc<dyn AdminDirectory> = Arc::new(StaticAdminDirectory::new(vec![AdminUser {
        id: 1,
        name: "Admin".into(),
        email: TEST_ADMIN_EMAIL.into(),
        password_hash,
        role: Role::Admin,
    }]));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());
    let token_manager = Arc::new(JwtTokenManager::new(
        TEST_JWT_SECRET,
        Duration::from_secs(3600),
        Arc::clone(&clock),
    ));
    let upload_signer: Option<Arc<dyn UploadSigner>> = upload.map(|config| {
        Arc::new(CloudinaryUploadSigner::new(config, Arc::clone(&clock))) as Arc<dyn UploadSigner>
    });

    let services = Arc::new(ApplicationServices::new(
        write_repo,
        read_repo,
        directory,
        Arc::new(hasher),
        token_manager,
        Arc::new(DefaultSlugGenerator::default()),
        upload_signer,
    ));

    let state = HttpState { services };
    TestApp {
        router: build_router(state.clone()),
        state,
        store,
    }
}

/// A bearer token for the configured test admin.
pub async fn bearer_token(app: &TestApp) -> String {
    app.state
        .services
        .token_manager()
        .issue(TokenSubject {
            user_id: 1,
            name: "Admin".into(),
            email: TEST_ADMIN_EMAIL.into(),
            role: Role::Admin,
        })
        .await
        .expect("issue test token")
        .token
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get_authed(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, payload: &Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(payload.to_string())).unwrap()
}

pub async fn body_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("valid json body")
}
