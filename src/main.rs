use newsdesk::application::{
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
        uploads::UploadSigner,
        util::SlugGenerator,
    },
    services::ApplicationServices,
};
use newsdesk::config::AppConfig;
use newsdesk::domain::{
    admin::AdminDirectory,
    post::{PostReadRepository, PostWriteRepository},
};
use newsdesk::infrastructure::{
    database,
    repositories::{PostgresPostReadRepository, PostgresPostWriteRepository},
    security::{
        directory::StaticAdminDirectory, password::Argon2PasswordHasher, token::JwtTokenManager,
    },
    time::SystemClock,
    uploads::CloudinaryUploadSigner,
    util::DefaultSlugGenerator,
};
use newsdesk::presentation::http::{routes::build_router, state::HttpState};

use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let read_repo: Arc<dyn PostReadRepository> =
        Arc::new(PostgresPostReadRepository::new(pool.clone()));
    let write_repo: Arc<dyn PostWriteRepository> =
        Arc::new(PostgresPostWriteRepository::new(pool.clone()));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let token_manager: Arc<dyn TokenManager> = Arc::new(JwtTokenManager::new(
        config.jwt_secret(),
        config.token_ttl(),
        Arc::clone(&clock),
    ));
    let directory: Arc<dyn AdminDirectory> =
        Arc::new(StaticAdminDirectory::new(config.admin_users().to_vec()));
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator::default());
    let upload_signer: Option<Arc<dyn UploadSigner>> = config.upload().map(|upload| {
        Arc::new(CloudinaryUploadSigner::new(
            upload.clone(),
            Arc::clone(&clock),
        )) as Arc<dyn UploadSigner>
    });

    let services = Arc::new(ApplicationServices::new(
        write_repo,
        read_repo,
        directory,
        password_hasher,
        token_manager,
        slugger,
        upload_signer,
    ));

    let state = HttpState { services };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
