//! Family Lab server binary.

use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use family_lab::adapters::auth::MockAuthBackend;
use family_lab::adapters::email::{EmailJsMailer, LoggingMailer};
use family_lab::adapters::http::api_router;
use family_lab::adapters::storage::FileStateStorage;
use family_lab::adapters::survey::MockSurveyProvider;
use family_lab::application::{AppServices, ServiceDependencies};
use family_lab::config::AppConfig;
use family_lab::domain::survey::SurveyCatalog;
use family_lab::domain::tips::TipsCatalog;
use family_lab::ports::PasswordResetMailer;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let catalog = Arc::new(SurveyCatalog::bundled()?);
    let tips = Arc::new(TipsCatalog::bundled()?);
    tracing::info!(surveys = catalog.len(), tips = tips.len(), "content loaded");

    let mailer: Arc<dyn PasswordResetMailer> = match config.email.emailjs() {
        Some(emailjs) => Arc::new(EmailJsMailer::new(emailjs)?),
        None => {
            tracing::warn!("email service not configured; password reset emails will be logged");
            Arc::new(LoggingMailer)
        }
    };

    let services = AppServices::new(ServiceDependencies {
        auth_backend: Arc::new(
            MockAuthBackend::new().with_latency(config.simulation.auth_latency()),
        ),
        survey_provider: Arc::new(
            MockSurveyProvider::new(catalog.clone())
                .with_latency(config.simulation.survey_latency())
                .with_demo_partner(config.simulation.demo_partner),
        ),
        storage: Arc::new(FileStateStorage::new(&config.storage.data_dir)),
        mailer,
        catalog,
        tips,
        public_origin: config.server.public_origin().to_string(),
    })
    .await;

    let app = api_router(services, &config.server);
    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
