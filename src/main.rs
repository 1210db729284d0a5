//! Agendapp HTTP server.
//!
//! Loads configuration from `AGENDAPP__*` environment variables (and `.env`),
//! opens the configured store, rebuilds the agenda, seeds an empty store and
//! serves the REST API until Ctrl-C.

use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use agendapp::adapters::postgres::{
    self, PostgresCourseRepository, PostgresSubjectRepository, PostgresTeacherRepository,
};
use agendapp::adapters::{app_router, CalendarHandlers, InMemoryCalendarStore};
use agendapp::application::Bootstrap;
use agendapp::config::{AppConfig, ConfigError, DatabaseConfig, ServerConfig, StoreBackend};
use agendapp::domain::calendar::{Agenda, CalendarError};
use agendapp::domain::foundation::DomainError;
use agendapp::ports::{CourseRepository, SubjectRepository, TeacherRepository};

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Store unavailable: {0}")]
    Store(#[from] DomainError),

    #[error("Bootstrap failed: {0}")]
    Bootstrap(#[from] CalendarError),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

struct Repositories {
    teachers: Arc<dyn TeacherRepository>,
    subjects: Arc<dyn SubjectRepository>,
    courses: Arc<dyn CourseRepository>,
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;

    init_tracing(&config.server);
    info!(
        environment = ?config.server.environment,
        backend = ?config.database.backend,
        "Starting agendapp"
    );

    let repositories = open_store(&config.database).await?;
    let agenda = Agenda::shared();

    let seed = if config.seed.enabled {
        Some(config.seed.dataset()?)
    } else {
        None
    };
    let report = Bootstrap::new(
        repositories.teachers.clone(),
        repositories.subjects.clone(),
        repositories.courses.clone(),
        agenda.clone(),
    )
    .run(seed.as_ref())
    .await?;
    info!(
        restored_courses = report.restored_courses,
        seeded = report.seeded,
        "Bootstrap complete"
    );

    let handlers = CalendarHandlers::new(
        repositories.teachers,
        repositories.subjects,
        repositories.courses,
        agenda,
    );
    let app = app_router(handlers, &config.server);

    let addr = config.server.socket_addr().map_err(ConfigError::from)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// `RUST_LOG` wins over the configured filter; production logs are JSON.
fn init_tracing(config: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if config.is_production() {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }
}

async fn open_store(config: &DatabaseConfig) -> Result<Repositories, DomainError> {
    match config.backend {
        StoreBackend::Memory => {
            let store = Arc::new(InMemoryCalendarStore::new());
            Ok(Repositories {
                teachers: store.clone(),
                subjects: store.clone(),
                courses: store,
            })
        }
        StoreBackend::Postgres => {
            let pool = postgres::connect(config).await?;
            if config.run_migrations {
                postgres::run_migrations(&pool).await?;
            }
            Ok(Repositories {
                teachers: Arc::new(PostgresTeacherRepository::new(pool.clone())),
                subjects: Arc::new(PostgresSubjectRepository::new(pool.clone())),
                courses: Arc::new(PostgresCourseRepository::new(pool)),
            })
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
