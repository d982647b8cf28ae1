mod config;
mod repos;
mod services;
mod system;

pub use config::{Config, ConfigError, Credentials, DispatcherConfig, ValidCredentials};
pub use repos::{IEventRepo, IUserRepo, InMemoryEventRepo, InMemoryUserRepo, Repos};
pub use services::*;
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticTimeSys};
use tracing::{info, warn};

#[derive(Clone)]
pub struct NotifierContext {
    pub repos: Repos,
    pub mailer: Arc<dyn IMailer>,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

impl NotifierContext {
    /// Context backed by in memory collaborators, used when testing
    pub fn create_inmemory(config: Config) -> Self {
        Self {
            repos: Repos::create_inmemory(),
            mailer: Arc::new(InMemoryMailer::new()),
            config,
            sys: Arc::new(RealSys {}),
        }
    }

    fn create(config: Config, credentials: &ValidCredentials) -> anyhow::Result<Self> {
        let repos = Repos::create_postgres(credentials)?;
        let mailer = MailgunMailer::new(&config.mail_api_base_url, credentials)?;
        Ok(Self {
            repos,
            mailer: Arc::new(mailer),
            config,
            sys: Arc::new(RealSys {}),
        })
    }
}

/// Will setup the infrastructure context given the environment
///
/// Incomplete credentials do not stop the service from starting. Every
/// notification run will then fail with the configuration error until an
/// operator provides the missing values.
pub async fn setup_context() -> anyhow::Result<NotifierContext> {
    let config = Config::new();
    match config.credentials.validate() {
        Ok(credentials) => {
            info!("Using postgres event store and mailgun mailer");
            NotifierContext::create(config, &credentials)
        }
        Err(e) => {
            warn!("{}. Notification runs will fail until it is provided.", e);
            Ok(NotifierContext::create_inmemory(config))
        }
    }
}
