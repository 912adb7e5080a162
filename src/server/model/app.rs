use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    util::{
        authorizer::{ApiKeyAuthorizer, Authorizer},
        mail::{LogMailer, Mailer},
    },
};

/// State shared by every request handler.
///
/// Immutable once built; the connection pool is the only resource shared
/// between requests.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<Config>,
    pub authorizer: Arc<dyn Authorizer>,
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    /// Builds the state with the API key authorizer and the logging mailer
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        let authorizer = Arc::new(ApiKeyAuthorizer::new(config.admin_api_key.clone()));

        Self {
            db,
            config: Arc::new(config),
            authorizer,
            mailer: Arc::new(LogMailer),
        }
    }

    /// Replaces the mailer, used to capture issued codes
    pub fn with_mailer(mut self, mailer: Arc<dyn Mailer>) -> Self {
        self.mailer = mailer;
        self
    }
}
