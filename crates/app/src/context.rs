//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    credentials::{CredentialHasher, Sha256Hasher},
    database::{self, Db},
    domain::{
        clients::{ClientsService, PgClientsService},
        customers::{CustomersService, CustomersSettings, PgCustomersService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub customers: Arc<dyn CustomersService>,
    pub clients: Arc<dyn ClientsService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(
        url: &str,
        settings: CustomersSettings,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self::from_db(Db::new(pool), settings))
    }

    /// Build application context over an existing pool, hashing with SHA-256.
    #[must_use]
    pub fn from_db(db: Db, settings: CustomersSettings) -> Self {
        let hasher: Arc<dyn CredentialHasher> = Arc::new(Sha256Hasher);

        Self {
            customers: Arc::new(PgCustomersService::new(
                db.clone(),
                Arc::clone(&hasher),
                settings,
            )),
            clients: Arc::new(PgClientsService::new(db, hasher)),
        }
    }
}
