//! Clients service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::info;
use validator::Validate;

use crate::{
    credentials::CredentialHasher,
    database::Db,
    domain::{
        clients::{
            data::{ClientUpdate, NewClient},
            errors::ClientsServiceError,
            mapper::ClientDraft,
            models::Client,
            records::ClientId,
            repository::PgClientsRepository,
        },
        status::RecordStatus,
    },
};

#[derive(Debug, Clone)]
pub struct PgClientsService {
    db: Db,
    hasher: Arc<dyn CredentialHasher>,
    repository: PgClientsRepository,
}

impl PgClientsService {
    #[must_use]
    pub fn new(db: Db, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self {
            db,
            hasher,
            repository: PgClientsRepository::new(),
        }
    }
}

#[async_trait]
impl ClientsService for PgClientsService {
    async fn create_client(&self, client: NewClient) -> Result<Client, ClientsServiceError> {
        client.validate()?;

        let mut tx = self.db.begin_transaction().await?;

        let draft = ClientDraft::from_new(client, self.hasher.as_ref(), Timestamp::now());

        let created = self.repository.create_client(&mut tx, draft).await?;

        tx.commit().await?;

        info!(client.id = %created.id, "created client");

        Ok(created.into())
    }

    async fn list_clients(&self) -> Result<Vec<Client>, ClientsServiceError> {
        let mut tx = self.db.begin_read_transaction().await?;

        let records = self.repository.list_clients(&mut tx).await?;

        tx.commit().await?;

        Ok(records.into_iter().map(Client::from).collect())
    }

    async fn get_client(&self, client: ClientId) -> Result<Client, ClientsServiceError> {
        let mut tx = self.db.begin_read_transaction().await?;

        let record = self
            .repository
            .find_client(&mut tx, client)
            .await?
            .ok_or(ClientsServiceError::NotFound(client))?;

        tx.commit().await?;

        Ok(record.into())
    }

    async fn update_client(
        &self,
        client: ClientId,
        update: ClientUpdate,
    ) -> Result<Client, ClientsServiceError> {
        update.validate()?;

        let mut tx = self.db.begin_transaction().await?;

        let updated = self
            .repository
            .update_client(&mut tx, client, &update)
            .await?
            .ok_or(ClientsServiceError::NotFound(client))?;

        tx.commit().await?;

        Ok(updated.into())
    }

    async fn soft_delete_client(&self, client: ClientId) -> Result<Client, ClientsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let updated = self
            .repository
            .update_status(&mut tx, client, RecordStatus::Inactive)
            .await?
            .ok_or(ClientsServiceError::NotFound(client))?;

        tx.commit().await?;

        Ok(updated.into())
    }
}

#[automock]
#[async_trait]
pub trait ClientsService: Send + Sync {
    /// Creates an unverified client with a hashed credential and a one-time code.
    async fn create_client(&self, client: NewClient) -> Result<Client, ClientsServiceError>;

    /// Retrieves all clients.
    async fn list_clients(&self) -> Result<Vec<Client>, ClientsServiceError>;

    /// Retrieve a single client.
    async fn get_client(&self, client: ClientId) -> Result<Client, ClientsServiceError>;

    /// Replaces the profile of a client.
    async fn update_client(
        &self,
        client: ClientId,
        update: ClientUpdate,
    ) -> Result<Client, ClientsServiceError>;

    /// Marks a client inactive.
    async fn soft_delete_client(&self, client: ClientId) -> Result<Client, ClientsServiceError>;
}
