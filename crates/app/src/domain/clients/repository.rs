//! Clients Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::{
    credentials::Credential,
    domain::{
        clients::{
            data::{ClientAddress, ClientUpdate},
            mapper::ClientDraft,
            records::{ClientId, ClientRecord},
        },
        status::RecordStatus,
    },
};

const FIND_CLIENT_BY_ID_SQL: &str = include_str!("sql/find_client_by_id.sql");
const LIST_CLIENTS_SQL: &str = include_str!("sql/list_clients.sql");
const INSERT_CLIENT_SQL: &str = include_str!("sql/insert_client.sql");
const UPDATE_CLIENT_SQL: &str = include_str!("sql/update_client.sql");
const UPDATE_CLIENT_STATUS_SQL: &str = include_str!("sql/update_client_status.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgClientsRepository;

impl PgClientsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_clients(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<ClientRecord>, sqlx::Error> {
        query_as::<Postgres, ClientRecord>(LIST_CLIENTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn find_client(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        client: ClientId,
    ) -> Result<Option<ClientRecord>, sqlx::Error> {
        query_as::<Postgres, ClientRecord>(FIND_CLIENT_BY_ID_SQL)
            .bind(client.into_i64())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_client(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        draft: ClientDraft,
    ) -> Result<ClientRecord, sqlx::Error> {
        let address = draft.address.as_ref();

        query_as::<Postgres, ClientRecord>(INSERT_CLIENT_SQL)
            .bind(&draft.name)
            .bind(draft.age)
            .bind(&draft.mobile_number)
            .bind(&draft.email_address)
            .bind(address.map(|a| a.line.as_str()))
            .bind(address.and_then(|a| a.city.as_deref()))
            .bind(address.and_then(|a| a.state.as_deref()))
            .bind(address.map(|a| a.country.as_str()))
            .bind(draft.credential.as_str())
            .bind(&draft.otp)
            .bind(draft.verified)
            .bind(draft.status.as_str())
            .bind(SqlxTimestamp::from(draft.created_at))
            .bind(SqlxTimestamp::from(draft.updated_at))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_client(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        client: ClientId,
        update: &ClientUpdate,
    ) -> Result<Option<ClientRecord>, sqlx::Error> {
        let address = update.address.as_ref();

        query_as::<Postgres, ClientRecord>(UPDATE_CLIENT_SQL)
            .bind(client.into_i64())
            .bind(&update.name)
            .bind(update.age)
            .bind(&update.mobile_number)
            .bind(&update.email_address)
            .bind(address.map(|a| a.line.as_str()))
            .bind(address.and_then(|a| a.city.as_deref()))
            .bind(address.and_then(|a| a.state.as_deref()))
            .bind(address.map(|a| a.country.as_str()))
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn update_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        client: ClientId,
        status: RecordStatus,
    ) -> Result<Option<ClientRecord>, sqlx::Error> {
        query_as::<Postgres, ClientRecord>(UPDATE_CLIENT_STATUS_SQL)
            .bind(client.into_i64())
            .bind(status.as_str())
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ClientRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status = row
            .try_get::<String, _>("status")?
            .parse::<RecordStatus>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(e),
            })?;

        let line: Option<String> = row.try_get("address_line")?;
        let country: Option<String> = row.try_get("country")?;

        let address = match (line, country) {
            (Some(line), Some(country)) => Some(ClientAddress {
                line,
                city: row.try_get("city")?,
                state: row.try_get("state")?,
                country,
            }),
            _ => None,
        };

        Ok(Self {
            id: ClientId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            age: row.try_get("age")?,
            mobile_number: row.try_get("mobile_number")?,
            email_address: row.try_get("email_address")?,
            address,
            credential: Credential::from_digest(row.try_get("credential")?),
            otp: row.try_get("otp")?,
            verified: row.try_get("verified")?,
            status,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
