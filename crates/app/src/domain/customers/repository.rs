//! Customers Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{
    FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar,
    types::Json,
};

use crate::domain::{
    customers::{
        mapper::CustomerDraft,
        models::RawCustomer,
        records::{CustomerId, CustomerRecord},
        sorting::CustomerSortKey,
    },
    pagination::PageRequest,
    status::RecordStatus,
};

const SELECT_CUSTOMERS_SQL: &str = include_str!("sql/select_customers.sql");
const FIND_CUSTOMER_BY_ID_SQL: &str = include_str!("sql/find_customer_by_id.sql");
const FIND_CUSTOMER_BY_USER_NAME_SQL: &str = include_str!("sql/find_customer_by_user_name.sql");
const FIND_CUSTOMER_BY_MOBILE_NUMBER_SQL: &str =
    include_str!("sql/find_customer_by_mobile_number.sql");
const FIND_CUSTOMER_BY_EMAIL_ADDRESS_SQL: &str =
    include_str!("sql/find_customer_by_email_address.sql");
const USER_NAME_EXISTS_SQL: &str = include_str!("sql/user_name_exists.sql");
const MOBILE_NUMBER_EXISTS_SQL: &str = include_str!("sql/mobile_number_exists.sql");
const EMAIL_ADDRESS_EXISTS_SQL: &str = include_str!("sql/email_address_exists.sql");
const INSERT_CUSTOMER_SQL: &str = include_str!("sql/insert_customer.sql");
const UPDATE_PROFILE_BY_MOBILE_NUMBER_SQL: &str =
    include_str!("sql/update_profile_by_mobile_number.sql");
const UPDATE_MOBILE_NUMBER_SQL: &str = include_str!("sql/update_mobile_number.sql");
const UPDATE_STATUS_BY_MOBILE_NUMBER_SQL: &str =
    include_str!("sql/update_status_by_mobile_number.sql");
const UPDATE_ADDRESS_BY_USER_NAME_SQL: &str = include_str!("sql/update_address_by_user_name.sql");
const DELETE_INACTIVE_CUSTOMERS_SQL: &str = include_str!("sql/delete_inactive_customers.sql");
const FIND_CUSTOMERS_BY_USER_NAME_SUFFIX_SQL: &str =
    include_str!("sql/find_customers_by_user_name_suffix.sql");
const FIND_CUSTOMERS_BY_USER_NAME_PREFIX_SQL: &str =
    include_str!("sql/find_customers_by_user_name_prefix.sql");
const SEARCH_CUSTOMERS_BY_KEYWORD_SQL: &str = include_str!("sql/search_customers_by_keyword.sql");
const FIND_CUSTOMERS_PAGE_BY_USER_NAME_SQL: &str =
    include_str!("sql/find_customers_page_by_user_name.sql");
const COUNT_CUSTOMERS_BY_USER_NAME_SQL: &str =
    include_str!("sql/count_customers_by_user_name.sql");
const FIND_RAW_CUSTOMER_BY_EMAIL_ADDRESS_SQL: &str =
    include_str!("sql/find_raw_customer_by_email_address.sql");
const LIST_CUSTOMERS_SQL: &str = include_str!("sql/list_customers.sql");
const LIST_CUSTOMERS_PAGE_SQL: &str = include_str!("sql/list_customers_page.sql");
const COUNT_CUSTOMERS_SQL: &str = include_str!("sql/count_customers.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCustomersRepository;

impl PgCustomersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_by_id(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: CustomerId,
    ) -> Result<Option<CustomerRecord>, sqlx::Error> {
        query_as::<Postgres, CustomerRecord>(FIND_CUSTOMER_BY_ID_SQL)
            .bind(id.into_i64())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn find_by_user_name(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user_name: &str,
    ) -> Result<Option<CustomerRecord>, sqlx::Error> {
        query_as::<Postgres, CustomerRecord>(FIND_CUSTOMER_BY_USER_NAME_SQL)
            .bind(user_name)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn find_by_mobile_number(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        mobile_number: &str,
    ) -> Result<Option<CustomerRecord>, sqlx::Error> {
        query_as::<Postgres, CustomerRecord>(FIND_CUSTOMER_BY_MOBILE_NUMBER_SQL)
            .bind(mobile_number)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn find_by_email_address(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        email_address: &str,
    ) -> Result<Option<CustomerRecord>, sqlx::Error> {
        query_as::<Postgres, CustomerRecord>(FIND_CUSTOMER_BY_EMAIL_ADDRESS_SQL)
            .bind(email_address)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn user_name_exists(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user_name: &str,
        exclude: Option<CustomerId>,
    ) -> Result<bool, sqlx::Error> {
        exists(tx, USER_NAME_EXISTS_SQL, user_name, exclude).await
    }

    pub(crate) async fn mobile_number_exists(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        mobile_number: &str,
        exclude: Option<CustomerId>,
    ) -> Result<bool, sqlx::Error> {
        exists(tx, MOBILE_NUMBER_EXISTS_SQL, mobile_number, exclude).await
    }

    pub(crate) async fn email_address_exists(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        email_address: &str,
        exclude: Option<CustomerId>,
    ) -> Result<bool, sqlx::Error> {
        exists(tx, EMAIL_ADDRESS_EXISTS_SQL, email_address, exclude).await
    }

    pub(crate) async fn insert(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        draft: CustomerDraft,
    ) -> Result<CustomerRecord, sqlx::Error> {
        query_as::<Postgres, CustomerRecord>(INSERT_CUSTOMER_SQL)
            .bind(draft.user_name)
            .bind(draft.age)
            .bind(draft.mobile_number)
            .bind(draft.email_address)
            .bind(draft.address)
            .bind(draft.credential.as_str())
            .bind(draft.status.as_str())
            .bind(SqlxTimestamp::from(draft.created_at))
            .bind(SqlxTimestamp::from(draft.updated_at))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_profile_by_mobile_number(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        mobile_number: &str,
        user_name: &str,
        age: i32,
        email_address: &str,
        address: Option<&str>,
    ) -> Result<Option<CustomerRecord>, sqlx::Error> {
        query_as::<Postgres, CustomerRecord>(UPDATE_PROFILE_BY_MOBILE_NUMBER_SQL)
            .bind(mobile_number)
            .bind(user_name)
            .bind(age)
            .bind(email_address)
            .bind(address)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn update_mobile_number(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: CustomerId,
        mobile_number: &str,
    ) -> Result<CustomerRecord, sqlx::Error> {
        query_as::<Postgres, CustomerRecord>(UPDATE_MOBILE_NUMBER_SQL)
            .bind(id.into_i64())
            .bind(mobile_number)
            .fetch_one(&mut **tx)
            .await
    }

    /// Rewrite the status of the record owning `mobile_number` in one statement.
    ///
    /// Returns the rewritten row; `None` means no row was affected.
    pub(crate) async fn update_status_by_mobile_number(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        mobile_number: &str,
        status: RecordStatus,
    ) -> Result<Option<CustomerRecord>, sqlx::Error> {
        query_as::<Postgres, CustomerRecord>(UPDATE_STATUS_BY_MOBILE_NUMBER_SQL)
            .bind(mobile_number)
            .bind(status.as_str())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn update_address_by_user_name(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user_name: &str,
        address: &str,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(UPDATE_ADDRESS_BY_USER_NAME_SQL)
            .bind(user_name)
            .bind(address)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_inactive(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_INACTIVE_CUSTOMERS_SQL)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn find_by_user_name_ending_with(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        suffix: &str,
    ) -> Result<Vec<CustomerRecord>, sqlx::Error> {
        query_as::<Postgres, CustomerRecord>(FIND_CUSTOMERS_BY_USER_NAME_SUFFIX_SQL)
            .bind(escape_like(suffix))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn find_by_user_name_starting_with(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        prefix: &str,
    ) -> Result<Vec<CustomerRecord>, sqlx::Error> {
        query_as::<Postgres, CustomerRecord>(FIND_CUSTOMERS_BY_USER_NAME_PREFIX_SQL)
            .bind(escape_like(prefix))
            .fetch_all(&mut **tx)
            .await
    }

    /// Substring match on the lower-cased user name or email address.
    /// `keyword` must already be lower-case.
    pub(crate) async fn search_by_keyword(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        keyword: &str,
    ) -> Result<Vec<CustomerRecord>, sqlx::Error> {
        query_as::<Postgres, CustomerRecord>(SEARCH_CUSTOMERS_BY_KEYWORD_SQL)
            .bind(escape_like(keyword))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn find_page_by_user_name(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user_name: &str,
        page: PageRequest,
    ) -> Result<(Vec<CustomerRecord>, u64), sqlx::Error> {
        let records = query_as::<Postgres, CustomerRecord>(FIND_CUSTOMERS_PAGE_BY_USER_NAME_SQL)
            .bind(user_name)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&mut **tx)
            .await?;

        let total = query_scalar::<Postgres, i64>(COUNT_CUSTOMERS_BY_USER_NAME_SQL)
            .bind(user_name)
            .fetch_one(&mut **tx)
            .await?;

        Ok((records, decode_count(total)?))
    }

    pub(crate) async fn find_raw_by_email_address(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        email_address: &str,
    ) -> Result<Option<RawCustomer>, sqlx::Error> {
        let raw = query_scalar::<Postgres, Json<RawCustomer>>(FIND_RAW_CUSTOMER_BY_EMAIL_ADDRESS_SQL)
            .bind(email_address)
            .fetch_optional(&mut **tx)
            .await?;

        Ok(raw.map(|Json(raw)| raw))
    }

    pub(crate) async fn list_all(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<CustomerRecord>, sqlx::Error> {
        query_as::<Postgres, CustomerRecord>(LIST_CUSTOMERS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn count_all(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<u64, sqlx::Error> {
        let total = query_scalar::<Postgres, i64>(COUNT_CUSTOMERS_SQL)
            .fetch_one(&mut **tx)
            .await?;

        decode_count(total)
    }

    /// One page in id order, so consecutive pages never overlap.
    pub(crate) async fn list_page(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        page: PageRequest,
    ) -> Result<Vec<CustomerRecord>, sqlx::Error> {
        query_as::<Postgres, CustomerRecord>(LIST_CUSTOMERS_PAGE_SQL)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_page_sorted(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        page: PageRequest,
        sort: CustomerSortKey,
    ) -> Result<Vec<CustomerRecord>, sqlx::Error> {
        let sql = format!("{}\nLIMIT $1\nOFFSET $2", sorted_select(sort));

        query_as::<Postgres, CustomerRecord>(&sql)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&mut **tx)
            .await
    }

    /// Fetches one row past `cap` so the caller can tell a full listing
    /// from a truncated one.
    pub(crate) async fn list_sorted(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        sort: CustomerSortKey,
        cap: u32,
    ) -> Result<Vec<CustomerRecord>, sqlx::Error> {
        let sql = format!("{}\nLIMIT $1", sorted_select(sort));

        query_as::<Postgres, CustomerRecord>(&sql)
            .bind(i64::from(cap) + 1)
            .fetch_all(&mut **tx)
            .await
    }
}

async fn exists(
    tx: &mut Transaction<'_, Postgres>,
    sql: &'static str,
    value: &str,
    exclude: Option<CustomerId>,
) -> Result<bool, sqlx::Error> {
    query_scalar::<Postgres, bool>(sql)
        .bind(value)
        .bind(exclude.map(CustomerId::into_i64))
        .fetch_one(&mut **tx)
        .await
}

fn sorted_select(sort: CustomerSortKey) -> String {
    format!(
        "{}ORDER BY {} ASC, id ASC",
        SELECT_CUSTOMERS_SQL,
        sort.column()
    )
}

fn decode_count(total: i64) -> Result<u64, sqlx::Error> {
    u64::try_from(total).map_err(|e| sqlx::Error::ColumnDecode {
        index: "count".to_string(),
        source: Box::new(e),
    })
}

/// Escape `LIKE` metacharacters so caller input only ever matches literally.
pub(crate) fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }

        escaped.push(c);
    }

    escaped
}

impl<'r> FromRow<'r, PgRow> for CustomerRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status = row
            .try_get::<String, _>("status")?
            .parse::<RecordStatus>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            id: CustomerId::from_i64(row.try_get("id")?),
            user_name: row.try_get("user_name")?,
            age: row.try_get("age")?,
            mobile_number: row.try_get("mobile_number")?,
            email_address: row.try_get("email_address")?,
            address: row.try_get("address")?,
            credential: crate::credentials::Credential::from_digest(row.try_get("credential")?),
            status,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
