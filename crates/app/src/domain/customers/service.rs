//! Customers service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::{debug, info, warn};
use validator::Validate;

use crate::{
    credentials::CredentialHasher,
    database::Db,
    domain::{
        customers::{
            data::{CustomerUpdate, NewCustomer},
            errors::CustomersServiceError,
            mapper::CustomerDraft,
            models::{Customer, RawCustomer},
            records::CustomerId,
            repository::PgCustomersRepository,
            sorting::CustomerSortKey,
            uniqueness::{Candidate, Conflicts, UniqueField, find_conflicts},
        },
        pagination::{Page, PageRequest},
        status::RecordStatus,
        validation::{describe, validate_mobile_number},
    },
};

/// Default upper bound on the sort-only listing.
pub const DEFAULT_SORTED_LISTING_CAP: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomersSettings {
    /// Most records the sort-only listing returns.
    pub sorted_listing_cap: u32,
}

impl Default for CustomersSettings {
    fn default() -> Self {
        Self {
            sorted_listing_cap: DEFAULT_SORTED_LISTING_CAP,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PgCustomersService {
    db: Db,
    hasher: Arc<dyn CredentialHasher>,
    settings: CustomersSettings,
    repository: PgCustomersRepository,
}

impl PgCustomersService {
    #[must_use]
    pub fn new(db: Db, hasher: Arc<dyn CredentialHasher>, settings: CustomersSettings) -> Self {
        Self {
            db,
            hasher,
            settings,
            repository: PgCustomersRepository::new(),
        }
    }
}

#[async_trait]
impl CustomersService for PgCustomersService {
    async fn create_customer(
        &self,
        customer: NewCustomer,
    ) -> Result<Customer, CustomersServiceError> {
        customer.validate()?;

        let mut tx = self.db.begin_transaction().await?;

        let conflicts = find_conflicts(
            &self.repository,
            &mut tx,
            Candidate {
                user_name: Some(&customer.user_name),
                email_address: Some(&customer.email_address),
                mobile_number: Some(&customer.mobile_number),
            },
            None,
        )
        .await?;

        if !conflicts.is_empty() {
            debug!(%conflicts, "rejecting duplicate customer");

            return Err(CustomersServiceError::AlreadyExists(conflicts));
        }

        let draft = CustomerDraft::from_new(customer, self.hasher.as_ref(), Timestamp::now());

        let created = self.repository.insert(&mut tx, draft).await?;

        tx.commit().await?;

        info!(customer.id = %created.id, "created customer");

        Ok(created.into())
    }

    async fn list_customers(&self) -> Result<Vec<Customer>, CustomersServiceError> {
        let mut tx = self.db.begin_read_transaction().await?;

        let records = self.repository.list_all(&mut tx).await?;

        tx.commit().await?;

        Ok(records.into_iter().map(Customer::from).collect())
    }

    async fn get_by_id(&self, id: CustomerId) -> Result<Customer, CustomersServiceError> {
        let mut tx = self.db.begin_read_transaction().await?;

        let record = self
            .repository
            .find_by_id(&mut tx, id)
            .await?
            .ok_or_else(|| CustomersServiceError::NotFound(id.to_string()))?;

        tx.commit().await?;

        Ok(record.into())
    }

    async fn get_by_mobile_number(
        &self,
        mobile_number: &str,
    ) -> Result<Customer, CustomersServiceError> {
        let mut tx = self.db.begin_read_transaction().await?;

        let record = self
            .repository
            .find_by_mobile_number(&mut tx, mobile_number)
            .await?
            .ok_or_else(|| CustomersServiceError::NotFound(mobile_number.to_string()))?;

        tx.commit().await?;

        Ok(record.into())
    }

    async fn get_by_user_name(&self, user_name: &str) -> Result<Customer, CustomersServiceError> {
        let mut tx = self.db.begin_read_transaction().await?;

        let record = self
            .repository
            .find_by_user_name(&mut tx, user_name)
            .await?
            .ok_or_else(|| CustomersServiceError::NotFound(user_name.to_string()))?;

        tx.commit().await?;

        Ok(record.into())
    }

    async fn get_by_email_address(
        &self,
        email_address: &str,
    ) -> Result<Customer, CustomersServiceError> {
        let mut tx = self.db.begin_read_transaction().await?;

        let record = self
            .repository
            .find_by_email_address(&mut tx, email_address)
            .await?
            .ok_or_else(|| CustomersServiceError::NotFound(email_address.to_string()))?;

        tx.commit().await?;

        Ok(record.into())
    }

    async fn update_customer(
        &self,
        update: CustomerUpdate,
    ) -> Result<Customer, CustomersServiceError> {
        update.validate()?;

        let mut tx = self.db.begin_transaction().await?;

        let existing = self
            .repository
            .find_by_mobile_number(&mut tx, &update.mobile_number)
            .await?
            .ok_or_else(|| CustomersServiceError::NotFound(update.mobile_number.clone()))?;

        let conflicts = find_conflicts(
            &self.repository,
            &mut tx,
            Candidate {
                user_name: Some(&update.user_name),
                email_address: Some(&update.email_address),
                mobile_number: None,
            },
            Some(existing.id),
        )
        .await?;

        if !conflicts.is_empty() {
            return Err(CustomersServiceError::AlreadyExists(conflicts));
        }

        let updated = self
            .repository
            .update_profile_by_mobile_number(
                &mut tx,
                &update.mobile_number,
                &update.user_name,
                update.age,
                &update.email_address,
                update.address.as_deref(),
            )
            .await?
            .ok_or_else(|| CustomersServiceError::NotFound(update.mobile_number.clone()))?;

        tx.commit().await?;

        Ok(updated.into())
    }

    async fn soft_delete(&self, mobile_number: &str) -> Result<Customer, CustomersServiceError> {
        self.change_status(mobile_number, RecordStatus::Inactive)
            .await
    }

    async fn change_mobile_number(
        &self,
        user_name: &str,
        mobile_number: &str,
    ) -> Result<Customer, CustomersServiceError> {
        validate_mobile_number(mobile_number).map_err(|error| {
            CustomersServiceError::ValidationFailed(vec![describe("mobileNumber", &error)])
        })?;

        let mut tx = self.db.begin_transaction().await?;

        let existing = self
            .repository
            .find_by_user_name(&mut tx, user_name)
            .await?
            .ok_or_else(|| CustomersServiceError::NotFound(user_name.to_string()))?;

        if self
            .repository
            .mobile_number_exists(&mut tx, mobile_number, Some(existing.id))
            .await?
        {
            return Err(CustomersServiceError::AlreadyExists(Conflicts::single(
                UniqueField::MobileNumber,
            )));
        }

        let updated = self
            .repository
            .update_mobile_number(&mut tx, existing.id, mobile_number)
            .await?;

        tx.commit().await?;

        info!(customer.id = %updated.id, "changed customer mobile number");

        Ok(updated.into())
    }

    async fn change_status(
        &self,
        mobile_number: &str,
        status: RecordStatus,
    ) -> Result<Customer, CustomersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let updated = self
            .repository
            .update_status_by_mobile_number(&mut tx, mobile_number, status)
            .await?
            .ok_or_else(|| CustomersServiceError::NotFound(mobile_number.to_string()))?;

        tx.commit().await?;

        Ok(updated.into())
    }

    async fn find_by_user_name_ending_with(
        &self,
        suffix: &str,
    ) -> Result<Vec<Customer>, CustomersServiceError> {
        let mut tx = self.db.begin_read_transaction().await?;

        let records = self
            .repository
            .find_by_user_name_ending_with(&mut tx, suffix)
            .await?;

        tx.commit().await?;

        Ok(records.into_iter().map(Customer::from).collect())
    }

    async fn find_by_user_name_starting_with(
        &self,
        prefix: &str,
    ) -> Result<Vec<Customer>, CustomersServiceError> {
        let mut tx = self.db.begin_read_transaction().await?;

        let records = self
            .repository
            .find_by_user_name_starting_with(&mut tx, prefix)
            .await?;

        tx.commit().await?;

        Ok(records.into_iter().map(Customer::from).collect())
    }

    async fn search_by_keyword(&self, keyword: &str) -> Result<Vec<Customer>, CustomersServiceError> {
        let keyword = keyword.to_lowercase();

        let mut tx = self.db.begin_read_transaction().await?;

        let records = self.repository.search_by_keyword(&mut tx, &keyword).await?;

        tx.commit().await?;

        Ok(records.into_iter().map(Customer::from).collect())
    }

    async fn find_page_by_user_name(
        &self,
        user_name: &str,
        page: PageRequest,
    ) -> Result<Page<Customer>, CustomersServiceError> {
        let mut tx = self.db.begin_read_transaction().await?;

        let (records, total) = self
            .repository
            .find_page_by_user_name(&mut tx, user_name, page)
            .await?;

        tx.commit().await?;

        Ok(Page::new(records, page, total).map(Customer::from))
    }

    async fn find_raw_by_email_address(
        &self,
        email_address: &str,
    ) -> Result<RawCustomer, CustomersServiceError> {
        let mut tx = self.db.begin_read_transaction().await?;

        let raw = self
            .repository
            .find_raw_by_email_address(&mut tx, email_address)
            .await?
            .ok_or_else(|| CustomersServiceError::NotFound(email_address.to_string()))?;

        tx.commit().await?;

        Ok(raw)
    }

    async fn update_address_by_user_name(
        &self,
        user_name: &str,
        address: &str,
    ) -> Result<u64, CustomersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self
            .repository
            .update_address_by_user_name(&mut tx, user_name, address)
            .await?;

        tx.commit().await?;

        Ok(rows_affected)
    }

    async fn purge_inactive(&self) -> Result<u64, CustomersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self.repository.delete_inactive(&mut tx).await?;

        tx.commit().await?;

        info!(removed = rows_affected, "purged inactive customers");

        Ok(rows_affected)
    }

    async fn list_page(&self, page: PageRequest) -> Result<Page<Customer>, CustomersServiceError> {
        let mut tx = self.db.begin_read_transaction().await?;

        let records = self.repository.list_page(&mut tx, page).await?;
        let total = self.repository.count_all(&mut tx).await?;

        tx.commit().await?;

        Ok(Page::new(records, page, total).map(Customer::from))
    }

    async fn list_page_sorted(
        &self,
        page: PageRequest,
        sort_by: &str,
    ) -> Result<Page<Customer>, CustomersServiceError> {
        let sort = sort_by.parse::<CustomerSortKey>()?;

        let mut tx = self.db.begin_read_transaction().await?;

        let records = self
            .repository
            .list_page_sorted(&mut tx, page, sort)
            .await?;
        let total = self.repository.count_all(&mut tx).await?;

        tx.commit().await?;

        Ok(Page::new(records, page, total).map(Customer::from))
    }

    async fn list_sorted(&self, sort_by: &str) -> Result<Vec<Customer>, CustomersServiceError> {
        let sort = sort_by.parse::<CustomerSortKey>()?;
        let cap = self.settings.sorted_listing_cap;

        let mut tx = self.db.begin_read_transaction().await?;

        let mut records = self.repository.list_sorted(&mut tx, sort, cap).await?;

        tx.commit().await?;

        let limit = usize::try_from(cap).unwrap_or(usize::MAX);

        if records.len() > limit {
            warn!(cap, sort_by, "sorted listing truncated at cap");

            records.truncate(limit);
        }

        Ok(records.into_iter().map(Customer::from).collect())
    }
}

#[automock]
#[async_trait]
pub trait CustomersService: Send + Sync {
    /// Creates a customer, rejecting every identifying field already in use.
    async fn create_customer(&self, customer: NewCustomer)
    -> Result<Customer, CustomersServiceError>;

    /// Retrieves all customers.
    async fn list_customers(&self) -> Result<Vec<Customer>, CustomersServiceError>;

    async fn get_by_id(&self, id: CustomerId) -> Result<Customer, CustomersServiceError>;

    async fn get_by_mobile_number(
        &self,
        mobile_number: &str,
    ) -> Result<Customer, CustomersServiceError>;

    async fn get_by_user_name(&self, user_name: &str) -> Result<Customer, CustomersServiceError>;

    async fn get_by_email_address(
        &self,
        email_address: &str,
    ) -> Result<Customer, CustomersServiceError>;

    /// Overwrites the profile of the customer owning `update.mobile_number`.
    async fn update_customer(&self, update: CustomerUpdate)
    -> Result<Customer, CustomersServiceError>;

    /// Marks a customer inactive. Repeating it refreshes `updated_at` again.
    async fn soft_delete(&self, mobile_number: &str) -> Result<Customer, CustomersServiceError>;

    /// Moves a customer, found by user name, onto a new mobile number.
    async fn change_mobile_number(
        &self,
        user_name: &str,
        mobile_number: &str,
    ) -> Result<Customer, CustomersServiceError>;

    async fn change_status(
        &self,
        mobile_number: &str,
        status: RecordStatus,
    ) -> Result<Customer, CustomersServiceError>;

    async fn find_by_user_name_ending_with(
        &self,
        suffix: &str,
    ) -> Result<Vec<Customer>, CustomersServiceError>;

    async fn find_by_user_name_starting_with(
        &self,
        prefix: &str,
    ) -> Result<Vec<Customer>, CustomersServiceError>;

    /// Case-insensitive substring search over user name and email address.
    async fn search_by_keyword(&self, keyword: &str) -> Result<Vec<Customer>, CustomersServiceError>;

    async fn find_page_by_user_name(
        &self,
        user_name: &str,
        page: PageRequest,
    ) -> Result<Page<Customer>, CustomersServiceError>;

    /// Loosely-typed view of one customer, without the credential.
    async fn find_raw_by_email_address(
        &self,
        email_address: &str,
    ) -> Result<RawCustomer, CustomersServiceError>;

    /// Returns the number of rows rewritten.
    async fn update_address_by_user_name(
        &self,
        user_name: &str,
        address: &str,
    ) -> Result<u64, CustomersServiceError>;

    /// Deletes every inactive customer and returns how many were removed.
    async fn purge_inactive(&self) -> Result<u64, CustomersServiceError>;

    async fn list_page(&self, page: PageRequest) -> Result<Page<Customer>, CustomersServiceError>;

    async fn list_page_sorted(
        &self,
        page: PageRequest,
        sort_by: &str,
    ) -> Result<Page<Customer>, CustomersServiceError>;

    /// Every customer ordered by `sort_by`, up to the configured cap.
    async fn list_sorted(&self, sort_by: &str) -> Result<Vec<Customer>, CustomersServiceError>;
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use testresult::TestResult;

    use crate::{
        credentials::Sha256Hasher,
        domain::customers::records::CustomerRecord,
        test::{TestContext, helpers::new_customer},
    };

    use super::*;

    #[tokio::test]
    async fn create_then_read_back_by_every_unique_key() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx
            .customers
            .create_customer(new_customer("neo", "9000000001", "neo@x.com"))
            .await?;

        assert_eq!(created.status, RecordStatus::Active);
        assert_eq!(created.created_at, created.updated_at);
        assert_eq!(created.address.as_deref(), Some("Zion"));

        let by_mobile = ctx.customers.get_by_mobile_number("9000000001").await?;
        let by_user = ctx.customers.get_by_user_name("neo").await?;
        let by_email = ctx.customers.get_by_email_address("neo@x.com").await?;

        assert_eq!(by_mobile, created);
        assert_eq!(by_user, created);
        assert_eq!(by_email, created);

        Ok(())
    }

    #[tokio::test]
    async fn create_stores_only_a_hashed_credential() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.customers
            .create_customer(new_customer("neo", "9000000001", "neo@x.com"))
            .await?;

        let credential: String =
            sqlx::query_scalar("SELECT credential FROM customers WHERE user_name = 'neo'")
                .fetch_one(ctx.db.pool())
                .await?;

        assert_eq!(credential.len(), 64);
        assert!(credential.bytes().all(|b| b.is_ascii_hexdigit()));

        Ok(())
    }

    #[tokio::test]
    async fn create_with_duplicate_mobile_lists_only_mobile() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.customers
            .create_customer(new_customer("neo", "9000000001", "neo@x.com"))
            .await?;

        let result = ctx
            .customers
            .create_customer(new_customer("smith", "9000000001", "smith@x.com"))
            .await;

        match result {
            Err(CustomersServiceError::AlreadyExists(conflicts)) => {
                assert_eq!(conflicts.fields(), &[UniqueField::MobileNumber]);
            }
            other => panic!("expected AlreadyExists, got {other:?}"),
        }

        Ok(())
    }

    #[tokio::test]
    async fn create_with_every_field_colliding_lists_all_of_them() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.customers
            .create_customer(new_customer("neo", "9000000001", "neo@x.com"))
            .await?;

        let result = ctx
            .customers
            .create_customer(new_customer("neo", "9000000001", "neo@x.com"))
            .await;

        match result {
            Err(CustomersServiceError::AlreadyExists(conflicts)) => {
                assert_eq!(
                    conflicts.fields(),
                    &[
                        UniqueField::UserName,
                        UniqueField::EmailAddress,
                        UniqueField::MobileNumber
                    ]
                );
            }
            other => panic!("expected AlreadyExists, got {other:?}"),
        }

        assert_eq!(ctx.customers.list_customers().await?.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn inactive_records_still_hold_their_identifiers() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.customers
            .create_customer(new_customer("neo", "9000000001", "neo@x.com"))
            .await?;
        ctx.customers.soft_delete("9000000001").await?;

        let result = ctx
            .customers
            .create_customer(new_customer("neo", "9000000002", "other@x.com"))
            .await;

        assert!(
            matches!(result, Err(CustomersServiceError::AlreadyExists(ref c)) if c.contains(UniqueField::UserName)),
            "expected userName conflict, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_invalid_input() -> TestResult {
        let ctx = TestContext::new().await;

        let mut customer = new_customer("", "12345", "not-an-email");
        customer.age = 0;

        let result = ctx.customers.create_customer(customer).await;

        match result {
            Err(CustomersServiceError::ValidationFailed(messages)) => {
                assert_eq!(messages.len(), 4, "got {messages:?}");
                assert!(messages.contains(&"Please provide username".to_string()));
                assert!(
                    messages.contains(&"Please provide a valid 10 digit mobile number".to_string())
                );
            }
            other => panic!("expected ValidationFailed, got {other:?}"),
        }

        Ok(())
    }

    #[tokio::test]
    async fn get_missing_customer_names_the_key() -> TestResult {
        let ctx = TestContext::new().await;

        let result = ctx.customers.get_by_user_name("nobody").await;

        assert!(
            matches!(result, Err(CustomersServiceError::NotFound(ref key)) if key == "nobody"),
            "got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn soft_delete_twice_stays_inactive_and_refreshes_updated_at() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.customers
            .create_customer(new_customer("neo", "9000000001", "neo@x.com"))
            .await?;

        let first = ctx.customers.soft_delete("9000000001").await?;
        let second = ctx.customers.soft_delete("9000000001").await?;

        assert_eq!(first.status, RecordStatus::Inactive);
        assert_eq!(second.status, RecordStatus::Inactive);
        assert!(second.updated_at > first.updated_at);
        assert_eq!(second.created_at, first.created_at);

        Ok(())
    }

    #[tokio::test]
    async fn soft_delete_of_unknown_mobile_is_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        let result = ctx.customers.soft_delete("0000000000").await;

        assert!(
            matches!(result, Err(CustomersServiceError::NotFound(ref key)) if key == "0000000000"),
            "got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn change_status_can_reactivate() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.customers
            .create_customer(new_customer("neo", "9000000001", "neo@x.com"))
            .await?;
        ctx.customers.soft_delete("9000000001").await?;

        let reactivated = ctx
            .customers
            .change_status("9000000001", RecordStatus::Active)
            .await?;

        assert_eq!(reactivated.status, RecordStatus::Active);

        Ok(())
    }

    #[tokio::test]
    async fn update_overwrites_profile_and_refreshes_updated_at() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx
            .customers
            .create_customer(new_customer("neo", "9000000001", "neo@x.com"))
            .await?;

        let updated = ctx
            .customers
            .update_customer(CustomerUpdate {
                mobile_number: "9000000001".to_string(),
                user_name: "thomas".to_string(),
                age: 40,
                email_address: "anderson@x.com".to_string(),
                address: None,
            })
            .await?;

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.user_name, "thomas");
        assert_eq!(updated.age, 40);
        assert_eq!(updated.email_address, "anderson@x.com");
        assert_eq!(updated.mobile_number, "9000000001");
        assert!(updated.address.is_none());
        assert!(updated.updated_at > created.updated_at);

        Ok(())
    }

    #[tokio::test]
    async fn update_rejects_email_owned_by_another_customer() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.customers
            .create_customer(new_customer("neo", "9000000001", "neo@x.com"))
            .await?;
        ctx.customers
            .create_customer(new_customer("trinity", "9000000002", "trinity@x.com"))
            .await?;

        let result = ctx
            .customers
            .update_customer(CustomerUpdate {
                mobile_number: "9000000002".to_string(),
                user_name: "trinity".to_string(),
                age: 30,
                email_address: "neo@x.com".to_string(),
                address: None,
            })
            .await;

        match result {
            Err(CustomersServiceError::AlreadyExists(conflicts)) => {
                assert_eq!(conflicts.fields(), &[UniqueField::EmailAddress]);
            }
            other => panic!("expected AlreadyExists, got {other:?}"),
        }

        Ok(())
    }

    #[tokio::test]
    async fn update_of_unknown_mobile_is_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        let result = ctx
            .customers
            .update_customer(CustomerUpdate {
                mobile_number: "9999999999".to_string(),
                user_name: "ghost".to_string(),
                age: 30,
                email_address: "ghost@x.com".to_string(),
                address: None,
            })
            .await;

        assert!(matches!(result, Err(CustomersServiceError::NotFound(_))));

        Ok(())
    }

    #[tokio::test]
    async fn change_mobile_to_one_already_owned_conflicts() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.customers
            .create_customer(new_customer("neo", "9000000001", "neo@x.com"))
            .await?;
        ctx.customers
            .create_customer(new_customer("trinity", "9000000002", "trinity@x.com"))
            .await?;

        let result = ctx
            .customers
            .change_mobile_number("neo", "9000000002")
            .await;

        match result {
            Err(CustomersServiceError::AlreadyExists(conflicts)) => {
                assert_eq!(conflicts.fields(), &[UniqueField::MobileNumber]);
            }
            other => panic!("expected AlreadyExists, got {other:?}"),
        }

        Ok(())
    }

    #[tokio::test]
    async fn change_mobile_to_fresh_number_frees_the_old_one() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.customers
            .create_customer(new_customer("neo", "9000000001", "neo@x.com"))
            .await?;

        let moved = ctx
            .customers
            .change_mobile_number("neo", "9000000009")
            .await?;

        assert_eq!(moved.mobile_number, "9000000009");
        assert_eq!(
            ctx.customers.get_by_mobile_number("9000000009").await?.id,
            moved.id
        );

        let reused = ctx
            .customers
            .create_customer(new_customer("morpheus", "9000000001", "morpheus@x.com"))
            .await?;

        assert_eq!(reused.mobile_number, "9000000001");

        Ok(())
    }

    #[tokio::test]
    async fn change_mobile_to_own_number_is_allowed() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.customers
            .create_customer(new_customer("neo", "9000000001", "neo@x.com"))
            .await?;

        let same = ctx
            .customers
            .change_mobile_number("neo", "9000000001")
            .await?;

        assert_eq!(same.mobile_number, "9000000001");

        Ok(())
    }

    #[tokio::test]
    async fn change_mobile_validates_format_and_owner() -> TestResult {
        let ctx = TestContext::new().await;

        let invalid = ctx.customers.change_mobile_number("neo", "12ab").await;
        let missing = ctx
            .customers
            .change_mobile_number("nobody", "9000000001")
            .await;

        assert!(matches!(
            invalid,
            Err(CustomersServiceError::ValidationFailed(_))
        ));
        assert!(matches!(missing, Err(CustomersServiceError::NotFound(_))));

        Ok(())
    }

    #[tokio::test]
    async fn purge_removes_all_and_only_inactive_records() -> TestResult {
        let ctx = TestContext::new().await;

        for (index, name) in ["a", "b", "c", "d"].into_iter().enumerate() {
            ctx.customers
                .create_customer(new_customer(
                    name,
                    &format!("900000000{index}"),
                    &format!("{name}@x.com"),
                ))
                .await?;
        }

        ctx.customers.soft_delete("9000000001").await?;
        ctx.customers.soft_delete("9000000003").await?;

        let before = ctx.customers.list_customers().await?.len();
        let removed = ctx.customers.purge_inactive().await?;
        let after = ctx.customers.list_customers().await?;

        assert_eq!(removed, 2);
        assert_eq!(after.len(), before - 2);
        assert!(after.iter().all(|c| c.status == RecordStatus::Active));

        Ok(())
    }

    #[tokio::test]
    async fn pages_cover_the_full_set_without_overlap() -> TestResult {
        let ctx = TestContext::new().await;

        for index in 0..7 {
            ctx.customers
                .create_customer(new_customer(
                    &format!("user{index}"),
                    &format!("900000000{index}"),
                    &format!("user{index}@x.com"),
                ))
                .await?;
        }

        let all = ctx
            .customers
            .list_customers()
            .await?
            .into_iter()
            .map(|c| c.id)
            .collect::<BTreeSet<CustomerId>>();

        let mut seen = Vec::new();

        for page in 0..3 {
            let result = ctx.customers.list_page(PageRequest::new(page, 3)?).await?;

            assert!(result.items.len() <= 3);
            assert_eq!(result.total_elements, 7);
            assert_eq!(result.total_pages, 3);

            seen.extend(result.items.into_iter().map(|c| c.id));
        }

        assert_eq!(seen.len(), 7, "pages overlapped: {seen:?}");
        assert_eq!(seen.into_iter().collect::<BTreeSet<_>>(), all);

        Ok(())
    }

    #[tokio::test]
    async fn sorted_pages_follow_the_sort_key() -> TestResult {
        let ctx = TestContext::new().await;

        for (index, name) in ["carol", "alice", "bob"].into_iter().enumerate() {
            ctx.customers
                .create_customer(new_customer(
                    name,
                    &format!("900000000{index}"),
                    &format!("{name}@x.com"),
                ))
                .await?;
        }

        let page = ctx
            .customers
            .list_page_sorted(PageRequest::new(0, 2)?, "userName")
            .await?;
        let names = page
            .items
            .iter()
            .map(|c| c.user_name.as_str())
            .collect::<Vec<_>>();

        assert_eq!(names, ["alice", "bob"]);
        assert_eq!(page.total_elements, 3);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_sort_key_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;

        let result = ctx.customers.list_sorted("password").await;

        assert!(
            matches!(result, Err(CustomersServiceError::InvalidSortKey(ref key)) if key == "password"),
            "got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn sorted_listing_is_capped() -> TestResult {
        let ctx = TestContext::with_customers_settings(CustomersSettings {
            sorted_listing_cap: 2,
        })
        .await;

        for (index, name) in ["carol", "alice", "bob"].into_iter().enumerate() {
            ctx.customers
                .create_customer(new_customer(
                    name,
                    &format!("900000000{index}"),
                    &format!("{name}@x.com"),
                ))
                .await?;
        }

        let sorted = ctx.customers.list_sorted("userName").await?;
        let names = sorted
            .iter()
            .map(|c| c.user_name.as_str())
            .collect::<Vec<_>>();

        assert_eq!(names, ["alice", "bob"]);

        Ok(())
    }

    #[tokio::test]
    async fn keyword_search_ignores_case() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.customers
            .create_customer(new_customer("Alice", "9000000001", "alice@x.com"))
            .await?;
        ctx.customers
            .create_customer(new_customer("bob", "9000000002", "bob@malice.org"))
            .await?;
        ctx.customers
            .create_customer(new_customer("carol", "9000000003", "carol@x.com"))
            .await?;

        let upper = ctx.customers.search_by_keyword("ALI").await?;
        let lower = ctx.customers.search_by_keyword("ali").await?;

        assert_eq!(upper, lower);
        assert_eq!(upper.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn prefix_and_suffix_searches_match_literally() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.customers
            .create_customer(new_customer("neo_one", "9000000001", "neo1@x.com"))
            .await?;
        ctx.customers
            .create_customer(new_customer("neoxone", "9000000002", "neo2@x.com"))
            .await?;

        let starting = ctx.customers.find_by_user_name_starting_with("neo_").await?;
        let ending = ctx.customers.find_by_user_name_ending_with("xone").await?;

        assert_eq!(starting.len(), 1);
        assert_eq!(starting[0].user_name, "neo_one");
        assert_eq!(ending.len(), 1);
        assert_eq!(ending[0].user_name, "neoxone");

        Ok(())
    }

    #[tokio::test]
    async fn page_by_user_name_reports_totals() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.customers
            .create_customer(new_customer("neo", "9000000001", "neo@x.com"))
            .await?;

        let page = ctx
            .customers
            .find_page_by_user_name("neo", PageRequest::new(0, 5)?)
            .await?;

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total_elements, 1);
        assert_eq!(page.total_pages, 1);

        Ok(())
    }

    #[tokio::test]
    async fn raw_projection_omits_the_credential() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.customers
            .create_customer(new_customer("neo", "9000000001", "neo@x.com"))
            .await?;

        let raw = ctx.customers.find_raw_by_email_address("neo@x.com").await?;
        let missing = ctx
            .customers
            .find_raw_by_email_address("ghost@x.com")
            .await;

        assert_eq!(
            raw.get("user_name").and_then(|v| v.as_str()),
            Some("neo")
        );
        assert!(!raw.contains_key("credential"));
        assert!(matches!(missing, Err(CustomersServiceError::NotFound(_))));

        Ok(())
    }

    #[tokio::test]
    async fn address_rewrite_reports_affected_rows() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.customers
            .create_customer(new_customer("neo", "9000000001", "neo@x.com"))
            .await?;

        let hit = ctx
            .customers
            .update_address_by_user_name("neo", "Nebuchadnezzar")
            .await?;
        let miss = ctx
            .customers
            .update_address_by_user_name("ghost", "Nowhere")
            .await?;

        assert_eq!(hit, 1);
        assert_eq!(miss, 0);
        assert_eq!(
            ctx.customers.get_by_user_name("neo").await?.address.as_deref(),
            Some("Nebuchadnezzar")
        );

        Ok(())
    }

    #[tokio::test]
    async fn get_by_id_reads_back_the_created_customer() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx
            .customers
            .create_customer(new_customer("neo", "9000000001", "neo@x.com"))
            .await?;

        let found = ctx.customers.get_by_id(created.id).await?;

        assert_eq!(found, created);

        Ok(())
    }

    #[tokio::test]
    async fn get_by_unknown_id_is_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        let result = ctx.customers.get_by_id(CustomerId::from_i64(4242)).await;

        assert!(
            matches!(result, Err(CustomersServiceError::NotFound(ref key)) if key == "4242"),
            "got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn sorted_listing_at_exactly_the_cap_returns_everything() -> TestResult {
        let ctx = TestContext::with_customers_settings(CustomersSettings {
            sorted_listing_cap: 3,
        })
        .await;

        for (index, name) in ["carol", "alice", "bob"].into_iter().enumerate() {
            ctx.customers
                .create_customer(new_customer(
                    name,
                    &format!("900000000{index}"),
                    &format!("{name}@x.com"),
                ))
                .await?;
        }

        let sorted = ctx.customers.list_sorted("userName").await?;
        let names = sorted
            .iter()
            .map(|c| c.user_name.as_str())
            .collect::<Vec<_>>();

        assert_eq!(names, ["alice", "bob", "carol"]);

        Ok(())
    }

    /// Inserts past the conflict pre-check, as a concurrent writer would.
    async fn insert_unchecked(
        ctx: &TestContext,
        customer: NewCustomer,
    ) -> Result<CustomerRecord, sqlx::Error> {
        let db = Db::new(ctx.db.pool().clone());
        let mut tx = db.begin_transaction().await?;

        let draft = CustomerDraft::from_new(customer, &Sha256Hasher, Timestamp::now());
        let record = PgCustomersRepository::new().insert(&mut tx, draft).await?;

        tx.commit().await?;

        Ok(record)
    }

    #[tokio::test]
    async fn store_unique_violation_on_insert_maps_to_conflict() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.customers
            .create_customer(new_customer("neo", "9000000001", "neo@x.com"))
            .await?;

        let result = insert_unchecked(&ctx, new_customer("smith", "9000000001", "smith@x.com"))
            .await
            .map_err(CustomersServiceError::from);

        match result {
            Err(CustomersServiceError::AlreadyExists(conflicts)) => {
                assert_eq!(conflicts.fields(), &[UniqueField::MobileNumber]);
            }
            other => panic!("expected AlreadyExists, got {other:?}"),
        }

        Ok(())
    }

    #[tokio::test]
    async fn store_unique_violation_on_mobile_change_maps_to_conflict() -> TestResult {
        let ctx = TestContext::new().await;

        let neo = ctx
            .customers
            .create_customer(new_customer("neo", "9000000001", "neo@x.com"))
            .await?;
        ctx.customers
            .create_customer(new_customer("trinity", "9000000002", "trinity@x.com"))
            .await?;

        let db = Db::new(ctx.db.pool().clone());
        let mut tx = db.begin_transaction().await?;

        let result = PgCustomersRepository::new()
            .update_mobile_number(&mut tx, neo.id, "9000000002")
            .await
            .map_err(CustomersServiceError::from);

        match result {
            Err(CustomersServiceError::AlreadyExists(conflicts)) => {
                assert_eq!(conflicts.fields(), &[UniqueField::MobileNumber]);
            }
            other => panic!("expected AlreadyExists, got {other:?}"),
        }

        Ok(())
    }

    #[tokio::test]
    async fn store_check_violation_stays_a_storage_error() -> TestResult {
        let ctx = TestContext::new().await;

        let result = insert_unchecked(&ctx, new_customer("neo", "12ab", "neo@x.com"))
            .await
            .map_err(CustomersServiceError::from);

        assert!(
            matches!(result, Err(CustomersServiceError::Sql(_))),
            "got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn blank_user_name_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;

        let result = ctx
            .customers
            .create_customer(new_customer("   ", "9000000001", "neo@x.com"))
            .await;

        match result {
            Err(CustomersServiceError::ValidationFailed(messages)) => {
                assert_eq!(messages, ["Please provide username"]);
            }
            other => panic!("expected ValidationFailed, got {other:?}"),
        }

        assert!(ctx.customers.list_customers().await?.is_empty());

        Ok(())
    }
}
