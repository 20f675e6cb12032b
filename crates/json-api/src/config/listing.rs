//! Listing Config

use clap::Args;
use patron_app::domain::customers::{CustomersSettings, DEFAULT_SORTED_LISTING_CAP};

/// Customer listing limits.
#[derive(Debug, Args)]
pub struct ListingConfig {
    /// Most customers returned by the sort-only listing
    #[arg(long, env = "SORTED_LISTING_CAP", default_value_t = DEFAULT_SORTED_LISTING_CAP)]
    pub sorted_listing_cap: u32,
}

impl ListingConfig {
    #[must_use]
    pub fn customers_settings(&self) -> CustomersSettings {
        CustomersSettings {
            sorted_listing_cap: self.sorted_listing_cap,
        }
    }
}
