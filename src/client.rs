//! Top-level Printful client.

use crate::clients::HttpClient;
use crate::config::PrintfulConfig;
use crate::error::ConfigError;
use crate::rest::resources::{Countries, Orders, Store, TaxRates, Webhooks};
use crate::rest::EndpointFactory;

/// Client aggregating the Printful endpoint groups.
///
/// All groups share one [`HttpClient`], so they share the connection pool
/// and the rate limit state.
///
/// # Example
///
/// ```rust,no_run
/// use printful_api::{ApiKey, ApiResponse, PrintfulClient, PrintfulConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = PrintfulConfig::builder()
///     .api_key(ApiKey::new("my-api-token")?)
///     .build()?;
/// let client = PrintfulClient::new(&config)?;
///
/// match client.store().info().await {
///     ApiResponse::Success(store) => println!("{}", store.result["name"]),
///     ApiResponse::Error(error) => eprintln!("{}", error.result),
/// }
/// # Ok(())
/// # }
/// ```
pub struct PrintfulClient {
    http: HttpClient,
    orders: Orders,
    webhooks: Webhooks,
    store: Store,
    countries: Countries,
    tax_rates: TaxRates,
}

// Verify PrintfulClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PrintfulClient>();
};

impl PrintfulClient {
    /// Creates a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the HTTP client cannot be created.
    pub fn new(config: &PrintfulConfig) -> Result<Self, ConfigError> {
        let http = HttpClient::new(config)?;
        let endpoints = EndpointFactory::new(http.clone());

        Ok(Self {
            orders: Orders::new(&endpoints),
            webhooks: Webhooks::new(&endpoints),
            store: Store::new(&endpoints),
            countries: Countries::new(&endpoints),
            tax_rates: TaxRates::new(&endpoints),
            http,
        })
    }

    /// Returns the underlying dispatcher.
    #[must_use]
    pub const fn http(&self) -> &HttpClient {
        &self.http
    }

    /// The Orders API.
    #[must_use]
    pub const fn orders(&self) -> &Orders {
        &self.orders
    }

    /// The Webhook API.
    #[must_use]
    pub const fn webhooks(&self) -> &Webhooks {
        &self.webhooks
    }

    /// The Store Information API.
    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }

    /// The Country/State Code API.
    #[must_use]
    pub const fn countries(&self) -> &Countries {
        &self.countries
    }

    /// The Tax Rate API.
    #[must_use]
    pub const fn tax_rates(&self) -> &TaxRates {
        &self.tax_rates
    }
}
