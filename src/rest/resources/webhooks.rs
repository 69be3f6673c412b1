//! Webhook API endpoints.
//!
//! A store has at most one webhook URL. Setting up a new configuration
//! replaces the previous one.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::ApiResponse;
use crate::rest::endpoint::{body_only, Delete, EndpointFactory, Get, Mutate};

/// Webhook configuration of a store.
///
/// # Example
///
/// ```rust
/// use printful_api::rest::resources::WebhookConfig;
///
/// let config = WebhookConfig::new(
///     "https://example.com/printful",
///     ["package_shipped", "order_failed"],
/// );
/// assert_eq!(config.types.len(), 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WebhookConfig {
    /// URL receiving the store's event notifications.
    pub url: String,

    /// Enabled event types.
    pub types: Vec<String>,

    /// Event type specific parameters, such as the product IDs monitored
    /// by `stock_updated`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl WebhookConfig {
    /// Creates a configuration without extra parameters.
    #[must_use]
    pub fn new<I, S>(url: impl Into<String>, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            url: url.into(),
            types: types.into_iter().map(Into::into).collect(),
            params: None,
        }
    }
}

/// The Webhook API.
pub struct Webhooks {
    get: Get<(), (), Value>,
    setup: Mutate<WebhookConfig, (), WebhookConfig, Value>,
    disable: Delete<(), Value>,
}

impl Webhooks {
    pub(crate) fn new(endpoints: &EndpointFactory) -> Self {
        Self {
            get: endpoints.get(|_: &()| "/webhooks".to_string()),
            setup: endpoints.create(|_: &()| "/webhooks".to_string(), body_only),
            disable: endpoints.del(|_: &()| "/webhooks".to_string()),
        }
    }

    /// Returns the configured webhook URL and event types.
    pub async fn get(&self) -> ApiResponse<Value> {
        self.get.call(&(), &()).await
    }

    /// Replaces the webhook configuration and returns the new one.
    pub async fn setup(&self, config: WebhookConfig) -> ApiResponse<Value> {
        self.setup.call(config).await
    }

    /// Removes the webhook URL and all event types.
    pub async fn disable(&self) -> ApiResponse<Value> {
        self.disable.call(&()).await
    }
}
