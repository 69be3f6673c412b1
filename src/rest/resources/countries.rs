//! Country/State Code API endpoints.

use serde_json::Value;

use crate::clients::ApiResponse;
use crate::rest::endpoint::{EndpointFactory, Get};

/// The Country/State Code API.
pub struct Countries {
    list: Get<(), (), Value>,
}

impl Countries {
    pub(crate) fn new(endpoints: &EndpointFactory) -> Self {
        Self {
            list: endpoints.get(|_: &()| "/countries".to_string()),
        }
    }

    /// Returns the countries and states accepted by Printful.
    pub async fn list(&self) -> ApiResponse<Value> {
        self.list.call(&(), &()).await
    }
}
