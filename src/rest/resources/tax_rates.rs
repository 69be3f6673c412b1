//! Tax Rate API endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::ApiResponse;
use crate::rest::endpoint::{EndpointFactory, Get, Mutate};

/// Address used for a tax rate calculation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TaxAddress {
    /// Two letter country code.
    pub country_code: String,

    /// State code, for countries with states.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_code: Option<String>,

    /// City name.
    pub city: String,

    /// Postal code.
    pub zip: String,
}

#[derive(Serialize)]
struct TaxRequest {
    recipient: TaxAddress,
}

/// The Tax Rate API.
pub struct TaxRates {
    list_countries: Get<(), (), Value>,
    calculate: Mutate<TaxAddress, (), TaxRequest, Value>,
}

impl TaxRates {
    pub(crate) fn new(endpoints: &EndpointFactory) -> Self {
        Self {
            list_countries: endpoints.get(|_: &()| "/tax/countries".to_string()),
            calculate: endpoints.create(
                |_: &()| "/tax/rates".to_string(),
                |recipient: TaxAddress| ((), Some(TaxRequest { recipient })),
            ),
        }
    }

    /// Returns the countries and states that require sales tax calculation.
    pub async fn list_countries(&self) -> ApiResponse<Value> {
        self.list_countries.call(&(), &()).await
    }

    /// Calculates the sales tax rate for an address.
    pub async fn calculate(&self, address: TaxAddress) -> ApiResponse<Value> {
        self.calculate.call(address).await
    }
}
