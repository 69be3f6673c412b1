//! Store Information API endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::ApiResponse;
use crate::rest::endpoint::{body_only, EndpointFactory, Get, Mutate};

/// Packing slip settings of a store.
///
/// Unset fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PackingSlip {
    /// Customer service email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Customer service phone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Custom packing slip message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// URL of a sticker put on the package.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,

    /// Store name override for the return address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_name: Option<String>,

    /// Own order ID printed instead of the Printful order ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_order_id: Option<String>,
}

/// Paging parameters for list endpoints.
#[derive(Debug, Clone, Copy, Serialize, Default, PartialEq, Eq)]
pub struct PagingParams {
    /// Result set offset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    /// Maximum number of results to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// The Store Information API.
pub struct Store {
    info: Get<(), (), Value>,
    list: Get<(), PagingParams, Value>,
    change_packing_slip: Mutate<PackingSlip, (), PackingSlip, Value>,
}

impl Store {
    pub(crate) fn new(endpoints: &EndpointFactory) -> Self {
        Self {
            info: endpoints.get(|_: &()| "/store".to_string()),
            list: endpoints.get(|_: &()| "/stores".to_string()),
            change_packing_slip: endpoints
                .create(|_: &()| "/store/packing-slip".to_string(), body_only),
        }
    }

    /// Returns basic information about the store the API key belongs to.
    pub async fn info(&self) -> ApiResponse<Value> {
        self.info.call(&(), &()).await
    }

    /// Returns the stores accessible with the API key.
    pub async fn list(&self, paging: &PagingParams) -> ApiResponse<Value> {
        self.list.call(&(), paging).await
    }

    /// Modifies the packing slip settings of the store.
    pub async fn change_packing_slip(&self, packing_slip: PackingSlip) -> ApiResponse<Value> {
        self.change_packing_slip.call(packing_slip).await
    }
}
