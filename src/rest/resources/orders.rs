//! Orders API endpoints.
//!
//! Orders are addressed by Printful ID or by the ID from the external
//! system, see [`OrderId`]. Order bodies and results are passed as raw
//! JSON.
//!
//! # Example
//!
//! ```rust,no_run
//! use printful_api::{ApiKey, PrintfulClient, PrintfulConfig};
//! use printful_api::rest::resources::{ListOrdersParams, OrderId, OrderStatus};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PrintfulConfig::builder()
//!     .api_key(ApiKey::new("my-api-token")?)
//!     .build()?;
//! let client = PrintfulClient::new(&config)?;
//!
//! let drafts = client
//!     .orders()
//!     .list(ListOrdersParams {
//!         status: Some(OrderStatus::Draft),
//!         limit: Some(20),
//!         ..Default::default()
//!     })
//!     .await;
//!
//! let order = client.orders().get(&OrderId::External("shop-1001".into())).await;
//! # Ok(())
//! # }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::{with_query_string, ApiResponse, QueryParams};
use crate::rest::endpoint::{body_only, path_only, Delete, EndpointFactory, Get, List, Mutate};

/// Identifies an order by Printful ID or external ID.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum OrderId {
    /// The Printful order ID.
    Id(u64),
    /// The order ID from the external system.
    External(String),
}

impl OrderId {
    /// Returns the path segment for this ID. External IDs are prefixed with `@`.
    #[must_use]
    pub fn path_segment(&self) -> String {
        match self {
            Self::Id(id) => id.to_string(),
            Self::External(id) => format!("@{}", urlencoding::encode(id)),
        }
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::External(id) => write!(f, "@{id}"),
        }
    }
}

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

/// Status of an order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Not yet submitted for fulfillment.
    Draft,
    /// Submitted, waiting to be processed.
    Pending,
    /// Failed to be submitted.
    Failed,
    /// Canceled by the store or by Printful.
    Canceled,
    /// Being fulfilled.
    #[serde(rename = "inprocess")]
    InProcess,
    /// On hold.
    #[serde(rename = "onhold")]
    OnHold,
    /// Partially fulfilled.
    Partial,
    /// All items shipped.
    Fulfilled,
    /// Archived.
    Archived,
}

/// Parameters for listing orders.
///
/// All fields are optional. Unset fields will not be included in the request.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct ListOrdersParams {
    /// Filter by order status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,

    /// Result set offset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    /// Maximum number of results to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Query parameters for creating an order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreateOrderParams {
    /// Submit the order for fulfillment right away, skipping the draft phase.
    pub confirm: Option<bool>,
    /// Update the existing order if one with the same external ID exists.
    pub update_existing: Option<bool>,
}

/// Path and query parameters for updating an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOrderParams {
    /// The order to update.
    pub id: OrderId,
    /// Submit the order for fulfillment after updating it.
    pub confirm: Option<bool>,
}

/// The Orders API.
pub struct Orders {
    list: List<ListOrdersParams, (), ListOrdersParams, Value>,
    create: Mutate<(CreateOrderParams, Value), CreateOrderParams, Value, Value>,
    get: Get<OrderId, (), Value>,
    cancel: Delete<OrderId, Value>,
    update: Mutate<(UpdateOrderParams, Value), UpdateOrderParams, Value, Value>,
    confirm_draft: Mutate<OrderId, OrderId, (), Value>,
    estimate_costs: Mutate<Value, (), Value, Value>,
}

impl Orders {
    pub(crate) fn new(endpoints: &EndpointFactory) -> Self {
        Self {
            list: endpoints.list(
                |_: &()| "/orders".to_string(),
                |params: ListOrdersParams| ((), params),
            ),
            create: endpoints.create(
                |params: &CreateOrderParams| {
                    let query = QueryParams::new()
                        .with_opt("confirm", params.confirm)
                        .with_opt("update_existing", params.update_existing);
                    with_query_string("/orders", &query)
                },
                |(params, order): (CreateOrderParams, Value)| (params, Some(order)),
            ),
            get: endpoints.get(|id: &OrderId| format!("/orders/{}", id.path_segment())),
            cancel: endpoints.del(|id: &OrderId| format!("/orders/{}", id.path_segment())),
            update: endpoints.update(
                |params: &UpdateOrderParams| {
                    let query = QueryParams::new().with_opt("confirm", params.confirm);
                    with_query_string(&format!("/orders/{}", params.id.path_segment()), &query)
                },
                |(params, order): (UpdateOrderParams, Value)| (params, Some(order)),
            ),
            confirm_draft: endpoints.create(
                |id: &OrderId| format!("/orders/{}/confirm", id.path_segment()),
                path_only,
            ),
            estimate_costs: endpoints
                .create(|_: &()| "/orders/estimate-costs".to_string(), body_only),
        }
    }

    /// Returns the orders of the store.
    pub async fn list(&self, params: ListOrdersParams) -> ApiResponse<Value> {
        self.list.call(params).await
    }

    /// Creates an order and optionally submits it for fulfillment.
    pub async fn create(&self, order: Value, params: CreateOrderParams) -> ApiResponse<Value> {
        self.create.call((params, order)).await
    }

    /// Returns a single order.
    pub async fn get(&self, id: &OrderId) -> ApiResponse<Value> {
        self.get.call(id, &()).await
    }

    /// Cancels a pending order or draft.
    pub async fn cancel(&self, id: &OrderId) -> ApiResponse<Value> {
        self.cancel.call(id).await
    }

    /// Updates an unsubmitted order.
    ///
    /// Only the fields present in `changes` are modified.
    pub async fn update(&self, params: UpdateOrderParams, changes: Value) -> ApiResponse<Value> {
        self.update.call((params, changes)).await
    }

    /// Submits a draft order for fulfillment.
    pub async fn confirm_draft(&self, id: OrderId) -> ApiResponse<Value> {
        self.confirm_draft.call(id).await
    }

    /// Calculates the estimated costs of an order.
    pub async fn estimate_costs(&self, order: Value) -> ApiResponse<Value> {
        self.estimate_costs.call(order).await
    }
}
