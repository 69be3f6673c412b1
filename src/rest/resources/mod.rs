//! Printful endpoint groups.
//!
//! Each group binds its endpoints onto the shared dispatcher through an
//! [`EndpointFactory`](crate::rest::EndpointFactory). Groups are reached
//! through [`PrintfulClient`](crate::PrintfulClient):
//!
//! - [`Orders`]: list, create, get, cancel, update, confirm and estimate orders
//! - [`Webhooks`]: get, set up and disable the webhook configuration
//! - [`Store`]: store information and packing slip settings
//! - [`Countries`]: accepted countries and states
//! - [`TaxRates`]: sales tax countries and rate calculation
//!
//! Results are raw JSON values wrapped in [`ApiResponse`](crate::clients::ApiResponse).

mod countries;
mod orders;
mod store;
mod tax_rates;
mod webhooks;

pub use countries::Countries;
pub use orders::{
    CreateOrderParams, ListOrdersParams, OrderId, OrderStatus, Orders, UpdateOrderParams,
};
pub use store::{PackingSlip, PagingParams, Store};
pub use tax_rates::{TaxAddress, TaxRates};
pub use webhooks::{WebhookConfig, Webhooks};
