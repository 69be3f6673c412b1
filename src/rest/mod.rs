//! REST endpoint infrastructure for the Printful API.
//!
//! This module provides:
//!
//! - **[`EndpointFactory`]**: the `get`, `list`, `create`, `update` and `del`
//!   primitives binding a path function (and a splitter) onto the dispatcher
//! - **Endpoint values** ([`Get`], [`List`], [`Mutate`], [`Delete`]) whose
//!   `call` method resolves to an [`ApiResponse`](crate::clients::ApiResponse)
//! - **[`resources`]**: the endpoint groups built on these primitives
//!
//! # Example: Defining an Endpoint
//!
//! ```rust,no_run
//! use printful_api::{ApiKey, PrintfulConfig};
//! use printful_api::clients::{with_query_string, HttpClient, QueryParams};
//! use printful_api::rest::EndpointFactory;
//! use serde_json::{json, Value};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PrintfulConfig::builder()
//!     .api_key(ApiKey::new("my-api-token")?)
//!     .build()?;
//! let endpoints = EndpointFactory::new(HttpClient::new(&config)?);
//!
//! // Path parameters and body come in together and are split apart.
//! let update_product = endpoints.update::<(u64, Value), u64, Value, Value>(
//!     |id| format!("/store/products/{id}"),
//!     |(id, changes)| (id, Some(changes)),
//! );
//! let response = update_product.call((42, json!({"sync_product": {"name": "Mug"}}))).await;
//!
//! // Query parameters can be placed in the path function.
//! let confirm = endpoints.create::<bool, bool, (), Value>(
//!     |confirm| with_query_string("/orders", &QueryParams::new().with("confirm", confirm)),
//!     |confirm| (confirm, None),
//! );
//! # Ok(())
//! # }
//! ```

mod endpoint;

pub mod resources;

pub use endpoint::{
    body_only, path_only, Delete, EndpointFactory, Get, List, Mutate, PathFn, Splitter,
};
