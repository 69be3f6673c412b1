//! Endpoint function factory.
//!
//! An endpoint binds an HTTP method and a path function onto an
//! [`HttpClient`]. Endpoints taking combined parameters also carry a
//! splitter, a plain function dividing the caller's input into path
//! parameters and the rest of the request.
//!
//! | Primitive | Method | Input | Request |
//! |---|---|---|---|
//! | [`EndpointFactory::get`] | GET | path params, query | `path?query` |
//! | [`EndpointFactory::list`] | GET | combined, split into (path, query) | `path?query` |
//! | [`EndpointFactory::create`] | POST | combined, split into (path, body) | `path` + JSON body |
//! | [`EndpointFactory::update`] | PUT | combined, split into (path, body) | `path` + JSON body |
//! | [`EndpointFactory::del`] | DELETE | path params | `path` |
//!
//! Every endpoint resolves to an [`ApiResponse`].
//!
//! # Example
//!
//! ```rust,no_run
//! use printful_api::{ApiKey, PrintfulConfig};
//! use printful_api::clients::HttpClient;
//! use printful_api::rest::EndpointFactory;
//! use serde_json::Value;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PrintfulConfig::builder()
//!     .api_key(ApiKey::new("my-api-token")?)
//!     .build()?;
//! let endpoints = EndpointFactory::new(HttpClient::new(&config)?);
//!
//! let get_product = endpoints.get::<u64, (), Value>(|id| format!("/store/products/{id}"));
//! let response = get_product.call(&42, &()).await;
//! println!("status {}", response.code());
//! # Ok(())
//! # }
//! ```

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::{ApiResponse, HttpClient, HttpMethod, HttpRequest};

/// Computes the request path from path parameters.
pub type PathFn<P> = fn(&P) -> String;

/// Divides combined parameters into path parameters and the rest.
pub type Splitter<I, P, T> = fn(I) -> (P, T);

/// Creates endpoints bound to one [`HttpClient`].
#[derive(Clone, Debug)]
pub struct EndpointFactory {
    client: HttpClient,
}

impl EndpointFactory {
    /// Creates a factory for endpoints dispatched through `client`.
    #[must_use]
    pub const fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Returns the client endpoints are bound to.
    #[must_use]
    pub const fn client(&self) -> &HttpClient {
        &self.client
    }

    /// A GET endpoint taking path parameters and separate query parameters.
    #[must_use]
    pub fn get<P, Q, R>(&self, path: PathFn<P>) -> Get<P, Q, R> {
        Get {
            client: self.client.clone(),
            path,
            _marker: PhantomData,
        }
    }

    /// A GET endpoint taking combined parameters split into path and query.
    #[must_use]
    pub fn list<I, P, Q, R>(
        &self,
        path: PathFn<P>,
        splitter: Splitter<I, P, Q>,
    ) -> List<I, P, Q, R> {
        List {
            client: self.client.clone(),
            path,
            splitter,
            _marker: PhantomData,
        }
    }

    /// A POST endpoint taking combined parameters split into path and body.
    ///
    /// A `None` body sends no body and no `Content-Type`.
    #[must_use]
    pub fn create<I, P, B, R>(
        &self,
        path: PathFn<P>,
        splitter: Splitter<I, P, Option<B>>,
    ) -> Mutate<I, P, B, R> {
        Mutate::new(self.client.clone(), HttpMethod::Post, path, splitter)
    }

    /// A PUT endpoint taking combined parameters split into path and body.
    #[must_use]
    pub fn update<I, P, B, R>(
        &self,
        path: PathFn<P>,
        splitter: Splitter<I, P, Option<B>>,
    ) -> Mutate<I, P, B, R> {
        Mutate::new(self.client.clone(), HttpMethod::Put, path, splitter)
    }

    /// A DELETE endpoint taking path parameters only.
    #[must_use]
    pub fn del<P, R>(&self, path: PathFn<P>) -> Delete<P, R> {
        Delete {
            client: self.client.clone(),
            path,
            _marker: PhantomData,
        }
    }
}

/// A GET endpoint. See [`EndpointFactory::get`].
pub struct Get<P, Q, R> {
    client: HttpClient,
    path: PathFn<P>,
    _marker: PhantomData<fn(&Q) -> R>,
}

impl<P, Q: Serialize, R: DeserializeOwned> Get<P, Q, R> {
    /// Sends the request. Pass `&()` when there are no query parameters.
    pub async fn call(&self, params: &P, query: &Q) -> ApiResponse<R> {
        let request = HttpRequest::builder(HttpMethod::Get, (self.path)(params)).query(query);
        self.client.request(request).await
    }
}

/// A GET endpoint with a splitter. See [`EndpointFactory::list`].
pub struct List<I, P, Q, R> {
    client: HttpClient,
    path: PathFn<P>,
    splitter: Splitter<I, P, Q>,
    _marker: PhantomData<fn() -> R>,
}

impl<I, P, Q: Serialize, R: DeserializeOwned> List<I, P, Q, R> {
    /// Splits `input` and sends the request.
    pub async fn call(&self, input: I) -> ApiResponse<R> {
        let (params, query) = (self.splitter)(input);
        let request = HttpRequest::builder(HttpMethod::Get, (self.path)(&params)).query(&query);
        self.client.request(request).await
    }
}

/// A POST or PUT endpoint. See [`EndpointFactory::create`] and
/// [`EndpointFactory::update`].
pub struct Mutate<I, P, B, R> {
    client: HttpClient,
    method: HttpMethod,
    path: PathFn<P>,
    splitter: Splitter<I, P, Option<B>>,
    _marker: PhantomData<fn() -> R>,
}

impl<I, P, B, R> Mutate<I, P, B, R> {
    const fn new(
        client: HttpClient,
        method: HttpMethod,
        path: PathFn<P>,
        splitter: Splitter<I, P, Option<B>>,
    ) -> Self {
        Self {
            client,
            method,
            path,
            splitter,
            _marker: PhantomData,
        }
    }

    /// Returns the HTTP method of this endpoint.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }
}

impl<I, P, B: Serialize, R: DeserializeOwned> Mutate<I, P, B, R> {
    /// Splits `input` and sends the request.
    pub async fn call(&self, input: I) -> ApiResponse<R> {
        let (params, body) = (self.splitter)(input);
        let mut request = HttpRequest::builder(self.method, (self.path)(&params));
        if let Some(body) = &body {
            request = request.json(body);
        }
        self.client.request(request).await
    }
}

/// A DELETE endpoint. See [`EndpointFactory::del`].
pub struct Delete<P, R> {
    client: HttpClient,
    path: PathFn<P>,
    _marker: PhantomData<fn() -> R>,
}

impl<P, R: DeserializeOwned> Delete<P, R> {
    /// Sends the request. No query string and no body are attached.
    pub async fn call(&self, params: &P) -> ApiResponse<R> {
        let request = HttpRequest::builder(HttpMethod::Delete, (self.path)(params));
        self.client.request(request).await
    }
}

/// Splitter for endpoints whose input is exactly their path parameters.
pub fn path_only<P, T>(params: P) -> (P, Option<T>) {
    (params, None)
}

/// Splitter for endpoints without path parameters.
pub fn body_only<B>(body: B) -> ((), Option<B>) {
    ((), Some(body))
}
