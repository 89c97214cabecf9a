//! HTTP client for the product service.

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::request::ApiRequest;
use crate::model::{ErrorBody, ProductBody, ProductRecord, SearchQuery};

/// Decoded successful answer to an [`ApiRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A single product (create, update, like, disable, retrieve).
    Product(ProductRecord),
    /// A search listing, in server order.
    Products(Vec<ProductRecord>),
    /// The product was deleted; the body, if any, is ignored.
    Deleted,
}

/// Client for one product service instance.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ProductApi {
    client: reqwest::Client,
    base_url: String,
}

impl ProductApi {
    /// Creates a client for the service rooted at `base_url`,
    /// e.g. `http://localhost:8080`. A trailing `/` is ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Returns the service root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends `request` once and decodes the answer into the matching [`Reply`].
    pub async fn execute(&self, request: &ApiRequest) -> Result<Reply, ApiError> {
        match request {
            ApiRequest::Create(body) => self.create(body.clone()).await.map(Reply::Product),
            ApiRequest::Update { id, body } => {
                self.update(id, body.clone()).await.map(Reply::Product)
            }
            ApiRequest::Like { id } => self.like(id).await.map(Reply::Product),
            ApiRequest::Disable { id } => self.disable(id).await.map(Reply::Product),
            ApiRequest::Retrieve { id } => self.retrieve(id).await.map(Reply::Product),
            ApiRequest::Delete { id } => self.delete(id).await.map(|()| Reply::Deleted),
            ApiRequest::Search(query) => self.search(query.clone()).await.map(Reply::Products),
        }
    }

    /// Creates a product.
    pub async fn create(&self, body: ProductBody) -> Result<ProductRecord, ApiError> {
        self.fetch_one(&ApiRequest::Create(body)).await
    }

    /// Replaces the product with the given id.
    pub async fn update(&self, id: &str, body: ProductBody) -> Result<ProductRecord, ApiError> {
        let request = ApiRequest::Update {
            id: id.to_string(),
            body,
        };
        self.fetch_one(&request).await
    }

    /// Increments the like counter of a product.
    pub async fn like(&self, id: &str) -> Result<ProductRecord, ApiError> {
        self.fetch_one(&ApiRequest::Like { id: id.to_string() })
            .await
    }

    /// Disables a product.
    pub async fn disable(&self, id: &str) -> Result<ProductRecord, ApiError> {
        self.fetch_one(&ApiRequest::Disable { id: id.to_string() })
            .await
    }

    /// Looks up a product by id.
    pub async fn retrieve(&self, id: &str) -> Result<ProductRecord, ApiError> {
        self.fetch_one(&ApiRequest::Retrieve { id: id.to_string() })
            .await
    }

    /// Deletes a product by id.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .send(&ApiRequest::Delete { id: id.to_string() })
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    /// Lists products matching `query`; an unfiltered query lists everything.
    pub async fn search(&self, query: SearchQuery) -> Result<Vec<ProductRecord>, ApiError> {
        let response = self.send(&ApiRequest::Search(query)).await?;
        Self::parse_response(response).await
    }

    // ---- private helpers ----

    async fn fetch_one(&self, request: &ApiRequest) -> Result<ProductRecord, ApiError> {
        let response = self.send(request).await?;
        Self::parse_response(response).await
    }

    async fn send(&self, request: &ApiRequest) -> Result<reqwest::Response, ApiError> {
        let url = format!("{}{}", self.base_url, request.path());
        tracing::debug!(op = request.name(), method = %request.method(), %url, "Sending request");

        let mut builder = self.client.request(request.method(), &url);
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }
        let response = builder.send().await?;

        tracing::debug!(
            op = request.name(),
            status = response.status().as_u16(),
            "Response received"
        );
        Ok(response)
    }

    /// Passes a 2xx response through. Anything else becomes
    /// [`ApiError::Server`] when the body carries a `message`, or
    /// [`ApiError::Malformed`] when it does not.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let bytes = response.bytes().await?;
        match serde_json::from_slice::<ErrorBody>(&bytes) {
            Ok(body) => Err(ApiError::Server {
                status: status.as_u16(),
                message: body.message,
            }),
            Err(e) => Err(ApiError::Malformed {
                status: status.as_u16(),
                detail: e.to_string(),
            }),
        }
    }

    /// Decodes a successful JSON body into `T`.
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Malformed {
            status,
            detail: e.to_string(),
        })
    }
}
