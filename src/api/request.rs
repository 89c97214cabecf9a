use reqwest::Method;

use crate::model::{ProductBody, SearchQuery};

/// Collection endpoint for products.
pub const COLLECTION_PATH: &str = "/api/products";

/// One call against the product service, carrying everything needed to
/// send it and to interpret its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    /// `POST /api/products`
    Create(ProductBody),
    /// `PUT /api/products/{id}`
    Update { id: String, body: ProductBody },
    /// `PUT /api/products/{id}/like`
    Like { id: String },
    /// `PUT /api/products/{id}/disable`
    Disable { id: String },
    /// `GET /api/products/{id}`
    Retrieve { id: String },
    /// `DELETE /api/products/{id}`
    Delete { id: String },
    /// `GET /api/products?{query}`
    Search(SearchQuery),
}

impl ApiRequest {
    /// HTTP method of the request.
    pub fn method(&self) -> Method {
        match self {
            Self::Create(_) => Method::POST,
            Self::Update { .. } | Self::Like { .. } | Self::Disable { .. } => Method::PUT,
            Self::Retrieve { .. } | Self::Search(_) => Method::GET,
            Self::Delete { .. } => Method::DELETE,
        }
    }

    /// Path and query relative to the service root.
    ///
    /// The id segment is percent-encoded. A search always carries the `?`,
    /// even when unfiltered.
    pub fn path(&self) -> String {
        match self {
            Self::Create(_) => COLLECTION_PATH.to_string(),
            Self::Update { id, .. } | Self::Retrieve { id } | Self::Delete { id } => item_path(id),
            Self::Like { id } => format!("{}/like", item_path(id)),
            Self::Disable { id } => format!("{}/disable", item_path(id)),
            Self::Search(query) => format!("{COLLECTION_PATH}?{query}"),
        }
    }

    /// JSON body to send, if the request has one.
    pub fn body(&self) -> Option<&ProductBody> {
        match self {
            Self::Create(body) | Self::Update { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Short name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Create(_) => "create",
            Self::Update { .. } => "update",
            Self::Like { .. } => "like",
            Self::Disable { .. } => "disable",
            Self::Retrieve { .. } => "retrieve",
            Self::Delete { .. } => "delete",
            Self::Search(_) => "search",
        }
    }
}

fn item_path(id: &str) -> String {
    format!("{COLLECTION_PATH}/{}", urlencoding::encode(id))
}
