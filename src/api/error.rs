/// Errors from the product service client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (connection refused, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-2xx status and a `message`.
    ///
    /// Displays as the message alone so it can be shown verbatim.
    #[error("{message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Message taken from the response body.
        message: String,
    },

    /// The response body did not have the expected shape.
    #[error("malformed response from server (HTTP {status}): {detail}")]
    Malformed {
        /// HTTP status code.
        status: u16,
        /// What failed to decode.
        detail: String,
    },
}

impl ApiError {
    /// HTTP status of the response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            Self::Server { status, .. } | Self::Malformed { status, .. } => Some(*status),
        }
    }
}
