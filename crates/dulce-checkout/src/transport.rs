//! # Order Transport
//!
//! Sends the order body to the backend and reads back the receipt.
//!
//! ## Request Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST {endpoint}   Content-Type: application/json                       │
//! │  { "items": [ { "id": "cake", "qty": 1, "options": {...} }, ... ] }     │
//! │        │                                                                │
//! │        ├── connect / send fails ──► CheckoutError::Transport            │
//! │        │                                                                │
//! │        ├── status not 2xx ────────► CheckoutError::Rejected {           │
//! │        │                               status, body (may be empty) }    │
//! │        │                                                                │
//! │        ├── 2xx, body not a receipt ► CheckoutError::InvalidResponse     │
//! │        │                                                                │
//! │        └── 2xx { order_id, total } ► OrderReceipt                       │
//! │                                                                         │
//! │  One attempt. No timeout, no retry, no backoff: the shopper retries     │
//! │  by pressing Buy again.                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use dulce_core::{OrderReceipt, OrderRequest};
use std::future::Future;
use tracing::debug;
use url::Url;

use crate::config::CheckoutConfig;
use crate::error::{CheckoutError, CheckoutResult};

/// Delivers an order to the backend.
///
/// The session only depends on this trait; [`HttpOrderTransport`] is the
/// production implementation.
pub trait OrderTransport {
    /// Submits one order. Exactly one attempt is made.
    fn submit(
        &self,
        request: &OrderRequest,
    ) -> impl Future<Output = CheckoutResult<OrderReceipt>> + Send;
}

/// `reqwest`-backed transport for `POST /api/buy`.
#[derive(Debug, Clone)]
pub struct HttpOrderTransport {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpOrderTransport {
    /// Creates a transport for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns error if the endpoint URL is invalid or the HTTP client
    /// fails to build.
    pub fn new(config: &CheckoutConfig) -> CheckoutResult<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self::with_client(client, config.endpoint_url()?))
    }

    /// Uses an existing client.
    pub fn with_client(client: reqwest::Client, endpoint: Url) -> Self {
        HttpOrderTransport { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl OrderTransport for HttpOrderTransport {
    async fn submit(&self, request: &OrderRequest) -> CheckoutResult<OrderReceipt> {
        debug!(endpoint = %self.endpoint, lines = request.items.len(), "POST order");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CheckoutError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<OrderReceipt>(&body)
            .map_err(|e| CheckoutError::InvalidResponse(e.to_string()))
    }
}
