//! Blocking HTTP client for the dashboard server.
//!
//! Calls are issued from background threads (see `gui::app`), so the
//! blocking reqwest client never stalls the frame loop.

use reqwest::blocking::Client;
use reqwest::Url;
use thiserror::Error;

use crate::api::model::{OrderRequest, ServerReply};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Client for the `/order` and `/transfer` endpoints.
///
/// No request timeout is configured: a call runs until the server answers
/// or the connection drops.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    /// `base_url` without a trailing `/`, e.g. `http://127.0.0.1:5000`.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            http: Client::builder().build()?,
            base_url: Url::parse(base_url)?,
        })
    }

    /// POST an order as JSON and parse the server's verdict.
    pub fn submit_order(&self, order: &OrderRequest) -> Result<ServerReply, ApiError> {
        let url = self.base_url.join("/order")?;
        log::debug!("POST {url}");
        let reply = self.http.post(url).json(order).send()?.json()?;
        Ok(reply)
    }

    /// GET `/transfer` to start a server-side data transfer.
    pub fn trigger_transfer(&self) -> Result<ServerReply, ApiError> {
        let url = self.base_url.join("/transfer")?;
        log::debug!("GET {url}");
        let reply = self.http.get(url).send()?.json()?;
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unparsable_base_url() {
        assert!(matches!(
            ApiClient::new("not a url"),
            Err(ApiError::Url(_))
        ));
    }

    #[test]
    fn accepts_plain_http_base_url() {
        assert!(ApiClient::new("http://127.0.0.1:5000").is_ok());
    }
}
