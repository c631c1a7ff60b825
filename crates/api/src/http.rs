// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reqwest-backed transport.
//!
//! Owns URL construction, headers and timeouts only. Status codes are
//! passed through untouched for the client to classify.

use std::time::Duration;

use reqwest::{Client, Method, header};
use tracing::debug;
use url::Url;

use crate::transport::{ApiRequest, ApiResponse, ApiTransport, HttpMethod, TransportError};

/// HTTP transport bound to one API base URL.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    /// Builds a transport with an explicit request timeout.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Origin (and optional path prefix) of the API
    /// * `timeout` - Per-request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot carry a path (e.g.
    /// `mailto:`) or the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, TransportError> {
        if base_url.cannot_be_a_base() {
            return Err(TransportError::new(format!(
                "Backend URL '{base_url}' cannot be used as a base"
            )));
        }
        let client: Client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::new(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client, base_url })
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url_for(&self, request: &ApiRequest) -> Result<Url, TransportError> {
        let mut url: Url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| TransportError::new("Backend URL cannot carry a path"))?
            .pop_if_empty()
            .extend(&request.segments)
            .push("");
        Ok(url)
    }
}

const fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

fn map_transport_error(error: &reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::new(format!("Request timed out: {error}"))
    } else if error.is_connect() {
        TransportError::new(format!("Could not connect to the server: {error}"))
    } else {
        TransportError::new(format!("Request failed: {error}"))
    }
}

impl ApiTransport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url: Url = self.url_for(&request)?;
        debug!(method = %request.method, %url, "Sending API request");

        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json");
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| map_transport_error(&e))?;
        let status: u16 = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| map_transport_error(&e))?;

        debug!(status, bytes = body.len(), "Received API response");
        Ok(ApiResponse::new(status, body.to_vec()))
    }
}
