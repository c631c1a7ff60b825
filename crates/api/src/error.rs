// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use helpdesk_console::SessionError;
use helpdesk_domain::{DomainError, FilterError};
use thiserror::Error;

use crate::transport::{ApiResponse, TransportError};

/// Maximum number of body characters carried into an error message.
const BODY_EXCERPT_LIMIT: usize = 200;

/// Errors surfaced by the console's API operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server rejected the request (4xx).
    #[error("Request rejected ({status}): {detail}")]
    Validation {
        /// HTTP status code.
        status: u16,
        /// The server's error body, rendered as text.
        detail: String,
    },
    /// No response arrived.
    #[error("Network error: {message}")]
    Network {
        /// Transport failure description.
        message: String,
    },
    /// The server failed or answered with something unusable.
    #[error("Server error: {message}")]
    Server {
        /// HTTP status code, if a response arrived.
        status: Option<u16>,
        /// Failure description.
        message: String,
    },
    /// The filter inputs were refused locally.
    #[error(transparent)]
    Filter(#[from] FilterError),
    /// A draft failed local validation.
    #[error(transparent)]
    InvalidDraft(#[from] DomainError),
    /// A dialog was driven out of order.
    #[error(transparent)]
    Session(#[from] SessionError),
    /// A payload could not be encoded.
    #[error("Internal error: {message}")]
    Internal {
        /// Failure description.
        message: String,
    },
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        Self::Network {
            message: err.message().to_string(),
        }
    }
}

impl ApiError {
    /// Classifies a non-2xx response.
    ///
    /// 4xx responses become `Validation` carrying the server's error body;
    /// everything else becomes `Server`.
    #[must_use]
    pub fn from_status(response: &ApiResponse) -> Self {
        let detail: String = render_body(&response.body);
        if (400..500).contains(&response.status) {
            Self::Validation {
                status: response.status,
                detail: if detail.is_empty() {
                    format!("HTTP {}", response.status)
                } else {
                    detail
                },
            }
        } else {
            Self::Server {
                status: Some(response.status),
                message: if detail.is_empty() {
                    format!("HTTP {}", response.status)
                } else {
                    format!("HTTP {}: {detail}", response.status)
                },
            }
        }
    }

    /// Returns the text shown to the operator after `action` failed.
    ///
    /// # Arguments
    ///
    /// * `action` - What was attempted, e.g. `"deleting department"`
    #[must_use]
    pub fn operator_message(&self, action: &str) -> String {
        match self {
            Self::Validation { detail, .. } => format!("Error {action}: {detail}"),
            Self::Network { .. } => {
                format!("Error {action}: could not reach the server")
            }
            Self::Server { .. } | Self::Internal { .. } => {
                format!("Error {action}: the server could not complete the request")
            }
            Self::Filter(err) => format!("Error {action}: {}", filter_message(err)),
            Self::InvalidDraft(err) => format!("Error {action}: {err}"),
            Self::Session(err) => format!("Error {action}: {err}"),
        }
    }
}

/// Returns the operator-facing text for a refused filter.
#[must_use]
pub fn filter_message(err: &FilterError) -> String {
    match err {
        FilterError::MalformedDate { field, value } => {
            format!("'{value}' is not a valid {} date", field.query_key())
        }
        FilterError::StartAfterEnd { .. } => {
            String::from("The start date cannot be later than the end date")
        }
    }
}

/// Renders an error body: compact JSON when it parses, raw text otherwise.
fn render_body(body: &[u8]) -> String {
    if body.is_empty() {
        return String::new();
    }
    let text: String = serde_json::from_slice::<serde_json::Value>(body).map_or_else(
        |_| String::from_utf8_lossy(body).trim().to_string(),
        |value| value.to_string(),
    );
    if text.chars().count() > BODY_EXCERPT_LIMIT {
        let excerpt: String = text.chars().take(BODY_EXCERPT_LIMIT).collect();
        format!("{excerpt}...")
    } else {
        text
    }
}
