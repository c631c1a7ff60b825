// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default API origin when neither the flag nor the environment sets one.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Reasons the command-line configuration is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The backend URL does not parse.
    #[error("Invalid backend URL '{value}': {reason}")]
    InvalidUrl {
        /// The raw input.
        value: String,
        /// Parser message.
        reason: String,
    },
    /// The backend URL is not HTTP(S).
    #[error("Backend URL must use http or https, got '{scheme}'")]
    UnsupportedScheme {
        /// The offending scheme.
        scheme: String,
    },
    /// A zero timeout would fail every request.
    #[error("Timeout must be at least one second")]
    ZeroTimeout,
}

/// Validated runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    backend_url: Url,
    timeout: Duration,
    assume_yes: bool,
}

impl ConsoleConfig {
    /// Validates raw settings.
    ///
    /// # Arguments
    ///
    /// * `backend_url` - API origin, optionally with a path prefix
    /// * `timeout_secs` - Per-request timeout
    /// * `assume_yes` - Answer every confirmation with "yes"
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the URL does not parse, is not HTTP(S),
    /// or the timeout is zero.
    pub fn new(backend_url: &str, timeout_secs: u64, assume_yes: bool) -> Result<Self, ConfigError> {
        let parsed: Url = Url::parse(backend_url.trim()).map_err(|e| ConfigError::InvalidUrl {
            value: backend_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme {
                scheme: parsed.scheme().to_string(),
            });
        }
        if timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(Self {
            backend_url: parsed,
            timeout: Duration::from_secs(timeout_secs),
            assume_yes,
        })
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn backend_url(&self) -> &Url {
        &self.backend_url
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns whether confirmations are answered automatically.
    #[must_use]
    pub const fn assume_yes(&self) -> bool {
        self.assume_yes
    }
}
