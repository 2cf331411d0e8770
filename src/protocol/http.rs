// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport implementation for `WebSwitch` devices.

use std::time::Duration;

use reqwest::Client;

use crate::error::{ProtocolError, ValueError};
use crate::protocol::{Credentials, HttpRequest, HttpResponse, Transport, normalize_base_url};

// ============================================================================
// HttpConfig - Configuration for HTTP devices
// ============================================================================

/// Configuration for an HTTP `WebSwitch` device.
///
/// HTTP is stateless - each operation is an independent request.
///
/// # Examples
///
/// ```
/// use webswitch_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new("http://wsm.homenet.local")
///     .with_credentials("admin", "password")
///     .with_timeout(Duration::from_secs(5));
///
/// assert_eq!(config.base_url(), "http://wsm.homenet.local/");
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    base_url: String,
    credentials: Option<(String, String)>,
    timeout: Duration,
}

impl HttpConfig {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a new HTTP configuration for the device at `base_url`.
    ///
    /// A trailing `/` is appended if missing.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            credentials: None,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets authentication credentials.
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Some((username.into(), password.into()));
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the normalized base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the raw credentials if set.
    #[must_use]
    pub fn credentials(&self) -> Option<(&str, &str)> {
        self.credentials
            .as_ref()
            .map(|(u, p)| (u.as_str(), p.as_str()))
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Validates the configured credentials.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::NonAsciiCredentials` for non-ASCII credentials.
    pub fn validated_credentials(&self) -> Result<Option<Credentials>, ValueError> {
        self.credentials()
            .map(|(u, p)| Credentials::new(u, p))
            .transpose()
    }

    /// Creates an `HttpTransport` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn into_transport(self) -> Result<HttpTransport, ProtocolError> {
        HttpTransport::with_timeout(self.timeout)
    }
}

// ============================================================================
// HttpTransport - reqwest-backed transport
// ============================================================================

/// HTTP transport built on reqwest.
///
/// Credentials are sent as an HTTP Basic `Authorization` header.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new() -> Result<Self, ProtocolError> {
        Self::with_timeout(HttpConfig::DEFAULT_TIMEOUT)
    }

    /// Creates a transport with a custom request timeout.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn with_timeout(timeout: Duration) -> Result<Self, ProtocolError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ProtocolError::Http)?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, ProtocolError> {
        tracing::debug!(url = %request.url, "Sending HTTP request");

        let mut builder = self.client.get(&request.url);
        if let Some(creds) = &request.credentials {
            builder = builder.basic_auth(creds.username(), Some(creds.password()));
        }

        let response = builder.send().await.map_err(ProtocolError::Http)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(ProtocolError::Http)?;

        tracing::debug!(status, body = %body, "Received HTTP response");

        Ok(HttpResponse { status, body })
    }
}
