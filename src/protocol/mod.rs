// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport layer for communicating with `WebSwitch` devices.
//!
//! [`DeviceClient`](crate::DeviceClient) only needs to issue a GET request
//! and read back a status code and a text body. That capability is the
//! [`Transport`] trait, so tests can substitute a scripted transport for
//! the real HTTP one.
//!
//! # Transports
//!
//! - [`HttpTransport`]: reqwest-based HTTP transport (feature `http`)

#[cfg(feature = "http")]
mod http;

#[cfg(feature = "http")]
pub use http::{HttpConfig, HttpTransport};

use std::fmt;

use crate::error::{ProtocolError, ValueError};

/// Appends a trailing `/` to `url` if it lacks one.
pub(crate) fn normalize_base_url(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

/// HTTP Basic authentication credentials.
///
/// Only ASCII credentials are accepted since the device decodes the
/// header byte for byte.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Creates credentials from a username and password.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::NonAsciiCredentials` if either part contains
    /// non-ASCII characters.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self, ValueError> {
        let username = username.into();
        let password = password.into();
        if !username.is_ascii() || !password.is_ascii() {
            return Err(ValueError::NonAsciiCredentials);
        }
        Ok(Self { username, password })
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A GET request to a device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Absolute URL of the request.
    pub url: String,
    /// Credentials to send as a Basic `Authorization` header, if any.
    pub credentials: Option<Credentials>,
}

/// Status and body of a device response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The full response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a response with the given status and body.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns `true` for 2xx status codes.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Capability to carry out GET requests against a device.
///
/// Implementations must read the whole body before returning.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Sends the request and returns the response.
    ///
    /// Non-success status codes are returned as regular responses.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request could not be sent or the
    /// response could not be read.
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, ProtocolError>;
}
