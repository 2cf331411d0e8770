// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP client builder.

use std::time::Duration;

use crate::device::DeviceClient;
use crate::error::Error;
use crate::protocol::{HttpConfig, HttpTransport};

/// Builder for creating HTTP-based device clients.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use webswitch_lib::DeviceClient;
///
/// # fn example() -> webswitch_lib::Result<()> {
/// let client = DeviceClient::builder("http://192.168.2.18")
///     .with_credentials("admin", "password")
///     .with_timeout(Duration::from_secs(3))
///     .build()?;
///
/// assert_eq!(client.base_url(), "http://192.168.2.18/");
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Debug)]
pub struct DeviceClientBuilder {
    config: HttpConfig,
}

impl DeviceClientBuilder {
    /// Creates a new builder with the specified HTTP configuration.
    #[must_use]
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Sets authentication credentials.
    ///
    /// Every request will carry a Basic `Authorization` header.
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.config = self.config.with_credentials(username, password);
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    /// Returns the configuration the client will be built from.
    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The credentials contain non-ASCII characters
    /// - The HTTP client cannot be created
    pub fn build(self) -> Result<DeviceClient<HttpTransport>, Error> {
        let credentials = self.config.validated_credentials()?;
        let base_url = self.config.base_url().to_string();
        let transport = self.config.into_transport()?;

        let client = DeviceClient::with_transport(base_url, transport);
        Ok(match credentials {
            Some(creds) => client.with_credentials(creds),
            None => client,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValueError;

    #[test]
    fn builder_defaults() {
        let builder = DeviceClient::builder("http://wsm.homenet.local");
        assert_eq!(builder.config().base_url(), "http://wsm.homenet.local/");
        assert!(builder.config().credentials().is_none());
    }

    #[test]
    fn builder_without_credentials() {
        let client = DeviceClient::builder("http://wsm.homenet.local")
            .build()
            .unwrap();
        assert!(client.credentials().is_none());
    }

    #[test]
    fn builder_with_credentials() {
        let client = DeviceClient::builder("http://wsm.homenet.local")
            .with_credentials("admin", "secret")
            .with_timeout(Duration::from_secs(1))
            .build()
            .unwrap();
        let creds = client.credentials().unwrap();
        assert_eq!(creds.username(), "admin");
        assert_eq!(creds.password(), "secret");
    }

    #[test]
    fn builder_rejects_non_ascii_credentials() {
        let result = DeviceClient::builder("http://wsm.homenet.local")
            .with_credentials("jörgen", "secret")
            .build();
        assert!(matches!(
            result,
            Err(Error::Value(ValueError::NonAsciiCredentials))
        ));
    }

    #[test]
    fn http_shortcut() {
        let client = DeviceClient::http("http://wsm.homenet.local").unwrap();
        assert_eq!(client.base_url(), "http://wsm.homenet.local/");
    }
}
