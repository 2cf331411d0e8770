// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level client for `WebSwitch` devices.
//!
//! Each operation is a single, independent GET request. The client holds no
//! mutable state, so one instance can serve any number of concurrent calls.
//!
//! ```no_run
//! use webswitch_lib::DeviceClient;
//!
//! # async fn example() -> webswitch_lib::Result<()> {
//! let client = DeviceClient::builder("http://wsm.homenet.local")
//!     .with_credentials("admin", "password")
//!     .build()?;
//!
//! let flow = client.get_temperature("FL", None).await?;
//! client.set_relay(2, true, None).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Cancellation
//!
//! Every operation takes an optional [`CancellationToken`]. The token is
//! consulted once, after the complete response has been received and before
//! it is interpreted. Cancelling therefore suppresses the result of a
//! request but does not abort a request already in flight.

#[cfg(feature = "http")]
mod builder;

#[cfg(feature = "http")]
pub use builder::DeviceClientBuilder;

use tokio_util::sync::CancellationToken;

use crate::command::{Command, RelayCommand, TemperatureCommand};
use crate::error::{Error, StatusError};
use crate::protocol::{Credentials, HttpRequest, HttpResponse, Transport, normalize_base_url};
use crate::response::{RelayStateResponse, parse_relay_ack, parse_temperature, parse_temperatures};
use crate::types::{RelayIndex, SensorId, TemperatureSensorCollection};

/// A client for one `WebSwitch` device.
///
/// The type parameter `T` is the transport used to reach the device;
/// [`HttpTransport`](crate::protocol::HttpTransport) in production, any
/// [`Transport`] implementation in tests.
#[derive(Debug, Clone)]
pub struct DeviceClient<T: Transport> {
    base_url: String,
    credentials: Option<Credentials>,
    transport: T,
}

impl<T: Transport> DeviceClient<T> {
    /// Creates a client for the device at `base_url` using `transport`.
    ///
    /// A trailing `/` is appended to `base_url` if missing. Requests are
    /// sent without an `Authorization` header.
    #[must_use]
    pub fn with_transport(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            credentials: None,
            transport,
        }
    }

    /// Sends every request with a Basic `Authorization` header.
    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Returns the base URL, always ending with `/`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the configured credentials.
    #[must_use]
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends a command and returns the raw response.
    ///
    /// The cancellation token is checked once the whole response is in.
    async fn send<C: Command>(
        &self,
        command: &C,
        cancel: Option<&CancellationToken>,
    ) -> Result<HttpResponse, Error> {
        let request = HttpRequest {
            url: format!("{}{}", self.base_url, command.path()),
            credentials: self.credentials.clone(),
        };

        let response = self
            .transport
            .get(&request)
            .await
            .map_err(Error::Protocol)?;

        if cancel.is_some_and(CancellationToken::is_cancelled) {
            tracing::debug!(url = %request.url, "Request cancelled");
            return Err(Error::Cancelled);
        }

        Ok(response)
    }

    // ========== Temperature ==========

    /// Reads a single temperature sensor by index or by name.
    ///
    /// Sends `temperature/get2/{id}`.
    ///
    /// # Errors
    ///
    /// - [`Error::Status`] if the device answers with a non-success status
    /// - [`Error::SensorNotFound`] if the device has no reading for the sensor
    /// - [`Error::Parse`] if the body is not a decimal number
    /// - [`Error::Cancelled`] if `cancel` was triggered
    /// - [`Error::Protocol`] if the request fails
    pub async fn get_temperature(
        &self,
        sensor: impl Into<SensorId>,
        cancel: Option<&CancellationToken>,
    ) -> Result<f32, Error> {
        let id = sensor.into();
        let response = self
            .send(&TemperatureCommand::Single(id.clone()), cancel)
            .await?;
        ensure_success(&response)?;
        parse_temperature(&response.body, &id)
    }

    /// Reads several temperature sensors in one request.
    ///
    /// Sends `temperature/get2/{i1}$...${iN}`. Sensors the device cannot
    /// read are listed in
    /// [`failed_indices`](TemperatureSensorCollection::failed_indices)
    /// instead of failing the call.
    ///
    /// # Errors
    ///
    /// - [`Error::Status`] if the device answers with a non-success status
    /// - [`Error::Parse`] if a line of the body is malformed
    /// - [`Error::Cancelled`] if `cancel` was triggered
    /// - [`Error::Protocol`] if the request fails
    pub async fn get_temperatures(
        &self,
        indices: &[u32],
        cancel: Option<&CancellationToken>,
    ) -> Result<TemperatureSensorCollection, Error> {
        let command = TemperatureCommand::bulk(indices.iter().copied());
        let response = self.send(&command, cancel).await?;
        ensure_success(&response)?;
        Ok(parse_temperatures(&response.body)?)
    }

    // ========== Relays ==========

    /// Switches a relay on or off.
    ///
    /// Sends `relaycontrol/{on|off}/{index}` and returns `true` once the
    /// device acknowledges the command.
    ///
    /// # Errors
    ///
    /// - [`Error::Value`] if `index` is not within 1-5; nothing is sent
    /// - [`Error::AuthorizationRequired`] if the device answers HTTP 401
    /// - [`Error::Status`] for any other non-success status, or an
    ///   acknowledgement other than `|000|OK|1|`
    /// - [`Error::Cancelled`] if `cancel` was triggered
    /// - [`Error::Protocol`] if the request fails
    pub async fn set_relay(
        &self,
        index: u8,
        on: bool,
        cancel: Option<&CancellationToken>,
    ) -> Result<bool, Error> {
        let index = RelayIndex::new(index)?;
        let response = self.send(&RelayCommand::set(index, on), cancel).await?;

        if response.status == 401 {
            return Err(Error::AuthorizationRequired);
        }
        ensure_success(&response)?;
        parse_relay_ack(&response.body)?;

        tracing::debug!(relay = %index, on, "Relay switched");
        Ok(true)
    }

    /// Returns `true` if the relay is currently on.
    ///
    /// Sends `relaystate/get/{index}`.
    ///
    /// # Errors
    ///
    /// - [`Error::Value`] if `index` is not within 1-5; nothing is sent
    /// - [`Error::Status`] if the device answers with a non-success status
    /// - [`Error::Cancelled`] if `cancel` was triggered
    /// - [`Error::Protocol`] if the request fails
    pub async fn get_relay_state(
        &self,
        index: u8,
        cancel: Option<&CancellationToken>,
    ) -> Result<bool, Error> {
        let index = RelayIndex::new(index)?;
        let response = self.send(&RelayCommand::Get { index }, cancel).await?;
        ensure_success(&response)?;
        Ok(RelayStateResponse::parse(&response.body).is_on())
    }
}

fn ensure_success(response: &HttpResponse) -> Result<(), StatusError> {
    if response.is_success() {
        Ok(())
    } else {
        Err(StatusError::Http(response.status))
    }
}

#[cfg(feature = "http")]
impl DeviceClient<crate::protocol::HttpTransport> {
    /// Creates a builder for an HTTP client to the device at `base_url`.
    #[must_use]
    pub fn builder(base_url: impl Into<String>) -> DeviceClientBuilder {
        DeviceClientBuilder::new(crate::protocol::HttpConfig::new(base_url))
    }

    /// Creates an HTTP client without credentials and with default settings.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn http(base_url: impl Into<String>) -> Result<Self, crate::error::ProtocolError> {
        let transport = crate::protocol::HttpTransport::new()?;
        Ok(Self::with_transport(base_url, transport))
    }
}
