// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `WebSwitch` Lib - A Rust client for WebSwitch relay and temperature controllers.
//!
//! The device exposes a plain-text HTTP API: every operation is a GET
//! request whose answer is a short pipe- or comma-delimited body. This
//! library turns those answers into typed values and typed errors.
//!
//! # Supported Features
//!
//! - **Temperature**: read 1-Wire sensors by index or by name, or several
//!   sensors in one request
//! - **Relays**: switch relays 1-5 on or off and query their state
//! - **Authentication**: optional HTTP Basic authorization
//!
//! # Quick Start
//!
//! ```no_run
//! use webswitch_lib::DeviceClient;
//!
//! #[tokio::main]
//! async fn main() -> webswitch_lib::Result<()> {
//!     let client = DeviceClient::builder("http://wsm.homenet.local").build()?;
//!
//!     let sensors = client.get_temperatures(&[1, 2, 3], None).await?;
//!     for sensor in &sensors {
//!         println!("{sensor}");
//!     }
//!     if sensors.has_failures() {
//!         println!("Failed: {}", sensors.failed_indices_csv());
//!     }
//!
//!     client.set_relay(2, true, None).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! Every failure maps to one [`Error`] variant, so callers can tell a
//! missing sensor from a malformed reading, or a missing password from a
//! device fault:
//!
//! ```no_run
//! use webswitch_lib::{DeviceClient, Error};
//!
//! # async fn example() -> webswitch_lib::Result<()> {
//! let client = DeviceClient::builder("http://wsm.homenet.local").build()?;
//! match client.set_relay(1, false, None).await {
//!     Ok(_) => println!("relay 1 off"),
//!     Err(Error::AuthorizationRequired) => println!("credentials needed"),
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

pub mod command;
mod device;
pub mod error;
pub mod protocol;
pub mod response;
pub mod types;

pub use command::{Command, RelayCommand, TemperatureCommand};
#[cfg(feature = "http")]
pub use device::DeviceClientBuilder;
pub use device::DeviceClient;
pub use error::{Error, ParseError, ProtocolError, Result, StatusError, ValueError};
#[cfg(feature = "http")]
pub use protocol::{HttpConfig, HttpTransport};
pub use protocol::{Credentials, HttpRequest, HttpResponse, Transport};
pub use tokio_util::sync::CancellationToken;
pub use types::{RelayIndex, SensorId, TemperatureSensor, TemperatureSensorCollection};
