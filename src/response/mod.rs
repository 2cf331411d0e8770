// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for `WebSwitch` plain-text responses.
//!
//! The parsers here are pure functions over the response body; HTTP status
//! handling happens in [`DeviceClient`](crate::DeviceClient).

mod relay;
mod temperature;

pub use relay::{RELAY_ACK, RelayStateResponse, parse_relay_ack};
pub use temperature::{SENSOR_NOT_FOUND, parse_temperature, parse_temperatures};
