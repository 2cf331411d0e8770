// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for `WebSwitch` devices.
//!
//! # Types
//!
//! - [`RelayIndex`] - Relay number (1-5), validated at construction
//! - [`SensorId`] - A temperature sensor addressed by index or by name
//! - [`TemperatureSensor`] - One temperature reading
//! - [`TemperatureSensorCollection`] - Readings and failures of a bulk request

mod relay;
mod sensor;

pub use relay::RelayIndex;
pub use sensor::{SensorId, TemperatureSensor, TemperatureSensorCollection};
