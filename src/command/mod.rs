// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `WebSwitch` command definitions.
//!
//! The device exposes a plain-text REST API where every command is a GET
//! request and the whole command is encoded in the URL path.
//!
//! # Available Commands
//!
//! | Command Type | Purpose | Path |
//! |-------------|---------|------|
//! | [`TemperatureCommand`] | Read one sensor by index or name | `temperature/get2/{id}` |
//! | [`TemperatureCommand`] | Read several sensors at once | `temperature/get2/{i1}$...${iN}` |
//! | [`RelayCommand`] | Switch a relay | `relaycontrol/{on,off}/{index}` |
//! | [`RelayCommand`] | Query a relay | `relaystate/get/{index}` |

mod relay;
mod temperature;

pub use relay::RelayCommand;
pub use temperature::TemperatureCommand;

/// A command that can be sent to a `WebSwitch` device.
pub trait Command {
    /// Returns the path of the command relative to the device base URL.
    ///
    /// The path never starts with `/`.
    fn path(&self) -> String;
}
