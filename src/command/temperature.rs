// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature sensor commands.

use crate::command::Command;
use crate::types::SensorId;

/// Separator the device expects between indices of a bulk request.
const INDEX_SEPARATOR: &str = "$";

/// Command to read one or more 1-Wire temperature sensors.
///
/// # Examples
///
/// ```
/// use webswitch_lib::command::{Command, TemperatureCommand};
///
/// let single = TemperatureCommand::single(5u32);
/// assert_eq!(single.path(), "temperature/get2/5");
///
/// let named = TemperatureCommand::single("FL");
/// assert_eq!(named.path(), "temperature/get2/FL");
///
/// let bulk = TemperatureCommand::bulk([1, 2, 3]);
/// assert_eq!(bulk.path(), "temperature/get2/1$2$3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemperatureCommand {
    /// Read a single sensor by index or name.
    Single(SensorId),
    /// Read several sensors by index in one request.
    Bulk(Vec<u32>),
}

impl TemperatureCommand {
    /// Creates a command reading a single sensor.
    #[must_use]
    pub fn single(id: impl Into<SensorId>) -> Self {
        Self::Single(id.into())
    }

    /// Creates a command reading several sensors at once.
    #[must_use]
    pub fn bulk(indices: impl IntoIterator<Item = u32>) -> Self {
        Self::Bulk(indices.into_iter().collect())
    }
}

impl Command for TemperatureCommand {
    fn path(&self) -> String {
        match self {
            Self::Single(id) => format!("temperature/get2/{}", id.path_segment()),
            Self::Bulk(indices) => {
                let segment = indices
                    .iter()
                    .map(u32::to_string)
                    .collect::<Vec<_>>()
                    .join(INDEX_SEPARATOR);
                format!("temperature/get2/{segment}")
            }
        }
    }
}
