// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Relay control commands.

use crate::command::Command;
use crate::types::RelayIndex;

/// Command to switch or query a relay.
///
/// # Examples
///
/// ```
/// use webswitch_lib::command::{Command, RelayCommand};
/// use webswitch_lib::types::RelayIndex;
///
/// let on = RelayCommand::set(RelayIndex::new(2).unwrap(), true);
/// assert_eq!(on.path(), "relaycontrol/on/2");
///
/// let query = RelayCommand::Get { index: RelayIndex::new(4).unwrap() };
/// assert_eq!(query.path(), "relaystate/get/4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayCommand {
    /// Query the current relay state.
    Get {
        /// The relay to query.
        index: RelayIndex,
    },
    /// Switch the relay on or off.
    Set {
        /// The relay to control.
        index: RelayIndex,
        /// `true` for on.
        on: bool,
    },
}

impl RelayCommand {
    /// Creates a command switching a relay to the given state.
    #[must_use]
    pub const fn set(index: RelayIndex, on: bool) -> Self {
        Self::Set { index, on }
    }

    /// Returns the relay this command addresses.
    #[must_use]
    pub const fn index(&self) -> RelayIndex {
        match self {
            Self::Get { index } | Self::Set { index, .. } => *index,
        }
    }
}

impl Command for RelayCommand {
    fn path(&self) -> String {
        match self {
            Self::Get { index } => format!("relaystate/get/{index}"),
            Self::Set { index, on } => {
                let state = if *on { "on" } else { "off" };
                format!("relaycontrol/{state}/{index}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_paths_for_every_relay() {
        for index in RelayIndex::all() {
            let i = index.value();
            assert_eq!(
                RelayCommand::set(index, true).path(),
                format!("relaycontrol/on/{i}")
            );
            assert_eq!(
                RelayCommand::set(index, false).path(),
                format!("relaycontrol/off/{i}")
            );
        }
    }

    #[test]
    fn get_paths_for_every_relay() {
        for index in RelayIndex::all() {
            assert_eq!(
                RelayCommand::Get { index }.path(),
                format!("relaystate/get/{}", index.value())
            );
        }
    }

    #[test]
    fn index_accessor() {
        let idx = RelayIndex::new(3).unwrap();
        assert_eq!(RelayCommand::set(idx, false).index(), idx);
        assert_eq!(RelayCommand::Get { index: idx }.index(), idx);
    }
}
