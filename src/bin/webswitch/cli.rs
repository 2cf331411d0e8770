// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};

use webswitch_lib::SensorId;

/// Query temperatures and control relays on a `WebSwitch`
#[derive(Parser, Debug)]
#[command(name = "webswitch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base URL of the device
    #[arg(long, env = "WEBSWITCH_URL", default_value = "http://wsm.homenet.local")]
    pub url: String,

    /// Username for Basic authorization
    #[arg(long, env = "WEBSWITCH_USER", requires = "password")]
    pub user: Option<String>,

    /// Password for Basic authorization
    #[arg(long, env = "WEBSWITCH_PASSWORD", hide_env_values = true, requires = "user")]
    pub password: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long, global = true, default_value = "10000", env = "WEBSWITCH_TIMEOUT")]
    pub timeout: u64,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose logging (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read several temperature sensors in one request
    Temps {
        /// Sensor indices
        #[arg(default_values_t = [1, 2, 3])]
        indices: Vec<u32>,
    },

    /// Read one temperature sensor by index or name
    Temp {
        /// Sensor index (e.g. 2) or name (e.g. FL)
        sensor: String,
    },

    /// Switch a relay on or off
    RelaySet {
        /// Relay index (1-5)
        index: u8,

        /// Desired state
        #[arg(value_enum)]
        state: RelayStateArg,
    },

    /// Show whether a relay is on
    RelayGet {
        /// Relay index (1-5)
        index: u8,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Self::Temps {
            indices: vec![1, 2, 3],
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelayStateArg {
    On,
    Off,
}

impl RelayStateArg {
    pub fn is_on(self) -> bool {
        self == Self::On
    }
}

/// Interprets a numeric argument as an index and anything else as a name.
pub fn sensor_id(arg: &str) -> SensorId {
    arg.parse::<u32>()
        .map_or_else(|_| SensorId::from(arg), SensorId::ByIndex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sensor_id_from_argument() {
        assert_eq!(sensor_id("4"), SensorId::ByIndex(4));
        assert_eq!(sensor_id("FL"), SensorId::ByName("FL".to_string()));
    }

    #[test]
    fn default_command_reads_first_three_sensors() {
        let cli = Cli::parse_from(["webswitch"]);
        assert!(cli.command.is_none());
        assert!(matches!(
            Commands::default(),
            Commands::Temps { ref indices } if indices == &[1, 2, 3]
        ));
    }

    #[test]
    fn parse_relay_set() {
        let cli = Cli::parse_from(["webswitch", "--url", "http://10.0.0.5", "relay-set", "2", "on"]);
        assert_eq!(cli.url, "http://10.0.0.5");
        match cli.command {
            Some(Commands::RelaySet { index, state }) => {
                assert_eq!(index, 2);
                assert!(state.is_on());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn user_requires_password() {
        let result = Cli::try_parse_from(["webswitch", "--user", "admin", "relay-get", "1"]);
        assert!(result.is_err());
    }
}
