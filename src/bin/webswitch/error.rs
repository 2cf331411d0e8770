// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `webswitch` CLI.

use thiserror::Error;

/// Exit codes for the CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NETWORK_ERROR: i32 = 2;
    pub const DEVICE_ERROR: i32 = 3;
    pub const INVALID_ARGS: i32 = 4;
}

/// Main error type for the CLI
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Device(#[from] webswitch_lib::Error),

    #[error("failed to format output: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        use webswitch_lib::Error;

        match self {
            CliError::Device(e) => match e {
                Error::Value(_) => exit_codes::INVALID_ARGS,
                Error::Protocol(_) => exit_codes::NETWORK_ERROR,
                Error::Cancelled => exit_codes::GENERAL_ERROR,
                Error::SensorNotFound(_)
                | Error::Parse(_)
                | Error::Status(_)
                | Error::AuthorizationRequired => exit_codes::DEVICE_ERROR,
            },
            CliError::Output(_) => exit_codes::GENERAL_ERROR,
        }
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use webswitch_lib::{Error, ValueError};

    #[test]
    fn exit_codes_by_kind() {
        let range: CliError = Error::Value(ValueError::OutOfRange {
            min: 1,
            max: 5,
            actual: 9,
        })
        .into();
        assert_eq!(range.exit_code(), exit_codes::INVALID_ARGS);

        let auth: CliError = Error::AuthorizationRequired.into();
        assert_eq!(auth.exit_code(), exit_codes::DEVICE_ERROR);
    }
}
