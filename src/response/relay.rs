// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Relay response parsing.

use crate::error::StatusError;

/// Body the device returns after successfully switching a relay.
pub const RELAY_ACK: &str = "|000|OK|1|";

/// Checks the acknowledgement of a relay control command.
///
/// The body must match [`RELAY_ACK`] exactly.
///
/// # Errors
///
/// Returns [`StatusError::UnexpectedBody`] carrying the body otherwise.
pub fn parse_relay_ack(body: &str) -> Result<(), StatusError> {
    if body == RELAY_ACK {
        Ok(())
    } else {
        Err(StatusError::UnexpectedBody(body.to_string()))
    }
}

/// Response from a relay state query.
///
/// The device answers with `|`-delimited fields such as `|000|OK|1|`, where
/// the last field is `1` when the relay is on.
///
/// # Examples
///
/// ```
/// use webswitch_lib::response::RelayStateResponse;
///
/// let response = RelayStateResponse::parse("|000|OK|1|");
/// assert!(response.is_on());
/// assert_eq!(response.fields(), &["000", "OK", "1"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayStateResponse {
    fields: Vec<String>,
}

impl RelayStateResponse {
    /// Splits a state body into its non-empty, trimmed fields.
    #[must_use]
    pub fn parse(body: &str) -> Self {
        let fields = body
            .split('|')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(String::from)
            .collect();
        Self { fields }
    }

    /// Returns the fields of the response.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Returns `true` if the last field is `1`.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.fields.last().is_some_and(|f| f == "1")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ack_matches_exactly() {
        assert_eq!(parse_relay_ack("|000|OK|1|"), Ok(()));
    }

    #[test]
    fn ack_rejects_other_bodies() {
        assert_eq!(
            parse_relay_ack("|000|ERR|0|"),
            Err(StatusError::UnexpectedBody("|000|ERR|0|".to_string()))
        );
        assert!(parse_relay_ack("").is_err());
    }

    #[test]
    fn state_on_and_off() {
        assert!(RelayStateResponse::parse("|000|OK|1|").is_on());
        assert!(!RelayStateResponse::parse("|000|OK|0|").is_on());
    }

    #[test]
    fn state_ignores_whitespace_and_empty_fields() {
        let response = RelayStateResponse::parse("| 000 || OK | 1 |\n");
        assert_eq!(response.fields(), &["000", "OK", "1"]);
        assert!(response.is_on());
    }

    #[test]
    fn state_empty_body_is_off() {
        assert!(!RelayStateResponse::parse("").is_on());
        assert!(!RelayStateResponse::parse("|||").is_on());
    }
}
