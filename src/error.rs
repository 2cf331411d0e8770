// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `WebSwitch` library.
//!
//! Every failure a caller can observe maps to exactly one variant of
//! [`Error`], so the distinct device conditions (missing sensor, bad
//! reading, rejected command, missing credentials, out-of-range relay)
//! can be matched on individually.

use thiserror::Error;

use crate::types::SensorId;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// The device answered with the not-found sentinel for a single sensor.
    #[error("failed to find any sensor with {0}")]
    SensorNotFound(SensorId),

    /// A response body did not have the expected numeric format.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The device answered with a non-success status or an unexpected body.
    #[error("status error: {0}")]
    Status(#[from] StatusError),

    /// The device rejected a relay command with HTTP 401.
    #[error("authorization required")]
    AuthorizationRequired,

    /// An argument was rejected before any request was sent.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The request could not be carried out by the transport.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The operation was cancelled through its cancellation token.
    #[error("operation cancelled")]
    Cancelled,
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u8,
        /// Maximum allowed value.
        max: u8,
        /// The actual value that was provided.
        actual: u8,
    },

    /// Credentials must be plain ASCII to be sent as Basic authorization.
    #[error("credentials must contain only ASCII characters")]
    NonAsciiCredentials,
}

/// Errors related to parsing plain-text device responses.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A temperature value could not be parsed as a decimal number.
    #[error("failed to parse the temperature \"{0}\"")]
    InvalidTemperature(String),

    /// A line of a bulk temperature response is malformed.
    #[error("malformed temperature line \"{0}\"")]
    InvalidLine(String),
}

/// Non-success answers from the device.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StatusError {
    /// The HTTP status code was not in the success range.
    #[error("got unexpected status code {0}")]
    Http(u16),

    /// The request succeeded but the device did not acknowledge it.
    #[error("got unexpected response \"{0}\"")]
    UnexpectedBody(String),
}

/// Errors raised by the transport while carrying out a request.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Connection to the device failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
