// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature response parsing.
//!
//! A single-sensor request answers with a bare decimal number, or `X` when
//! the sensor cannot be read. A bulk request answers with one line per
//! requested sensor, either `index,value` or `index,X`.

use crate::error::{Error, ParseError};
use crate::types::{SensorId, TemperatureSensor, TemperatureSensorCollection};

/// Body the device returns when a sensor has no reading.
pub const SENSOR_NOT_FOUND: &str = "X";

/// Line suffix marking a failed sensor in a bulk response.
const FAILED_LINE_SUFFIX: &str = ",X";

/// Parses a decimal temperature.
///
/// Rust's float parsing always uses `.` as the decimal separator, so the
/// result does not depend on the host locale. `NaN` and infinities are
/// not temperatures and are rejected.
fn parse_value(text: &str) -> Option<f32> {
    text.trim()
        .parse::<f32>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Parses the body of a single-sensor temperature response.
///
/// # Errors
///
/// - [`Error::SensorNotFound`] if the device returned the `X` sentinel
/// - [`Error::Parse`] carrying the body as received if it is not a finite
///   decimal number
///
/// # Examples
///
/// ```
/// use webswitch_lib::response::parse_temperature;
/// use webswitch_lib::types::SensorId;
///
/// let value = parse_temperature("23.5\n", &SensorId::ByIndex(5)).unwrap();
/// assert!((value - 23.5).abs() < f32::EPSILON);
///
/// assert!(parse_temperature("X", &SensorId::ByIndex(5)).is_err());
/// ```
pub fn parse_temperature(body: &str, id: &SensorId) -> Result<f32, Error> {
    if body.trim() == SENSOR_NOT_FOUND {
        return Err(Error::SensorNotFound(id.clone()));
    }
    parse_value(body).ok_or_else(|| ParseError::InvalidTemperature(body.to_string()).into())
}

/// Parses the body of a bulk temperature response.
///
/// Sensors the device could not read are recorded as failures in the
/// returned collection rather than reported as errors. The failed list is
/// always present, empty when every sensor was read. A reading for an
/// index that was already reported as failed is discarded.
///
/// # Errors
///
/// Returns [`ParseError::InvalidLine`] if a line matches neither the
/// `index,value` nor the `index,X` format.
///
/// # Examples
///
/// ```
/// use webswitch_lib::response::parse_temperatures;
///
/// let collection = parse_temperatures("1,20.1\n2,X\n3,21.4\n").unwrap();
/// assert_eq!(collection.len(), 2);
/// assert_eq!(collection.failed_indices(), &[2]);
/// ```
pub fn parse_temperatures(body: &str) -> Result<TemperatureSensorCollection, ParseError> {
    let mut collection = TemperatureSensorCollection::new();

    for line in body.split('\n').map(str::trim).filter(|l| !l.is_empty()) {
        if line.ends_with(FAILED_LINE_SUFFIX) {
            // Failed lines are identified by their leading index digit.
            let index = line
                .chars()
                .next()
                .and_then(|c| c.to_digit(10))
                .ok_or_else(|| ParseError::InvalidLine(line.to_string()))?;
            if collection.by_index(index).next().is_some() {
                tracing::warn!(index, "Discarding reading of a sensor reported as failed");
            }
            collection.push_failed(index);
            continue;
        }

        let mut parts = line.split(',');
        let index = parts.next().and_then(|p| p.trim().parse::<u32>().ok());
        let value = parts.next().and_then(parse_value);
        match (index, value) {
            (Some(index), Some(value)) => {
                if !collection.push(TemperatureSensor::with_index(index, value)) {
                    tracing::warn!(index, "Discarding reading of a sensor reported as failed");
                }
            }
            _ => return Err(ParseError::InvalidLine(line.to_string())),
        }
    }

    Ok(collection)
}
