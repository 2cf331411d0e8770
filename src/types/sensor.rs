// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature sensor readings.

use std::fmt;

use serde::Serialize;

/// Identifies a temperature sensor on the device.
///
/// Sensors are addressed either by their numeric slot on the 1-Wire bus
/// or by the display name configured on the device.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum SensorId {
    /// Numeric sensor index.
    ByIndex(u32),
    /// Configured sensor name, e.g. `"FL"`.
    ByName(String),
}

impl SensorId {
    /// Returns the index if the sensor is addressed by index.
    #[must_use]
    pub fn index(&self) -> Option<u32> {
        match self {
            Self::ByIndex(i) => Some(*i),
            Self::ByName(_) => None,
        }
    }

    /// Returns the name if the sensor is addressed by name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::ByIndex(_) => None,
            Self::ByName(n) => Some(n),
        }
    }

    /// Returns the path segment used to address this sensor.
    pub(crate) fn path_segment(&self) -> String {
        match self {
            Self::ByIndex(i) => i.to_string(),
            Self::ByName(n) => urlencoding::encode(n).into_owned(),
        }
    }
}

impl From<u32> for SensorId {
    fn from(index: u32) -> Self {
        Self::ByIndex(index)
    }
}

impl From<&str> for SensorId {
    fn from(name: &str) -> Self {
        Self::ByName(name.to_string())
    }
}

impl From<String> for SensorId {
    fn from(name: String) -> Self {
        Self::ByName(name)
    }
}

impl fmt::Display for SensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByIndex(i) => write!(f, "index {i}"),
            Self::ByName(n) => write!(f, "name {n}"),
        }
    }
}

/// A single temperature reading.
///
/// # Examples
///
/// ```
/// use webswitch_lib::types::TemperatureSensor;
///
/// let sensor = TemperatureSensor::with_index(1, 20.5);
/// assert_eq!(sensor.index(), Some(1));
/// assert_eq!(sensor.to_string(), "Name: N/A, Sensor index: 1, Value: 20.5");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureSensor {
    id: SensorId,
    value: f32,
}

impl TemperatureSensor {
    /// Creates a reading for the given sensor.
    #[must_use]
    pub fn new(id: SensorId, value: f32) -> Self {
        Self { id, value }
    }

    /// Creates a reading for a sensor addressed by index.
    #[must_use]
    pub fn with_index(index: u32, value: f32) -> Self {
        Self::new(SensorId::ByIndex(index), value)
    }

    /// Creates a reading for a sensor addressed by name.
    #[must_use]
    pub fn with_name(name: impl Into<String>, value: f32) -> Self {
        Self::new(SensorId::ByName(name.into()), value)
    }

    /// Returns the sensor identifier.
    #[must_use]
    pub fn id(&self) -> &SensorId {
        &self.id
    }

    /// Returns the sensor index, if the reading carries one.
    #[must_use]
    pub fn index(&self) -> Option<u32> {
        self.id.index()
    }

    /// Returns the sensor name, if the reading carries one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.id.name()
    }

    /// Returns the temperature in degrees Celsius.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }
}

impl fmt::Display for TemperatureSensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name().unwrap_or("N/A");
        match self.index() {
            Some(i) => write!(f, "Name: {name}, Sensor index: {i}, Value: {}", self.value),
            None => write!(f, "Name: {name}, Sensor index: N/A, Value: {}", self.value),
        }
    }
}

/// Result of a bulk temperature request.
///
/// Holds the successful readings in the order the device reported them,
/// plus the indices of sensors the device could not read. An index never
/// appears in both lists; a failure always takes precedence over a reading.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TemperatureSensorCollection {
    sensors: Vec<TemperatureSensor>,
    failed_indices: Vec<u32>,
}

impl TemperatureSensorCollection {
    /// Creates an empty collection with no failures.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a successful reading.
    ///
    /// A reading for an index already recorded as failed is rejected and
    /// `false` is returned; the failure is kept.
    pub fn push(&mut self, sensor: TemperatureSensor) -> bool {
        if sensor
            .index()
            .is_some_and(|index| self.failed_indices.contains(&index))
        {
            return false;
        }
        self.sensors.push(sensor);
        true
    }

    /// Records an index the device failed to read.
    ///
    /// Indices are appended in the order they are reported, repeats
    /// included. Any successful reading for the same index is dropped.
    pub fn push_failed(&mut self, index: u32) {
        self.sensors.retain(|s| s.index() != Some(index));
        self.failed_indices.push(index);
    }

    /// Returns the successful readings.
    #[must_use]
    pub fn sensors(&self) -> &[TemperatureSensor] {
        &self.sensors
    }

    /// Returns the indices that failed to read, in the order reported.
    #[must_use]
    pub fn failed_indices(&self) -> &[u32] {
        &self.failed_indices
    }

    /// Returns `true` if at least one requested sensor failed to read.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failed_indices.is_empty()
    }

    /// Joins the failed indices with commas, e.g. `"2,4"`.
    #[must_use]
    pub fn failed_indices_csv(&self) -> String {
        self.failed_indices
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Returns all readings for the given sensor index.
    pub fn by_index(&self, index: u32) -> impl Iterator<Item = &TemperatureSensor> {
        self.sensors.iter().filter(move |s| s.index() == Some(index))
    }

    /// Returns all readings for the given sensor name.
    pub fn by_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a TemperatureSensor> {
        self.sensors.iter().filter(move |s| s.name() == Some(name))
    }

    /// Iterates over the successful readings.
    pub fn iter(&self) -> std::slice::Iter<'_, TemperatureSensor> {
        self.sensors.iter()
    }

    /// Number of successful readings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    /// Returns `true` if there are no successful readings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }
}

impl<'a> IntoIterator for &'a TemperatureSensorCollection {
    type Item = &'a TemperatureSensor;
    type IntoIter = std::slice::Iter<'a, TemperatureSensor>;

    fn into_iter(self) -> Self::IntoIter {
        self.sensors.iter()
    }
}

impl IntoIterator for TemperatureSensorCollection {
    type Item = TemperatureSensor;
    type IntoIter = std::vec::IntoIter<TemperatureSensor>;

    fn into_iter(self) -> Self::IntoIter {
        self.sensors.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sensor_id_display() {
        assert_eq!(SensorId::ByIndex(3).to_string(), "index 3");
        assert_eq!(SensorId::from("RL").to_string(), "name RL");
    }

    #[test]
    fn sensor_id_path_segment_encodes_names() {
        assert_eq!(SensorId::ByIndex(12).path_segment(), "12");
        assert_eq!(SensorId::from("hot water").path_segment(), "hot%20water");
    }

    #[test]
    fn sensor_display_by_name() {
        let sensor = TemperatureSensor::with_name("FL", 41.5);
        assert_eq!(sensor.index(), None);
        assert_eq!(sensor.to_string(), "Name: FL, Sensor index: N/A, Value: 41.5");
    }

    #[test]
    fn new_collection_has_empty_failed_list() {
        let collection = TemperatureSensorCollection::new();
        assert!(collection.failed_indices().is_empty());
        assert!(!collection.has_failures());
        assert_eq!(collection.failed_indices_csv(), "");
        assert!(collection.is_empty());
    }

    #[test]
    fn collection_lookups() {
        let mut collection = TemperatureSensorCollection::new();
        collection.push(TemperatureSensor::with_index(1, 20.0));
        collection.push(TemperatureSensor::with_name("FL", 40.0));
        collection.push(TemperatureSensor::with_index(1, 21.0));

        let ones: Vec<f32> = collection.by_index(1).map(TemperatureSensor::value).collect();
        assert_eq!(ones, vec![20.0, 21.0]);
        assert_eq!(collection.by_name("FL").count(), 1);
        assert_eq!(collection.by_name("RL").count(), 0);
        assert_eq!(collection.len(), 3);
    }

    #[test]
    fn failed_and_successful_indices_stay_disjoint() {
        let mut collection = TemperatureSensorCollection::new();
        assert!(collection.push(TemperatureSensor::with_index(2, 20.0)));
        collection.push_failed(2);
        assert!(collection.by_index(2).next().is_none());
        assert_eq!(collection.failed_indices(), &[2]);

        assert!(!collection.push(TemperatureSensor::with_index(2, 22.0)));
        assert_eq!(collection.failed_indices(), &[2]);
        assert!(collection.by_index(2).next().is_none());
    }

    #[test]
    fn named_readings_are_never_rejected() {
        let mut collection = TemperatureSensorCollection::new();
        collection.push_failed(1);
        assert!(collection.push(TemperatureSensor::with_name("FL", 40.0)));
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn failed_indices_csv_preserves_order() {
        let mut collection = TemperatureSensorCollection::new();
        collection.push_failed(4);
        collection.push_failed(2);
        collection.push_failed(4);
        assert_eq!(collection.failed_indices_csv(), "4,2,4");
    }
}
