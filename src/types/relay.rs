// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Relay addressing for `WebSwitch` devices.

use std::fmt;

use crate::error::ValueError;

/// Index of one of the relays on a `WebSwitch`.
///
/// The device has five relays, indexed from 1 to 5.
///
/// # Examples
///
/// ```
/// use webswitch_lib::types::RelayIndex;
///
/// let idx = RelayIndex::new(2).unwrap();
/// assert_eq!(idx.value(), 2);
///
/// assert!(RelayIndex::new(0).is_err());
/// assert!(RelayIndex::new(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelayIndex(u8);

impl RelayIndex {
    /// Lowest valid relay index.
    pub const MIN: u8 = 1;
    /// Highest valid relay index.
    pub const MAX: u8 = 5;

    /// Creates a new relay index.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if index is not within 1-5.
    pub fn new(index: u8) -> Result<Self, ValueError> {
        if !(Self::MIN..=Self::MAX).contains(&index) {
            return Err(ValueError::OutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: index,
            });
        }
        Ok(Self(index))
    }

    /// Returns the numeric value of the index.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Iterates over every valid relay index in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }
}

impl TryFrom<u8> for RelayIndex {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for RelayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
