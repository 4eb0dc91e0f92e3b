//! Car identity
//!
//! A car is nothing more than its licence plate. Plates are opaque strings
//! compared for equality; no syntax is enforced.

use std::fmt;

/// A parked (or arriving) car, identified by its plate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Car {
    plate: String,
}

impl Car {
    /// Create a car carrying `plate`
    pub fn new(plate: impl Into<String>) -> Self {
        Self {
            plate: plate.into(),
        }
    }

    /// The licence plate
    #[inline]
    pub fn plate(&self) -> &str {
        &self.plate
    }

    /// Returns true if this car carries `plate`
    #[inline]
    pub fn has_plate(&self, plate: &str) -> bool {
        self.plate == plate
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.plate)
    }
}

impl From<&str> for Car {
    fn from(plate: &str) -> Self {
        Self::new(plate)
    }
}
