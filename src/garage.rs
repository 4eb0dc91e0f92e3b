//! Single-lane LIFO garage
//!
//! The garage is a physical stack: cars enter at the top and only the top car
//! can drive out. To let any other car leave, every car above it is moved out
//! into the street, the target leaves, and the moved cars drive back in.
//!
//! # Design Principles
//!
//! - **No Global State**: each `Garage` owns its lane and its scratch lane
//! - **Outcomes are values**: "full", "empty" and "not here" are reported as
//!   [`Admission`] / [`Departure`], never as errors
//! - **No I/O**: the caller decides where outcome lines go
//!
//! # Departure
//!
//! ```text
//!  parking (top ->)          temp
//!  [A, B, C, D]              []        remove_by_plate("B")
//!  [A, B, C]                 [D]       pop D, no match
//!  [A, B]                    [D, C]    pop C, no match
//!  [A]                       [D, C]    pop B, match (consumed), moved = 2
//!  [A, C, D]                 []        drain temp back
//! ```

use std::fmt;
use tracing::debug;

use crate::car::Car;

/// Fixed capacity of the garage lane
pub const MAX_SIZE: usize = 10;

/// Result of admitting a car.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The car was parked on top of the lane
    Parked,
    /// The lane is at capacity; nothing changed
    Full,
}

impl fmt::Display for Admission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parked => f.write_str("There is room."),
            Self::Full => f.write_str("Garage full, this car cannot enter."),
        }
    }
}

/// Result of asking a car to leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Departure {
    /// Nothing was parked
    Empty,
    /// The topmost car with the plate left after `moved` cars above it were
    /// moved out and back in
    Left { moved: usize },
    /// No parked car carries the plate; nothing changed
    NotFound,
}

impl Departure {
    /// Returns true if a car actually left
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Self::Left { .. })
    }
}

impl fmt::Display for Departure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("Garage is empty."),
            // "1 cars" is kept as-is: downstream tooling matches on it
            Self::Left { moved } => write!(f, "{} cars moved out.", moved),
            Self::NotFound => f.write_str("This car not in the garage."),
        }
    }
}

/// A bounded LIFO parking lane.
///
/// # Example
///
/// ```
/// use carpark::{Car, Departure, Garage};
///
/// let mut garage = Garage::new();
/// garage.admit(Car::new("AA"));
/// garage.admit(Car::new("BB"));
/// garage.admit(Car::new("CC"));
///
/// assert_eq!(garage.remove_by_plate("AA"), Departure::Left { moved: 2 });
/// let plates: Vec<&str> = garage.snapshot().iter().map(Car::plate).collect();
/// assert_eq!(plates, ["BB", "CC"]);
/// ```
#[derive(Debug, Clone)]
pub struct Garage {
    /// Parked cars, bottom first
    parking: Vec<Car>,

    /// Cars moved out during a departure; empty outside `remove_by_plate`
    temp: Vec<Car>,

    capacity: usize,
}

impl Default for Garage {
    fn default() -> Self {
        Self::new()
    }
}

impl Garage {
    /// Create an empty garage holding at most [`MAX_SIZE`] cars
    pub fn new() -> Self {
        Self::with_capacity(MAX_SIZE)
    }

    /// Create an empty garage holding at most `capacity` cars
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            parking: Vec::with_capacity(capacity),
            temp: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Maximum number of cars the lane holds
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of parked cars
    #[inline]
    pub fn len(&self) -> usize {
        self.parking.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parking.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.parking.len() >= self.capacity
    }

    /// Number of cars currently moved out of the lane.
    ///
    /// Always zero between public operations.
    #[inline]
    pub fn displaced(&self) -> usize {
        self.temp.len()
    }

    /// The car at the top of the lane (the only one free to leave directly)
    pub fn peek(&self) -> Option<&Car> {
        self.parking.last()
    }

    /// Take the top car out of the lane
    pub fn pop(&mut self) -> Option<Car> {
        self.parking.pop()
    }

    /// Returns true if any parked car carries `plate`
    pub fn contains(&self, plate: &str) -> bool {
        self.parking.iter().any(|car| car.has_plate(plate))
    }

    /// Parked cars in bottom-to-top order
    pub fn snapshot(&self) -> &[Car] {
        &self.parking
    }

    /// Empty the garage
    pub fn reset(&mut self) {
        self.parking.clear();
        self.temp.clear();
    }

    /// Park `car` on top of the lane if there is room.
    ///
    /// Duplicate plates are accepted.
    pub fn admit(&mut self, car: Car) -> Admission {
        if self.is_full() {
            debug!(plate = car.plate(), "garage full, car turned away");
            return Admission::Full;
        }
        self.parking.push(car);
        Admission::Parked
    }

    /// Let the topmost car carrying `plate` leave.
    ///
    /// Cars above it are moved into the scratch lane, the match is dropped,
    /// and the moved cars are driven back in reverse so every other car keeps
    /// its position relative to the rest.
    pub fn remove_by_plate(&mut self, plate: &str) -> Departure {
        if self.parking.is_empty() {
            return Departure::Empty;
        }

        let mut found = false;
        while let Some(top) = self.parking.pop() {
            if top.has_plate(plate) {
                found = true;
                break;
            }
            self.temp.push(top);
        }
        let moved = self.temp.len();

        while let Some(car) = self.temp.pop() {
            self.parking.push(car);
        }

        debug!(plate, found, moved, "departure processed");
        if found {
            Departure::Left { moved }
        } else {
            Departure::NotFound
        }
    }
}
