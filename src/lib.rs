//! carpark library
//!
//! A single-lane parking garage that stores cars last-in, first-out, plus the
//! script parser and driver that replay arrival/departure commands against it.

pub mod car;
pub mod cli;
pub mod command;
pub mod driver;
pub mod error;
pub mod garage;
pub mod script;

// Re-export main types for convenience
pub use car::Car;
pub use command::{Action, Command};
pub use driver::{apply, final_listing, run};
pub use error::{CarparkError, Result};
pub use garage::{Admission, Departure, Garage, MAX_SIZE};
pub use script::{parse, parse_reader, parse_str, try_parse, ParseOptions};
