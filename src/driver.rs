//! Command driver
//!
//! Applies parsed commands to a [`Garage`] and writes one outcome line per
//! recognised command, then the final inventory. Output goes to any
//! `io::Write` so the binary can use stdout and tests can use a buffer.

use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

use crate::car::Car;
use crate::command::{Action, Command};
use crate::garage::Garage;
use crate::script::{self, ParseOptions};

/// Apply `commands` to `garage` in order.
///
/// Commands whose action token is not `A`/`D` (any case) are skipped without
/// output.
pub fn apply<W: Write>(
    commands: &[Command],
    garage: &mut Garage,
    out: &mut W,
) -> std::io::Result<()> {
    for command in commands {
        let Some(action) = command.action() else {
            debug!(%command, "ignoring unknown action");
            continue;
        };
        let plate = command.plate();
        match action {
            Action::Arrival => {
                let outcome = garage.admit(Car::new(plate));
                writeln!(out, "{} {} -> {}", action, plate, outcome)?;
            }
            Action::Departure => {
                let outcome = garage.remove_by_plate(plate);
                writeln!(out, "{} {} -> {}", action, plate, outcome)?;
            }
        }
    }
    Ok(())
}

/// Write the inventory: a blank line, the header, then `None.` or one
/// ` - <plate>` line per car from bottom to top.
pub fn final_listing<W: Write>(garage: &Garage, out: &mut W) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Cars currently in garage:")?;
    if garage.is_empty() {
        writeln!(out, "None.")?;
    } else {
        for car in garage.snapshot() {
            writeln!(out, " - {}", car)?;
        }
    }
    Ok(())
}

/// Run a whole script against a fresh garage.
///
/// Returns the garage in its final state. Only failures writing to `out`
/// are errors; an unreadable script behaves as an empty one.
pub fn run<W: Write>(
    path: impl AsRef<Path>,
    options: ParseOptions,
    out: &mut W,
) -> std::io::Result<Garage> {
    let commands = script::parse(path, options, out)?;
    let mut garage = Garage::new();
    apply(&commands, &mut garage, out)?;
    final_listing(&garage, out)?;
    info!("Run finished with {} car(s) parked", garage.len());
    Ok(garage)
}
