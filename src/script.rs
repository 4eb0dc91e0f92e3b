//! Command script loading
//!
//! A script is a text file with one `<action> <plate>` command per line.
//! Lines that do not split into exactly two tokens are dropped. A script that
//! cannot be read is reported on standard output and treated as empty, so a
//! bad path never aborts a run.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::{error, info, warn};

use crate::command::Command;
use crate::error::{CarparkError, Result};

/// Parser behaviour switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Log every discarded line at `warn` level (stderr). Stdout is unaffected.
    pub warn_malformed: bool,
}

/// Commands accepted from a reader, in line order.
///
/// Lines end at `\n`; one trailing `\r` is dropped as well, including on a
/// final line with no `\n` after it. Bytes that are not valid UTF-8 are
/// replaced with U+FFFD and reading carries on.
///
/// Stops at the first IO fault; the commands accepted before it are
/// returned together with the error.
pub fn parse_reader<R: BufRead>(
    mut reader: R,
    options: ParseOptions,
) -> (Vec<Command>, Option<std::io::Error>) {
    let mut commands = Vec::new();
    let mut buf = Vec::new();
    let mut number = 0usize;
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => return (commands, Some(e)),
        }
        number += 1;

        let mut bytes = buf.as_slice();
        if let Some(rest) = bytes.strip_suffix(b"\n") {
            bytes = rest;
        }
        if let Some(rest) = bytes.strip_suffix(b"\r") {
            bytes = rest;
        }
        let line = String::from_utf8_lossy(bytes);

        match Command::parse_line(&line) {
            Some(command) => commands.push(command),
            None if options.warn_malformed => {
                warn!(line = number, content = %line, "discarding malformed script line");
            }
            None => {}
        }
    }
    (commands, None)
}

/// Commands accepted from an in-memory script
pub fn parse_str(script: &str, options: ParseOptions) -> Vec<Command> {
    // Reading from a byte slice cannot fail
    parse_reader(script.as_bytes(), options).0
}

/// Read a script file, failing on the first IO error.
///
/// Commands accepted before a mid-file IO fault are discarded; use
/// [`parse`] for the forgiving behaviour.
pub fn try_parse(path: impl AsRef<Path>, options: ParseOptions) -> Result<Vec<Command>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| CarparkError::script(path, e))?;
    match parse_reader(BufReader::new(file), options) {
        (commands, None) => Ok(commands),
        (_, Some(e)) => Err(CarparkError::script(path, e)),
    }
}

/// Read a script file, reporting faults instead of returning them.
///
/// An unreadable file is reported once to `out` as
/// `Error reading file: <reason>` and yields no commands. A fault part-way
/// through (an IO error, not bad UTF-8) is reported the same way, keeping the
/// commands read so far.
pub fn parse<W: Write>(
    path: impl AsRef<Path>,
    options: ParseOptions,
    out: &mut W,
) -> std::io::Result<Vec<Command>> {
    let path = path.as_ref();
    let (commands, fault) = match File::open(path) {
        Ok(file) => parse_reader(BufReader::new(file), options),
        Err(e) => (Vec::new(), Some(e)),
    };

    if let Some(e) = fault {
        let err = CarparkError::script(path, e);
        error!("{}", err);
        writeln!(out, "Error reading file: {}", err.reason())?;
    }

    info!(
        "Loaded {} command(s) from {}",
        commands.len(),
        path.display()
    );
    Ok(commands)
}
