//! Plain-text scenario format read by the simulator.
//!
//! ```text
//! <N>
//! <x1> <y1> <mass1> <vx1> <vy1>
//! ...
//! <xN> <yN> <massN> <vxN> <vyN>
//! ```
//!
//! Numbers are written with `f64`'s `Display`: the shortest text that parses back
//! to the same value, never in exponent notation. Readers treat the file as a
//! stream of whitespace-separated tokens.
use std::fmt::Write as _;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::scenario::body::{Body, Position, Velocity};

/// Default output name for a scenario whose box is derived from its size.
pub fn derived_file_name(body_count: usize) -> String {
    format!("{body_count}-bodies.txt")
}

/// Default output name for a scenario with an explicit box.
pub const EXPLICIT_FILE_NAME: &str = "bodies.txt";

/// Serializes `bodies` into the scenario text format.
pub fn serialize_scenario(bodies: &[Body]) -> String {
    let mut out = String::with_capacity(16 + bodies.len() * 64);
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", bodies.len());
    for b in bodies {
        let _ = writeln!(
            out,
            "{} {} {} {} {}",
            b.position.x, b.position.y, b.mass, b.velocity.x, b.velocity.y
        );
    }
    out
}

/// Writes `bodies` to any writer in the scenario text format.
pub fn write_scenario<W: Write>(bodies: &[Body], mut writer: W) -> Result<()> {
    writer.write_all(serialize_scenario(bodies).as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Writes `bodies` to `path`, replacing any existing file.
///
/// The text goes to a sibling temporary file first and is renamed into place,
/// so a failed write never leaves a truncated scenario behind.
pub fn write_scenario_file(bodies: &[Body], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let tmp = temporary_sibling(path);
    let text = serialize_scenario(bodies);

    if let Err(e) = fs::write(&tmp, text.as_bytes()) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }

    info!("Wrote {} bodies to {}.", bodies.len(), path.display());
    Ok(())
}

fn temporary_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Parses scenario text into bodies.
///
/// The first token is the body count, followed by five numbers per body.
/// Missing, non-numeric or surplus tokens are reported as [`Error::Parse`].
pub fn parse_scenario(text: &str) -> Result<Vec<Body>> {
    let mut tokens = text.split_whitespace().enumerate();

    let count: usize = match tokens.next() {
        Some((i, tok)) => tok.parse().map_err(|_| Error::Parse {
            token: i,
            message: format!("expected a body count, found '{tok}'"),
        })?,
        None => {
            return Err(Error::Parse {
                token: 0,
                message: "empty scenario".into(),
            })
        }
    };

    let mut consumed = 1;
    let mut next_number = |field: &str| -> Result<f64> {
        match tokens.next() {
            Some((i, tok)) => {
                consumed = i + 1;
                tok.parse::<f64>().map_err(|_| Error::Parse {
                    token: i,
                    message: format!("expected {field}, found '{tok}'"),
                })
            }
            None => Err(Error::Parse {
                token: consumed,
                message: format!("unexpected end of input while reading {field}"),
            }),
        }
    };

    let mut bodies = Vec::with_capacity(count.min(1 << 20));
    for _ in 0..count {
        let x = next_number("position x")?;
        let y = next_number("position y")?;
        let mass = next_number("mass")?;
        let vx = next_number("velocity x")?;
        let vy = next_number("velocity y")?;
        bodies.push(Body::new(Position::new(x, y), mass, Velocity::new(vx, vy)));
    }

    if let Some((i, tok)) = tokens.next() {
        return Err(Error::Parse {
            token: i,
            message: format!("{count} bodies declared but found extra token '{tok}'"),
        });
    }

    debug!("Parsed {} bodies.", bodies.len());
    Ok(bodies)
}

/// Reads and parses a scenario file.
pub fn read_scenario_file(path: impl AsRef<Path>) -> Result<Vec<Body>> {
    let text = fs::read_to_string(path.as_ref())?;
    parse_scenario(&text)
}
