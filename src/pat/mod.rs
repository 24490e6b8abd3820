//! SNNS pattern files.
//!
//! A pattern file starts with a fixed header that names the number of patterns and how many of
//! the units in each pattern are inputs and outputs. Every following line holds one pattern,
//! its values separated by spaces.

mod file_lock;
mod names;

pub use self::names::OutputNames;

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use time::Tm;

use crate::encoder::Pattern;
use crate::error::Result;

use self::file_lock::ExclusiveLock;

const FORMAT_TAG: &str = "SNNS pattern definition file V1.4";
const TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

/// Shape of the patterns in one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Units {
    pub inputs: usize,
    pub outputs: usize,
}

/// Render the pattern file header
pub fn header(n_patterns: usize, units: Units, generated: &Tm) -> Result<String> {
    Ok(format!(
        "{}\ngenerated at {}\n\nNo. of patterns : {}\nNo. of input units : {}\nNo. of output units : {}\n\n",
        FORMAT_TAG,
        generated.strftime(TIMESTAMP_FORMAT)?,
        n_patterns,
        units.inputs,
        units.outputs
    ))
}

/// Write header and patterns to `out`
pub fn write_patterns<W: Write>(
    out: &mut W,
    patterns: &[Pattern],
    units: Units,
    generated: &Tm,
) -> Result<()> {
    out.write_all(header(patterns.len(), units, generated)?.as_bytes())?;
    for pattern in patterns {
        for unit in pattern {
            write!(out, "{} ", unit)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Create a new pattern file at `path`. Fails if the file already exists.
pub fn write_file(path: &Path, patterns: &[Pattern], units: Units, generated: &Tm) -> Result<()> {
    let file = OpenOptions::new().write(true).create_new(true).open(path)?;
    let mut out = BufWriter::new(ExclusiveLock::new(file)?);
    write_patterns(&mut out, patterns, units, generated)?;
    out.flush()?;
    info!("wrote {} patterns to {}", patterns.len(), path.display());
    Ok(())
}
