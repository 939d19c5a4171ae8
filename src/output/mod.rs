//! Writing generated trial values to disk as JSON.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};
use serde::{Deserialize, Serialize};
use serde_json::{ser::PrettyFormatter, Serializer};
use crate::error::TrialError;


/// Default path the trial record is written to
pub const DEFAULT_OUTPUT_PATH: &str = "./trials.json";

/// Record persisted at the end of a run, holds the first generated sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialRecord {
    pub num: f64,
}

/// Serializes `data` as UTF-8 JSON with 4 space indentation into the file at `path`,
/// the file is created or truncated, non-ASCII characters are written as is
///
/// Fails with [`TrialError::IoRelatedError`] if the file cannot be created (for example
/// when the containing directory does not exist), in which case no file is produced
pub fn dump_json<T: Serialize + ?Sized>(path: impl AsRef<Path>, data: &T) -> Result<(), TrialError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut writer, formatter);
    data.serialize(&mut serializer)?;

    writer.flush()?;

    Ok(())
}
