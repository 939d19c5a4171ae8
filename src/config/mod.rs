//! Run settings, with defaults that reproduce the standard trial generation
//! and optional overrides from the `[trials]` table of a TOML file.
//!
//! ```toml
//! [trials]
//! seed = 123
//! min = 3
//! max = 7
//! samples = 250
//! mean = 5.0
//! std = 1.4142135623730951
//! output = "./trials.json"
//! verbosity = "info"
//! ```

use std::path::PathBuf;
use toml::Value;
use crate::{error::ConfigError, logging::Verbosity, output::DEFAULT_OUTPUT_PATH};


/// Default seed for the random source
pub const DEFAULT_SEED: u64 = 123;

/// Parameters of a single trial generation run
#[derive(Debug, Clone, PartialEq)]
pub struct TrialSettings {
    /// Seed for the random source
    pub seed: u64,
    /// Lower bound of generated values
    pub min: f64,
    /// Upper bound of generated values
    pub max: f64,
    /// Number of values to generate
    pub samples: usize,
    /// Center of the normal distribution
    pub mean: f64,
    /// Standard deviation of the normal distribution
    pub std: f64,
    /// Where the trial record is written
    pub output: PathBuf,
    /// Log verbosity, `Debug` also shows the histogram
    pub verbosity: Verbosity,
}

impl Default for TrialSettings {
    fn default() -> Self {
        TrialSettings {
            seed: DEFAULT_SEED,
            min: 3.,
            max: 7.,
            samples: 250,
            mean: 5.0,
            std: 2.0_f64.sqrt(),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            verbosity: Verbosity::Info,
        }
    }
}

fn invalid_type(field_name: &str, expected: &'static str) -> ConfigError {
    ConfigError::InvalidFieldType { field: String::from(field_name), expected }
}

fn parse_u64(value: &Value, field_name: &str) -> Result<u64, ConfigError> {
    let output = value
        .as_integer()
        .ok_or_else(|| invalid_type(field_name, "integer"))?;

    u64::try_from(output).map_err(|_| ConfigError::NegativeValue(String::from(field_name)))
}

fn parse_usize(value: &Value, field_name: &str) -> Result<usize, ConfigError> {
    let output = value
        .as_integer()
        .ok_or_else(|| invalid_type(field_name, "unsigned integer"))?;

    usize::try_from(output).map_err(|_| ConfigError::NegativeValue(String::from(field_name)))
}

// integers are accepted so bounds can be written as `min = 3`
fn parse_f64(value: &Value, field_name: &str) -> Result<f64, ConfigError> {
    match value {
        Value::Float(v) => Ok(*v),
        Value::Integer(v) => Ok(*v as f64),
        _ => Err(invalid_type(field_name, "float")),
    }
}

fn parse_string(value: &Value, field_name: &str) -> Result<String, ConfigError> {
    value
        .as_str()
        .ok_or_else(|| invalid_type(field_name, "string"))
        .map(String::from)
}

fn parse_value_with_default<T>(
    table: &Value,
    key: &str,
    parser: impl Fn(&Value, &str) -> Result<T, ConfigError>,
    default: T,
) -> Result<T, ConfigError> {
    table
        .get(key)
        .map_or(Ok(default), |value| parser(value, key))
}

impl TrialSettings {
    /// Reads settings from a table, any key that is not present keeps its default
    pub fn from_table(table: &Value) -> Result<TrialSettings, ConfigError> {
        let defaults = TrialSettings::default();

        let verbosity = match table.get("verbosity") {
            Some(value) => Verbosity::from_str(&parse_string(value, "verbosity")?)?,
            None => defaults.verbosity,
        };

        Ok(TrialSettings {
            seed: parse_value_with_default(table, "seed", parse_u64, defaults.seed)?,
            min: parse_value_with_default(table, "min", parse_f64, defaults.min)?,
            max: parse_value_with_default(table, "max", parse_f64, defaults.max)?,
            samples: parse_value_with_default(table, "samples", parse_usize, defaults.samples)?,
            mean: parse_value_with_default(table, "mean", parse_f64, defaults.mean)?,
            std: parse_value_with_default(table, "std", parse_f64, defaults.std)?,
            output: match table.get("output") {
                Some(value) => PathBuf::from(parse_string(value, "output")?),
                None => defaults.output,
            },
            verbosity,
        })
    }

    /// Parses TOML content, settings are read from the `[trials]` table and
    /// content without that table yields the defaults
    pub fn from_toml_str(content: &str) -> Result<TrialSettings, ConfigError> {
        let config: Value = toml::from_str(content).map_err(ConfigError::MalformedToml)?;

        match config.get("trials") {
            Some(trials_table) => TrialSettings::from_table(trials_table),
            None => Ok(TrialSettings::default()),
        }
    }
}
