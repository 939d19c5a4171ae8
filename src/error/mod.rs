use std::fmt::{Display, Debug, Formatter, Result};


/// Error set for potential sampling errors
pub enum DistributionError {
    /// Standard deviation is negative or not finite
    InvalidStandardDeviation(f64),
}

impl Display for DistributionError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            DistributionError::InvalidStandardDeviation(std) => write!(
                f, "Standard deviation must be finite and non-negative, got {}", std
            ),
        }
    }
}

impl Debug for DistributionError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

/// Error set for potential configuration errors
pub enum ConfigError {
    /// Configuration file is not valid TOML
    MalformedToml(toml::de::Error),
    /// Field is present but cannot be parsed as the expected type
    InvalidFieldType { field: String, expected: &'static str },
    /// Field must not be negative
    NegativeValue(String),
    /// Verbosity is not one of the known levels
    UnknownVerbosity(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            ConfigError::MalformedToml(err) => write!(f, "Cannot read config: {}", err),
            ConfigError::InvalidFieldType { field, expected } => write!(
                f, "Cannot parse '{}' as {}", field, expected
            ),
            ConfigError::NegativeValue(field) => write!(f, "'{}' cannot be negative", field),
            ConfigError::UnknownVerbosity(level) => write!(
                f, "Unknown verbosity '{}', expected 'info' or 'debug'", level
            ),
        }
    }
}

impl Debug for ConfigError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

/// A set of errors that may occur when generating trials
pub enum TrialError {
    /// Errors related to the underlying distribution
    DistributionRelatedError(DistributionError),
    /// Errors related to reading settings
    ConfigRelatedError(ConfigError),
    /// Errors related to reading or writing files and the terminal
    IoRelatedError(std::io::Error),
    /// Errors related to JSON serialization
    JsonRelatedError(serde_json::Error),
    /// No samples were generated so there is no first value to record
    EmptySampleSet,
}

impl Display for TrialError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            TrialError::DistributionRelatedError(err) => write!(f, "{}", err),
            TrialError::ConfigRelatedError(err) => write!(f, "{}", err),
            TrialError::IoRelatedError(err) => write!(f, "{}", err),
            TrialError::JsonRelatedError(err) => write!(f, "{}", err),
            TrialError::EmptySampleSet => write!(f, "Sample set is empty, cannot record first value"),
        }
    }
}

impl Debug for TrialError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

impl std::error::Error for TrialError {}

impl From<DistributionError> for TrialError {
    fn from(err: DistributionError) -> TrialError {
        TrialError::DistributionRelatedError(err)
    }
}

impl From<ConfigError> for TrialError {
    fn from(err: ConfigError) -> TrialError {
        TrialError::ConfigRelatedError(err)
    }
}

impl From<std::io::Error> for TrialError {
    fn from(err: std::io::Error) -> TrialError {
        TrialError::IoRelatedError(err)
    }
}

impl From<serde_json::Error> for TrialError {
    fn from(err: serde_json::Error) -> TrialError {
        TrialError::JsonRelatedError(err)
    }
}
