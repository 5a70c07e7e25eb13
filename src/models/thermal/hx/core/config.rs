use std::str::FromStr;

use thiserror::Error;

use crate::support::{hx::Tolerance, units::ReadingUnits};

/// Configuration for a heat integration run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeatIntegrationConfig {
    /// Duty tolerance used for matching (default 1%).
    pub tolerance: Tolerance,

    /// What to do with a reading that cannot be parsed.
    pub on_invalid: InvalidReadingPolicy,

    /// Units of the raw readings (default °C and kW).
    pub units: ReadingUnits,
}

/// Handling of block readings that are not numeric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InvalidReadingPolicy {
    /// Fail the whole run on the first bad reading.
    #[default]
    Abort,

    /// Drop the block, log a warning, and record the error in the analysis.
    Skip,
}

/// Error returned when a policy name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized invalid-reading policy {0:?} (expected \"abort\" or \"skip\")")]
pub struct ParsePolicyError(String);

impl FromStr for InvalidReadingPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "skip" => Ok(Self::Skip),
            _ => Err(ParsePolicyError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_policy_names() {
        assert_eq!("abort".parse(), Ok(InvalidReadingPolicy::Abort));
        assert_eq!("Skip".parse(), Ok(InvalidReadingPolicy::Skip));
        assert!("ignore".parse::<InvalidReadingPolicy>().is_err());
    }
}
