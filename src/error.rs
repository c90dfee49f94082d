//! Run-time errors.
//!
//! Admission problems are reported through [`crate::validation`]; this module
//! covers requests that cannot start a run at all.

use std::fmt;

/// A run request that was refused before any simulation happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    /// Round Robin without a positive time quantum. Carries what was given.
    InvalidTimeQuantum(Option<i64>),
    /// Policy name not recognized.
    UnknownPolicy(String),
}

impl fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTimeQuantum(Some(q)) => {
                write!(f, "invalid time quantum {q}: must be a positive tick count")
            }
            Self::InvalidTimeQuantum(None) => {
                f.write_str("round robin requires a positive time quantum")
            }
            Self::UnknownPolicy(name) => write!(f, "unknown scheduling policy '{name}'"),
        }
    }
}

impl std::error::Error for SchedulerError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            SchedulerError::InvalidTimeQuantum(Some(0)).to_string(),
            "invalid time quantum 0: must be a positive tick count"
        );
        assert!(SchedulerError::InvalidTimeQuantum(None)
            .to_string()
            .contains("requires"));
        assert!(SchedulerError::UnknownPolicy("LIFO".into())
            .to_string()
            .contains("LIFO"));
    }
}
