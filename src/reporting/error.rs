use thiserror::Error;

use crate::parsing::ParseError;

/// Exit status for input data that fails a consistency check
pub const EXIT_INCONSISTENT_INPUT: i32 = 2;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Not all scaffolds to be checked against genetic map were successfully checked ({checked} of {expected})")]
    IncompleteScaffoldCheck { expected: usize, checked: usize },

    #[error("Cannot summarize an empty set of {0}")]
    EmptyUniverse(&'static str),
}

impl ReportError {
    /// Process exit status for this failure
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::IncompleteScaffoldCheck { .. } => EXIT_INCONSISTENT_INPUT,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let inconsistent = ReportError::IncompleteScaffoldCheck {
            expected: 10,
            checked: 9,
        };
        assert_eq!(inconsistent.exit_code(), 2);
        assert!(inconsistent.to_string().contains("9 of 10"));

        let io = ReportError::Io(std::io::Error::other("disk full"));
        assert_eq!(io.exit_code(), 1);
    }
}
