use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CarpoolError {
    #[error("No input file given")]
    MissingArgument,

    #[error("Cannot read input file {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid scenario count on line {line}: {reason}")]
    MalformedCount { line: usize, reason: String },

    #[error("Invalid town header for case #{case} on line {line}: {reason}")]
    MalformedHeader {
        case: usize,
        line: usize,
        reason: String,
    },

    #[error("Invalid employee count for case #{case} on line {line}: {reason}")]
    MalformedEmployeeCount {
        case: usize,
        line: usize,
        reason: String,
    },

    #[error("Invalid employee #{employee} for case #{case} on line {line}: {reason}")]
    MalformedEmployee {
        case: usize,
        employee: usize,
        line: usize,
        reason: String,
    },

    #[error("Invalid value for {field} ({value:?}): {reason}")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The command line itself was wrong.
    Usage,
    /// The input file could not be opened or read.
    Source,
    /// The input file was read but does not follow the scenario format.
    Format,
}

impl CarpoolError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CarpoolError::MissingArgument | CarpoolError::InvalidConfig { .. } => {
                ErrorCategory::Usage
            }
            CarpoolError::SourceUnavailable { .. } => ErrorCategory::Source,
            CarpoolError::MalformedCount { .. }
            | CarpoolError::MalformedHeader { .. }
            | CarpoolError::MalformedEmployeeCount { .. }
            | CarpoolError::MalformedEmployee { .. } => ErrorCategory::Format,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Format => 1,
            ErrorCategory::Usage => 2,
            ErrorCategory::Source => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Usage => format!("Usage error: {}", self),
            ErrorCategory::Source => format!("Input unavailable: {}", self),
            ErrorCategory::Format => format!("Malformed input: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CarpoolError::MissingArgument => "Pass the path of the scenario file: carpool-planner <INPUT>",
            CarpoolError::InvalidConfig { .. } => "Check the command line arguments",
            CarpoolError::SourceUnavailable { .. } => {
                "Check that the file exists and is readable"
            }
            CarpoolError::MalformedCount { .. } => {
                "The first line must hold the number of scenarios"
            }
            CarpoolError::MalformedHeader { .. } => {
                "Each scenario starts with '<towns> <office town>' where 1 <= office town <= towns"
            }
            CarpoolError::MalformedEmployeeCount { .. } => {
                "The line after a scenario header must hold a positive employee count"
            }
            CarpoolError::MalformedEmployee { .. } => {
                "Each employee line is '<hometown> <capacity>' with 1 <= hometown <= towns and 0 <= capacity <= 6"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CarpoolError>;
