//! Error types for grouping runs and roster ingestion

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// A grouping request that cannot be carried out.
///
/// Every variant names the precondition that failed, so callers can tell the
/// user exactly what to fix.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("the roster is empty; add at least one student")]
    EmptyRoster,
    #[error("group count or size must be positive, got {0}")]
    NonPositiveValue(i64),
    #[error("no groups to fill")]
    NoGroups,
    #[error("{groups} groups requested for only {students} students")]
    MoreGroupsThanStudents { groups: usize, students: usize },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("line {line}: student name is empty")]
    EmptyName { line: usize },
    #[error("line {line}: unrecognised gender {value:?}")]
    InvalidGender { line: usize, value: String },
    #[error("line {line}: unrecognised proficiency {value:?}")]
    InvalidProficiency { line: usize, value: String },
    #[error("no student names found")]
    NoStudents,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Roster error: {0}")]
    Roster(#[from] RosterError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config file error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
