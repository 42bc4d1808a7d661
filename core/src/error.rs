use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned by the validator, the meal store and the reporter.
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error(
        "Invalid date '{0}'. Use format YYYY-MM-DD with a real calendar date (e.g., 2025-07-21)"
    )]
    InvalidFormat(String),

    #[error("Date {date} cannot be in the past (today is {today})")]
    PastDate { date: NaiveDate, today: NaiveDate },

    #[error("Please enter at least one valid ingredient")]
    EmptyIngredientList,

    #[error("Meal name cannot be empty")]
    EmptyName,

    #[error("No ingredients to export")]
    EmptyReport,

    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read ingredient report: {0}")]
    Csv(#[from] csv::Error),
}

impl PlannerError {
    /// True for errors caused by user input that the shell recovers from.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidFormat(_)
                | Self::PastDate { .. }
                | Self::EmptyIngredientList
                | Self::EmptyName
        )
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
