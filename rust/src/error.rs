//! Error type shared by schedule construction and generation.

use thiserror::Error;

use crate::duration::DurationError;

/// Errors that can occur while building or generating a schedule.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("error parsing schedule: {0}")]
    Document(#[from] serde_json::Error),
    #[error("error parsing {field}: {source}")]
    Duration {
        field: &'static str,
        #[source]
        source: DurationError,
    },
    #[error("must provide at least 1 user")]
    NoUsers,
    #[error("cannot have nonpositive RotationLength (got {0})")]
    NonPositiveRotationLength(String),
    #[error("rotation time out of range after {0}")]
    TimeOverflow(String),
}

impl ScheduleError {
    pub(crate) fn duration(field: &'static str, source: DurationError) -> Self {
        ScheduleError::Duration { field, source }
    }
}
