//! Core data types for on-call schedules.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::GenerateConfig;
use crate::duration::DurationExpr;
use crate::error::ScheduleError;

/// One on-call shift.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Rotation {
    #[pyo3(get, set)]
    #[serde(alias = "start")]
    pub start: DateTime<Utc>,
    #[pyo3(get, set)]
    #[serde(alias = "primary")]
    pub primary: String,
    #[pyo3(get, set)]
    #[serde(alias = "secondary")]
    pub secondary: String,
}

impl Rotation {
    pub fn new(
        start: DateTime<Utc>,
        primary: impl Into<String>,
        secondary: impl Into<String>,
    ) -> Self {
        Self {
            start,
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }
}

/// `<RFC-3339 start> <primary> <secondary>`, one line per shift.
impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.start.to_rfc3339_opts(SecondsFormat::Secs, true),
            self.primary,
            self.secondary
        )
    }
}

#[pymethods]
impl Rotation {
    #[new]
    fn py_new(start: DateTime<Utc>, primary: String, secondary: String) -> Self {
        Self::new(start, primary, secondary)
    }

    fn __str__(&self) -> String {
        self.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "Rotation(start={}, primary={:?}, secondary={:?})",
            self.start.to_rfc3339_opts(SecondsFormat::Secs, true),
            self.primary,
            self.secondary
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self == other
    }
}

/// An on-call schedule plus the state needed to extend it.
///
/// `users` is the roster in round-robin order: its head is primary on the
/// next generated rotation and the following user is secondary. `start` is
/// where that next rotation begins. `rotations` may be edited by hand between
/// generations; edits are kept until the rotations fall out of the window.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schedule {
    #[pyo3(get, set)]
    pub users: Vec<String>,
    #[pyo3(get, set)]
    pub start: DateTime<Utc>,
    pub rotation_length: DurationExpr,
    pub schedule_for: DurationExpr,
    #[pyo3(get, set)]
    pub rotations: Vec<Rotation>,
}

impl Schedule {
    /// Build a schedule, rejecting an empty roster or a nonpositive rotation length.
    pub fn new(
        users: Vec<String>,
        start: DateTime<Utc>,
        rotation_length: DurationExpr,
        schedule_for: DurationExpr,
        rotations: Vec<Rotation>,
    ) -> Result<Self, ScheduleError> {
        let schedule = Self {
            users,
            start,
            rotation_length,
            schedule_for,
            rotations,
        };
        schedule.validate()?;
        Ok(schedule)
    }

    /// Check the roster is non-empty and the rotation length is positive.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.users.is_empty() {
            return Err(ScheduleError::NoUsers);
        }
        if self.rotation_length.value() <= Duration::zero() {
            return Err(ScheduleError::NonPositiveRotationLength(
                self.rotation_length.to_string(),
            ));
        }
        Ok(())
    }

    /// Extend this schedule past `now + schedule_for`. See [`crate::scheduler::generate`].
    pub fn generate(&self, config: &GenerateConfig) -> Result<Schedule, ScheduleError> {
        crate::scheduler::generate(self, config)
    }
}

#[pymethods]
impl Schedule {
    #[new]
    #[pyo3(signature = (users, start, rotation_length, schedule_for, rotations=None))]
    fn py_new(
        users: Vec<String>,
        start: DateTime<Utc>,
        rotation_length: Duration,
        schedule_for: Duration,
        rotations: Option<Vec<Rotation>>,
    ) -> PyResult<Self> {
        Self::new(
            users,
            start,
            rotation_length.into(),
            schedule_for.into(),
            rotations.unwrap_or_default(),
        )
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
    }

    #[getter(rotation_length)]
    fn py_rotation_length(&self) -> Duration {
        self.rotation_length.value()
    }

    #[setter(rotation_length)]
    fn py_set_rotation_length(&mut self, value: Duration) {
        self.rotation_length = value.into();
    }

    #[getter(schedule_for)]
    fn py_schedule_for(&self) -> Duration {
        self.schedule_for.value()
    }

    #[setter(schedule_for)]
    fn py_set_schedule_for(&mut self, value: Duration) {
        self.schedule_for = value.into();
    }

    #[pyo3(name = "validate")]
    fn py_validate(&self) -> PyResult<()> {
        self.validate()
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        format!(
            "Schedule(users={:?}, start={}, rotation_length={:?}, schedule_for={:?}, rotations={})",
            self.users,
            self.start.to_rfc3339_opts(SecondsFormat::Secs, true),
            self.rotation_length.as_str(),
            self.schedule_for.as_str(),
            self.rotations.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_schedule(users: &[&str], rotation_length: &str) -> Result<Schedule, ScheduleError> {
        Schedule::new(
            users.iter().map(|u| u.to_string()).collect(),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            DurationExpr::parse(rotation_length).unwrap(),
            DurationExpr::parse("72h").unwrap(),
            vec![],
        )
    }

    #[test]
    fn test_rotation_renders_as_log_line() {
        let rotation = Rotation::new(
            Utc.with_ymd_and_hms(2024, 1, 8, 9, 30, 0).unwrap(),
            "alice",
            "bob",
        );
        assert_eq!(rotation.to_string(), "2024-01-08T09:30:00Z alice bob");
    }

    #[test]
    fn test_valid_schedule() {
        let schedule = make_schedule(&["alice", "bob"], "24h").unwrap();
        assert_eq!(schedule.users, vec!["alice", "bob"]);
        assert_eq!(schedule.rotation_length.value(), Duration::days(1));
    }

    #[test]
    fn test_duplicate_users_allowed() {
        assert!(make_schedule(&["alice", "alice", "bob"], "24h").is_ok());
    }

    #[test]
    fn test_empty_roster_rejected() {
        let result = make_schedule(&[], "24h");
        assert!(matches!(result, Err(ScheduleError::NoUsers)));
    }

    #[test]
    fn test_nonpositive_rotation_length_rejected() {
        let zero = make_schedule(&["alice"], "0s");
        assert!(matches!(
            zero,
            Err(ScheduleError::NonPositiveRotationLength(ref got)) if got == "0s"
        ));

        let negative = make_schedule(&["alice"], "-24h");
        assert!(matches!(
            negative,
            Err(ScheduleError::NonPositiveRotationLength(_))
        ));
    }

    #[test]
    fn test_validate_catches_mutation_after_construction() {
        let mut schedule = make_schedule(&["alice"], "24h").unwrap();
        schedule.users.clear();
        assert!(matches!(schedule.validate(), Err(ScheduleError::NoUsers)));
    }
}
