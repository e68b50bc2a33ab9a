//! Working state for a generation run.

use chrono::{DateTime, Duration, Utc};

use crate::error::ScheduleError;
use crate::models::Rotation;

use super::roster::Roster;

/// Private copy of everything a generation run advances.
///
/// Invariant: `start` is always where the next appended rotation begins, and
/// `roster.primary()` is who will be primary on it.
#[derive(Clone, Debug)]
pub struct GeneratorState {
    /// Start of the next rotation to append
    pub start: DateTime<Utc>,
    /// Length of every rotation
    pub rotation_length: Duration,
    /// Roster in round-robin order
    pub roster: Roster,
    /// Rotations generated or carried over so far
    pub rotations: Vec<Rotation>,
}

impl GeneratorState {
    pub fn new(
        start: DateTime<Utc>,
        rotation_length: Duration,
        roster: Roster,
        rotations: Vec<Rotation>,
    ) -> Self {
        Self {
            start,
            rotation_length,
            roster,
            rotations,
        }
    }

    /// Append one rotation at `start`, then step `start` and the roster forward.
    pub fn add_rotation(&mut self) -> Result<&Rotation, ScheduleError> {
        let next_start = self
            .start
            .checked_add_signed(self.rotation_length)
            .ok_or_else(|| ScheduleError::TimeOverflow(self.start.to_rfc3339()))?;

        self.rotations.push(Rotation::new(
            self.start,
            self.roster.primary(),
            self.roster.secondary(),
        ));
        self.start = next_start;
        self.roster = self.roster.advanced();

        Ok(&self.rotations[self.rotations.len() - 1])
    }

    /// Start of the latest rotation, if any.
    pub fn last_start(&self) -> Option<DateTime<Utc>> {
        self.rotations.last().map(|r| r.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_add_rotation_advances_state() {
        let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let roster = Roster::new(vec!["a".to_string(), "b".to_string()]).unwrap();
        let mut state = GeneratorState::new(t0, Duration::days(7), roster, Vec::new());

        let added = state.add_rotation().unwrap().clone();
        assert_eq!(added, Rotation::new(t0, "a", "b"));
        assert_eq!(state.start, t0 + Duration::days(7));
        assert_eq!(state.roster.primary(), "b");

        state.add_rotation().unwrap();
        assert_eq!(state.rotations[1], Rotation::new(t0 + Duration::days(7), "b", "a"));
        assert_eq!(state.last_start(), Some(t0 + Duration::days(7)));
    }

    #[test]
    fn test_add_rotation_reports_overflow() {
        let roster = Roster::new(vec!["a".to_string()]).unwrap();
        let mut state = GeneratorState::new(
            DateTime::<Utc>::MAX_UTC,
            Duration::days(1),
            roster,
            Vec::new(),
        );

        assert!(matches!(
            state.add_rotation(),
            Err(ScheduleError::TimeOverflow(_))
        ));
        assert!(state.rotations.is_empty());
    }
}
