//! Schedule generation.

use crate::config::GenerateConfig;
use crate::error::ScheduleError;
use crate::models::Schedule;
use crate::{log_changes, log_checks, log_debug};

use super::horizon::num_rotations;
use super::roster::Roster;
use super::state::GeneratorState;
use super::truncate::truncate;

/// Extend a schedule so it covers `now + schedule_for`.
///
/// This algorithm:
/// 1. Seeds one rotation at `schedule.start` if there are no rotations yet,
///    otherwise resumes right after the last existing rotation
/// 2. Drops elapsed rotations, keeping the active one and the one before it
/// 3. Appends rotations, advancing the roster round-robin, until the last
///    rotation starts at or after `now + schedule_for`
///
/// Existing rotations are never rewritten, so hand edits survive until they
/// are truncated. The input schedule is not modified.
///
/// # Returns
/// * `Ok(Schedule)` with the extended rotations, the advanced roster and the
///   start of the next rotation
/// * `Err(ScheduleError)` if the schedule is invalid or a rotation start
///   would fall outside the representable time range
pub fn generate(schedule: &Schedule, config: &GenerateConfig) -> Result<Schedule, ScheduleError> {
    schedule.validate()?;

    let verbosity = config.verbosity;
    let rotation_length = schedule.rotation_length.value();
    let roster = Roster::new(schedule.users.clone()).ok_or(ScheduleError::NoUsers)?;

    let mut state = match schedule.rotations.last() {
        None => {
            log_debug!(verbosity, "No rotations yet, seeding at {}", schedule.start);
            let mut state =
                GeneratorState::new(schedule.start, rotation_length, roster, Vec::new());
            let seeded = state.add_rotation()?;
            log_changes!(verbosity, "Added rotation {}", seeded);
            state
        }
        Some(last) => {
            let resume_at = last
                .start
                .checked_add_signed(rotation_length)
                .ok_or_else(|| ScheduleError::TimeOverflow(last.start.to_rfc3339()))?;
            log_debug!(
                verbosity,
                "Resuming after {} existing rotation(s) at {}",
                schedule.rotations.len(),
                resume_at
            );
            GeneratorState::new(
                resume_at,
                rotation_length,
                roster,
                schedule.rotations.clone(),
            )
        }
    };

    let now = config.resolve_now();

    // Truncate elapsed rotations
    let kept = truncate(&state.rotations, now).len();
    let dropped = state.rotations.len() - kept;
    if dropped > 0 {
        for rotation in state.rotations.drain(..dropped) {
            log_checks!(verbosity, "  Dropped elapsed rotation {}", rotation);
        }
        log_changes!(
            verbosity,
            "Truncated {} elapsed rotation(s) before {}",
            dropped,
            now
        );
    }

    // Extend to the horizon
    let horizon_end = now
        .checked_add_signed(schedule.schedule_for.value())
        .ok_or_else(|| ScheduleError::TimeOverflow(now.to_rfc3339()))?;
    log_debug!(
        verbosity,
        "Horizon ends {} ({} rotation(s) from {})",
        horizon_end,
        num_rotations(state.start, horizon_end, rotation_length),
        state.start
    );
    while state.last_start().map_or(true, |last| horizon_end > last) {
        let added = state.add_rotation()?;
        log_changes!(verbosity, "Added rotation {}", added);
    }

    let GeneratorState {
        start,
        roster,
        rotations,
        ..
    } = state;

    Ok(Schedule {
        users: roster.into_users(),
        start,
        rotation_length: schedule.rotation_length.clone(),
        schedule_for: schedule.schedule_for.clone(),
        rotations,
    })
}
