//! Rust implementation of the on-call rotation generator.
//!
//! Builds and extends a round-robin on-call schedule from a roster, a fixed
//! rotation length and a horizon. Usable as a Rust library or, built with
//! maturin, as the `rotagen.rust` Python module.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use chrono::{DateTime, Duration, Utc};
use pyo3::prelude::*;

mod config;
pub mod document;
pub mod duration;
mod error;
pub mod logging;
mod models;
pub mod scheduler;

pub use config::GenerateConfig;
pub use document::{regenerate_json, ScheduleDocument};
pub use duration::{format_duration, parse_duration, DurationError, DurationExpr};
pub use error::ScheduleError;
pub use models::{Rotation, Schedule};
pub use scheduler::{generate, num_rotations, truncate};

fn to_py_err(err: ScheduleError) -> PyErr {
    pyo3::exceptions::PyValueError::new_err(err.to_string())
}

/// Parse and validate a JSON schedule document.
///
/// # Raises
/// * ValueError if the document, a duration, or the configuration is invalid
#[pyfunction]
fn parse_schedule(text: &str) -> PyResult<Schedule> {
    Schedule::from_json(text).map_err(to_py_err)
}

/// Extend a schedule past `now + schedule_for`.
///
/// # Arguments
/// * `schedule` - Current schedule (not modified)
/// * `config` - Generation options; `now` defaults to the current time
///
/// # Returns
/// * A new Schedule with truncated and extended rotations
///
/// # Raises
/// * ValueError if the schedule is invalid
#[pyfunction]
#[pyo3(signature = (schedule, config=None))]
fn generate_schedule(schedule: &Schedule, config: Option<GenerateConfig>) -> PyResult<Schedule> {
    generate(schedule, &config.unwrap_or_default()).map_err(to_py_err)
}

/// Encode a schedule as a pretty-printed JSON document.
#[pyfunction]
fn schedule_to_json(schedule: &Schedule) -> PyResult<String> {
    schedule.to_json().map_err(to_py_err)
}

/// Decode a JSON document, extend it, and return the new document.
#[pyfunction]
#[pyo3(name = "regenerate_json", signature = (text, config=None))]
fn py_regenerate_json(text: &str, config: Option<GenerateConfig>) -> PyResult<String> {
    regenerate_json(text, &config.unwrap_or_default()).map_err(to_py_err)
}

/// Number of rotations of `rotation_length` needed to cover `start..end`.
#[pyfunction]
#[pyo3(name = "num_rotations")]
fn py_num_rotations(start: DateTime<Utc>, end: DateTime<Utc>, rotation_length: Duration) -> u64 {
    num_rotations(start, end, rotation_length)
}

/// Parse a duration expression such as "168h" or "1h30m".
///
/// # Raises
/// * ValueError if the expression does not parse
#[pyfunction]
#[pyo3(name = "parse_duration")]
fn py_parse_duration(text: &str) -> PyResult<Duration> {
    parse_duration(text).map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
}

/// The rotagen.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core data types
    m.add_class::<Rotation>()?;
    m.add_class::<Schedule>()?;

    // Config types
    m.add_class::<GenerateConfig>()?;

    // Document I/O
    m.add_function(wrap_pyfunction!(parse_schedule, m)?)?;
    m.add_function(wrap_pyfunction!(schedule_to_json, m)?)?;
    m.add_function(wrap_pyfunction!(py_regenerate_json, m)?)?;

    // Algorithms
    m.add_function(wrap_pyfunction!(generate_schedule, m)?)?;
    m.add_function(wrap_pyfunction!(py_num_rotations, m)?)?;
    m.add_function(wrap_pyfunction!(py_parse_duration, m)?)?;

    Ok(())
}
