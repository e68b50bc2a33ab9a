//! Configuration for schedule generation.

use chrono::{DateTime, Utc};
use pyo3::prelude::*;

use crate::logging::VERBOSITY_SILENT;

/// Options for a single generation run.
#[pyclass]
#[derive(Clone, Debug)]
pub struct GenerateConfig {
    /// Reference instant for truncation and horizon; `None` means the wall clock
    #[pyo3(get, set)]
    pub now: Option<DateTime<Utc>>,
    /// Logging verbosity (0 = silent, 3 = debug)
    #[pyo3(get, set)]
    pub verbosity: u8,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            now: None,
            verbosity: VERBOSITY_SILENT,
        }
    }
}

impl GenerateConfig {
    /// Config pinned to a fixed instant.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Some(now),
            ..Self::default()
        }
    }

    /// The configured instant, or the current time if none was given.
    pub fn resolve_now(&self) -> DateTime<Utc> {
        self.now.unwrap_or_else(Utc::now)
    }
}

#[pymethods]
impl GenerateConfig {
    #[new]
    #[pyo3(signature = (now=None, verbosity=None))]
    fn new(now: Option<DateTime<Utc>>, verbosity: Option<u8>) -> Self {
        let defaults = Self::default();
        Self {
            now,
            verbosity: verbosity.unwrap_or(defaults.verbosity),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "GenerateConfig(now={:?}, verbosity={})",
            self.now.map(|t| t.to_rfc3339()),
            self.verbosity
        )
    }
}
