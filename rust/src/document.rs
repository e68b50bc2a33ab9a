//! JSON schedule documents.
//!
//! A document is what gets committed and diffed between generations:
//!
//! ```json
//! {
//!   "Users": ["alice", "bob"],
//!   "Start": "2024-01-01T00:00:00Z",
//!   "RotationLength": "168h",
//!   "ScheduleFor": "720h",
//!   "Rotations": [
//!     {"Start": "2024-01-01T00:00:00Z", "Primary": "alice", "Secondary": "bob"}
//!   ]
//! }
//! ```
//!
//! Durations are kept as written so that regenerating a document only changes
//! the fields generation actually touches.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::GenerateConfig;
use crate::duration::DurationExpr;
use crate::error::ScheduleError;
use crate::models::{Rotation, Schedule};

/// Serialized form of a [`Schedule`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScheduleDocument {
    #[serde(alias = "users")]
    pub users: Vec<String>,
    #[serde(alias = "start")]
    pub start: DateTime<Utc>,
    #[serde(alias = "rotationLength", alias = "rotation_length")]
    pub rotation_length: String,
    #[serde(alias = "scheduleFor", alias = "schedule_for")]
    pub schedule_for: String,
    #[serde(alias = "rotations", default, deserialize_with = "null_as_empty")]
    pub rotations: Vec<Rotation>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Rotation>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<Rotation>>::deserialize(deserializer)?.unwrap_or_default())
}

impl TryFrom<ScheduleDocument> for Schedule {
    type Error = ScheduleError;

    fn try_from(doc: ScheduleDocument) -> Result<Self, Self::Error> {
        let rotation_length = DurationExpr::parse(&doc.rotation_length)
            .map_err(|e| ScheduleError::duration("RotationLength", e))?;
        let schedule_for = DurationExpr::parse(&doc.schedule_for)
            .map_err(|e| ScheduleError::duration("ScheduleFor", e))?;
        Schedule::new(
            doc.users,
            doc.start,
            rotation_length,
            schedule_for,
            doc.rotations,
        )
    }
}

impl From<&Schedule> for ScheduleDocument {
    fn from(schedule: &Schedule) -> Self {
        Self {
            users: schedule.users.clone(),
            start: schedule.start,
            rotation_length: schedule.rotation_length.as_str().to_string(),
            schedule_for: schedule.schedule_for.as_str().to_string(),
            rotations: schedule.rotations.clone(),
        }
    }
}

impl Schedule {
    /// Decode and validate a schedule document.
    pub fn from_json(text: &str) -> Result<Self, ScheduleError> {
        let doc: ScheduleDocument = serde_json::from_str(text)?;
        Schedule::try_from(doc)
    }

    /// Encode as a pretty-printed document.
    pub fn to_json(&self) -> Result<String, ScheduleError> {
        Ok(serde_json::to_string_pretty(&ScheduleDocument::from(self))?)
    }
}

/// Decode a document, extend it, and encode the result.
pub fn regenerate_json(text: &str, config: &GenerateConfig) -> Result<String, ScheduleError> {
    Schedule::from_json(text)?.generate(config)?.to_json()
}
