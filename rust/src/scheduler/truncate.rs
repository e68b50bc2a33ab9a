//! Dropping rotations that have already elapsed.

use chrono::{DateTime, Utc};

use crate::models::Rotation;

/// Drop rotations that have elapsed, keeping the active one.
///
/// Scans backward from the latest rotation for the first one that started
/// strictly before `now`; that is the active rotation. The result starts one
/// entry *before* it, so the rotation preceding the active one is kept too.
/// If nothing has started yet the whole list is kept, and a single rotation
/// is always kept.
pub fn truncate(rotations: &[Rotation], now: DateTime<Utc>) -> &[Rotation] {
    let mut keep_from = rotations.len().saturating_sub(1);
    while keep_from > 0 {
        if rotations[keep_from].start < now {
            keep_from -= 1;
            break;
        }
        keep_from -= 1;
    }
    &rotations[keep_from..]
}
