//! Horizon sizing.

use chrono::{DateTime, Duration, Utc};

use crate::duration::total_nanos;

/// Number of `rotation_length` rotations needed to cover `start..end`, rounding up.
///
/// Returns 0 when `end` is not after `start`, or when `rotation_length` is
/// not positive.
pub fn num_rotations(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    rotation_length: Duration,
) -> u64 {
    let span = total_nanos(end - start);
    let length = total_nanos(rotation_length);
    if span <= 0 || length <= 0 {
        return 0;
    }

    let mut count = span / length;
    if span % length > 0 {
        count += 1;
    }
    u64::try_from(count).unwrap_or(u64::MAX)
}
