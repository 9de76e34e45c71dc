//! Monotonic millisecond stamps for time-derived record ids.

use jiff::Timestamp;

/// Produce a millisecond stamp that never repeats for one caller.
///
/// Raw wall-clock milliseconds can collide when two records are created in
/// the same millisecond; the caller's previous stamp is used as a floor.
pub(crate) fn next_millis(last: &mut i64) -> i64 {
    let now = Timestamp::now().as_millisecond();
    let stamp = now.max(*last + 1);
    *last = stamp;

    stamp
}
