//! Session duration aggregation.

use crate::catalog::ExerciseParameters;

/// Total planned session time in seconds:
/// warm-up, plus one work phase per set, plus one rest between each pair
/// of consecutive sets.
///
/// This is also the value recorded to history when a session completes.
/// It is computed from the static parameters, never from wall-clock time,
/// so pausing a session does not change what gets recorded.
///
/// Uses saturating arithmetic to prevent overflow with large values.
pub fn planned_total_secs(params: &ExerciseParameters) -> u64 {
    let work = params.work_secs.saturating_mul(u64::from(params.set_count));
    let rest = params
        .rest_secs
        .saturating_mul(u64::from(params.set_count.saturating_sub(1)));
    params.warmup_secs.saturating_add(work).saturating_add(rest)
}
