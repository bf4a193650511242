//! Day allocation
//!
//! Splits a trip's duration across an ordered list of destinations in
//! proportion to each destination's ideal stay. Every destination but the last
//! gets its proportional share, capped so that the destinations after it can
//! still have one day each; the last destination absorbs whatever remains.
//!
//! When `duration >= weights.len()` the result always sums to `duration` and
//! every entry is at least 1. With fewer days than destinations the one-day
//! floor still applies, so the sum overshoots `duration`; callers decide what
//! to do about that before calling in.

/// Allocate `duration` days across destinations with the given ideal weights.
pub fn allocate_days(duration: u32, weights: &[u32]) -> Vec<u32> {
    let total_recommended: u32 = weights.iter().sum();
    let count = weights.len();
    let mut remaining = duration as i64;
    let mut allocation = Vec::with_capacity(count);

    for (index, &weight) in weights.iter().enumerate() {
        if index + 1 == count {
            allocation.push(remaining.max(1) as u32);
            break;
        }

        let proportional = proportional_days(weight, total_recommended, duration).max(1);
        let reserved_for_rest = (count - index - 1) as i64;
        let assigned = proportional.min(remaining - reserved_for_rest).max(1);

        allocation.push(assigned as u32);
        remaining -= assigned;
    }

    allocation
}

fn proportional_days(weight: u32, total_recommended: u32, duration: u32) -> i64 {
    if total_recommended == 0 {
        return 0;
    }
    let share = weight as f64 / total_recommended as f64 * duration as f64;
    // Shares are never negative, so round() matches round-half-up here
    share.round() as i64
}
