//! Structural checks over a reconstructed solution path.

use std::collections::BTreeSet;

use lantern_kernel::carrier::state::Side;
use lantern_search::path::PathEntry;

/// Check every invariant a solution path must hold.
///
/// - the path is non-empty and starts at the root (no moves, no cost)
/// - at every step the banks are disjoint and together hold `member_count`
/// - the light alternates sides on every step
/// - only the root lacks a crossing, and each crossing's movers end up on
///   the bank the light moved to
/// - cost grows by at least `min_duration` per step
/// - the final entry has an empty origin bank
/// - the path length is the goal's move count plus one
///
/// # Errors
///
/// Returns a description of the first violated invariant.
pub fn check_solution_path(
    path: &[PathEntry],
    member_count: usize,
    min_duration: i64,
) -> Result<(), String> {
    let (first, last) = match (path.first(), path.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err("empty path".into()),
    };
    if first.move_count != 0 || first.accumulated_cost != 0 {
        return Err(format!(
            "path does not start at the root: moves={} cost={}",
            first.move_count, first.accumulated_cost
        ));
    }
    if path.len() != last.move_count as usize + 1 {
        return Err(format!(
            "path length {} != goal moves {} + 1",
            path.len(),
            last.move_count
        ));
    }
    if !last.origin.is_empty() {
        return Err(format!("goal leaves {} on origin", last.origin.len()));
    }

    for (i, entry) in path.iter().enumerate() {
        let origin: BTreeSet<_> = entry.origin.iter().map(|m| m.id()).collect();
        let destination: BTreeSet<_> = entry.destination.iter().map(|m| m.id()).collect();
        if !origin.is_disjoint(&destination) {
            return Err(format!("step {i}: a member is on both banks"));
        }
        if origin.len() + destination.len() != member_count {
            return Err(format!(
                "step {i}: banks hold {} members, expected {member_count}",
                origin.len() + destination.len()
            ));
        }
    }

    if first.crossing.is_some() {
        return Err("root carries a crossing".into());
    }

    for (i, pair) in path.windows(2).enumerate() {
        let (prev, next) = (&pair[0], &pair[1]);
        let Some(crossing) = next.crossing else {
            return Err(format!("step {}: no crossing recorded", i + 1));
        };
        let landed = match next.light {
            Side::Origin => &next.origin,
            Side::Destination => &next.destination,
        };
        for mover in crossing.movers() {
            if !landed.iter().any(|m| m.id() == mover) {
                return Err(format!(
                    "step {}: mover {mover} is not on the {} bank",
                    i + 1,
                    next.light
                ));
            }
        }
        if prev.light == next.light {
            return Err(format!("step {}: light did not cross", i + 1));
        }
        if next.move_count != prev.move_count + 1 {
            return Err(format!("step {}: move count did not advance by one", i + 1));
        }
        if next.accumulated_cost - prev.accumulated_cost < min_duration {
            return Err(format!(
                "step {}: cost grew by {}, less than {min_duration}",
                i + 1,
                next.accumulated_cost - prev.accumulated_cost
            ));
        }
    }

    Ok(())
}
