//! `apply()`: apply a crossing to a `BridgeState`, producing the child state.
//!
//! Effects, in order:
//! 1. Movers are removed from the light-holding bank (remaining order kept)
//!    and appended to the other bank in crossing order.
//! 2. The light flips.
//! 3. `accumulated_cost` grows by the slowest mover's duration.
//! 4. `move_count` grows by one.
//!
//! The parent is never modified; the child owns fresh copies of both banks.

use crate::carrier::member::{Member, MemberId};
use crate::carrier::state::{BridgeState, Side};
use crate::operators::crossing::Crossing;

/// Typed failure for crossing application. Fail-closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyFailure {
    /// A mover is not on the bank holding the light.
    PreconditionNotMet { detail: String },
    /// The accumulated cost no longer fits in `i64`.
    CostOverflow,
}

impl std::fmt::Display for ApplyFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PreconditionNotMet { detail } => write!(f, "precondition not met: {detail}"),
            Self::CostOverflow => write!(f, "accumulated cost overflowed"),
        }
    }
}

impl std::error::Error for ApplyFailure {}

/// Apply `crossing` to `state`.
///
/// # Errors
///
/// Returns [`ApplyFailure::PreconditionNotMet`] if any mover is absent from
/// the light-holding bank, or [`ApplyFailure::CostOverflow`] if the new cost
/// would overflow.
pub fn apply(state: &BridgeState, crossing: Crossing) -> Result<BridgeState, ApplyFailure> {
    let from = state.light();
    let to = from.opposite();

    let mut leaving = state.bank(from).to_vec();
    let mut arriving = state.bank(to).to_vec();

    let mut step_cost = 0i64;
    for id in crossing.movers() {
        let mover = take_member(&mut leaving, id).ok_or_else(|| {
            ApplyFailure::PreconditionNotMet {
                detail: format!("member {id} is not on the {from} bank with the light"),
            }
        })?;
        step_cost = step_cost.max(mover.duration());
        arriving.push(mover);
    }

    let accumulated_cost = state
        .accumulated_cost()
        .checked_add(step_cost)
        .ok_or(ApplyFailure::CostOverflow)?;

    let (origin, destination) = match from {
        Side::Origin => (leaving, arriving),
        Side::Destination => (arriving, leaving),
    };

    Ok(BridgeState::from_parts(
        origin,
        destination,
        to,
        accumulated_cost,
        state.move_count() + 1,
    ))
}

fn take_member(bank: &mut Vec<Member>, id: MemberId) -> Option<Member> {
    let index = bank.iter().position(|m| m.id() == id)?;
    Some(bank.remove(index))
}
