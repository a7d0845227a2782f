//! Crossings: the moves available from a state.
//!
//! Enumeration is the plain ordered-pair product over the bank holding the
//! light, diagonal included. `(a, b)` and `(b, a)` are both produced even
//! though they describe the same physical move; duplicate configurations
//! are collapsed later by the search's closed set, not here.

use crate::carrier::member::MemberId;
use crate::carrier::state::{BridgeState, Side};

/// One or two members crossing together with the light.
///
/// `first == second` encodes a single mover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Crossing {
    first: MemberId,
    second: MemberId,
}

impl Crossing {
    #[must_use]
    pub fn single(id: MemberId) -> Self {
        Self {
            first: id,
            second: id,
        }
    }

    #[must_use]
    pub fn pair(first: MemberId, second: MemberId) -> Self {
        Self { first, second }
    }

    #[must_use]
    pub fn first(self) -> MemberId {
        self.first
    }

    #[must_use]
    pub fn second(self) -> MemberId {
        self.second
    }

    #[must_use]
    pub fn is_single(self) -> bool {
        self.first == self.second
    }

    /// Distinct movers in crossing order.
    #[must_use]
    pub fn movers(self) -> Vec<MemberId> {
        if self.is_single() {
            vec![self.first]
        } else {
            vec![self.first, self.second]
        }
    }
}

/// Every ordered pair `(i, j)` over the light-holding bank, row-major.
///
/// A bank of `n` members yields `n * n` crossings; a bank of one yields
/// exactly one single-mover crossing.
#[must_use]
pub fn enumerate_crossings(state: &BridgeState) -> Vec<Crossing> {
    let bank = state.bank(state.light());
    let mut out = Vec::with_capacity(bank.len() * bank.len());
    for a in bank {
        for b in bank {
            out.push(Crossing::pair(a.id(), b.id()));
        }
    }
    out
}

/// Human-readable label for a crossing headed to `toward`.
#[must_use]
pub fn describe(crossing: Crossing, toward: Side) -> String {
    if crossing.is_single() {
        format!("member {} crossed to {toward}", crossing.first)
    } else {
        format!(
            "members {} & {} crossed to {toward}",
            crossing.first, crossing.second
        )
    }
}
