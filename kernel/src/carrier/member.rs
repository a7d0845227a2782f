//! Crossing members and the run-scoped identifier allocator.
//!
//! A [`Member`] is an immutable `(id, duration)` pair. Identity is the id
//! alone: equality, ordering and hashing never look at the duration.
//!
//! Ids come from a [`MemberIdAllocator`] owned by the caller's run, never
//! from process-global state. Two runs that each build their own allocator
//! see identical ids for identical inputs.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Typed failure for member and roster construction. Fail-closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarrierError {
    /// A crossing duration was zero or negative.
    NonPositiveDuration { duration: i64 },
    /// A roster was requested with no members.
    EmptyRoster,
    /// The allocator ran out of ids.
    IdSpaceExhausted,
}

impl std::fmt::Display for CarrierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveDuration { duration } => {
                write!(f, "crossing duration must be positive, got {duration}")
            }
            Self::EmptyRoster => write!(f, "member set must not be empty"),
            Self::IdSpaceExhausted => write!(f, "member id space exhausted"),
        }
    }
}

impl std::error::Error for CarrierError {}

/// Opaque member identifier. The first id handed out by a fresh allocator is 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemberId(u32);

impl MemberId {
    /// Raw id value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A member who has to cross, with a positive crossing duration.
///
/// `Clone` yields an independent value with the same id and duration, so
/// sibling states never share bank storage.
#[derive(Debug, Clone)]
pub struct Member {
    id: MemberId,
    duration: i64,
}

impl Member {
    #[must_use]
    pub fn id(&self) -> MemberId {
        self.id
    }

    /// Time this member needs to cross (always `> 0`).
    #[must_use]
    pub fn duration(&self) -> i64 {
        self.duration
    }
}

impl PartialEq for Member {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Member {}

impl PartialOrd for Member {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Member {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl Hash for Member {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Member {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "*{}:{}*", self.id, self.duration)
    }
}

/// Monotonic id source for one run.
#[derive(Debug, Clone)]
pub struct MemberIdAllocator {
    next: u32,
}

impl MemberIdAllocator {
    /// First id handed out by a fresh allocator.
    pub const FIRST_ID: u32 = 1;

    #[must_use]
    pub fn new() -> Self {
        Self {
            next: Self::FIRST_ID,
        }
    }

    /// The id the next successful [`MemberIdAllocator::member`] call will use.
    #[must_use]
    pub fn peek_next(&self) -> MemberId {
        MemberId(self.next)
    }

    /// Construct a member, consuming one id.
    ///
    /// # Errors
    ///
    /// Returns [`CarrierError::NonPositiveDuration`] if `duration <= 0` (no id
    /// is consumed), or [`CarrierError::IdSpaceExhausted`] on id overflow.
    pub fn member(&mut self, duration: i64) -> Result<Member, CarrierError> {
        if duration <= 0 {
            return Err(CarrierError::NonPositiveDuration { duration });
        }
        let id = MemberId(self.next);
        self.next = self
            .next
            .checked_add(1)
            .ok_or(CarrierError::IdSpaceExhausted)?;
        Ok(Member { id, duration })
    }
}

impl Default for MemberIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// A validated, non-empty member set in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    members: Vec<Member>,
}

impl Roster {
    /// Build a roster with a fresh allocator (ids start at 1).
    ///
    /// # Errors
    ///
    /// See [`Roster::allocate`].
    pub fn from_durations(durations: &[i64]) -> Result<Self, CarrierError> {
        Self::allocate(&mut MemberIdAllocator::new(), durations)
    }

    /// Build a roster drawing ids from `ids`.
    ///
    /// Every duration is validated before any id is consumed, so a rejected
    /// input leaves the allocator untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CarrierError::EmptyRoster`] for an empty slice and
    /// [`CarrierError::NonPositiveDuration`] for the first duration `<= 0`.
    pub fn allocate(ids: &mut MemberIdAllocator, durations: &[i64]) -> Result<Self, CarrierError> {
        if durations.is_empty() {
            return Err(CarrierError::EmptyRoster);
        }
        if let Some(&duration) = durations.iter().find(|&&d| d <= 0) {
            return Err(CarrierError::NonPositiveDuration { duration });
        }
        let members = durations
            .iter()
            .map(|&d| ids.member(d))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { members })
    }

    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always `false`; construction rejects empty input.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
