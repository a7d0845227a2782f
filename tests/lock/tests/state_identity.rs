//! Structural identity of configurations and candidate generation.

use lantern_harness::runner::initial_state;
use lantern_kernel::carrier::member::{MemberIdAllocator, Roster};
use lantern_kernel::carrier::state::{BridgeState, Side};
use lantern_kernel::operators::apply::apply;
use lantern_kernel::operators::crossing::{enumerate_crossings, Crossing};
use lantern_search::frontier::ClosedSet;

fn ids(state: &BridgeState, side: Side) -> Vec<u32> {
    let mut ids: Vec<u32> = state.bank(side).iter().map(|m| m.id().get()).collect();
    ids.sort_unstable();
    ids
}

#[test]
fn states_reached_by_different_paths_are_equal() {
    let root = initial_state(&[1, 2, 5, 10]).unwrap();
    let m = |n: usize| root.origin()[n].id();

    // (1,2) over, 1 back  vs  (2,1) over, 1 back: same banks, same cost.
    let a = apply(&apply(&root, Crossing::pair(m(0), m(1))).unwrap(), Crossing::single(m(0))).unwrap();
    let b = apply(&apply(&root, Crossing::pair(m(1), m(0))).unwrap(), Crossing::single(m(0))).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.key(), b.key());

    assert_ne!(a, root);
    assert_eq!(ids(&a, Side::Destination), vec![2]);

    let mut closed = ClosedSet::new();
    assert!(closed.insert(a.key()));
    assert!(!closed.insert(b.key()), "second path is a duplicate");
}

#[test]
fn same_banks_at_different_cost_are_one_configuration() {
    let root = initial_state(&[1, 2]).unwrap();
    let (one, two) = (root.origin()[0].id(), root.origin()[1].id());

    // 1 over and back (cost 2) vs 2 over and back (cost 4): both end on the root banks.
    let via_one = apply(&apply(&root, Crossing::single(one)).unwrap(), Crossing::single(one)).unwrap();
    let via_two = apply(&apply(&root, Crossing::single(two)).unwrap(), Crossing::single(two)).unwrap();
    assert_eq!(ids(&via_one, Side::Origin), ids(&via_two, Side::Origin));
    assert_eq!(via_one.accumulated_cost(), 2);
    assert_eq!(via_two.accumulated_cost(), 4);
    assert_eq!(via_one, via_two, "accumulated cost is not part of identity");
    assert_eq!(via_one, root, "a round trip returns to the root configuration");

    let mut closed = ClosedSet::new();
    assert!(closed.insert(root.key()));
    assert!(!closed.insert(via_one.key()));
    assert!(!closed.insert(via_two.key()));
}

#[test]
fn move_count_is_not_part_of_identity() {
    let root = initial_state(&[1, 2]).unwrap();
    let (fast, slow) = (root.origin()[0].id(), root.origin()[1].id());
    let round_trip = |state: &BridgeState, id| {
        apply(&apply(state, Crossing::single(id)).unwrap(), Crossing::single(id)).unwrap()
    };

    // slow over and back: cost 4 in two moves.
    let two_moves = round_trip(&root, slow);
    // fast over and back twice: cost 4 in four moves.
    let four_moves = round_trip(&round_trip(&root, fast), fast);

    assert_eq!(two_moves.move_count(), 2);
    assert_eq!(four_moves.move_count(), 4);
    assert_eq!(two_moves, four_moves);
}

#[test]
fn single_member_on_light_bank_yields_exactly_one_candidate() {
    let root = initial_state(&[3, 8]).unwrap();
    let first = root.origin()[0].id();
    let second = root.origin()[1].id();
    let after = apply(&root, Crossing::pair(first, second)).unwrap();
    // Both crossed; send 3 back so the origin holds one member with the light.
    let back = apply(&after, Crossing::single(first)).unwrap();
    let candidates = enumerate_crossings(&back);
    assert_eq!(candidates, vec![Crossing::single(first)]);
}

#[test]
fn candidates_are_row_major_pairs_over_light_bank() {
    let root = initial_state(&[1, 2, 5]).unwrap();
    let got: Vec<(u32, u32)> = enumerate_crossings(&root)
        .iter()
        .map(|c| (c.first().get(), c.second().get()))
        .collect();
    assert_eq!(
        got,
        vec![
            (1, 1), (1, 2), (1, 3),
            (2, 1), (2, 2), (2, 3),
            (3, 1), (3, 2), (3, 3),
        ]
    );
}

#[test]
fn allocators_are_independent_per_run() {
    let mut shared = MemberIdAllocator::new();
    let first = Roster::allocate(&mut shared, &[1, 2]).unwrap();
    let second = Roster::allocate(&mut shared, &[3]).unwrap();
    assert_eq!(second.members()[0].id().get(), 3, "one allocator keeps counting");
    assert_eq!(first.len(), 2);

    let fresh = initial_state(&[3]).unwrap();
    assert_eq!(fresh.origin()[0].id().get(), 1, "each run starts at 1");
}
