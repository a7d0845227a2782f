//! Exhaustion and root-goal semantics, driven through restricted worlds.

use lantern_harness::runner::initial_state;
use lantern_search::error::SearchError;
use lantern_search::graph::{ExploreOutcome, SearchStats, TerminationReason};
use lantern_search::heuristic::HeuristicKind;
use lantern_search::policy::SearchPolicy;
use lantern_search::search::{search, SearchOutcome};
use lock_tests::worlds::{AnyStateIsGoal, OneWayBridge};

#[test]
fn exhausted_search_reports_no_solution_and_zero_counters() {
    for heuristic in HeuristicKind::ALL {
        let root = initial_state(&[1, 3, 6, 8, 12]).unwrap();
        let result = search(root, &OneWayBridge, &SearchPolicy::with_heuristic(heuristic)).unwrap();

        assert!(matches!(result.outcome(), SearchOutcome::Exhausted));
        assert_eq!(
            result.graph.metadata.termination_reason,
            TerminationReason::FrontierExhausted
        );
        assert_eq!(result.stats, SearchStats::default(), "{heuristic}");
        assert_eq!(result.graph.metadata.stats, SearchStats::default());
        assert_eq!(result.solution().unwrap_err(), SearchError::UnreachableGoal);
    }
}

#[test]
fn exhausted_search_still_records_every_pop() {
    let root = initial_state(&[1, 2, 5]).unwrap();
    let result = search(root, &OneWayBridge, &SearchPolicy::default()).unwrap();

    // Root plus its nine children, each popped once.
    assert_eq!(result.nodes.len(), 10);
    assert_eq!(result.graph.events.len(), 10);
    assert!(result
        .graph
        .events
        .iter()
        .all(|e| e.outcome != ExploreOutcome::Goal));
    let skipped = result
        .graph
        .events
        .iter()
        .filter(|e| e.outcome == ExploreOutcome::DuplicateSkipped)
        .count();
    // (1,2)/(2,1), (1,3)/(3,1) and (2,3)/(3,2) land on the same configuration.
    assert_eq!(skipped, 3);
}

#[test]
fn root_goal_returns_immediately_with_zero_counters() {
    let root = initial_state(&[1, 3, 6]).unwrap();
    let result = search(root, &AnyStateIsGoal, &SearchPolicy::default()).unwrap();

    assert_eq!(result.goal_node_id, Some(0));
    assert_eq!(result.total_cost(), Some(0));
    assert_eq!(result.stats.expansions, 0);
    assert_eq!(result.stats.explorations, 0);
    assert_eq!(result.nodes.len(), 1, "no children are created");

    let path = result.solution().unwrap();
    assert_eq!(path.len(), 1);
    assert_eq!(path[0].move_description, "starting state");
}
