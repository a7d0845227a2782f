//! Binary that solves the classic instance under every heuristic and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `solve_fixture`
//!
//! Output: key=value lines, prefixed with the heuristic name:
//!   `remaining-count.total_cost=29`
//!   `remaining-count.graph_digest=sha256:...`

use lantern_harness::config::RunConfig;
use lantern_harness::runner::run;
use lantern_search::heuristic::HeuristicKind;

fn main() {
    for heuristic in HeuristicKind::ALL {
        let config = RunConfig {
            heuristic,
            ..RunConfig::default()
        };
        let report = run(&config).expect("classic instance has a solution");
        let digest = report.graph.digest().expect("graph serializes");

        println!("{heuristic}.total_cost={}", report.total_cost);
        println!("{heuristic}.moves={}", report.move_count());
        println!("{heuristic}.expansions={}", report.stats.expansions);
        println!("{heuristic}.explorations={}", report.stats.explorations);
        println!(
            "{heuristic}.duplicates_skipped={}",
            report.stats.duplicates_skipped
        );
        println!("{heuristic}.events={}", report.graph.events.len());
        println!("{heuristic}.graph_digest={digest}");
        let path: Vec<&str> = report
            .path
            .iter()
            .map(|e| e.move_description.as_str())
            .collect();
        println!("{heuristic}.path={}", path.join(" / "));
    }
}
