//! Plain-text rendering of a [`RunReport`].
//!
//! ```text
//! Time elapsed: 29 Nodes expanded: 118 Nodes explored: 160 Search time: 0.004 sec
//!
//! ~~~~~~~~~~~~~~~~~~~~~~~~~~~ Path followed ~~~~~~~~~~~~~~~~~~~~~~~~~~~
//! starting state ~~~~~~~~~~~~ *1:1* *2:3* ... | Total time: 0 Moves: 0 | f: 5
//! ...
//! ```
//!
//! Each path line shows the destination bank, a separator, then the origin
//! bank, matching the left-to-right picture of the crossing.

use std::fmt::Write;

use lantern_kernel::carrier::member::Member;
use lantern_search::path::PathEntry;

use crate::runner::RunReport;

const RULE: &str = "~~~~~~~~~~~~~~~~~~~~~~~~~~~";
const BANK_SEPARATOR: &str = "~~~~~~~~~~~~";

/// The one-line summary: total cost, counters and search time in seconds.
#[must_use]
pub fn render_summary(report: &RunReport) -> String {
    format!(
        "Time elapsed: {} Nodes expanded: {} Nodes explored: {} Search time: {:.3} sec",
        report.total_cost,
        report.stats.expansions,
        report.stats.explorations,
        report.elapsed.as_secs_f64(),
    )
}

/// One path step.
#[must_use]
pub fn render_entry(entry: &PathEntry) -> String {
    format!(
        "{} {}{BANK_SEPARATOR}{}| Total time: {} Moves: {} | f: {}",
        entry.move_description,
        render_bank(&entry.destination),
        render_bank(&entry.origin),
        entry.accumulated_cost,
        entry.move_count,
        entry.f_cost,
    )
}

fn render_bank(members: &[Member]) -> String {
    members.iter().fold(String::new(), |mut out, m| {
        let _ = write!(out, "{m} ");
        out
    })
}

/// Summary, blank line, path header, one line per step, closing rule.
#[must_use]
pub fn render_report(report: &RunReport) -> String {
    let mut out = render_summary(report);
    out.push_str("\n\n");
    let _ = writeln!(out, "{RULE} Path followed {RULE}");
    for entry in &report.path {
        out.push_str(&render_entry(entry));
        out.push('\n');
    }
    let _ = writeln!(out, "{RULE}{RULE}");
    out
}
