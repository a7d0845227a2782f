//! Cross-process determinism: the `solve_fixture` binary must print the
//! same lines regardless of working directory and environment.

use std::path::Path;
use std::process::Command;

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = env!("CARGO_BIN_EXE_solve_fixture");

    let mut command = Command::new(bin);
    command
        .current_dir(work_dir)
        .env_remove("LC_ALL")
        .env_remove("LANG")
        .env_remove("RUST_LOG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });
    assert!(
        output.status.success(),
        "solve_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_output_is_stable() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);

    assert!(baseline.contains("remaining-count.total_cost=29\n"));
    assert!(baseline.contains("remaining-moves.total_cost=29\n"));
    assert!(baseline.contains("remaining-count.graph_digest=sha256:"));
    assert!(baseline.contains("unbounded-capacity.path=starting state / "));

    let alt_cwd = std::env::temp_dir().to_string_lossy().to_string();
    assert_eq!(
        baseline,
        run_variant(&alt_cwd, &[]),
        "output differs when cwd changes from {root} to {alt_cwd}"
    );
    assert_eq!(
        baseline,
        run_variant(&root, &[("LC_ALL", "C"), ("LANG", "C")]),
        "output differs when LC_ALL=C LANG=C"
    );
    assert_eq!(
        baseline,
        run_variant(&root, &[("RUST_LOG", "trace"), ("TZ", "America/New_York")]),
        "output differs with logging and TZ overrides"
    );
}

#[test]
fn crossproc_matches_inproc() {
    use lantern_harness::config::RunConfig;
    use lantern_harness::runner::run;

    let report = run(&RunConfig::default()).unwrap();
    let digest = report.graph.digest().unwrap();
    let stdout = run_variant(&workspace_root(), &[]);
    assert!(
        stdout.contains(&format!("remaining-count.graph_digest={digest}\n")),
        "in-process digest {digest} missing from fixture output"
    );
    assert!(stdout.contains(&format!(
        "remaining-count.expansions={}\n",
        report.stats.expansions
    )));
}
