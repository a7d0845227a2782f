//! Solve one bridge-and-torch instance and print the path.
//!
//! Usage: `solve [--heuristic NAME] [--config FILE] [DURATION ...]`
//!
//! With no arguments, solves the classic five-member instance. Positional
//! durations override those from `--config`; `--heuristic` overrides the
//! configured heuristic. Set `RUST_LOG` for engine logs (default `warn`).

use std::path::PathBuf;
use std::process::ExitCode;

use lantern_harness::config::RunConfig;
use lantern_harness::render::render_report;
use lantern_harness::runner::run;
use lantern_search::heuristic::HeuristicKind;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: solve [--heuristic NAME] [--config FILE] [DURATION ...]";

#[derive(Debug, Default)]
struct Args {
    heuristic: Option<HeuristicKind>,
    config: Option<PathBuf>,
    durations: Vec<i64>,
}

fn parse_args(raw: impl IntoIterator<Item = String>) -> Result<Args, String> {
    let mut args = Args::default();
    let mut raw = raw.into_iter();
    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--heuristic" => {
                let name = raw.next().ok_or("--heuristic needs a value")?;
                args.heuristic = Some(name.parse().map_err(|e| format!("{e}"))?);
            }
            "--config" => {
                let path = raw.next().ok_or("--config needs a value")?;
                args.config = Some(PathBuf::from(path));
            }
            "-h" | "--help" => return Err(USAGE.to_string()),
            other => {
                let duration = other
                    .parse::<i64>()
                    .map_err(|_| format!("not a duration: {other:?}\n{USAGE}"))?;
                args.durations.push(duration);
            }
        }
    }
    Ok(args)
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::from(2);
        }
    };

    let mut config = match &args.config {
        Some(path) => match RunConfig::from_path(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::from(2);
            }
        },
        None => RunConfig::default(),
    };
    if let Some(heuristic) = args.heuristic {
        config.heuristic = heuristic;
    }
    if !args.durations.is_empty() {
        config.durations = args.durations;
    }

    match run(&config) {
        Ok(report) => {
            print!("{}", render_report(&report));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
