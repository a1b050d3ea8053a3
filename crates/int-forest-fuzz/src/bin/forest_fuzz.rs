//! `forest-fuzz`: differential fuzzing of the int-forest sets against `BTreeSet`.
//!
//! Usage:
//!   forest-fuzz [--strategy llrb|splay|top-down-splay] [--all] [--seed N]
//!               [--tasks N] [--task-size N] [--key-space K] [--check]
//!               [--no-dump] [--json]
//!
//! Exits with status 1 on the first divergence or broken invariant.

use int_forest_fuzz::{init_tracing, run, Args, FuzzReport, USAGE};

fn main() {
    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}\n\n{USAGE}");
            std::process::exit(2);
        }
    };
    if args.help {
        println!("{USAGE}");
        return;
    }

    init_tracing();

    let mut reports = Vec::new();
    for config in args.configs() {
        match run(&config) {
            Ok(report) => {
                if !args.json {
                    println!("{}", summary(&report));
                }
                reports.push(report);
            }
            Err(e) => {
                eprintln!("{e}");
                if let Some(dump) = e.dump() {
                    eprintln!("{dump}");
                }
                std::process::exit(1);
            }
        }
    }

    if args.json {
        match serde_json::to_string_pretty(&reports) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}

fn summary(report: &FuzzReport) -> String {
    format!(
        "{}: ok, seed {}, {} operations ({} inserts), {} lookups ({} hits), final size {}, {} nodes allocated, {} ms",
        report.strategy,
        report.seed,
        report.operations,
        report.inserts,
        report.queries,
        report.hits,
        report.final_size,
        report.allocated,
        report.elapsed_ms,
    )
}
