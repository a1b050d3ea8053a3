//! Differential driver: mirrors random inserts and erases into a set under
//! test and a `BTreeSet`, and compares a random lookup after every step.

use std::collections::BTreeSet;
use std::time::Instant;

use int_forest::OrderedSet;
use serde::Serialize;
use tracing::{debug, error, info};

use crate::config::FuzzConfig;
use crate::error::FuzzError;
use crate::fuzzer::Fuzzer;

/// Summary of a run that matched the reference from start to finish.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FuzzReport {
    pub strategy: String,
    pub seed: u64,
    /// Inserts plus erases applied.
    pub operations: u64,
    pub inserts: u64,
    pub queries: u64,
    /// Lookups that found their value.
    pub hits: u64,
    pub final_size: usize,
    /// Arena slots in use at the end, reachable or not.
    pub allocated: usize,
    pub elapsed_ms: u128,
}

/// Runs `config` against a fresh set of `config.strategy`.
pub fn run(config: &FuzzConfig) -> Result<FuzzReport, FuzzError> {
    let mut set = config.strategy.build();
    run_against(set.as_mut(), config)
}

/// Runs `config` against `set`, which should start empty.
///
/// Stops at the first lookup whose answer differs from the reference set.
pub fn run_against(set: &mut dyn OrderedSet, config: &FuzzConfig) -> Result<FuzzReport, FuzzError> {
    let mut fuzzer = Fuzzer::new(config.seed);
    let strategy = set.strategy().to_string();
    let seed = fuzzer.seed;
    debug!(?config, seed, "starting differential run");

    let mut reference = BTreeSet::new();
    let mut report = FuzzReport {
        strategy: strategy.clone(),
        seed,
        operations: 0,
        inserts: 0,
        queries: 0,
        hits: 0,
        final_size: 0,
        allocated: 0,
        elapsed_ms: 0,
    };
    let started = Instant::now();

    for task in 0..config.tasks {
        for step in 0..config.task_size {
            let n0 = fuzzer.random_key(config.key_space);
            if fuzzer.random_bool() {
                reference.insert(n0);
                set.insert(n0);
                report.inserts += 1;
            } else {
                reference.remove(&n0);
                set.erase(n0);
            }
            report.operations += 1;

            let n1 = fuzzer.random_key(config.key_space);
            let expected = reference.contains(&n1);
            let actual = set.contains(n1);
            report.queries += 1;
            report.hits += u64::from(actual);

            if expected != actual {
                let dump = config.dump_on_failure.then(|| set.print());
                error!(%strategy, seed, task, step, query = n1, expected, actual, "lookup diverged");
                if let Some(dump) = &dump {
                    error!("tree at divergence:\n{dump}");
                }
                return Err(FuzzError::Divergence {
                    strategy,
                    seed,
                    task,
                    step,
                    query: n1,
                    expected,
                    actual,
                    dump,
                });
            }

            if config.check_invariants {
                if let Err(reason) = set.check() {
                    error!(%strategy, seed, task, step, %reason, "invariant broken");
                    return Err(FuzzError::Invariant {
                        strategy,
                        seed,
                        task,
                        step,
                        reason,
                    });
                }
            }
        }
        info!(%strategy, task, size = reference.len(), "task done");
    }

    let values = set.values();
    if !values.iter().eq(reference.iter()) {
        let reason = format!(
            "final contents differ: {} values in tree, {} in reference",
            values.len(),
            reference.len()
        );
        error!(%strategy, seed, %reason, "final comparison failed");
        return Err(FuzzError::Invariant {
            strategy,
            seed,
            task: config.tasks,
            step: 0,
            reason,
        });
    }

    report.final_size = values.len();
    report.allocated = set.allocated();
    report.elapsed_ms = started.elapsed().as_millis();
    info!(
        %strategy,
        seed,
        operations = report.operations,
        size = report.final_size,
        elapsed_ms = report.elapsed_ms as u64,
        "run matched reference"
    );
    Ok(report)
}
