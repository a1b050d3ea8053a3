//! Run configuration and command-line parsing.

use std::str::FromStr;

use int_forest::Strategy;
use rand::{rngs::OsRng, RngCore};

use crate::error::FuzzError;

/// One differential run against one strategy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FuzzConfig {
    pub strategy: Strategy,
    /// PRNG seed; `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Number of tasks; progress is logged once per task.
    pub tasks: usize,
    /// Insert-or-erase steps per task, each followed by one lookup.
    pub task_size: usize,
    /// Fold generated values into `[-k, k]`.
    pub key_space: Option<u32>,
    /// Run the strategy's full invariant check after every step.
    pub check_invariants: bool,
    /// Attach the tree dump to a divergence.
    pub dump_on_failure: bool,
}

impl Default for FuzzConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Llrb,
            seed: None,
            tasks: 10,
            task_size: 10_000,
            key_space: None,
            check_invariants: false,
            dump_on_failure: true,
        }
    }
}

/// Parsed `forest-fuzz` command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Args {
    pub config: FuzzConfig,
    /// Run every strategy with the same seed instead of just `config.strategy`.
    pub all: bool,
    /// Print the report as JSON.
    pub json: bool,
    pub help: bool,
}

pub const USAGE: &str = "\
Usage:
  forest-fuzz [--strategy llrb|splay|top-down-splay] [--all] [--seed N]
              [--tasks N] [--task-size N] [--key-space K] [--check]
              [--no-dump] [--json]

Log verbosity follows RUST_LOG (default: info).";

impl Args {
    /// Parses flags; the program name must already be stripped.
    pub fn parse<I>(args: I) -> Result<Self, FuzzError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut out = Args::default();
        let mut args = args.into_iter();

        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--strategy" | "-s" => {
                    let value = value_of(&flag, args.next())?;
                    out.config.strategy =
                        Strategy::from_str(&value).map_err(FuzzError::UnknownStrategy)?;
                }
                "--seed" => out.config.seed = Some(parse_num(&flag, args.next())?),
                "--tasks" => out.config.tasks = parse_num(&flag, args.next())?,
                "--task-size" => out.config.task_size = parse_num(&flag, args.next())?,
                "--key-space" => out.config.key_space = Some(parse_num(&flag, args.next())?),
                "--check" => out.config.check_invariants = true,
                "--no-dump" => out.config.dump_on_failure = false,
                "--all" => out.all = true,
                "--json" => out.json = true,
                "--help" | "-h" => out.help = true,
                _ => return Err(FuzzError::UnknownFlag(flag)),
            }
        }

        Ok(out)
    }

    /// One config per strategy to run.
    ///
    /// With `--all` and no `--seed`, one seed is drawn from the OS here and
    /// shared by every strategy.
    pub fn configs(&self) -> Vec<FuzzConfig> {
        if self.all {
            let seed = self.config.seed.unwrap_or_else(|| OsRng.next_u64());
            Strategy::ALL
                .into_iter()
                .map(|strategy| FuzzConfig {
                    strategy,
                    seed: Some(seed),
                    ..self.config.clone()
                })
                .collect()
        } else {
            vec![self.config.clone()]
        }
    }
}

fn value_of(flag: &str, value: Option<String>) -> Result<String, FuzzError> {
    value.ok_or_else(|| FuzzError::MissingValue(flag.to_string()))
}

fn parse_num<T: FromStr>(flag: &str, value: Option<String>) -> Result<T, FuzzError> {
    let value = value_of(flag, value)?;
    value.parse().map_err(|_| FuzzError::InvalidArgument {
        flag: flag.to_string(),
        value,
    })
}
