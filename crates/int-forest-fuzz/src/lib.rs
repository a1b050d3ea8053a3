//! int-forest-fuzz - differential fuzzing for `int-forest`
//!
//! Drives any [`OrderedSet`](int_forest::OrderedSet) with a reproducible
//! stream of inserts and erases, mirrors every operation into a
//! `BTreeSet`, and stops at the first lookup the two disagree on.
//!
//! ```
//! use int_forest::Strategy;
//! use int_forest_fuzz::{run, FuzzConfig};
//!
//! let config = FuzzConfig {
//!     strategy: Strategy::TopDownSplay,
//!     seed: Some(1),
//!     tasks: 2,
//!     task_size: 200,
//!     key_space: Some(50),
//!     check_invariants: true,
//!     ..FuzzConfig::default()
//! };
//! let report = run(&config).unwrap();
//! assert_eq!(report.operations, 400);
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod fuzzer;
pub mod logging;

pub use config::{Args, FuzzConfig, USAGE};
pub use driver::{run, run_against, FuzzReport};
pub use error::FuzzError;
pub use fuzzer::Fuzzer;
pub use logging::init_tracing;
