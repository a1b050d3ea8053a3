//! Arena-backed ordered sets of `i32`.
//!
//! Three balancing strategies share one node store and one contract:
//!
//! | Module | Structure | Restructures on lookup |
//! |--------|-----------|------------------------|
//! | [`llrb`] | left-leaning red-black tree | no |
//! | [`splay`] | bottom-up splay tree (parent links) | yes |
//! | [`top_down_splay`] | top-down splay tree (header node) | yes |
//!
//! Nodes live in an append-only [`Arena`] and refer to each other by `u32`
//! handle; `None` stands for "no node". Erased nodes are unlinked but their
//! slots are never reused.
//!
//! ```
//! use int_forest::{OrderedSet, Strategy};
//!
//! let mut set = Strategy::Llrb.build();
//! for v in [5, 3, 8, 1, 4] {
//!     set.insert(v);
//! }
//! set.erase(3);
//! assert!(set.contains(4));
//! assert!(!set.contains(3));
//! assert_eq!(set.values(), vec![1, 4, 5, 8]);
//! ```

pub mod arena;
pub mod llrb;
pub mod splay;
pub mod strategy;
pub mod top_down_splay;
pub mod types;
pub mod util;

pub use arena::Arena;
pub use llrb::{LlrbNode, LlrbSet};
pub use splay::{SplayNode, SplaySet};
pub use strategy::Strategy;
pub use top_down_splay::{TdNode, TopDownSplaySet};
pub use types::{BstNode, OrderedSet, Side};
