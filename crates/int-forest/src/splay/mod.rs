//! Bottom-up splay tree strategy.
//!
//! Nodes keep a parent link so an accessed node can be rotated to the root
//! after the search that located it.

pub mod splay_set;
pub mod types;
pub mod util;

pub use splay_set::SplaySet;
pub use types::SplayNode;
pub use util::{assert_splay_tree, rotate, splay};
