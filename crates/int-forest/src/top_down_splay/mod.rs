//! Top-down splay tree strategy.
//!
//! Splaying happens during the descent itself, so nodes need no parent
//! link. Handle 0 of every arena is a header node that collects the
//! subtrees passed on the way down.

pub mod td_splay_set;
pub mod types;

pub use td_splay_set::{TopDownSplaySet, HEADER};
pub use types::TdNode;
