//! Left-leaning red-black tree strategy.

pub mod llrb_set;
pub mod types;
pub mod util;

pub use llrb_set::LlrbSet;
pub use types::LlrbNode;
pub use util::assert_llrb_tree;
