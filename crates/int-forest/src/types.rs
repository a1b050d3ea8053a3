//! Node and set contracts shared by every balancing strategy.
//!
//! Structural links are `Option<u32>` indices into an [`Arena`](crate::Arena);
//! `None` is the sentinel meaning "no node".

use crate::strategy::Strategy;

/// Child slot of a binary node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left = 0,
    Right = 1,
}

impl Side {
    /// Side a search for `value` takes below a node holding `pivot`.
    #[inline]
    pub fn towards(value: i32, pivot: i32) -> Self {
        if value < pivot {
            Side::Left
        } else {
            Side::Right
        }
    }

    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A binary-search-tree node stored in an arena.
///
/// Only the value and the two child links are common to every strategy;
/// colors and parent links live on the concrete node types.
pub trait BstNode {
    /// Fresh node with every link set to the sentinel.
    fn from_value(value: i32) -> Self;
    fn value(&self) -> i32;
    fn set_value(&mut self, value: i32);
    fn child(&self, side: Side) -> Option<u32>;
    fn set_child(&mut self, side: Side, child: Option<u32>);

    #[inline]
    fn l(&self) -> Option<u32> {
        self.child(Side::Left)
    }

    #[inline]
    fn r(&self) -> Option<u32> {
        self.child(Side::Right)
    }

    /// Extra state shown by the diagnostic dump, e.g. the node color.
    fn label(&self) -> Option<&'static str> {
        None
    }
}

/// Mutable ordered set of unique `i32` values.
///
/// Every strategy implements the same contract so callers (and the
/// differential fuzzer) can be written once and handed any of them.
pub trait OrderedSet {
    /// Handle of the node holding `value`, or `None`.
    ///
    /// Takes `&mut self` because splay strategies restructure on lookup.
    fn find(&mut self, value: i32) -> Option<u32>;

    /// Inserts `value`; a no-op when it is already present.
    fn insert(&mut self, value: i32);

    /// Removes `value`; a no-op when it is absent.
    fn erase(&mut self, value: i32);

    fn root(&self) -> Option<u32>;

    /// Value stored in the node at `handle`, reachable or not.
    fn value(&self, handle: u32) -> Option<i32>;

    /// Number of nodes reachable from the root.
    fn size(&self) -> usize;

    /// Number of nodes ever allocated. Never decreases.
    fn allocated(&self) -> usize;

    /// Values in ascending order.
    fn values(&self) -> Vec<i32>;

    /// Indented dump of the reachable tree.
    fn print(&self) -> String;

    /// Verifies every structural invariant of the strategy.
    fn check(&self) -> Result<(), String>;

    fn strategy(&self) -> Strategy;

    fn contains(&mut self, value: i32) -> bool {
        self.find(value).is_some()
    }

    fn is_empty(&self) -> bool {
        self.root().is_none()
    }
}
