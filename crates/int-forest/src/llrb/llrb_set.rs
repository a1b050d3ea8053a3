use crate::arena::Arena;
use crate::strategy::Strategy;
use crate::types::OrderedSet;
use crate::util::{find, print, size, values};

use super::types::LlrbNode;
use super::util::{assert_llrb_tree, erase, insert};

/// Ordered set kept balanced as a left-leaning red-black tree.
///
/// Height stays within `2 * log2(n + 1)`; lookups never restructure.
#[derive(Clone, Debug, Default)]
pub struct LlrbSet {
    pub root: Option<u32>,
    arena: Arena<LlrbNode>,
}

impl LlrbSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            root: None,
            arena: Arena::with_capacity(capacity),
        }
    }

    pub fn arena(&self) -> &Arena<LlrbNode> {
        &self.arena
    }

    /// Handle of the node holding `value`.
    pub fn get(&self, value: i32) -> Option<u32> {
        find(&self.arena, self.root, value)
    }

    pub fn has(&self, value: i32) -> bool {
        self.get(value).is_some()
    }

    pub fn set(&mut self, value: i32) {
        let root = insert(&mut self.arena, self.root, value);
        self.arena[root].b = true;
        self.root = Some(root);
    }

    pub fn delete(&mut self, value: i32) {
        self.root = erase(&mut self.arena, self.root, value);
        if let Some(root) = self.root {
            self.arena[root].b = true;
        }
    }
}

impl OrderedSet for LlrbSet {
    fn find(&mut self, value: i32) -> Option<u32> {
        self.get(value)
    }

    fn insert(&mut self, value: i32) {
        self.set(value);
    }

    fn erase(&mut self, value: i32) {
        self.delete(value);
    }

    fn root(&self) -> Option<u32> {
        self.root
    }

    fn value(&self, handle: u32) -> Option<i32> {
        self.arena.get(handle).map(|n| n.v)
    }

    fn size(&self) -> usize {
        size(&self.arena, self.root)
    }

    fn allocated(&self) -> usize {
        self.arena.len()
    }

    fn values(&self) -> Vec<i32> {
        values(&self.arena, self.root)
    }

    fn print(&self) -> String {
        print(&self.arena, self.root)
    }

    fn check(&self) -> Result<(), String> {
        assert_llrb_tree(&self.arena, self.root)
    }

    fn strategy(&self) -> Strategy {
        Strategy::Llrb
    }
}
