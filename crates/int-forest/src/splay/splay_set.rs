use crate::arena::Arena;
use crate::strategy::Strategy;
use crate::types::{BstNode, OrderedSet, Side};
use crate::util::{last, print, size, values};

use super::types::SplayNode;
use super::util::{assert_splay_tree, search, splay};

/// Ordered set kept as a bottom-up splay tree.
///
/// Every successful lookup and every insert moves the touched node to the
/// root, so recently used values are cheap to reach again.
#[derive(Clone, Debug, Default)]
pub struct SplaySet {
    pub root: Option<u32>,
    arena: Arena<SplayNode>,
}

impl SplaySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            root: None,
            arena: Arena::with_capacity(capacity),
        }
    }

    pub fn arena(&self) -> &Arena<SplayNode> {
        &self.arena
    }

    /// Last node visited by a search for `value` before reaching it or
    /// falling off the tree: the node a new `value` would hang from.
    ///
    /// Does not restructure.
    pub fn find_insertion_point(&self, value: i32) -> Option<u32> {
        search(&self.arena, self.root, value).1
    }

    fn splay_to_root(&mut self, node: u32) {
        self.root = Some(splay(&mut self.arena, node));
    }
}

impl OrderedSet for SplaySet {
    fn find(&mut self, value: i32) -> Option<u32> {
        let (node, _) = search(&self.arena, self.root, value);
        if let Some(node) = node {
            self.splay_to_root(node);
        }
        node
    }

    fn insert(&mut self, value: i32) {
        let (existing, pred) = search(&self.arena, self.root, value);
        if let Some(existing) = existing {
            self.splay_to_root(existing);
            return;
        }

        let node = self.arena.allocate(value);
        if let Some(pred) = pred {
            let side = Side::towards(value, self.arena[pred].v);
            self.arena[pred].set_child(side, Some(node));
            self.arena[node].p = Some(pred);
        }
        self.splay_to_root(node);
    }

    fn erase(&mut self, value: i32) {
        let Some(node) = self.find(value) else {
            return;
        };
        let [left, right] = self.arena[node].c;
        self.arena[node].c = [None, None];

        let Some(left) = left else {
            if let Some(right) = right {
                self.arena[right].p = None;
            }
            self.root = right;
            return;
        };

        self.arena[left].p = None;
        let max = last(&self.arena, Some(left)).unwrap_or(left);
        let max = splay(&mut self.arena, max);
        self.arena[max].set_child(Side::Right, right);
        if let Some(right) = right {
            self.arena[right].p = Some(max);
        }
        self.root = Some(max);
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
        assert_splay_tree(&self.arena, self.root)
    }

    fn strategy(&self) -> Strategy {
        Strategy::Splay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn erase_splices_left_maximum_over_right_subtree() {
        let mut set = SplaySet::new();
        for v in [50, 30, 70, 20, 40, 60, 80] {
            set.insert(v);
        }
        set.erase(50);
        set.check().unwrap();
        let root = set.root.unwrap();
        assert_eq!(set.arena()[root].v, 40);
        assert_eq!(set.values(), vec![20, 30, 40, 60, 70, 80]);
    }

    #[test]
    fn erase_splays_maximum_from_bottom_of_left_subtree() {
        let mut set = SplaySet::new();
        // Descending inserts leave 1 on top of a right path 2 → … → 8.
        for v in (1..=8).rev() {
            set.insert(v);
        }
        set.insert(10);
        set.erase(10);
        set.check().unwrap();
        let root = set.root.unwrap();
        assert_eq!(set.arena()[root].v, 8);
        assert_eq!(set.arena()[root].r(), None);
        assert_eq!(set.values(), (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn erase_without_left_subtree_promotes_right() {
        let mut set = SplaySet::new();
        for v in [3, 2, 1] {
            set.insert(v);
        }
        // 1 is the root and has no left child.
        set.erase(1);
        set.check().unwrap();
        assert_eq!(set.values(), vec![2, 3]);
        assert_eq!(set.arena()[set.root.unwrap()].p, None);
    }

    #[test]
    fn insertion_point_is_last_node_on_search_path() {
        let mut set = SplaySet::new();
        assert_eq!(set.find_insertion_point(1), None);
        set.insert(10);
        set.insert(20);
        // 20 is the root with 10 as its left child.
        let n10 = set.arena().as_slice().iter().position(|n| n.v == 10).unwrap() as u32;
        let n20 = set.root.unwrap();
        assert_eq!(set.find_insertion_point(15), Some(n10));
        assert_eq!(set.find_insertion_point(25), Some(n20));
        assert_eq!(set.find_insertion_point(20), None);
        assert_eq!(set.find_insertion_point(10), Some(n20));
        // No restructuring happened.
        assert_eq!(set.root, Some(n20));
    }
}
