use crate::arena::Arena;
use crate::strategy::Strategy;
use crate::types::{BstNode, OrderedSet, Side};
use crate::util::{assert_bst, for_each, print, size, values};

use super::types::TdNode;

/// Handle of the header node every [`TopDownSplaySet`] allocates first.
pub const HEADER: u32 = 0;

/// Ordered set kept as a top-down splay tree.
///
/// `find`, `insert` and `erase` all start by splaying the searched value
/// (or its nearest neighbour) to the root in a single downward pass.
#[derive(Clone, Debug)]
pub struct TopDownSplaySet {
    pub root: Option<u32>,
    arena: Arena<TdNode>,
}

impl Default for TopDownSplaySet {
    fn default() -> Self {
        Self::new()
    }
}

impl TopDownSplaySet {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut arena = Arena::with_capacity(capacity + 1);
        let header = arena.allocate(0);
        debug_assert_eq!(header, HEADER);
        Self { root: None, arena }
    }

    pub fn arena(&self) -> &Arena<TdNode> {
        &self.arena
    }

    /// Splays the node holding `value`, or the last node on its search
    /// path, to the root of the tree under `root`. Returns the new root.
    ///
    /// Nodes passed while descending are hung off two spines rooted at the
    /// header: the left spine collects nodes smaller than `value`, the
    /// right spine nodes greater than it. Two steps in the same direction
    /// rotate first, which is the zig-zig case.
    fn splay(&mut self, root: u32, value: i32) -> u32 {
        let a = &mut self.arena;
        a[HEADER].c = [None, None];
        let mut spines = [HEADER, HEADER];
        let mut node = root;

        loop {
            let v = a[node].v;
            if v == value {
                break;
            }
            let side = Side::towards(value, v);
            let Some(mut child) = a[node].child(side) else {
                break;
            };

            let cv = a[child].v;
            if cv != value && Side::towards(value, cv) == side {
                let inner = a[child].child(side.opposite());
                a[node].set_child(side, inner);
                a[child].set_child(side.opposite(), Some(node));
                node = child;
                match a[node].child(side) {
                    Some(next) => child = next,
                    None => break,
                }
            }

            let spine = side.opposite() as usize;
            a[spines[spine]].set_child(side, Some(node));
            spines[spine] = node;
            node = child;
        }

        debug_assert_ne!(node, HEADER, "header reached during splay");
        debug_assert!(
            spines.iter().all(|&s| a.contains(s)),
            "spine end out of range: {spines:?}"
        );

        let [left, right] = a[node].c;
        a[spines[0]].set_child(Side::Right, left);
        a[spines[1]].set_child(Side::Left, right);
        let [header_l, header_r] = a[HEADER].c;
        a[node].c = [header_r, header_l];

        self.root = Some(node);
        node
    }
}

impl OrderedSet for TopDownSplaySet {
    fn find(&mut self, value: i32) -> Option<u32> {
        let root = self.splay(self.root?, value);
        (self.arena[root].v == value).then_some(root)
    }

    fn insert(&mut self, value: i32) {
        let Some(root) = self.root else {
            self.root = Some(self.arena.allocate(value));
            return;
        };

        let root = self.splay(root, value);
        let rv = self.arena[root].v;
        if rv == value {
            return;
        }

        let node = self.arena.allocate(value);
        let [left, right] = self.arena[root].c;
        if value < rv {
            self.arena[node].c = [left, Some(root)];
            self.arena[root].set_child(Side::Left, None);
        } else {
            self.arena[node].c = [Some(root), right];
            self.arena[root].set_child(Side::Right, None);
        }
        self.root = Some(node);
    }

    fn erase(&mut self, value: i32) {
        let Some(root) = self.find(value) else {
            return;
        };
        let [left, right] = self.arena[root].c;
        self.arena[root].c = [None, None];

        let Some(left) = left else {
            self.root = right;
            return;
        };

        // Every value in `left` is smaller, so this brings its maximum up.
        let max = self.splay(left, value);
        debug_assert!(self.arena[max].r().is_none());
        self.arena[max].set_child(Side::Right, right);
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
        assert_bst(&self.arena, self.root)?;
        let mut header_reachable = false;
        for_each(&self.arena, self.root, |i| header_reachable |= i == HEADER);
        if header_reachable {
            return Err("Header node is reachable from the root".to_string());
        }
        Ok(())
    }

    fn strategy(&self) -> Strategy {
        Strategy::TopDownSplay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_allocated_up_front() {
        let set = TopDownSplaySet::new();
        assert_eq!(set.allocated(), 1);
        assert!(set.is_empty());
    }

    #[test]
    fn failed_find_splays_neighbour() {
        let mut set = TopDownSplaySet::new();
        for v in [10, 20, 30, 40] {
            set.insert(v);
        }
        assert_eq!(set.find(25), None);
        let root = set.root.unwrap();
        assert!(matches!(set.arena()[root].v, 20 | 30));
        set.check().unwrap();
        assert_eq!(set.values(), vec![10, 20, 30, 40]);
    }

    #[test]
    fn zig_zig_descent_on_sorted_spine() {
        let mut set = TopDownSplaySet::new();
        // Ascending inserts leave a left spine under the newest root.
        for v in 1..=8 {
            set.insert(v);
        }
        assert_eq!(crate::util::height(set.arena(), set.root), 8);

        let found = set.find(1).unwrap();
        assert_eq!(set.root, Some(found));
        set.check().unwrap();
        assert!(crate::util::height(set.arena(), set.root) < 8);
        assert_eq!(set.values(), (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn erase_root_with_both_subtrees() {
        let mut set = TopDownSplaySet::new();
        for v in [5, 3, 8, 1, 4, 7, 9] {
            set.insert(v);
        }
        set.erase(5);
        set.check().unwrap();
        let root = set.root.unwrap();
        assert_eq!(set.arena()[root].v, 4);
        assert_eq!(set.values(), vec![1, 3, 4, 7, 8, 9]);
    }
}
