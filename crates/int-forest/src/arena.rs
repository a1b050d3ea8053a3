//! Append-only node storage.
//!
//! Every node is addressed by its position in the backing `Vec`. Handles are
//! handed out in increasing order and never recycled: erasing a value only
//! unlinks its node from the tree, the slot itself stays allocated for the
//! lifetime of the arena.

use std::ops::{Index, IndexMut};

use crate::types::BstNode;

/// Largest number of nodes an arena will hold. `u32::MAX` itself is never a
/// valid handle.
pub const MAX_NODES: usize = u32::MAX as usize;

#[derive(Clone, Debug)]
pub struct Arena<N> {
    nodes: Vec<N>,
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Arena<N> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Appends `node` and returns its handle.
    pub fn push(&mut self, node: N) -> u32 {
        let handle = self.nodes.len();
        assert!(handle < MAX_NODES, "arena exhausted at {handle} nodes");
        self.nodes.push(node);
        handle as u32
    }

    /// Appends a fresh node holding `value`.
    pub fn allocate(&mut self, value: i32) -> u32
    where
        N: BstNode,
    {
        self.push(N::from_value(value))
    }

    #[inline]
    pub fn get(&self, handle: u32) -> Option<&N> {
        self.nodes.get(handle as usize)
    }

    #[inline]
    pub fn get_mut(&mut self, handle: u32) -> Option<&mut N> {
        self.nodes.get_mut(handle as usize)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn contains(&self, handle: u32) -> bool {
        (handle as usize) < self.nodes.len()
    }

    pub fn as_slice(&self) -> &[N] {
        &self.nodes
    }
}

impl<N> Index<u32> for Arena<N> {
    type Output = N;

    #[inline]
    fn index(&self, handle: u32) -> &N {
        &self.nodes[handle as usize]
    }
}

impl<N> IndexMut<u32> for Arena<N> {
    #[inline]
    fn index_mut(&mut self, handle: u32) -> &mut N {
        &mut self.nodes[handle as usize]
    }
}
