use crate::types::{BstNode, Side};

/// Bottom-up splay tree node with an explicit parent link.
#[derive(Clone, Debug)]
pub struct SplayNode {
    pub p: Option<u32>,
    /// Children indexed by [`Side`].
    pub c: [Option<u32>; 2],
    pub v: i32,
}

impl SplayNode {
    pub fn new(v: i32) -> Self {
        Self {
            p: None,
            c: [None, None],
            v,
        }
    }
}

impl BstNode for SplayNode {
    fn from_value(value: i32) -> Self {
        Self::new(value)
    }

    fn value(&self) -> i32 {
        self.v
    }

    fn set_value(&mut self, value: i32) {
        self.v = value;
    }

    #[inline]
    fn child(&self, side: Side) -> Option<u32> {
        self.c[side as usize]
    }

    #[inline]
    fn set_child(&mut self, side: Side, child: Option<u32>) {
        self.c[side as usize] = child;
    }
}
