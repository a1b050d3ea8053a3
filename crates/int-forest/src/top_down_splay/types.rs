use crate::types::{BstNode, Side};

/// Top-down splay tree node. No parent link.
#[derive(Clone, Debug)]
pub struct TdNode {
    /// Children indexed by [`Side`].
    pub c: [Option<u32>; 2],
    pub v: i32,
}

impl TdNode {
    pub fn new(v: i32) -> Self {
        Self { c: [None, None], v }
    }
}

impl BstNode for TdNode {
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
