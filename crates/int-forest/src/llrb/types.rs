use crate::types::{BstNode, Side};

/// Left-leaning red-black tree node.
///
/// No parent link: every restructuring helper returns the new subtree root
/// and the caller stores it back into the parent's slot.
#[derive(Clone, Debug)]
pub struct LlrbNode {
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub v: i32,
    /// Node color: `true` = black, `false` = red.
    pub b: bool,
}

impl LlrbNode {
    /// New nodes enter the tree red.
    pub fn new(v: i32) -> Self {
        Self {
            l: None,
            r: None,
            v,
            b: false,
        }
    }
}

impl BstNode for LlrbNode {
    fn from_value(value: i32) -> Self {
        Self::new(value)
    }

    fn value(&self) -> i32 {
        self.v
    }

    fn set_value(&mut self, value: i32) {
        self.v = value;
    }

    fn child(&self, side: Side) -> Option<u32> {
        match side {
            Side::Left => self.l,
            Side::Right => self.r,
        }
    }

    fn set_child(&mut self, side: Side, child: Option<u32>) {
        match side {
            Side::Left => self.l = child,
            Side::Right => self.r = child,
        }
    }

    fn label(&self) -> Option<&'static str> {
        Some(if self.b { "black" } else { "red" })
    }
}
