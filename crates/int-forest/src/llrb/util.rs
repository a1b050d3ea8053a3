//! Left-leaning red-black tree primitives.
//!
//! Every function that may change the shape of a subtree takes the subtree
//! root and returns the (possibly different) new root.

use crate::arena::Arena;
use crate::util::assert_bst;

use super::types::LlrbNode;

/// Check if a node is red. The sentinel counts as black.
#[inline]
pub fn is_red(arena: &Arena<LlrbNode>, node: Option<u32>) -> bool {
    node.is_some_and(|i| !arena[i].b)
}

#[inline]
fn is_red_left_left(arena: &Arena<LlrbNode>, node: u32) -> bool {
    arena[node].l.is_some_and(|l| is_red(arena, arena[l].l))
}

/// Flip colors of node and its children.
pub fn color_flip(arena: &mut Arena<LlrbNode>, node: u32) {
    arena[node].b = !arena[node].b;
    if let Some(l) = arena[node].l {
        arena[l].b = !arena[l].b;
    }
    if let Some(r) = arena[node].r {
        arena[r].b = !arena[r].b;
    }
}

/// Turns a right-leaning link into a left-leaning one.
pub fn rotate_left(arena: &mut Arena<LlrbNode>, node: u32) -> u32 {
    let Some(x) = arena[node].r else {
        return node;
    };
    arena[node].r = arena[x].l;
    arena[x].l = Some(node);
    arena[x].b = arena[node].b;
    arena[node].b = false;
    x
}

/// Turns a left-leaning link into a right-leaning one.
pub fn rotate_right(arena: &mut Arena<LlrbNode>, node: u32) -> u32 {
    let Some(x) = arena[node].l else {
        return node;
    };
    arena[node].l = arena[x].r;
    arena[x].r = Some(node);
    arena[x].b = arena[node].b;
    arena[node].b = false;
    x
}

/// Restores the left-leaning shape on the way back up.
///
/// Both rotations must run before the color flip.
pub fn fix_up(arena: &mut Arena<LlrbNode>, mut node: u32) -> u32 {
    if is_red(arena, arena[node].r) && !is_red(arena, arena[node].l) {
        node = rotate_left(arena, node);
    }
    if is_red(arena, arena[node].l) && is_red_left_left(arena, node) {
        node = rotate_right(arena, node);
    }
    if is_red(arena, arena[node].l) && is_red(arena, arena[node].r) {
        color_flip(arena, node);
    }
    node
}

/// Makes `node.l` or one of its children red before descending left.
pub fn move_red_left(arena: &mut Arena<LlrbNode>, mut node: u32) -> u32 {
    color_flip(arena, node);
    if let Some(r) = arena[node].r {
        if is_red(arena, arena[r].l) {
            let rotated = rotate_right(arena, r);
            arena[node].r = Some(rotated);
            node = rotate_left(arena, node);
            color_flip(arena, node);
        }
    }
    node
}

/// Makes `node.r` or one of its children red before descending right.
pub fn move_red_right(arena: &mut Arena<LlrbNode>, mut node: u32) -> u32 {
    color_flip(arena, node);
    if is_red_left_left(arena, node) {
        node = rotate_right(arena, node);
        color_flip(arena, node);
    }
    node
}

/// Inserts `value` under `node`, returning the new subtree root.
///
/// Equal values stop the descent, so no node is allocated for a duplicate.
pub fn insert(arena: &mut Arena<LlrbNode>, node: Option<u32>, value: i32) -> u32 {
    let Some(node) = node else {
        return arena.allocate(value);
    };

    let v = arena[node].v;
    if value < v {
        let left = arena[node].l;
        arena[node].l = Some(insert(arena, left, value));
    } else if value > v {
        let right = arena[node].r;
        arena[node].r = Some(insert(arena, right, value));
    }

    fix_up(arena, node)
}

/// Minimum node in the subtree.
pub fn min(arena: &Arena<LlrbNode>, mut node: u32) -> u32 {
    while let Some(l) = arena[node].l {
        node = l;
    }
    node
}

/// Unlinks the minimum node of the subtree.
pub fn delete_min(arena: &mut Arena<LlrbNode>, mut node: u32) -> Option<u32> {
    let l = arena[node].l?;

    if !is_red(arena, Some(l)) && !is_red(arena, arena[l].l) {
        node = move_red_left(arena, node);
    }

    let left = arena[node].l?;
    arena[node].l = delete_min(arena, left);

    Some(fix_up(arena, node))
}

/// Unlinks `value` from the subtree, returning the new subtree root.
///
/// Redness is pushed down ahead of the search so the node finally removed
/// is never a lone black leaf. A matched inner node takes its in-order
/// successor's value and the successor node is removed instead.
pub fn erase(arena: &mut Arena<LlrbNode>, node: Option<u32>, value: i32) -> Option<u32> {
    let mut node = node?;

    if value < arena[node].v {
        if let Some(l) = arena[node].l {
            if !is_red(arena, Some(l)) && !is_red(arena, arena[l].l) {
                node = move_red_left(arena, node);
            }
        }
        let left = arena[node].l;
        arena[node].l = erase(arena, left, value);
    } else {
        if is_red(arena, arena[node].l) {
            node = rotate_right(arena, node);
        }

        if value == arena[node].v && arena[node].r.is_none() {
            return None;
        }

        if let Some(r) = arena[node].r {
            if !is_red(arena, Some(r)) && !is_red(arena, arena[r].l) {
                node = move_red_right(arena, node);
            }
        }

        let right = arena[node].r;
        match right {
            Some(right) if value == arena[node].v => {
                let successor = min(arena, right);
                arena[node].v = arena[successor].v;
                arena[node].r = delete_min(arena, right);
            }
            right => {
                arena[node].r = erase(arena, right, value);
            }
        }
    }

    Some(fix_up(arena, node))
}

/// Verifies ordering, black root, no right-leaning red link, no red node
/// with a red child and equal black height on every path.
pub fn assert_llrb_tree(arena: &Arena<LlrbNode>, root: Option<u32>) -> Result<(), String> {
    assert_bst(arena, root)?;

    let Some(root) = root else {
        return Ok(());
    };
    if !arena[root].b {
        return Err("Root is not black".to_string());
    }

    fn black_height(arena: &Arena<LlrbNode>, node: Option<u32>) -> Result<usize, String> {
        let Some(node) = node else {
            return Ok(0);
        };
        let n = &arena[node];

        if is_red(arena, n.r) {
            return Err(format!("Node {node} has a red right child"));
        }
        if !n.b && is_red(arena, n.l) {
            return Err(format!("Red node {node} has a red left child"));
        }

        let lh = black_height(arena, n.l)?;
        let rh = black_height(arena, n.r)?;
        if lh != rh {
            return Err(format!("Black height mismatch under node {node}: {lh} != {rh}"));
        }

        Ok(lh + usize::from(n.b))
    }

    black_height(arena, Some(root)).map(|_| ())
}
