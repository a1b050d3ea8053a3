//! Rotations and splaying over parent-linked nodes.

use crate::arena::Arena;
use crate::types::{BstNode, Side};
use crate::util::assert_bst;

use super::types::SplayNode;

/// Which child slot of `parent` holds `node`.
#[inline]
pub fn side_of(arena: &Arena<SplayNode>, node: u32, parent: u32) -> Side {
    if arena[parent].r() == Some(node) {
        Side::Right
    } else {
        Side::Left
    }
}

/// Rotates `node` above its parent.
///
/// ```text
///       g               g
///       |               |
///       p               n
///      / \     →       / \
///     n   c           a   p
///    / \                 / \
///   a   b               b   c
/// ```
///
/// The grandparent's child slot and the parent link of the subtree that
/// changes sides (`b`) are rewired too. A node without a parent is left
/// untouched.
pub fn rotate(arena: &mut Arena<SplayNode>, node: u32) {
    let Some(parent) = arena[node].p else {
        return;
    };
    let side = side_of(arena, node, parent);
    let grand = arena[parent].p;
    let grand_side = grand.map(|g| side_of(arena, parent, g));

    let inner = arena[node].child(side.opposite());
    arena[parent].set_child(side, inner);
    if let Some(inner) = inner {
        arena[inner].p = Some(parent);
    }

    arena[node].set_child(side.opposite(), Some(parent));
    arena[parent].p = Some(node);

    arena[node].p = grand;
    if let (Some(g), Some(gs)) = (grand, grand_side) {
        arena[g].set_child(gs, Some(node));
    }
}

/// Rotates `node` up until it has no parent and returns it.
///
/// Zig-zig rotates the parent first, zig-zag rotates the node twice; a lone
/// zig finishes the climb when the parent is the root.
pub fn splay(arena: &mut Arena<SplayNode>, node: u32) -> u32 {
    while let Some(parent) = arena[node].p {
        if let Some(grand) = arena[parent].p {
            if side_of(arena, node, parent) == side_of(arena, parent, grand) {
                rotate(arena, parent);
            } else {
                rotate(arena, node);
            }
        }
        rotate(arena, node);
    }
    node
}

/// Descends from `root` looking for `value`.
///
/// Returns the matching node, if any, together with the last node visited
/// before it (or before falling off the tree).
pub fn search(arena: &Arena<SplayNode>, root: Option<u32>, value: i32) -> (Option<u32>, Option<u32>) {
    let mut curr = root;
    let mut pred = None;
    while let Some(i) = curr {
        let v = arena[i].v;
        if v == value {
            break;
        }
        pred = Some(i);
        curr = arena[i].child(Side::towards(value, v));
    }
    (curr, pred)
}

/// Verifies ordering and that parent and child links agree everywhere.
pub fn assert_splay_tree(arena: &Arena<SplayNode>, root: Option<u32>) -> Result<(), String> {
    assert_bst(arena, root)?;

    let Some(root) = root else {
        return Ok(());
    };
    if let Some(p) = arena[root].p {
        return Err(format!("Root {root} has parent {p}"));
    }

    let mut stack = vec![root];
    while let Some(i) = stack.pop() {
        for child in arena[i].c.into_iter().flatten() {
            if arena[child].p != Some(i) {
                return Err(format!(
                    "Broken parent link: node {child} is a child of {i} but points to {:?}",
                    arena[child].p
                ));
            }
            stack.push(child);
        }
    }
    Ok(())
}
