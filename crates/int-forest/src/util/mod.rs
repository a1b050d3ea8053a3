//! Read-only helpers shared by every strategy.
//!
//! None of these restructure the tree, so they work on any arena whose nodes
//! implement [`BstNode`].

pub mod print;

use crate::arena::Arena;
use crate::types::{BstNode, Side};

pub use print::print;

/// Plain binary-search descent.
pub fn find<N: BstNode>(arena: &Arena<N>, root: Option<u32>, value: i32) -> Option<u32> {
    let mut curr = root;
    while let Some(i) = curr {
        let v = arena[i].value();
        if v == value {
            return Some(i);
        }
        curr = arena[i].child(Side::towards(value, v));
    }
    None
}

/// Leftmost node under `root`.
pub fn first<N: BstNode>(arena: &Arena<N>, root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = arena[curr].l() {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node under `root`.
pub fn last<N: BstNode>(arena: &Arena<N>, root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = arena[curr].r() {
        curr = r;
    }
    Some(curr)
}

/// Number of nodes under `root`.
pub fn size<N: BstNode>(arena: &Arena<N>, root: Option<u32>) -> usize {
    let mut count = 0;
    for_each(arena, root, |_| count += 1);
    count
}

/// Number of nodes on the longest root-to-leaf path.
pub fn height<N: BstNode>(arena: &Arena<N>, root: Option<u32>) -> usize {
    let mut max = 0;
    let mut stack: Vec<(u32, usize)> = root.map(|i| (i, 1)).into_iter().collect();
    while let Some((i, depth)) = stack.pop() {
        max = max.max(depth);
        stack.extend(arena[i].l().map(|l| (l, depth + 1)));
        stack.extend(arena[i].r().map(|r| (r, depth + 1)));
    }
    max
}

/// Visits every node under `root` in order.
///
/// Uses an explicit stack: splay trees can degenerate into long paths.
pub fn for_each<N: BstNode, F: FnMut(u32)>(arena: &Arena<N>, root: Option<u32>, mut f: F) {
    let mut stack = Vec::new();
    let mut curr = root;
    loop {
        while let Some(i) = curr {
            stack.push(i);
            curr = arena[i].l();
        }
        let Some(i) = stack.pop() else {
            return;
        };
        f(i);
        curr = arena[i].r();
    }
}

/// Values under `root` in order.
pub fn values<N: BstNode>(arena: &Arena<N>, root: Option<u32>) -> Vec<i32> {
    let mut out = Vec::new();
    for_each(arena, root, |i| out.push(arena[i].value()));
    out
}

/// Checks that every reachable handle is in range, that no node is reachable
/// twice and that the in-order sequence is strictly increasing.
pub fn assert_bst<N: BstNode>(arena: &Arena<N>, root: Option<u32>) -> Result<(), String> {
    let mut seen = vec![false; arena.len()];
    let mut stack: Vec<u32> = root.into_iter().collect();
    while let Some(i) = stack.pop() {
        if !arena.contains(i) {
            return Err(format!("Handle {i} is out of range"));
        }
        if std::mem::replace(&mut seen[i as usize], true) {
            return Err(format!("Node {i} is reachable twice"));
        }
        stack.extend(arena[i].l());
        stack.extend(arena[i].r());
    }

    let mut prev: Option<i32> = None;
    let mut err = None;
    for_each(arena, root, |i| {
        let v = arena[i].value();
        if err.is_none() && prev.is_some_and(|p| p >= v) {
            err = Some(format!("Node order violated at node {i} (value {v})"));
        }
        prev = Some(v);
    });
    err.map_or(Ok(()), Err)
}
