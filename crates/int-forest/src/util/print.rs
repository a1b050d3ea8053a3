use crate::arena::Arena;
use crate::types::{BstNode, Side};

/// Guide columns drawn before deeper lines collapse the outer ones into a
/// `…<n> ` marker, `n` being the number of columns left out.
pub const MAX_INDENT: usize = 16;

/// Dumps the tree under `root`, one node per line.
///
/// Each line reads `<handle> [<label>] <value>`; the left child is printed
/// before the right one and a missing child of an inner node shows as `∅`.
///
/// ```text
/// 0 black 5
/// ├─ 1 black 3
/// │  ├─ 3 red 1
/// │  └─ ∅
/// └─ 2 black 8
/// ```
///
/// Walks with an explicit stack and keeps at most [`MAX_INDENT`] guide
/// columns per line, so a degenerate path costs linear time and output.
pub fn print<N: BstNode>(arena: &Arena<N>, root: Option<u32>) -> String {
    let mut out = String::new();
    // Side taken at each inner node on the path below the root.
    let mut guides: Vec<Side> = Vec::new();
    let mut stack: Vec<(Option<u32>, usize, Option<Side>)> = vec![(root, 0, None)];

    while let Some((node, depth, side)) = stack.pop() {
        if depth > 0 {
            out.push('\n');
            guides.truncate(depth - 1);
            push_guides(&mut out, &guides);
        }
        match side {
            Some(Side::Left) => out.push_str("├─ "),
            Some(Side::Right) => out.push_str("└─ "),
            None => {}
        }

        let Some(i) = node else {
            out.push('∅');
            continue;
        };
        let n = &arena[i];
        match n.label() {
            Some(label) => out.push_str(&format!("{i} {label} {}", n.value())),
            None => out.push_str(&format!("{i} {}", n.value())),
        }
        if n.l().is_none() && n.r().is_none() {
            continue;
        }

        guides.extend(side);
        stack.push((n.r(), depth + 1, Some(Side::Right)));
        stack.push((n.l(), depth + 1, Some(Side::Left)));
    }

    out
}

fn push_guides(out: &mut String, guides: &[Side]) {
    let skipped = guides.len().saturating_sub(MAX_INDENT);
    if skipped > 0 {
        out.push_str(&format!("…{skipped} "));
    }
    for side in &guides[skipped..] {
        out.push_str(match side {
            Side::Left => "│  ",
            Side::Right => "   ",
        });
    }
}
