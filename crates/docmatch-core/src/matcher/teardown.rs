//! Tree release and shape measurement.
//!
//! Dropping a `MatcherNode` releases its whole subtree exactly once. The
//! subtree is dismantled with an explicit worklist, so release depth on the
//! call stack stays constant no matter how deep the tree is.

use crate::{
    document::FieldPath,
    matcher::{ExistsMatcher, MatcherNode},
};
use std::mem;

impl MatcherNode {
    /// Release the tree. Consuming `self` makes a second release or a
    /// later evaluation impossible.
    pub fn teardown(self) {
        drop(self);
    }

    /// Length of the longest root-to-leaf chain; a single leaf has depth 1.
    ///
    /// A compare leaf also counts the container nesting of its operand, so
    /// `{a: {$in: [[1]]}}` has depth 3.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1_usize)];

        while let Some((node, depth)) = pending.pop() {
            let operand_depth = match node {
                Self::Compare(m) => m.operand.nesting_depth(),
                _ => 0,
            };
            deepest = deepest.max(depth + operand_depth);
            pending.extend(node.children().map(|child| (child, depth + 1)));
        }

        deepest
    }

    /// Total number of nodes in the tree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];

        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children());
        }

        count
    }

    // Leaf standing in for a detached child. Owns no heap memory.
    const fn placeholder() -> Self {
        Self::Exists(ExistsMatcher {
            path: FieldPath::detached(),
            expected: false,
        })
    }

    // Move every non-leaf child out onto `pending`, leaving placeholders.
    fn detach_children(&mut self, pending: &mut Vec<Self>) {
        match self {
            Self::Not(m) => detach(&mut m.child, pending),
            Self::Logical(m) => {
                detach(&mut m.left, pending);
                if let Some(right) = m.right.as_mut() {
                    detach(right, pending);
                }
            }
            Self::Exists(_) | Self::Type(_) | Self::Compare(_) => {}
        }
    }
}

fn detach(slot: &mut MatcherNode, pending: &mut Vec<MatcherNode>) {
    if !slot.is_leaf() {
        pending.push(mem::replace(slot, MatcherNode::placeholder()));
    }
}

impl Drop for MatcherNode {
    fn drop(&mut self) {
        if self.is_leaf() {
            return;
        }

        let mut pending = Vec::new();
        self.detach_children(&mut pending);

        // Each popped node only has leaf children left once detached, so
        // its own drop returns without descending further.
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}
