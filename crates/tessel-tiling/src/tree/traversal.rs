//! Read-only traversal of the layout tree: leaf order, paths, neighbors.

use std::collections::HashSet;

use tessel_common::types::PaneId;

use super::{Branch, LayoutNode};

impl LayoutNode {
    /// All pane IDs in left-to-right (depth-first) order.
    pub fn leaves(&self) -> Vec<PaneId> {
        let mut ids = Vec::new();
        self.collect_leaves_into(&mut ids);
        ids
    }

    fn collect_leaves_into(&self, out: &mut Vec<PaneId>) {
        match self {
            LayoutNode::Leaf { pane_id } => out.push(*pane_id),
            LayoutNode::Split { first, second, .. } => {
                first.collect_leaves_into(out);
                second.collect_leaves_into(out);
            }
        }
    }

    /// The first pane ID that appears more than once, if any.
    pub fn duplicate_leaf(&self) -> Option<PaneId> {
        let mut seen = HashSet::new();
        self.leaves().into_iter().find(|id| !seen.insert(*id))
    }

    /// Path from the root to the leaf holding `target`.
    pub fn path_to(&self, target: PaneId) -> Option<Vec<Branch>> {
        let mut path = Vec::new();
        if self.path_into(target, &mut path) {
            Some(path)
        } else {
            None
        }
    }

    fn path_into(&self, target: PaneId, path: &mut Vec<Branch>) -> bool {
        match self {
            LayoutNode::Leaf { pane_id } => *pane_id == target,
            LayoutNode::Split { first, second, .. } => {
                path.push(Branch::First);
                if first.path_into(target, path) {
                    return true;
                }
                path.pop();
                path.push(Branch::Second);
                if second.path_into(target, path) {
                    return true;
                }
                path.pop();
                false
            }
        }
    }

    /// The node reached by following `path` from this node.
    pub fn node_at(&self, path: &[Branch]) -> Option<&LayoutNode> {
        match path.split_first() {
            None => Some(self),
            Some((branch, rest)) => match self {
                LayoutNode::Leaf { .. } => None,
                LayoutNode::Split { first, second, .. } => match branch {
                    Branch::First => first.node_at(rest),
                    Branch::Second => second.node_at(rest),
                },
            },
        }
    }

    /// Get the next pane ID in order after `current`, wrapping around.
    pub fn next_pane(&self, current: PaneId) -> Option<PaneId> {
        let ids = self.leaves();
        if ids.len() <= 1 {
            return None;
        }
        let idx = ids.iter().position(|&id| id == current)?;
        Some(ids[(idx + 1) % ids.len()])
    }

    /// Get the previous pane ID in order before `current`, wrapping around.
    pub fn prev_pane(&self, current: PaneId) -> Option<PaneId> {
        let ids = self.leaves();
        if ids.len() <= 1 {
            return None;
        }
        let idx = ids.iter().position(|&id| id == current)?;
        Some(ids[(idx + ids.len() - 1) % ids.len()])
    }
}
