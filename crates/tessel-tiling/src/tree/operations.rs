//! Structural operations on the layout tree: split, remove, swap, set ratio.
//!
//! Each operation borrows the current tree and builds a new one; the input is
//! never modified, and on error there is no new tree at all.

use tessel_common::types::{Orientation, PaneId};
use tessel_common::TilingError;

use super::{clamp_ratio, Branch, LayoutNode, PathDisplay, DEFAULT_RATIO};

impl LayoutNode {
    /// Replace the leaf `target` with a split holding `target` first and
    /// `new_pane` second, at ratio 0.5. The new pane always lands second, so it
    /// shows up to the right (row) or below (column).
    pub fn split(
        &self,
        target: PaneId,
        orientation: Orientation,
        new_pane: PaneId,
    ) -> Result<LayoutNode, TilingError> {
        if self.contains_pane(new_pane) {
            return Err(TilingError::LayoutInvariantViolation(format!(
                "{new_pane} is already in the layout"
            )));
        }
        self.split_node(target, orientation, new_pane)
            .ok_or(TilingError::PaneNotFound(target))
    }

    fn split_node(
        &self,
        target: PaneId,
        orientation: Orientation,
        new_pane: PaneId,
    ) -> Option<LayoutNode> {
        match self {
            LayoutNode::Leaf { pane_id } if *pane_id == target => Some(LayoutNode::Split {
                orientation,
                ratio: DEFAULT_RATIO,
                first: Box::new(LayoutNode::leaf(target)),
                second: Box::new(LayoutNode::leaf(new_pane)),
            }),
            LayoutNode::Leaf { .. } => None,
            LayoutNode::Split {
                orientation: o,
                ratio,
                first,
                second,
            } => {
                if let Some(new_first) = first.split_node(target, orientation, new_pane) {
                    return Some(LayoutNode::Split {
                        orientation: *o,
                        ratio: *ratio,
                        first: Box::new(new_first),
                        second: second.clone(),
                    });
                }
                second
                    .split_node(target, orientation, new_pane)
                    .map(|new_second| LayoutNode::Split {
                        orientation: *o,
                        ratio: *ratio,
                        first: first.clone(),
                        second: Box::new(new_second),
                    })
            }
        }
    }

    /// Remove the leaf `target`. Its parent split is replaced by the sibling
    /// subtree, which keeps its own structure and ratios.
    ///
    /// Returns `Ok(None)` when `target` is the only leaf: the tree is now
    /// empty and the owner decides what that means.
    pub fn remove(&self, target: PaneId) -> Result<Option<LayoutNode>, TilingError> {
        match self {
            LayoutNode::Leaf { pane_id } if *pane_id == target => Ok(None),
            LayoutNode::Leaf { .. } => Err(TilingError::PaneNotFound(target)),
            LayoutNode::Split { .. } => self
                .remove_node(target)
                .map(Some)
                .ok_or(TilingError::PaneNotFound(target)),
        }
    }

    fn remove_node(&self, target: PaneId) -> Option<LayoutNode> {
        let LayoutNode::Split {
            orientation,
            ratio,
            first,
            second,
        } = self
        else {
            return None;
        };

        if matches!(first.as_ref(), LayoutNode::Leaf { pane_id } if *pane_id == target) {
            return Some(second.as_ref().clone());
        }
        if matches!(second.as_ref(), LayoutNode::Leaf { pane_id } if *pane_id == target) {
            return Some(first.as_ref().clone());
        }

        if let Some(new_first) = first.remove_node(target) {
            return Some(LayoutNode::Split {
                orientation: *orientation,
                ratio: *ratio,
                first: Box::new(new_first),
                second: second.clone(),
            });
        }
        second.remove_node(target).map(|new_second| LayoutNode::Split {
            orientation: *orientation,
            ratio: *ratio,
            first: first.clone(),
            second: Box::new(new_second),
        })
    }

    /// Set the ratio of the split at `path`, bounded to `[0.05, 0.95]`.
    pub fn set_ratio(&self, path: &[Branch], ratio: f64) -> Result<LayoutNode, TilingError> {
        self.set_ratio_at(path, clamp_ratio(ratio))
            .ok_or_else(|| TilingError::SplitPathNotFound(PathDisplay(path).to_string()))
    }

    fn set_ratio_at(&self, path: &[Branch], ratio: f64) -> Option<LayoutNode> {
        let LayoutNode::Split {
            orientation,
            ratio: current,
            first,
            second,
        } = self
        else {
            return None;
        };

        match path.split_first() {
            None => Some(LayoutNode::Split {
                orientation: *orientation,
                ratio,
                first: first.clone(),
                second: second.clone(),
            }),
            Some((Branch::First, rest)) => {
                first
                    .set_ratio_at(rest, ratio)
                    .map(|new_first| LayoutNode::Split {
                        orientation: *orientation,
                        ratio: *current,
                        first: Box::new(new_first),
                        second: second.clone(),
                    })
            }
            Some((Branch::Second, rest)) => {
                second
                    .set_ratio_at(rest, ratio)
                    .map(|new_second| LayoutNode::Split {
                        orientation: *orientation,
                        ratio: *current,
                        first: first.clone(),
                        second: Box::new(new_second),
                    })
            }
        }
    }

    /// Exchange the positions of two panes. Both must be present.
    pub fn swap_panes(&self, a: PaneId, b: PaneId) -> Result<LayoutNode, TilingError> {
        if !self.contains_pane(a) {
            return Err(TilingError::PaneNotFound(a));
        }
        if !self.contains_pane(b) {
            return Err(TilingError::PaneNotFound(b));
        }
        Ok(self.map_leaves(&|id: PaneId| {
            if id == a {
                b
            } else if id == b {
                a
            } else {
                id
            }
        }))
    }

    fn map_leaves(&self, f: &impl Fn(PaneId) -> PaneId) -> LayoutNode {
        match self {
            LayoutNode::Leaf { pane_id } => LayoutNode::leaf(f(*pane_id)),
            LayoutNode::Split {
                orientation,
                ratio,
                first,
                second,
            } => LayoutNode::Split {
                orientation: *orientation,
                ratio: *ratio,
                first: Box::new(first.map_leaves(f)),
                second: Box::new(second.map_leaves(f)),
            },
        }
    }

    /// A copy of this tree with every ratio pulled into the allowed bounds.
    pub fn with_clamped_ratios(&self) -> LayoutNode {
        match self {
            LayoutNode::Leaf { .. } => self.clone(),
            LayoutNode::Split {
                orientation,
                ratio,
                first,
                second,
            } => LayoutNode::Split {
                orientation: *orientation,
                ratio: clamp_ratio(*ratio),
                first: Box::new(first.with_clamped_ratios()),
                second: Box::new(second.with_clamped_ratios()),
            },
        }
    }
}
