//! Core types for the layout tree: LayoutNode and split paths.

use std::fmt;

use serde::{Deserialize, Serialize};
use tessel_common::types::{Orientation, PaneId};

/// Smallest ratio a split may hold, so neither side collapses.
pub const MIN_RATIO: f64 = 0.05;
/// Largest ratio a split may hold.
pub const MAX_RATIO: f64 = 0.95;
/// Ratio given to every freshly created split.
pub const DEFAULT_RATIO: f64 = 0.5;

/// A binary split tree whose leaves are pane identifiers.
///
/// Mutations never edit a tree in place: every operation returns a new tree,
/// so a snapshot handed to the renderer stays valid while the store moves on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LayoutNode {
    Leaf {
        pane_id: PaneId,
    },
    Split {
        orientation: Orientation,
        ratio: f64,
        first: Box<LayoutNode>,
        second: Box<LayoutNode>,
    },
}

/// One step from a split node to one of its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    First,
    Second,
}

/// Formats a path as `root`, `first`, `first/second`, ...
pub struct PathDisplay<'a>(pub &'a [Branch]);

impl fmt::Display for PathDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("root");
        }
        for (i, branch) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            match branch {
                Branch::First => f.write_str("first")?,
                Branch::Second => f.write_str("second")?,
            }
        }
        Ok(())
    }
}

/// Bound a ratio to `[MIN_RATIO, MAX_RATIO]`. NaN falls back to the default.
pub fn clamp_ratio(ratio: f64) -> f64 {
    if ratio.is_nan() {
        DEFAULT_RATIO
    } else {
        ratio.clamp(MIN_RATIO, MAX_RATIO)
    }
}

impl LayoutNode {
    pub fn leaf(pane_id: PaneId) -> Self {
        LayoutNode::Leaf { pane_id }
    }

    /// A side-by-side split at the default ratio.
    pub fn row(first: LayoutNode, second: LayoutNode) -> Self {
        Self::with_orientation(Orientation::Row, first, second)
    }

    /// A stacked split at the default ratio.
    pub fn column(first: LayoutNode, second: LayoutNode) -> Self {
        Self::with_orientation(Orientation::Column, first, second)
    }

    pub fn with_orientation(orientation: Orientation, first: LayoutNode, second: LayoutNode) -> Self {
        LayoutNode::Split {
            orientation,
            ratio: DEFAULT_RATIO,
            first: Box::new(first),
            second: Box::new(second),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, LayoutNode::Leaf { .. })
    }

    pub fn pane_count(&self) -> usize {
        match self {
            LayoutNode::Leaf { .. } => 1,
            LayoutNode::Split { first, second, .. } => first.pane_count() + second.pane_count(),
        }
    }

    pub fn contains_pane(&self, id: PaneId) -> bool {
        match self {
            LayoutNode::Leaf { pane_id } => *pane_id == id,
            LayoutNode::Split { first, second, .. } => {
                first.contains_pane(id) || second.contains_pane(id)
            }
        }
    }
}
