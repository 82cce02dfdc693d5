//! Split borders for drag-resize hit testing.
//!
//! Walks the tree the same way [`LayoutEngine::compute`] does and produces
//! one [`SplitBorder`] per split node: where its divider sits and the path
//! that addresses it, so a finished drag can be committed with
//! [`TabGroupStore::set_split_ratio`](crate::TabGroupStore::set_split_ratio).

use tessel_common::types::{Orientation, Rect};

use crate::tree::{Branch, LayoutNode};

use super::LayoutEngine;

/// The divider between the two children of one split.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitBorder {
    /// Path from the root to the split this divider belongs to.
    pub path: Vec<Branch>,
    /// `Row` means a vertical divider line.
    pub orientation: Orientation,
    /// Centre of the divider along the split axis (x for `Row`, y for `Column`).
    pub position: f64,
    /// Extent of the divider across the split axis.
    pub start: f64,
    pub end: f64,
    /// Area the whole split occupies.
    pub bounds: Rect,
    pub ratio: f64,
}

impl SplitBorder {
    /// Half-width of the grab zone on each side of the divider.
    const HIT_HALF_WIDTH: f64 = 6.0;

    pub fn hit_test(&self, x: f64, y: f64) -> bool {
        let (along, across) = match self.orientation {
            Orientation::Row => (x, y),
            Orientation::Column => (y, x),
        };
        (along - self.position).abs() <= Self::HIT_HALF_WIDTH
            && across >= self.start
            && across <= self.end
    }
}

impl LayoutEngine {
    /// Every split divider of `root` inside `viewport`, outermost first.
    pub fn borders(&self, root: &LayoutNode, viewport: Rect) -> Vec<SplitBorder> {
        let mut out = Vec::new();
        let mut path = Vec::new();
        self.walk_borders(root, self.content_bounds(viewport), &mut path, &mut out);
        out
    }

    /// The innermost divider under the pointer.
    pub fn border_at(&self, root: &LayoutNode, viewport: Rect, x: f64, y: f64) -> Option<SplitBorder> {
        self.borders(root, viewport)
            .into_iter()
            .rev()
            .find(|b| b.hit_test(x, y))
    }

    /// The ratio that puts `border`'s divider at pointer coordinate `pos`
    /// along its axis. Not yet bounded; the tree clamps on commit.
    pub fn ratio_at(&self, border: &SplitBorder, pos: f64) -> f64 {
        let available = self.available(border.orientation, border.bounds);
        if available <= 0.0 {
            return border.ratio;
        }
        let origin = match border.orientation {
            Orientation::Row => border.bounds.x,
            Orientation::Column => border.bounds.y,
        };
        (pos - origin - self.gap as f64 / 2.0) / available
    }

    fn walk_borders(
        &self,
        node: &LayoutNode,
        bounds: Rect,
        path: &mut Vec<Branch>,
        out: &mut Vec<SplitBorder>,
    ) {
        let LayoutNode::Split {
            orientation,
            ratio,
            first,
            second,
        } = node
        else {
            return;
        };

        let (a, b) = self.split_rects(*orientation, *ratio, bounds);
        let half_gap = self.gap as f64 / 2.0;
        let (position, start, end) = match orientation {
            Orientation::Row => (a.x + a.width + half_gap, bounds.y, bounds.y + bounds.height),
            Orientation::Column => (a.y + a.height + half_gap, bounds.x, bounds.x + bounds.width),
        };
        out.push(SplitBorder {
            path: path.clone(),
            orientation: *orientation,
            position,
            start,
            end,
            bounds,
            ratio: *ratio,
        });

        path.push(Branch::First);
        self.walk_borders(first, a, path, out);
        path.pop();
        path.push(Branch::Second);
        self.walk_borders(second, b, path, out);
        path.pop();
    }
}
