//! Layout calculation: recursive tree-to-rect computation.

use tessel_common::types::{Orientation, PaneId, Rect};

use crate::tree::LayoutNode;

use super::LayoutEngine;

impl LayoutEngine {
    /// Map every leaf of `root` to its rectangle inside `viewport`, in leaf order.
    pub fn compute(&self, root: &LayoutNode, viewport: Rect) -> Vec<(PaneId, Rect)> {
        let mut results = Vec::new();
        self.layout_node(root, self.content_bounds(viewport), &mut results);
        results
    }

    /// The rectangle of a single pane, if it is in the tree.
    pub fn rect_of(&self, root: &LayoutNode, viewport: Rect, pane: PaneId) -> Option<Rect> {
        self.compute(root, viewport)
            .into_iter()
            .find(|(id, _)| *id == pane)
            .map(|(_, r)| r)
    }

    /// `viewport` minus the outer padding.
    pub(super) fn content_bounds(&self, viewport: Rect) -> Rect {
        let pad = self.outer_padding as f64;
        Rect {
            x: viewport.x + pad,
            y: viewport.y + pad,
            width: (viewport.width - 2.0 * pad).max(0.0),
            height: (viewport.height - 2.0 * pad).max(0.0),
        }
    }

    /// Space left for the two children of a split once the gap is taken out.
    pub(super) fn available(&self, orientation: Orientation, bounds: Rect) -> f64 {
        let extent = match orientation {
            Orientation::Row => bounds.width,
            Orientation::Column => bounds.height,
        };
        (extent - self.gap as f64).max(0.0)
    }

    /// The rectangles of the two children of a split occupying `bounds`.
    pub(super) fn split_rects(&self, orientation: Orientation, ratio: f64, bounds: Rect) -> (Rect, Rect) {
        let gap = self.gap as f64;
        let available = self.available(orientation, bounds);
        let first = available * ratio;
        let second = (available - first).max(0.0);
        match orientation {
            Orientation::Row => (
                Rect {
                    x: bounds.x,
                    y: bounds.y,
                    width: first,
                    height: bounds.height,
                },
                Rect {
                    x: bounds.x + first + gap,
                    y: bounds.y,
                    width: second,
                    height: bounds.height,
                },
            ),
            Orientation::Column => (
                Rect {
                    x: bounds.x,
                    y: bounds.y,
                    width: bounds.width,
                    height: first,
                },
                Rect {
                    x: bounds.x,
                    y: bounds.y + first + gap,
                    width: bounds.width,
                    height: second,
                },
            ),
        }
    }

    fn layout_node(&self, node: &LayoutNode, bounds: Rect, out: &mut Vec<(PaneId, Rect)>) {
        match node {
            LayoutNode::Leaf { pane_id } => {
                out.push((*pane_id, bounds));
            }
            LayoutNode::Split {
                orientation,
                ratio,
                first,
                second,
            } => {
                let (a, b) = self.split_rects(*orientation, *ratio, bounds);
                self.layout_node(first, a, out);
                self.layout_node(second, b, out);
            }
        }
    }
}
