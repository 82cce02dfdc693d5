mod borders;
mod calculation;
mod types;

pub use borders::SplitBorder;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::LayoutNode;
    use tessel_common::types::{PaneId, Rect};

    fn bounds() -> Rect {
        Rect {
            x: 0.0,
            y: 0.0,
            width: 800.0,
            height: 600.0,
        }
    }

    fn no_gap() -> LayoutEngine {
        LayoutEngine {
            gap: 0,
            outer_padding: 0,
        }
    }

    #[test]
    fn single_pane_fills_bounds() {
        let root = LayoutNode::leaf(PaneId(1));
        let result = no_gap().compute(&root, bounds());
        assert_eq!(result, vec![(PaneId(1), bounds())]);
    }

    #[test]
    fn row_split_divides_width() {
        let root = LayoutNode::row(LayoutNode::leaf(PaneId(1)), LayoutNode::leaf(PaneId(2)));
        let result = no_gap().compute(&root, bounds());
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].0, PaneId(1));
        assert_eq!(result[1].0, PaneId(2));
        assert!((result[0].1.width - 400.0).abs() < 0.01);
        assert!((result[1].1.x - 400.0).abs() < 0.01);
        assert!((result[1].1.height - 600.0).abs() < 0.01);
    }

    #[test]
    fn column_split_divides_height() {
        let root = LayoutNode::column(LayoutNode::leaf(PaneId(1)), LayoutNode::leaf(PaneId(2)))
            .set_ratio(&[], 0.25)
            .unwrap();
        let result = no_gap().compute(&root, bounds());
        assert!((result[0].1.height - 150.0).abs() < 0.01);
        assert!((result[1].1.y - 150.0).abs() < 0.01);
        assert!((result[1].1.height - 450.0).abs() < 0.01);
    }

    #[test]
    fn gap_reduces_available_space() {
        let engine = LayoutEngine {
            gap: 10,
            outer_padding: 0,
        };
        let root = LayoutNode::row(LayoutNode::leaf(PaneId(1)), LayoutNode::leaf(PaneId(2)));
        let result = engine.compute(&root, bounds());
        let total = result[0].1.width + result[1].1.width;
        assert!((total - 790.0).abs() < 0.01);
    }

    #[test]
    fn outer_padding_shrinks_viewport() {
        let engine = LayoutEngine {
            gap: 0,
            outer_padding: 20,
        };
        let root = LayoutNode::leaf(PaneId(1));
        let result = engine.compute(&root, bounds());
        assert!((result[0].1.x - 20.0).abs() < 0.01);
        assert!((result[0].1.width - 760.0).abs() < 0.01);
        assert!((result[0].1.height - 560.0).abs() < 0.01);
    }

    #[test]
    fn nested_splits_cover_all_leaves() {
        let root = LayoutNode::row(
            LayoutNode::leaf(PaneId(1)),
            LayoutNode::column(LayoutNode::leaf(PaneId(2)), LayoutNode::leaf(PaneId(3))),
        );
        let engine = LayoutEngine::default();
        let result = engine.compute(&root, bounds());
        assert_eq!(result.len(), 3);
        assert!(engine.rect_of(&root, bounds(), PaneId(3)).is_some());
        assert!(engine.rect_of(&root, bounds(), PaneId(9)).is_none());
    }
}
