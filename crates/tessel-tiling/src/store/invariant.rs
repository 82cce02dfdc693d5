//! The structural check every store mutation runs before it commits.

use std::collections::HashSet;

use tessel_common::TilingError;

use super::Tab;
use crate::tree::LayoutNode;

/// Verify that the layout's leaves are exactly the panes of the visible tabs,
/// with no pane appearing twice on either side.
pub(super) fn check_layout(layout: &LayoutNode, tabs: &[Tab]) -> Result<(), TilingError> {
    if let Some(dup) = layout.duplicate_leaf() {
        return Err(TilingError::LayoutInvariantViolation(format!(
            "{dup} appears more than once in the layout"
        )));
    }

    let mut tab_panes = HashSet::new();
    for tab in tabs {
        if let Some(pane) = tab.pane_id {
            if !tab_panes.insert(pane) {
                return Err(TilingError::LayoutInvariantViolation(format!(
                    "{pane} is shown by more than one tab"
                )));
            }
        }
    }

    let leaves: HashSet<_> = layout.leaves().into_iter().collect();
    if let Some(missing) = tab_panes.difference(&leaves).min() {
        return Err(TilingError::LayoutInvariantViolation(format!(
            "{missing} has a tab but no place in the layout"
        )));
    }
    if let Some(extra) = leaves.difference(&tab_panes).min() {
        return Err(TilingError::LayoutInvariantViolation(format!(
            "{extra} is in the layout but no tab shows it"
        )));
    }
    Ok(())
}
