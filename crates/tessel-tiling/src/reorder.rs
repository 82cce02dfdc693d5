//! Drag-and-drop reordering of the tab group list.
//!
//! A drag produces one store write, on drop. Intermediate hover states never
//! touch the store.

use serde::{Deserialize, Serialize};
use tessel_common::types::GroupId;
use tessel_common::TilingError;
use tracing::debug;

use crate::store::TabGroupStore;

/// Where the dragged group lands relative to the drop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropPosition {
    Before,
    After,
}

impl DropPosition {
    /// Infer the side from list positions: dragging down lands after the
    /// target, dragging up lands before it.
    pub fn from_indices(from: usize, to: usize) -> Self {
        if from < to {
            DropPosition::After
        } else {
            DropPosition::Before
        }
    }
}

/// A finished drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEnd {
    pub dragged: GroupId,
    pub target: GroupId,
    pub position: DropPosition,
}

/// Compute the order after moving `dragged` next to `target`. Returns `None`
/// when the move is meaningless: same group, or either ID not in `order`.
pub fn reordered(order: &[GroupId], drag: DragEnd) -> Option<Vec<GroupId>> {
    if drag.dragged == drag.target {
        return None;
    }
    if !order.contains(&drag.dragged) || !order.contains(&drag.target) {
        return None;
    }
    let mut next: Vec<GroupId> = order
        .iter()
        .copied()
        .filter(|id| *id != drag.dragged)
        .collect();
    let target = next.iter().position(|id| *id == drag.target)?;
    let at = match drag.position {
        DropPosition::Before => target,
        DropPosition::After => target + 1,
    };
    next.insert(at, drag.dragged);
    Some(next)
}

/// Tracks the group being dragged between drag start and drop.
#[derive(Debug, Default)]
pub struct ReorderController {
    dragging: Option<GroupId>,
}

impl ReorderController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_drag(&mut self, group: GroupId) {
        self.dragging = Some(group);
    }

    pub fn dragging(&self) -> Option<GroupId> {
        self.dragging
    }

    pub fn cancel(&mut self) {
        self.dragging = None;
    }

    /// Finish the drag in progress onto `target`. Returns whether the order
    /// changed.
    pub fn on_drag_end(
        &mut self,
        store: &mut TabGroupStore,
        target: GroupId,
        position: DropPosition,
    ) -> Result<bool, TilingError> {
        let Some(dragged) = self.dragging.take() else {
            return Ok(false);
        };
        Self::apply_drop(
            store,
            DragEnd {
                dragged,
                target,
                position,
            },
        )
    }

    /// Apply a drop as a single order update. A drop that no longer makes
    /// sense, e.g. because a group closed mid-drag, is a no-op.
    pub fn apply_drop(store: &mut TabGroupStore, drag: DragEnd) -> Result<bool, TilingError> {
        let Some(order) = reordered(&store.order(), drag) else {
            debug!(dragged = %drag.dragged, target = %drag.target, "drop ignored");
            return Ok(false);
        };
        store.update_tab_group_order(&order)?;
        debug!(dragged = %drag.dragged, target = %drag.target, "groups reordered");
        Ok(true)
    }
}
