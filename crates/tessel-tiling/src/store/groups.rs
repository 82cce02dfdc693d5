//! Group-level operations: create, activate, reorder, close.

use std::collections::HashSet;
use std::sync::Arc;

use tessel_common::events::ShellEvent;
use tessel_common::types::GroupId;
use tessel_common::TilingError;
use tracing::{debug, info, warn};

use super::{Tab, TabGroup, TabGroupStore};
use crate::tree::LayoutNode;

impl TabGroupStore {
    /// Append a new group holding one tab in one pane, and make it active.
    pub fn add_tab_group(&mut self, url: Option<&str>) -> GroupId {
        let id = GroupId(self.next_group);
        let tab_id = self.peek_tab_id();
        let pane = self.peek_pane_id();
        self.next_group += 1;
        self.next_tab += 1;
        self.next_pane += 1;

        let url = url.unwrap_or(&self.default_url).to_string();
        self.groups.push(TabGroup {
            id,
            tabs: vec![Tab::new(tab_id, url.as_str(), Some(pane))],
            layout: Arc::new(LayoutNode::leaf(pane)),
            active: tab_id,
        });
        self.active_group = Some(id);
        self.emit(ShellEvent::GroupOpened(id));
        self.emit(ShellEvent::PaneOpened { group: id, pane });
        self.commit();

        info!(group = %id, %pane, %url, "tab group opened");
        id
    }

    /// Make `id` the active group. Unknown IDs are ignored.
    pub fn set_active_tab_group(&mut self, id: GroupId) -> bool {
        if self.active_group == Some(id) {
            return true;
        }
        if self.group(id).is_none() {
            debug!(group = %id, "ignoring activation of unknown group");
            return false;
        }
        self.active_group = Some(id);
        self.commit();
        debug!(group = %id, "active group changed");
        true
    }

    /// Replace the group order with `order`, which must name every existing
    /// group exactly once.
    pub fn update_tab_group_order(&mut self, order: &[GroupId]) -> Result<(), TilingError> {
        let mismatch = TilingError::OrderMismatch {
            expected: self.groups.len(),
            got: order.len(),
        };
        if order.len() != self.groups.len() {
            warn!(error = %mismatch, "group order rejected");
            return Err(mismatch);
        }
        let unique: HashSet<_> = order.iter().collect();
        if unique.len() != order.len() || order.iter().any(|id| self.group(*id).is_none()) {
            warn!(error = %mismatch, "group order rejected");
            return Err(mismatch);
        }

        let mut reordered = Vec::with_capacity(self.groups.len());
        for id in order {
            let idx = self.group_index(*id)?;
            reordered.push(self.groups[idx].clone());
        }
        self.groups = reordered;
        self.commit();
        debug!(groups = self.groups.len(), "group order updated");
        Ok(())
    }

    /// Close a whole group with all of its tabs.
    pub fn close_tab_group(&mut self, id: GroupId) -> Result<Option<GroupId>, TilingError> {
        let idx = self.group_index(id)?;
        Ok(self.remove_group_at(idx))
    }

    /// Drop the group at `idx`. When it was active, the group that slides
    /// into its position takes over, or the new last group if it was last.
    /// Returns the active group afterwards.
    pub(super) fn remove_group_at(&mut self, idx: usize) -> Option<GroupId> {
        let group = self.groups.remove(idx);
        for pane in group.layout.leaves() {
            self.emit(ShellEvent::PaneClosed {
                group: group.id,
                pane,
            });
        }
        self.emit(ShellEvent::GroupClosed(group.id));

        if self.active_group == Some(group.id) {
            self.active_group = self
                .groups
                .get(idx)
                .or_else(|| self.groups.last())
                .map(|g| g.id);
        }
        self.commit();

        info!(
            group = %group.id,
            tabs = group.tabs.len(),
            active = ?self.active_group,
            "tab group closed"
        );
        self.active_group
    }
}
