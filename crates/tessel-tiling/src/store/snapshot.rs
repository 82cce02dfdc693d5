//! Read-only views of the store for renderers and observers.

use std::sync::Arc;

use serde::Serialize;
use tessel_common::types::{GroupId, TabId};

use super::{Tab, TabGroupStore};
use crate::tree::LayoutNode;

/// The store's state at one revision. Layout trees are shared, not copied.
#[derive(Debug, Clone, Serialize)]
pub struct StoreSnapshot {
    pub revision: u64,
    pub active_group: Option<GroupId>,
    pub groups: Vec<GroupSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupSnapshot {
    pub id: GroupId,
    pub active_tab: TabId,
    pub tabs: Vec<Tab>,
    pub layout: Arc<LayoutNode>,
}

impl StoreSnapshot {
    pub fn group(&self, id: GroupId) -> Option<&GroupSnapshot> {
        self.groups.iter().find(|g| g.id == id)
    }
}

impl TabGroupStore {
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            revision: self.revision,
            active_group: self.active_group,
            groups: self
                .groups
                .iter()
                .map(|g| GroupSnapshot {
                    id: g.id,
                    active_tab: g.active,
                    tabs: g.tabs.clone(),
                    layout: g.layout_handle(),
                })
                .collect(),
        }
    }
}
