//! Core types and constructors for the tab group store.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tessel_common::events::ShellEvent;
use tessel_common::types::{GroupId, PaneId, TabId};
use tessel_common::TilingError;

use crate::tree::LayoutNode;

/// URL loaded when a tab is opened without one.
pub const DEFAULT_URL: &str = "about:blank";

/// A navigable unit of content. `pane_id` is `Some` while the tab is the
/// one shown in that pane, `None` while it waits in the background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub id: TabId,
    pub url: String,
    pub title: String,
    pub pane_id: Option<PaneId>,
}

impl Tab {
    pub(crate) fn new(id: TabId, url: impl Into<String>, pane_id: Option<PaneId>) -> Self {
        Self {
            id,
            url: url.into(),
            title: String::new(),
            pane_id,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.pane_id.is_some()
    }

    /// The title, or the URL while the page has not reported one.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.url
        } else {
            &self.title
        }
    }
}

/// A set of tabs sharing one layout tree and one active selection.
#[derive(Debug, Clone)]
pub struct TabGroup {
    pub(super) id: GroupId,
    pub(super) tabs: Vec<Tab>,
    pub(super) layout: Arc<LayoutNode>,
    pub(super) active: TabId,
}

impl TabGroup {
    pub fn id(&self) -> GroupId {
        self.id
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn layout(&self) -> &LayoutNode {
        &self.layout
    }

    /// Shared handle to the current tree; stays valid after later mutations.
    pub fn layout_handle(&self) -> Arc<LayoutNode> {
        Arc::clone(&self.layout)
    }

    pub fn active_tab_id(&self) -> TabId {
        self.active
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.tab(self.active)
    }

    /// The pane showing the active tab.
    pub fn active_pane(&self) -> Option<PaneId> {
        self.active_tab().and_then(|t| t.pane_id)
    }

    pub fn tab(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn tab_for_pane(&self, pane: PaneId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.pane_id == Some(pane))
    }

    pub fn pane_count(&self) -> usize {
        self.layout.pane_count()
    }

    pub fn contains_pane(&self, pane: PaneId) -> bool {
        self.layout.contains_pane(pane)
    }
}

/// A pane currently on screen, with the URL its surface should load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisiblePane {
    pub group: GroupId,
    pub pane: PaneId,
    pub tab: TabId,
    pub url: String,
}

/// What a close operation ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// A pane was removed; the group lives on.
    PaneClosed { group: GroupId, pane: PaneId },
    /// A background tab was dropped; the layout is unchanged.
    TabClosed { group: GroupId, tab: TabId },
    /// The last pane went away and took the group with it.
    GroupClosed {
        group: GroupId,
        next_active: Option<GroupId>,
    },
}

/// Owns the ordered tab group collection and the active group.
///
/// All structural mutations go through the methods on this type. Each one
/// either applies completely or returns an error and leaves the store as it
/// was.
#[derive(Debug)]
pub struct TabGroupStore {
    /// Groups in user-visible order.
    pub(super) groups: Vec<TabGroup>,
    pub(super) active_group: Option<GroupId>,
    pub(super) default_url: String,
    pub(super) next_group: u32,
    pub(super) next_tab: u32,
    pub(super) next_pane: u32,
    /// Bumped on every committed mutation.
    pub(super) revision: u64,
    /// Lifecycle events waiting to be drained by the host.
    pub(super) events: Vec<ShellEvent>,
}

impl TabGroupStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::with_default_url(DEFAULT_URL)
    }

    /// Create an empty store that opens `url` when no URL is given.
    pub fn with_default_url(url: impl Into<String>) -> Self {
        Self {
            groups: Vec::new(),
            active_group: None,
            default_url: url.into(),
            next_group: 1,
            next_tab: 1,
            next_pane: 1,
            revision: 0,
            events: Vec::new(),
        }
    }

    // -- Accessors --

    pub fn groups(&self) -> &[TabGroup] {
        &self.groups
    }

    pub fn group(&self, id: GroupId) -> Option<&TabGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Group IDs in display order.
    pub fn order(&self) -> Vec<GroupId> {
        self.groups.iter().map(|g| g.id).collect()
    }

    pub fn active_group_id(&self) -> Option<GroupId> {
        self.active_group
    }

    pub fn active_group(&self) -> Option<&TabGroup> {
        self.active_group.and_then(|id| self.group(id))
    }

    pub fn default_url(&self) -> &str {
        &self.default_url
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Every pane on screen across all groups, in group then leaf order.
    pub fn visible_panes(&self) -> Vec<VisiblePane> {
        let mut out = Vec::new();
        for group in &self.groups {
            for pane in group.layout.leaves() {
                if let Some(tab) = group.tab_for_pane(pane) {
                    out.push(VisiblePane {
                        group: group.id,
                        pane,
                        tab: tab.id,
                        url: tab.url.clone(),
                    });
                }
            }
        }
        out
    }

    /// The group and tab currently shown in `pane`.
    pub fn locate_pane(&self, pane: PaneId) -> Option<(GroupId, TabId)> {
        self.groups
            .iter()
            .find_map(|g| g.tab_for_pane(pane).map(|t| (g.id, t.id)))
    }

    /// Take all lifecycle events recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<ShellEvent> {
        std::mem::take(&mut self.events)
    }

    // -- Internal helpers --

    pub(super) fn group_index(&self, id: GroupId) -> Result<usize, TilingError> {
        self.groups
            .iter()
            .position(|g| g.id == id)
            .ok_or(TilingError::GroupNotFound(id))
    }

    pub(super) fn peek_pane_id(&self) -> PaneId {
        PaneId(self.next_pane)
    }

    pub(super) fn peek_tab_id(&self) -> TabId {
        TabId(self.next_tab)
    }

    pub(super) fn commit(&mut self) {
        self.revision += 1;
    }

    pub(super) fn emit(&mut self, event: ShellEvent) {
        self.events.push(event);
    }
}

impl Default for TabGroupStore {
    fn default() -> Self {
        Self::new()
    }
}
