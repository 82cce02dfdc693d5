//! Tab-level operations: background tabs, switching the tab shown in a pane,
//! and per-tab navigation metadata.

use tessel_common::types::{GroupId, PaneId, TabId};
use tessel_common::TilingError;
use tracing::debug;

use super::invariant::check_layout;
use super::{CloseOutcome, Tab, TabGroupStore};

impl TabGroupStore {
    /// Add a tab to `group` without showing it.
    pub fn add_background_tab(
        &mut self,
        group: GroupId,
        url: Option<&str>,
    ) -> Result<TabId, TilingError> {
        let idx = self.group_index(group)?;
        let tab = self.peek_tab_id();
        let url = url.unwrap_or(&self.default_url).to_string();
        self.next_tab += 1;
        self.groups[idx].tabs.push(Tab::new(tab, url, None));
        self.commit();
        debug!(%group, %tab, "background tab added");
        Ok(tab)
    }

    /// Make `tab` the active tab of `group`. A background tab takes over the
    /// pane of the previously active tab, which moves to the background.
    pub fn show_tab(&mut self, group: GroupId, tab: TabId) -> Result<(), TilingError> {
        let idx = self.group_index(group)?;
        let current = &self.groups[idx];
        let target = current.tab(tab).ok_or(TilingError::TabNotFound(tab))?;

        if target.is_visible() {
            if current.active != tab {
                self.groups[idx].active = tab;
                self.commit();
            }
            return Ok(());
        }

        let pane = current.active_pane().ok_or_else(|| {
            TilingError::LayoutInvariantViolation(format!("{group} has no visible active tab"))
        })?;
        let previous = current.active;
        let mut tabs = current.tabs.clone();
        for t in &mut tabs {
            if t.id == previous {
                t.pane_id = None;
            } else if t.id == tab {
                t.pane_id = Some(pane);
            }
        }
        check_layout(&current.layout, &tabs)?;

        let entry = &mut self.groups[idx];
        entry.tabs = tabs;
        entry.active = tab;
        self.commit();
        debug!(%group, %tab, %pane, "tab shown");
        Ok(())
    }

    /// Close one tab. A visible tab takes its pane with it; a background tab
    /// is simply dropped.
    pub fn close_tab(&mut self, group: GroupId, tab: TabId) -> Result<CloseOutcome, TilingError> {
        let idx = self.group_index(group)?;
        let target = self.groups[idx]
            .tab(tab)
            .ok_or(TilingError::TabNotFound(tab))?;
        if let Some(pane) = target.pane_id {
            return self.close_pane(group, pane);
        }
        self.groups[idx].tabs.retain(|t| t.id != tab);
        self.commit();
        debug!(%group, %tab, "background tab closed");
        Ok(CloseOutcome::TabClosed { group, tab })
    }

    /// Bring the next (or previous) background tab of the active group into
    /// the active pane. Returns false when there is nothing to cycle to.
    pub fn cycle_tab(&mut self, forward: bool) -> bool {
        let Some(group) = self.active_group() else {
            return false;
        };
        let len = group.tabs.len();
        let Some(start) = group.tabs.iter().position(|t| t.id == group.active) else {
            return false;
        };
        let candidate = (1..len)
            .map(|step| {
                if forward {
                    (start + step) % len
                } else {
                    (start + len - step) % len
                }
            })
            .map(|i| &group.tabs[i])
            .find(|t| !t.is_visible())
            .map(|t| t.id);

        let id = group.id;
        match candidate {
            Some(tab) => self.show_tab(id, tab).is_ok(),
            None => false,
        }
    }

    /// Remember the URL a pane's page navigated to.
    pub fn record_navigation(&mut self, pane: PaneId, url: &str) -> bool {
        self.edit_tab_in_pane(pane, |tab| tab.url = url.to_string())
    }

    /// Remember the title a pane's page reported.
    pub fn set_tab_title(&mut self, pane: PaneId, title: &str) -> bool {
        self.edit_tab_in_pane(pane, |tab| tab.title = title.to_string())
    }

    fn edit_tab_in_pane(&mut self, pane: PaneId, edit: impl FnOnce(&mut Tab)) -> bool {
        let tab = self
            .groups
            .iter_mut()
            .flat_map(|g| g.tabs.iter_mut())
            .find(|t| t.pane_id == Some(pane));
        match tab {
            Some(tab) => {
                edit(tab);
                self.commit();
                true
            }
            None => false,
        }
    }
}
