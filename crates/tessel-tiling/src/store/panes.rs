//! Pane-level operations: split, close, resize, swap, focus, and wholesale
//! layout replacement.

use std::sync::Arc;

use tessel_common::events::ShellEvent;
use tessel_common::types::{GroupId, Orientation, PaneId};
use tessel_common::TilingError;
use tracing::{debug, warn};

use super::invariant::check_layout;
use super::{CloseOutcome, Tab, TabGroupStore};
use crate::tree::{Branch, LayoutNode};

impl TabGroupStore {
    /// Split the active pane of the active group. The new tab lands in the
    /// new pane and becomes active.
    pub fn split_active_pane(
        &mut self,
        orientation: Orientation,
        url: Option<&str>,
    ) -> Result<PaneId, TilingError> {
        let group = self.active_group.ok_or(TilingError::NoActiveGroup)?;
        self.split_group_active_pane(group, orientation, url)
    }

    /// Split the active pane of `group`.
    pub fn split_group_active_pane(
        &mut self,
        group: GroupId,
        orientation: Orientation,
        url: Option<&str>,
    ) -> Result<PaneId, TilingError> {
        let idx = self.group_index(group)?;
        let target = self.groups[idx].active_pane().ok_or_else(|| {
            TilingError::LayoutInvariantViolation(format!("{group} has no visible active tab"))
        })?;
        self.split_pane(group, target, orientation, url)
    }

    /// Split `target` in `group`, placing a new tab in the new pane.
    pub fn split_pane(
        &mut self,
        group: GroupId,
        target: PaneId,
        orientation: Orientation,
        url: Option<&str>,
    ) -> Result<PaneId, TilingError> {
        let idx = self.group_index(group)?;
        let new_pane = self.peek_pane_id();
        let new_tab = self.peek_tab_id();
        let url = url.unwrap_or(&self.default_url).to_string();

        let current = &self.groups[idx];
        let layout = current.layout.split(target, orientation, new_pane)?;
        let mut tabs = current.tabs.clone();
        tabs.push(Tab::new(new_tab, url, Some(new_pane)));
        check_layout(&layout, &tabs)?;

        self.next_pane += 1;
        self.next_tab += 1;
        let entry = &mut self.groups[idx];
        entry.layout = Arc::new(layout);
        entry.tabs = tabs;
        entry.active = new_tab;
        self.emit(ShellEvent::PaneOpened {
            group,
            pane: new_pane,
        });
        self.commit();

        debug!(%group, %target, %new_pane, %orientation, "pane split");
        Ok(new_pane)
    }

    /// Close `pane` and its tab. When it was the last pane the whole group
    /// goes away.
    pub fn close_pane(&mut self, group: GroupId, pane: PaneId) -> Result<CloseOutcome, TilingError> {
        let idx = self.group_index(group)?;
        let current = &self.groups[idx];

        let Some(layout) = current.layout.remove(pane)? else {
            let next_active = self.remove_group_at(idx);
            return Ok(CloseOutcome::GroupClosed { group, next_active });
        };

        let mut tabs = current.tabs.clone();
        tabs.retain(|t| t.pane_id != Some(pane));

        let closing_active = current.active_pane() == Some(pane);
        let active = if closing_active {
            // Focus moves to the pane that followed the closed one.
            let successor = current
                .layout
                .next_pane(pane)
                .ok_or(TilingError::PaneNotFound(pane))?;
            tabs.iter()
                .find(|t| t.pane_id == Some(successor))
                .map(|t| t.id)
                .ok_or_else(|| {
                    TilingError::LayoutInvariantViolation(format!("{successor} has no tab"))
                })?
        } else {
            current.active
        };
        check_layout(&layout, &tabs)?;

        let entry = &mut self.groups[idx];
        entry.layout = Arc::new(layout);
        entry.tabs = tabs;
        entry.active = active;
        self.emit(ShellEvent::PaneClosed { group, pane });
        self.commit();

        debug!(%group, %pane, panes = self.groups[idx].pane_count(), "pane closed");
        Ok(CloseOutcome::PaneClosed { group, pane })
    }

    /// Replace the layout of `group` wholesale, e.g. after a divider drag in
    /// the renderer. The tree must hold exactly the panes the group shows;
    /// out-of-range ratios are clamped.
    pub fn updated_layout(&mut self, group: GroupId, layout: LayoutNode) -> Result<(), TilingError> {
        let idx = self.group_index(group)?;
        let layout = layout.with_clamped_ratios();
        if let Err(e) = check_layout(&layout, &self.groups[idx].tabs) {
            warn!(%group, error = %e, "layout update rejected");
            return Err(e);
        }
        self.groups[idx].layout = Arc::new(layout);
        self.commit();
        debug!(%group, "layout replaced");
        Ok(())
    }

    /// Set the ratio of one split in `group`.
    pub fn set_split_ratio(
        &mut self,
        group: GroupId,
        path: &[Branch],
        ratio: f64,
    ) -> Result<(), TilingError> {
        let idx = self.group_index(group)?;
        let layout = self.groups[idx].layout.set_ratio(path, ratio)?;
        self.groups[idx].layout = Arc::new(layout);
        self.commit();
        Ok(())
    }

    /// Exchange the positions of two panes in `group`.
    pub fn swap_panes(&mut self, group: GroupId, a: PaneId, b: PaneId) -> Result<(), TilingError> {
        let idx = self.group_index(group)?;
        let layout = self.groups[idx].layout.swap_panes(a, b)?;
        self.groups[idx].layout = Arc::new(layout);
        self.commit();
        debug!(%group, %a, %b, "panes swapped");
        Ok(())
    }

    /// Make the tab shown in `pane` the active one of `group`.
    pub fn focus_pane(&mut self, group: GroupId, pane: PaneId) -> bool {
        let Ok(idx) = self.group_index(group) else {
            return false;
        };
        let Some(tab) = self.groups[idx].tab_for_pane(pane).map(|t| t.id) else {
            return false;
        };
        if self.groups[idx].active != tab {
            self.groups[idx].active = tab;
            self.commit();
        }
        true
    }

    /// Move focus to the next pane of the active group, wrapping.
    pub fn focus_next_pane(&mut self) -> bool {
        self.step_focus(LayoutNode::next_pane)
    }

    /// Move focus to the previous pane of the active group, wrapping.
    pub fn focus_prev_pane(&mut self) -> bool {
        self.step_focus(LayoutNode::prev_pane)
    }

    fn step_focus(&mut self, step: fn(&LayoutNode, PaneId) -> Option<PaneId>) -> bool {
        let Some(group) = self.active_group() else {
            return false;
        };
        let Some(target) = group.active_pane().and_then(|p| step(&group.layout, p)) else {
            return false;
        };
        let id = group.id;
        self.focus_pane(id, target)
    }
}
