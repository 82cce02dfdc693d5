//! Routing host commands and group context-menu picks into store mutations.

use tessel_common::events::HostCommand;
use tessel_common::types::{GroupId, Orientation};
use tessel_common::TilingError;
use tracing::debug;

use super::TabGroupStore;

/// Entries of the context menu shown on a tab group in the group list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupMenuAction {
    /// Split the group's active pane into a stacked layout.
    AddVerticalTab,
    /// Split the group's active pane side by side.
    AddHorizontalTab,
}

impl GroupMenuAction {
    pub const ALL: [GroupMenuAction; 2] = [
        GroupMenuAction::AddVerticalTab,
        GroupMenuAction::AddHorizontalTab,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GroupMenuAction::AddVerticalTab => "Add new Vertical Tab",
            GroupMenuAction::AddHorizontalTab => "Add new Horizontal Tab",
        }
    }

    pub fn orientation(self) -> Orientation {
        match self {
            GroupMenuAction::AddVerticalTab => Orientation::Column,
            GroupMenuAction::AddHorizontalTab => Orientation::Row,
        }
    }
}

impl TabGroupStore {
    /// Perform the structural part of a host command. Returns whether the
    /// store changed; non-structural commands are left to the host.
    pub fn apply(&mut self, command: &HostCommand) -> bool {
        match command {
            HostCommand::CreateTab { url } => {
                self.add_tab_group(Some(url.as_str()));
                true
            }
            HostCommand::OpenBackgroundTab { url } => {
                let Some(group) = self.active_group else {
                    self.add_tab_group(Some(url.as_str()));
                    return true;
                };
                let result = self.add_background_tab(group, Some(url.as_str()));
                log_dropped(command, result)
            }
            HostCommand::CreateSplit { url, orientation } => {
                if self.active_group.is_none() {
                    self.add_tab_group(Some(url.as_str()));
                    return true;
                }
                let result = self.split_active_pane(*orientation, Some(url.as_str()));
                log_dropped(command, result)
            }
            HostCommand::CloseActivePane => {
                let Some(group) = self.active_group() else {
                    debug!("close requested with no active group");
                    return false;
                };
                let Some(pane) = group.active_pane() else {
                    return false;
                };
                let id = group.id;
                let result = self.close_pane(id, pane);
                log_dropped(command, result)
            }
            HostCommand::FocusNextPane => self.focus_next_pane(),
            HostCommand::FocusPrevPane => self.focus_prev_pane(),
            HostCommand::CycleTab { forward } => self.cycle_tab(*forward),
            HostCommand::BlurTab
            | HostCommand::CopyText(_)
            | HostCommand::Minimize
            | HostCommand::ToggleMaximize
            | HostCommand::Close => false,
        }
    }

    /// Perform a pick from a group's context menu.
    pub fn apply_group_menu(
        &mut self,
        group: GroupId,
        action: GroupMenuAction,
    ) -> Result<(), TilingError> {
        self.split_group_active_pane(group, action.orientation(), None)?;
        self.set_active_tab_group(group);
        Ok(())
    }
}

fn log_dropped<T>(command: &HostCommand, result: Result<T, TilingError>) -> bool {
    match result {
        Ok(_) => true,
        Err(e) => {
            debug!(?command, error = %e, "host command dropped");
            false
        }
    }
}
