//! Context menu for links and selected text inside a surface.
//!
//! Building the menu is pure: [`build_context_menu`] maps what was clicked
//! to entries, and each entry's [`MenuAction`] converts to a
//! [`HostCommand`]. The host draws the menu and reports the pick.

use serde::{Deserialize, Serialize};
use tessel_common::{HostCommand, Orientation};

/// Something the user can pick from a context menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum MenuAction {
    OpenInNewTab { url: String },
    OpenInBackground { url: String },
    OpenInSplit { url: String, orientation: Orientation },
    CopySelection { text: String },
}

impl MenuAction {
    pub fn into_command(self) -> HostCommand {
        match self {
            MenuAction::OpenInNewTab { url } => HostCommand::CreateTab { url },
            MenuAction::OpenInBackground { url } => HostCommand::OpenBackgroundTab { url },
            MenuAction::OpenInSplit { url, orientation } => {
                HostCommand::CreateSplit { url, orientation }
            }
            MenuAction::CopySelection { text } => HostCommand::CopyText(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum MenuEntry {
    Item { label: String, action: MenuAction },
    Submenu { label: String, entries: Vec<MenuEntry> },
}

impl MenuEntry {
    fn item(label: &str, action: MenuAction) -> Self {
        MenuEntry::Item {
            label: label.to_string(),
            action,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            MenuEntry::Item { label, .. } | MenuEntry::Submenu { label, .. } => label,
        }
    }
}

/// Every pickable action in `entries`, submenus included.
pub fn menu_actions(entries: &[MenuEntry]) -> Vec<MenuAction> {
    let mut actions = Vec::new();
    for entry in entries {
        match entry {
            MenuEntry::Item { action, .. } => actions.push(action.clone()),
            MenuEntry::Submenu { entries, .. } => actions.extend(menu_actions(entries)),
        }
    }
    actions
}

/// Menu entries for a right click. Empty when nothing actionable was under
/// the pointer, in which case no menu should be shown.
pub fn build_context_menu(info: &crate::events::ContextInfo) -> Vec<MenuEntry> {
    let mut entries = Vec::new();

    if let Some(url) = info.link_url.as_deref().filter(|u| !u.is_empty()) {
        entries.push(MenuEntry::item(
            "Open Link in New Tab",
            MenuAction::OpenInNewTab {
                url: url.to_string(),
            },
        ));
        entries.push(MenuEntry::item(
            "Open Link in Background Tab",
            MenuAction::OpenInBackground {
                url: url.to_string(),
            },
        ));
        entries.push(MenuEntry::Submenu {
            label: "Open Link in Split View".to_string(),
            entries: vec![
                MenuEntry::item(
                    "Vertical Split",
                    MenuAction::OpenInSplit {
                        url: url.to_string(),
                        orientation: Orientation::Column,
                    },
                ),
                MenuEntry::item(
                    "Horizontal Split",
                    MenuAction::OpenInSplit {
                        url: url.to_string(),
                        orientation: Orientation::Row,
                    },
                ),
            ],
        });
    }

    if let Some(text) = info.selection.as_deref().filter(|t| !t.trim().is_empty()) {
        entries.push(MenuEntry::item(
            "Copy Text",
            MenuAction::CopySelection {
                text: text.to_string(),
            },
        ));
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::ContextInfo;

    fn link(url: &str) -> ContextInfo {
        ContextInfo {
            link_url: Some(url.into()),
            selection: None,
        }
    }

    #[test]
    fn link_menu_offers_tab_and_splits() {
        let menu = build_context_menu(&link("https://a.com"));
        let labels: Vec<&str> = menu.iter().map(MenuEntry::label).collect();
        assert_eq!(
            labels,
            [
                "Open Link in New Tab",
                "Open Link in Background Tab",
                "Open Link in Split View"
            ]
        );

        let MenuEntry::Submenu { entries, .. } = &menu[2] else {
            panic!("expected split submenu");
        };
        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[0],
            MenuEntry::Item {
                label: "Vertical Split".into(),
                action: MenuAction::OpenInSplit {
                    url: "https://a.com".into(),
                    orientation: Orientation::Column,
                },
            }
        );
    }

    #[test]
    fn selection_menu_offers_copy() {
        let info = ContextInfo {
            link_url: None,
            selection: Some("hello".into()),
        };
        let menu = build_context_menu(&info);
        assert_eq!(menu.len(), 1);
        assert_eq!(menu[0].label(), "Copy Text");
    }

    #[test]
    fn link_with_selection_has_all_entries() {
        let info = ContextInfo {
            link_url: Some("https://a.com".into()),
            selection: Some("a".into()),
        };
        assert_eq!(build_context_menu(&info).len(), 4);
    }

    #[test]
    fn nothing_actionable_gives_empty_menu() {
        assert!(build_context_menu(&ContextInfo::default()).is_empty());
        let blank = ContextInfo {
            link_url: Some(String::new()),
            selection: Some("   ".into()),
        };
        assert!(build_context_menu(&blank).is_empty());
    }

    #[test]
    fn actions_include_submenu_items() {
        let actions = menu_actions(&build_context_menu(&link("https://a.com")));
        assert_eq!(actions.len(), 4);
        assert!(actions.contains(&MenuAction::OpenInSplit {
            url: "https://a.com".into(),
            orientation: Orientation::Row,
        }));
    }

    #[test]
    fn actions_become_host_commands() {
        assert_eq!(
            MenuAction::OpenInNewTab { url: "u".into() }.into_command(),
            HostCommand::CreateTab { url: "u".into() }
        );
        assert_eq!(
            MenuAction::OpenInBackground { url: "u".into() }.into_command(),
            HostCommand::OpenBackgroundTab { url: "u".into() }
        );
        assert_eq!(
            MenuAction::OpenInSplit {
                url: "u".into(),
                orientation: Orientation::Row
            }
            .into_command(),
            HostCommand::CreateSplit {
                url: "u".into(),
                orientation: Orientation::Row
            }
        );
        assert_eq!(
            MenuAction::CopySelection { text: "t".into() }.into_command(),
            HostCommand::CopyText("t".into())
        );
    }
}
