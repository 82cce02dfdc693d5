//! Turns input from bound surfaces into navigation or shell commands.
//!
//! The router never touches the store. Navigation hotkeys go straight back
//! to the surface, context menus are presented on it, and everything
//! structural comes out as a [`HostCommand`] for the caller to apply.

use std::collections::HashMap;

use tessel_common::{Action, HostCommand, Orientation};
use tessel_config::ShellConfig;
use tracing::{debug, info, warn};

use crate::binder::{BoundInput, SurfaceBinder};
use crate::events::{KeyInput, SurfaceInput};
use crate::host::{ContentRef, NavigationCommand, SurfaceHost};
use crate::keys::{KeyCombo, KeyTable};
use crate::menu::{build_context_menu, menu_actions, MenuAction, MenuEntry};

/// What routing one input produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    /// Not ours; the surface handles it as usual.
    PassThrough,
    /// A navigation hotkey, already performed on the surface.
    Navigated(NavigationCommand),
    /// A command for the store or the host window.
    Command(HostCommand),
    /// A context menu was presented on the surface.
    Menu(Vec<MenuEntry>),
    /// The surface went away before the input could be handled, or sent a
    /// menu pick that was never offered to it.
    Ignored,
}

pub struct InputRouter {
    keys: KeyTable,
    /// URL for tabs and splits opened by hotkey.
    default_url: String,
    /// Actions of the menu currently shown on each surface. A pick is only
    /// accepted from this set, once.
    offered: HashMap<ContentRef, Vec<MenuAction>>,
}

impl InputRouter {
    pub fn new(keys: KeyTable, default_url: impl Into<String>) -> Self {
        Self {
            keys,
            default_url: default_url.into(),
            offered: HashMap::new(),
        }
    }

    pub fn from_config(config: &ShellConfig) -> Self {
        Self::new(KeyTable::from_settings(config), config.layout.default_url.clone())
    }

    /// Swap in hotkeys and defaults from a reloaded config.
    pub fn reconfigure(&mut self, config: &ShellConfig) {
        self.keys = KeyTable::from_settings(config);
        self.default_url = config.layout.default_url.clone();
        debug!(bindings = self.keys.len(), "input router reconfigured");
    }

    pub fn keys(&self) -> &KeyTable {
        &self.keys
    }

    pub fn route(
        &mut self,
        binder: &SurfaceBinder,
        host: &mut dyn SurfaceHost,
        input: &BoundInput,
    ) -> RouteOutcome {
        self.offered.retain(|s, _| binder.is_bound(s));
        let surface = &input.surface;
        if !binder.is_bound(surface) || !host.is_alive(surface) {
            debug!(pane_id = %surface.pane, "input for a surface that is gone");
            return RouteOutcome::Ignored;
        }

        match &input.input {
            SurfaceInput::Key(key) => {
                let Some(action) = self.action_for(key) else {
                    return RouteOutcome::PassThrough;
                };
                if let Some(command) = navigation_command(action) {
                    return match host.navigate(surface, command.clone()) {
                        Ok(()) => {
                            debug!(pane_id = %surface.pane, action = action.label(), "navigation hotkey");
                            RouteOutcome::Navigated(command)
                        }
                        Err(e) => {
                            warn!(pane_id = %surface.pane, error = %e, "navigation failed");
                            RouteOutcome::Ignored
                        }
                    };
                }
                match self.command_for(action) {
                    Some(command) => RouteOutcome::Command(command),
                    None => RouteOutcome::PassThrough,
                }
            }
            SurfaceInput::ContextMenu(info) => {
                let entries = build_context_menu(info);
                if entries.is_empty() {
                    return RouteOutcome::PassThrough;
                }
                match host.show_menu(surface, &entries) {
                    Ok(()) => {
                        self.offered.insert(surface.clone(), menu_actions(&entries));
                        RouteOutcome::Menu(entries)
                    }
                    Err(e) => {
                        warn!(pane_id = %surface.pane, error = %e, "failed to show context menu");
                        RouteOutcome::Ignored
                    }
                }
            }
            SurfaceInput::MenuPick { action } => {
                let offered = self.offered.remove(surface).unwrap_or_default();
                if !offered.contains(action) {
                    warn!(pane_id = %surface.pane, ?action, "rejecting menu pick that was not offered");
                    return RouteOutcome::Ignored;
                }
                debug!(pane_id = %surface.pane, ?action, "context menu pick");
                RouteOutcome::Command(action.clone().into_command())
            }
            SurfaceInput::NewWindow { url } => {
                info!(pane_id = %surface.pane, url = %url, "new window redirected to a tab");
                RouteOutcome::Command(HostCommand::CreateTab { url: url.clone() })
            }
        }
    }

    pub fn action_for(&self, key: &KeyInput) -> Option<Action> {
        self.keys.lookup(&KeyCombo::from_key_input(key))
    }

    /// The shell command for a non-navigation action.
    pub fn command_for(&self, action: Action) -> Option<HostCommand> {
        let command = match action {
            Action::BlurTab => HostCommand::BlurTab,
            Action::FocusNextPane => HostCommand::FocusNextPane,
            Action::FocusPrevPane => HostCommand::FocusPrevPane,
            Action::NextTab => HostCommand::CycleTab { forward: true },
            Action::PrevTab => HostCommand::CycleTab { forward: false },
            Action::NewTab => HostCommand::CreateTab {
                url: self.default_url.clone(),
            },
            Action::SplitRow => HostCommand::CreateSplit {
                url: self.default_url.clone(),
                orientation: Orientation::Row,
            },
            Action::SplitColumn => HostCommand::CreateSplit {
                url: self.default_url.clone(),
                orientation: Orientation::Column,
            },
            Action::ClosePane => HostCommand::CloseActivePane,
            Action::ToggleDevTools | Action::Reload | Action::GoBack | Action::GoForward => {
                return None
            }
        };
        Some(command)
    }
}

/// The surface-side command for a navigation action.
pub fn navigation_command(action: Action) -> Option<NavigationCommand> {
    match action {
        Action::ToggleDevTools => Some(NavigationCommand::ToggleDevTools),
        Action::Reload => Some(NavigationCommand::Reload),
        Action::GoBack => Some(NavigationCommand::GoBack),
        Action::GoForward => Some(NavigationCommand::GoForward),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::ContextInfo;
    use crate::fake_host::FakeHost;
    use crate::host::ContentRef;
    use crate::menu::MenuAction;
    use tessel_tiling::TabGroupStore;

    struct Fixture {
        router: InputRouter,
        binder: SurfaceBinder,
        host: FakeHost,
        store: TabGroupStore,
        surface: ContentRef,
    }

    fn fixture() -> Fixture {
        let mut binder = SurfaceBinder::default();
        let mut host = FakeHost::new(binder.sender());
        let mut store = TabGroupStore::new();
        store.add_tab_group(Some("https://a.com"));
        binder.reconcile(&store, &mut host);
        binder.process_events(&mut store, &mut host);
        let pane = store.active_group().unwrap().active_pane().unwrap();
        let surface = binder.content_ref(pane).cloned().unwrap();
        Fixture {
            router: InputRouter::from_config(&ShellConfig::default()),
            binder,
            host,
            store,
            surface,
        }
    }

    impl Fixture {
        fn route(&mut self, input: SurfaceInput) -> RouteOutcome {
            let bound = BoundInput {
                group: self.store.active_group_id().unwrap(),
                surface: self.surface.clone(),
                input,
            };
            self.router.route(&self.binder, &mut self.host, &bound)
        }
    }

    fn key(name: &str) -> SurfaceInput {
        SurfaceInput::Key(KeyInput::new(name))
    }

    #[test]
    fn unmapped_key_passes_through() {
        let mut f = fixture();
        assert_eq!(f.route(key("a")), RouteOutcome::PassThrough);
        assert!(f.host.navigations.is_empty());
    }

    #[test]
    fn navigation_hotkeys_go_back_to_the_surface() {
        let mut f = fixture();
        assert_eq!(
            f.route(key("F5")),
            RouteOutcome::Navigated(NavigationCommand::Reload)
        );
        let back = SurfaceInput::Key(KeyInput {
            alt: true,
            ..KeyInput::new("ArrowLeft")
        });
        assert_eq!(
            f.route(back),
            RouteOutcome::Navigated(NavigationCommand::GoBack)
        );
        assert_eq!(
            f.route(key("F12")),
            RouteOutcome::Navigated(NavigationCommand::ToggleDevTools)
        );
        assert_eq!(f.host.navigations.len(), 3);
        assert_eq!(f.host.navigations[0].0, f.surface);
    }

    #[test]
    fn meta_escape_blurs() {
        let mut f = fixture();
        let input = SurfaceInput::Key(KeyInput {
            meta: true,
            ..KeyInput::new("Escape")
        });
        assert_eq!(f.route(input), RouteOutcome::Command(HostCommand::BlurTab));
    }

    #[test]
    fn tab_cycling_keys() {
        let mut f = fixture();
        let next = SurfaceInput::Key(KeyInput {
            ctrl: true,
            ..KeyInput::new("Tab")
        });
        let prev = SurfaceInput::Key(KeyInput {
            ctrl: true,
            shift: true,
            ..KeyInput::new("Tab")
        });
        assert_eq!(
            f.route(next),
            RouteOutcome::Command(HostCommand::CycleTab { forward: true })
        );
        assert_eq!(
            f.route(prev),
            RouteOutcome::Command(HostCommand::CycleTab { forward: false })
        );
    }

    #[test]
    fn structural_actions_use_default_url() {
        let f = fixture();
        assert_eq!(
            f.router.command_for(Action::SplitColumn),
            Some(HostCommand::CreateSplit {
                url: "about:blank".into(),
                orientation: Orientation::Column,
            })
        );
        assert_eq!(
            f.router.command_for(Action::ClosePane),
            Some(HostCommand::CloseActivePane)
        );
        assert_eq!(f.router.command_for(Action::Reload), None);
    }

    #[test]
    fn context_menu_on_link() {
        let mut f = fixture();
        let outcome = f.route(SurfaceInput::ContextMenu(ContextInfo {
            link_url: Some("https://b.com".into()),
            selection: None,
        }));
        let RouteOutcome::Menu(entries) = outcome else {
            panic!("expected a menu");
        };
        assert_eq!(entries[0].label(), "Open Link in New Tab");
        assert_eq!(f.host.menus.len(), 1);
        assert_eq!(f.host.menus[0].0, f.surface);
    }

    fn copy_pick(text: &str) -> SurfaceInput {
        SurfaceInput::MenuPick {
            action: MenuAction::CopySelection { text: text.into() },
        }
    }

    #[test]
    fn offered_menu_pick_becomes_a_command() {
        let mut f = fixture();
        f.route(SurfaceInput::ContextMenu(ContextInfo {
            link_url: None,
            selection: Some("hello".into()),
        }));
        assert_eq!(
            f.route(copy_pick("hello")),
            RouteOutcome::Command(HostCommand::CopyText("hello".into()))
        );
        // One menu, one pick.
        assert_eq!(f.route(copy_pick("hello")), RouteOutcome::Ignored);
    }

    #[test]
    fn unsolicited_menu_pick_is_rejected() {
        let mut f = fixture();
        let forged = SurfaceInput::MenuPick {
            action: MenuAction::OpenInNewTab {
                url: "https://evil.example".into(),
            },
        };
        assert_eq!(f.route(forged), RouteOutcome::Ignored);
        assert!(f.host.menus.is_empty());
    }

    #[test]
    fn pick_outside_the_shown_menu_is_rejected() {
        let mut f = fixture();
        f.route(SurfaceInput::ContextMenu(ContextInfo {
            link_url: Some("https://b.com".into()),
            selection: None,
        }));
        assert_eq!(f.route(copy_pick("secret")), RouteOutcome::Ignored);

        // The rejected pick also closes the menu.
        let pick = SurfaceInput::MenuPick {
            action: MenuAction::OpenInNewTab {
                url: "https://b.com".into(),
            },
        };
        assert_eq!(f.route(pick), RouteOutcome::Ignored);
    }

    #[test]
    fn background_pick_queues_a_tab() {
        let mut f = fixture();
        f.route(SurfaceInput::ContextMenu(ContextInfo {
            link_url: Some("https://b.com".into()),
            selection: None,
        }));
        let pick = SurfaceInput::MenuPick {
            action: MenuAction::OpenInBackground {
                url: "https://b.com".into(),
            },
        };
        assert_eq!(
            f.route(pick),
            RouteOutcome::Command(HostCommand::OpenBackgroundTab {
                url: "https://b.com".into(),
            })
        );
    }

    #[test]
    fn split_pick_from_submenu_is_accepted() {
        let mut f = fixture();
        f.route(SurfaceInput::ContextMenu(ContextInfo {
            link_url: Some("https://b.com".into()),
            selection: None,
        }));
        let pick = SurfaceInput::MenuPick {
            action: MenuAction::OpenInSplit {
                url: "https://b.com".into(),
                orientation: Orientation::Row,
            },
        };
        assert_eq!(
            f.route(pick),
            RouteOutcome::Command(HostCommand::CreateSplit {
                url: "https://b.com".into(),
                orientation: Orientation::Row,
            })
        );
    }

    #[test]
    fn context_menu_on_nothing_passes_through() {
        let mut f = fixture();
        assert_eq!(
            f.route(SurfaceInput::ContextMenu(ContextInfo::default())),
            RouteOutcome::PassThrough
        );
        assert!(f.host.menus.is_empty());
    }

    #[test]
    fn new_window_becomes_a_tab() {
        let mut f = fixture();
        assert_eq!(
            f.route(SurfaceInput::NewWindow {
                url: "https://popup.com".into()
            }),
            RouteOutcome::Command(HostCommand::CreateTab {
                url: "https://popup.com".into()
            })
        );
    }

    #[test]
    fn destroyed_surface_is_a_no_op() {
        let mut f = fixture();
        let g = f.store.active_group_id().unwrap();
        let stale = BoundInput {
            group: g,
            surface: f.surface.clone(),
            input: key("F5"),
        };
        f.store.close_pane(g, f.surface.pane).unwrap();
        f.binder.reconcile(&f.store, &mut f.host);

        assert_eq!(
            f.router.route(&f.binder, &mut f.host, &stale),
            RouteOutcome::Ignored
        );
        assert!(f.host.navigations.is_empty());
    }

    #[test]
    fn killed_surface_is_a_no_op() {
        let mut f = fixture();
        let surface = f.surface.clone();
        f.host.kill(&surface);
        assert_eq!(f.route(key("F5")), RouteOutcome::Ignored);
    }

    #[test]
    fn reconfigure_replaces_hotkeys() {
        let mut f = fixture();
        let mut config = ShellConfig::default();
        config.hotkeys.browser.reload = "F6".into();
        config.layout.default_url = "https://start.page".into();
        f.router.reconfigure(&config);

        assert_eq!(f.route(key("F5")), RouteOutcome::PassThrough);
        assert_eq!(
            f.route(key("F6")),
            RouteOutcome::Navigated(NavigationCommand::Reload)
        );
        assert_eq!(
            f.router.command_for(Action::NewTab),
            Some(HostCommand::CreateTab {
                url: "https://start.page".into()
            })
        );
    }
}
