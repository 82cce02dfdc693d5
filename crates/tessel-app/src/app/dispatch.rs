//! Host command dispatch: structural commands go to the store, the rest are
//! handled against the window, the clipboard or the webview host.

use tessel_common::HostCommand;
use tessel_surface::{BoundInput, RouteOutcome, SurfaceHost};

use super::clipboard::Clipboard;
use super::core::TesselApp;

impl TesselApp {
    /// Act on the outcome of routing one surface input.
    pub(super) fn handle_route(&mut self, input: &BoundInput, outcome: RouteOutcome) {
        match outcome {
            RouteOutcome::Command(command) => {
                if command.is_structural() {
                    // Commands from a surface apply to the pane that sent them.
                    self.store.set_active_tab_group(input.group);
                    self.store.focus_pane(input.group, input.pane());
                }
                self.dispatch_command(command);
            }
            RouteOutcome::Navigated(command) => {
                tracing::debug!(pane_id = %input.pane(), ?command, "navigated");
            }
            RouteOutcome::Menu(entries) => {
                tracing::debug!(pane_id = %input.pane(), entries = entries.len(), "context menu shown");
            }
            RouteOutcome::PassThrough | RouteOutcome::Ignored => {}
        }
    }

    pub(super) fn dispatch_command(&mut self, command: HostCommand) {
        if command.is_structural() {
            if self.store.apply(&command) {
                self.needs_layout = true;
                self.needs_focus = true;
            }
            return;
        }

        match command {
            HostCommand::BlurTab => {
                if let Some(host) = self.host.as_mut() {
                    host.focus_parent();
                }
                self.needs_focus = false;
            }
            HostCommand::CopyText(text) => self.copy_text(&text),
            HostCommand::Minimize => {
                if let Some(w) = &self.window {
                    w.set_minimized(true);
                }
            }
            HostCommand::ToggleMaximize => {
                if let Some(w) = &self.window {
                    w.set_maximized(!w.is_maximized());
                }
            }
            HostCommand::Close => {
                tracing::info!("close requested by command");
                self.should_exit = true;
            }
            other => tracing::debug!(command = ?other, "command not handled"),
        }
    }

    fn copy_text(&mut self, text: &str) {
        if self.clipboard.is_none() {
            match Clipboard::new() {
                Ok(clipboard) => self.clipboard = Some(clipboard),
                Err(e) => {
                    tracing::warn!(error = %e, "cannot copy selection");
                    return;
                }
            }
        }
        if let Some(clipboard) = self.clipboard.as_mut() {
            match clipboard.set_text(text) {
                Ok(()) => tracing::debug!(chars = text.chars().count(), "selection copied"),
                Err(e) => tracing::warn!(error = %e, "cannot copy selection"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessel_common::{Orientation, SurfaceId};
    use tessel_config::ShellConfig;
    use tessel_surface::{ContentRef, SurfaceInput};

    fn app() -> TesselApp {
        TesselApp::new(ShellConfig::default(), None, None, "about:blank".into())
    }

    #[test]
    fn structural_commands_reach_the_store() {
        let mut app = app();
        app.dispatch_command(HostCommand::CreateTab {
            url: "https://a.com".into(),
        });
        assert_eq!(app.store.group_count(), 1);
        assert!(app.needs_layout);
        assert!(app.needs_focus);

        app.dispatch_command(HostCommand::CreateSplit {
            url: "https://b.com".into(),
            orientation: Orientation::Row,
        });
        assert_eq!(app.store.active_group().unwrap().pane_count(), 2);

        app.dispatch_command(HostCommand::CloseActivePane);
        assert_eq!(app.store.active_group().unwrap().pane_count(), 1);
    }

    #[test]
    fn close_command_requests_exit() {
        let mut app = app();
        app.dispatch_command(HostCommand::Close);
        assert!(app.should_exit);
    }

    #[test]
    fn window_commands_without_a_window_are_harmless() {
        let mut app = app();
        app.dispatch_command(HostCommand::Minimize);
        app.dispatch_command(HostCommand::ToggleMaximize);
        app.dispatch_command(HostCommand::BlurTab);
        assert!(app.store.is_empty());
        assert!(!app.should_exit);
    }

    #[test]
    fn routed_command_applies_to_the_sending_pane() {
        let mut app = app();
        let first = app.store.add_tab_group(Some("https://a.com"));
        let pane = app.store.group(first).unwrap().active_pane().unwrap();
        app.store.add_tab_group(Some("https://b.com"));
        assert_ne!(app.store.active_group_id(), Some(first));

        let input = BoundInput {
            group: first,
            surface: ContentRef {
                pane,
                surface: SurfaceId::from("wv-1"),
            },
            input: SurfaceInput::NewWindow {
                url: "https://c.com".into(),
            },
        };
        app.handle_route(
            &input,
            RouteOutcome::Command(HostCommand::CreateSplit {
                url: "https://c.com".into(),
                orientation: Orientation::Column,
            }),
        );

        assert_eq!(app.store.active_group_id(), Some(first));
        assert_eq!(app.store.group(first).unwrap().pane_count(), 2);
    }

    #[test]
    fn background_tab_lands_in_the_sending_group() {
        let mut app = app();
        let first = app.store.add_tab_group(Some("https://a.com"));
        let pane = app.store.group(first).unwrap().active_pane().unwrap();
        let second = app.store.add_tab_group(Some("https://b.com"));

        let input = BoundInput {
            group: first,
            surface: ContentRef {
                pane,
                surface: SurfaceId::from("wv-1"),
            },
            input: SurfaceInput::NewWindow {
                url: "https://c.com".into(),
            },
        };
        app.handle_route(
            &input,
            RouteOutcome::Command(HostCommand::OpenBackgroundTab {
                url: "https://c.com".into(),
            }),
        );

        assert_eq!(app.store.group(first).unwrap().tabs().len(), 2);
        assert_eq!(app.store.group(second).unwrap().tabs().len(), 1);
        assert_eq!(app.store.group(first).unwrap().pane_count(), 1);
    }

    #[test]
    fn non_command_outcomes_leave_the_store_alone() {
        let mut app = app();
        let group = app.store.add_tab_group(None);
        let pane = app.store.group(group).unwrap().active_pane().unwrap();
        let revision = app.store.revision();
        let input = BoundInput {
            group,
            surface: ContentRef {
                pane,
                surface: SurfaceId::from("wv-1"),
            },
            input: SurfaceInput::NewWindow { url: "x".into() },
        };

        app.handle_route(&input, RouteOutcome::PassThrough);
        app.handle_route(&input, RouteOutcome::Ignored);
        assert_eq!(app.store.revision(), revision);
    }
}
