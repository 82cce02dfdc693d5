//! Keys pressed while the host window itself has focus.
//!
//! After `BlurTab` no surface holds the keyboard, so shell hotkeys arrive
//! here as winit events and resolve through the same key table.

use tessel_surface::{navigation_command, KeyInput, NavigationCommand, SurfaceHost};
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{Key, ModifiersState};

use super::core::TesselApp;

/// The DOM-style key event for a winit key, or `None` for keys without a name.
pub(super) fn key_input(key: &Key, modifiers: ModifiersState) -> Option<KeyInput> {
    let name = match key {
        Key::Named(named) => format!("{named:?}"),
        Key::Character(c) => c.to_string(),
        _ => return None,
    };
    Some(KeyInput {
        key: name,
        ctrl: modifiers.control_key(),
        alt: modifiers.alt_key(),
        shift: modifiers.shift_key(),
        meta: modifiers.super_key(),
    })
}

impl TesselApp {
    pub(super) fn handle_keyboard_input(&mut self, event: KeyEvent) {
        if event.state != ElementState::Pressed {
            return;
        }
        let Some(input) = key_input(&event.logical_key, self.modifiers) else {
            return;
        };
        let Some(action) = self.router.action_for(&input) else {
            return;
        };
        tracing::debug!(action = action.label(), "window hotkey");

        if let Some(command) = navigation_command(action) {
            self.navigate_active(command);
        } else if let Some(command) = self.router.command_for(action) {
            self.dispatch_command(command);
        }
    }

    /// Send a navigation command to the active pane's surface.
    fn navigate_active(&mut self, command: NavigationCommand) {
        let Some(pane) = self.store.active_group().and_then(|g| g.active_pane()) else {
            return;
        };
        let (Some(host), Some(surface)) = (self.host.as_mut(), self.binder.content_ref(pane))
        else {
            return;
        };
        if let Err(e) = host.navigate(surface, command) {
            tracing::warn!(pane_id = %pane, error = %e, "navigation failed");
        }
    }
}
