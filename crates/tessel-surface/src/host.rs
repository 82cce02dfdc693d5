//! The boundary between the binder and whatever actually renders content.

use serde::Serialize;
use tessel_common::{PaneId, Rect, SurfaceError, SurfaceId};
use tokio_util::sync::CancellationToken;

use crate::menu::MenuEntry;

/// Weak reference from a pane to the surface rendering it.
///
/// Only the binder hands these out. Holding one does not keep the surface
/// alive; ask the host with [`SurfaceHost::is_alive`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ContentRef {
    pub pane: PaneId,
    pub surface: SurfaceId,
}

/// Navigation a surface performs on itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationCommand {
    Load(String),
    Reload,
    GoBack,
    GoForward,
    ToggleDevTools,
}

/// A request to build a surface for `pane`.
///
/// The host answers exactly once with [`SurfaceEvent::Created`] carrying the
/// same `request_id`, on the sender it was constructed with. When `token` is
/// already cancelled the host may skip the work and answer with an error.
///
/// [`SurfaceEvent::Created`]: crate::events::SurfaceEvent::Created
#[derive(Debug, Clone)]
pub struct CreateRequest {
    pub pane: PaneId,
    pub request_id: u64,
    pub url: String,
    pub token: CancellationToken,
}

/// An embedding backend that owns the actual content surfaces.
///
/// Creation is fire-and-forget: results come back as events. Every other
/// call is synchronous and must tolerate surfaces that have already gone
/// away.
pub trait SurfaceHost {
    fn create(&mut self, request: CreateRequest);

    /// Tear a surface down. Unknown surfaces are ignored.
    fn destroy(&mut self, surface: &ContentRef);

    fn is_alive(&self, surface: &ContentRef) -> bool;

    fn navigate(
        &mut self,
        surface: &ContentRef,
        command: NavigationCommand,
    ) -> Result<(), SurfaceError>;

    fn set_bounds(&mut self, surface: &ContentRef, bounds: Rect) -> Result<(), SurfaceError>;

    fn set_visible(&mut self, surface: &ContentRef, visible: bool) -> Result<(), SurfaceError>;

    /// Present a context menu over a surface. The pick comes back as
    /// [`SurfaceInput::MenuPick`](crate::events::SurfaceInput::MenuPick).
    fn show_menu(
        &mut self,
        surface: &ContentRef,
        entries: &[MenuEntry],
    ) -> Result<(), SurfaceError>;

    /// Give keyboard focus to a surface.
    fn focus(&mut self, surface: &ContentRef) -> Result<(), SurfaceError>;

    /// Move keyboard focus from the surfaces back to the host window.
    fn focus_parent(&mut self);
}
