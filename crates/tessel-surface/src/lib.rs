//! Content surfaces bound to panes, and the input that comes back from them.
//!
//! - [`host`]: the [`SurfaceHost`] seam an embedding backend implements
//! - [`events`]: everything a surface reports back
//! - [`binder`]: keeps exactly one surface per visible pane
//! - [`router`]: turns surface input into navigation or host commands
//! - [`menu`]: the link/selection context menu model
//! - [`keys`]: key event to action lookup

pub mod binder;
pub mod events;
pub mod host;
pub mod keys;
pub mod menu;
pub mod router;

#[cfg(test)]
pub(crate) mod fake_host;

pub use binder::{BinderNotice, BoundInput, ReconcileReport, SurfaceBinder, SurfaceState};
pub use events::{ContextInfo, KeyInput, SurfaceEvent, SurfaceInput};
pub use host::{ContentRef, CreateRequest, NavigationCommand, SurfaceHost};
pub use keys::{KeyCombo, KeyTable};
pub use menu::{build_context_menu, menu_actions, MenuAction, MenuEntry};
pub use router::{navigation_command, InputRouter, RouteOutcome};
