//! `wry`-backed content surfaces for Tessel panes.
//!
//! Provides:
//! - [`WryHost`], a [`SurfaceHost`](tessel_surface::SurfaceHost) that builds
//!   one child webview per pane
//! - the JavaScript bridge that forwards keys, context menus and menu picks
//! - new-window interception, so content never opens a native window

pub mod bounds;
pub mod config;
pub mod host;
pub mod ipc;

pub use bounds::rect_to_wry;
pub use config::SurfaceConfig;
pub use host::WryHost;
pub use ipc::{parse_ipc_message, IPC_INIT_SCRIPT};
