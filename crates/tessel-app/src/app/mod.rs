//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the tab group store and wires it to the surface binder,
//! the input router and the webview host.

mod clipboard;
mod core;
mod dispatch;
mod event_handler;
mod init;
mod keyboard;
mod polling;
mod resize_drag;
mod shutdown;

pub use core::TesselApp;
