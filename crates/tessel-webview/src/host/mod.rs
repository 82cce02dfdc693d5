//! [`WryHost`]: one child `wry::WebView` per pane.
//!
//! Webviews are built synchronously on the UI thread, but the result is
//! still reported through the binder's channel like any other host, so the
//! binder's cancellation and staleness checks apply unchanged.

mod handlers;
mod surface;

use std::collections::HashMap;
use std::sync::Arc;

use tessel_surface::{ContentRef, SurfaceEvent};
use tokio::sync::mpsc::UnboundedSender;
use wry::raw_window_handle::HasWindowHandle;
use wry::WebView;

use crate::config::SurfaceConfig;

/// Builds and owns the webviews for every pane, as children of one window.
pub struct WryHost<W: HasWindowHandle> {
    window: Arc<W>,
    config: SurfaceConfig,
    events: UnboundedSender<SurfaceEvent>,
    surfaces: HashMap<ContentRef, WebView>,
}

impl<W: HasWindowHandle> WryHost<W> {
    /// `events` is the sender from
    /// [`SurfaceBinder::sender`](tessel_surface::SurfaceBinder::sender).
    pub fn new(window: Arc<W>, config: SurfaceConfig, events: UnboundedSender<SurfaceEvent>) -> Self {
        Self {
            window,
            config,
            events,
            surfaces: HashMap::new(),
        }
    }

    /// Settings for surfaces built from now on.
    pub fn set_config(&mut self, config: SurfaceConfig) {
        self.config = config;
    }

    pub fn count(&self) -> usize {
        self.surfaces.len()
    }

    /// Destroy every webview. Used during shutdown.
    pub fn destroy_all(&mut self) {
        let count = self.surfaces.len();
        self.surfaces.clear();
        tracing::debug!(count, "all webviews destroyed");
    }
}
