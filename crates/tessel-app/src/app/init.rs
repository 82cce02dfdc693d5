//! Window creation and webview host setup.

use std::sync::Arc;

use tessel_common::ShellEvent;
use tessel_webview::{SurfaceConfig, WryHost};
use tokio::sync::broadcast::error::RecvError;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use super::core::TesselApp;

impl TesselApp {
    /// Create the window and the webview host, and open the first tab group.
    /// Returns `false` if the window could not be created.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!(error = %e, "failed to create window");
                return false;
            }
        };

        self.host = Some(WryHost::new(
            window.clone(),
            SurfaceConfig::from(&self.config),
            self.binder.sender(),
        ));
        self.window = Some(window);
        tracing::info!("window created");

        self.start_event_log();
        self.open_first_group();
        true
    }

    pub(super) fn open_first_group(&mut self) {
        let url = self.first_url.clone();
        let group = self.store.add_tab_group(Some(&url));
        tracing::info!(group_id = %group, url = %url, "opened first tab group");
        self.needs_layout = true;
        self.needs_focus = true;
    }

    /// Log every shell event published on the bus.
    fn start_event_log(&self) {
        let Some(rt) = &self.tokio_runtime else {
            return;
        };
        let mut rx = self.event_bus.subscribe();
        rt.spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(ShellEvent::Shutdown) => break,
                    Ok(event) => tracing::debug!(?event, "shell event"),
                    Err(RecvError::Lagged(n)) => tracing::warn!(skipped = n, "event log lagged"),
                    Err(RecvError::Closed) => break,
                }
            }
        });
    }
}
