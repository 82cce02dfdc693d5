//! Graceful shutdown: release surfaces, stop background tasks.

use std::time::Duration;

use tessel_common::ShellEvent;

use super::core::TesselApp;

impl TesselApp {
    /// Perform graceful shutdown of all subsystems.
    ///
    /// Webviews go before the window they are children of.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("initiating graceful shutdown");

        if let Some(mut host) = self.host.take() {
            self.binder.release_all(&mut host);
            host.destroy_all();
        }

        self.event_bus.publish(ShellEvent::Shutdown);
        self.config_rx = None;

        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(Duration::from_secs(2));
        }

        self.window = None;
        self.should_exit = true;

        tracing::info!("graceful shutdown complete");
    }
}
