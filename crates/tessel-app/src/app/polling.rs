//! Per-tick work: config reloads, surface events, reconciliation and
//! placement.

use std::time::Instant;

use tessel_config::ShellConfig;
use tessel_surface::BinderNotice;
use tessel_webview::SurfaceConfig;
use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::core::{layout_engine, TesselApp, POLL_INTERVAL};

impl TesselApp {
    /// Run one polling pass and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        self.poll_config();
        self.poll_surfaces();
        self.sync_surfaces();

        if self.window.is_some() && self.store.is_empty() {
            tracing::info!("last tab group closed");
            self.should_exit = true;
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    fn poll_config(&mut self) {
        let Some(rx) = self.config_rx.as_mut() else {
            return;
        };
        match rx.has_changed() {
            Ok(true) => {}
            Ok(false) => return,
            Err(_) => {
                tracing::debug!("config reload stopped");
                self.config_rx = None;
                return;
            }
        }
        let config = rx.borrow_and_update().clone();
        self.apply_config(config);
    }

    /// Adopt a reloaded config. Tab groups and surfaces are left as they
    /// are; only key bindings, geometry and new-surface settings change.
    pub(super) fn apply_config(&mut self, config: ShellConfig) {
        self.router.reconfigure(&config);
        self.engine = layout_engine(&config);
        self.binder
            .set_max_attempts(config.surfaces.max_creation_attempts);
        if let Some(host) = self.host.as_mut() {
            host.set_config(SurfaceConfig::from(&config));
        }
        self.config = config;
        self.needs_layout = true;
        tracing::info!(
            bindings = self.router.keys().len(),
            gap = self.engine.gap,
            "config applied"
        );
    }

    /// Drain surface events and act on the inputs they carried.
    fn poll_surfaces(&mut self) {
        let Some(host) = self.host.as_mut() else {
            return;
        };
        let inputs = self.binder.process_events(&mut self.store, host);
        let mut routed = Vec::with_capacity(inputs.len());
        for input in inputs {
            let outcome = self.router.route(&self.binder, host, &input);
            routed.push((input, outcome));
        }
        for (input, outcome) in routed {
            self.handle_route(&input, outcome);
        }
    }

    /// Bring surfaces in line with the store, then lay them out and publish
    /// what happened.
    pub(super) fn sync_surfaces(&mut self) {
        if self.store.revision() != self.last_revision {
            self.last_revision = self.store.revision();
            self.needs_layout = true;
            if tracing::enabled!(tracing::Level::TRACE) {
                match serde_json::to_string(&self.store.snapshot()) {
                    Ok(json) => tracing::trace!(snapshot = %json, "store changed"),
                    Err(e) => tracing::warn!(error = %e, "failed to serialize snapshot"),
                }
            }
        }
        for event in self.store.drain_events() {
            self.event_bus.publish(event);
        }

        let viewport = self.viewport();
        let active_pane = self.store.active_group().and_then(|g| g.active_pane());
        let Some(host) = self.host.as_mut() else {
            return;
        };

        let report = self.binder.reconcile(&self.store, host);
        if !report.is_empty() {
            tracing::debug!(?report, "surfaces reconciled");
            self.needs_layout = true;
        }

        let notices = self.binder.drain_notices();
        for notice in &notices {
            match notice {
                BinderNotice::Ready(pane) => {
                    self.needs_layout = true;
                    if Some(*pane) == active_pane {
                        self.needs_focus = true;
                    }
                }
                BinderNotice::Failed { pane, reason } => {
                    tracing::warn!(pane_id = %pane, reason = %reason, "surface unavailable");
                }
                BinderNotice::Lost(_) => {}
            }
        }

        if self.needs_layout {
            self.binder
                .place_surfaces(&self.store, &self.engine, viewport, host);
            self.needs_layout = false;
        }
        if self.needs_focus && self.binder.focus_active(&self.store, host) {
            self.needs_focus = false;
        }

        for notice in notices {
            if let Some(event) = notice.to_shell_event() {
                self.event_bus.publish(event);
            }
        }
    }
}
