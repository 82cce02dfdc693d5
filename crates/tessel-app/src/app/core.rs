//! TesselApp struct definition and constructor.

use std::sync::Arc;
use std::time::Duration;

use tessel_common::{EventBus, Rect};
use tessel_config::ShellConfig;
use tessel_surface::{InputRouter, SurfaceBinder};
use tessel_tiling::{LayoutEngine, TabGroupStore};
use tessel_webview::WryHost;
use tokio::runtime::Runtime;
use tokio::sync::watch;
use winit::window::Window;

use super::clipboard::Clipboard;
use super::resize_drag::DragState;

/// How often surface events and config changes are polled.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Top-level application state.
pub struct TesselApp {
    pub(super) config: ShellConfig,
    pub(super) config_rx: Option<watch::Receiver<ShellConfig>>,
    pub(super) tokio_runtime: Option<Runtime>,
    pub(super) event_bus: EventBus,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) modifiers: winit::keyboard::ModifiersState,
    /// Last pointer position over the window, in logical pixels.
    pub(super) cursor: (f64, f64),
    pub(super) drag: Option<DragState>,

    // Tab groups and their surfaces
    pub(super) store: TabGroupStore,
    pub(super) binder: SurfaceBinder,
    pub(super) router: InputRouter,
    pub(super) host: Option<WryHost<Window>>,
    pub(super) engine: LayoutEngine,

    pub(super) clipboard: Option<Clipboard>,

    /// URL of the tab group opened at startup.
    pub(super) first_url: String,
    /// Store revision the surfaces were last placed for.
    pub(super) last_revision: u64,
    pub(super) needs_layout: bool,
    pub(super) needs_focus: bool,
    pub(super) should_exit: bool,
}

impl TesselApp {
    pub fn new(
        config: ShellConfig,
        config_rx: Option<watch::Receiver<ShellConfig>>,
        tokio_runtime: Option<Runtime>,
        first_url: String,
    ) -> Self {
        Self {
            store: TabGroupStore::with_default_url(config.layout.default_url.clone()),
            binder: SurfaceBinder::new(config.surfaces.max_creation_attempts),
            router: InputRouter::from_config(&config),
            engine: layout_engine(&config),
            config,
            config_rx,
            tokio_runtime,
            event_bus: EventBus::new(256),
            window: None,
            modifiers: winit::keyboard::ModifiersState::empty(),
            cursor: (0.0, 0.0),
            drag: None,
            host: None,
            clipboard: None,
            first_url,
            last_revision: 0,
            needs_layout: false,
            needs_focus: false,
            should_exit: false,
        }
    }

    /// The window's content area in logical pixels.
    pub(super) fn viewport(&self) -> Rect {
        match &self.window {
            Some(w) => {
                let size = w.inner_size().to_logical::<f64>(w.scale_factor());
                Rect {
                    x: 0.0,
                    y: 0.0,
                    width: size.width,
                    height: size.height,
                }
            }
            None => Rect {
                x: 0.0,
                y: 0.0,
                width: 0.0,
                height: 0.0,
            },
        }
    }
}

pub(super) fn layout_engine(config: &ShellConfig) -> LayoutEngine {
    LayoutEngine {
        gap: config.layout.gap,
        outer_padding: config.layout.outer_padding,
    }
}
