use std::collections::HashMap;

use tessel_common::{PaneId, Rect};
use tessel_tiling::{LayoutEngine, TabGroupStore};
use tracing::warn;

use crate::host::SurfaceHost;

use super::SurfaceBinder;

impl SurfaceBinder {
    /// Position the active group's surfaces inside `viewport` and hide the
    /// surfaces of every other group.
    pub fn place_surfaces(
        &self,
        store: &TabGroupStore,
        engine: &LayoutEngine,
        viewport: Rect,
        host: &mut dyn SurfaceHost,
    ) {
        let rects: HashMap<PaneId, Rect> = store
            .active_group()
            .map(|group| engine.compute(group.layout(), viewport).into_iter().collect())
            .unwrap_or_default();

        for slot in self.slots.values() {
            let Some(surface) = slot.live() else {
                continue;
            };
            let result = match rects.get(&surface.pane) {
                Some(rect) => host
                    .set_bounds(surface, *rect)
                    .and_then(|()| host.set_visible(surface, true)),
                None => host.set_visible(surface, false),
            };
            if let Err(e) = result {
                warn!(pane_id = %surface.pane, error = %e, "failed to place surface");
            }
        }
    }

    /// Give keyboard focus to the active pane's surface. Returns false when
    /// it has no live surface yet.
    pub fn focus_active(&self, store: &TabGroupStore, host: &mut dyn SurfaceHost) -> bool {
        let Some(surface) = store
            .active_group()
            .and_then(|g| g.active_pane())
            .and_then(|pane| self.content_ref(pane))
        else {
            return false;
        };
        match host.focus(surface) {
            Ok(()) => true,
            Err(e) => {
                warn!(pane_id = %surface.pane, error = %e, "failed to focus surface");
                false
            }
        }
    }
}
