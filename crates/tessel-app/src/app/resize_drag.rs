//! Mouse drag on the gap between panes resizes the split under it.
//!
//! While the button is held the new ratio only moves the surfaces; the
//! store is written once, on release. A drag whose layout changed underneath
//! it is dropped.

use std::sync::Arc;

use tessel_common::{GroupId, Rect};
use tessel_surface::SurfaceHost;
use tessel_tiling::tree::clamp_ratio;
use tessel_tiling::{LayoutNode, SplitBorder, TabGroupStore};
use winit::window::CursorIcon;

use super::core::TesselApp;

/// A split border being dragged.
#[derive(Debug, Clone)]
pub(super) struct DragState {
    pub group: GroupId,
    pub border: SplitBorder,
    /// Bounded ratio for the current pointer position.
    pub ratio: f64,
    /// Layout the border was found in.
    pub layout: Arc<LayoutNode>,
}

impl DragState {
    /// The dragged group's layout, if it is still the one the drag started on.
    fn current_layout<'a>(&self, store: &'a TabGroupStore) -> Option<&'a LayoutNode> {
        let group = store.group(self.group)?;
        Arc::ptr_eq(&group.layout_handle(), &self.layout).then(|| group.layout())
    }
}

pub(super) fn cursor_for(border: Option<&SplitBorder>) -> CursorIcon {
    match border.map(|b| b.orientation) {
        Some(tessel_common::Orientation::Row) => CursorIcon::ColResize,
        Some(tessel_common::Orientation::Column) => CursorIcon::RowResize,
        None => CursorIcon::Default,
    }
}

impl TesselApp {
    /// Start dragging the border under `(x, y)`, if any.
    pub(super) fn begin_drag(&mut self, viewport: Rect, x: f64, y: f64) -> bool {
        let Some(group) = self.store.active_group() else {
            return false;
        };
        let Some(border) = self.engine.border_at(group.layout(), viewport, x, y) else {
            return false;
        };
        tracing::debug!(group_id = %group.id(), ratio = border.ratio, "split drag started");
        self.drag = Some(DragState {
            group: group.id(),
            ratio: border.ratio,
            layout: group.layout_handle(),
            border,
        });
        true
    }

    /// Follow the pointer during a drag, moving surfaces to a preview layout.
    pub(super) fn update_drag(&mut self, viewport: Rect, x: f64, y: f64) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        let along = match drag.border.orientation {
            tessel_common::Orientation::Row => x,
            tessel_common::Orientation::Column => y,
        };
        drag.ratio = clamp_ratio(self.engine.ratio_at(&drag.border, along));

        let Some(layout) = drag.current_layout(&self.store) else {
            tracing::debug!(group_id = %drag.group, "layout changed during drag");
            self.drag = None;
            self.needs_layout = true;
            return;
        };
        let Ok(preview) = layout.set_ratio(&drag.border.path, drag.ratio) else {
            return;
        };
        let Some(host) = self.host.as_mut() else {
            return;
        };
        for (pane, rect) in self.engine.compute(&preview, viewport) {
            if let Some(surface) = self.binder.content_ref(pane) {
                if let Err(e) = host.set_bounds(surface, rect) {
                    tracing::debug!(pane_id = %pane, error = %e, "preview placement failed");
                }
            }
        }
    }

    /// Commit the dragged ratio to the store.
    pub(super) fn end_drag(&mut self) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        self.needs_layout = true;
        if drag.current_layout(&self.store).is_none() {
            tracing::debug!(group_id = %drag.group, "layout changed during drag, ratio dropped");
            return;
        }
        match self
            .store
            .set_split_ratio(drag.group, &drag.border.path, drag.ratio)
        {
            Ok(()) => tracing::debug!(group_id = %drag.group, ratio = drag.ratio, "split resized"),
            Err(e) => tracing::debug!(error = %e, "split drag dropped"),
        }
    }

    pub(super) fn update_cursor_icon(&self, viewport: Rect, x: f64, y: f64) {
        let (Some(window), Some(group)) = (&self.window, self.store.active_group()) else {
            return;
        };
        let hovered = self.engine.border_at(group.layout(), viewport, x, y);
        window.set_cursor(cursor_for(hovered.as_ref()));
    }
}
