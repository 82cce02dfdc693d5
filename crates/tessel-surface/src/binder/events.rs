use tessel_common::{PaneId, SurfaceId};
use tessel_tiling::TabGroupStore;
use tracing::{debug, info, warn};

use crate::events::SurfaceEvent;
use crate::host::{ContentRef, NavigationCommand, SurfaceHost};

use super::types::{BinderNotice, BoundInput, Slot, SlotState};
use super::SurfaceBinder;

impl SurfaceBinder {
    /// Apply everything the host has reported since the last call.
    ///
    /// Creation results update the bindings, page loads and title changes
    /// update the owning tab, and input from bound surfaces is returned for
    /// routing. Anything from a surface that is no longer bound is dropped.
    pub fn process_events(
        &mut self,
        store: &mut TabGroupStore,
        host: &mut dyn SurfaceHost,
    ) -> Vec<BoundInput> {
        let mut inputs = Vec::new();

        while let Ok(event) = self.rx.try_recv() {
            match event {
                SurfaceEvent::Created {
                    pane,
                    request_id,
                    result,
                } => self.on_created(pane, request_id, result, host),
                SurfaceEvent::Crashed(surface) => self.on_crashed(surface, host),
                SurfaceEvent::Input { surface, input } => match self.bound_group(&surface) {
                    Some(group) => inputs.push(BoundInput {
                        group,
                        surface,
                        input,
                    }),
                    None => debug!(surface = %surface.surface, "dropping input from unbound surface"),
                },
                SurfaceEvent::PageLoaded { surface, url } => {
                    if self.is_bound(&surface) {
                        store.record_navigation(surface.pane, &url);
                    }
                }
                SurfaceEvent::TitleChanged { surface, title } => {
                    if self.is_bound(&surface) {
                        store.set_tab_title(surface.pane, &title);
                    }
                }
            }
        }

        inputs
    }

    fn on_created(
        &mut self,
        pane: PaneId,
        request_id: u64,
        result: Result<SurfaceId, String>,
        host: &mut dyn SurfaceHost,
    ) {
        let cancelled = self
            .requests
            .remove(&request_id)
            .map_or(true, |(_, token)| token.is_cancelled());
        let current = matches!(
            self.slots.get(&pane),
            Some(Slot { state: SlotState::Pending { request_id: id, .. }, .. }) if *id == request_id
        );

        if cancelled || !current {
            if let Ok(surface) = result {
                debug!(pane_id = %pane, request_id, "discarding surface for a request no longer wanted");
                host.destroy(&ContentRef { pane, surface });
            }
            return;
        }

        let Some(slot) = self.slots.get_mut(&pane) else {
            return;
        };
        let requested_tab = match &slot.state {
            SlotState::Pending { tab, .. } => *tab,
            _ => slot.tab,
        };

        match result {
            Ok(surface) => {
                let content = ContentRef { pane, surface };
                if requested_tab != slot.tab {
                    if let Err(e) =
                        host.navigate(&content, NavigationCommand::Load(slot.url.clone()))
                    {
                        warn!(pane_id = %pane, error = %e, "failed to load tab");
                    }
                }
                info!(pane_id = %pane, surface = %content.surface, "surface bound");
                slot.attempts = 0;
                slot.state = SlotState::Live(content);
                self.notices.push(BinderNotice::Ready(pane));
            }
            Err(reason) => {
                slot.attempts += 1;
                warn!(pane_id = %pane, attempts = slot.attempts, reason = %reason, "surface creation failed");
                slot.state = SlotState::Failed {
                    attempts: slot.attempts,
                    reason: reason.clone(),
                };
                self.notices.push(BinderNotice::Failed { pane, reason });
            }
        }
    }

    fn on_crashed(&mut self, surface: ContentRef, host: &mut dyn SurfaceHost) {
        let Some(slot) = self.slots.get_mut(&surface.pane) else {
            return;
        };
        if slot.live() != Some(&surface) {
            debug!(surface = %surface.surface, "crash report for unbound surface");
            return;
        }
        warn!(pane_id = %surface.pane, surface = %surface.surface, "surface crashed");
        host.destroy(&surface);
        let pane = surface.pane;
        slot.state = SlotState::Lost(surface);
        self.notices.push(BinderNotice::Lost(pane));
    }
}
