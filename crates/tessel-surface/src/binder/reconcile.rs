use std::collections::HashSet;

use tessel_common::PaneId;
use tessel_tiling::TabGroupStore;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::host::{CreateRequest, NavigationCommand, SurfaceHost};

use super::types::{BinderNotice, ReconcileReport, Slot, SlotState};
use super::SurfaceBinder;

impl SurfaceBinder {
    /// Bring the set of surfaces in line with the panes in `store`.
    pub fn reconcile(
        &mut self,
        store: &TabGroupStore,
        host: &mut dyn SurfaceHost,
    ) -> ReconcileReport {
        let mut report = ReconcileReport::default();
        let desired = store.visible_panes();
        let wanted: HashSet<PaneId> = desired.iter().map(|v| v.pane).collect();

        let gone: Vec<PaneId> = self
            .slots
            .keys()
            .filter(|pane| !wanted.contains(pane))
            .copied()
            .collect();
        for pane in gone {
            if let Some(slot) = self.slots.remove(&pane) {
                release(pane, slot, host);
                report.released.push(pane);
            }
        }

        for visible in desired {
            let pane = visible.pane;
            let needs_create = match self.slots.get_mut(&pane) {
                None => {
                    self.slots.insert(
                        pane,
                        Slot {
                            group: visible.group,
                            tab: visible.tab,
                            url: visible.url,
                            attempts: 0,
                            state: SlotState::Failed {
                                attempts: 0,
                                reason: String::new(),
                            },
                        },
                    );
                    true
                }
                Some(slot) => {
                    let tab_changed = slot.tab != visible.tab;
                    slot.group = visible.group;
                    slot.tab = visible.tab;
                    slot.url = visible.url;

                    match &slot.state {
                        SlotState::Live(surface) if !host.is_alive(surface) => {
                            warn!(pane_id = %pane, surface = %surface.surface, "surface found dead");
                            host.destroy(surface);
                            slot.state = SlotState::Lost(surface.clone());
                            self.notices.push(BinderNotice::Lost(pane));
                            true
                        }
                        SlotState::Live(surface) => {
                            if tab_changed {
                                match host.navigate(surface, NavigationCommand::Load(slot.url.clone())) {
                                    Ok(()) => report.navigated.push(pane),
                                    Err(e) => warn!(pane_id = %pane, error = %e, "failed to load tab"),
                                }
                            }
                            false
                        }
                        SlotState::Lost(_) => true,
                        SlotState::Failed { .. } => slot.attempts < self.max_attempts,
                        SlotState::Pending { .. } => false,
                    }
                }
            };

            if needs_create {
                self.request(pane, host);
                report.requested.push(pane);
            }
        }

        if !report.is_empty() {
            debug!(
                requested = report.requested.len(),
                released = report.released.len(),
                navigated = report.navigated.len(),
                "surfaces reconciled"
            );
        }
        report
    }

    /// Tear down every surface, e.g. on shutdown.
    pub fn release_all(&mut self, host: &mut dyn SurfaceHost) {
        for (pane, slot) in self.slots.drain() {
            release(pane, slot, host);
        }
    }

    fn request(&mut self, pane: PaneId, host: &mut dyn SurfaceHost) {
        let Some(slot) = self.slots.get_mut(&pane) else {
            return;
        };

        let request_id = self.next_request;
        self.next_request += 1;
        let token = CancellationToken::new();

        slot.state = SlotState::Pending {
            request_id,
            token: token.clone(),
            tab: slot.tab,
        };
        self.requests.insert(request_id, (pane, token.clone()));

        info!(pane_id = %pane, request_id, url = %slot.url, "requesting content surface");
        host.create(CreateRequest {
            pane,
            request_id,
            url: slot.url.clone(),
            token,
        });
    }
}

fn release(pane: PaneId, slot: Slot, host: &mut dyn SurfaceHost) {
    match slot.state {
        SlotState::Pending { request_id, token, .. } => {
            token.cancel();
            debug!(pane_id = %pane, request_id, "cancelled pending surface");
        }
        SlotState::Live(surface) => {
            host.destroy(&surface);
            info!(pane_id = %pane, surface = %surface.surface, "surface released");
        }
        // Destroyed when the loss was detected.
        SlotState::Lost(surface) => {
            debug!(pane_id = %pane, surface = %surface.surface, "dropped lost surface");
        }
        SlotState::Failed { .. } => {}
    }
}
