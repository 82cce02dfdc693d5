//! Keeps exactly one content surface per visible pane.
//!
//! [`SurfaceBinder::reconcile`] diffs the panes in the store against the
//! surfaces it knows about: new panes get a create request, removed panes
//! lose their surface, unchanged panes are left alone so history and
//! scroll position survive. Creation is asynchronous; the host answers on
//! the channel from [`SurfaceBinder::sender`], and the answers are applied
//! by [`SurfaceBinder::process_events`].
//!
//! Every create request carries a cancellation token. Removing a pane
//! cancels it, and a completion that arrives for a cancelled or superseded
//! request is destroyed on arrival, so no surface outlives its pane.

mod events;
mod placement;
mod reconcile;
mod types;


use std::collections::HashMap;

use tessel_common::{GroupId, PaneId};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::events::SurfaceEvent;
use crate::host::ContentRef;

pub use types::{BinderNotice, BoundInput, ReconcileReport, SurfaceState};
use types::{Slot, SlotState};

/// Creation attempts per pane before it waits for an explicit retry.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// The only writer of pane to surface bindings.
pub struct SurfaceBinder {
    slots: HashMap<PaneId, Slot>,
    /// Create requests the host has not answered yet.
    requests: HashMap<u64, (PaneId, CancellationToken)>,
    next_request: u64,
    max_attempts: u32,
    tx: mpsc::UnboundedSender<SurfaceEvent>,
    rx: mpsc::UnboundedReceiver<SurfaceEvent>,
    notices: Vec<BinderNotice>,
}

impl SurfaceBinder {
    pub fn new(max_attempts: u32) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            slots: HashMap::new(),
            requests: HashMap::new(),
            next_request: 1,
            max_attempts: max_attempts.max(1),
            tx,
            rx,
            notices: Vec::new(),
        }
    }

    /// Sender a [`SurfaceHost`](crate::host::SurfaceHost) reports on.
    pub fn sender(&self) -> mpsc::UnboundedSender<SurfaceEvent> {
        self.tx.clone()
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn set_max_attempts(&mut self, max_attempts: u32) {
        self.max_attempts = max_attempts.max(1);
    }

    /// The live surface bound to `pane`, if any.
    pub fn content_ref(&self, pane: PaneId) -> Option<&ContentRef> {
        self.slots.get(&pane).and_then(Slot::live)
    }

    pub fn surface_state(&self, pane: PaneId) -> Option<SurfaceState> {
        self.slots.get(&pane).map(Slot::public_state)
    }

    /// Whether `surface` is still the live surface of its pane.
    pub fn is_bound(&self, surface: &ContentRef) -> bool {
        self.content_ref(surface.pane) == Some(surface)
    }

    /// Panes the binder currently tracks, in no particular order.
    pub fn panes(&self) -> Vec<PaneId> {
        self.slots.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of create requests still waiting for an answer.
    pub fn in_flight(&self) -> usize {
        self.requests.len()
    }

    /// Reset the failure count of a pane whose surface could not be built,
    /// so the next reconcile tries again. Returns false unless the pane is
    /// in the failed state.
    pub fn retry(&mut self, pane: PaneId) -> bool {
        match self.slots.get_mut(&pane) {
            Some(slot) if matches!(slot.state, SlotState::Failed { .. }) => {
                slot.attempts = 0;
                tracing::debug!(pane_id = %pane, "surface retry requested");
                true
            }
            _ => false,
        }
    }

    pub fn drain_notices(&mut self) -> Vec<BinderNotice> {
        std::mem::take(&mut self.notices)
    }

    fn bound_group(&self, surface: &ContentRef) -> Option<GroupId> {
        self.slots
            .get(&surface.pane)
            .filter(|slot| slot.live() == Some(surface))
            .map(|slot| slot.group)
    }
}

impl Default for SurfaceBinder {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}
