use tessel_common::{GroupId, PaneId, ShellEvent, TabId};
use tokio_util::sync::CancellationToken;

use crate::events::SurfaceInput;
use crate::host::ContentRef;

/// Where a pane's surface is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceState {
    /// A create request is in flight.
    Pending,
    Live(ContentRef),
    /// Creation failed `attempts` times in a row. Shown as an inline error
    /// with a retry affordance once retries run out.
    Failed { attempts: u32, reason: String },
    /// The surface crashed; it is rebuilt on the next reconcile.
    Lost(ContentRef),
}

#[derive(Debug)]
pub(super) enum SlotState {
    Pending {
        request_id: u64,
        token: CancellationToken,
        /// Tab the request was made for.
        tab: TabId,
    },
    Live(ContentRef),
    Failed {
        attempts: u32,
        reason: String,
    },
    Lost(ContentRef),
}

/// Binder bookkeeping for one visible pane.
#[derive(Debug)]
pub(super) struct Slot {
    pub group: GroupId,
    /// Tab the pane should be showing.
    pub tab: TabId,
    pub url: String,
    /// Consecutive failed creations; reset once a surface goes live.
    pub attempts: u32,
    pub state: SlotState,
}

impl Slot {
    pub fn public_state(&self) -> SurfaceState {
        match &self.state {
            SlotState::Pending { .. } => SurfaceState::Pending,
            SlotState::Live(c) => SurfaceState::Live(c.clone()),
            SlotState::Failed { attempts, reason } => SurfaceState::Failed {
                attempts: *attempts,
                reason: reason.clone(),
            },
            SlotState::Lost(c) => SurfaceState::Lost(c.clone()),
        }
    }

    pub fn live(&self) -> Option<&ContentRef> {
        match &self.state {
            SlotState::Live(c) => Some(c),
            _ => None,
        }
    }
}

/// Lifecycle changes the host may want to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinderNotice {
    /// A surface is bound and can receive queued input.
    Ready(PaneId),
    Failed { pane: PaneId, reason: String },
    Lost(PaneId),
}

impl BinderNotice {
    pub fn to_shell_event(&self) -> Option<ShellEvent> {
        match self {
            BinderNotice::Ready(pane) => Some(ShellEvent::SurfaceReady(*pane)),
            BinderNotice::Failed { pane, reason } => Some(ShellEvent::SurfaceFailed {
                pane: *pane,
                reason: reason.clone(),
            }),
            BinderNotice::Lost(_) => None,
        }
    }
}

/// What one reconcile pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Panes a create request was issued for.
    pub requested: Vec<PaneId>,
    /// Panes whose surface was torn down or whose pending request was
    /// cancelled.
    pub released: Vec<PaneId>,
    /// Panes whose live surface was pointed at a different tab.
    pub navigated: Vec<PaneId>,
}

impl ReconcileReport {
    pub fn is_empty(&self) -> bool {
        self.requested.is_empty() && self.released.is_empty() && self.navigated.is_empty()
    }
}

/// Input from a surface that is still the live surface of its pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundInput {
    pub group: GroupId,
    pub surface: ContentRef,
    pub input: SurfaceInput,
}

impl BoundInput {
    pub fn pane(&self) -> PaneId {
        self.surface.pane
    }
}
