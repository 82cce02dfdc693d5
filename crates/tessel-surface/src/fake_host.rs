//! In-memory [`SurfaceHost`] for tests.

use std::collections::{HashMap, HashSet};

use tessel_common::{PaneId, Rect, SurfaceError, SurfaceId};
use tokio::sync::mpsc::UnboundedSender;

use crate::events::{SurfaceEvent, SurfaceInput};
use crate::host::{ContentRef, CreateRequest, NavigationCommand, SurfaceHost};
use crate::menu::MenuEntry;

pub(crate) struct FakeHost {
    tx: UnboundedSender<SurfaceEvent>,
    /// Answer create requests immediately instead of holding them.
    pub auto_complete: bool,
    /// Number of upcoming creations that fail.
    pub fail_next: u32,
    pub held: Vec<CreateRequest>,
    pub created: usize,
    pub alive: HashSet<ContentRef>,
    pub destroyed: Vec<ContentRef>,
    pub navigations: Vec<(ContentRef, NavigationCommand)>,
    pub bounds: HashMap<ContentRef, Rect>,
    pub visible: HashMap<ContentRef, bool>,
    pub menus: Vec<(ContentRef, Vec<MenuEntry>)>,
    pub focused: Option<ContentRef>,
    pub parent_focused: bool,
    next_id: u32,
}

impl FakeHost {
    pub fn new(tx: UnboundedSender<SurfaceEvent>) -> Self {
        Self {
            tx,
            auto_complete: true,
            fail_next: 0,
            held: Vec::new(),
            created: 0,
            alive: HashSet::new(),
            destroyed: Vec::new(),
            navigations: Vec::new(),
            bounds: HashMap::new(),
            visible: HashMap::new(),
            menus: Vec::new(),
            focused: None,
            parent_focused: false,
            next_id: 1,
        }
    }

    pub fn holding(tx: UnboundedSender<SurfaceEvent>) -> Self {
        Self {
            auto_complete: false,
            ..Self::new(tx)
        }
    }

    /// Answer a held request with a fresh surface.
    pub fn complete(&mut self, request_id: u64) -> ContentRef {
        let index = self
            .held
            .iter()
            .position(|r| r.request_id == request_id)
            .expect("no held request with that id");
        let request = self.held.remove(index);
        self.succeed(&request)
    }

    pub fn live_for(&self, pane: PaneId) -> Option<ContentRef> {
        self.alive.iter().find(|c| c.pane == pane).cloned()
    }

    /// Kill a surface without telling anyone.
    pub fn kill(&mut self, surface: &ContentRef) {
        self.alive.remove(surface);
    }

    /// Kill a surface and report the crash.
    pub fn crash(&mut self, surface: &ContentRef) {
        self.kill(surface);
        self.tx.send(SurfaceEvent::Crashed(surface.clone())).unwrap();
    }

    pub fn send_input(&self, surface: &ContentRef, input: SurfaceInput) {
        self.tx
            .send(SurfaceEvent::Input {
                surface: surface.clone(),
                input,
            })
            .unwrap();
    }

    pub fn send(&self, event: SurfaceEvent) {
        self.tx.send(event).unwrap();
    }

    fn succeed(&mut self, request: &CreateRequest) -> ContentRef {
        let surface = SurfaceId::from(format!("fake-{}", self.next_id).as_str());
        self.next_id += 1;
        self.created += 1;
        let content = ContentRef {
            pane: request.pane,
            surface: surface.clone(),
        };
        self.alive.insert(content.clone());
        self.send(SurfaceEvent::Created {
            pane: request.pane,
            request_id: request.request_id,
            result: Ok(surface),
        });
        content
    }
}

impl SurfaceHost for FakeHost {
    fn create(&mut self, request: CreateRequest) {
        if !self.auto_complete {
            self.held.push(request);
            return;
        }
        if self.fail_next > 0 {
            self.fail_next -= 1;
            self.send(SurfaceEvent::Created {
                pane: request.pane,
                request_id: request.request_id,
                result: Err("renderer unavailable".into()),
            });
            return;
        }
        self.succeed(&request);
    }

    fn destroy(&mut self, surface: &ContentRef) {
        self.alive.remove(surface);
        self.destroyed.push(surface.clone());
    }

    fn is_alive(&self, surface: &ContentRef) -> bool {
        self.alive.contains(surface)
    }

    fn navigate(
        &mut self,
        surface: &ContentRef,
        command: NavigationCommand,
    ) -> Result<(), SurfaceError> {
        if !self.alive.contains(surface) {
            return Err(SurfaceError::SurfaceGone(surface.pane));
        }
        self.navigations.push((surface.clone(), command));
        Ok(())
    }

    fn set_bounds(&mut self, surface: &ContentRef, bounds: Rect) -> Result<(), SurfaceError> {
        self.bounds.insert(surface.clone(), bounds);
        Ok(())
    }

    fn set_visible(&mut self, surface: &ContentRef, visible: bool) -> Result<(), SurfaceError> {
        self.visible.insert(surface.clone(), visible);
        Ok(())
    }

    fn show_menu(
        &mut self,
        surface: &ContentRef,
        entries: &[MenuEntry],
    ) -> Result<(), SurfaceError> {
        self.menus.push((surface.clone(), entries.to_vec()));
        Ok(())
    }

    fn focus(&mut self, surface: &ContentRef) -> Result<(), SurfaceError> {
        self.focused = Some(surface.clone());
        self.parent_focused = false;
        Ok(())
    }

    fn focus_parent(&mut self) {
        self.focused = None;
        self.parent_focused = true;
    }
}
