use tessel_common::{Rect, SurfaceError, SurfaceId};
use tessel_surface::{
    ContentRef, CreateRequest, MenuEntry, NavigationCommand, SurfaceEvent, SurfaceHost,
};
use tracing::{debug, error, info, warn};
use wry::raw_window_handle::HasWindowHandle;
use wry::{WebView, WebViewBuilder};

use crate::bounds::rect_to_wry;
use crate::ipc::{
    show_menu_script, GO_BACK_SCRIPT, GO_FORWARD_SCRIPT, IPC_INIT_SCRIPT, RELOAD_SCRIPT,
};

use super::handlers;
use super::WryHost;

impl<W: HasWindowHandle> WryHost<W> {
    fn build(&mut self, request: &CreateRequest) -> Result<SurfaceId, wry::Error> {
        let surface = ContentRef {
            pane: request.pane,
            surface: SurfaceId::new(),
        };

        let mut builder = WebViewBuilder::new()
            .with_url(&request.url)
            .with_visible(false)
            .with_focused(false)
            .with_devtools(self.config.devtools)
            .with_clipboard(self.config.clipboard)
            .with_user_agent(&self.config.user_agent)
            .with_initialization_script(IPC_INIT_SCRIPT);

        builder = handlers::attach_ipc_handler(builder, self.events.clone(), surface.clone());
        builder = handlers::attach_page_load_handler(builder, self.events.clone(), surface.clone());
        builder = handlers::attach_title_handler(builder, self.events.clone(), surface.clone());
        builder = handlers::attach_new_window_handler(builder, self.events.clone(), surface.clone());

        let webview = builder.build_as_child(&*self.window)?;
        info!(pane_id = %surface.pane, surface = %surface.surface, url = %request.url, "webview created");

        let id = surface.surface.clone();
        self.surfaces.insert(surface, webview);
        Ok(id)
    }

    fn webview(&self, surface: &ContentRef) -> Result<&WebView, SurfaceError> {
        self.surfaces
            .get(surface)
            .ok_or(SurfaceError::SurfaceGone(surface.pane))
    }
}

fn host_error(e: wry::Error) -> SurfaceError {
    SurfaceError::Host(e.to_string())
}

impl<W: HasWindowHandle> SurfaceHost for WryHost<W> {
    fn create(&mut self, request: CreateRequest) {
        let result = if request.token.is_cancelled() {
            debug!(pane_id = %request.pane, "skipping cancelled surface request");
            Err("request cancelled".to_string())
        } else {
            self.build(&request).map_err(|e| {
                error!(pane_id = %request.pane, error = %e, "failed to create webview");
                e.to_string()
            })
        };

        let _ = self.events.send(SurfaceEvent::Created {
            pane: request.pane,
            request_id: request.request_id,
            result,
        });
    }

    fn destroy(&mut self, surface: &ContentRef) {
        if self.surfaces.remove(surface).is_some() {
            debug!(pane_id = %surface.pane, surface = %surface.surface, "webview destroyed");
        }
    }

    fn is_alive(&self, surface: &ContentRef) -> bool {
        self.surfaces.contains_key(surface)
    }

    fn navigate(
        &mut self,
        surface: &ContentRef,
        command: NavigationCommand,
    ) -> Result<(), SurfaceError> {
        let webview = self.webview(surface)?;
        let result = match command {
            NavigationCommand::Load(url) => webview.load_url(&url),
            NavigationCommand::Reload => webview.evaluate_script(RELOAD_SCRIPT),
            NavigationCommand::GoBack => webview.evaluate_script(GO_BACK_SCRIPT),
            NavigationCommand::GoForward => webview.evaluate_script(GO_FORWARD_SCRIPT),
            NavigationCommand::ToggleDevTools => {
                if !self.config.devtools {
                    warn!(pane_id = %surface.pane, "devtools are disabled");
                } else if webview.is_devtools_open() {
                    webview.close_devtools();
                } else {
                    webview.open_devtools();
                }
                Ok(())
            }
        };
        result.map_err(host_error)
    }

    fn set_bounds(&mut self, surface: &ContentRef, bounds: Rect) -> Result<(), SurfaceError> {
        self.webview(surface)?
            .set_bounds(rect_to_wry(&bounds))
            .map_err(host_error)
    }

    fn set_visible(&mut self, surface: &ContentRef, visible: bool) -> Result<(), SurfaceError> {
        self.webview(surface)?
            .set_visible(visible)
            .map_err(host_error)
    }

    fn show_menu(
        &mut self,
        surface: &ContentRef,
        entries: &[MenuEntry],
    ) -> Result<(), SurfaceError> {
        self.webview(surface)?
            .evaluate_script(&show_menu_script(entries))
            .map_err(host_error)
    }

    fn focus(&mut self, surface: &ContentRef) -> Result<(), SurfaceError> {
        self.webview(surface)?.focus().map_err(host_error)
    }

    fn focus_parent(&mut self) {
        if let Some(webview) = self.surfaces.values().next() {
            if let Err(e) = webview.focus_parent() {
                warn!(error = %e, "failed to return focus to the window");
            }
        }
    }
}
