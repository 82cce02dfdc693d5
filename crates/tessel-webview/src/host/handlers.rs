//! Event handlers attached to each webview at build time.
//!
//! Each handler knows the [`ContentRef`] it was built for, so events from a
//! webview that was replaced are recognized as stale by the binder.

use tessel_surface::{ContentRef, SurfaceEvent, SurfaceInput};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info};
use wry::{PageLoadEvent, WebViewBuilder};

use crate::ipc::parse_ipc_message;

pub(super) fn attach_ipc_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: UnboundedSender<SurfaceEvent>,
    surface: ContentRef,
) -> WebViewBuilder<'a> {
    builder.with_ipc_handler(move |request| {
        let Some(input) = parse_ipc_message(request.body()) else {
            return;
        };
        debug!(pane_id = %surface.pane, ?input, "surface input");
        let _ = events.send(SurfaceEvent::Input {
            surface: surface.clone(),
            input,
        });
    })
}

pub(super) fn attach_page_load_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: UnboundedSender<SurfaceEvent>,
    surface: ContentRef,
) -> WebViewBuilder<'a> {
    builder.with_on_page_load_handler(move |event, url| {
        if !matches!(event, PageLoadEvent::Finished) {
            return;
        }
        debug!(pane_id = %surface.pane, url = %url, "page loaded");
        let _ = events.send(SurfaceEvent::PageLoaded {
            surface: surface.clone(),
            url,
        });
    })
}

pub(super) fn attach_title_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: UnboundedSender<SurfaceEvent>,
    surface: ContentRef,
) -> WebViewBuilder<'a> {
    builder.with_document_title_changed_handler(move |title| {
        let _ = events.send(SurfaceEvent::TitleChanged {
            surface: surface.clone(),
            title,
        });
    })
}

/// Refuse every popup and hand its URL to the shell instead.
pub(super) fn attach_new_window_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: UnboundedSender<SurfaceEvent>,
    surface: ContentRef,
) -> WebViewBuilder<'a> {
    builder.with_new_window_req_handler(move |url| {
        info!(pane_id = %surface.pane, url = %url, "new window denied");
        let _ = events.send(SurfaceEvent::Input {
            surface: surface.clone(),
            input: SurfaceInput::NewWindow { url },
        });
        false
    })
}
