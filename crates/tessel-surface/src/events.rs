//! Events flowing from content surfaces back to the shell.

use serde::{Deserialize, Serialize};
use tessel_common::{PaneId, SurfaceId};

use crate::host::ContentRef;
use crate::menu::MenuAction;

/// A raw key press observed inside a surface, in DOM terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyInput {
    pub key: String,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub meta: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl: false,
            alt: false,
            shift: false,
            meta: false,
        }
    }
}

/// What was under the pointer when a context menu was requested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextInfo {
    #[serde(default, rename = "linkURL")]
    pub link_url: Option<String>,
    #[serde(default, rename = "selectionText")]
    pub selection: Option<String>,
}

/// Input a surface forwards to the router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SurfaceInput {
    Key(KeyInput),
    ContextMenu(ContextInfo),
    /// Content tried to open a window; the host has already refused it.
    NewWindow { url: String },
    /// The user picked an entry from a menu shown with
    /// [`SurfaceHost::show_menu`](crate::host::SurfaceHost::show_menu).
    MenuPick { action: MenuAction },
}

/// Everything the host reports back to the binder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// Answer to a [`CreateRequest`](crate::host::CreateRequest).
    Created {
        pane: PaneId,
        request_id: u64,
        result: Result<SurfaceId, String>,
    },
    /// The surface died without being asked to.
    Crashed(ContentRef),
    Input {
        surface: ContentRef,
        input: SurfaceInput,
    },
    PageLoaded {
        surface: ContentRef,
        url: String,
    },
    TitleChanged {
        surface: ContentRef,
        title: String,
    },
}
