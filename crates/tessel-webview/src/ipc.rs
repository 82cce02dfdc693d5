//! The JavaScript side of a content surface.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: the init script posts JSON through `window.ipc`, parsed
//!   here into [`SurfaceInput`].
//! - **Rust -> JS**: the host evaluates scripts built here, e.g. to draw a
//!   context menu.

use tessel_surface::{MenuEntry, SurfaceInput};
use tracing::warn;

/// Injected into every surface before any page script runs.
///
/// Forwards chords that could be hotkeys (anything with Ctrl, Alt or Meta,
/// function keys, Escape) and right clicks on links or selected text. The
/// page still receives every key; unmapped ones behave as usual.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    if (window.__tessel) return;

    function post(msg) {
        try { window.ipc.postMessage(JSON.stringify(msg)); } catch (_) {}
    }

    var lastPointer = { x: 0, y: 0 };
    var menu = null;

    function closeMenu() {
        if (menu) { menu.remove(); menu = null; }
    }

    function renderEntries(container, entries) {
        entries.forEach(function(entry) {
            var row = document.createElement('div');
            row.textContent = entry.label;
            row.style.cssText = 'padding:4px 16px;cursor:default;white-space:nowrap;';
            if (entry.type === 'submenu') {
                row.style.opacity = '0.6';
                container.appendChild(row);
                var nested = document.createElement('div');
                nested.style.paddingLeft = '12px';
                renderEntries(nested, entry.entries);
                container.appendChild(nested);
                return;
            }
            row.addEventListener('mouseenter', function() { row.style.background = 'rgba(128,128,128,0.25)'; });
            row.addEventListener('mouseleave', function() { row.style.background = ''; });
            row.addEventListener('mousedown', function(e) {
                e.preventDefault();
                e.stopPropagation();
                closeMenu();
                post({ kind: 'menu-pick', action: entry.action });
            });
            container.appendChild(row);
        });
    }

    window.__tessel = {
        showMenu: function(entries) {
            closeMenu();
            menu = document.createElement('div');
            menu.style.cssText = 'position:fixed;z-index:2147483647;padding:4px 0;' +
                'font:13px system-ui,sans-serif;background:#fff;color:#111;' +
                'border:1px solid rgba(0,0,0,0.2);border-radius:6px;' +
                'box-shadow:0 4px 16px rgba(0,0,0,0.2);';
            menu.style.left = lastPointer.x + 'px';
            menu.style.top = lastPointer.y + 'px';
            renderEntries(menu, entries);
            document.documentElement.appendChild(menu);
        },
        closeMenu: closeMenu
    };

    window.addEventListener('mousedown', function(e) {
        if (menu && !menu.contains(e.target)) closeMenu();
    }, true);

    window.addEventListener('keydown', function(e) {
        if (e.key === 'Escape') closeMenu();
        var chord = e.ctrlKey || e.altKey || e.metaKey;
        if (!chord && !/^F\d{1,2}$/.test(e.key) && e.key !== 'Escape') return;
        post({
            kind: 'key',
            key: e.key,
            ctrl: e.ctrlKey,
            alt: e.altKey,
            shift: e.shiftKey,
            meta: e.metaKey
        });
    }, true);

    window.addEventListener('contextmenu', function(e) {
        lastPointer = { x: e.clientX, y: e.clientY };
        var link = e.target && e.target.closest ? e.target.closest('a[href]') : null;
        var selection = window.getSelection ? String(window.getSelection()) : '';
        if (!link && !selection.trim()) return;
        e.preventDefault();
        post({
            kind: 'context-menu',
            linkURL: link ? link.href : null,
            selectionText: selection || null
        });
    }, true);
})();
"#;

/// Parse a message posted by [`IPC_INIT_SCRIPT`]. Anything else is logged
/// and dropped.
pub fn parse_ipc_message(body: &str) -> Option<SurfaceInput> {
    match serde_json::from_str(body) {
        Ok(input) => Some(input),
        Err(e) => {
            warn!(body_len = body.len(), error = %e, "IPC message rejected");
            None
        }
    }
}

/// Script that draws `entries` as a menu at the last right-click position.
pub fn show_menu_script(entries: &[MenuEntry]) -> String {
    let json = serde_json::to_string(entries).unwrap_or_else(|_| "[]".to_string());
    format!("window.__tessel && window.__tessel.showMenu({json});")
}

pub const GO_BACK_SCRIPT: &str = "history.back();";
pub const GO_FORWARD_SCRIPT: &str = "history.forward();";
pub const RELOAD_SCRIPT: &str = "location.reload();";
