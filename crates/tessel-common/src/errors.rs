use std::path::PathBuf;

use crate::types::{GroupId, PaneId, TabId};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("invalid hotkey '{binding}': {reason}")]
    InvalidHotkey { binding: String, reason: String },

    #[error("config watch error: {0}")]
    WatchError(String),
}

/// Structural errors raised by the layout engine and the tab group store.
///
/// Every variant leaves the prior state untouched: a failed mutation is
/// never partially applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TilingError {
    #[error("pane not found: {0}")]
    PaneNotFound(PaneId),

    #[error("tab group not found: {0}")]
    GroupNotFound(GroupId),

    #[error("tab not found: {0}")]
    TabNotFound(TabId),

    #[error("no active tab group")]
    NoActiveGroup,

    #[error("order mismatch: expected a permutation of {expected} groups, got {got}")]
    OrderMismatch { expected: usize, got: usize },

    #[error("layout invariant violation: {0}")]
    LayoutInvariantViolation(String),

    #[error("no split at path {0}")]
    SplitPathNotFound(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    #[error("surface creation failed for {pane}: {reason}")]
    CreationFailed { pane: PaneId, reason: String },

    #[error("surface for {0} is gone")]
    SurfaceGone(PaneId),

    #[error("surface host error: {0}")]
    Host(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Tiling(#[from] TilingError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
