pub mod actions;
pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use actions::Action;
pub use errors::{ConfigError, ShellError, SurfaceError, TilingError};
pub use events::{EventBus, HostCommand, ShellEvent};
pub use id::{new_id, SurfaceId};
pub use types::{GroupId, Orientation, PaneId, Rect, TabId};

pub type Result<T> = std::result::Result<T, ShellError>;
