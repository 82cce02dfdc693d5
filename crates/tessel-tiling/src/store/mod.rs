mod dispatch;
mod groups;
mod invariant;
mod panes;
mod snapshot;
mod tabs;
mod types;

pub use dispatch::GroupMenuAction;
pub use snapshot::{GroupSnapshot, StoreSnapshot};
pub use types::*;
