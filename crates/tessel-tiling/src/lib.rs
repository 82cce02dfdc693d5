//! Tab groups and their split-pane layouts.
//!
//! - [`tree`]: the binary split tree of panes and its persistent operations
//! - [`layout`]: tree-to-rectangle geometry for positioning surfaces
//! - [`store`]: the ordered tab group collection, the single owner of all
//!   structural state
//! - [`reorder`]: drag-and-drop reordering of tab groups

pub mod layout;
pub mod reorder;
pub mod store;
pub mod tree;

pub use layout::{LayoutEngine, SplitBorder};
pub use reorder::{DragEnd, DropPosition, ReorderController};
pub use store::{CloseOutcome, StoreSnapshot, Tab, TabGroup, TabGroupStore, VisiblePane};
pub use tree::{Branch, LayoutNode};
