// src/lib.rs

pub mod errors;
pub mod record;
pub mod selection;
pub mod tree;
pub mod widget;

pub use errors::{Result, TreeGridError};
pub use record::{GroupRecord, LeafRecord, TaskRecord};
pub use selection::{CellId, CellKind, ExcludedTaskInstance};
pub use tree::{NodeId, ROOT_ID};
pub use widget::{Command, RenderBackend, RenderSnapshot, TreeGrid, WidgetStep};
