// src/widget/mod.rs

//! The widget core tying everything together.
//!
//! This module owns:
//! - the [`TreeGrid`] context: one tree plus one selection store per widget
//!   instance
//! - the command dispatch that is the sole mutation entry point for pointer
//!   callbacks
//! - the render seam: a snapshot of the currently visible state, consumed
//!   by a pluggable [`RenderBackend`]
//!
//! The core is synchronous and deterministic: every command runs to
//! completion inside the host's event callback and yields exactly one
//! redraw pass. There is no IO here; tests drive it with a fake backend.

use crate::selection::store::CellId;
use crate::tree::node::NodeId;

/// A pointer-driven mutation, dispatched through [`TreeGrid::apply`].
#[derive(Debug, Clone)]
pub enum Command {
    /// Click on a node label: flip its expand/collapse state.
    ToggleNode(NodeId),
    /// Click on an execution cell: flip it and cascade to affected leaves.
    ToggleCell(CellId),
    /// Expand every node.
    ExpandAll,
    /// Restore the initial visibility (root expanded, rest collapsed).
    CollapseAll,
}

/// Result of applying a single [`Command`].
#[derive(Debug, Clone)]
pub struct WidgetStep {
    /// Cells whose checked state changed (empty for visibility commands).
    pub changed_cells: Vec<CellId>,
    /// Whether the render backend should redraw. Always `true`: every
    /// applied command produces exactly one re-render pass.
    pub redraw: bool,
}

pub mod core;
pub mod render;

pub use core::TreeGrid;
pub use render::{CellView, LinkView, NodeView, RenderBackend, RenderSnapshot, TimeAxis};
