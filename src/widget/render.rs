// src/widget/render.rs

//! Pluggable rendering backend abstraction.
//!
//! The widget core hands a [`RenderSnapshot`] (plain data describing the
//! currently visible nodes, links, and rows) to a [`RenderBackend`] and
//! stays ignorant of how it is drawn. Production embeds a real
//! vector-graphics backend; tests use a recording fake.

use chrono::{DateTime, FixedOffset};

use crate::errors::Result;
use crate::selection::store::{CellId, CellKind};
use crate::tree::node::NodeId;

/// Trait abstracting how a snapshot is drawn.
pub trait RenderBackend {
    /// Draw or update the visual representation to match `snapshot`.
    fn draw(&mut self, snapshot: &RenderSnapshot) -> Result<()>;
}

/// One visible cell of a node's row.
#[derive(Debug, Clone, PartialEq)]
pub struct CellView {
    pub id: CellId,
    pub kind: CellKind,
    pub checked: bool,
}

/// One visible node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeView {
    pub id: NodeId,
    pub task_id: String,
    pub label: String,
    /// Distance from the root (root = 0); drives horizontal indentation.
    pub depth: usize,
    pub is_group: bool,
    pub collapsed: bool,
    pub cells: Vec<CellView>,
}

/// One visible parent->child link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkView {
    pub parent: NodeId,
    pub child: NodeId,
}

/// Domain for the instant -> horizontal position mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeAxis {
    pub min: DateTime<FixedOffset>,
    pub max: DateTime<FixedOffset>,
}

/// Plain-data description of everything currently drawn.
///
/// Contains exactly the nodes whose ancestors are all expanded, in
/// depth-first order, with the links between them and the time-axis domain
/// spanning all leaf cells (`None` when there are none).
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSnapshot {
    pub nodes: Vec<NodeView>,
    pub links: Vec<LinkView>,
    pub axis: Option<TimeAxis>,
}
