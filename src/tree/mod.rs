// src/tree/mod.rs

//! Tree representation of one DAG.
//!
//! - [`node`] holds the node arena: every [`TreeNode`] lives in one owned
//!   `Vec`, referenced by [`NodeId`] index.
//! - [`builder`] turns the host's flat record list into a validated tree
//!   rooted at a synthetic DAG node.
//! - [`rows`] derives the per-node row of selection cells and populates the
//!   shared selection store.

pub mod builder;
pub mod node;
pub mod rows;

pub use builder::{build_tree, ROOT_ID};
pub use node::{NodeId, Tree, TreeNode};
pub use rows::build_rows;
