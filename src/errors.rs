// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeGridError {
    #[error("duplicate record id '{0}' in input")]
    DuplicateId(String),

    #[error("record '{task}' references unknown group '{group}'")]
    DanglingParent { task: String, group: String },

    #[error("record '{task}' cannot reach the DAG root (cycle in group_id chain)")]
    UnreachableRecord { task: String },

    #[error("invalid execution timestamp '{value}' on task '{task}': {source}")]
    InvalidTimestamp {
        task: String,
        value: String,
        source: chrono::ParseError,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, TreeGridError>;
