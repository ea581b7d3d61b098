//! Error types for the editor

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid project JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Session is not file-backed")]
    NotFileBacked,

    #[error("Project file not found: {}", .0.display())]
    NotFound(PathBuf),
}
