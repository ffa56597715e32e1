use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KetikError {
    #[error("Candidate pool not found: {}", .0.display())]
    PoolNotFound(PathBuf),

    #[error("Suggestion worker disconnected")]
    WorkerDisconnected,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
