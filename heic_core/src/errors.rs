//! Unified error type for the conversion workflow
//!
//! Only two variants abort a whole run: `DirectoryAccess` (the listing itself
//! failed, nothing is processed) and `AlreadyRunning` (startup guard).
//! Decode/encode failures are caught at the task boundary by the executor and
//! recorded in that task's result instead of propagating.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Failed to list directory {path}: {source}")]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {0}: {1}")]
    Decode(PathBuf, String),

    #[error("Failed to encode {0}: {1}")]
    Encode(PathBuf, String),

    #[error("Application is already running")]
    AlreadyRunning,

    #[error("Failed to acquire instance lock: {0}")]
    InstanceLock(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
