//! Errors raised while reading and writing files.
//!
//! Rewriting itself never fails; only the file system around it can.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create output directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to list directory {}", .path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConvertError {
    /// Path of the file or directory the failed operation touched.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ConvertError::Read { path, .. }
            | ConvertError::Write { path, .. }
            | ConvertError::CreateDir { path, .. }
            | ConvertError::ListDir { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
