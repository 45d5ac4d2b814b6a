// Fri Oct 16 2026 - Alex

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no struct declaration found in {0}")]
    StructNotFound(PathBuf),
    #[error("expected {expected} fields but got {actual}")]
    FieldCountMismatch { expected: usize, actual: usize },
}
