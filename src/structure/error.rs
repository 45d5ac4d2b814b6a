// Fri Oct 16 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    #[error("empty field line in struct body (line {line}), please delete it")]
    EmptyField { line: usize },
    #[error("invalid field in the struct body: {0}")]
    MalformedField(String),
    #[error("could not recognize type {0}")]
    UnknownType(String),
    #[error("type {name} has unsupported size {size}")]
    UnsupportedSize { name: String, size: usize },
    #[error("{count} fields is too many for brute force search (limit {limit})")]
    TooManyFields { count: usize, limit: usize },
}
