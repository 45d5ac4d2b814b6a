// Fri Oct 16 2026 - Alex

pub mod error;

pub use error::SourceError;

use crate::structure::Field;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

const STRUCT_MARKER: &str = " struct {";
const BLOCK_END: &str = "}";

static STRUCT_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"type\s+(\w+)\s+struct\s*\{").expect("valid struct name regex"));

/// A source file holding one struct declaration, split into lines so the
/// field block can be rewritten in place.
#[derive(Debug, Clone)]
pub struct StructSource {
    path: PathBuf,
    lines: Vec<String>,
    name: Option<String>,
    first_field: usize,
    field_lines: Vec<String>,
}

impl StructSource {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &contents)
    }

    /// Finds the first line containing ` struct {`; every following line up
    /// to the first one containing `}` is a field.
    pub fn parse<P: AsRef<Path>>(path: P, contents: &str) -> Result<Self, SourceError> {
        let path = path.as_ref().to_path_buf();
        let lines: Vec<String> = contents.split('\n').map(|l| l.to_string()).collect();

        let header = lines
            .iter()
            .position(|line| line.contains(STRUCT_MARKER))
            .ok_or_else(|| SourceError::StructNotFound(path.clone()))?;

        let name = STRUCT_NAME
            .captures(&lines[header])
            .map(|caps| caps[1].to_string());

        let first_field = header + 1;
        let field_lines = lines[first_field..]
            .iter()
            .take_while(|line| !line.contains(BLOCK_END))
            .map(|line| line.trim().to_string())
            .collect::<Vec<_>>();

        log::debug!(
            "found struct {} with {} field lines at line {}",
            name.as_deref().unwrap_or("<anonymous>"),
            field_lines.len(),
            first_field
        );

        Ok(Self {
            path,
            lines,
            name,
            first_field,
            field_lines,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn field_lines(&self) -> &[String] {
        &self.field_lines
    }

    /// Replaces the field block with `fields`, one tab-indented line each.
    pub fn apply(&mut self, fields: &[Field]) -> Result<(), SourceError> {
        if fields.len() != self.field_lines.len() {
            return Err(SourceError::FieldCountMismatch {
                expected: self.field_lines.len(),
                actual: fields.len(),
            });
        }

        for (i, field) in fields.iter().enumerate() {
            self.lines[self.first_field + i] = format!("\t{}", field.line());
            self.field_lines[i] = field.line().to_string();
        }
        Ok(())
    }

    pub fn contents(&self) -> String {
        self.lines.join("\n")
    }

    pub fn save(&self) -> Result<(), SourceError> {
        fs::write(&self.path, self.contents()).map_err(|source| SourceError::Write {
            path: self.path.clone(),
            source,
        })?;
        log::info!("wrote optimized struct back to {}", self.path.display());
        Ok(())
    }
}
