// Fri Oct 16 2026 - Alex

use crate::structure::{Size, SizeClass, TypeInfo};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One struct member: its name, resolved type and the source line it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    name: String,
    type_info: TypeInfo,
    class: SizeClass,
    line: String,
}

impl Field {
    pub fn new(name: &str, type_info: TypeInfo, class: SizeClass) -> Self {
        let line = format!("{} {}", name, type_info);
        Self {
            name: name.to_string(),
            type_info,
            class,
            line,
        }
    }

    /// Keeps the original declaration text (tags, comments) for write-back.
    pub fn with_line(mut self, line: &str) -> Self {
        self.line = line.to_string();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_info(&self) -> &TypeInfo {
        &self.type_info
    }

    pub fn class(&self) -> SizeClass {
        self.class
    }

    pub fn size(&self) -> Size {
        self.class.size()
    }

    pub fn line(&self) -> &str {
        &self.line
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}
