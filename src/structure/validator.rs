// Fri Oct 16 2026 - Alex

use crate::structure::{Field, StructureError, TypeCatalog};

/// Checks raw struct body lines (`<name> <type> [...]`) against a catalog.
pub struct StructureValidator<'a> {
    catalog: &'a TypeCatalog,
}

impl<'a> StructureValidator<'a> {
    pub fn new(catalog: &'a TypeCatalog) -> Self {
        Self { catalog }
    }

    pub fn validate<S: AsRef<str>>(&self, lines: &[S]) -> Result<(), StructureError> {
        for (index, line) in lines.iter().enumerate() {
            self.check_line(index + 1, line.as_ref())?;
        }
        Ok(())
    }

    /// Validates every line and resolves it into a [`Field`].
    pub fn parse_fields<S: AsRef<str>>(&self, lines: &[S]) -> Result<Vec<Field>, StructureError> {
        let fields = lines
            .iter()
            .enumerate()
            .map(|(index, line)| self.check_line(index + 1, line.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("validated {} fields", fields.len());
        Ok(fields)
    }

    /// `number` is 1-based and only used for error reporting.
    pub fn check_line(&self, number: usize, line: &str) -> Result<Field, StructureError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(StructureError::EmptyField { line: number });
        }

        let mut tokens = line.split_whitespace();
        let (name, type_name) = match (tokens.next(), tokens.next()) {
            (Some(name), Some(type_name)) => (name, type_name),
            _ => return Err(StructureError::MalformedField(line.to_string())),
        };

        Ok(self.catalog.field(name, type_name)?.with_line(line))
    }
}
