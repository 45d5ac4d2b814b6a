// Fri Oct 16 2026 - Alex

use crate::config::Config;
use crate::structure::{Field, PrimitiveType, SizeClass, StructureError, TypeInfo};
use indexmap::IndexMap;

/// Pointer width of the host the optimizer runs on.
pub const NATIVE_WORD_SIZE: usize = std::mem::size_of::<usize>();

pub const DEFAULT_REFERENCE_MARKER: char = '*';

/// Read-only table of recognized type names. Built once per run and shared
/// by reference with the validator.
#[derive(Debug, Clone)]
pub struct TypeCatalog {
    entries: IndexMap<String, TypeInfo>,
    word_size: usize,
    reference_marker: char,
}

impl TypeCatalog {
    pub fn new(word_size: usize) -> Self {
        let entries = PrimitiveType::ALL
            .iter()
            .map(|ty| (ty.name().to_string(), TypeInfo::Primitive(*ty)))
            .collect();
        Self {
            entries,
            word_size,
            reference_marker: DEFAULT_REFERENCE_MARKER,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let mut catalog = Self::new(config.word_size).with_reference_marker(config.reference_marker);
        for (name, size) in &config.extra_types {
            catalog = catalog.with_type(name, *size);
        }
        catalog
    }

    pub fn with_reference_marker(mut self, marker: char) -> Self {
        self.reference_marker = marker;
        self
    }

    /// Registers an extra named type. Built-in names are not overridden.
    pub fn with_type(mut self, name: &str, size: usize) -> Self {
        self.entries.entry(name.to_string()).or_insert_with(|| TypeInfo::Custom {
            name: name.to_string(),
            size,
        });
        self
    }

    /// A marker followed by at least one more character.
    pub fn is_reference(&self, type_name: &str) -> bool {
        let mut chars = type_name.chars();
        chars.next() == Some(self.reference_marker) && chars.next().is_some()
    }

    pub fn resolve(&self, type_name: &str) -> Result<TypeInfo, StructureError> {
        if let Some(info) = self.entries.get(type_name) {
            return Ok(info.clone());
        }
        if self.is_reference(type_name) {
            return Ok(TypeInfo::Reference(type_name.to_string()));
        }
        Err(StructureError::UnknownType(type_name.to_string()))
    }

    pub fn size_of(&self, type_name: &str) -> Result<usize, StructureError> {
        self.resolve(type_name).map(|info| info.size(self.word_size))
    }

    pub fn field(&self, name: &str, type_name: &str) -> Result<Field, StructureError> {
        let info = self.resolve(type_name)?;
        let size = info.size(self.word_size);
        let class = SizeClass::from_bytes(size).ok_or_else(|| StructureError::UnsupportedSize {
            name: type_name.to_string(),
            size,
        })?;
        Ok(Field::new(name, info, class))
    }
}

impl Default for TypeCatalog {
    fn default() -> Self {
        Self::new(NATIVE_WORD_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_sizes_on_64_bit() {
        let catalog = TypeCatalog::new(8);
        assert_eq!(catalog.size_of("int8"), Ok(1));
        assert_eq!(catalog.size_of("byte"), Ok(1));
        assert_eq!(catalog.size_of("uint16"), Ok(2));
        assert_eq!(catalog.size_of("rune"), Ok(4));
        assert_eq!(catalog.size_of("float32"), Ok(4));
        assert_eq!(catalog.size_of("complex64"), Ok(8));
        assert_eq!(catalog.size_of("int"), Ok(8));
        assert_eq!(catalog.size_of("uintptr"), Ok(8));
        assert_eq!(catalog.size_of("complex128"), Ok(16));
        assert_eq!(catalog.size_of("string"), Ok(16));
    }

    #[test]
    fn test_word_size_is_substituted() {
        let catalog = TypeCatalog::new(4);
        assert_eq!(catalog.size_of("int"), Ok(4));
        assert_eq!(catalog.size_of("string"), Ok(8));
        assert_eq!(catalog.size_of("*Node"), Ok(4));
    }

    #[test]
    fn test_reference_detection() {
        let catalog = TypeCatalog::new(8);
        assert!(catalog.is_reference("*int32"));
        assert!(catalog.is_reference("**T"));
        assert!(!catalog.is_reference("*"));
        assert!(!catalog.is_reference("int32"));
        assert_eq!(catalog.size_of("*SomeStruct"), Ok(8));
        assert_eq!(
            catalog.size_of("*"),
            Err(StructureError::UnknownType("*".to_string()))
        );
    }

    #[test]
    fn test_unknown_type() {
        let catalog = TypeCatalog::new(8);
        assert_eq!(
            catalog.size_of("float128"),
            Err(StructureError::UnknownType("float128".to_string()))
        );
    }

    #[test]
    fn test_custom_marker_and_types() {
        let catalog = TypeCatalog::new(8)
            .with_reference_marker('&')
            .with_type("bool", 1)
            .with_type("int8", 4);
        assert!(catalog.is_reference("&T"));
        assert!(!catalog.is_reference("*T"));
        assert_eq!(catalog.size_of("bool"), Ok(1));
        assert_eq!(catalog.size_of("int8"), Ok(1));
    }

    #[test]
    fn test_field_rejects_unsupported_size() {
        let catalog = TypeCatalog::new(8).with_type("triple", 3);
        assert_eq!(
            catalog.field("t", "triple"),
            Err(StructureError::UnsupportedSize { name: "triple".to_string(), size: 3 })
        );
        let field = catalog.field("p", "*Node").unwrap();
        assert_eq!(field.size().as_usize(), 8);
        assert_eq!(field.line(), "p *Node");
    }
}
