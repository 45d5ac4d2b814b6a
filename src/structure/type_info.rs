// Fri Oct 16 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeInfo {
    Primitive(PrimitiveType),
    /// A pointer-like type such as `*Node`, stored as written.
    Reference(String),
    /// A type registered through configuration with an explicit size.
    Custom { name: String, size: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveType {
    Int8,
    Int16,
    Int32,
    Int64,
    Int,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uint,
    Float32,
    Float64,
    Complex64,
    Complex128,
    Byte,
    Rune,
    Uintptr,
    String,
}

impl TypeInfo {
    pub fn size(&self, word_size: usize) -> usize {
        match self {
            Self::Primitive(ty) => ty.size(word_size),
            Self::Reference(_) => word_size,
            Self::Custom { size, .. } => *size,
        }
    }
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 18] = [
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Int,
        Self::Uint8,
        Self::Uint16,
        Self::Uint32,
        Self::Uint64,
        Self::Uint,
        Self::Float32,
        Self::Float64,
        Self::Complex64,
        Self::Complex128,
        Self::Byte,
        Self::Rune,
        Self::Uintptr,
        Self::String,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Int => "int",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Uint => "uint",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Complex64 => "complex64",
            Self::Complex128 => "complex128",
            Self::Byte => "byte",
            Self::Rune => "rune",
            Self::Uintptr => "uintptr",
            Self::String => "string",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|ty| ty.name() == name)
    }

    pub fn size(self, word_size: usize) -> usize {
        match self {
            Self::Int8 | Self::Uint8 | Self::Byte => 1,
            Self::Int16 | Self::Uint16 => 2,
            Self::Int32 | Self::Uint32 | Self::Float32 | Self::Rune => 4,
            Self::Int64 | Self::Uint64 | Self::Float64 | Self::Complex64 => 8,
            Self::Complex128 => 16,
            Self::Int | Self::Uint | Self::Uintptr => word_size,
            // pointer + length
            Self::String => 2 * word_size,
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(ty) => write!(f, "{}", ty),
            Self::Reference(token) => f.write_str(token),
            Self::Custom { name, .. } => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_names_round_trip() {
        for ty in PrimitiveType::ALL {
            assert_eq!(PrimitiveType::from_name(ty.name()), Some(ty));
        }
        assert_eq!(PrimitiveType::from_name("float128"), None);
        assert_eq!(PrimitiveType::from_name("bool"), None);
    }

    #[test]
    fn test_word_sized_primitives_follow_word_size() {
        assert_eq!(PrimitiveType::Int.size(8), 8);
        assert_eq!(PrimitiveType::Uintptr.size(4), 4);
        assert_eq!(PrimitiveType::String.size(8), 16);
        assert_eq!(PrimitiveType::String.size(4), 8);
        assert_eq!(PrimitiveType::Complex128.size(4), 16);
    }

    #[test]
    fn test_reference_is_word_sized() {
        let ty = TypeInfo::Reference("*Node".to_string());
        assert_eq!(ty.size(8), 8);
        assert_eq!(ty.to_string(), "*Node");
    }
}
