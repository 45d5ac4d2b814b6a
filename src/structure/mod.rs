// Fri Oct 16 2026 - Alex

pub mod alignment;
pub mod catalog;
pub mod error;
pub mod field;
pub mod layout;
pub mod optimizer;
pub mod permutation;
pub mod serializer;
pub mod size;
pub mod top_k;
pub mod type_info;
pub mod validator;

pub use alignment::Alignment;
pub use catalog::{TypeCatalog, NATIVE_WORD_SIZE};
pub use error::StructureError;
pub use field::Field;
pub use layout::{LayoutCalculator, PlacedField, StructureLayout};
pub use optimizer::{Candidate, OptimizationReport, Optimizer};
pub use permutation::HeapPermutations;
pub use serializer::{SerializableLayout, SerializableReport};
pub use size::{Size, SizeClass};
pub use top_k::TopK;
pub use type_info::{PrimitiveType, TypeInfo};
pub use validator::StructureValidator;
