// Fri Oct 16 2026 - Alex

pub mod config;
pub mod output;
pub mod source;
pub mod structure;
pub mod ui;
pub mod utils;
pub mod words;

pub use config::Config;
pub use output::ReportFormatter;
pub use source::StructSource;
pub use structure::{Field, LayoutCalculator, OptimizationReport, Optimizer, StructureValidator, TypeCatalog};
pub use words::top_words;
