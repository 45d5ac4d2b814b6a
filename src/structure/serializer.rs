// Fri Oct 16 2026 - Alex

use crate::structure::{Candidate, LayoutCalculator, OptimizationReport, StructureLayout};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct SerializableLayout {
    fields: Vec<SerializableField>,
    size: usize,
    alignment: usize,
    padding: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SerializableField {
    name: String,
    #[serde(rename = "type")]
    type_name: String,
    offset: usize,
    size: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SerializableReport {
    name: Option<String>,
    baseline: SerializableLayout,
    greedy: SerializableLayout,
    brute_force: Vec<SerializableLayout>,
    permutations_evaluated: u64,
}

impl From<&StructureLayout> for SerializableLayout {
    fn from(layout: &StructureLayout) -> Self {
        Self {
            fields: layout
                .fields()
                .iter()
                .map(|p| SerializableField {
                    name: p.field().name().to_string(),
                    type_name: p.field().type_info().to_string(),
                    offset: p.offset(),
                    size: p.field().size().as_usize(),
                })
                .collect(),
            size: layout.size().as_usize(),
            alignment: layout.alignment().as_usize(),
            padding: layout.padding(),
        }
    }
}

impl SerializableLayout {
    pub fn from_candidate(calculator: &LayoutCalculator, candidate: &Candidate) -> Self {
        Self::from(&calculator.place(candidate.ordering()))
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

impl SerializableReport {
    pub fn new(name: Option<&str>, report: &OptimizationReport) -> Self {
        let calculator = LayoutCalculator::new();
        Self {
            name: name.map(|n| n.to_string()),
            baseline: SerializableLayout::from_candidate(&calculator, &report.baseline),
            greedy: SerializableLayout::from_candidate(&calculator, &report.greedy),
            brute_force: report
                .brute_force
                .iter()
                .map(|c| SerializableLayout::from_candidate(&calculator, c))
                .collect(),
            permutations_evaluated: report.permutations_evaluated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::{Optimizer, TypeCatalog};

    #[test]
    fn test_report_json_shape() {
        let catalog = TypeCatalog::new(8);
        let fields = vec![
            catalog.field("a", "int8").unwrap(),
            catalog.field("b", "*Node").unwrap(),
        ];
        let report = Optimizer::new().run(fields).unwrap();
        let json = serde_json::to_value(SerializableReport::new(Some("Pair"), &report)).unwrap();

        assert_eq!(json["name"], "Pair");
        assert_eq!(json["baseline"]["size"], 16);
        assert_eq!(json["baseline"]["padding"], 7);
        assert_eq!(json["baseline"]["fields"][1]["type"], "*Node");
        assert_eq!(json["baseline"]["fields"][1]["offset"], 8);
        assert_eq!(json["greedy"]["fields"][0]["name"], "b");
        assert_eq!(json["brute_force"].as_array().map(|a| a.len()), Some(3));
        assert_eq!(json["permutations_evaluated"], 2);
    }
}
