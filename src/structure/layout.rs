// Fri Oct 16 2026 - Alex

use crate::structure::{Alignment, Field, Size, SizeClass};

/// A field together with the offset it lands on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedField {
    field: Field,
    offset: usize,
}

impl PlacedField {
    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn end_offset(&self) -> usize {
        self.offset + self.field.size().as_usize()
    }
}

/// A field ordering with its computed offsets and total size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureLayout {
    fields: Vec<PlacedField>,
    size: Size,
    alignment: Alignment,
}

impl StructureLayout {
    pub fn fields(&self) -> &[PlacedField] {
        &self.fields
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn data_size(&self) -> Size {
        self.fields.iter().map(|p| p.field.size()).fold(Size::zero(), |a, b| a + b)
    }

    pub fn padding(&self) -> usize {
        self.size.as_usize() - self.data_size().as_usize()
    }

    pub fn get_field(&self, name: &str) -> Option<&PlacedField> {
        self.fields.iter().find(|p| p.field.name() == name)
    }
}

/// Running state of the packing walk.
#[derive(Debug, Default)]
struct Packer {
    offset: usize,
    cap: usize,
    alignment: Alignment,
}

impl Packer {
    /// Appends one field and returns the offset it starts at.
    fn push(&mut self, class: SizeClass) -> usize {
        self.alignment.raise_to(class.alignment());
        let start = match class {
            SizeClass::One => {
                self.offset += 1;
                self.offset - 1
            }
            SizeClass::Two => {
                self.offset += self.offset % 2 + 2;
                self.offset - 2
            }
            SizeClass::Four => {
                if self.offset % 4 == 0 {
                    self.offset += 4;
                } else {
                    self.offset += 8 - self.offset % 4;
                }
                self.offset - 4
            }
            SizeClass::Eight => {
                if self.offset % 8 == 0 {
                    self.offset += 8;
                } else {
                    self.offset += 16 - self.offset % 8;
                }
                self.offset - 8
            }
            SizeClass::Sixteen => {
                if self.offset % 8 == 0 {
                    self.offset += 16;
                } else {
                    self.offset += 24 - self.offset % 8;
                }
                self.offset - 16
            }
        };

        if self.offset > self.cap {
            self.cap = self.alignment.align(self.offset);
        }
        start
    }
}

/// Simulates the compiler's natural-alignment struct packing.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutCalculator;

impl LayoutCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn compute_size(&self, fields: &[Field]) -> Size {
        let mut packer = Packer::default();
        for field in fields {
            packer.push(field.class());
        }
        Size::new(packer.cap)
    }

    pub fn place(&self, fields: &[Field]) -> StructureLayout {
        let mut packer = Packer::default();
        let placed = fields
            .iter()
            .map(|field| PlacedField {
                offset: packer.push(field.class()),
                field: field.clone(),
            })
            .collect();

        StructureLayout {
            fields: placed,
            size: Size::new(packer.cap),
            alignment: packer.alignment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::TypeCatalog;

    fn fields(types: &[&str]) -> Vec<Field> {
        let catalog = TypeCatalog::new(8);
        types
            .iter()
            .enumerate()
            .map(|(i, ty)| catalog.field(&format!("f{}", i), ty).unwrap())
            .collect()
    }

    fn size_of(types: &[&str]) -> usize {
        LayoutCalculator::new().compute_size(&fields(types)).as_usize()
    }

    #[test]
    fn test_empty_struct_is_zero_sized() {
        assert_eq!(size_of(&[]), 0);
    }

    #[test]
    fn test_golden_sizes() {
        assert_eq!(size_of(&["int8", "int64", "int16"]), 24);
        assert_eq!(size_of(&["int64", "int16", "int8"]), 16);
        assert_eq!(size_of(&["int8", "int32", "int8"]), 12);
        assert_eq!(size_of(&["int16", "int8", "int16"]), 6);
        assert_eq!(size_of(&["byte", "int64", "byte", "int64"]), 32);
        assert_eq!(size_of(&["int64", "int64", "byte", "byte"]), 24);
        assert_eq!(size_of(&["string", "int8"]), 24);
        assert_eq!(size_of(&["complex128", "int32", "int8"]), 24);
        assert_eq!(size_of(&["int8", "complex128"]), 24);
        assert_eq!(size_of(&["int8", "int8", "int8"]), 3);
        assert_eq!(size_of(&["rune", "*Node", "uint16"]), 24);
    }

    #[test]
    fn test_golden_sizes_with_four_byte_words() {
        let catalog = TypeCatalog::new(4);
        let calc = LayoutCalculator::new();
        let size = |types: &[&str]| {
            let fields: Vec<Field> = types
                .iter()
                .enumerate()
                .map(|(i, ty)| catalog.field(&format!("f{}", i), ty).unwrap())
                .collect();
            calc.compute_size(&fields).as_usize()
        };

        // string is two 4-byte words and lands in the 8-byte class
        assert_eq!(size(&["int8", "string", "*T"]), 24);
        assert_eq!(size(&["int8", "int", "uint16"]), 12);
        assert_eq!(size(&["*T", "uintptr", "int8"]), 12);
    }

    #[test]
    fn test_size_is_multiple_of_max_alignment() {
        let calc = LayoutCalculator::new();
        let layout = calc.place(&fields(&["int16", "int8", "int32", "int8"]));
        assert_eq!(layout.alignment().as_usize(), 4);
        assert_eq!(layout.size().as_usize(), 12);
        assert_eq!(layout.size().as_usize() % layout.alignment().as_usize(), 0);
    }

    #[test]
    fn test_place_reports_offsets_and_padding() {
        let calc = LayoutCalculator::new();
        let layout = calc.place(&fields(&["int8", "int64", "int16"]));

        let offsets: Vec<usize> = layout.fields().iter().map(|p| p.offset()).collect();
        assert_eq!(offsets, vec![0, 8, 16]);
        assert_eq!(layout.size().as_usize(), 24);
        assert_eq!(layout.data_size().as_usize(), 11);
        assert_eq!(layout.padding(), 13);
        assert_eq!(layout.get_field("f2").map(|p| p.end_offset()), Some(18));
    }

    #[test]
    fn test_place_agrees_with_compute_size() {
        let calc = LayoutCalculator::new();
        let fields = fields(&["uint16", "complex64", "byte", "string", "float32"]);
        assert_eq!(calc.place(&fields).size(), calc.compute_size(&fields));
    }

    #[test]
    fn test_compute_size_is_repeatable() {
        let calc = LayoutCalculator::new();
        let fields = fields(&["int32", "int8", "int64"]);
        assert_eq!(calc.compute_size(&fields), calc.compute_size(&fields));
    }
}
