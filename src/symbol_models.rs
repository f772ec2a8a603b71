// src/symbol_models.rs

use serde::Serialize;
use std::fmt::Write;

/// A named connection point on a symbol's boundary.
#[derive(Debug, Clone, Serialize)]
pub struct Pin {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub direction: PinDirection,
}

impl Pin {
    pub fn new(id: &str, x: f32, y: f32, direction: PinDirection) -> Self {
        Pin {
            id: id.to_string(),
            x,
            y,
            direction,
        }
    }
}

/// The side of the symbol a pin faces. Consumed by downstream layout and
/// connection logic, never validated against the drawn geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PinDirection {
    Left,
    Right,
    Top,
    Bottom,
}

impl PinDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            PinDirection::Left => "left",
            PinDirection::Right => "right",
            PinDirection::Top => "top",
            PinDirection::Bottom => "bottom",
        }
    }
}

/// An alternate legal rendering of the same logical symbol.
///
/// IEC 60617 allows several depictions of one part; a variant only carries
/// its own artwork. Dimensions and pins are shared with the parent symbol.
#[derive(Debug, Clone, Serialize)]
pub struct SymbolVariant {
    pub variant_id: String,
    pub svg_path: String,
    pub description: String,
}

/// Complete symbol definition with optional variants.
///
/// Field order matters: it is the serialized key order of the JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct SymbolDefinition {
    pub id: String,
    pub name: String,
    pub category: String,
    pub width: f32,
    pub height: f32,
    pub pins: Vec<Pin>,
    pub svg_path: String,
    pub variants: Vec<SymbolVariant>,
    pub source: String,
    pub iec_reference: String,
    pub tags: Vec<String>,
}

impl SymbolDefinition {
    /// Identifier-safe constant name derived from the id, e.g.
    /// "normally-open-contact" -> "NORMALLY_OPEN_CONTACT".
    pub fn const_name(&self) -> String {
        self.id.to_uppercase().replace('-', "_")
    }

    /// Attaches an alternate rendering. Variants share this symbol's
    /// dimensions and pins, so only the normalized path data is stored.
    pub fn add_variant(&mut self, variant_id: &str, svg_path: String, description: &str) {
        self.variants.push(SymbolVariant {
            variant_id: variant_id.to_string(),
            svg_path,
            description: description.to_string(),
        });
    }

    /// Generates the registerSymbol block for the TypeScript symbol library.
    pub fn to_registration_entry(&self) -> String {
        let mut out = String::new();
        writeln!(&mut out, "// {}", self.name).unwrap();
        writeln!(&mut out, "registerSymbol('{}', {{", self.id).unwrap();
        writeln!(&mut out, "  name: '{}',", self.name).unwrap();
        writeln!(
            &mut out,
            "  category: '{}' as SymbolCategory,",
            self.category
        )
        .unwrap();
        writeln!(&mut out, "  width: {},", self.width).unwrap();
        writeln!(&mut out, "  height: {},", self.height).unwrap();
        writeln!(&mut out, "  svgPath: '{}',", self.svg_path).unwrap();

        if !self.pins.is_empty() {
            writeln!(&mut out, "  pins: [").unwrap();
            for pin in &self.pins {
                writeln!(
                    &mut out,
                    "    {{ id: '{}', x: {}, y: {}, direction: '{}' }},",
                    pin.id,
                    pin.x,
                    pin.y,
                    pin.direction.as_str()
                )
                .unwrap();
            }
            writeln!(&mut out, "  ],").unwrap();
        }

        if !self.variants.is_empty() {
            writeln!(&mut out, "  variants: [").unwrap();
            for variant in &self.variants {
                writeln!(
                    &mut out,
                    "    {{ variantId: '{}', svgPath: '{}', description: '{}' }},",
                    variant.variant_id, variant.svg_path, variant.description
                )
                .unwrap();
            }
            writeln!(&mut out, "  ],").unwrap();
        }

        writeln!(&mut out, "}});").unwrap();
        out
    }
}
