// Source-side models: what we pull out of a Radica SVG document before it
// becomes a fusionCad symbol.

use glam::Vec2;

/// The viewBox declaration of an SVG document: minimum corner and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min: Vec2,
    pub size: Vec2,
}

impl ViewBox {
    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }
}

impl Default for ViewBox {
    fn default() -> Self {
        ViewBox {
            min: Vec2::ZERO,
            size: Vec2::new(100.0, 100.0),
        }
    }
}

/// Geometry extracted from one SVG document: the viewBox plus the
/// deduplicated path data strings, in document order.
#[derive(Debug, Clone)]
pub struct SvgSymbol {
    pub viewbox: ViewBox,
    pub paths: Vec<String>,
}

/// Identity metadata for a symbol under conversion.
///
/// Callers supply this explicitly so the converter never has to know where
/// a document came from; `from_file_stem` is the usual derivation for
/// filesystem inputs.
#[derive(Debug, Clone)]
pub struct SymbolIdentity {
    pub id: String,
    pub name: String,
    pub category: String,
}

impl SymbolIdentity {
    pub fn new(id: &str, name: &str, category: &str) -> Self {
        SymbolIdentity {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
        }
    }

    /// Derives identity from a file stem: underscores become hyphens and the
    /// result is lowercased to form the slug, e.g. "NO_Contact" ->
    /// "no-contact" / "No Contact".
    pub fn from_file_stem(stem: &str, category: &str) -> Self {
        let slug = stem.replace('_', "-").to_lowercase();
        let name = slug_to_name(&slug);
        SymbolIdentity {
            id: slug,
            name,
            category: category.to_string(),
        }
    }
}

/// Converts a slug to a human-readable name by capitalizing each
/// hyphen-separated word.
pub fn slug_to_name(slug: &str) -> String {
    slug.split('-')
        .map(capitalize)
        .collect::<Vec<String>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
