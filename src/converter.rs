// src/converter.rs

use crate::error::{Error, Result};
use crate::path_data;
use crate::svg_models::{SvgSymbol, SymbolIdentity};
use crate::symbol_models::{Pin, PinDirection, SymbolDefinition};
use glam::Vec2;

const SYMBOL_SOURCE: &str = "radica-software";

/// Proposes connection points from the symbol's bounding box.
///
/// Electrical artwork usually runs either top-to-bottom (contacts, coils) or
/// left-to-right (terminal strips), so the aspect ratio decides which two
/// edges get a pin; ties favor the vertical placement. The path geometry is
/// accepted for future refinement but not consulted yet, which makes the
/// result a starting estimate for manual correction, not a guarantee.
pub fn infer_pins(width: f32, height: f32, _paths: &[String]) -> Vec<Pin> {
    let center = Vec2::new(width, height) * 0.5;

    if width > height * 1.5 {
        vec![
            Pin::new("1", 0.0, center.y, PinDirection::Left),
            Pin::new("2", width, center.y, PinDirection::Right),
        ]
    } else {
        vec![
            Pin::new("1", center.x, 0.0, PinDirection::Top),
            Pin::new("2", center.x, height, PinDirection::Bottom),
        ]
    }
}

/// Converts parsed SVG geometry into a fusionCad symbol definition.
///
/// A document without path geometry yields no record; the caller treats that
/// as a per-document skip.
pub fn convert_symbol(svg: &SvgSymbol, identity: &SymbolIdentity) -> Result<SymbolDefinition> {
    if svg.paths.is_empty() {
        return Err(Error::MissingData(format!(
            "no path geometry in '{}'",
            identity.id
        )));
    }

    let width = svg.viewbox.width();
    let height = svg.viewbox.height();
    if width < 0.0 || height < 0.0 {
        return Err(Error::ParseError(format!(
            "negative viewBox dimensions for '{}'",
            identity.id
        )));
    }

    let svg_path =
        path_data::normalize_paths(&svg.paths, svg.viewbox.min.x, svg.viewbox.min.y, 1.0);
    let pins = infer_pins(width, height, &svg.paths);

    Ok(SymbolDefinition {
        id: identity.id.clone(),
        name: identity.name.clone(),
        category: identity.category.clone(),
        width,
        height,
        pins,
        svg_path,
        variants: Vec::new(),
        source: SYMBOL_SOURCE.to_string(),
        iec_reference: String::new(),
        tags: vec![identity.id.replace('-', " ")],
    })
}
