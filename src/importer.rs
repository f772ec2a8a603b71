// src/importer.rs

use crate::error::Result;
use crate::svg_models::{SvgSymbol, ViewBox};
use glam::Vec2;
use roxmltree::{Document, Node};
use std::collections::HashSet;

/// Parses an SVG document into the geometry the converter needs.
///
/// A document with no path elements is not an error here; the converter
/// decides whether empty geometry is fatal.
pub fn import_svg(content: &str) -> Result<SvgSymbol> {
    let doc = Document::parse(content)?;

    let viewbox = parse_viewbox(doc.root_element());
    let paths = extract_paths(&doc);

    Ok(SvgSymbol { viewbox, paths })
}

/// Reads the viewBox from the document root. A missing or malformed viewBox
/// falls back to the width/height attributes with an implicit zero origin.
fn parse_viewbox(root: Node) -> ViewBox {
    if let Some(viewbox) = root.attribute("viewBox") {
        let parts: Vec<&str> = viewbox.split_whitespace().collect();
        if parts.len() == 4 {
            let numbers: Vec<f32> = parts.iter().filter_map(|p| p.parse().ok()).collect();
            if numbers.len() == 4 {
                return ViewBox {
                    min: Vec2::new(numbers[0], numbers[1]),
                    size: Vec2::new(numbers[2], numbers[3]),
                };
            }
        }
    }

    ViewBox {
        min: Vec2::ZERO,
        size: Vec2::new(
            dimension_attribute(root, "width"),
            dimension_attribute(root, "height"),
        ),
    }
}

fn dimension_attribute(root: Node, name: &str) -> f32 {
    root.attribute(name)
        .map(|value| value.trim_end_matches("px"))
        .and_then(|value| value.parse().ok())
        .unwrap_or(100.0)
}

/// Collects the deduplicated path data strings from the document, in
/// first-seen order.
///
/// Documents built on the <symbol>/<use> pattern keep the real geometry once,
/// inside the <symbol> element, and reference it from <use> sites. When any
/// <symbol> is present, extraction is restricted to those subtrees so the
/// referencing sites cannot duplicate geometry. Namespace prefixes are
/// ignored throughout.
pub fn extract_paths(doc: &Document) -> Vec<String> {
    let mut paths = Vec::new();
    let mut seen = HashSet::new();

    let symbols: Vec<Node> = doc
        .descendants()
        .filter(|node| node.is_element() && node.tag_name().name() == "symbol")
        .collect();

    if symbols.is_empty() {
        collect_path_data(doc.root(), &mut paths, &mut seen);
    } else {
        for symbol in symbols {
            collect_path_data(symbol, &mut paths, &mut seen);
        }
    }

    paths
}

fn collect_path_data(scope: Node, paths: &mut Vec<String>, seen: &mut HashSet<String>) {
    for node in scope.descendants() {
        if node.is_element() && node.tag_name().name() == "path" {
            if let Some(d) = node.attribute("d") {
                if !d.is_empty() && seen.insert(d.to_string()) {
                    paths.push(d.to_string());
                }
            }
        }
    }
}
