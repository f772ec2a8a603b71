// src/lib.rs

pub mod api;
pub mod converter;
pub mod error;
pub mod file_writer;
pub mod importer;
pub mod path_data;
pub mod svg_models;
pub mod symbol_models;

use crate::error::{Error, Result};
use crate::svg_models::SymbolIdentity;
use crate::symbol_models::SymbolDefinition;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Converts a single local SVG document into a symbol definition, deriving
/// identity from the file name.
pub fn convert_file(svg_path: &Path, category: &str) -> Result<SymbolDefinition> {
    let content = fs::read_to_string(svg_path)?;
    let identity = identity_from_path(svg_path, category)?;
    let svg = importer::import_svg(&content)?;
    converter::convert_symbol(&svg, &identity)
}

/// Converts every .svg document in a directory.
///
/// Files are converted independently and in parallel; an individual failure
/// is logged and skipped. The batch ordering comes from the sorted file
/// list, never from completion order. A batch that produces nothing at all
/// is an error, distinct from a partial result.
pub fn convert_directory(input_dir: &Path, category: &str) -> Result<Vec<SymbolDefinition>> {
    let mut files: Vec<PathBuf> = fs::read_dir(input_dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.extension()
                .map(|ext| ext.eq_ignore_ascii_case("svg"))
                .unwrap_or(false)
        })
        .collect();
    files.sort();

    println!("Found {} SVG files in {:?}", files.len(), input_dir);

    let symbols: Vec<SymbolDefinition> = files
        .par_iter()
        .filter_map(|file| match convert_file(file, category) {
            Ok(symbol) => Some(symbol),
            Err(e) => {
                log::warn!("Skipping {:?}: {}", file, e);
                None
            }
        })
        .collect();

    if symbols.is_empty() {
        return Err(Error::EmptyBatch(format!("{:?}", input_dir)));
    }

    println!("Converted {}/{} symbols", symbols.len(), files.len());
    Ok(symbols)
}

/// Downloads one symbol from the Radica catalog, saves its artwork, and
/// converts it in memory.
pub async fn import_symbol(
    stencil_id: u32,
    symbol_id: u32,
    slug: &str,
    category: &str,
    output_dir: &Path,
) -> Result<SymbolDefinition> {
    println!(
        "Fetching symbol '{}' (stencil {}, id {})",
        slug, stencil_id, symbol_id
    );
    let api = api::RadicaApi::new();
    let library = file_writer::SymbolLibrary {
        path: output_dir.to_path_buf(),
    };
    library.setup_directories()?;

    let hash = api.fetch_symbol_hash(stencil_id, symbol_id, slug).await?;
    let content = api
        .get_symbol_svg(stencil_id, symbol_id, slug, &hash)
        .await?;
    library.save_artwork(slug, "svg", content.as_bytes())?;

    let svg = importer::import_svg(&content)?;
    let identity = SymbolIdentity::from_file_stem(slug, category);
    let symbol = converter::convert_symbol(&svg, &identity)?;
    println!("Successfully converted symbol: {}", symbol.name);
    Ok(symbol)
}

/// Downloads and converts every symbol listed in a JSON request file.
/// Per-entry failures are logged and skipped, like directory batches.
pub async fn import_batch(
    requests_file: &Path,
    category: &str,
    output_dir: &Path,
) -> Result<Vec<SymbolDefinition>> {
    let content = fs::read_to_string(requests_file)?;
    let requests: Vec<api::SymbolRequest> = serde_json::from_str(&content)?;

    let mut symbols = Vec::new();
    for request in &requests {
        match import_symbol(request.stencil, request.id, &request.slug, category, output_dir).await
        {
            Ok(symbol) => symbols.push(symbol),
            Err(e) => log::warn!("Skipping '{}': {}", request.slug, e),
        }
    }

    if symbols.is_empty() {
        return Err(Error::EmptyBatch(format!("{:?}", requests_file)));
    }

    println!("Imported {}/{} symbols", symbols.len(), requests.len());
    Ok(symbols)
}

fn identity_from_path(svg_path: &Path, category: &str) -> Result<SymbolIdentity> {
    let stem = svg_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| Error::MissingData(format!("no usable file name in {:?}", svg_path)))?;
    Ok(SymbolIdentity::from_file_stem(stem, category))
}
