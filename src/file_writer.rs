use crate::error::Result;
use crate::symbol_models::SymbolDefinition;
use std::fs;
use std::path::PathBuf;

const TS_HEADER: &str = r#"/**
 * Auto-generated IEC 60617 symbols from Radica Software
 * Source: https://symbols.radicasoftware.com
 *
 * DO NOT EDIT MANUALLY - regenerate with radica2fusioncad
 */

import { registerSymbol, type SymbolCategory } from './iec-symbols';

"#;

/// Manages the output library structure.
///
/// The rendered batch is written exactly once per run, after every
/// per-document result has been collected, so the output document stays
/// well-formed.
pub struct SymbolLibrary {
    pub path: PathBuf,
}

impl SymbolLibrary {
    /// Creates the output directory layout.
    pub fn setup_directories(&self) -> Result<()> {
        fs::create_dir_all(self.path.join("artwork"))?;
        Ok(())
    }

    /// Saves raw downloaded artwork, grouped by format.
    pub fn save_artwork(&self, slug: &str, format: &str, data: &[u8]) -> Result<PathBuf> {
        let dir = self.path.join("artwork").join(format);
        fs::create_dir_all(&dir)?;
        let file = dir.join(format!("{}.{}", slug.replace('-', "_"), format));
        fs::write(&file, data)?;
        Ok(file)
    }

    /// Writes the whole batch as one pretty-printed JSON document.
    pub fn write_json(&self, symbols: &[SymbolDefinition]) -> Result<PathBuf> {
        let file = self.path.join("symbols.json");
        fs::write(&file, render_json(symbols)?)?;
        println!("Exported {} symbols to {:?}", symbols.len(), file);
        Ok(file)
    }

    /// Writes the whole batch as a TypeScript registration fragment for
    /// static inclusion in the symbol library.
    pub fn write_typescript(&self, symbols: &[SymbolDefinition]) -> Result<PathBuf> {
        let file = self.path.join("symbols.ts");
        fs::write(&file, render_typescript(symbols))?;
        println!("Exported {} symbols to {:?}", symbols.len(), file);
        Ok(file)
    }
}

/// Renders a batch of symbols as a pretty-printed JSON array. Records are
/// never mutated; field names and order follow the symbol model exactly.
pub fn render_json(symbols: &[SymbolDefinition]) -> Result<String> {
    Ok(serde_json::to_string_pretty(symbols)?)
}

/// Renders a batch of symbols as registerSymbol calls, one block per symbol.
pub fn render_typescript(symbols: &[SymbolDefinition]) -> String {
    let mut out = String::from(TS_HEADER);
    for symbol in symbols {
        out.push_str(&symbol.to_registration_entry());
        out.push('\n');
    }
    out
}
