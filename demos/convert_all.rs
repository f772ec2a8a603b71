use radica2fusioncad_rs::file_writer::SymbolLibrary;
use radica2fusioncad_rs::import_symbol;
use std::{path::Path, time::Instant};

#[tokio::main]
async fn main() {
    let requests = vec![
        (229u32, 12u32, "normally-open-contact"),
        (229, 13, "normally-close-contact"),
        (229, 0, "contactor-3p"),
        (229, 1, "circuit-breaker-3p"),
    ]; // Example symbols from the single-line stencil

    let output_dir = Path::new("example_lib");
    let library = SymbolLibrary {
        path: output_dir.to_path_buf(),
    };

    let start_time = Instant::now();
    let mut symbols = Vec::new();
    for (stencil_id, symbol_id, slug) in &requests {
        let entry_start_time = Instant::now();
        match import_symbol(*stencil_id, *symbol_id, slug, "Control", output_dir).await {
            Ok(symbol) => {
                println!("Imported symbol: {}", symbol.id);
                symbols.push(symbol);
            }
            Err(e) => eprintln!("Error importing symbol: {}", e),
        }

        println!("Got entry in : {:?}\n\n\n", entry_start_time.elapsed());
    }

    if symbols.is_empty() {
        eprintln!("No symbols converted");
        return;
    }

    // The batch is written once, after all downloads have settled.
    if let Err(e) = library.write_json(&symbols) {
        eprintln!("Error writing library: {}", e);
    }

    println!(
        "Got {:?} Entries in : {:?}",
        symbols.len(),
        start_time.elapsed()
    );
}
