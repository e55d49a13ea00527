//! Extract tables from a page-description file and print them.
//!
//! Usage: cargo run --example extract_tables -- <pages.json>

use pdftables::{Document, TableSettings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .ok_or("usage: extract_tables <pages.json>")?;

    let doc = Document::open_file(&path)?;
    let result = doc.extract_tables(&TableSettings::default());

    for (name, entry) in result.named_entries() {
        println!("--- {name} ({:?}) ---", entry.detector);
        for row in entry.data.rows() {
            println!("| {} |", row.join(" | "));
        }
        println!();
    }
    println!("{} tables", result.len());
    Ok(())
}
