use pdftables::{Document, OutputFormat, TableSettings, WordOptions, write_tables};
use tracing::debug;

use crate::cli::Cli;
use crate::page_range::parse_page_range;

pub fn run(cli: &Cli) -> Result<(), i32> {
    let format = resolve_format(cli)?;

    if !cli.input.exists() {
        eprintln!("Error: file not found: {}", cli.input.display());
        return Err(1);
    }
    let doc = Document::open_file(&cli.input).map_err(|e| {
        eprintln!("Error: failed to load {}: {e}", cli.input.display());
        1
    })?;

    let settings = build_settings(cli);
    let result = match cli.pages.as_deref() {
        Some(range) => {
            let pages = parse_page_range(range, doc.page_count()).map_err(|e| {
                eprintln!("Error: {e}");
                1
            })?;
            debug!(?pages, "restricting extraction to selected pages");
            doc.extract_tables_for(&pages, &settings)
        }
        None => doc.extract_tables(&settings),
    };

    write_tables(&result, &cli.output, format).map_err(|e| {
        eprintln!("Error: failed to write {}: {e}", cli.output.display());
        1
    })?;

    println!(
        "Extracted {} tables to {}",
        result.len(),
        cli.output.display()
    );
    Ok(())
}

fn resolve_format(cli: &Cli) -> Result<OutputFormat, i32> {
    if let Some(format) = cli.format {
        return Ok(format.into());
    }
    OutputFormat::from_path(&cli.output).ok_or_else(|| {
        eprintln!(
            "Error: cannot infer output format from {}; use --format xlsx|csv|json",
            cli.output.display()
        );
        1
    })
}

fn build_settings(cli: &Cli) -> TableSettings {
    TableSettings {
        words: WordOptions {
            x_tolerance: cli.x_tolerance,
            y_tolerance: cli.y_tolerance,
            ..WordOptions::default()
        },
        line_thickness: cli.line_thickness,
        column_tolerance: cli.column_tolerance,
        ..TableSettings::default()
    }
}
