//! Writers for extracted tables: xlsx workbooks, CSV and JSON.
//!
//! The xlsx writer emits a minimal SpreadsheetML package with one worksheet
//! per table, named `Page_{page}_Table_{n}`. Cells hold inline strings; empty
//! strings are left as empty cells and no header row is added.

use std::fmt::{self, Write as _};
use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;
use std::str::FromStr;

use pdftables_core::{ExtractionResult, Table};
use quick_xml::escape::escape;
use tracing::info;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::{DocumentError, Result};

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Xlsx,
    Csv,
    Json,
}

impl OutputFormat {
    /// Infer the format from a path's extension (case-insensitive).
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?;
        ext.parse().ok()
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Xlsx => "xlsx",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "xlsx" => Ok(OutputFormat::Xlsx),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(DocumentError::Export(format!(
                "unsupported output format '{other}'"
            ))),
        }
    }
}

/// Write all tables to `path` in the given format, replacing any existing file.
pub fn write_tables(
    result: &ExtractionResult,
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<()> {
    let path = path.as_ref();
    let file = BufWriter::new(File::create(path)?);

    match format {
        OutputFormat::Xlsx => {
            let mut file = write_xlsx(result, file)?;
            file.flush()?;
        }
        OutputFormat::Csv => write_csv(result, file)?,
        OutputFormat::Json => write_json(result, file)?,
    }

    info!(
        path = %path.display(),
        format = %format,
        tables = result.len(),
        "wrote tables"
    );
    Ok(())
}

/// Write a workbook with one worksheet per table and return the inner writer.
///
/// A result with no tables produces a workbook with a single empty sheet
/// named `Sheet1`, since a workbook must contain at least one sheet.
pub fn write_xlsx<W: Write + Seek>(result: &ExtractionResult, writer: W) -> Result<W> {
    let mut sheets: Vec<(String, Option<&Table>)> = result
        .named_entries()
        .map(|(name, entry)| (name, Some(&entry.data)))
        .collect();
    if sheets.is_empty() {
        sheets.push(("Sheet1".to_string(), None));
    }

    let mut zip = ZipWriter::new(writer);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("[Content_Types].xml", options)?;
    zip.write_all(content_types_xml(sheets.len()).as_bytes())?;

    zip.start_file("_rels/.rels", options)?;
    zip.write_all(ROOT_RELS.as_bytes())?;

    zip.start_file("xl/workbook.xml", options)?;
    zip.write_all(workbook_xml(sheets.iter().map(|(name, _)| name.as_str())).as_bytes())?;

    zip.start_file("xl/_rels/workbook.xml.rels", options)?;
    zip.write_all(workbook_rels_xml(sheets.len()).as_bytes())?;

    for (i, (_, table)) in sheets.iter().enumerate() {
        zip.start_file(format!("xl/worksheets/sheet{}.xml", i + 1), options)?;
        zip.write_all(worksheet_xml(*table).as_bytes())?;
    }

    Ok(zip.finish()?)
}

/// Write tables as CSV, separated by a blank line.
pub fn write_csv<W: Write>(result: &ExtractionResult, mut writer: W) -> Result<()> {
    for (i, entry) in result.iter().enumerate() {
        if i > 0 {
            writer.write_all(b"\n")?;
        }
        let mut csv = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(&mut writer);
        for row in entry.data.rows() {
            csv.write_record(row)?;
        }
        csv.flush()?;
    }
    writer.flush()?;
    Ok(())
}

/// Write tables as a JSON array of `{"page": n, "data": [[...]]}` objects.
pub fn write_json<W: Write>(result: &ExtractionResult, mut writer: W) -> Result<()> {
    let tables: Vec<serde_json::Value> = result
        .iter()
        .map(|entry| {
            serde_json::json!({
                "page": entry.page,
                "data": entry.data.rows(),
            })
        })
        .collect();
    serde_json::to_writer_pretty(&mut writer, &tables)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

fn content_types_xml(sheet_count: usize) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>"#,
    );
    for i in 1..=sheet_count {
        let _ = write!(
            xml,
            r#"<Override PartName="/xl/worksheets/sheet{i}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#
        );
    }
    xml.push_str("</Types>");
    xml
}

fn workbook_xml<'a>(names: impl Iterator<Item = &'a str>) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets>"#,
    );
    for (i, name) in names.enumerate() {
        let id = i + 1;
        let _ = write!(
            xml,
            r#"<sheet name="{}" sheetId="{id}" r:id="rId{id}"/>"#,
            escape(name)
        );
    }
    xml.push_str("</sheets></workbook>");
    xml
}

fn workbook_rels_xml(sheet_count: usize) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );
    for id in 1..=sheet_count {
        let _ = write!(
            xml,
            r#"<Relationship Id="rId{id}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{id}.xml"/>"#
        );
    }
    xml.push_str("</Relationships>");
    xml
}

fn worksheet_xml(table: Option<&Table>) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
    );

    for (r, row) in table.map_or(&[][..], Table::rows).iter().enumerate() {
        let row_num = r + 1;
        let _ = write!(xml, r#"<row r="{row_num}">"#);
        for (c, text) in row.iter().enumerate() {
            if text.is_empty() {
                continue;
            }
            let _ = write!(
                xml,
                r#"<c r="{}{row_num}" t="inlineStr"><is><t xml:space="preserve">{}</t></is></c>"#,
                column_letters(c),
                escape(xml_safe(text).as_str())
            );
        }
        xml.push_str("</row>");
    }

    xml.push_str("</sheetData></worksheet>");
    xml
}

/// Spreadsheet column name for a 0-based index (0 = A, 25 = Z, 26 = AA).
pub fn column_letters(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.iter().rev().map(|&b| b as char).collect()
}

/// Drop characters XML 1.0 cannot represent (control chars other than tab,
/// newline and carriage return, plus U+FFFE and U+FFFF).
fn xml_safe(text: &str) -> String {
    text.chars()
        .filter(|&c| {
            matches!(c, '\t' | '\n' | '\r')
                || (c >= '\u{20}' && c != '\u{FFFE}' && c != '\u{FFFF}')
        })
        .collect()
}
