//! Integration tests for loading page descriptions and exporting tables.

use std::io::{Read, Write};

use pdftables::{Detector, Document, DocumentError, OutputFormat, TableSettings, write_tables};

/// A two-page description: a ruled 2x2 table, then a borderless one.
fn two_page_description() -> serde_json::Value {
    serde_json::json!({
        "pages": [
            {
                "width": 612, "height": 792,
                "lines": [
                    {"x0": 100, "top": 92, "x1": 300, "bottom": 92},
                    {"x0": 100, "top": 112, "x1": 300, "bottom": 112},
                    {"x0": 100, "top": 132, "x1": 300, "bottom": 132},
                    {"x0": 100, "top": 92, "x1": 100, "bottom": 132},
                    {"x0": 200, "top": 92, "x1": 200, "bottom": 132},
                    {"x0": 300, "top": 92, "x1": 300, "bottom": 132}
                ],
                "words": [
                    {"text": "A", "x0": 110, "top": 97, "x1": 117, "bottom": 107},
                    {"text": "B", "x0": 210, "top": 97, "x1": 217, "bottom": 107},
                    {"text": "C", "x0": 110, "top": 117, "x1": 117, "bottom": 127},
                    {"text": "D", "x0": 210, "top": 117, "x1": 217, "bottom": 127}
                ]
            },
            {
                "words": [
                    {"text": "Region", "x0": 72, "top": 100, "x1": 110, "bottom": 110},
                    {"text": "Sales", "x0": 200, "top": 100, "x1": 230, "bottom": 110},
                    {"text": "North", "x0": 72, "top": 120, "x1": 104, "bottom": 130},
                    {"text": "120", "x0": 204, "top": 120, "x1": 222, "bottom": 130},
                    {"text": "7", "x0": 201, "top": 140, "x1": 207, "bottom": 150}
                ]
            }
        ]
    })
}

fn write_description(value: &serde_json::Value) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, "{value}").unwrap();
    file.flush().unwrap();
    file
}

fn strings(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|r| r.iter().map(|s| s.to_string()).collect())
        .collect()
}

#[test]
fn test_open_file_and_extract() {
    let input = write_description(&two_page_description());
    let doc = Document::open_file(input.path()).unwrap();
    assert_eq!(doc.page_count(), 2);

    let result = doc.extract_tables(&TableSettings::default());
    assert_eq!(result.len(), 2);

    let bordered = &result.entries()[0];
    assert_eq!((bordered.page, bordered.detector), (1, Detector::Bordered));
    assert_eq!(
        bordered.data.rows(),
        strings(&[&["A", "B"], &["C", "D"]]).as_slice()
    );

    let borderless = &result.entries()[1];
    assert_eq!((borderless.page, borderless.detector), (2, Detector::Borderless));
    assert_eq!(
        borderless.data.rows(),
        strings(&[&["Region", "Sales"], &["North", "120"], &["", "7"]]).as_slice()
    );
}

#[test]
fn test_write_xlsx_file() {
    let doc = Document::from_json(&two_page_description().to_string()).unwrap();
    let result = doc.extract_tables(&TableSettings::default());

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("tables.xlsx");
    write_tables(&result, &output, OutputFormat::Xlsx).unwrap();

    let file = std::fs::File::open(&output).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let names: Vec<String> = archive.file_names().map(str::to_string).collect();
    assert!(names.contains(&"xl/worksheets/sheet1.xml".to_string()));
    assert!(names.contains(&"xl/worksheets/sheet2.xml".to_string()));

    let mut workbook = String::new();
    archive
        .by_name("xl/workbook.xml")
        .unwrap()
        .read_to_string(&mut workbook)
        .unwrap();
    assert!(workbook.contains("Page_1_Table_1"));
    assert!(workbook.contains("Page_2_Table_2"));
}

#[test]
fn test_write_csv_and_json_files() {
    let doc = Document::from_json(&two_page_description().to_string()).unwrap();
    let result = doc.extract_tables(&TableSettings::default());
    let dir = tempfile::tempdir().unwrap();

    let csv_path = dir.path().join("tables.csv");
    write_tables(&result, &csv_path, OutputFormat::Csv).unwrap();
    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv, "A,B\nC,D\n\nRegion,Sales\nNorth,120\n,7\n");

    let json_path = dir.path().join("tables.json");
    write_tables(&result, &json_path, OutputFormat::Json).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json[0]["page"], 1);
    assert_eq!(json[1]["data"][2], serde_json::json!(["", "7"]));
}

#[test]
fn test_write_to_missing_directory_fails() {
    let result = Document::from_json(r#"{"pages": []}"#)
        .unwrap()
        .extract_tables(&TableSettings::default());
    let err = write_tables(&result, "/no/such/dir/out.xlsx", OutputFormat::Xlsx).unwrap_err();
    assert!(matches!(err, DocumentError::Io(_)));
}

#[test]
fn test_malformed_description() {
    let input = write_description(&serde_json::json!({"pages": [{"lines": [{"x0": "left"}]}]}));
    let err = Document::open_file(input.path()).unwrap_err();
    assert!(matches!(err, DocumentError::Json(_)));
}

#[cfg(feature = "parallel")]
mod parallel_tests {
    use super::*;

    #[test]
    fn test_parallel_matches_sequential() {
        let mut value = two_page_description();
        let pages = value["pages"].as_array().unwrap().clone();
        // Twenty pages alternating bordered / borderless, some blank
        let many: Vec<serde_json::Value> = (0..20)
            .map(|i| {
                if i % 5 == 4 {
                    serde_json::json!({})
                } else {
                    pages[i % 2].clone()
                }
            })
            .collect();
        value["pages"] = serde_json::Value::Array(many);

        let doc = Document::from_json(&value.to_string()).unwrap();
        let settings = TableSettings::default();
        assert_eq!(
            doc.extract_tables_parallel(&settings),
            doc.extract_tables(&settings)
        );
    }
}
