use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use pdftables::OutputFormat;

/// Extract bordered and borderless tables from a page description.
#[derive(Debug, Parser)]
#[command(name = "pdftables", about, version)]
pub struct Cli {
    /// Path to the page-description JSON file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path of the file to write (.xlsx, .csv or .json)
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Output format. Default: inferred from the OUTPUT extension
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Page range (e.g. '1,3-5'). Default: all pages
    #[arg(long)]
    pub pages: Option<String>,

    /// Horizontal tolerance for word grouping (default: 3.0)
    #[arg(long, default_value_t = 3.0)]
    pub x_tolerance: f64,

    /// Vertical tolerance for word grouping (default: 3.0)
    #[arg(long, default_value_t = 3.0)]
    pub y_tolerance: f64,

    /// Maximum x0 distance for a word to join a borderless column (default: 10.0)
    #[arg(long, default_value_t = 10.0)]
    pub column_tolerance: f64,

    /// Lines thinner than this count as ruling lines (default: 1.0)
    #[arg(long, default_value_t = 1.0)]
    pub line_thickness: f64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Output format for the extracted tables.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// Excel workbook, one sheet per table
    Xlsx,
    /// CSV, tables separated by a blank line
    Csv,
    /// JSON array of {page, data} objects
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Xlsx => OutputFormat::Xlsx,
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positionals_and_defaults() {
        let cli = Cli::try_parse_from(["pdftables", "in.json", "out.xlsx"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("in.json"));
        assert_eq!(cli.output, PathBuf::from("out.xlsx"));
        assert!(cli.format.is_none());
        assert_eq!(cli.x_tolerance, 3.0);
        assert_eq!(cli.column_tolerance, 10.0);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn counts_verbosity() {
        let cli = Cli::try_parse_from(["pdftables", "-vv", "in.json", "out.csv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn requires_output() {
        assert!(Cli::try_parse_from(["pdftables", "in.json"]).is_err());
    }
}
