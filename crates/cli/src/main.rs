//! # spdxsheet-cli
//!
//! Command-line interface for SPDX origins worksheets stored in `.xlsx` files.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use spdxsheet_schema::{OriginsRecord, OriginsSheet, DEFAULT_SHEET_NAME};
use spdxsheet_workbook::Book;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// spdxsheet - SPDX origins worksheet tool
#[derive(Parser)]
#[command(name = "spdxsheet")]
#[command(author, version, about = "Create, verify and inspect SPDX origins worksheets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Create (or recreate) the origins sheet and fill it in
    Init(InitArgs),
    /// Check the origins sheet against its schema
    Verify {
        #[command(flatten)]
        target: Target,
    },
    /// Print the origins record
    Show {
        #[command(flatten)]
        target: Target,

        /// Output format
        #[arg(short = 'f', long = "format", default_value = "table")]
        format: OutputFormat,
    },
}

/// Workbook file and sheet to operate on.
#[derive(Args)]
struct Target {
    /// Workbook file (.xlsx)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Name of the origins sheet
    #[arg(short, long, default_value = DEFAULT_SHEET_NAME)]
    sheet: String,
}

#[derive(Args)]
struct InitArgs {
    #[command(flatten)]
    target: Target,

    /// SPDX version of the document
    #[arg(long, default_value = "SPDX-1.0")]
    spdx_version: String,

    /// Creator, e.g. "Person: Jane Doe" (repeatable)
    #[arg(short = 'c', long = "created-by", value_name = "CREATOR")]
    created_by: Vec<String>,

    /// Creation time (RFC 3339, "YYYY-MM-DD HH:MM:SS" or "YYYY-MM-DD"); defaults to now
    #[arg(long, value_parser = parse_created)]
    created: Option<NaiveDateTime>,

    /// Data license identifier
    #[arg(long, default_value = "PDDL-1.0")]
    data_license: String,

    /// Author comments
    #[arg(long)]
    comment: Option<String>,
}

/// Output format for `show`.
#[derive(Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    /// JSON output
    Json,
    /// Pretty table output (default)
    #[default]
    Table,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .init();
    }

    match cli.command {
        Command::Init(args) => {
            run_init(&args)?;
            println!(
                "{} origins sheet '{}' in {}",
                "Created".green().bold(),
                args.target.sheet,
                args.target.file.display()
            );
            Ok(ExitCode::SUCCESS)
        }
        Command::Verify { target } => match run_verify(&target)? {
            None => {
                println!("{}", "OK".green().bold());
                Ok(ExitCode::SUCCESS)
            }
            Some(message) => {
                println!("{} {message}", "Invalid:".red().bold());
                Ok(ExitCode::FAILURE)
            }
        },
        Command::Show { target, format } => {
            let record = run_show(&target)?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&record)?),
                OutputFormat::Table => print!("{}", format_table(&record)),
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Parse a creation time given on the command line.
fn parse_created(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_utc());
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(dt);
        }
    }
    if let Some(dt) = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(dt);
    }
    bail!("Invalid date '{s}'. Expected RFC 3339, 'YYYY-MM-DD HH:MM:SS' or 'YYYY-MM-DD'")
}

fn load_book(path: &Path) -> Result<Book> {
    Book::from_xlsx(path).with_context(|| format!("Failed to read workbook: {}", path.display()))
}

/// Create the origins sheet in `args.target.file`, keeping any other sheets.
fn run_init(args: &InitArgs) -> Result<()> {
    let path = &args.target.file;
    let mut book = if path.exists() {
        load_book(path)?
    } else {
        Book::new()
    };

    OriginsSheet::create(&mut book, &args.target.sheet)?;

    let record = OriginsRecord {
        spreadsheet_version: None,
        spdx_version: Some(args.spdx_version.clone()),
        created_by: args.created_by.clone(),
        created: Some(args.created.unwrap_or_else(|| Utc::now().naive_utc())),
        data_license: Some(args.data_license.clone()),
        author_comments: args.comment.clone(),
    };
    OriginsSheet::open(&mut book, &args.target.sheet).write_record(&record)?;

    book.save_as_xlsx(path)
        .with_context(|| format!("Failed to write workbook: {}", path.display()))?;
    tracing::info!(file = %path.display(), sheet = %args.target.sheet, "origins sheet written");
    Ok(())
}

/// Verify the origins sheet, returning the diagnostic if it is invalid.
fn run_verify(target: &Target) -> Result<Option<String>> {
    let mut book = load_book(&target.file)?;
    let origins = OriginsSheet::open(&mut book, &target.sheet);
    Ok(origins.verify_message())
}

/// Read the origins record after checking the sheet is valid.
fn run_show(target: &Target) -> Result<OriginsRecord> {
    let mut book = load_book(&target.file)?;
    let origins = OriginsSheet::open(&mut book, &target.sheet);
    if let Err(e) = origins.verify() {
        bail!("{e}");
    }
    Ok(origins.record()?)
}

/// Render a record as an aligned two-column table.
fn format_table(record: &OriginsRecord) -> String {
    let created = record
        .created
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string());
    let mut fields: Vec<(&str, String)> = vec![
        (
            "Spreadsheet Version",
            record.spreadsheet_version.clone().unwrap_or_default(),
        ),
        ("SPDXVersion", record.spdx_version.clone().unwrap_or_default()),
    ];
    if record.created_by.is_empty() {
        fields.push(("CreatedBy", String::new()));
    }
    for (i, creator) in record.created_by.iter().enumerate() {
        fields.push((if i == 0 { "CreatedBy" } else { "" }, creator.clone()));
    }
    fields.push(("Created", created.unwrap_or_default()));
    fields.push(("DataLicense", record.data_license.clone().unwrap_or_default()));
    if let Some(comments) = &record.author_comments {
        fields.push(("AuthorComments", comments.clone()));
    }

    let width = fields.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (name, value) in fields {
        let label = format!("{name:<width$}");
        out.push_str(&format!("{}  {value}\n", label.bold()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn init_args(file: PathBuf) -> InitArgs {
        InitArgs {
            target: Target {
                file,
                sheet: DEFAULT_SHEET_NAME.to_string(),
            },
            spdx_version: "SPDX-1.0".to_string(),
            created_by: vec!["Person: Jane Doe".to_string(), "Tool: spdxsheet".to_string()],
            created: parse_created("2011-01-29 18:30:22").ok(),
            data_license: "PDDL-1.0".to_string(),
            comment: None,
        }
    }

    // ========================================================================
    // parse_created tests
    // ========================================================================

    #[test]
    fn test_parse_created_formats() {
        let expected = NaiveDate::from_ymd_opt(2011, 1, 29)
            .unwrap()
            .and_hms_opt(18, 30, 22)
            .unwrap();

        assert_eq!(parse_created("2011-01-29 18:30:22").unwrap(), expected);
        assert_eq!(parse_created("2011-01-29T18:30:22").unwrap(), expected);
        assert_eq!(parse_created("2011-01-29T18:30:22Z").unwrap(), expected);
        assert_eq!(parse_created("2011-01-29T19:30:22+01:00").unwrap(), expected);
        assert_eq!(
            parse_created("2011-01-29").unwrap(),
            expected.date().and_hms_opt(0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_created_invalid() {
        assert!(parse_created("yesterday").is_err());
        assert!(parse_created("2011-13-01").is_err());
    }

    // ========================================================================
    // command tests
    // ========================================================================

    #[test]
    fn test_init_then_verify_and_show() {
        let dir = tempdir().unwrap();
        let args = init_args(dir.path().join("doc.xlsx"));

        run_init(&args).unwrap();
        assert_eq!(run_verify(&args.target).unwrap(), None);

        let record = run_show(&args.target).unwrap();
        assert_eq!(record.spdx_version.as_deref(), Some("SPDX-1.0"));
        assert_eq!(record.created_by, args.created_by);
        assert_eq!(record.created, args.created);
    }

    #[test]
    fn test_init_keeps_other_sheets() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("doc.xlsx");

        let mut book = Book::new();
        book.add_empty_sheet("Packages")
            .unwrap()
            .set(0, 0, "Package Name")
            .unwrap();
        book.save_as_xlsx(&path).unwrap();

        run_init(&init_args(path.clone())).unwrap();

        let loaded = Book::from_xlsx(&path).unwrap();
        assert_eq!(loaded.sheet_names(), vec!["Packages", DEFAULT_SHEET_NAME]);
    }

    #[test]
    fn test_verify_reports_missing_creator() {
        let dir = tempdir().unwrap();
        let mut args = init_args(dir.path().join("doc.xlsx"));
        args.created_by.clear();

        run_init(&args).unwrap();
        assert_eq!(
            run_verify(&args.target).unwrap().as_deref(),
            Some("Required cell CreatedBy missing for row 2 in SPDX Origins worksheet")
        );
        assert!(run_show(&args.target).is_err());
    }

    #[test]
    fn test_verify_missing_sheet() {
        let dir = tempdir().unwrap();
        let args = init_args(dir.path().join("doc.xlsx"));
        run_init(&args).unwrap();

        let other = Target {
            file: args.target.file.clone(),
            sheet: "Elsewhere".to_string(),
        };
        assert_eq!(
            run_verify(&other).unwrap().as_deref(),
            Some("Worksheet for SPDX Origins does not exist")
        );
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let target = Target {
            file: dir.path().join("absent.xlsx"),
            sheet: DEFAULT_SHEET_NAME.to_string(),
        };
        assert!(run_verify(&target).is_err());
    }

    #[test]
    fn test_format_table() {
        colored::control::set_override(false);
        let record = OriginsRecord {
            spreadsheet_version: Some("0.8".to_string()),
            spdx_version: Some("SPDX-1.0".to_string()),
            created_by: vec!["Person: A".to_string(), "Tool: B".to_string()],
            created: parse_created("2011-01-29 18:30:22").ok(),
            data_license: Some("PDDL-1.0".to_string()),
            author_comments: None,
        };

        let table = format_table(&record);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[2], "CreatedBy            Person: A");
        assert_eq!(lines[3], "                     Tool: B");
        assert_eq!(lines[4], "Created              2011-01-29 18:30:22");
    }
}
