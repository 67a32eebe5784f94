// billgen CLI - contract bill workbook processing

mod exit_codes;
mod logging;
mod process;

use std::path::PathBuf;
use std::process::ExitCode;

use billgen_config::Settings;
use clap::{Parser, Subcommand};

use exit_codes::{EXIT_ERROR, EXIT_OUTPUT, EXIT_READ, EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "billgen")]
#[command(about = "Derive billing figures, deviation and deductions from a contract bill workbook")]
#[command(long_version = long_version())]
#[command(version)]
struct Cli {
    /// Log filter (e.g. "info", "billgen_engine=debug"); overrides RUST_LOG and settings
    #[arg(long, global = true, value_name = "FILTER")]
    log_level: Option<String>,

    /// Settings file (default: <config dir>/billgen/settings.json)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a bill workbook and print the derived result
    #[command(after_help = "\
Examples:
  billgen process bill.xlsx
  billgen process bill.xlsx --json
  billgen process bill.xlsx --json --compact
  billgen process bill.xlsx --output result.json")]
    Process {
        /// Workbook file (.xlsx, .xls, .xlsb, .ods)
        file: PathBuf,

        /// Print the full result as JSON instead of a summary
        #[arg(long)]
        json: bool,

        /// Single-line JSON (overrides output.pretty)
        #[arg(long)]
        compact: bool,

        /// Also write the JSON result to a file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// List the sheets of a workbook and the detected layout
    #[command(after_help = "\
Examples:
  billgen sheets bill.xlsx
  billgen sheets bill.xlsx --json")]
    Sheets {
        /// Workbook file (.xlsx, .xls, .xlsb, .ods)
        file: PathBuf,

        /// Output JSON
        #[arg(long)]
        json: bool,
    },
}

fn long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\nengine:  billgen-engine ",
        env!("CARGO_PKG_VERSION"),
        "\nrates:   SD 10%, IT 2%, GST 2%, LC 1%",
    )
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    logging::init(cli.log_level.as_deref(), &settings.log_level);

    let result = match cli.command {
        Commands::Process { file, json, compact, output } => {
            process::cmd_process(&settings, file, json, compact, output)
        }
        Commands::Sheets { file, json } => process::cmd_sheets(file, json),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn args(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    pub fn output(msg: impl Into<String>) -> Self {
        Self { code: EXIT_OUTPUT, message: msg.into(), hint: None }
    }

    pub fn general(msg: impl Into<String>) -> Self {
        Self { code: EXIT_ERROR, message: msg.into(), hint: None }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl From<billgen_io::ReadError> for CliError {
    fn from(err: billgen_io::ReadError) -> Self {
        let hint = match &err {
            billgen_io::ReadError::Open { .. } => {
                Some("expected an Excel or OpenDocument workbook (.xlsx, .xls, .xlsb, .ods)".to_string())
            }
            billgen_io::ReadError::NoSheets { .. } => None,
        };
        Self { code: EXIT_READ, message: err.to_string(), hint }
    }
}
