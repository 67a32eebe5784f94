//! `billgen process` and `billgen sheets`.

use std::path::{Path, PathBuf};

use billgen_config::{OutputFormat, Settings};
use billgen_engine::{detect_format, ProcessedResult, Workbook};
use serde::Serialize;

use crate::CliError;

pub fn cmd_process(
    settings: &Settings,
    file: PathBuf,
    json: bool,
    compact: bool,
    output: Option<PathBuf>,
) -> Result<(), CliError> {
    let json_stdout = json || settings.output_format == OutputFormat::Json;
    if compact && !json_stdout && output.is_none() {
        return Err(CliError::args("--compact only applies to JSON output")
            .with_hint("add --json or --output <PATH>"));
    }

    tracing::info!(file = %file.display(), "processing bill workbook");
    let result = billgen_io::process_file(&file)?;

    if json_stdout || output.is_some() {
        let json_str = to_json(&result, settings.pretty && !compact)?;

        if let Some(ref path) = output {
            std::fs::write(path, &json_str)
                .map_err(|e| CliError::output(format!("cannot write {}: {e}", path.display())))?;
            eprintln!("wrote {}", path.display());
        }

        if json_stdout {
            println!("{json_str}");
            return Ok(());
        }
    }

    print!("{}", render_summary(&file, &result));
    Ok(())
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, CliError> {
    let serialized = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    serialized.map_err(|e| CliError::general(format!("JSON serialization error: {e}")))
}

fn render_summary(file: &Path, result: &ProcessedResult) -> String {
    let title = &result.title_info;
    let d = &result.deductions;
    let mut out = String::new();

    let mut line = |label: &str, value: String| {
        out.push_str(&format!("{:<22}{}\n", label, value));
    };

    line("file:", file.display().to_string());
    line("format:", result.file_format.to_string());
    line("agreement no.:", title.agreement_no.clone());
    line("contractor:", title.contractor_name.clone());
    line("work:", title.work_name.clone());
    line(
        "items:",
        format!(
            "{} work order, {} billed, {} extra",
            result.work_order_items.len(),
            result.bill_quantity_items.len(),
            result.extra_items.len()
        ),
    );
    line("work order amount:", format!("{:.2}", result.work_order_amount));
    line("total amount:", format!("{:.2}", result.total_amount));
    line(
        "deviation:",
        format!(
            "{} items, {} excess, {} saving",
            result.deviation_data.len(),
            result.excess_rows(),
            result.saving_rows()
        ),
    );
    line(&format!("security deposit {}%:", d.sd_rate), format!("{:.0}", d.sd_amount));
    line(&format!("income tax {}%:", d.it_rate), format!("{:.0}", d.it_amount));
    line(&format!("gst {}%:", d.gst_rate), format!("{:.0}", d.gst_amount));
    line(&format!("labour cess {}%:", d.lc_rate), format!("{:.0}", d.lc_amount));
    line("total deductions:", format!("{:.0}", d.total_deductions));
    line("net payable:", format!("{:.2}", result.net_payable));

    out
}

// ============================================================================
// sheets
// ============================================================================

#[derive(Debug, Serialize)]
struct SheetInfo {
    index: usize,
    name: String,
    readable: bool,
    rows: usize,
    cols: usize,
    non_empty_cells: usize,
}

#[derive(Debug, Serialize)]
struct SheetsReport {
    file_format: billgen_engine::FileFormat,
    sheets: Vec<SheetInfo>,
}

fn sheets_report(workbook: &Workbook) -> SheetsReport {
    let sheets = workbook
        .sheet_names()
        .iter()
        .enumerate()
        .map(|(index, name)| match workbook.grid(name) {
            Some(grid) => SheetInfo {
                index,
                name: name.clone(),
                readable: true,
                rows: grid.height(),
                cols: grid.width(),
                non_empty_cells: grid.non_empty_cells(),
            },
            None => SheetInfo {
                index,
                name: name.clone(),
                readable: false,
                rows: 0,
                cols: 0,
                non_empty_cells: 0,
            },
        })
        .collect();

    SheetsReport {
        file_format: detect_format(workbook.sheet_names()),
        sheets,
    }
}

pub fn cmd_sheets(file: PathBuf, json: bool) -> Result<(), CliError> {
    let workbook = billgen_io::read_workbook(&file)?;
    let report = sheets_report(&workbook);

    if json {
        println!("{}", to_json(&report, true)?);
        return Ok(());
    }

    println!("format: {}", report.file_format);
    for s in &report.sheets {
        if s.readable {
            println!(
                "  [{}] {:<16} {} rows x {} cols, {} cells",
                s.index, s.name, s.rows, s.cols, s.non_empty_cells
            );
        } else {
            println!("  [{}] {:<16} (unreadable)", s.index, s.name);
        }
    }
    Ok(())
}
