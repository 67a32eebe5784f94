// Excel file reading (xlsx, xls, xlsb, ods) into the billing sheet model
//
// Every sheet is read as a raw grid at its physical positions: a used range
// that starts at B3 still yields rows 0..2 and column A as empty cells, so
// the engine's fixed row/column positions hold regardless of the writer.

use std::path::Path;

use billgen_engine::cell::Cell;
use billgen_engine::sheet::{Grid, Row};
use billgen_engine::workbook::Workbook;
use calamine::{open_workbook_auto, Data, Range, Reader};

use crate::error::ReadError;

/// Maximum dimensions read from a sheet
const MAX_ROWS: usize = 65536;
const MAX_COLS: usize = 256;

/// Open a workbook and read every sheet into a grid.
///
/// The file handle lives only for the duration of this call. A sheet that
/// fails to read is kept by name without a grid.
pub fn read_workbook(path: &Path) -> Result<Workbook, ReadError> {
    let mut source = open_workbook_auto(path).map_err(|e| ReadError::Open {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let sheet_names: Vec<String> = source.sheet_names().to_vec();
    if sheet_names.is_empty() {
        return Err(ReadError::NoSheets {
            path: path.to_path_buf(),
        });
    }

    let mut workbook = Workbook::new();
    for sheet_name in &sheet_names {
        match source.worksheet_range(sheet_name) {
            Ok(range) => {
                let grid = range_to_grid(sheet_name, &range);
                tracing::debug!(
                    sheet = %sheet_name,
                    rows = grid.height(),
                    cols = grid.width(),
                    "read sheet"
                );
                workbook.add_sheet(sheet_name.clone(), grid);
            }
            Err(e) => {
                tracing::warn!(sheet = %sheet_name, error = %e, "failed to read sheet");
                workbook.add_unreadable_sheet(sheet_name.clone());
            }
        }
    }

    Ok(workbook)
}

fn range_to_grid(sheet_name: &str, range: &Range<Data>) -> Grid {
    let (height, width) = range.get_size();
    if height == 0 || width == 0 {
        return Grid::default();
    }

    // Range start offset (data may not begin at A1)
    let (start_row, start_col) = range.start().unwrap_or((0, 0));
    let (start_row, start_col) = (start_row as usize, start_col as usize);

    if start_row + height > MAX_ROWS || start_col + width > MAX_COLS {
        tracing::warn!(
            sheet = sheet_name,
            rows = start_row + height,
            cols = start_col + width,
            "sheet truncated to {}x{}",
            MAX_ROWS,
            MAX_COLS
        );
    }

    let lead_rows = start_row.min(MAX_ROWS);
    let lead_cols = start_col.min(MAX_COLS);
    let max_data_cols = MAX_COLS - lead_cols;

    let mut rows: Vec<Row> = Vec::with_capacity((lead_rows + height).min(MAX_ROWS));
    rows.resize(lead_rows, Row::default());

    for data_row in range.rows() {
        if rows.len() >= MAX_ROWS {
            break;
        }
        let mut cells = vec![Cell::Empty; lead_cols];
        cells.extend(data_row.iter().take(max_data_cols).map(convert_cell));
        rows.push(Row::new(cells));
    }

    Grid::new(rows)
}

fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => {
            if s.is_empty() {
                Cell::Empty
            } else {
                Cell::Text(s.clone())
            }
        }
        Data::Float(n) => Cell::Number(*n),
        Data::Int(n) => Cell::Number(*n as f64),
        Data::Bool(b) => Cell::Bool(*b),
        // Store error as text representation
        Data::Error(e) => Cell::Text(format!("#{:?}", e)),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(value) => Cell::Text(format_datetime(value)),
            None => Cell::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) => Cell::Text(s.clone()),
        Data::DurationIso(s) => Cell::Text(s.clone()),
    }
}

/// Dates without a time part render as `YYYY-MM-DD`.
fn format_datetime(value: chrono::NaiveDateTime) -> String {
    if value.time() == chrono::NaiveTime::MIN {
        value.format("%Y-%m-%d").to_string()
    } else {
        value.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_convert_scalars() {
        assert_eq!(convert_cell(&Data::Empty), Cell::Empty);
        assert_eq!(convert_cell(&Data::String(String::new())), Cell::Empty);
        assert_eq!(convert_cell(&Data::String("cum".into())), Cell::Text("cum".into()));
        assert_eq!(convert_cell(&Data::Float(2.5)), Cell::Number(2.5));
        assert_eq!(convert_cell(&Data::Int(7)), Cell::Number(7.0));
        assert_eq!(convert_cell(&Data::Bool(true)), Cell::Bool(true));
    }

    #[test]
    fn test_convert_iso_strings() {
        assert_eq!(
            convert_cell(&Data::DateTimeIso("2024-01-15T00:00:00".into())),
            Cell::Text("2024-01-15T00:00:00".into())
        );
    }

    #[test]
    fn test_format_datetime() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(format_datetime(date.and_hms_opt(0, 0, 0).unwrap()), "2024-03-09");
        assert_eq!(format_datetime(date.and_hms_opt(14, 5, 0).unwrap()), "2024-03-09 14:05:00");
    }

    #[test]
    fn test_range_offset_is_padded() {
        // Used range starting at B2
        let mut range: Range<Data> = Range::new((1, 1), (2, 2));
        range.set_value((1, 1), Data::String("header".into()));
        range.set_value((2, 2), Data::Float(4.0));

        let grid = range_to_grid("Sheet1", &range);
        assert_eq!(grid.height(), 3);
        assert!(grid.row(0).unwrap().is_blank());
        assert_eq!(grid.row(1).unwrap().text(1), "header");
        assert_eq!(grid.row(1).unwrap().text(0), "");
        assert_eq!(grid.row(2).unwrap().number(2), 4.0);
    }

    #[test]
    fn test_empty_range() {
        let range: Range<Data> = Range::empty();
        assert_eq!(range_to_grid("Sheet1", &range), Grid::default());
    }
}
