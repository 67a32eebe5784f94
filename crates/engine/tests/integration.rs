use billgen_engine::cell::Cell;
use billgen_engine::sheet::{Grid, Row};
use billgen_engine::{process, FileFormat, TitleInfo, Workbook};

fn text(s: &str) -> Cell {
    Cell::Text(s.into())
}

fn num(n: f64) -> Cell {
    Cell::Number(n)
}

/// Item sheet with a banner row, a header row, then `data`.
fn item_sheet(data: Vec<Vec<Cell>>) -> Grid {
    let mut rows = vec![
        Row::new(vec![text("Name of Work: Road repair")]),
        Row::new(
            ["Item No.", "Description", "Unit", "Quantity", "Rate", "Amount"]
                .iter()
                .map(|h| text(h))
                .collect(),
        ),
    ];
    rows.extend(data.into_iter().map(Row::new));
    Grid::new(rows)
}

fn line(no: &str, qty: f64, rate: f64) -> Vec<Cell> {
    vec![text(no), text(&format!("Item {no}")), text("cum"), num(qty), num(rate), Cell::Empty]
}

fn title_sheet() -> Grid {
    Grid::new(vec![
        Row::new(vec![text("Agreement No."), text("12/2024-25")]),
        Row::new(vec![text("Name of Contractor"), text("M/s Verma & Sons")]),
        Row::new(vec![text("Work Order Amount"), text("\u{20b9}5,000")]),
    ])
}

fn new_pattern_workbook() -> Workbook {
    let mut wb = Workbook::new();
    wb.add_sheet("Title", title_sheet());
    wb.add_sheet(
        "Work Order",
        item_sheet(vec![line("1", 100.0, 10.0), line("2", 50.0, 20.0), line("3", 10.0, 5.0)]),
    );
    wb.add_sheet(
        "Bill Quantity",
        item_sheet(vec![
            line("2", 70.0, 20.0),
            line("3", 4.0, 5.0),
            vec![],
            vec![text("Sub-total"), Cell::Empty, Cell::Empty, Cell::Empty, Cell::Empty, Cell::Empty],
        ]),
    );
    wb.add_sheet("Extra Items", item_sheet(vec![line("E1", 2.0, 115.0)]));
    wb
}

// -------------------------------------------------------------------------
// New Pattern
// -------------------------------------------------------------------------

#[test]
fn new_pattern_end_to_end() {
    let result = process(&new_pattern_workbook());

    assert_eq!(result.file_format, FileFormat::NewPattern);
    assert_eq!(result.title_info.agreement_no, "12/2024-25");
    assert_eq!(result.title_info.contractor_name, "M/s Verma & Sons");
    assert_eq!(result.title_info.work_name, "N/A");

    assert_eq!(result.work_order_items.len(), 3);
    assert_eq!(result.bill_quantity_items.len(), 2);
    assert_eq!(result.extra_items.len(), 1);

    // 70*20 + 4*5 + 2*115
    assert_eq!(result.total_amount, 1400.0 + 20.0 + 230.0);
    assert_eq!(result.work_order_amount, 5000.0);

    assert_eq!(result.deviation_data.len(), 3);
    let d1 = &result.deviation_data[0];
    assert_eq!(d1.item_no, "1");
    assert_eq!(d1.saving_quantity, 100.0);
    assert_eq!(d1.saving_amount, 1000.0);
    let d2 = &result.deviation_data[1];
    assert_eq!(d2.excess_quantity, 20.0);
    assert_eq!(d2.excess_amount, 400.0);
    let d3 = &result.deviation_data[2];
    assert_eq!(d3.saving_quantity, 6.0);
    assert_eq!(d3.saving_amount, 30.0);

    assert_eq!(result.excess_rows(), 1);
    assert_eq!(result.saving_rows(), 2);

    // total 1650: sd 165, it 33, gst 33 -> 34, lc round(16.5) = 16
    let d = &result.deductions;
    assert_eq!(d.sd_amount, 165.0);
    assert_eq!(d.it_amount, 33.0);
    assert_eq!(d.gst_amount, 34.0);
    assert_eq!(d.lc_amount, 16.0);
    assert_eq!(d.total_deductions, 248.0);
    assert_eq!(result.net_payable, 1650.0 - 248.0);
}

#[test]
fn processing_is_idempotent() {
    let wb = new_pattern_workbook();
    let first = process(&wb);
    let second = process(&wb);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn empty_title_sheet_gives_defaults() {
    let mut wb = Workbook::new();
    wb.add_sheet("Title", Grid::default());
    let result = process(&wb);
    assert_eq!(result.file_format, FileFormat::NewPattern);
    assert_eq!(result.title_info, TitleInfo::default());
}

#[test]
fn garbled_title_amount_falls_back_to_work_order_sum() {
    for garbled in ["Approx. as per W.O.", "rs. to be decided", "No."] {
        let mut wb = Workbook::new();
        wb.add_sheet(
            "Title",
            Grid::new(vec![Row::new(vec![text("Work Order Amount"), text(garbled)])]),
        );
        wb.add_sheet("Work Order", item_sheet(vec![line("1", 10.0, 100.0), line("2", 5.0, 40.0)]));

        let result = process(&wb);
        assert_eq!(result.title_info.work_order_amount, 0.0, "{garbled}");
        assert_eq!(result.work_order_amount, 1200.0, "{garbled}");
    }
}

#[test]
fn lowercase_currency_title_amount_is_read_in_full() {
    let mut wb = Workbook::new();
    wb.add_sheet(
        "Title",
        Grid::new(vec![Row::new(vec![text("Work Order Amount"), text("rs. 12,50,000")])]),
    );
    let result = process(&wb);
    assert_eq!(result.title_info.work_order_amount, 1_250_000.0);
    assert_eq!(result.work_order_amount, 1_250_000.0);
}

// -------------------------------------------------------------------------
// Old Pattern
// -------------------------------------------------------------------------

#[test]
fn old_pattern_falls_back_to_work_order_sum() {
    let mut wb = Workbook::new();
    wb.add_sheet("Work Order", item_sheet(vec![line("1", 10.0, 100.0), line("2", 5.0, 40.0)]));

    let result = process(&wb);
    assert_eq!(result.file_format, FileFormat::OldPattern);
    assert_eq!(result.title_info, TitleInfo::default());
    assert_eq!(result.total_amount, 0.0);
    assert_eq!(result.work_order_amount, 1200.0);
    assert_eq!(result.deductions.total_deductions, 0.0);
    assert_eq!(result.net_payable, 0.0);
}

#[test]
fn empty_workbook_produces_empty_result() {
    let result = process(&Workbook::new());
    assert_eq!(result.file_format, FileFormat::OldPattern);
    assert!(result.work_order_items.is_empty());
    assert!(result.deviation_data.is_empty());
    assert_eq!(result.total_amount, 0.0);
}

#[test]
fn unreadable_item_sheet_is_treated_as_missing() {
    let mut wb = Workbook::new();
    wb.add_unreadable_sheet("Bill Quantity");
    wb.add_sheet("Extra Items", item_sheet(vec![line("E1", 1.0, 10.0)]));
    let result = process(&wb);
    assert!(result.bill_quantity_items.is_empty());
    assert_eq!(result.total_amount, 10.0);
}

// -------------------------------------------------------------------------
// Output contract
// -------------------------------------------------------------------------

#[test]
fn overflowing_quantity_times_rate_keeps_numbers_finite() {
    let mut wb = Workbook::new();
    wb.add_sheet("Bill Quantity", item_sheet(vec![line("1", 1e200, 1e200), line("2", 2.0, 50.0)]));

    let result = process(&wb);
    assert_eq!(result.bill_quantity_items.len(), 2);
    assert_eq!(result.bill_quantity_items[0].amount, 0.0);
    assert_eq!(result.total_amount, 100.0);
    assert!(result.net_payable.is_finite());

    let value = serde_json::to_value(&result).unwrap();
    for key in ["sd_amount", "it_amount", "gst_amount", "lc_amount", "total_deductions"] {
        assert!(value["deductions"][key].is_number(), "{key} must serialize as a number");
    }
    assert!(value["net_payable"].is_number());
}

#[test]
fn serialized_keys_match_renderer_contract() {
    let value = serde_json::to_value(process(&new_pattern_workbook())).unwrap();
    let obj = value.as_object().unwrap();
    for key in [
        "file_format",
        "title_info",
        "work_order_items",
        "bill_quantity_items",
        "extra_items",
        "total_amount",
        "work_order_amount",
        "deviation_data",
        "deductions",
        "net_payable",
    ] {
        assert!(obj.contains_key(key), "missing key {key}");
    }
    assert_eq!(value["file_format"], "New Pattern");
    assert_eq!(value["title_info"]["measurement_book_no"], "N/A");
    assert_eq!(value["deviation_data"][1]["excess_quantity"], 20.0);
    assert_eq!(value["deductions"]["gst_rate"], 2.0);
    assert_eq!(value["work_order_items"][0]["item_no"], "1");
}
