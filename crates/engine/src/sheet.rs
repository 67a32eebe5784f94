use crate::cell::Cell;

static EMPTY_CELL: Cell = Cell::Empty;

/// One physical worksheet row. Cells sit at their column positions, so
/// `cells[3]` is always column D even when A..C are blank.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Cell at `col`, or an empty cell past the end of the row.
    pub fn get(&self, col: usize) -> &Cell {
        self.cells.get(col).unwrap_or(&EMPTY_CELL)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the row holds no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True when every cell in the row is empty (including a row with no cells).
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    pub fn text(&self, col: usize) -> String {
        self.get(col).as_text()
    }

    pub fn number(&self, col: usize) -> f64 {
        self.get(col).as_number()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl From<Vec<Cell>> for Row {
    fn from(cells: Vec<Cell>) -> Self {
        Self::new(cells)
    }
}

/// The cell grid of one sheet, row 0 being the first physical row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Row>,
}

impl Grid {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, idx: usize) -> Option<&Row> {
        self.rows.get(idx)
    }

    /// Number of physical rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Widest row, in cells.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Row::len).max().unwrap_or(0)
    }

    /// Number of cells that are not empty.
    pub fn non_empty_cells(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.cells().iter().filter(|c| !c.is_empty()).count())
            .sum()
    }

    /// Rows strictly below `header_row`.
    pub fn rows_below(&self, header_row: usize) -> &[Row] {
        self.rows.get(header_row + 1..).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Cell {
        Cell::Text(s.into())
    }

    #[test]
    fn test_row_positional_access() {
        let row = Row::new(vec![text("1"), Cell::Empty, Cell::Number(3.0)]);
        assert_eq!(row.text(0), "1");
        assert_eq!(row.text(1), "");
        assert_eq!(row.number(2), 3.0);
        // Past the end behaves like an empty cell
        assert_eq!(row.get(10), &Cell::Empty);
        assert_eq!(row.number(10), 0.0);
    }

    #[test]
    fn test_row_is_blank() {
        assert!(Row::new(vec![]).is_blank());
        assert!(Row::new(vec![Cell::Empty, text("  ")]).is_blank());
        assert!(!Row::new(vec![Cell::Empty, Cell::Number(0.0)]).is_blank());
    }

    #[test]
    fn test_blank_row_still_has_length() {
        let row = Row::new(vec![Cell::Empty; 6]);
        assert_eq!(row.len(), 6);
        assert!(!row.is_empty());
        assert!(row.is_blank());
    }

    #[test]
    fn test_grid_dimensions() {
        let grid = Grid::new(vec![
            Row::new(vec![text("a")]),
            Row::new(vec![text("b"), text("c"), Cell::Empty]),
        ]);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.non_empty_cells(), 3);
    }

    #[test]
    fn test_rows_below_header() {
        let grid = Grid::new(vec![
            Row::new(vec![text("banner")]),
            Row::new(vec![text("header")]),
            Row::new(vec![text("data")]),
        ]);
        assert_eq!(grid.rows_below(1).len(), 1);
        assert_eq!(grid.rows_below(1)[0].text(0), "data");
        assert!(grid.rows_below(5).is_empty());
    }
}
