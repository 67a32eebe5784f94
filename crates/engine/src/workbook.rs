use std::collections::HashMap;

use crate::sheet::Grid;

/// A workbook as seen by the engine: the sheet names in file order, plus the
/// grid of every sheet that could be read.
///
/// A sheet can be listed without a grid when the reader failed on it. Format
/// detection still sees the name; extraction treats it as missing.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    sheet_names: Vec<String>,
    grids: HashMap<String, Grid>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a readable sheet.
    pub fn add_sheet(&mut self, name: impl Into<String>, grid: Grid) {
        let name = name.into();
        self.grids.insert(name.clone(), grid);
        self.sheet_names.push(name);
    }

    /// Append a sheet whose contents could not be read.
    pub fn add_unreadable_sheet(&mut self, name: impl Into<String>) {
        self.sheet_names.push(name.into());
    }

    pub fn sheet_names(&self) -> &[String] {
        &self.sheet_names
    }

    /// Exact, case-sensitive name lookup.
    pub fn has_sheet(&self, name: &str) -> bool {
        self.sheet_names.iter().any(|n| n == name)
    }

    pub fn grid(&self, name: &str) -> Option<&Grid> {
        self.grids.get(name)
    }

    pub fn sheet_count(&self) -> usize {
        self.sheet_names.len()
    }
}
