//! `billgen-engine`: contract billing derivation engine.
//!
//! Pure engine crate: receives a workbook already loaded into the grid model,
//! returns the derived billing result. No file I/O.

pub mod cell;
pub mod deductions;
pub mod detect;
pub mod deviation;
pub mod engine;
pub mod items;
pub mod model;
pub mod sheet;
pub mod title;
pub mod totals;
pub mod workbook;

pub use detect::{detect_format, FileFormat};
pub use engine::process;
pub use model::{Deductions, DeviationRow, LineItem, ProcessedResult, TitleInfo};
pub use workbook::Workbook;
