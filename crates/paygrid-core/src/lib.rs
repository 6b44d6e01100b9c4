//! # paygrid-core
//!
//! Core document model for the paygrid workbook builder.
//!
//! This crate provides the types a template builder writes into:
//! - [`Workbook`] and [`Worksheet`] - the document structures
//! - [`CellValue`] - cell contents (text, numbers, formula expressions)
//! - [`CellAddress`] and [`CellRange`] - A1-style addressing
//! - [`Style`] - cell formatting (fonts, fills, borders, number formats)
//!
//! Formula cells hold the expression text only; nothing here evaluates
//! formulas. Evaluation is left to whatever application opens the file.
//!
//! ## Example
//!
//! ```rust
//! use paygrid_core::Workbook;
//!
//! let mut workbook = Workbook::new();
//! workbook.add_worksheet("Roster").unwrap();
//!
//! let sheet = workbook.worksheet_mut(0).unwrap();
//! sheet.set_cell_value("A1", "Name").unwrap();
//! sheet.set_cell_value("B1", 42.0).unwrap();
//! sheet.set_cell_formula("C1", "=B1*2").unwrap();
//! ```

pub mod cell;
pub mod error;
pub mod style;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use cell::{CellAddress, CellData, CellRange, CellValue};
pub use error::{Error, Result};
pub use workbook::Workbook;
pub use worksheet::Worksheet;

pub use style::{
    Alignment, BorderEdge, BorderLineStyle, BorderStyle, Color, FillStyle, FontStyle,
    HorizontalAlignment, NumberFormat, PatternType, Style, StylePool, VerticalAlignment,
};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
