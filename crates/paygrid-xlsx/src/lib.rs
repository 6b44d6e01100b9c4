//! # paygrid-xlsx
//!
//! XLSX (Office Open XML) writer for paygrid workbooks.
//!
//! Serializes a [`paygrid_core::Workbook`] to the standard `.xlsx` package:
//! a ZIP container holding the workbook, worksheet, and stylesheet XML
//! parts. Write-only; this crate does not read spreadsheets back.

pub mod error;
pub mod writer;

mod styles;

pub use error::{XlsxError, XlsxResult};
pub use writer::XlsxWriter;
