//! # paygrid-template
//!
//! Builds the payroll/personnel-tracking workbook template: a three-sheet
//! XLSX file (staff roster, time-sheet entry, payslip) with fixed headers,
//! styling, column widths, and formula cells, ready for data entry in any
//! spreadsheet application.
//!
//! Control flow is a single linear pass: construct a workbook, populate the
//! three sheets, persist to a path. Nothing here evaluates formulas or reads
//! input; the current date stamp on the payslip is the only value that varies
//! between runs.
//!
//! ## Example
//!
//! ```no_run
//! let workbook = paygrid_template::build_template()?;
//! paygrid_template::persist(&workbook, "Personnel_Tracking_Payroll.xlsx")?;
//! # Ok::<(), paygrid_template::TemplateError>(())
//! ```

pub mod payslip;
pub mod roster;
pub mod theme;
pub mod timesheet;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tempfile::NamedTempFile;
use thiserror::Error;

use paygrid_xlsx::{XlsxError, XlsxWriter};

pub use paygrid_core::Workbook;

/// Result type alias using [`TemplateError`]
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Errors surfaced by the template builder
#[derive(Debug, Error)]
pub enum TemplateError {
    /// A sheet could not be constructed (e.g., duplicate sheet name).
    /// This never happens against a fresh workbook and indicates a
    /// programming defect in the caller.
    #[error("template construction failed: {0}")]
    Construction(#[from] paygrid_core::Error),

    /// The destination file could not be created or written
    #[error("failed to write workbook to '{}'", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: XlsxError,
    },
}

/// Build the complete three-sheet template, stamped with today's date.
pub fn build_template() -> Result<Workbook> {
    build_template_with_date(chrono::Local::now().date_naive())
}

/// Build the complete three-sheet template with an explicit payslip date
/// stamp, making the output reproducible.
pub fn build_template_with_date(date: NaiveDate) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    roster::build(&mut workbook)?;
    timesheet::build(&mut workbook)?;
    payslip::build_dated(&mut workbook, date)?;
    Ok(workbook)
}

/// Serialize the workbook to `path` as XLSX, replacing any existing file.
///
/// The archive is written to a temporary file in the destination directory
/// and renamed into place once complete, so a failed write never leaves a
/// truncated file at `path`.
pub fn persist<P: AsRef<Path>>(workbook: &Workbook, path: P) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let output_write = |source: XlsxError| TemplateError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| output_write(e.into()))?;
    XlsxWriter::write(workbook, tmp.as_file_mut()).map_err(output_write)?;
    tmp.persist(path)
        .map_err(|e| output_write(XlsxError::Io(e.error)))?;

    log::debug!("wrote workbook template to '{}'", path.display());
    Ok(())
}
