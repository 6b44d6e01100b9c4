//! Roster sheet ("Personnel List")

use paygrid_core::style::Style;
use paygrid_core::{CellRange, Workbook};

use crate::theme;
use crate::Result;

/// Sheet title shown on the tab
pub const SHEET_NAME: &str = "Personnel List";

/// Position of the sheet within the workbook
pub const SHEET_POSITION: usize = 0;

/// Header labels on row 3, columns A-E
pub const HEADERS: [&str; 5] = [
    "Name",
    "Salary",
    "Meal Allowance",
    "Transport Allowance",
    "Annual Leave Entitlement",
];

const TITLE: &str = "PERSONNEL LIST";
const HEADER_ROW: u32 = 2;
const FIRST_DATA_ROW: u32 = 3;
const DATA_ROW_COUNT: u32 = 10;
const COLUMN_WIDTHS: [f64; 5] = [30.0, 15.0, 15.0, 15.0, 18.0];

/// Build the roster sheet at position 0 of the workbook.
///
/// The sheet carries a merged title, a styled header row, and ten empty
/// pre-formatted rows ready for data entry.
pub fn build(workbook: &mut Workbook) -> Result<()> {
    // Clamped so the sheet can also be built standalone into an empty workbook
    let position = SHEET_POSITION.min(workbook.sheet_count());
    let sheet = workbook.insert_worksheet(position, SHEET_NAME)?;

    // Title, merged across the table width
    sheet.set_cell_value_at(0, 0, TITLE)?;
    sheet.set_cell_style_at(0, 0, &theme::title_style(14.0))?;
    sheet.merge_cells(&CellRange::from_indices(0, 0, 0, (HEADERS.len() - 1) as u16))?;
    sheet.set_row_height(0, 30.0);

    // Header row
    let header = theme::header_style();
    for (col, label) in HEADERS.iter().enumerate() {
        sheet.set_cell_value_at(HEADER_ROW, col as u16, *label)?;
        sheet.set_cell_style_at(HEADER_ROW, col as u16, &header)?;
    }

    // Empty formatted data rows
    let bordered = theme::bordered();
    let currency = theme::currency_cell();
    let leave = Style::new()
        .number_format(theme::LEAVE_DAYS_FORMAT)
        .border(theme::grid_border());

    for row in FIRST_DATA_ROW..FIRST_DATA_ROW + DATA_ROW_COUNT {
        for col in 0..HEADERS.len() as u16 {
            let style = match col {
                1..=3 => &currency,
                4 => &leave,
                _ => &bordered,
            };
            sheet.set_cell_style_at(row, col, style)?;
        }
    }

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        sheet.set_column_width(col as u16, *width);
    }

    Ok(())
}
