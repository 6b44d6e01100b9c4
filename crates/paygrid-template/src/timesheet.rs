//! Time-sheet entry sheet ("Timesheet")

use paygrid_core::style::{NumberFormat, Style};
use paygrid_core::{CellRange, Workbook};

use crate::theme;
use crate::Result;

/// Sheet title shown on the tab
pub const SHEET_NAME: &str = "Timesheet";

/// Position of the sheet within the workbook
pub const SHEET_POSITION: usize = 1;

/// Header labels on row 3, columns A-J
pub const HEADERS: [&str; 10] = [
    "Name",
    "Salary",
    "Meal",
    "Transport",
    "Bonus",
    "Overtime",
    "Leave Type",
    "Leave Days",
    "Deduction",
    "Net Pay",
];

/// Working days per month used by the deduction formula
pub const WORKING_DAYS_PER_MONTH: u32 = 26;

const TITLE: &str = "TIMESHEET ENTRY";
const HEADER_ROW: u32 = 2;
const FIRST_DATA_ROW: u32 = 3;
const DATA_ROW_COUNT: u32 = 10;

/// Columns carrying the currency format (Salary..Overtime, Deduction, Net Pay)
const CURRENCY_COLS: [u16; 7] = [1, 2, 3, 4, 5, 8, 9];
const LEAVE_DAYS_COL: u16 = 7;
const DEDUCTION_COL: u16 = 8;
const NET_PAY_COL: u16 = 9;

/// Column L holds the explanatory notes
const NOTES_COL: u16 = 11;
const NOTES_HEADING: &str = "CALCULATION NOTES:";
const NOTES: [&str; 6] = [
    "\u{2022} Working days per month: 26",
    "\u{2022} Daily rate = Salary / 26",
    "\u{2022} Hourly rate = Daily rate / 8",
    "\u{2022} Annual leave is never deducted",
    "\u{2022} Unpaid leave / Sick leave: deducted at the daily rate",
    "\u{2022} Net pay = Total earnings - Deduction",
];

const COLUMN_WIDTHS: [f64; 10] = [25.0, 13.0, 13.0, 13.0, 13.0, 13.0, 12.0, 10.0, 13.0, 13.0];

/// Deduction formula for a data row (0-based row index).
///
/// Unpaid and sick leave cost one daily rate (Salary / 26) per leave day;
/// every other leave type deducts nothing.
pub fn deduction_formula(row: u32) -> String {
    let r = row + 1;
    format!(
        "=IF(OR(G{r}=\"Unpaid\",G{r}=\"Sick\"),(B{r}/{WORKING_DAYS_PER_MONTH})*H{r},0)"
    )
}

/// Net-pay formula for a data row (0-based row index): earnings minus deduction.
pub fn net_pay_formula(row: u32) -> String {
    let r = row + 1;
    format!("=B{r}+C{r}+D{r}+E{r}+F{r}-I{r}")
}

/// Build the time-sheet entry sheet at position 1 of the workbook.
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

    // Notes block beside the table
    sheet.set_cell_value_at(HEADER_ROW, NOTES_COL, NOTES_HEADING)?;
    sheet.set_cell_style_at(
        HEADER_ROW,
        NOTES_COL,
        &Style::new().bold(true).font_size(11.0),
    )?;
    for (i, note) in NOTES.iter().enumerate() {
        sheet.set_cell_value_at(HEADER_ROW + 1 + i as u32, NOTES_COL, *note)?;
    }

    // Data rows: formats on every column, formulas in Deduction and Net Pay
    let bordered = theme::bordered();
    let currency = theme::currency_cell();
    let leave_days = Style::new()
        .format(NumberFormat::integer())
        .border(theme::grid_border());

    for row in FIRST_DATA_ROW..FIRST_DATA_ROW + DATA_ROW_COUNT {
        for col in 0..HEADERS.len() as u16 {
            let style = if CURRENCY_COLS.contains(&col) {
                &currency
            } else if col == LEAVE_DAYS_COL {
                &leave_days
            } else {
                &bordered
            };
            sheet.set_cell_style_at(row, col, style)?;
        }

        sheet.set_cell_formula_at(row, DEDUCTION_COL, &deduction_formula(row))?;
        sheet.set_cell_formula_at(row, NET_PAY_COL, &net_pay_formula(row))?;
    }

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        sheet.set_column_width(col as u16, *width);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn built() -> Workbook {
        let mut wb = Workbook::new();
        build(&mut wb).unwrap();
        wb
    }

    #[test]
    fn test_title_and_headers() {
        let wb = built();
        let sheet = wb.worksheet(0).unwrap();

        assert_eq!(sheet.name(), SHEET_NAME);
        assert_eq!(sheet.get_value("A1").unwrap().as_str(), Some(TITLE));
        assert_eq!(sheet.merged_regions()[0].to_a1_string(), "A1:J1");

        for (col, label) in HEADERS.iter().enumerate() {
            assert_eq!(sheet.get_value_at(2, col as u16).as_str(), Some(*label));
        }
    }

    #[test]
    fn test_row_formulas() {
        let wb = built();
        let sheet = wb.worksheet(0).unwrap();

        // First data row is rendered row 4
        assert_eq!(
            sheet.get_value("I4").unwrap().formula_text(),
            Some("=IF(OR(G4=\"Unpaid\",G4=\"Sick\"),(B4/26)*H4,0)")
        );
        assert_eq!(
            sheet.get_value("J4").unwrap().formula_text(),
            Some("=B4+C4+D4+E4+F4-I4")
        );

        // Every data row references its own rendered row number
        for row in 3..13u32 {
            let r = row + 1;
            let deduction = sheet.get_value_at(row, 8);
            let net = sheet.get_value_at(row, 9);
            assert!(deduction
                .formula_text()
                .unwrap()
                .contains(&format!("G{r}=")));
            assert_eq!(
                net.formula_text(),
                Some(format!("=B{r}+C{r}+D{r}+E{r}+F{r}-I{r}").as_str())
            );
        }
    }

    #[test]
    fn test_data_row_formats() {
        let wb = built();
        let sheet = wb.worksheet(0).unwrap();

        for row in 3..13 {
            for col in 0..10u16 {
                let style = sheet
                    .cell_style_at(row, col)
                    .unwrap_or_else(|| panic!("no style at ({}, {})", row, col));
                assert!(!style.border.is_empty());

                if CURRENCY_COLS.contains(&col) {
                    assert_eq!(
                        style.number_format,
                        NumberFormat::Custom(theme::CURRENCY_FORMAT.into())
                    );
                } else if col == LEAVE_DAYS_COL {
                    assert_eq!(style.number_format, NumberFormat::integer());
                } else {
                    assert_eq!(style.number_format, NumberFormat::General);
                }
            }
        }
    }

    #[test]
    fn test_notes_block() {
        let wb = built();
        let sheet = wb.worksheet(0).unwrap();

        assert_eq!(sheet.get_value("L3").unwrap().as_str(), Some(NOTES_HEADING));
        assert!(sheet.cell_style("L3").unwrap().unwrap().font.bold);
        // Notes fill L4..L9
        for (i, note) in NOTES.iter().enumerate() {
            assert_eq!(
                sheet.get_value_at(3 + i as u32, 11).as_str(),
                Some(*note)
            );
        }
    }

    #[test]
    fn test_column_widths() {
        let wb = built();
        let sheet = wb.worksheet(0).unwrap();

        assert!((sheet.column_width(0) - 25.0).abs() < 0.001);
        assert!((sheet.column_width(6) - 12.0).abs() < 0.001);
        assert!((sheet.column_width(7) - 10.0).abs() < 0.001);
        assert!((sheet.column_width(9) - 13.0).abs() < 0.001);
    }
}
