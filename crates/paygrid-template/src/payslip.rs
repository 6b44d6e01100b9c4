//! Payslip sheet ("Payslip")

use chrono::NaiveDate;
use paygrid_core::style::{HorizontalAlignment, Style, VerticalAlignment};
use paygrid_core::{CellRange, Color, Workbook, Worksheet};

use crate::theme;
use crate::Result;

/// Sheet title shown on the tab
pub const SHEET_NAME: &str = "Payslip";

/// Position of the sheet within the workbook
pub const SHEET_POSITION: usize = 2;

/// Earnings line labels (rows 8-12)
pub const EARNINGS_LABELS: [&str; 5] = [
    "Salary",
    "Meal Allowance",
    "Transport Allowance",
    "Bonus",
    "Overtime",
];

/// Deduction line labels (rows 16-17)
pub const DEDUCTION_LABELS: [&str; 2] = ["Leave Deduction", "Short-Work Deduction"];

/// Display format of the date stamp (day.month.year)
pub const DATE_STAMP_FORMAT: &str = "%d.%m.%Y";

const TITLE: &str = "PAYSLIP";
const LABEL_COL: u16 = 0;
const VALUE_COL: u16 = 1;

// Fixed layout, 0-based (rendered rows are one higher)
const NAME_ROW: u32 = 2;
const PERIOD_ROW: u32 = 3;
const DATE_ROW: u32 = 4;
const EARNINGS_BAND_ROW: u32 = 6;
const FIRST_EARNINGS_ROW: u32 = 7;
const TOTAL_EARNINGS_ROW: u32 = 12;
const DEDUCTIONS_BAND_ROW: u32 = 14;
const FIRST_DEDUCTION_ROW: u32 = 15;
const TOTAL_DEDUCTIONS_ROW: u32 = 17;
const NET_PAY_ROW: u32 = 19;
const EMPLOYEE_SIGNATURE_ROW: u32 = 22;
const AUTHORIZED_SIGNATURE_ROW: u32 = 24;

/// Build the payslip sheet at position 2, stamped with today's date.
pub fn build(workbook: &mut Workbook) -> Result<()> {
    build_dated(workbook, chrono::Local::now().date_naive())
}

/// Build the payslip sheet with an explicit date stamp.
///
/// The date is the only run-to-run varying value in the whole template, so
/// pinning it makes the output reproducible.
pub fn build_dated(workbook: &mut Workbook, date: NaiveDate) -> Result<()> {
    // Clamped so the sheet can also be built standalone into an empty workbook
    let position = SHEET_POSITION.min(workbook.sheet_count());
    let sheet = workbook.insert_worksheet(position, SHEET_NAME)?;

    // Document title
    sheet.set_cell_value_at(0, 0, TITLE)?;
    sheet.set_cell_style_at(0, 0, &theme::title_style(16.0))?;
    sheet.merge_cells(&CellRange::from_indices(0, 0, 0, 3))?;
    sheet.set_row_height(0, 35.0);

    // Metadata rows
    let label_bold = Style::new().bold(true);
    sheet.set_cell_value_at(NAME_ROW, LABEL_COL, "Employee Name:")?;
    sheet.set_cell_style_at(NAME_ROW, LABEL_COL, &label_bold)?;
    sheet.set_cell_value_at(NAME_ROW, VALUE_COL, "[Select employee]")?;

    sheet.set_cell_value_at(PERIOD_ROW, LABEL_COL, "Period:")?;
    sheet.set_cell_style_at(PERIOD_ROW, LABEL_COL, &label_bold)?;
    sheet.set_cell_value_at(PERIOD_ROW, VALUE_COL, "[Month/Year]")?;

    sheet.set_cell_value_at(DATE_ROW, LABEL_COL, "Date:")?;
    sheet.set_cell_style_at(DATE_ROW, LABEL_COL, &label_bold)?;
    sheet.set_cell_value_at(
        DATE_ROW,
        VALUE_COL,
        date.format(DATE_STAMP_FORMAT).to_string(),
    )?;

    // EARNINGS section
    write_section_band(sheet, EARNINGS_BAND_ROW, "EARNINGS", theme::EARNINGS_BAND)?;
    for (i, label) in EARNINGS_LABELS.iter().enumerate() {
        write_item_row(sheet, FIRST_EARNINGS_ROW + i as u32, label)?;
    }
    write_total_row(
        sheet,
        TOTAL_EARNINGS_ROW,
        "TOTAL EARNINGS",
        &format!(
            "=SUM(B{}:B{})",
            FIRST_EARNINGS_ROW + 1,
            TOTAL_EARNINGS_ROW
        ),
    )?;

    // DEDUCTIONS section
    write_section_band(
        sheet,
        DEDUCTIONS_BAND_ROW,
        "DEDUCTIONS",
        theme::DEDUCTIONS_BAND,
    )?;
    for (i, label) in DEDUCTION_LABELS.iter().enumerate() {
        write_item_row(sheet, FIRST_DEDUCTION_ROW + i as u32, label)?;
    }
    write_total_row(
        sheet,
        TOTAL_DEDUCTIONS_ROW,
        "TOTAL DEDUCTIONS",
        &format!(
            "=SUM(B{}:B{})",
            FIRST_DEDUCTION_ROW + 1,
            TOTAL_DEDUCTIONS_ROW
        ),
    )?;

    // NET PAY row
    sheet.set_cell_value_at(NET_PAY_ROW, LABEL_COL, "NET PAY")?;
    sheet.set_cell_style_at(
        NET_PAY_ROW,
        LABEL_COL,
        &Style::new()
            .bold(true)
            .font_size(14.0)
            .font_color(Color::WHITE)
            .fill_color(theme::HEADER_FILL)
            .horizontal_alignment(HorizontalAlignment::Center)
            .vertical_alignment(VerticalAlignment::Center),
    )?;
    sheet.set_cell_formula_at(
        NET_PAY_ROW,
        VALUE_COL,
        &format!("=B{}-B{}", TOTAL_EARNINGS_ROW + 1, TOTAL_DEDUCTIONS_ROW + 1),
    )?;
    sheet.set_cell_style_at(
        NET_PAY_ROW,
        VALUE_COL,
        &Style::new()
            .bold(true)
            .font_size(14.0)
            .font_color(theme::EARNINGS_BAND)
            .fill_color(theme::NET_PAY_FILL)
            .number_format(theme::CURRENCY_FORMAT)
            .horizontal_alignment(HorizontalAlignment::Right)
            .vertical_alignment(VerticalAlignment::Center),
    )?;
    sheet.set_row_height(NET_PAY_ROW, 30.0);

    // Signature lines
    let left = Style::new().horizontal_alignment(HorizontalAlignment::Left);
    sheet.set_cell_value_at(
        EMPLOYEE_SIGNATURE_ROW,
        LABEL_COL,
        "Employee signature: _______________",
    )?;
    sheet.set_cell_style_at(EMPLOYEE_SIGNATURE_ROW, LABEL_COL, &left)?;
    sheet.set_cell_value_at(
        AUTHORIZED_SIGNATURE_ROW,
        LABEL_COL,
        "Authorized signature: _______________",
    )?;
    sheet.set_cell_style_at(AUTHORIZED_SIGNATURE_ROW, LABEL_COL, &left)?;

    sheet.set_column_width(LABEL_COL, 25.0);
    sheet.set_column_width(VALUE_COL, 20.0);

    Ok(())
}

/// Colored section header merged across the label and value columns.
fn write_section_band(sheet: &mut Worksheet, row: u32, label: &str, fill: Color) -> Result<()> {
    sheet.set_cell_value_at(row, LABEL_COL, label)?;
    sheet.set_cell_style_at(row, LABEL_COL, &theme::section_band(fill))?;
    sheet.merge_cells(&CellRange::from_indices(row, LABEL_COL, row, VALUE_COL))?;
    Ok(())
}

/// Labeled item row: bordered label, bordered currency value cell.
fn write_item_row(sheet: &mut Worksheet, row: u32, label: &str) -> Result<()> {
    sheet.set_cell_value_at(row, LABEL_COL, label)?;
    sheet.set_cell_style_at(row, LABEL_COL, &theme::bordered())?;
    sheet.set_cell_style_at(row, VALUE_COL, &theme::currency_cell())?;
    Ok(())
}

/// Total row: bold label and a range-sum formula, both on the total fill.
fn write_total_row(sheet: &mut Worksheet, row: u32, label: &str, formula: &str) -> Result<()> {
    sheet.set_cell_value_at(row, LABEL_COL, label)?;
    sheet.set_cell_style_at(row, LABEL_COL, &theme::total_label())?;
    sheet.set_cell_formula_at(row, VALUE_COL, formula)?;
    sheet.set_cell_style_at(row, VALUE_COL, &theme::total_value())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn built() -> Workbook {
        let mut wb = Workbook::new();
        build_dated(&mut wb, NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()).unwrap();
        wb
    }

    #[test]
    fn test_title_and_metadata() {
        let wb = built();
        let sheet = wb.worksheet(0).unwrap();

        assert_eq!(sheet.name(), SHEET_NAME);
        assert_eq!(sheet.get_value("A1").unwrap().as_str(), Some(TITLE));
        assert!((sheet.row_height(0) - 35.0).abs() < 0.001);

        assert_eq!(
            sheet.get_value("A3").unwrap().as_str(),
            Some("Employee Name:")
        );
        assert_eq!(
            sheet.get_value("B3").unwrap().as_str(),
            Some("[Select employee]")
        );
        assert_eq!(sheet.get_value("B4").unwrap().as_str(), Some("[Month/Year]"));
        assert_eq!(sheet.get_value("B5").unwrap().as_str(), Some("06.08.2026"));
    }

    #[test]
    fn test_sections_and_formulas() {
        let wb = built();
        let sheet = wb.worksheet(0).unwrap();

        assert_eq!(sheet.get_value("A7").unwrap().as_str(), Some("EARNINGS"));
        for (i, label) in EARNINGS_LABELS.iter().enumerate() {
            assert_eq!(
                sheet.get_value_at(7 + i as u32, 0).as_str(),
                Some(*label)
            );
        }
        assert_eq!(
            sheet.get_value("B13").unwrap().formula_text(),
            Some("=SUM(B8:B12)")
        );

        assert_eq!(sheet.get_value("A15").unwrap().as_str(), Some("DEDUCTIONS"));
        assert_eq!(
            sheet.get_value("B18").unwrap().formula_text(),
            Some("=SUM(B16:B17)")
        );

        assert_eq!(sheet.get_value("A20").unwrap().as_str(), Some("NET PAY"));
        assert_eq!(
            sheet.get_value("B20").unwrap().formula_text(),
            Some("=B13-B18")
        );
        assert!((sheet.row_height(19) - 30.0).abs() < 0.001);
    }

    #[test]
    fn test_merged_bands() {
        let wb = built();
        let sheet = wb.worksheet(0).unwrap();

        let merges: Vec<String> = sheet
            .merged_regions()
            .iter()
            .map(|r| r.to_a1_string())
            .collect();
        assert!(merges.contains(&"A1:D1".to_string()));
        assert!(merges.contains(&"A7:B7".to_string()));
        assert!(merges.contains(&"A15:B15".to_string()));
    }

    #[test]
    fn test_value_cells_are_currency() {
        let wb = built();
        let sheet = wb.worksheet(0).unwrap();

        for row in [7u32, 8, 9, 10, 11, 15, 16] {
            let style = sheet.cell_style_at(row, 1).unwrap();
            assert_eq!(
                style.number_format,
                paygrid_core::NumberFormat::Custom(theme::CURRENCY_FORMAT.into()),
                "row {} value cell",
                row
            );
            assert!(!style.border.is_empty());
        }
    }

    #[test]
    fn test_signatures_and_widths() {
        let wb = built();
        let sheet = wb.worksheet(0).unwrap();

        assert_eq!(
            sheet.get_value("A23").unwrap().as_str(),
            Some("Employee signature: _______________")
        );
        assert_eq!(
            sheet.get_value("A25").unwrap().as_str(),
            Some("Authorized signature: _______________")
        );
        assert!((sheet.column_width(0) - 25.0).abs() < 0.001);
        assert!((sheet.column_width(1) - 20.0).abs() < 0.001);
    }
}
