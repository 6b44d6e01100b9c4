//! Shared style and format literals for the template sheets
//!
//! All colors and number formats used across the three sheets live here so
//! the per-sheet builders stay a flat sequence of cell writes.

use paygrid_core::style::{
    BorderLineStyle, BorderStyle, Color, HorizontalAlignment, Style, VerticalAlignment,
};

/// Fill behind the table header rows and the net-pay label
pub const HEADER_FILL: Color = Color::rgb(0x66, 0x7E, 0xEA);

/// Title text color
pub const TITLE_TEXT: Color = Color::rgb(0x1E, 0x29, 0x3B);

/// Grid line color for bordered data cells
pub const GRID_LINE: Color = Color::rgb(0xE2, 0xE8, 0xF0);

/// Fill behind the payslip EARNINGS band (also the net-pay value text color)
pub const EARNINGS_BAND: Color = Color::rgb(0x10, 0xB9, 0x81);

/// Fill behind the payslip DEDUCTIONS band
pub const DEDUCTIONS_BAND: Color = Color::rgb(0xEF, 0x44, 0x44);

/// Fill behind the payslip total rows
pub const TOTAL_ROW_FILL: Color = Color::rgb(0xF3, 0xF4, 0xF6);

/// Fill behind the payslip net-pay value cell
pub const NET_PAY_FILL: Color = Color::rgb(0xF8, 0xFA, 0xFC);

/// Display format for monetary cells
pub const CURRENCY_FORMAT: &str = "$#,##0.00";

/// Display format for the roster's annual-leave column
pub const LEAVE_DAYS_FORMAT: &str = "0 \"days\"";

/// Thin border on all four edges, in the grid color
pub fn grid_border() -> BorderStyle {
    BorderStyle::all(BorderLineStyle::Thin, GRID_LINE)
}

/// Centered bold title in the given point size
pub fn title_style(size: f64) -> Style {
    Style::new()
        .bold(true)
        .font_size(size)
        .font_color(TITLE_TEXT)
        .horizontal_alignment(HorizontalAlignment::Center)
        .vertical_alignment(VerticalAlignment::Center)
}

/// Table header cell: white bold text on the header fill, centered, bordered
pub fn header_style() -> Style {
    Style::new()
        .bold(true)
        .font_size(12.0)
        .font_color(Color::WHITE)
        .fill_color(HEADER_FILL)
        .horizontal_alignment(HorizontalAlignment::Center)
        .vertical_alignment(VerticalAlignment::Center)
        .border(grid_border())
}

/// Payslip section band (EARNINGS / DEDUCTIONS): white bold text on a fill
pub fn section_band(fill: Color) -> Style {
    Style::new()
        .bold(true)
        .font_size(12.0)
        .font_color(Color::WHITE)
        .fill_color(fill)
        .horizontal_alignment(HorizontalAlignment::Center)
}

/// Empty bordered data cell
pub fn bordered() -> Style {
    Style::new().border(grid_border())
}

/// Bordered cell with the currency format
pub fn currency_cell() -> Style {
    bordered().number_format(CURRENCY_FORMAT)
}

/// Payslip total-row label: bold on the total fill
pub fn total_label() -> Style {
    Style::new().bold(true).fill_color(TOTAL_ROW_FILL)
}

/// Payslip total-row value: bold currency on the total fill
pub fn total_value() -> Style {
    total_label().number_format(CURRENCY_FORMAT)
}
