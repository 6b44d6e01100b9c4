//! Worksheet type

use crate::cell::{CellAddress, CellData, CellRange, CellStorage, CellValue};
use crate::error::{Error, Result};
use crate::style::Style;
use crate::{MAX_COLS, MAX_ROWS};

/// A worksheet (single sheet in a workbook)
#[derive(Debug)]
pub struct Worksheet {
    /// Sheet name
    name: String,
    /// Cell storage
    cells: CellStorage,
}

impl Worksheet {
    /// Create a new worksheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            cells: CellStorage::new(),
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    // === Cell Access ===

    /// Get a cell by address string (e.g., "A1")
    pub fn cell(&self, address: &str) -> Result<Option<&CellData>> {
        let addr = CellAddress::parse(address)?;
        Ok(self.cells.get(addr.row, addr.col))
    }

    /// Get a cell by row and column indices
    pub fn cell_at(&self, row: u32, col: u16) -> Option<&CellData> {
        self.cells.get(row, col)
    }

    /// Get cell value (convenience method)
    pub fn get_value(&self, address: &str) -> Result<CellValue> {
        let addr = CellAddress::parse(address)?;
        Ok(self.get_value_at(addr.row, addr.col))
    }

    /// Get cell value by indices
    pub fn get_value_at(&self, row: u32, col: u16) -> CellValue {
        self.cells
            .get(row, col)
            .map(|c| c.value.clone())
            .unwrap_or(CellValue::Empty)
    }

    /// Get a cell's style index by row/column.
    ///
    /// Returns 0 if the cell does not exist or has the default style.
    pub fn cell_style_index_at(&self, row: u32, col: u16) -> u32 {
        self.cells.get(row, col).map(|c| c.style_index).unwrap_or(0)
    }

    /// Get a style by its index in this worksheet's style pool.
    pub fn style_by_index(&self, style_index: u32) -> Option<&Style> {
        self.cells.style_pool().get(style_index)
    }

    /// Get the non-default style applied to a cell, if any.
    pub fn cell_style_at(&self, row: u32, col: u16) -> Option<&Style> {
        let idx = self.cell_style_index_at(row, col);
        if idx == 0 {
            None
        } else {
            self.style_by_index(idx)
        }
    }

    /// Get the non-default style applied to a cell by address, if any.
    pub fn cell_style(&self, address: &str) -> Result<Option<&Style>> {
        let addr = CellAddress::parse(address)?;
        Ok(self.cell_style_at(addr.row, addr.col))
    }

    // === Cell Modification ===

    /// Set a cell value by address string
    pub fn set_cell_value<V: Into<CellValue>>(&mut self, address: &str, value: V) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_cell_value_at(addr.row, addr.col, value)
    }

    /// Set a cell value by row and column indices
    pub fn set_cell_value_at<V: Into<CellValue>>(
        &mut self,
        row: u32,
        col: u16,
        value: V,
    ) -> Result<()> {
        self.validate_cell_position(row, col)?;
        self.cells.set_value(row, col, value.into());
        Ok(())
    }

    /// Set a cell formula by address string
    pub fn set_cell_formula(&mut self, address: &str, formula: &str) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_cell_formula_at(addr.row, addr.col, formula)
    }

    /// Set a cell formula by row and column indices
    pub fn set_cell_formula_at(&mut self, row: u32, col: u16, formula: &str) -> Result<()> {
        self.validate_cell_position(row, col)?;
        self.cells.set_value(row, col, CellValue::formula(formula));
        Ok(())
    }

    /// Set a cell style by address string
    pub fn set_cell_style(&mut self, address: &str, style: &Style) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_cell_style_at(addr.row, addr.col, style)
    }

    /// Set a cell style by row and column indices
    pub fn set_cell_style_at(&mut self, row: u32, col: u16, style: &Style) -> Result<()> {
        self.validate_cell_position(row, col)?;
        let style_index = self.cells.style_pool_mut().get_or_insert(style.clone());
        self.cells.set_style(row, col, style_index);
        Ok(())
    }

    // === Row/Column Operations ===

    /// Get row height in points
    pub fn row_height(&self, row: u32) -> f64 {
        self.cells.row_height(row)
    }

    /// Set row height in points
    pub fn set_row_height(&mut self, row: u32, height: f64) {
        self.cells.set_row_height(row, height);
    }

    /// Get column width in characters
    pub fn column_width(&self, col: u16) -> f64 {
        self.cells.column_width(col)
    }

    /// Set column width in characters
    pub fn set_column_width(&mut self, col: u16, width: f64) {
        self.cells.set_column_width(col, width);
    }

    /// Get all custom row heights (row index → height in points).
    pub fn custom_row_heights(&self) -> &std::collections::BTreeMap<u32, f64> {
        self.cells.custom_row_heights()
    }

    /// Get all custom column widths (column index → width in characters).
    pub fn custom_column_widths(&self) -> &std::collections::BTreeMap<u16, f64> {
        self.cells.custom_column_widths()
    }

    // === Merged Cells ===

    /// Get merged regions
    pub fn merged_regions(&self) -> &[CellRange] {
        self.cells.merged_regions()
    }

    /// Merge cells
    pub fn merge_cells(&mut self, range: &CellRange) -> Result<()> {
        for existing in self.cells.merged_regions() {
            if range.overlaps(existing) {
                return Err(Error::MergedCellConflict(range.to_string()));
            }
        }
        self.cells.add_merged_region(*range);
        Ok(())
    }

    // === Queries ===

    /// Get the used range (bounds of all non-empty cells)
    pub fn used_range(&self) -> Option<CellRange> {
        self.cells
            .used_bounds()
            .map(|(min_row, min_col, max_row, max_col)| {
                CellRange::from_indices(min_row, min_col, max_row, max_col)
            })
    }

    /// Get the number of non-empty cells
    pub fn cell_count(&self) -> usize {
        self.cells.cell_count()
    }

    /// Check if the worksheet is empty
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over all non-empty cells in row order
    pub fn iter_cells(&self) -> impl Iterator<Item = (u32, u16, &CellData)> {
        self.cells.iter()
    }

    /// Iterate over all formula cells: (row, col, formula_text)
    pub fn formula_cells(&self) -> impl Iterator<Item = (u32, u16, &str)> {
        self.cells.iter().filter_map(|(row, col, cell)| {
            cell.value.formula_text().map(|text| (row, col, text))
        })
    }

    /// Validate cell position
    fn validate_cell_position(&self, row: u32, col: u16) -> Result<()> {
        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }
        if col >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds(col, MAX_COLS - 1));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{BorderLineStyle, BorderStyle, Color};

    #[test]
    fn test_new_worksheet() {
        let ws = Worksheet::new("Payslip");
        assert_eq!(ws.name(), "Payslip");
        assert!(ws.is_empty());
    }

    #[test]
    fn test_set_cell_values() {
        let mut ws = Worksheet::new("Test");

        ws.set_cell_value("A1", "Salary").unwrap();
        ws.set_cell_value("B1", 10000.0).unwrap();

        assert_eq!(ws.get_value("A1").unwrap().as_str(), Some("Salary"));
        assert_eq!(ws.get_value("B1").unwrap().as_number(), Some(10000.0));
        assert_eq!(ws.cell_count(), 2);
    }

    #[test]
    fn test_set_cell_formula() {
        let mut ws = Worksheet::new("Test");

        ws.set_cell_formula("B13", "=SUM(B8:B12)").unwrap();

        let value = ws.get_value("B13").unwrap();
        assert!(value.is_formula());
        assert_eq!(value.formula_text(), Some("=SUM(B8:B12)"));
    }

    #[test]
    fn test_styles_are_pooled() {
        let mut ws = Worksheet::new("Test");
        let bordered = Style::new().border(BorderStyle::all(
            BorderLineStyle::Thin,
            Color::rgb(0xE2, 0xE8, 0xF0),
        ));

        ws.set_cell_style_at(3, 0, &bordered).unwrap();
        ws.set_cell_style_at(3, 1, &bordered).unwrap();

        let idx = ws.cell_style_index_at(3, 0);
        assert_ne!(idx, 0);
        assert_eq!(idx, ws.cell_style_index_at(3, 1));
        assert_eq!(ws.cell_style_at(3, 0), Some(&bordered));
    }

    #[test]
    fn test_merge_cells() {
        let mut ws = Worksheet::new("Test");

        ws.merge_cells(&CellRange::parse("A1:E1").unwrap()).unwrap();
        assert_eq!(ws.merged_regions().len(), 1);

        // Can't merge overlapping
        let overlapping = CellRange::parse("C1:F1").unwrap();
        assert!(matches!(
            ws.merge_cells(&overlapping),
            Err(Error::MergedCellConflict(_))
        ));
    }

    #[test]
    fn test_used_range() {
        let mut ws = Worksheet::new("Test");
        assert!(ws.used_range().is_none());

        ws.set_cell_value_at(2, 0, "Name").unwrap();
        ws.set_cell_value_at(12, 4, 5.0).unwrap();

        let range = ws.used_range().unwrap();
        assert_eq!(range.start.row, 2);
        assert_eq!(range.end.row, 12);
        assert_eq!(range.end.col, 4);
    }

    #[test]
    fn test_bounds_validation() {
        let mut ws = Worksheet::new("Test");
        assert!(ws.set_cell_value_at(crate::MAX_ROWS, 0, 1.0).is_err());
        assert!(ws.set_cell_value_at(0, crate::MAX_COLS, 1.0).is_err());
    }
}
