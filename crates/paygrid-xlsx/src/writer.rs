//! XLSX writer

use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use crate::error::XlsxResult;
use crate::styles::XlsxStyleTable;
use paygrid_core::{CellAddress, CellValue, Workbook, Worksheet};

/// XLSX file writer
pub struct XlsxWriter;

impl XlsxWriter {
    /// Write a workbook to a file path
    pub fn write_file<P: AsRef<Path>>(workbook: &Workbook, path: P) -> XlsxResult<()> {
        let file = File::create(path)?;
        Self::write(workbook, file)
    }

    /// Write a workbook to a writer
    pub fn write<W: Write + Seek>(workbook: &Workbook, writer: W) -> XlsxResult<()> {
        log::debug!("writing workbook with {} sheet(s)", workbook.sheet_count());

        let mut zip = zip::ZipWriter::new(writer);

        // Build a workbook-wide style table.
        let style_table = XlsxStyleTable::build(workbook);

        // Write [Content_Types].xml
        Self::write_content_types(&mut zip, workbook)?;

        // Write _rels/.rels
        Self::write_root_rels(&mut zip)?;

        // Write xl/workbook.xml
        Self::write_workbook_xml(&mut zip, workbook)?;

        // Write xl/_rels/workbook.xml.rels
        Self::write_workbook_rels(&mut zip, workbook)?;

        // Write xl/styles.xml
        Self::write_styles_xml(&mut zip, &style_table)?;

        // Write worksheets
        for (i, sheet) in workbook.worksheets().enumerate() {
            Self::write_worksheet(&mut zip, sheet, i, &style_table)?;
        }

        zip.finish()?;
        Ok(())
    }

    fn write_content_types<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        workbook: &Workbook,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("[Content_Types].xml", options)?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="xml" ContentType="application/xml"/>
    <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
    <Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>"#,
        );

        // Add an override for each worksheet
        for i in 0..workbook.sheet_count() {
            content.push_str(&format!(
                r#"
    <Override PartName="/xl/worksheets/sheet{}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
                i + 1
            ));
        }

        content.push_str("\n</Types>");

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_root_rels<W: Write + Seek>(zip: &mut zip::ZipWriter<W>) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("_rels/.rels", options)?;

        let content = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#;

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_workbook_xml<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        workbook: &Workbook,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("xl/workbook.xml", options)?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
    <sheets>"#,
        );

        for (i, sheet) in workbook.worksheets().enumerate() {
            content.push_str(&format!(
                r#"
        <sheet name="{}" sheetId="{}" r:id="rId{}"/>"#,
                escape_xml(sheet.name()),
                i + 1,
                i + 1
            ));
        }

        content.push_str(
            r#"
    </sheets>
</workbook>"#,
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_workbook_rels<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        workbook: &Workbook,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("xl/_rels/workbook.xml.rels", options)?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );

        for i in 0..workbook.sheet_count() {
            content.push_str(&format!(
                r#"
    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{}.xml"/>"#,
                i + 1,
                i + 1
            ));
        }

        // Styles relationship
        let styles_rid = workbook.sheet_count() + 1;
        content.push_str(&format!(
            r#"
    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>"#,
            styles_rid
        ));

        content.push_str(
            r#"
</Relationships>"#,
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_styles_xml<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        style_table: &XlsxStyleTable,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("xl/styles.xml", options)?;
        let xml = style_table.to_styles_xml();
        zip.write_all(xml.as_bytes())?;
        Ok(())
    }

    fn write_worksheet<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        sheet: &Worksheet,
        index: usize,
        style_table: &XlsxStyleTable,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file(format!("xl/worksheets/sheet{}.xml", index + 1), options)?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
        );

        // Custom column widths come before sheetData
        let widths = sheet.custom_column_widths();
        if !widths.is_empty() {
            content.push_str("\n    <cols>");
            for (&col, &width) in widths {
                content.push_str(&format!(
                    "\n        <col min=\"{n}\" max=\"{n}\" width=\"{w}\" customWidth=\"1\"/>",
                    n = col + 1,
                    w = width
                ));
            }
            content.push_str("\n    </cols>");
        }

        content.push_str("\n    <sheetData>");

        // Write cell data (sparse, row-major)
        let row_heights = sheet.custom_row_heights();
        let mut current_row: Option<u32> = None;
        for (row, col, cell) in sheet.iter_cells() {
            if current_row != Some(row) {
                // Close previous row
                if current_row.is_some() {
                    content.push_str("\n        </row>");
                }
                // Open new row, with height when customized
                match row_heights.get(&row) {
                    Some(ht) => content.push_str(&format!(
                        "\n        <row r=\"{}\" ht=\"{}\" customHeight=\"1\">",
                        row + 1,
                        ht
                    )),
                    None => content.push_str(&format!("\n        <row r=\"{}\">", row + 1)),
                }
                current_row = Some(row);
            }

            let cell_ref = CellAddress::new(row, col).to_a1_string();

            let xf_id = style_table.xf_id_for(index, cell.style_index);
            let style_attr = if xf_id != 0 {
                format!(" s=\"{}\"", xf_id)
            } else {
                String::new()
            };

            match &cell.value {
                CellValue::Number(n) => {
                    content.push_str(&format!(
                        "\n            <c r=\"{}\"{}><v>{}</v></c>",
                        cell_ref, style_attr, n
                    ));
                }
                CellValue::String(s) => {
                    content.push_str(&format!(
                        "\n            <c r=\"{}\"{} t=\"inlineStr\"><is><t>{}</t></is></c>",
                        cell_ref,
                        style_attr,
                        escape_xml(s)
                    ));
                }
                CellValue::Boolean(b) => {
                    content.push_str(&format!(
                        "\n            <c r=\"{}\"{} t=\"b\"><v>{}</v></c>",
                        cell_ref,
                        style_attr,
                        if *b { 1 } else { 0 }
                    ));
                }
                CellValue::Formula(text) => {
                    // The leading '=' is not part of the stored expression
                    let formula_text = text.strip_prefix('=').unwrap_or(text);
                    content.push_str(&format!(
                        "\n            <c r=\"{}\"{}><f>{}</f></c>",
                        cell_ref,
                        style_attr,
                        escape_xml(formula_text)
                    ));
                }
                CellValue::Empty => {
                    // Preserve style-only cells
                    if xf_id != 0 {
                        content.push_str(&format!(
                            "\n            <c r=\"{}\"{} />",
                            cell_ref, style_attr
                        ));
                    }
                }
            }
        }

        if current_row.is_some() {
            content.push_str("\n        </row>");
        }

        content.push_str("\n    </sheetData>");

        // Write merged cells (if any)
        let merged_regions = sheet.merged_regions();
        if !merged_regions.is_empty() {
            content.push_str(&format!(
                "\n    <mergeCells count=\"{}\">",
                merged_regions.len()
            ));
            for range in merged_regions {
                content.push_str(&format!("\n        <mergeCell ref=\"{}\"/>", range));
            }
            content.push_str("\n    </mergeCells>");
        }

        content.push_str("\n</worksheet>");

        zip.write_all(content.as_bytes())?;
        Ok(())
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use paygrid_core::style::Style;
    use paygrid_core::CellRange;
    use std::io::{Cursor, Read};

    fn write_to_parts(wb: &Workbook) -> Vec<(String, String)> {
        let mut buf = Vec::new();
        XlsxWriter::write(wb, Cursor::new(&mut buf)).unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(&buf)).unwrap();
        let mut parts = Vec::new();
        for i in 0..archive.len() {
            let mut file = archive.by_index(i).unwrap();
            let mut content = String::new();
            file.read_to_string(&mut content).unwrap();
            parts.push((file.name().to_string(), content));
        }
        parts
    }

    fn part<'a>(parts: &'a [(String, String)], name: &str) -> &'a str {
        &parts
            .iter()
            .find(|(n, _)| n == name)
            .unwrap_or_else(|| panic!("missing part {}", name))
            .1
    }

    #[test]
    fn test_package_parts() {
        let mut wb = Workbook::new();
        wb.add_worksheet("One").unwrap();
        wb.add_worksheet("Two").unwrap();

        let parts = write_to_parts(&wb);
        let names: Vec<&str> = parts.iter().map(|(n, _)| n.as_str()).collect();

        assert!(names.contains(&"[Content_Types].xml"));
        assert!(names.contains(&"_rels/.rels"));
        assert!(names.contains(&"xl/workbook.xml"));
        assert!(names.contains(&"xl/_rels/workbook.xml.rels"));
        assert!(names.contains(&"xl/styles.xml"));
        assert!(names.contains(&"xl/worksheets/sheet1.xml"));
        assert!(names.contains(&"xl/worksheets/sheet2.xml"));

        let workbook_xml = part(&parts, "xl/workbook.xml");
        assert!(workbook_xml.contains(r#"<sheet name="One" sheetId="1" r:id="rId1"/>"#));
        assert!(workbook_xml.contains(r#"<sheet name="Two" sheetId="2" r:id="rId2"/>"#));
    }

    #[test]
    fn test_cell_values_and_formulas() {
        let mut wb = Workbook::new();
        wb.add_worksheet("Data").unwrap();
        let sheet = wb.worksheet_mut(0).unwrap();
        sheet.set_cell_value("A1", "Net Pay").unwrap();
        sheet.set_cell_value("B1", 1923.08).unwrap();
        sheet.set_cell_formula("C1", "=B1*2").unwrap();

        let parts = write_to_parts(&wb);
        let xml = part(&parts, "xl/worksheets/sheet1.xml");

        assert!(xml.contains(r#"<c r="A1" t="inlineStr"><is><t>Net Pay</t></is></c>"#));
        assert!(xml.contains(r#"<c r="B1"><v>1923.08</v></c>"#));
        // Formulas are written without the '=' prefix
        assert!(xml.contains(r#"<c r="C1"><f>B1*2</f></c>"#));
    }

    #[test]
    fn test_xml_escaping() {
        let mut wb = Workbook::new();
        wb.add_worksheet("Data").unwrap();
        let sheet = wb.worksheet_mut(0).unwrap();
        sheet.set_cell_value("A1", "a<b&\"c\"").unwrap();
        sheet
            .set_cell_formula("B1", "=IF(A1=\"Unpaid\",1,0)")
            .unwrap();

        let parts = write_to_parts(&wb);
        let xml = part(&parts, "xl/worksheets/sheet1.xml");

        assert!(xml.contains("a&lt;b&amp;&quot;c&quot;"));
        assert!(xml.contains("IF(A1=&quot;Unpaid&quot;,1,0)"));
    }

    #[test]
    fn test_dimensions_and_merges() {
        let mut wb = Workbook::new();
        wb.add_worksheet("Layout").unwrap();
        let sheet = wb.worksheet_mut(0).unwrap();
        sheet.set_cell_value("A1", "TITLE").unwrap();
        sheet.set_row_height(0, 30.0);
        sheet.set_column_width(0, 25.0);
        sheet.set_column_width(4, 18.0);
        sheet.merge_cells(&CellRange::parse("A1:E1").unwrap()).unwrap();

        let parts = write_to_parts(&wb);
        let xml = part(&parts, "xl/worksheets/sheet1.xml");

        assert!(xml.contains(r#"<col min="1" max="1" width="25" customWidth="1"/>"#));
        assert!(xml.contains(r#"<col min="5" max="5" width="18" customWidth="1"/>"#));
        assert!(xml.contains(r#"<row r="1" ht="30" customHeight="1">"#));
        assert!(xml.contains(r#"<mergeCells count="1">"#));
        assert!(xml.contains(r#"<mergeCell ref="A1:E1"/>"#));
    }

    #[test]
    fn test_style_only_cells_survive() {
        let mut wb = Workbook::new();
        wb.add_worksheet("Grid").unwrap();
        let sheet = wb.worksheet_mut(0).unwrap();
        sheet
            .set_cell_style("B4", &Style::new().number_format("$#,##0.00"))
            .unwrap();

        let parts = write_to_parts(&wb);
        let xml = part(&parts, "xl/worksheets/sheet1.xml");

        assert!(xml.contains(r#"<c r="B4" s="1" />"#));
    }
}
