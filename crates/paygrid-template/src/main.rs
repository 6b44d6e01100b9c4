//! paygrid - generates the personnel tracking workbook template

use anyhow::{Context, Result};

/// Output lands in the working directory; there is no other configuration.
const OUTPUT_FILE: &str = "Personnel_Tracking_Payroll.xlsx";

fn main() -> Result<()> {
    let workbook =
        paygrid_template::build_template().context("Failed to build the workbook template")?;

    paygrid_template::persist(&workbook, OUTPUT_FILE)
        .with_context(|| format!("Failed to write '{}'", OUTPUT_FILE))?;

    println!("Workbook template written to '{}'", OUTPUT_FILE);
    Ok(())
}
