//! CSV export for production plans.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::plan::PlantOutput;

/// Column header for CSV plan export.
const HEADER: [&str; 2] = ["name", "p"];

/// Exports a production plan to a CSV file at the given path.
///
/// Writes a header row followed by one row per plant, in plan order.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(plan: &[PlantOutput], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(plan, buf)
}

/// Writes a production plan as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(plan: &[PlantOutput], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER)?;
    for output in plan {
        let p = format!("{:.1}", output.p);
        wtr.write_record([output.name.as_str(), p.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}
