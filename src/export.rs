use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::models::{DailyTotal, PlanEntry};

/// Write the plan rows as CSV with the original dataset headers.
pub fn write_plan_csv<W: Write>(writer: W, plan: &[PlanEntry]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in plan {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the daily totals as CSV.
pub fn write_totals_csv<W: Write>(writer: W, totals: &[DailyTotal]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in totals {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the plan to a file path.
pub fn export_plan<P: AsRef<Path>>(path: P, plan: &[PlanEntry]) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_plan_csv(file, plan)
}
