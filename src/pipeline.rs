// End-to-end run: decode -> aggregate -> rank -> render -> write

use std::io::{Read, Write};

use tracing::{debug, info};

use crate::aggregator::{FleetTables, aggregate};
use crate::error::ReportError;
use crate::input::read_records;
use crate::models::ServerRecord;
use crate::report::{FleetReport, Renderer, render};

/// Ranked report for an in-memory record set.
pub fn build_report(records: &[ServerRecord]) -> FleetReport {
    let tables = aggregate(records);
    log_totals(&tables);
    FleetReport::from_tables(&tables)
}

/// Reads all input, then writes the full report. Nothing is written if decoding fails.
pub fn run<R, W>(
    input: R,
    output: &mut W,
    renderer: &dyn Renderer,
) -> Result<FleetReport, ReportError>
where
    R: Read,
    W: Write,
{
    let records = read_records(input)?;
    let report = build_report(&records);
    let text = render(&report, renderer);
    output.write_all(text.as_bytes())?;
    output.flush()?;
    info!(records = records.len(), "report written");
    Ok(report)
}

fn log_totals(tables: &FleetTables) {
    debug!(
        non_normal = tables.non_normal_by_location.total(),
        non_income = tables.non_income_by_location.total(),
        freeze_env = tables.freeze_env_by_location.total(),
        maintenance = tables.maintenance_by_location.total(),
        locations = tables.non_normal_by_location.len(),
        "aggregated tables"
    );
}
