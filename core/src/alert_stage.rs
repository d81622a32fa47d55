//! Stage 6: alerts.csv. An alert is raised for ~70% of fraudulent
//! transactions, sampled independently, so the row count varies per run.

use crate::{
    dates,
    error::GenResult,
    records::{AlertRow, IdPool},
    reference::{self, Weighted},
    rng::StageRng,
    writer::StageWriter,
};
use std::path::Path;

pub const FILE_NAME: &str = "alerts.csv";
const PROGRESS_EVERY: u64 = 10_000;

/// Probability a fraudulent transaction raises an alert.
const ALERT_P: f64 = 0.7;

const ASSIGNEE_P: f64 = 0.6;

pub fn generate(
    rng: &mut StageRng,
    out_dir: &Path,
    fraudulent: &IdPool,
    customers: &IdPool,
) -> GenResult<IdPool> {
    let mut writer = StageWriter::create(out_dir, FILE_NAME, "alerts", PROGRESS_EVERY)?;
    let mut pool = Vec::new();
    let severity_table = Weighted::new(reference::ALERT_SEVERITY_WEIGHTS);
    let status_table = Weighted::new(reference::ALERT_STATUS_WEIGHTS);

    let date_start = dates::midnight(2023, 1, 1);
    let date_end = dates::midnight(2025, 1, 1);

    for &transaction_id in fraudulent {
        if !rng.chance(ALERT_P) {
            continue;
        }
        let id = pool.len() as u64 + 1;
        let row = AlertRow {
            alert_id: id,
            transaction_id,
            customer_id: *rng.pick(customers),
            alert_type: rng.pick(reference::ALERT_TYPES).to_string(),
            severity: severity_table.pick(rng).to_string(),
            alert_date: dates::fmt_datetime(dates::datetime_between(rng, date_start, date_end)),
            status: status_table.pick(rng).to_string(),
            assigned_to: rng
                .chance(ASSIGNEE_P)
                .then(|| format!("analyst{}", rng.int_in(1, 20))),
        };
        writer.write(&row)?;
        pool.push(id);
    }

    let rows = writer.finish()?;
    log::info!("[alerts] wrote {rows} rows to {FILE_NAME}");
    Ok(pool)
}
