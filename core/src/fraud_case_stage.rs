//! Stage 7: fraud_cases.csv. Roughly one case is opened per ten
//! fraudulent transactions, sampled independently per transaction.

use crate::{
    dates,
    error::GenResult,
    records::{round2, FraudCaseRow, IdPool},
    reference::{self, Weighted},
    rng::StageRng,
    writer::StageWriter,
};
use std::path::Path;

pub const FILE_NAME: &str = "fraud_cases.csv";
const PROGRESS_EVERY: u64 = 5_000;

/// Probability a fraudulent transaction escalates into a case.
const CASE_P: f64 = 0.1;

const CLOSED_P: f64 = 0.5;

pub fn generate(
    rng: &mut StageRng,
    out_dir: &Path,
    fraudulent: &IdPool,
    customers: &IdPool,
) -> GenResult<IdPool> {
    let mut writer = StageWriter::create(out_dir, FILE_NAME, "fraud_cases", PROGRESS_EVERY)?;
    let mut pool = Vec::new();
    let status_table = Weighted::new(reference::CASE_STATUS_WEIGHTS);
    let priority_table = Weighted::new(reference::CASE_PRIORITY_WEIGHTS);

    let opened_start = dates::ymd(2023, 1, 1);
    let opened_end = dates::ymd(2024, 12, 31);

    for _ in fraudulent {
        if !rng.chance(CASE_P) {
            continue;
        }
        let id = pool.len() as u64 + 1;
        let opened = dates::date_between(rng, opened_start, opened_end);
        let loss_amount = round2(rng.float_in(100.0, 25_000.0));
        let row = FraudCaseRow {
            case_id: id,
            customer_id: *rng.pick(customers),
            case_number: format!("FC-{}-{:06}", opened.format("%Y"), id),
            fraud_type_id: rng.int_in(1, reference::FRAUD_TYPES.len() as u64),
            status: status_table.pick(rng).to_string(),
            loss_amount,
            recovered_amount: round2(loss_amount * rng.float_in(0.0, 1.0)),
            opened_date: dates::fmt_date(opened),
            closed_date: rng
                .chance(CLOSED_P)
                .then(|| dates::fmt_date(dates::date_between(rng, opened, opened_end))),
            investigator: rng.pick(reference::LAST_NAMES).to_string(),
            priority: priority_table.pick(rng).to_string(),
        };
        writer.write(&row)?;
        pool.push(id);
    }

    let rows = writer.finish()?;
    log::info!("[fraud_cases] wrote {rows} rows to {FILE_NAME}");
    Ok(pool)
}
