//! Stage 10: customer_lifetime_value.csv — exactly one record per
//! customer, referencing a segment id from the stage 9 table.

use crate::{
    dates,
    error::GenResult,
    records::{round2, IdPool, LifetimeValueRow},
    rng::StageRng,
    writer::StageWriter,
};
use std::path::Path;

pub const FILE_NAME: &str = "customer_lifetime_value.csv";
const PROGRESS_EVERY: u64 = 10_000;

pub fn generate(
    rng: &mut StageRng,
    out_dir: &Path,
    customers: &IdPool,
    segments: &IdPool,
) -> GenResult<IdPool> {
    let mut writer =
        StageWriter::create(out_dir, FILE_NAME, "customer_lifetime_value", PROGRESS_EVERY)?;
    let mut pool = Vec::with_capacity(customers.len());

    let calc_start = dates::midnight(2024, 1, 1);
    let calc_end = dates::midnight(2025, 1, 1);
    let segment_count = segments.len() as u64;

    for (idx, &customer_id) in customers.iter().enumerate() {
        let id = idx as u64 + 1;
        let transaction_count = rng.int_in(10, 500);
        let avg_transaction_value = round2(rng.float_in(20.0, 500.0));
        let total_revenue = round2(avg_transaction_value * transaction_count as f64);
        let row = LifetimeValueRow {
            clv_id: id,
            customer_id,
            segment_id: rng.int_in(1, segment_count),
            total_revenue,
            transaction_count,
            avg_transaction_value,
            tenure_days: rng.int_in(30, 1825),
            predicted_clv: round2(total_revenue * rng.float_in(0.8, 2.5)),
            calculated_at: dates::fmt_datetime(dates::datetime_between(rng, calc_start, calc_end)),
        };
        writer.write(&row)?;
        pool.push(id);
    }

    let rows = writer.finish()?;
    log::info!("[customer_lifetime_value] wrote {rows} rows to {FILE_NAME}");
    Ok(pool)
}
