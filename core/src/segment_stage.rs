//! Stage 9: customer_segments.csv — a fixed six-row reference table.
//! No randomness; the stage exists so the importer always finds the
//! segment ids that customer_lifetime_value.csv points at.

use crate::{
    error::GenResult,
    records::{IdPool, SegmentRow},
    writer::StageWriter,
};
use std::path::Path;

pub const FILE_NAME: &str = "customer_segments.csv";

/// (name, description, criteria, min_clv, max_clv).
pub const SEGMENTS: &[(&str, &str, &str, f64, f64)] = &[
    (
        "Platinum",
        "Top-tier customers with the highest lifetime value",
        "predicted_clv >= 50000",
        50_000.0,
        250_000.0,
    ),
    (
        "Gold",
        "High-value customers with strong engagement",
        "predicted_clv >= 20000 AND predicted_clv < 50000",
        20_000.0,
        50_000.0,
    ),
    (
        "Silver",
        "Mid-tier customers with steady activity",
        "predicted_clv >= 8000 AND predicted_clv < 20000",
        8_000.0,
        20_000.0,
    ),
    (
        "Bronze",
        "Entry-level customers with modest activity",
        "predicted_clv >= 2000 AND predicted_clv < 8000",
        2_000.0,
        8_000.0,
    ),
    (
        "New",
        "Recently onboarded customers without history",
        "tenure_days < 90",
        0.0,
        5_000.0,
    ),
    (
        "At Risk",
        "Customers showing churn or dormancy signals",
        "days_since_last_transaction > 180",
        0.0,
        3_000.0,
    ),
];

pub fn generate(out_dir: &Path) -> GenResult<IdPool> {
    let mut writer = StageWriter::create(out_dir, FILE_NAME, "customer_segments", 0)?;
    let mut pool = Vec::with_capacity(SEGMENTS.len());

    for (idx, (name, description, criteria, min_clv, max_clv)) in SEGMENTS.iter().enumerate() {
        let id = idx as u64 + 1;
        let row = SegmentRow {
            segment_id: id,
            segment_name: (*name).to_string(),
            description: (*description).to_string(),
            criteria: (*criteria).to_string(),
            min_clv: *min_clv,
            max_clv: *max_clv,
        };
        writer.write(&row)?;
        pool.push(id);
    }

    let rows = writer.finish()?;
    log::info!("[customer_segments] wrote {rows} rows to {FILE_NAME}");
    Ok(pool)
}
