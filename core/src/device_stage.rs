//! Stage 8: devices.csv. The device count is its own configuration knob,
//! not derived from the customer count. Fingerprints are UUIDs built from
//! stage-RNG bytes so the file stays seed-reproducible.

use crate::{
    config::GeneratorConfig,
    dates,
    error::GenResult,
    records::{DeviceRow, IdPool},
    reference::{self, Weighted},
    rng::StageRng,
    writer::StageWriter,
};
use std::path::Path;

pub const FILE_NAME: &str = "devices.csv";
const PROGRESS_EVERY: u64 = 10_000;

pub fn generate(
    config: &GeneratorConfig,
    rng: &mut StageRng,
    out_dir: &Path,
    customers: &IdPool,
) -> GenResult<IdPool> {
    let mut writer = StageWriter::create(out_dir, FILE_NAME, "devices", PROGRESS_EVERY)?;
    let mut pool = Vec::with_capacity(config.num_devices as usize);
    let trusted_table = Weighted::new(reference::DEVICE_TRUSTED_WEIGHTS);

    let seen_start = dates::ymd(2020, 1, 1);
    let seen_end = dates::ymd(2024, 1, 1);
    let last_seen_end = dates::ymd(2025, 1, 1);

    for id in 1..=config.num_devices {
        let mut bytes = [0u8; 16];
        rng.fill_bytes(&mut bytes);
        let fingerprint = uuid::Builder::from_random_bytes(bytes).into_uuid();

        let first_seen = dates::date_between(rng, seen_start, seen_end);
        let row = DeviceRow {
            device_id: id,
            customer_id: *rng.pick(customers),
            device_fingerprint: fingerprint.to_string(),
            device_type: rng.pick(reference::DEVICE_TYPES).to_string(),
            os: rng.pick(reference::OPERATING_SYSTEMS).to_string(),
            browser: rng.pick(reference::BROWSERS).to_string(),
            first_seen: dates::fmt_date(first_seen),
            last_seen: dates::fmt_date(dates::date_between(rng, first_seen, last_seen_end)),
            is_trusted: trusted_table.pick(rng),
        };
        writer.write(&row)?;
        pool.push(id);
    }

    let rows = writer.finish()?;
    log::info!("[devices] wrote {rows} rows to {FILE_NAME}");
    Ok(pool)
}
