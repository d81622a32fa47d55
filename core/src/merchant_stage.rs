//! Stage 3: merchants.csv. No upstream dependencies.

use crate::{
    config::GeneratorConfig,
    dates,
    error::GenResult,
    records::{round2, IdPool, MerchantRow},
    reference::{self, Weighted},
    rng::StageRng,
    writer::StageWriter,
};
use std::path::Path;

pub const FILE_NAME: &str = "merchants.csv";
const PROGRESS_EVERY: u64 = 5_000;

pub fn generate(
    config: &GeneratorConfig,
    rng: &mut StageRng,
    out_dir: &Path,
) -> GenResult<IdPool> {
    let mut writer = StageWriter::create(out_dir, FILE_NAME, "merchants", PROGRESS_EVERY)?;
    let mut pool = Vec::with_capacity(config.num_merchants as usize);
    let active_table = Weighted::new(reference::MERCHANT_ACTIVE_WEIGHTS);

    let created_start = dates::midnight(2015, 1, 1);
    let created_end = dates::midnight(2024, 1, 1);

    for id in 1..=config.num_merchants {
        let (_mcc, label) = *rng.pick(reference::MERCHANT_CATEGORIES);
        let (city, _state) = reference::city_state(rng);
        let row = MerchantRow {
            merchant_id: id,
            merchant_name: format!("{label} #{id}"),
            // category_id keys into the importer's merchant_categories table.
            category_id: rng.int_in(1, 35),
            country_code: rng.pick(reference::COUNTRIES).to_string(),
            city: city.to_string(),
            risk_rating: round2(rng.float_in(1.0, 10.0)),
            is_active: active_table.pick(rng),
            created_at: dates::fmt_datetime(dates::datetime_between(
                rng,
                created_start,
                created_end,
            )),
        };
        writer.write(&row)?;
        pool.push(id);
    }

    let rows = writer.finish()?;
    log::info!("[merchants] wrote {rows} rows to {FILE_NAME}");
    Ok(pool)
}
