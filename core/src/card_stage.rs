//! Stage 4: cards.csv. Every card references an account from stage 2.

use crate::{
    config::GeneratorConfig,
    dates,
    error::GenResult,
    identity::Identity,
    records::{CardRow, IdPool},
    reference::{self, Weighted},
    rng::StageRng,
    writer::StageWriter,
};
use std::path::Path;

pub const FILE_NAME: &str = "cards.csv";
const PROGRESS_EVERY: u64 = 20_000;

pub fn generate(
    config: &GeneratorConfig,
    rng: &mut StageRng,
    out_dir: &Path,
    accounts: &IdPool,
) -> GenResult<IdPool> {
    let mut writer = StageWriter::create(out_dir, FILE_NAME, "cards", PROGRESS_EVERY)?;
    let mut pool = Vec::with_capacity(config.num_cards as usize);
    let status_table = Weighted::new(reference::CARD_STATUS_WEIGHTS);

    let expiry_start = dates::ymd(2025, 1, 1);
    let expiry_end = dates::ymd(2030, 12, 31);
    let issued_start = dates::ymd(2020, 1, 1);
    let issued_end = dates::ymd(2024, 1, 1);

    for id in 1..=config.num_cards {
        let row = CardRow {
            card_id: id,
            account_id: *rng.pick(accounts),
            card_number: Identity::card_number(rng),
            card_type: rng.pick(reference::CARD_TYPES).to_string(),
            expiry_date: dates::fmt_date(dates::date_between(rng, expiry_start, expiry_end)),
            cvv: format!("{}", rng.int_in(100, 999)),
            status: status_table.pick(rng).to_string(),
            daily_limit: *rng.pick(reference::DAILY_LIMITS),
            issued_date: dates::fmt_date(dates::date_between(rng, issued_start, issued_end)),
        };
        writer.write(&row)?;
        pool.push(id);
    }

    let rows = writer.finish()?;
    log::info!("[cards] wrote {rows} rows to {FILE_NAME}");
    Ok(pool)
}
