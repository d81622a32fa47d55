//! Stage 2: accounts.csv. Every account references a customer from the
//! pool produced by stage 1.

use crate::{
    config::GeneratorConfig,
    dates,
    error::GenResult,
    identity::Identity,
    records::{round2, AccountRow, IdPool},
    reference::{self, Weighted},
    rng::StageRng,
    writer::StageWriter,
};
use std::path::Path;

pub const FILE_NAME: &str = "accounts.csv";
const PROGRESS_EVERY: u64 = 10_000;

/// Probability an account carries a closed date. Independent of status:
/// the upstream dataset allows a CLOSED account with no closed date and
/// an ACTIVE one with a closed date, and that behaviour is kept.
const CLOSED_DATE_P: f64 = 0.05;

pub fn generate(
    config: &GeneratorConfig,
    rng: &mut StageRng,
    out_dir: &Path,
    customers: &IdPool,
) -> GenResult<IdPool> {
    let mut writer = StageWriter::create(out_dir, FILE_NAME, "accounts", PROGRESS_EVERY)?;
    let mut pool = Vec::with_capacity(config.num_accounts as usize);
    let status_table = Weighted::new(reference::ACCOUNT_STATUS_WEIGHTS);

    let opened_start = dates::ymd(2020, 1, 1);
    let opened_end = dates::ymd(2024, 1, 1);
    let closed_start = dates::ymd(2023, 1, 1);
    let closed_end = dates::ymd(2024, 12, 31);

    for id in 1..=config.num_accounts {
        let balance = round2(rng.float_in(100.0, 50_000.0));
        let row = AccountRow {
            account_id: id,
            customer_id: *rng.pick(customers),
            account_number: Identity::account_number(rng),
            account_type: rng.pick(reference::ACCOUNT_TYPES).to_string(),
            currency: "USD".to_string(),
            balance,
            available_balance: round2(balance * rng.float_in(0.8, 1.0)),
            status: status_table.pick(rng).to_string(),
            opened_date: dates::fmt_date(dates::date_between(rng, opened_start, opened_end)),
            closed_date: if rng.chance(CLOSED_DATE_P) {
                Some(dates::fmt_date(dates::date_between(
                    rng,
                    closed_start,
                    closed_end,
                )))
            } else {
                None
            },
        };
        writer.write(&row)?;
        pool.push(id);
    }

    let rows = writer.finish()?;
    log::info!("[accounts] wrote {rows} rows to {FILE_NAME}");
    Ok(pool)
}
