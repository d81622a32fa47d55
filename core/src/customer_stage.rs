//! Stage 1: customers.csv. No upstream dependencies; every later stage
//! that names a customer draws from the pool this stage returns.

use crate::{
    config::GeneratorConfig,
    dates,
    error::GenResult,
    identity::Identity,
    records::{round2, CustomerRow, IdPool},
    reference,
    rng::StageRng,
    writer::StageWriter,
};
use std::path::Path;

pub const FILE_NAME: &str = "customers.csv";
const PROGRESS_EVERY: u64 = 10_000;

pub fn generate(
    config: &GeneratorConfig,
    rng: &mut StageRng,
    out_dir: &Path,
) -> GenResult<IdPool> {
    let mut writer = StageWriter::create(out_dir, FILE_NAME, "customers", PROGRESS_EVERY)?;
    let mut pool = Vec::with_capacity(config.num_customers as usize);

    let dob_start = dates::ymd(1950, 1, 1);
    let dob_end = dates::ymd(2005, 12, 31);
    let created_start = dates::midnight(2020, 1, 1);
    let created_end = dates::midnight(2024, 1, 1);

    for id in 1..=config.num_customers {
        let first = *rng.pick(reference::FIRST_NAMES);
        let last = *rng.pick(reference::LAST_NAMES);
        let (city, state) = reference::city_state(rng);

        let row = CustomerRow {
            customer_id: id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: Identity::email(first, last, id, rng),
            phone: Identity::phone(rng),
            date_of_birth: dates::fmt_date(dates::date_between(rng, dob_start, dob_end)),
            ssn: Identity::ssn(rng),
            address_line1: Identity::street_address(rng),
            city: city.to_string(),
            state: state.to_string(),
            postal_code: format!("{}", rng.int_in(10_000, 99_999)),
            country_code: rng.pick(reference::COUNTRIES).to_string(),
            risk_score: round2(rng.float_in(0.0, 100.0)),
            kyc_status: rng.pick(reference::KYC_STATUSES).to_string(),
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
    log::info!("[customers] wrote {rows} rows to {FILE_NAME}");
    Ok(pool)
}
