//! Stage 5: transactions.csv — the largest and most field-rich stage.
//!
//! Fraud model: each transaction is independently fraudulent with
//! probability `fraud_rate`. Fraud score is drawn from [70, 100] when
//! fraudulent, else [0, 30]. Fraudulent amounts are the base amount
//! scaled by a uniform [2, 10] multiplier.

use crate::{
    config::GeneratorConfig,
    dates,
    error::GenResult,
    identity::Identity,
    records::{round2, IdPool, TransactionRow},
    reference::{self, Weighted},
    rng::StageRng,
    writer::StageWriter,
};
use std::path::Path;

pub const FILE_NAME: &str = "transactions.csv";
const PROGRESS_EVERY: u64 = 100_000;

const CARD_PRESENT_P: f64 = 0.6;
const MERCHANT_PRESENT_P: f64 = 0.75;
const DEVICE_PRESENT_P: f64 = 0.5;

/// Ids plus the fraudulent subset that alerts and fraud cases sample from.
pub struct TransactionOutput {
    pub ids: IdPool,
    pub fraudulent: IdPool,
}

/// Base amount range (inclusive low, exclusive high) per transaction type.
fn base_amount_range(transaction_type: &str) -> (f64, f64) {
    match transaction_type {
        "PURCHASE" | "PAYMENT" => (5.0, 5_000.0),
        "ATM_WITHDRAWAL" | "TRANSFER_OUT" => (20.0, 2_000.0),
        "WIRE_OUT" | "WIRE_IN" => (1_000.0, 50_000.0),
        _ => (10.0, 1_000.0),
    }
}

pub fn generate(
    config: &GeneratorConfig,
    rng: &mut StageRng,
    out_dir: &Path,
    accounts: &IdPool,
    cards: &IdPool,
    merchants: &IdPool,
) -> GenResult<TransactionOutput> {
    let mut writer = StageWriter::create(out_dir, FILE_NAME, "transactions", PROGRESS_EVERY)?;
    let mut ids = Vec::with_capacity(config.num_transactions as usize);
    let mut fraudulent = Vec::new();
    let status_table = Weighted::new(reference::TRANSACTION_STATUS_WEIGHTS);

    let ts_start = dates::midnight(2023, 1, 1);
    let ts_end = dates::midnight(2025, 1, 1);

    for id in 1..=config.num_transactions {
        let transaction_type = *rng.pick(reference::TRANSACTION_TYPES);
        let is_fraud = rng.chance(config.fraud_rate);

        let (lo, hi) = base_amount_range(transaction_type);
        let mut amount = rng.float_in(lo, hi);
        if is_fraud {
            amount *= rng.float_in(2.0, 10.0);
        }

        let fraud_score = if is_fraud {
            round2(rng.float_in(70.0, 100.0))
        } else {
            round2(rng.float_in(0.0, 30.0))
        };

        // Kept exactly as the upstream dataset defines it. The score arm
        // cannot fire under the ranges above, but the condition is part of
        // the schema contract and stays as written.
        let is_flagged = is_fraud || fraud_score > 60.0;
        let status = if is_flagged {
            "FLAGGED".to_string()
        } else {
            status_table.pick(rng).to_string()
        };

        let (city, state) = reference::city_state(rng);

        let row = TransactionRow {
            transaction_id: id,
            account_id: *rng.pick(accounts),
            card_id: rng.chance(CARD_PRESENT_P).then(|| *rng.pick(cards)),
            merchant_id: rng.chance(MERCHANT_PRESENT_P).then(|| *rng.pick(merchants)),
            transaction_type: transaction_type.to_string(),
            amount: round2(amount),
            currency: "USD".to_string(),
            transaction_date: dates::fmt_datetime(dates::datetime_between(rng, ts_start, ts_end)),
            status,
            is_fraud,
            fraud_score,
            ip_address: Identity::ip_address(rng),
            // Device ids are sequential from 1, so the range is knowable
            // before devices.csv is written in stage 8.
            device_id: rng
                .chance(DEVICE_PRESENT_P)
                .then(|| rng.int_in(1, config.num_devices)),
            location: format!("{city}, {state}"),
        };
        writer.write(&row)?;

        ids.push(id);
        if is_fraud {
            fraudulent.push(id);
        }
    }

    let rows = writer.finish()?;
    log::info!(
        "[transactions] wrote {rows} rows to {FILE_NAME} ({} fraudulent)",
        fraudulent.len()
    );
    Ok(TransactionOutput { ids, fraudulent })
}
