//! The generation pipeline: ten sequential stages in dependency order.
//!
//! Control flow is strictly linear. Each stage opens its file, writes
//! every row, and flushes before the next stage starts; the only shared
//! state is the id pools threaded between stage calls. Interrupting the
//! run leaves the current file incomplete and later files absent —
//! there is no resumption, the remedy is a rerun.

use crate::{
    account_stage, alert_stage, card_stage, clv_stage,
    config::GeneratorConfig,
    customer_stage, device_stage,
    error::{GenError, GenResult},
    fraud_case_stage, merchant_stage,
    rng::{RngBank, StageSlot},
    segment_stage, transaction_stage,
};

pub struct Generator {
    config: GeneratorConfig,
    bank: RngBank,
}

/// Per-file row counts for the operator summary.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub customers: u64,
    pub accounts: u64,
    pub merchants: u64,
    pub cards: u64,
    pub transactions: u64,
    pub fraudulent_transactions: u64,
    pub alerts: u64,
    pub fraud_cases: u64,
    pub devices: u64,
    pub segments: u64,
    pub clv_records: u64,
}

impl Generator {
    /// Validates the configuration up front; no file is touched on error.
    pub fn new(config: GeneratorConfig) -> GenResult<Self> {
        config.validate()?;
        let bank = RngBank::new(config.seed);
        Ok(Self { config, bank })
    }

    pub fn run(&self) -> GenResult<RunSummary> {
        let out_dir = self.config.out_dir.as_path();
        std::fs::create_dir_all(out_dir).map_err(|source| GenError::OutputDir {
            path: out_dir.to_path_buf(),
            source,
        })?;

        log::info!("[1/10] generating customers...");
        let mut rng = self.bank.for_stage(StageSlot::Customer);
        let customers = customer_stage::generate(&self.config, &mut rng, out_dir)?;

        log::info!("[2/10] generating accounts...");
        let mut rng = self.bank.for_stage(StageSlot::Account);
        let accounts = account_stage::generate(&self.config, &mut rng, out_dir, &customers)?;

        log::info!("[3/10] generating merchants...");
        let mut rng = self.bank.for_stage(StageSlot::Merchant);
        let merchants = merchant_stage::generate(&self.config, &mut rng, out_dir)?;

        log::info!("[4/10] generating cards...");
        let mut rng = self.bank.for_stage(StageSlot::Card);
        let cards = card_stage::generate(&self.config, &mut rng, out_dir, &accounts)?;

        log::info!("[5/10] generating transactions...");
        let mut rng = self.bank.for_stage(StageSlot::Transaction);
        let transactions = transaction_stage::generate(
            &self.config,
            &mut rng,
            out_dir,
            &accounts,
            &cards,
            &merchants,
        )?;

        log::info!("[6/10] generating alerts...");
        let mut rng = self.bank.for_stage(StageSlot::Alert);
        let alerts =
            alert_stage::generate(&mut rng, out_dir, &transactions.fraudulent, &customers)?;

        log::info!("[7/10] generating fraud cases...");
        let mut rng = self.bank.for_stage(StageSlot::FraudCase);
        let fraud_cases =
            fraud_case_stage::generate(&mut rng, out_dir, &transactions.fraudulent, &customers)?;

        log::info!("[8/10] generating devices...");
        let mut rng = self.bank.for_stage(StageSlot::Device);
        let devices = device_stage::generate(&self.config, &mut rng, out_dir, &customers)?;

        log::info!("[9/10] generating customer segments...");
        let segments = segment_stage::generate(out_dir)?;

        log::info!("[10/10] generating customer lifetime value...");
        let mut rng = self.bank.for_stage(StageSlot::LifetimeValue);
        let clv_records = clv_stage::generate(&mut rng, out_dir, &customers, &segments)?;

        Ok(RunSummary {
            customers: customers.len() as u64,
            accounts: accounts.len() as u64,
            merchants: merchants.len() as u64,
            cards: cards.len() as u64,
            transactions: transactions.ids.len() as u64,
            fraudulent_transactions: transactions.fraudulent.len() as u64,
            alerts: alerts.len() as u64,
            fraud_cases: fraud_cases.len() as u64,
            devices: devices.len() as u64,
            segments: segments.len() as u64,
            clv_records: clv_records.len() as u64,
        })
    }
}
