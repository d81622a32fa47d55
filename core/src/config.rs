use crate::error::{GenError, GenResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Run configuration: target row counts, fraud rate, output directory,
/// and the master RNG seed. All fields can be overridden from a JSON
/// file or from runner flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub num_customers: u64,
    pub num_accounts: u64,
    pub num_merchants: u64,
    pub num_cards: u64,
    pub num_transactions: u64,
    pub num_devices: u64,
    /// Probability that a transaction is marked fraudulent, in [0, 1].
    pub fraud_rate: f64,
    pub out_dir: PathBuf,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_customers: 100_000,
            num_accounts: 150_000,
            num_merchants: 50_000,
            num_cards: 200_000,
            num_transactions: 5_000_000,
            num_devices: 75_000,
            fraud_rate: 0.07,
            out_dir: PathBuf::from("data/csv"),
            seed: 42,
        }
    }
}

impl GeneratorConfig {
    /// Load overrides from a JSON file. Missing fields fall back to defaults.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: GeneratorConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Fail fast before any file is created.
    pub fn validate(&self) -> GenResult<()> {
        let counts = [
            ("num_customers", self.num_customers),
            ("num_accounts", self.num_accounts),
            ("num_merchants", self.num_merchants),
            ("num_cards", self.num_cards),
            ("num_transactions", self.num_transactions),
            ("num_devices", self.num_devices),
        ];
        for (label, count) in counts {
            if count == 0 {
                return Err(GenError::InvalidConfig(format!("{label} must be at least 1")));
            }
        }
        if !self.fraud_rate.is_finite() || !(0.0..=1.0).contains(&self.fraud_rate) {
            return Err(GenError::InvalidConfig(format!(
                "fraud_rate must be in [0, 1], got {}",
                self.fraud_rate
            )));
        }
        Ok(())
    }

    /// Small configuration for use in tests.
    pub fn default_test() -> Self {
        Self {
            num_customers: 200,
            num_accounts: 300,
            num_merchants: 50,
            num_cards: 400,
            num_transactions: 2_000,
            num_devices: 150,
            fraud_rate: 0.07,
            out_dir: PathBuf::from("data/csv"),
            seed: 42,
        }
    }
}
