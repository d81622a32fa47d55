//! Referential integrity: every foreign-key-like column must point at an
//! id that exists in the referenced file.

use bankgen_core::{
    config::GeneratorConfig,
    pipeline::Generator,
    records::{
        AccountRow, AlertRow, CardRow, CustomerRow, DeviceRow, FraudCaseRow, LifetimeValueRow,
        TransactionRow,
    },
};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

fn generate_into(dir_name: &str) -> (PathBuf, GeneratorConfig) {
    let out_dir = std::env::temp_dir().join(format!("bankgen-{dir_name}"));
    let _ = std::fs::remove_dir_all(&out_dir);
    let mut config = GeneratorConfig::default_test();
    config.out_dir = out_dir.clone();
    let generator = Generator::new(config.clone()).expect("valid config");
    generator.run().expect("generation run");
    (out_dir, config)
}

fn rows<R: DeserializeOwned>(path: &Path) -> Vec<R> {
    let mut reader = csv::Reader::from_path(path).expect("open csv");
    reader
        .deserialize()
        .map(|row| row.expect("deserialize row"))
        .collect()
}

#[test]
fn every_reference_resolves() {
    let (dir, config) = generate_into("refint");

    let customers: HashSet<u64> = rows::<CustomerRow>(&dir.join("customers.csv"))
        .iter()
        .map(|c| c.customer_id)
        .collect();
    let accounts: Vec<AccountRow> = rows(&dir.join("accounts.csv"));
    let account_ids: HashSet<u64> = accounts.iter().map(|a| a.account_id).collect();
    let cards: Vec<CardRow> = rows(&dir.join("cards.csv"));
    let card_ids: HashSet<u64> = cards.iter().map(|c| c.card_id).collect();
    let merchant_ids: HashSet<u64> = {
        let mut reader = csv::Reader::from_path(dir.join("merchants.csv")).expect("open csv");
        reader
            .records()
            .map(|r| r.expect("row")[0].parse().expect("id"))
            .collect()
    };
    let transactions: Vec<TransactionRow> = rows(&dir.join("transactions.csv"));

    for account in &accounts {
        assert!(customers.contains(&account.customer_id));
    }
    for card in &cards {
        assert!(account_ids.contains(&card.account_id));
    }
    for txn in &transactions {
        assert!(account_ids.contains(&txn.account_id));
        if let Some(card_id) = txn.card_id {
            assert!(card_ids.contains(&card_id));
        }
        if let Some(merchant_id) = txn.merchant_id {
            assert!(merchant_ids.contains(&merchant_id));
        }
        if let Some(device_id) = txn.device_id {
            assert!(
                (1..=config.num_devices).contains(&device_id),
                "device_id {device_id} outside the generated device range"
            );
        }
    }

    let fraudulent: HashSet<u64> = transactions
        .iter()
        .filter(|t| t.is_fraud)
        .map(|t| t.transaction_id)
        .collect();
    for alert in rows::<AlertRow>(&dir.join("alerts.csv")) {
        assert!(
            fraudulent.contains(&alert.transaction_id),
            "alert {} points at a non-fraudulent transaction",
            alert.alert_id
        );
        assert!(customers.contains(&alert.customer_id));
    }

    for case in rows::<FraudCaseRow>(&dir.join("fraud_cases.csv")) {
        assert!(customers.contains(&case.customer_id));
        assert!((1..=8).contains(&case.fraud_type_id));
        assert!(case.recovered_amount <= case.loss_amount);
    }

    for device in rows::<DeviceRow>(&dir.join("devices.csv")) {
        assert!(customers.contains(&device.customer_id));
        assert!(device.first_seen <= device.last_seen);
    }
}

#[test]
fn clv_is_one_to_one_with_customers() {
    let (dir, config) = generate_into("refint-clv");
    let clv: Vec<LifetimeValueRow> = rows(&dir.join("customer_lifetime_value.csv"));

    assert_eq!(clv.len() as u64, config.num_customers);
    let mut seen = HashSet::new();
    for record in &clv {
        assert!(
            seen.insert(record.customer_id),
            "customer {} has more than one CLV record",
            record.customer_id
        );
        assert!((1..=6).contains(&record.segment_id));
        let expected = record.avg_transaction_value * record.transaction_count as f64;
        assert!(
            (record.total_revenue - expected).abs() < 0.01,
            "total_revenue {} != avg * count {}",
            record.total_revenue,
            expected
        );
    }
    assert_eq!(seen.len() as u64, config.num_customers);
}
