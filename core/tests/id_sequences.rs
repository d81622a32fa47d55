//! Identifier properties: per file, ids are unique, 1-based, sequential
//! with no gaps, and directly-configured row counts are exact.

use bankgen_core::{config::GeneratorConfig, pipeline::Generator};
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

/// First column of every row, parsed as the entity id.
fn ids_of(path: &Path) -> Vec<u64> {
    let mut reader = csv::Reader::from_path(path).expect("open csv");
    reader
        .records()
        .map(|record| record.expect("row")[0].parse().expect("numeric id"))
        .collect()
}

fn assert_sequential(path: &Path, expected_count: Option<u64>) {
    let ids = ids_of(path);
    if let Some(n) = expected_count {
        assert_eq!(ids.len() as u64, n, "{} row count", path.display());
    }
    for (idx, id) in ids.iter().enumerate() {
        assert_eq!(*id, idx as u64 + 1, "{} id sequence", path.display());
    }
}

#[test]
fn ids_are_sequential_and_counts_exact() {
    let (dir, config) = generate_into("ids");

    assert_sequential(&dir.join("customers.csv"), Some(config.num_customers));
    assert_sequential(&dir.join("accounts.csv"), Some(config.num_accounts));
    assert_sequential(&dir.join("merchants.csv"), Some(config.num_merchants));
    assert_sequential(&dir.join("cards.csv"), Some(config.num_cards));
    assert_sequential(&dir.join("transactions.csv"), Some(config.num_transactions));
    assert_sequential(&dir.join("devices.csv"), Some(config.num_devices));
    assert_sequential(&dir.join("customer_segments.csv"), Some(6));
    assert_sequential(
        &dir.join("customer_lifetime_value.csv"),
        Some(config.num_customers),
    );
    // Derived counts vary per run; the sequences must still be gap-free.
    assert_sequential(&dir.join("alerts.csv"), None);
    assert_sequential(&dir.join("fraud_cases.csv"), None);
}

#[test]
fn customers_file_has_header_plus_one_line_per_row() {
    let (dir, config) = generate_into("ids-lines");
    let content = std::fs::read_to_string(dir.join("customers.csv")).expect("read");
    let lines = content.lines().count() as u64;
    assert_eq!(lines, config.num_customers + 1, "1 header + N rows");
    assert!(content.starts_with("customer_id,first_name,last_name,"));
}
