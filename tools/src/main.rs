//! gen-runner: headless CSV dataset generation runner.
//!
//! Usage:
//!   gen-runner --seed 42 --out-dir data/csv
//!   gen-runner --config overrides.json --transactions 1000000

use anyhow::Result;
use bankgen_core::{config::GeneratorConfig, pipeline::Generator};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut config = match str_arg(&args, "--config") {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    config.seed = parse_arg(&args, "--seed", config.seed);
    config.num_customers = parse_arg(&args, "--customers", config.num_customers);
    config.num_accounts = parse_arg(&args, "--accounts", config.num_accounts);
    config.num_merchants = parse_arg(&args, "--merchants", config.num_merchants);
    config.num_cards = parse_arg(&args, "--cards", config.num_cards);
    config.num_transactions = parse_arg(&args, "--transactions", config.num_transactions);
    config.num_devices = parse_arg(&args, "--devices", config.num_devices);
    config.fraud_rate = parse_arg(&args, "--fraud-rate", config.fraud_rate);
    if let Some(dir) = str_arg(&args, "--out-dir") {
        config.out_dir = dir.into();
    }

    println!("CSV Data Generation — Business Analytics Database");
    println!("  output dir:   {}", config.out_dir.display());
    println!("  seed:         {}", config.seed);
    println!("  customers:    {}", config.num_customers);
    println!("  accounts:     {}", config.num_accounts);
    println!("  merchants:    {}", config.num_merchants);
    println!("  cards:        {}", config.num_cards);
    println!("  transactions: {}", config.num_transactions);
    println!("  devices:      {}", config.num_devices);
    println!("  fraud rate:   {}%", config.fraud_rate * 100.0);
    println!();

    let generator = Generator::new(config)?;
    let summary = generator.run()?;

    println!("=== RUN SUMMARY ===");
    println!("  customers:        {}", summary.customers);
    println!("  accounts:         {}", summary.accounts);
    println!("  merchants:        {}", summary.merchants);
    println!("  cards:            {}", summary.cards);
    println!("  transactions:     {}", summary.transactions);
    println!("    fraudulent:     {}", summary.fraudulent_transactions);
    println!("  alerts:           {}", summary.alerts);
    println!("  fraud cases:      {}", summary.fraud_cases);
    println!("  devices:          {}", summary.devices);
    println!("  segments:         {}", summary.segments);
    println!("  clv records:      {}", summary.clv_records);

    Ok(())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn str_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
