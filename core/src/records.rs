//! Row schemas for the ten output files.
//!
//! Field order here IS the CSV column order the bulk importer expects.
//! Do not reorder fields; optional columns encode as empty values.

use serde::{Deserialize, Serialize};

/// Ordered sequence of the ids a stage generated, consumed by later stages.
pub type IdPool = Vec<u64>;

/// Round a monetary or score value to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRow {
    pub customer_id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub ssn: String,
    pub address_line1: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country_code: String,
    pub risk_score: f64,
    pub kyc_status: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRow {
    pub account_id: u64,
    pub customer_id: u64,
    pub account_number: String,
    pub account_type: String,
    pub currency: String,
    pub balance: f64,
    pub available_balance: f64,
    pub status: String,
    pub opened_date: String,
    pub closed_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MerchantRow {
    pub merchant_id: u64,
    pub merchant_name: String,
    pub category_id: u64,
    pub country_code: String,
    pub city: String,
    pub risk_rating: f64,
    pub is_active: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardRow {
    pub card_id: u64,
    pub account_id: u64,
    pub card_number: String,
    pub card_type: String,
    pub expiry_date: String,
    pub cvv: String,
    pub status: String,
    pub daily_limit: f64,
    pub issued_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRow {
    pub transaction_id: u64,
    pub account_id: u64,
    pub card_id: Option<u64>,
    pub merchant_id: Option<u64>,
    pub transaction_type: String,
    pub amount: f64,
    pub currency: String,
    pub transaction_date: String,
    pub status: String,
    pub is_fraud: bool,
    pub fraud_score: f64,
    pub ip_address: String,
    pub device_id: Option<u64>,
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertRow {
    pub alert_id: u64,
    pub transaction_id: u64,
    pub customer_id: u64,
    pub alert_type: String,
    pub severity: String,
    pub alert_date: String,
    pub status: String,
    pub assigned_to: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FraudCaseRow {
    pub case_id: u64,
    pub customer_id: u64,
    pub case_number: String,
    pub fraud_type_id: u64,
    pub status: String,
    pub loss_amount: f64,
    pub recovered_amount: f64,
    pub opened_date: String,
    pub closed_date: Option<String>,
    pub investigator: String,
    pub priority: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceRow {
    pub device_id: u64,
    pub customer_id: u64,
    pub device_fingerprint: String,
    pub device_type: String,
    pub os: String,
    pub browser: String,
    pub first_seen: String,
    pub last_seen: String,
    pub is_trusted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentRow {
    pub segment_id: u64,
    pub segment_name: String,
    pub description: String,
    pub criteria: String,
    pub min_clv: f64,
    pub max_clv: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifetimeValueRow {
    pub clv_id: u64,
    pub customer_id: u64,
    pub segment_id: u64,
    pub total_revenue: f64,
    pub transaction_count: u64,
    pub avg_transaction_value: f64,
    pub tenure_days: u64,
    pub predicted_clv: f64,
    pub calculated_at: String,
}
