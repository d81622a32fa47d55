//! Fixed reference vocabularies and the weighted-choice table.
//!
//! Every categorical field in the dataset is drawn from one of these
//! lists. CITIES and STATES are parallel: a city and its state must be
//! taken at the same index, never picked independently.

use crate::rng::StageRng;

pub const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "John", "Patricia", "Robert", "Jennifer", "Michael", "Linda",
    "William", "Barbara", "David", "Elizabeth", "Richard", "Susan", "Joseph", "Jessica",
    "Thomas", "Sarah", "Charles", "Karen", "Christopher", "Nancy", "Daniel", "Lisa",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
    "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas",
    "Taylor", "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White",
];

pub const CITIES: &[&str] = &[
    "New York", "Los Angeles", "Chicago", "Houston", "Phoenix", "Philadelphia", "San Antonio",
    "San Diego", "Dallas", "San Jose", "Austin", "Jacksonville", "Fort Worth", "Columbus",
    "Charlotte", "San Francisco", "Indianapolis", "Seattle", "Denver", "Boston",
];

/// Parallel to CITIES — same index, same metro area.
pub const STATES: &[&str] = &[
    "NY", "CA", "IL", "TX", "AZ", "PA", "TX", "CA", "TX", "CA", "TX", "FL", "TX", "OH",
    "NC", "CA", "IN", "WA", "CO", "MA",
];

pub const COUNTRIES: &[&str] = &["US", "CA", "GB", "DE", "FR", "AU", "JP", "CN", "IN", "BR"];

/// (MCC code, human label) pairs for merchant naming.
pub const MERCHANT_CATEGORIES: &[(&str, &str)] = &[
    ("5411", "Grocery Stores"),
    ("5812", "Restaurants"),
    ("5541", "Gas Stations"),
    ("5311", "Department Stores"),
    ("5912", "Pharmacies"),
    ("5999", "Miscellaneous Retail"),
    ("5732", "Electronics"),
    ("5651", "Clothing"),
    ("5814", "Fast Food"),
    ("5942", "Books"),
    ("7011", "Hotels"),
    ("7512", "Car Rental"),
];

pub const TRANSACTION_TYPES: &[&str] = &[
    "PURCHASE", "ATM_WITHDRAWAL", "TRANSFER_OUT", "TRANSFER_IN", "PAYMENT",
    "REFUND", "DEPOSIT", "WIRE_OUT", "WIRE_IN",
];

pub const FRAUD_TYPES: &[&str] = &[
    "CARD_STOLEN", "ACCOUNT_TAKEOVER", "IDENTITY_THEFT", "SYNTHETIC_IDENTITY",
    "CARD_NOT_PRESENT", "PHISHING", "ATM_SKIMMING", "WIRE_FRAUD",
];

pub const EMAIL_DOMAINS: &[&str] = &[
    "gmail.com", "yahoo.com", "hotmail.com", "outlook.com", "icloud.com",
];

pub const STREET_NAMES: &[&str] = &["Main", "Oak", "Maple", "Park"];

pub const KYC_STATUSES: &[&str] = &["VERIFIED", "PENDING", "REJECTED"];

pub const ACCOUNT_TYPES: &[&str] = &["CHECKING", "SAVINGS", "CREDIT"];

pub const CARD_TYPES: &[&str] = &["DEBIT", "CREDIT", "PREPAID"];

pub const DAILY_LIMITS: &[f64] = &[500.0, 1000.0, 2000.0, 5000.0, 10000.0];

pub const ALERT_TYPES: &[&str] = &[
    "FRAUD_SUSPECTED", "VELOCITY_CHECK", "LOCATION_MISMATCH",
    "HIGH_RISK_MERCHANT", "AMOUNT_ANOMALY",
];

pub const DEVICE_TYPES: &[&str] = &["MOBILE", "DESKTOP", "TABLET"];

pub const OPERATING_SYSTEMS: &[&str] = &["iOS", "Android", "Windows", "macOS", "Linux"];

pub const BROWSERS: &[&str] = &["Chrome", "Safari", "Firefox", "Edge", "Opera"];

// Weight tables. The upstream dataset biased these by repeating the
// favourable entry in a choice list; here the bias is an explicit
// value-to-weight mapping.

pub const ACCOUNT_STATUS_WEIGHTS: &[(&str, f64)] =
    &[("ACTIVE", 3.0), ("SUSPENDED", 1.0), ("CLOSED", 1.0)];

pub const CARD_STATUS_WEIGHTS: &[(&str, f64)] =
    &[("ACTIVE", 3.0), ("BLOCKED", 1.0), ("EXPIRED", 1.0)];

pub const MERCHANT_ACTIVE_WEIGHTS: &[(bool, f64)] = &[(true, 3.0), (false, 1.0)];

pub const TRANSACTION_STATUS_WEIGHTS: &[(&str, f64)] =
    &[("COMPLETED", 8.0), ("PENDING", 1.0), ("DECLINED", 1.0)];

pub const ALERT_SEVERITY_WEIGHTS: &[(&str, f64)] =
    &[("LOW", 1.0), ("MEDIUM", 2.0), ("HIGH", 2.0), ("CRITICAL", 1.0)];

pub const ALERT_STATUS_WEIGHTS: &[(&str, f64)] =
    &[("OPEN", 2.0), ("IN_REVIEW", 1.0), ("CLOSED", 1.0)];

pub const CASE_STATUS_WEIGHTS: &[(&str, f64)] = &[
    ("OPEN", 2.0),
    ("INVESTIGATING", 2.0),
    ("RESOLVED", 1.0),
    ("CLOSED", 1.0),
];

pub const CASE_PRIORITY_WEIGHTS: &[(&str, f64)] =
    &[("LOW", 1.0), ("MEDIUM", 2.0), ("HIGH", 2.0), ("URGENT", 1.0)];

pub const DEVICE_TRUSTED_WEIGHTS: &[(bool, f64)] = &[(true, 3.0), (false, 1.0)];

/// Discrete weighted choice over a static (value, weight) table.
/// The value type must be 'static because the table itself is.
pub struct Weighted<T: Copy + 'static> {
    entries: &'static [(T, f64)],
    total: f64,
}

impl<T: Copy + 'static> Weighted<T> {
    pub fn new(entries: &'static [(T, f64)]) -> Self {
        let total: f64 = entries.iter().map(|(_, w)| w).sum();
        assert!(total > 0.0, "weight table must have positive total weight");
        Self { entries, total }
    }

    pub fn pick(&self, rng: &mut StageRng) -> T {
        let roll = rng.next_f64() * self.total;
        let mut cumulative = 0.0;
        for (value, weight) in self.entries {
            cumulative += weight;
            if roll < cumulative {
                return *value;
            }
        }
        self.entries[self.entries.len() - 1].0
    }
}

/// Draw a matched (city, state) pair by shared index.
pub fn city_state(rng: &mut StageRng) -> (&'static str, &'static str) {
    let idx = rng.next_u64_below(CITIES.len() as u64) as usize;
    (CITIES[idx], STATES[idx])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{RngBank, StageSlot};

    #[test]
    fn cities_and_states_stay_parallel() {
        assert_eq!(CITIES.len(), STATES.len());
    }

    #[test]
    fn city_state_pairs_come_from_the_same_index() {
        let bank = RngBank::new(99);
        let mut rng = bank.for_stage(StageSlot::Customer);
        for _ in 0..200 {
            let (city, state) = city_state(&mut rng);
            let idx = CITIES.iter().position(|c| *c == city).unwrap();
            assert_eq!(STATES[idx], state, "mismatched pair for {city}");
        }
    }

    #[test]
    fn weighted_pick_respects_weights() {
        let table = Weighted::new(ACCOUNT_STATUS_WEIGHTS);
        let bank = RngBank::new(7);
        let mut rng = bank.for_stage(StageSlot::Account);
        let mut active = 0u32;
        let n = 20_000;
        for _ in 0..n {
            if table.pick(&mut rng) == "ACTIVE" {
                active += 1;
            }
        }
        // Expected 60%; binomial 3-sigma on 20k trials is ~1%.
        let share = f64::from(active) / f64::from(n);
        assert!((0.55..0.65).contains(&share), "ACTIVE share {share}");
    }

    #[test]
    fn weighted_tables_instantiate_over_every_value_type_in_use() {
        // Tables hold &'static str and bool; both must pick cleanly.
        let status = Weighted::new(CARD_STATUS_WEIGHTS);
        let trusted = Weighted::new(DEVICE_TRUSTED_WEIGHTS);
        let bank = RngBank::new(21);
        let mut rng = bank.for_stage(StageSlot::Device);
        let mut saw_trusted = false;
        let mut saw_untrusted = false;
        for _ in 0..500 {
            let s: &'static str = status.pick(&mut rng);
            assert!(!s.is_empty());
            match trusted.pick(&mut rng) {
                true => saw_trusted = true,
                false => saw_untrusted = true,
            }
        }
        assert!(saw_trusted && saw_untrusted, "both outcomes must occur");
    }

    #[test]
    fn weighted_pick_only_returns_table_values() {
        let table = Weighted::new(CASE_PRIORITY_WEIGHTS);
        let bank = RngBank::new(11);
        let mut rng = bank.for_stage(StageSlot::FraudCase);
        for _ in 0..1000 {
            let v = table.pick(&mut rng);
            assert!(CASE_PRIORITY_WEIGHTS.iter().any(|(value, _)| *value == v));
        }
    }
}
