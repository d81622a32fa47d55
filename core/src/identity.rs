//! Identity-shaped field generation: emails, phone numbers, SSN-like ids,
//! card and account numbers, street addresses, IP addresses.
//!
//! All generation is deterministic (same RNG stream = same values).

use crate::reference::{EMAIL_DOMAINS, STREET_NAMES};
use crate::rng::StageRng;

pub struct Identity;

impl Identity {
    /// `first.last{id % 1000}@{domain}` — the id suffix keeps addresses
    /// unique-ish despite the small name vocabularies.
    pub fn email(first: &str, last: &str, customer_id: u64, rng: &mut StageRng) -> String {
        let domain = *rng.pick(EMAIL_DOMAINS);
        format!(
            "{}.{}{}@{}",
            first.to_lowercase(),
            last.to_lowercase(),
            customer_id % 1000,
            domain
        )
    }

    /// US phone number: `+1` followed by ten digits.
    pub fn phone(rng: &mut StageRng) -> String {
        format!("+1{}", rng.int_in(2_000_000_000, 9_999_999_999))
    }

    /// SSN-like identifier, `ddd-dd-dddd`.
    pub fn ssn(rng: &mut StageRng) -> String {
        format!(
            "{}-{}-{}",
            rng.int_in(100, 999),
            rng.int_in(10, 99),
            rng.int_in(1000, 9999)
        )
    }

    /// 16-digit card number with a 4 (Visa) or 5 (Mastercard) prefix.
    pub fn card_number(rng: &mut StageRng) -> String {
        let mut number = String::with_capacity(16);
        number.push(if rng.chance(0.5) { '4' } else { '5' });
        for _ in 0..15 {
            number.push(char::from(b'0' + rng.int_in(0, 9) as u8));
        }
        number
    }

    /// Ten-digit account number.
    pub fn account_number(rng: &mut StageRng) -> String {
        format!("{}", rng.int_in(1_000_000_000, 9_999_999_999))
    }

    pub fn street_address(rng: &mut StageRng) -> String {
        let number = rng.int_in(100, 9999);
        let street = *rng.pick(STREET_NAMES);
        format!("{number} {street} St")
    }

    /// Dotted-quad IP with octets in [1, 255].
    pub fn ip_address(rng: &mut StageRng) -> String {
        format!(
            "{}.{}.{}.{}",
            rng.int_in(1, 255),
            rng.int_in(1, 255),
            rng.int_in(1, 255),
            rng.int_in(1, 255)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{RngBank, StageSlot};

    fn test_rng() -> StageRng {
        RngBank::new(12345).for_stage(StageSlot::Customer)
    }

    #[test]
    fn card_numbers_are_16_digits_with_valid_prefix() {
        let mut rng = test_rng();
        for _ in 0..200 {
            let number = Identity::card_number(&mut rng);
            assert_eq!(number.len(), 16);
            assert!(number.starts_with('4') || number.starts_with('5'), "{number}");
            assert!(number.chars().all(|c| c.is_ascii_digit()), "{number}");
        }
    }

    #[test]
    fn emails_embed_lowercased_names() {
        let mut rng = test_rng();
        let email = Identity::email("James", "Smith", 1042, &mut rng);
        assert!(email.starts_with("james.smith42@"), "{email}");
        assert!(EMAIL_DOMAINS.iter().any(|d| email.ends_with(d)), "{email}");
    }

    #[test]
    fn phone_numbers_have_country_code_and_ten_digits() {
        let mut rng = test_rng();
        for _ in 0..100 {
            let phone = Identity::phone(&mut rng);
            assert!(phone.starts_with("+1"));
            assert_eq!(phone.len(), 12, "{phone}");
        }
    }

    #[test]
    fn ssn_shape() {
        let mut rng = test_rng();
        for _ in 0..100 {
            let ssn = Identity::ssn(&mut rng);
            let parts: Vec<&str> = ssn.split('-').collect();
            assert_eq!(parts.len(), 3, "{ssn}");
            assert_eq!(parts[0].len(), 3);
            assert_eq!(parts[1].len(), 2);
            assert_eq!(parts[2].len(), 4);
        }
    }

    #[test]
    fn ip_octets_stay_in_range() {
        let mut rng = test_rng();
        for _ in 0..100 {
            let ip = Identity::ip_address(&mut rng);
            for octet in ip.split('.') {
                let v: u16 = octet.parse().unwrap();
                assert!((1..=255).contains(&v), "{ip}");
            }
        }
    }
}
