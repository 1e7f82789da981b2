//! Form Validators
//!
//! Client-side validation rules. Failures are reported instantly and
//! block submission; nothing here triggers a network call.

use chrono::NaiveDate;

/// Plausibility check for an email address: one `@`, non-empty local
/// part, a dot somewhere in the domain, no whitespace.
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

/// Parse a monetary amount entered Brazilian-style (comma as the decimal
/// separator). Empty, non-numeric, zero and negative inputs are rejected.
pub fn parse_amount(value: &str) -> Option<f64> {
    let normalized = value.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    let amount: f64 = normalized.parse().ok()?;
    (amount.is_finite() && amount > 0.0).then_some(amount)
}

/// A phone number must carry 10 to 15 digits, mask literals aside
pub fn is_valid_phone(value: &str) -> bool {
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    (10..=15).contains(&digits)
}

/// CPF checksum validation. Strips formatting, rejects wrong lengths and
/// the all-same-digit sequences, then checks both verifier digits.
pub fn is_valid_cpf(value: &str) -> bool {
    let digits: Vec<u32> = value.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() != 11 {
        return false;
    }
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    let verifier = |count: usize| -> u32 {
        let sum: u32 = digits[..count]
            .iter()
            .enumerate()
            .map(|(i, &d)| d * (count as u32 + 1 - i as u32))
            .sum();
        let remainder = (sum * 10) % 11;
        if remainder >= 10 {
            0
        } else {
            remainder
        }
    };

    verifier(9) == digits[9] && verifier(10) == digits[10]
}

/// Parse a dd/mm/yyyy string into a calendar date
pub fn parse_br_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%d/%m/%Y").ok()
}

/// Normalize a dd/mm/yyyy string to ISO (YYYY-MM-DD)
pub fn to_iso_date(value: &str) -> Option<String> {
    parse_br_date(value).map(|date| date.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_accepts_plausible_addresses() {
        assert!(is_valid_email("joao@email.com"));
        assert!(is_valid_email("maria.santos@empresa.com.br"));
    }

    #[test]
    fn test_email_rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("joao"));
        assert!(!is_valid_email("joao@"));
        assert!(!is_valid_email("@email.com"));
        assert!(!is_valid_email("joao@email"));
        assert!(!is_valid_email("jo ao@email.com"));
        assert!(!is_valid_email("joao@@email.com"));
    }

    #[test]
    fn test_amount_accepts_comma_decimals() {
        assert_eq!(parse_amount("150,50"), Some(150.50));
        assert_eq!(parse_amount("1245.00"), Some(1245.0));
        assert_eq!(parse_amount(" 89,9 "), Some(89.9));
    }

    #[test]
    fn test_amount_rejects_zero_empty_and_garbage() {
        assert_eq!(parse_amount("0"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("   "), None);
        assert_eq!(parse_amount("-10"), None);
        assert_eq!(parse_amount("abc"), None);
    }

    #[test]
    fn test_phone_digit_count() {
        assert!(is_valid_phone("(11) 99999-8888"));
        assert!(is_valid_phone("1133334444"));
        assert!(!is_valid_phone("999"));
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("1234567890123456"));
    }

    #[test]
    fn test_cpf_accepts_valid_checksums() {
        // Well-known valid test CPFs
        assert!(is_valid_cpf("529.982.247-25"));
        assert!(is_valid_cpf("52998224725"));
    }

    #[test]
    fn test_cpf_rejects_bad_checksums_and_shapes() {
        assert!(!is_valid_cpf("529.982.247-26"));
        assert!(!is_valid_cpf("111.111.111-11"));
        assert!(!is_valid_cpf("123"));
        assert!(!is_valid_cpf(""));
    }

    #[test]
    fn test_date_normalization() {
        assert_eq!(to_iso_date("15/01/2024").as_deref(), Some("2024-01-15"));
        assert_eq!(to_iso_date("31/02/2024"), None);
        assert_eq!(to_iso_date("2024-01-15"), None);
    }
}
