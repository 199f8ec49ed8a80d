//! Contact field validation.
//!
//! Email is a syntactic check only (no DNS or mailbox verification). Phone
//! numbers are parsed with the libphonenumber rules under the submitter's
//! country region.

use lazy_static::lazy_static;
use phonenumber::country;
use regex::Regex;

lazy_static! {
    // RFC 5322 simplified, anchored to the full string
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").unwrap();
}

/// Syntactic email check.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Parse `phone` under the submitter's country region and check validity.
///
/// An unknown or missing country falls back to default parsing rules, which
/// still accept internationally formatted numbers (`+380...`).
pub fn is_valid_phone(phone: &str, country: Option<&str>) -> bool {
    let region = country.and_then(|code| code.to_uppercase().parse::<country::Id>().ok());
    match phonenumber::parse(region, phone) {
        Ok(number) => phonenumber::is_valid(&number),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("olena@example.com"));
        assert!(is_valid_email("first.last+tag@sub.example.co.uk"));
        assert!(is_valid_email("UPPER@EXAMPLE.ORG"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("missing-at.example.com"));
        assert!(!is_valid_email("no-domain@"));
        assert!(!is_valid_email("no-tld@example"));
        assert!(!is_valid_email("spaces in@example.com"));
        assert!(!is_valid_email("trailing@example.com extra"));
    }

    #[test]
    fn test_international_phone_without_country() {
        assert!(is_valid_phone("+380501234567", None));
        assert!(is_valid_phone("+49 30 901820", None));
    }

    #[test]
    fn test_national_phone_with_country() {
        assert!(is_valid_phone("0501234567", Some("UA")));
        assert!(is_valid_phone("0501234567", Some("ua")));
    }

    #[test]
    fn test_invalid_phones() {
        assert!(!is_valid_phone("12345", Some("UA")));
        assert!(!is_valid_phone("not-a-phone", None));
        assert!(!is_valid_phone("", None));
    }

    #[test]
    fn test_unknown_country_falls_back_to_default_rules() {
        // "ZZ" is not a region; an international number still validates
        assert!(is_valid_phone("+380501234567", Some("ZZ")));
    }
}
