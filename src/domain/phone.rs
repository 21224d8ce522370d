//! Calling-code catalogue and per-code phone length rules.

use std::ops::RangeInclusive;

/// A selectable calling code together with the accepted national digit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallingCode {
    pub code: &'static str,
    pub country: &'static str,
    pub flag: &'static str,
    pub min_digits: usize,
    pub max_digits: usize,
}

impl CallingCode {
    pub fn digits(&self) -> RangeInclusive<usize> {
        self.min_digits..=self.max_digits
    }

    pub fn display_label(&self) -> String {
        format!("{} {} ({})", self.flag, self.country, self.code)
    }
}

pub const DEFAULT_CALLING_CODE: &str = "+971";
pub const DEFAULT_MIN_DIGITS: usize = 7;
pub const DEFAULT_MAX_DIGITS: usize = 15;

pub static CALLING_CODES: &[CallingCode] = &[
    CallingCode { code: "+971", country: "United Arab Emirates", flag: "🇦🇪", min_digits: 8, max_digits: 9 },
    CallingCode { code: "+966", country: "Saudi Arabia", flag: "🇸🇦", min_digits: 9, max_digits: 9 },
    CallingCode { code: "+965", country: "Kuwait", flag: "🇰🇼", min_digits: 8, max_digits: 8 },
    CallingCode { code: "+974", country: "Qatar", flag: "🇶🇦", min_digits: 8, max_digits: 8 },
    CallingCode { code: "+973", country: "Bahrain", flag: "🇧🇭", min_digits: 8, max_digits: 8 },
    CallingCode { code: "+968", country: "Oman", flag: "🇴🇲", min_digits: 8, max_digits: 8 },
    CallingCode { code: "+1", country: "United States / Canada", flag: "🇺🇸", min_digits: 10, max_digits: 10 },
    CallingCode { code: "+44", country: "United Kingdom", flag: "🇬🇧", min_digits: 10, max_digits: 10 },
    CallingCode { code: "+91", country: "India", flag: "🇮🇳", min_digits: 10, max_digits: 10 },
    CallingCode { code: "+86", country: "China", flag: "🇨🇳", min_digits: 11, max_digits: 11 },
];

/// Accepted national digit range for a calling code, falling back to the
/// generic 7–15 range for codes outside the catalogue.
pub fn digit_range(code: &str) -> RangeInclusive<usize> {
    lookup(code)
        .map(|entry| entry.digits())
        .unwrap_or(DEFAULT_MIN_DIGITS..=DEFAULT_MAX_DIGITS)
}

pub fn lookup(code: &str) -> Option<&'static CallingCode> {
    let code = code.trim();
    CALLING_CODES.iter().find(|entry| entry.code == code)
}

/// Finds the catalogue code a full number starts with, preferring the longest.
pub fn detect(phone: &str) -> Option<&'static CallingCode> {
    let phone = phone.trim();
    CALLING_CODES
        .iter()
        .filter(|entry| phone.starts_with(entry.code))
        .max_by_key(|entry| entry.code.len())
}

/// A calling code is `+` followed by one to four digits.
pub fn is_valid_code(code: &str) -> bool {
    let Some(digits) = code.trim().strip_prefix('+') else {
        return false;
    };
    (1..=4).contains(&digits.len()) && digits.chars().all(|ch| ch.is_ascii_digit())
}

/// Replaces the calling-code prefix of `phone`, keeping the national part.
pub fn swap_prefix(phone: &str, old_code: &str, new_code: &str) -> String {
    let trimmed = phone.trim();
    let national = trimmed.strip_prefix(old_code).unwrap_or_else(|| {
        detect(trimmed)
            .and_then(|entry| trimmed.strip_prefix(entry.code))
            .unwrap_or(trimmed.trim_start_matches('+'))
    });
    format!("{}{}", new_code, national.trim_start())
}
