//! Parsing and masking of Brazilian-formatted numeric text.
//!
//! Form fields carry values like `"1.234,56"`: `.` groups thousands and `,`
//! separates the decimals. Anything that cannot be read as a number is
//! treated as zero so the engine always receives a value.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::currency::group_thousands;

/// Parses Brazilian-formatted numeric text.
///
/// Empty and malformed input both yield zero.
///
/// # Examples
///
/// ```
/// use folha_engine::format::parse_input;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_input("1.234,56"), Decimal::new(123456, 2));
/// assert_eq!(parse_input(""), Decimal::ZERO);
/// assert_eq!(parse_input("abc"), Decimal::ZERO);
/// ```
pub fn parse_input(text: &str) -> Decimal {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }

    let canonical = trimmed.replace('.', "").replacen(',', ".", 1);
    Decimal::from_str(&canonical).unwrap_or(Decimal::ZERO)
}

/// Applies the as-you-type currency mask to raw field text.
///
/// Non-digits are dropped, the last two digits become the cents and the
/// integer part is grouped in thousands. Fewer than three digits are
/// returned as typed.
///
/// # Examples
///
/// ```
/// use folha_engine::format::format_currency_input;
///
/// assert_eq!(format_currency_input("123456"), "1.234,56");
/// assert_eq!(format_currency_input("R$ 1.234,5"), "123,45");
/// assert_eq!(format_currency_input("12"), "12");
/// ```
pub fn format_currency_input(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < 3 {
        return digits;
    }

    let (integer, cents) = digits.split_at(digits.len() - 2);
    format!("{},{}", group_thousands(integer), cents)
}
