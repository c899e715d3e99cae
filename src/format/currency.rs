//! Brazilian Real display formatting.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats a value as Brazilian Real, e.g. `1234.5` → `"R$ 1.234,50"`.
///
/// The value is rounded half away from zero to two places. Negative values
/// carry the sign before the symbol (`"-R$ 1,00"`).
///
/// # Examples
///
/// ```
/// use folha_engine::format::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::new(12345, 1)), "R$ 1.234,50");
/// assert_eq!(format_currency(Decimal::ZERO), "R$ 0,00");
/// ```
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };

    let text = format!("{:.2}", rounded.abs());
    let (integer, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    format!("{}R$ {},{}", sign, group_thousands(integer), cents)
}

/// Formats a fractional rate as a Brazilian percentage without the `%` sign.
///
/// `0.075` → `"7,5"`, `0.15` → `"15"`.
pub fn format_rate(rate: Decimal) -> String {
    (rate * Decimal::ONE_HUNDRED)
        .normalize()
        .to_string()
        .replace('.', ",")
}

/// Inserts `.` between every group of three digits, counting from the right.
pub(crate) fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    grouped
}
