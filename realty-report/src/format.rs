//! Display formatting for amounts.

use realty_core::calculations::common::round_half_up;
use rust_decimal::Decimal;

/// Formats `value` with comma thousands separators and exactly two decimals.
///
/// Rounding is half away from zero, matching
/// [`round_half_up`](realty_core::calculations::common::round_half_up).
///
/// ```
/// use rust_decimal_macros::dec;
/// use realty_report::format::format_amount;
///
/// assert_eq!(format_amount(dec!(3333.3333)), "3,333.33");
/// assert_eq!(format_amount(dec!(1234567.895)), "1,234,567.90");
/// assert_eq!(format_amount(dec!(0)), "0.00");
/// ```
pub fn format_amount(value: Decimal) -> String {
    let rounded = round_half_up(value);
    // Avoid printing "-0.00" for tiny negatives that round to zero.
    let rounded = if rounded.is_zero() { Decimal::ZERO } else { rounded };

    let plain = format!("{:.2}", rounded.abs());
    let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(plain.len() + integer.len() / 3 + 1);
    if rounded.is_sign_negative() {
        grouped.push('-');
    }
    for (idx, digit) in integer.chars().enumerate() {
        if idx > 0 && (integer.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push('.');
    grouped.push_str(fraction);
    grouped
}

/// Truncates `text` to at most `max_chars` characters. Never wraps.
pub fn truncate_chars(
    text: &str,
    max_chars: usize,
) -> String {
    text.chars().take(max_chars).collect()
}
