//! Common rounding and formatting helpers for quote calculations.
//!
//! All rounding is midpoint-away-from-zero, which for the non-negative
//! amounts a quote produces is the same as rounding half up.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a value to the nearest multiple of `step`.
///
/// `step` must be positive. The result is normalized, so `3500.0` comes back
/// as `3500`. Returns `None` if the intermediate quotient or product
/// overflows.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use quote_core::calculations::common::round_to_step;
///
/// assert_eq!(round_to_step(dec!(4412.49), dec!(25)), Some(dec!(4400)));
/// assert_eq!(round_to_step(dec!(4412.50), dec!(25)), Some(dec!(4425)));
/// assert_eq!(round_to_step(dec!(8.824), dec!(0.05)), Some(dec!(8.80)));
/// assert_eq!(round_to_step(Decimal::MAX, dec!(0.05)), None);
/// ```
pub fn round_to_step(
    value: Decimal,
    step: Decimal,
) -> Option<Decimal> {
    let steps = value
        .checked_div(step)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    Some(steps.checked_mul(step)?.normalize())
}

/// Rounds a value to whole dollars.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::calculations::common::round_whole_dollars;
///
/// assert_eq!(round_whole_dollars(dec!(1512.5)), dec!(1513));
/// assert_eq!(round_whole_dollars(dec!(1512.49)), dec!(1512));
/// ```
pub fn round_whole_dollars(value: Decimal) -> Decimal {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}

/// Formats a dollar amount with en-US thousands grouping and no cents.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::calculations::common::format_usd;
///
/// assert_eq!(format_usd(dec!(3500)), "$3,500");
/// assert_eq!(format_usd(dec!(1234567.6)), "$1,234,568");
/// assert_eq!(format_usd(dec!(-25)), "-$25");
/// ```
pub fn format_usd(value: Decimal) -> String {
    let rounded = round_whole_dollars(value);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Formats a range as `$min – $max`.
pub fn format_usd_range(
    min: Decimal,
    max: Decimal,
) -> String {
    format!("{} \u{2013} {}", format_usd(min), format_usd(max))
}
