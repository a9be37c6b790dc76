use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Converts a base-currency amount into a display currency at the given
/// rate, rounding half-up to two decimal places.
///
/// The same rule applies to package totals and per-line-item prices;
/// converted amounts are computed on read and never stored.
pub fn convert(amount: Decimal, rate: Decimal) -> Decimal {
    (amount * rate).round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

/// Variant for amounts that may be absent upstream; absent converts to zero.
pub fn convert_optional(amount: Option<Decimal>, rate: Decimal) -> Decimal {
    match amount {
        Some(value) => convert(value, rate),
        None => Decimal::ZERO,
    }
}
