/// Base currency in which every package total and line item price is stored
pub const DEFAULT_CURRENCY: &str = "USD";

/// Decimal precision for display amounts
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
