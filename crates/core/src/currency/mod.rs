//! Currency rounding and conversion.

pub mod conversion;

pub use conversion::{MONEY_DECIMALS, RATE_DECIMALS, convert_amount, round_money, round_rate};
