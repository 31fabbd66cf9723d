use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub tick_rate: Duration,
    pub household_baseline_kg: Decimal,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_secs(3),
            household_baseline_kg: dec!(8000),
            logger_timezone: central_european_time(),
        }
    }
}

fn central_european_time() -> chrono::FixedOffset {
    chrono::FixedOffset::east_opt(3600).unwrap()
}
