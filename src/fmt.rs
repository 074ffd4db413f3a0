//! Display helpers for amounts and timestamps.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// `"USD 42.50"` style currency-and-amount string, always two decimals.
pub fn money(currency: &str, amount: Decimal) -> String {
    format!("{currency} {amount:.2}")
}

pub fn short_date(date: &NaiveDateTime) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn date_time(date: &NaiveDateTime) -> String {
    date.format("%b %-d, %Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_pads_to_two_decimals() {
        assert_eq!(money("USD", "42.5".parse().unwrap()), "USD 42.50");
        assert_eq!(money("EUR", "100".parse().unwrap()), "EUR 100.00");
    }

    #[test]
    fn money_keeps_two_decimals_for_exact_amounts() {
        assert_eq!(money("GBP", "0.99".parse().unwrap()), "GBP 0.99");
    }

    #[test]
    fn dates_format_for_display() {
        let date: NaiveDateTime = "2024-03-01T09:30:00".parse().unwrap();
        assert_eq!(short_date(&date), "Mar 1, 2024");
        assert_eq!(date_time(&date), "Mar 1, 2024 09:30");
    }
}
