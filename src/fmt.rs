use chrono::NaiveDateTime;
use rust_decimal::prelude::ToPrimitive;

use crate::models::Money;

/// Symbol and minor-unit count for the currency codes we can render.
fn currency_conventions(code: &str) -> Option<(&'static str, u32)> {
    match code {
        "USD" => Some(("$", 2)),
        "CAD" => Some(("CA$", 2)),
        "AUD" => Some(("A$", 2)),
        "EUR" => Some(("\u{20ac}", 2)),
        "GBP" => Some(("\u{a3}", 2)),
        "JPY" => Some(("\u{a5}", 0)),
        _ => None,
    }
}

/// Renders prices for display. Constructed once from the configured currency
/// code and read-only afterwards, so it can be shared freely.
#[derive(Debug, Clone)]
pub struct CurrencyFormatter {
    code: String,
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::new("USD")
    }
}

impl CurrencyFormatter {
    pub fn new(code: &str) -> Self {
        Self {
            code: code.trim().to_uppercase(),
        }
    }

    /// Full price string: "Free" for zero, otherwise symbol + grouped amount
    /// with the currency's minor-unit places, e.g. $1,234.50.
    ///
    /// A zero amount always renders as "Free" — that is the product's pricing
    /// rule, not a translation, so it ignores the configured currency.
    pub fn format(&self, amount: Money) -> String {
        if amount.is_zero() {
            return "Free".to_string();
        }
        match self.render(amount) {
            Some(s) => s,
            // Unknown currency: degraded fallback, amount as-is with no
            // grouping. Deliberate, not worth making locale-correct.
            None => format!("${amount}"),
        }
    }

    /// Compact price for cards and lists: whole-dollar amounts drop the
    /// decimal point ($25), anything with cents falls through to `format`.
    pub fn format_short(&self, amount: Money) -> String {
        if amount.is_zero() {
            return "Free".to_string();
        }
        // Exact whole-number check; 25.50 must never truncate to $25.
        if amount.fract().is_zero() {
            if let Some(n) = amount.trunc().to_i64() {
                return format!("${n}");
            }
        }
        self.format(amount)
    }

    fn render(&self, amount: Money) -> Option<String> {
        let (symbol, places) = currency_conventions(&self.code)?;
        let fixed = format!("{:.*}", places as usize, amount);
        let (int_part, dec_part) = match fixed.split_once('.') {
            Some((i, d)) => (i, Some(d)),
            None => (fixed.as_str(), None),
        };

        let mut grouped = String::new();
        for (i, c) in int_part.chars().rev().enumerate() {
            if i > 0 && i % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }
        let grouped: String = grouped.chars().rev().collect();

        Some(match dec_part {
            Some(d) => format!("{symbol}{grouped}.{d}"),
            None => format!("{symbol}{grouped}"),
        })
    }
}

/// "June 5, 2026"
pub fn month_day_year(at: NaiveDateTime) -> String {
    at.format("%B %-d, %Y").to_string()
}

/// "7:30 PM"
pub fn time_only(at: NaiveDateTime) -> String {
    at.format("%-I:%M %p").to_string()
}

/// "June 5, 2026 at 7:30 PM"
pub fn date_time(at: NaiveDateTime) -> String {
    at.format("%B %-d, %Y at %-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn usd() -> CurrencyFormatter {
        CurrencyFormatter::new("USD")
    }

    #[test]
    fn test_zero_is_free_in_every_currency() {
        for code in ["USD", "EUR", "JPY", "XXX"] {
            let f = CurrencyFormatter::new(code);
            assert_eq!(f.format(dec!(0)), "Free");
            assert_eq!(f.format_short(dec!(0.00)), "Free");
        }
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(usd().format(dec!(25.50)), "$25.50");
        assert_eq!(usd().format(dec!(1234.5)), "$1,234.50");
        assert_eq!(usd().format(dec!(1000000.99)), "$1,000,000.99");
        assert_eq!(usd().format(dec!(0.99)), "$0.99");
    }

    #[test]
    fn test_format_short_whole_amounts() {
        assert_eq!(usd().format_short(dec!(25)), "$25");
        assert_eq!(usd().format_short(dec!(25.00)), "$25");
        assert_eq!(usd().format_short(dec!(1200)), "$1200");
    }

    #[test]
    fn test_format_short_fractional_delegates() {
        assert_eq!(usd().format_short(dec!(25.50)), usd().format(dec!(25.50)));
        assert_eq!(usd().format_short(dec!(25.50)), "$25.50");
        // A single cent is enough to keep the full rendering.
        assert_eq!(usd().format_short(dec!(25.01)), "$25.01");
    }

    #[test]
    fn test_other_currencies() {
        assert_eq!(CurrencyFormatter::new("EUR").format(dec!(25.50)), "\u{20ac}25.50");
        assert_eq!(CurrencyFormatter::new("GBP").format(dec!(1234.5)), "\u{a3}1,234.50");
        assert_eq!(CurrencyFormatter::new("JPY").format(dec!(1200)), "\u{a5}1,200");
    }

    #[test]
    fn test_unknown_currency_falls_back() {
        let f = CurrencyFormatter::new("XXX");
        assert_eq!(f.format(dec!(1234.5)), "$1234.5");
        assert_eq!(f.format(dec!(25.50)), "$25.50");
    }

    #[test]
    fn test_never_empty_and_idempotent() {
        let f = usd();
        for amount in [dec!(0), dec!(0.01), dec!(25), dec!(1234.5)] {
            let first = f.format(amount);
            assert!(!first.is_empty());
            assert_eq!(f.format(amount), first);
        }
    }

    #[test]
    fn test_code_is_normalized() {
        assert_eq!(CurrencyFormatter::new(" usd ").format(dec!(5)), "$5.00");
    }

    #[test]
    fn test_date_formats() {
        let at = NaiveDate::from_ymd_opt(2026, 6, 5)
            .unwrap()
            .and_hms_opt(19, 30, 0)
            .unwrap();
        assert_eq!(month_day_year(at), "June 5, 2026");
        assert_eq!(time_only(at), "7:30 PM");
        assert_eq!(date_time(at), "June 5, 2026 at 7:30 PM");
    }

    #[test]
    fn test_morning_time() {
        let at = NaiveDate::from_ymd_opt(2026, 1, 2)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap();
        assert_eq!(time_only(at), "9:05 AM");
        assert_eq!(month_day_year(at), "January 2, 2026");
    }

    #[test]
    fn test_midnight_and_noon() {
        let midnight = NaiveDate::from_ymd_opt(2026, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let noon = NaiveDate::from_ymd_opt(2026, 3, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        assert_eq!(time_only(midnight), "12:00 AM");
        assert_eq!(time_only(noon), "12:00 PM");
    }
}
