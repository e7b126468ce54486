use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Error returned when a string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
#[error("invalid amount '{input}': {source}")]
pub struct ParseDecimalError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Normalizes input for decimal parsing: trims whitespace and removes commas
/// and a leading rupee sign.
fn normalize_decimal_input(s: &str) -> String {
    s.trim().trim_start_matches('₹').replace(',', "")
}

/// Parses a command-line amount into a [`Decimal`].
///
/// Handles comma as a thousands separator in both Indian (`"12,50,000"`) and
/// western (`"1,250,000"`) grouping. Empty or whitespace-only input is
/// treated as 0.
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| {
        tracing::error!(input = %s, "invalid decimal: {}", e);
        ParseDecimalError {
            input: s.to_string(),
            source: e,
        }
    })
}

/// Formats an amount in rupees with Indian digit grouping.
///
/// Paise are shown only when non-zero.
///
/// ```
/// use rust_decimal_macros::dec;
/// use gotax_cli::utils::format_inr;
///
/// assert_eq!(format_inr(dec!(1234567)), "₹12,34,567");
/// assert_eq!(format_inr(dec!(173076.92)), "₹1,73,076.92");
/// ```
pub fn format_inr(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let magnitude = rounded.abs();
    let whole = magnitude.trunc().normalize();
    let fraction = magnitude - whole;

    let mut out = String::new();
    if rounded < Decimal::ZERO {
        out.push('-');
    }
    out.push('₹');
    out.push_str(&group_indian(&whole.to_string()));
    if !fraction.is_zero() {
        let paise = format!("{fraction:.2}");
        out.push_str(paise.trim_start_matches('0'));
    }
    out
}

/// Groups the last three digits, then every two: 1234567 -> 12,34,567.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Formats a percentage with two decimals, e.g. `4.42%`.
pub fn format_percent(value: Decimal) -> String {
    format!("{value:.2}%")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn parse_decimal_accepts_comma_thousands_separator() {
        assert_eq!(parse_decimal("1,234.56").unwrap(), dec!(1234.56));
        assert_eq!(parse_decimal("12,50,000").unwrap(), dec!(1250000));
    }

    #[test]
    fn parse_decimal_strips_rupee_sign_and_whitespace() {
        assert_eq!(parse_decimal("  ₹7,00,000  ").unwrap(), dec!(700000));
    }

    #[test]
    fn parse_decimal_empty_treated_as_zero() {
        assert_eq!(parse_decimal("").unwrap(), Decimal::ZERO);
        assert_eq!(parse_decimal("   ").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn parse_decimal_invalid_returns_error() {
        let err = parse_decimal("ten lakh").unwrap_err();

        assert!(err.to_string().starts_with("invalid amount 'ten lakh'"));
    }

    #[test]
    fn format_inr_groups_in_lakhs_and_crores() {
        assert_eq!(format_inr(dec!(0)), "₹0");
        assert_eq!(format_inr(dec!(800)), "₹800");
        assert_eq!(format_inr(dec!(44200)), "₹44,200");
        assert_eq!(format_inr(dec!(100000)), "₹1,00,000");
        assert_eq!(format_inr(dec!(25000000)), "₹2,50,00,000");
    }

    #[test]
    fn format_inr_keeps_paise_and_sign() {
        assert_eq!(format_inr(dec!(1666.666)), "₹1,666.67");
        assert_eq!(format_inr(dec!(0.5)), "₹0.50");
        assert_eq!(format_inr(dec!(-1500)), "-₹1,500");
    }

    #[test]
    fn format_percent_uses_two_decimals() {
        assert_eq!(format_percent(dec!(4.42)), "4.42%");
        assert_eq!(format_percent(dec!(0)), "0.00%");
    }
}
