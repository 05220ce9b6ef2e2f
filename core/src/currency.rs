//! Turkish lira formatting (`tr-TR`): `₺1.234,56`.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::amount::{parse_amount, round_money};

pub const CURRENCY_SYMBOL: &str = "₺";
pub const ZERO_CURRENCY: &str = "₺0,00";

/// Anything the dashboard may hand to the formatter.
#[derive(Debug, Clone, PartialEq)]
pub enum CurrencyInput<'a> {
    Missing,
    Number(Decimal),
    Float(f64),
    Text(&'a str),
}

impl From<Decimal> for CurrencyInput<'_> {
    fn from(value: Decimal) -> Self {
        CurrencyInput::Number(value)
    }
}

impl From<Option<Decimal>> for CurrencyInput<'_> {
    fn from(value: Option<Decimal>) -> Self {
        value.map(CurrencyInput::Number).unwrap_or(CurrencyInput::Missing)
    }
}

impl From<f64> for CurrencyInput<'_> {
    fn from(value: f64) -> Self {
        CurrencyInput::Float(value)
    }
}

impl<'a> From<&'a str> for CurrencyInput<'a> {
    fn from(value: &'a str) -> Self {
        CurrencyInput::Text(value)
    }
}

impl<'a> From<Option<&'a str>> for CurrencyInput<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map(CurrencyInput::Text).unwrap_or(CurrencyInput::Missing)
    }
}

impl CurrencyInput<'_> {
    fn to_decimal(&self) -> Option<Decimal> {
        match self {
            CurrencyInput::Missing => None,
            CurrencyInput::Number(d) => Some(*d),
            CurrencyInput::Float(f) if f.is_finite() => Decimal::from_f64(*f),
            CurrencyInput::Float(_) => None,
            CurrencyInput::Text(s) => parse_amount(s),
        }
    }
}

/// Formats an amount as lira with two fraction digits.
///
/// Missing or non-numeric input yields [`ZERO_CURRENCY`].
pub fn format_currency<'a>(value: impl Into<CurrencyInput<'a>>) -> String {
    match value.into().to_decimal() {
        Some(amount) => format_lira(amount),
        None => ZERO_CURRENCY.to_string(),
    }
}

fn format_lira(amount: Decimal) -> String {
    let rounded = round_money(amount);
    let text = rounded.abs().to_string();
    let (integer_part, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{}{}{},{}", sign, CURRENCY_SYMBOL, grouped, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(dec("1234.56")), "₺1.234,56");
        assert_eq!(format_currency(dec("1234567.891")), "₺1.234.567,89");
        assert_eq!(format_currency(dec("0")), "₺0,00");
        assert_eq!(format_currency(dec("999")), "₺999,00");
        assert_eq!(format_currency(dec("-1500.5")), "-₺1.500,50");
    }

    #[test]
    fn test_missing_and_invalid_are_zero() {
        assert_eq!(format_currency(None::<Decimal>), ZERO_CURRENCY);
        assert_eq!(format_currency(None::<&str>), ZERO_CURRENCY);
        assert_eq!(format_currency("not a number"), ZERO_CURRENCY);
        assert_eq!(format_currency(f64::NAN), ZERO_CURRENCY);
        assert_eq!(format_currency(f64::INFINITY), ZERO_CURRENCY);
    }

    #[test]
    fn test_string_and_float_inputs() {
        assert_eq!(format_currency("1,234.00"), "₺1.234,00");
        assert_eq!(format_currency("150.00"), "₺150,00");
        assert_eq!(format_currency(2500.0_f64), "₺2.500,00");
    }

    #[test]
    fn test_negative_rounding_to_zero_has_no_sign() {
        assert_eq!(format_currency(dec("-0.001")), "₺0,00");
    }
}
