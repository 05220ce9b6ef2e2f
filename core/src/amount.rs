use rust_decimal::{Decimal, RoundingStrategy};

/// Parses a decimal amount that may carry grouping separators.
///
/// Accepts `"1,234.56"`, `"1.234,56"`, `"100,00"`, `"1,234"` and plain
/// numbers. At most one `,` or `.` is taken as the decimal separator, the
/// rest are dropped as grouping. Returns `None` for anything non-numeric.
pub fn parse_amount(input: &str) -> Option<Decimal> {
    let trimmed = input.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let body: String = body.chars().filter(|c| *c != ' ' && *c != '_').collect();
    if body.is_empty() {
        return None;
    }

    let decimal_at = decimal_separator_index(&body);
    let mut normalized = String::with_capacity(body.len() + 1);
    if negative {
        normalized.push('-');
    }
    for (i, c) in body.char_indices() {
        match c {
            '0'..='9' => normalized.push(c),
            ',' | '.' if Some(i) == decimal_at => normalized.push('.'),
            ',' | '.' => {}
            _ => return None,
        }
    }

    if normalized.ends_with('.') {
        normalized.pop();
    }
    if !normalized.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    normalized.parse::<Decimal>().ok()
}

fn decimal_separator_index(body: &str) -> Option<usize> {
    let last_comma = body.rfind(',');
    let last_dot = body.rfind('.');

    match (last_comma, last_dot) {
        (Some(c), Some(d)) => Some(c.max(d)),
        (Some(c), None) => {
            let fraction = &body[c + 1..];
            let single = body.matches(',').count() == 1;
            (single && (1..=2).contains(&fraction.len())).then_some(c)
        }
        (None, Some(d)) => (body.matches('.').count() == 1).then_some(d),
        (None, None) => None,
    }
}

/// Rounds half away from zero to two places and fixes the scale at 2,
/// so `150` displays as `150.00`.
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_comma_grouping() {
        assert_eq!(parse_amount("1,234.00"), Some(dec("1234.00")));
        assert_eq!(parse_amount("1,234"), Some(dec("1234")));
        assert_eq!(parse_amount("12,345,678.9"), Some(dec("12345678.9")));
    }

    #[test]
    fn test_comma_as_decimal_separator() {
        assert_eq!(parse_amount("100,00"), Some(dec("100.00")));
        assert_eq!(parse_amount("50,5"), Some(dec("50.5")));
        assert_eq!(parse_amount("1.234,56"), Some(dec("1234.56")));
    }

    #[test]
    fn test_dot_grouping() {
        assert_eq!(parse_amount("1.234.567"), Some(dec("1234567")));
        assert_eq!(parse_amount("1234.5"), Some(dec("1234.5")));
    }

    #[test]
    fn test_sign_and_whitespace() {
        assert_eq!(parse_amount("  -1,000.25 "), Some(dec("-1000.25")));
        assert_eq!(parse_amount("+7"), Some(dec("7")));
        assert_eq!(parse_amount("1 000"), Some(dec("1000")));
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("12a"), None);
        assert_eq!(parse_amount(",."), None);
        assert_eq!(parse_amount("-"), None);
    }

    #[test]
    fn test_round_money() {
        assert_eq!(round_money(dec("150")).to_string(), "150.00");
        assert_eq!(round_money(dec("33.335")).to_string(), "33.34");
        assert_eq!(round_money(dec("-0.125")).to_string(), "-0.13");
    }
}
