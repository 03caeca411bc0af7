//! Price Text
//!
//! Parsing of human-formatted price labels and fixed two-decimal output.

/// Parse a price label such as `"$1.50"`, `"S/. 12.90"` or `"€2.999,50"`.
///
/// Only digits, separators and a leading minus are kept. A comma is a
/// grouping separator unless it comes after the last dot, in which case it
/// is the decimal mark and dots group. Anything that does not yield a finite
/// number parses as 0. A mark written directly before the first digit, as in
/// `"$.99"`, starts the fraction; one separated by a space is ignored.
pub fn parse_price(text: &str) -> f64 {
    let kept: Vec<char> = text
        .chars()
        .filter(|ch| ch.is_ascii_digit() || matches!(ch, '.' | ',' | '-'))
        .collect();

    let Some(first_digit) = kept.iter().position(char::is_ascii_digit) else {
        return 0.0;
    };
    let negative = kept[..first_digit].contains(&'-');
    let body = &kept[first_digit..];
    let leading_mark = leading_decimal_mark(text);
    let decimal = leading_mark.unwrap_or_else(|| decimal_separator(body));

    let mut number = String::with_capacity(body.len() + 3);
    if negative {
        number.push('-');
    }
    let mut seen_decimal = leading_mark.is_some();
    if seen_decimal {
        number.push_str("0.");
    }
    for &ch in body {
        match ch {
            '0'..='9' => number.push(ch),
            '.' | ',' if ch == decimal => {
                if seen_decimal {
                    break;
                }
                seen_decimal = true;
                number.push('.');
            }
            '.' | ',' => {}
            _ => break,
        }
    }

    number
        .trim_end_matches('.')
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// `.` or `,` immediately followed by the first digit of `text`
fn leading_decimal_mark(text: &str) -> Option<char> {
    let digit_at = text.find(|ch: char| ch.is_ascii_digit())?;
    text[..digit_at]
        .chars()
        .next_back()
        .filter(|ch| matches!(ch, '.' | ','))
}

fn decimal_separator(body: &[char]) -> char {
    let last_dot = body.iter().rposition(|&ch| ch == '.');
    let last_comma = body.iter().rposition(|&ch| ch == ',');
    match (last_dot, last_comma) {
        (Some(dot), Some(comma)) if comma > dot => ',',
        _ => '.',
    }
}

/// Format an amount with exactly two decimals, e.g. `3.0` as `"3.00"`.
pub fn format_amount(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return "0.00".to_string();
    }
    format!("{:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_prices() {
        assert_eq!(parse_price("$1.50"), 1.5);
        assert_eq!(parse_price(" 12 "), 12.0);
        assert_eq!(parse_price("S/. 12.90"), 12.9);
        assert_eq!(parse_price("$ 1,299.00"), 1299.0);
    }

    #[test]
    fn test_parse_comma_decimal_after_dot_grouping() {
        assert_eq!(parse_price("€2.999,50"), 2999.5);
    }

    #[test]
    fn test_parse_leading_decimal_point() {
        assert_eq!(parse_price(".50"), 0.5);
        assert_eq!(parse_price("$.99"), 0.99);
        assert_eq!(parse_price("€ ,50"), 0.5);
        assert_eq!(parse_price("-$.25"), -0.25);
        assert_eq!(parse_price("S/. 12.90"), 12.9);
    }

    #[test]
    fn test_parse_keeps_leading_minus_only() {
        assert_eq!(parse_price("-$4.25"), -4.25);
        assert_eq!(parse_price("4-2"), 4.0);
    }

    #[test]
    fn test_parse_stops_at_second_decimal_mark() {
        assert_eq!(parse_price("1.2.3"), 1.2);
        assert_eq!(parse_price("7."), 7.0);
    }

    #[test]
    fn test_unparseable_text_is_zero() {
        assert_eq!(parse_price(""), 0.0);
        assert_eq!(parse_price("Gratis"), 0.0);
        assert_eq!(parse_price("$ -.-"), 0.0);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(3.0), "3.00");
        assert_eq!(format_amount(1.5), "1.50");
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(-0.0), "0.00");
        assert_eq!(format_amount(12.5), "12.50");
    }
}
