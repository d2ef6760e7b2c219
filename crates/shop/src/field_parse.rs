//! Lenient parsing of numeric form fields and menu attributes.
//!
//! Values come from free-form text, so parsing reads the leading number and
//! ignores whatever follows it: `"3 cups"` is 3 and `"2.50 USD"` is 2.5.
//! Text without a leading number yields `None`. Integers too large for
//! `i64` saturate instead of being dropped.

/// Parses a leading integer, e.g. a topping quantity.
pub fn parse_quantity(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    let saturated = if bytes[0] == b'-' { i64::MIN } else { i64::MAX };
    Some(s[..end].parse().unwrap_or(saturated))
}

/// Parses a leading decimal number, e.g. a base price.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let mut digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_plain() {
        assert_eq!(parse_quantity("3"), Some(3));
        assert_eq!(parse_quantity("0"), Some(0));
        assert_eq!(parse_quantity("  12"), Some(12));
    }

    #[test]
    fn test_quantity_trailing_text_ignored() {
        assert_eq!(parse_quantity("2 scoops"), Some(2));
        assert_eq!(parse_quantity("4.9"), Some(4));
    }

    #[test]
    fn test_quantity_signed() {
        assert_eq!(parse_quantity("-1"), Some(-1));
        assert_eq!(parse_quantity("+5"), Some(5));
    }

    #[test]
    fn test_quantity_overflow_saturates() {
        assert_eq!(parse_quantity("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_quantity("+99999999999999999999 cups"), Some(i64::MAX));
        assert_eq!(parse_quantity("-99999999999999999999"), Some(i64::MIN));
    }

    #[test]
    fn test_quantity_non_numeric() {
        assert_eq!(parse_quantity(""), None);
        assert_eq!(parse_quantity("abc"), None);
        assert_eq!(parse_quantity("-"), None);
        assert_eq!(parse_quantity("x3"), None);
    }

    #[test]
    fn test_decimal_plain() {
        assert_eq!(parse_decimal("2.50"), Some(2.5));
        assert_eq!(parse_decimal("3"), Some(3.0));
        assert_eq!(parse_decimal(".5"), Some(0.5));
        assert_eq!(parse_decimal("4."), Some(4.0));
    }

    #[test]
    fn test_decimal_trailing_text_ignored() {
        assert_eq!(parse_decimal("2.50 USD"), Some(2.5));
        assert_eq!(parse_decimal("1e2x"), Some(100.0));
        assert_eq!(parse_decimal("7e"), Some(7.0));
    }

    #[test]
    fn test_decimal_non_numeric() {
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("free"), None);
        assert_eq!(parse_decimal("."), None);
        assert_eq!(parse_decimal("$3"), None);
    }
}
