//! Number formatting for display and history records.

use super::parse::parse_float;

/// Default thousands separator.
pub const DEFAULT_GROUP_SEPARATOR: &str = ",";

/// Format operand text for display.
///
/// A typed integer part is grouped with `separator` digit for digit, without
/// going through a float. Other forms (`1e+21`, `Infinity`) are parsed and
/// rounded to zero fraction digits first. The fractional part, if any, is
/// reattached verbatim so that an in-progress entry like `"1234.50"` keeps its
/// trailing zero.
pub fn format_for_display(operand: &str, separator: &str) -> String {
    let (integer_digits, decimal_digits) = match operand.split_once('.') {
        Some((int_part, dec_part)) => (int_part, Some(dec_part)),
        None => (operand, None),
    };

    let integer_display = match typed_integer(integer_digits) {
        Some(digits) => format_with_separators(&digits, separator),
        None => match parse_float(integer_digits) {
            None => "0".to_string(),
            Some(value) if value.is_infinite() => {
                let sign = if value.is_sign_positive() { "" } else { "-" };
                format!("{}∞", sign)
            }
            Some(value) => format_with_separators(&integer_string(value.round()), separator),
        },
    };

    match decimal_digits {
        Some(dec) => format!("{}.{}", integer_display, dec),
        None => integer_display,
    }
}

/// An optionally signed run of ASCII digits, with leading zeros dropped.
fn typed_integer(text: &str) -> Option<String> {
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.strip_prefix('+').unwrap_or(text)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let trimmed = digits.trim_start_matches('0');
    let trimmed = if trimmed.is_empty() { "0" } else { trimmed };
    Some(format!("{}{}", sign, trimmed))
}

/// Digits of an integral float from its shortest representation, padded with
/// zeros, so `1e25` gives a one followed by 25 zeros.
fn integer_string(value: f64) -> String {
    let formatted = format!("{:e}", value);
    let Some((mantissa, exp)) = formatted.split_once('e') else {
        return formatted;
    };
    let exp: usize = exp.parse().unwrap_or(0);

    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let mut digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    if digits.len() <= exp {
        digits.push_str(&"0".repeat(exp + 1 - digits.len()));
    }

    format!("{}{}", sign, digits)
}

/// Insert `separator` between every group of three digits of an integer string.
fn format_with_separators(digits: &str, separator: &str) -> String {
    let (sign, abs_digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut result = String::with_capacity(abs_digits.len() + abs_digits.len() / 3);
    for (i, c) in abs_digits.chars().enumerate() {
        if i > 0 && (abs_digits.len() - i) % 3 == 0 {
            result.push_str(separator);
        }
        result.push(c);
    }

    format!("{}{}", sign, result)
}

/// Default string form of a computed number, as stored in operands and history.
///
/// Integral values print without a fraction, very large and very small
/// magnitudes switch to exponent form with an explicit exponent sign.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        }
        .to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let abs = value.abs();
    if !(1e-6..1e21).contains(&abs) {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => formatted,
        };
    }

    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display(operand: &str) -> String {
        format_for_display(operand, DEFAULT_GROUP_SEPARATOR)
    }

    #[test]
    fn test_thousand_separators() {
        assert_eq!(display("0"), "0");
        assert_eq!(display("999"), "999");
        assert_eq!(display("1000"), "1,000");
        assert_eq!(display("1234567"), "1,234,567");
        assert_eq!(display("-1234567"), "-1,234,567");
    }

    #[test]
    fn test_fraction_kept_verbatim() {
        assert_eq!(display("1234.5"), "1,234.5");
        assert_eq!(display("0.000"), "0.000");
        assert_eq!(display("12."), "12.");
        assert_eq!(display("3.14159265"), "3.14159265");
    }

    #[test]
    fn test_long_integers_keep_typed_digits() {
        assert_eq!(
            display("12345678901234567890"),
            "12,345,678,901,234,567,890"
        );
        assert_eq!(
            display("98765432109876543210123.45"),
            "98,765,432,109,876,543,210,123.45"
        );
        assert_eq!(display("-000123"), "-123");
        assert_eq!(display("000"), "0");
        assert_eq!(display("-0.5"), "-0.5");
    }

    #[test]
    fn test_non_numeric_integer_part() {
        assert_eq!(display(".5"), "0.5");
        assert_eq!(display("-"), "0");
        assert_eq!(display("NaN"), "0");
    }

    #[test]
    fn test_leading_zeros_and_exponents() {
        assert_eq!(display("007"), "7");
        assert_eq!(display("1e+21"), "1,000,000,000,000,000,000,000");
        assert_eq!(display("1e+25"), "10,000,000,000,000,000,000,000,000");
        assert_eq!(display("1.2345e+30"), "1.2345e+30");
        assert_eq!(display("-1.5e+21"), "-1.5e+21");
        assert_eq!(display("-2e+22"), "-20,000,000,000,000,000,000,000");
        assert_eq!(display("1.5e+30"), "1.5e+30");
        assert_eq!(display("Infinity"), "∞");
        assert_eq!(display("-Infinity"), "-∞");
    }

    #[test]
    fn test_custom_separator() {
        assert_eq!(format_for_display("1234567.89", " "), "1 234 567.89");
        assert_eq!(format_for_display("1234", ""), "1234");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(7.0), "7");
        assert_eq!(format_number(-2.5), "-2.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }
}
