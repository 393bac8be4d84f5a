use crate::{error::CalcError, operation::core::CalcResult};

/// Smallest decimal exponent rendered in positional notation.
pub const MIN_FIXED_EXPONENT: i32 = -4;
/// Decimal exponent from which results switch to scientific notation.
pub const MAX_FIXED_EXPONENT: i32 = 16;

/// Parses operand text into an `f64`.
///
/// Surrounding whitespace (including the line terminator) is ignored. Signs,
/// exponents and the special values `inf` and `nan` are accepted.
///
/// ## Errors
/// Returns `CalcError::MalformedNumber` carrying the trimmed text if it is not
/// a decimal number.
///
/// ## Example
/// ```
/// use quadcalc::{error::CalcError, util::num::parse_operand};
///
/// assert_eq!(parse_operand(" -2.5\n"), Ok(-2.5));
/// assert_eq!(parse_operand("1e3"), Ok(1000.0));
///
/// let err = parse_operand("abc").unwrap_err();
/// assert_eq!(err, CalcError::MalformedNumber { input: "abc".to_string() });
/// ```
pub fn parse_operand(text: &str) -> CalcResult<f64> {
    let trimmed = text.trim();
    trimmed.parse::<f64>()
           .map_err(|_| CalcError::MalformedNumber { input: trimmed.to_string() })
}

/// Renders a result for display.
///
/// Integral values keep a trailing `.0`, magnitudes below `1e-4` or from
/// `1e16` upward use an exponent with an explicit sign and at least two
/// digits, and non-finite values print as `inf`, `-inf` and `nan`.
///
/// ## Example
/// ```
/// use quadcalc::util::num::format_number;
///
/// assert_eq!(format_number(5.0), "5.0");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(1e16), "1e+16");
/// assert_eq!(format_number(0.00001), "1e-05");
/// assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `1.5e16` or `-1e-5`.
    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (MIN_FIXED_EXPONENT..MAX_FIXED_EXPONENT).contains(&exponent) {
        let fixed = format!("{value}");
        if fixed.contains('.') { fixed } else { format!("{fixed}.0") }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_keep_a_decimal_point() {
        assert_eq!(format_number(0.0), "0.0");
        assert_eq!(format_number(-0.0), "-0.0");
        assert_eq!(format_number(-7.0), "-7.0");
        assert_eq!(format_number(1e15), "1000000000000000.0");
    }

    #[test]
    fn fractions_use_shortest_digits() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(format_number(0.0001), "0.0001");
    }

    #[test]
    fn large_and_tiny_values_use_exponents() {
        assert_eq!(format_number(1.5e16), "1.5e+16");
        assert_eq!(format_number(-2e300), "-2e+300");
        assert_eq!(format_number(1.25e-7), "1.25e-07");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NAN), "nan");
    }

    #[test]
    fn operands_accept_common_spellings() {
        assert_eq!(parse_operand("3"), Ok(3.0));
        assert_eq!(parse_operand("+3"), Ok(3.0));
        assert_eq!(parse_operand(".5"), Ok(0.5));
        assert_eq!(parse_operand("5."), Ok(5.0));
        assert_eq!(parse_operand("\t42 \r\n"), Ok(42.0));
        assert_eq!(parse_operand("inf"), Ok(f64::INFINITY));
        assert!(parse_operand("nan").is_ok_and(f64::is_nan));
    }

    #[test]
    fn operands_reject_non_numbers() {
        for text in ["", "   ", "abc", "1,5", "1_000", "0x10", "2 3", "--1"] {
            assert!(matches!(parse_operand(text), Err(CalcError::MalformedNumber { .. })),
                    "{text:?} should be rejected");
        }
    }
}
