//! Text rendering of numeric values.

use crate::Value;

/// Smallest magnitude printed in plain decimal notation.
const PLAIN_MIN: Value = 1e-5;

/// Magnitude from which values switch to exponent notation.
const PLAIN_MAX: Value = 1e16;

/// Renders a value in the shortest form that parses back to the same value.
///
/// Moderate magnitudes are printed as plain decimals (`7`, `0.25`), very large
/// or very small ones in exponent form (`1e300`, `2.5e-7`).
///
/// # Examples
///
/// ```
/// use rpncalc_core::format::format_number;
///
/// assert_eq!(format_number(7.0), "7");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(1e300), "1e300");
/// ```
pub fn format_number(value: Value) -> String {
    if let Some(special) = format_special(value) {
        return special;
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
        format!("{}", value)
    } else {
        format!("{:e}", value)
    }
}

/// Renders a value like C's `%g` with `precision` significant digits.
///
/// Trailing zeros are stripped. Exponent form (`1.2346e+05`) is used when the
/// decimal exponent is below -4 or at least `precision`.
///
/// # Examples
///
/// ```
/// use rpncalc_core::format::format_general;
///
/// assert_eq!(format_general(2.5, 5), "2.5");
/// assert_eq!(format_general(123456.0, 5), "1.2346e+05");
/// assert_eq!(format_general(0.0001, 5), "0.0001");
/// assert_eq!(format_general(0.00001, 5), "1e-05");
/// ```
pub fn format_general(value: Value, precision: usize) -> String {
    if let Some(special) = format_special(value) {
        return special;
    }

    let precision = precision.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn format_special(value: Value) -> Option<String> {
    if value.is_nan() {
        Some("nan".to_string())
    } else if value.is_infinite() {
        Some(if value > 0.0 { "inf" } else { "-inf" }.to_string())
    } else {
        None
    }
}

/// Strips trailing zeros after a decimal point, and the point itself if
/// nothing is left behind it.
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_integral() {
        assert_eq!(format_number(7.0), "7");
        assert_eq!(format_number(-1024.0), "-1024");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_format_number_fraction() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(-3.5), "-3.5");
        assert_eq!(format_number(core::f64::consts::PI), "3.141592653589793");
    }

    #[test]
    fn test_format_number_round_trips() {
        for value in [0.1, 1.0 / 3.0, 2.0_f64.sqrt(), 1e-5, 9.999e15, 6.02e23, 1e-300] {
            let text = format_number(value);
            assert_eq!(text.parse::<f64>().unwrap(), value, "{text}");
        }
    }

    #[test]
    fn test_format_number_exponent_form() {
        assert_eq!(format_number(1e300), "1e300");
        assert_eq!(format_number(2.5e-7), "2.5e-7");
        assert_eq!(format_number(-1e16), "-1e16");
    }

    #[test]
    fn test_format_number_special() {
        assert_eq!(format_number(f64::NAN), "nan");
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_format_general_fixed() {
        assert_eq!(format_general(1.0, 5), "1");
        assert_eq!(format_general(3.14159265, 5), "3.1416");
        assert_eq!(format_general(12345.0, 5), "12345");
        assert_eq!(format_general(-0.5, 5), "-0.5");
        assert_eq!(format_general(0.0, 5), "0");
    }

    #[test]
    fn test_format_general_exponent() {
        assert_eq!(format_general(123456.0, 5), "1.2346e+05");
        assert_eq!(format_general(1e100, 5), "1e+100");
        assert_eq!(format_general(0.000012345, 5), "1.2345e-05");
        assert_eq!(format_general(-2e-10, 5), "-2e-10");
    }

    #[test]
    fn test_format_general_rounding_carries_into_exponent() {
        // 99999.5 rounds to 1.0000e+05 at five digits, which must switch form.
        assert_eq!(format_general(99999.5, 5), "1e+05");
    }

    #[test]
    fn test_format_general_special() {
        assert_eq!(format_general(f64::NAN, 5), "nan");
        assert_eq!(format_general(f64::NEG_INFINITY, 5), "-inf");
    }
}
