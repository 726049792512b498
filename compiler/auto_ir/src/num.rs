//! Number formatting shared by the AST and value representations.

/// Format a double the way C's `%g` does: six significant digits, trailing
/// zeros stripped, scientific notation for very small or large magnitudes.
///
/// `27.5` renders as `27.5`, `3.0` as `3`, `1e6` as `1e+06`.
pub fn fmt_double(value: f64) -> String {
    const PRECISION: i32 = 6;

    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Round to the target precision first so the exponent reflects carries
    // (e.g. 999999.5 becomes 1e+06).
    let sci = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= PRECISION {
        let mantissa = strip_trailing_zeros(mantissa);
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.abs())
    } else {
        let decimals = usize::try_from(PRECISION - 1 - exp).unwrap_or(0);
        strip_trailing_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

fn strip_trailing_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::fmt_double;

    #[test]
    fn plain_values() {
        assert_eq!(fmt_double(27.5), "27.5");
        assert_eq!(fmt_double(3.0), "3");
        assert_eq!(fmt_double(-0.25), "-0.25");
        assert_eq!(fmt_double(0.0), "0");
        assert_eq!(fmt_double(123_456.0), "123456");
    }

    #[test]
    fn rounds_to_six_significant_digits() {
        assert_eq!(fmt_double(3.141_592_653), "3.14159");
        assert_eq!(fmt_double(0.1 + 0.2), "0.3");
    }

    #[test]
    fn scientific_for_extreme_magnitudes() {
        assert_eq!(fmt_double(1_000_000.0), "1e+06");
        assert_eq!(fmt_double(1.5e10), "1.5e+10");
        assert_eq!(fmt_double(0.000_012_5), "1.25e-05");
        assert_eq!(fmt_double(999_999.5), "1e+06");
    }

    #[test]
    fn non_finite() {
        assert_eq!(fmt_double(f64::NAN), "nan");
        assert_eq!(fmt_double(f64::INFINITY), "inf");
        assert_eq!(fmt_double(f64::NEG_INFINITY), "-inf");
    }
}
