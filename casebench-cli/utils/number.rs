//! Number formatting helpers.

/// Significant digits used by [`format_general`].
const GENERAL_PRECISION: i32 = 6;

/// Formats `value` in general notation with six significant digits.
///
/// Follows the C `%g` convention that the text report has always used: fixed
/// notation for exponents in `-4..6`, scientific otherwise, and trailing
/// zeros removed in both cases (`5.7232`, `0.36393`, `1.23457e+06`).
pub(crate) fn format_general(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // Rounding to the target precision first yields the exponent `%g` uses
    // to choose between the two notations.
    let scientific = format!("{:.*e}", (GENERAL_PRECISION - 1) as usize, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if exponent < -4 || exponent >= GENERAL_PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (GENERAL_PRECISION - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
