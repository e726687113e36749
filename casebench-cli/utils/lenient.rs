//! Permissive number parsing for command-line values.
//!
//! The tools are benchmark drivers, so malformed numbers never abort a run:
//! the longest numeric prefix is used, and callers fall back to a default
//! when there is none. This mirrors how `atof`/`strtoull`-style parsing
//! treats input such as `"30%"` or `"7 bytes"`.

const KIB: f64 = 1024.0;
const MIB: f64 = KIB * 1024.0;
const GIB: f64 = MIB * 1024.0;

/// Parses a byte count with an optional `K`, `M` or `G` suffix.
///
/// The numeral may be fractional; the scaled value is rounded to the nearest
/// integer with halves away from zero. Suffixes are case-insensitive and
/// multiply by powers of 1024. A value without a numeric prefix is `0`, and
/// negative results are clamped to `0`. Hexadecimal numerals (`0x10`,
/// `0x1.8p4`) are accepted like decimal ones.
///
/// ```
/// use casebench_cli::utils::lenient::parse_size;
///
/// assert_eq!(parse_size("2K"), 2048);
/// assert_eq!(parse_size("1.5m"), 1_572_864);
/// assert_eq!(parse_size("0x10"), 16);
/// assert_eq!(parse_size("junk"), 0);
/// ```
pub fn parse_size(s: &str) -> u64 {
    let number = leading_float(s);
    let multiplier = match s.chars().last().map(|c| c.to_ascii_lowercase()) {
        Some('k') => KIB,
        Some('m') => MIB,
        Some('g') => GIB,
        _ => 1.0,
    };

    // Float-to-int `as` saturates and maps NaN to zero.
    (number * multiplier).round() as u64
}

/// Parses the leading signed decimal integer of `s`.
///
/// Returns `None` when `s` does not start (after whitespace) with a digit or
/// a sign followed by a digit. Values beyond the `i64` range saturate.
pub fn parse_int(s: &str) -> Option<i64> {
    let (negative, digits) = split_sign(s.trim_start());
    let magnitude = leading_digits(digits)?;
    let value = magnitude
        .parse::<i64>()
        .unwrap_or(if negative { i64::MIN } else { i64::MAX });

    Some(if negative {
        value.checked_neg().unwrap_or(i64::MIN)
    } else {
        value
    })
}

/// Parses the leading unsigned decimal integer of `s`.
///
/// A leading `-` negates the value modulo 2^64, as `strtoull` does, so
/// `"-1"` yields `u64::MAX`. Values beyond the `u64` range saturate.
pub fn parse_uint(s: &str) -> Option<u64> {
    let (negative, digits) = split_sign(s.trim_start());
    let value = leading_digits(digits)?.parse::<u64>().unwrap_or(u64::MAX);

    Some(if negative { value.wrapping_neg() } else { value })
}

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else {
        (false, s.strip_prefix('+').unwrap_or(s))
    }
}

fn leading_digits(s: &str) -> Option<&str> {
    let end = s.bytes().take_while(u8::is_ascii_digit).count();
    (end > 0).then(|| &s[..end])
}

/// Returns the value of the longest floating-point prefix of `s`.
fn leading_float(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if let Some(value) = leading_hex_float(&s[end..]) {
        return if bytes.first() == Some(&b'-') {
            -value
        } else {
            value
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(0.0)
}

/// Value of a `0x` numeral with optional hex fraction and binary exponent.
///
/// Returns `None` when no hex digit follows the prefix, leaving the leading
/// `0` to the decimal path.
fn leading_hex_float(s: &str) -> Option<f64> {
    let digits = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))?;
    let bytes = digits.as_bytes();

    let mut value = 0.0_f64;
    let mut end = 0;
    while let Some(digit) = bytes.get(end).and_then(|&b| hex_value(b)) {
        value = value * 16.0 + digit;
        end += 1;
    }
    let mut any_digit = end > 0;

    if bytes.get(end) == Some(&b'.') {
        let mut scale = 1.0 / 16.0;
        end += 1;
        while let Some(digit) = bytes.get(end).and_then(|&b| hex_value(b)) {
            value += digit * scale;
            scale /= 16.0;
            end += 1;
            any_digit = true;
        }
    }

    if !any_digit {
        return None;
    }

    if matches!(bytes.get(end), Some(b'p' | b'P')) {
        let exponent = &digits[end + 1..];
        let (negative, rest) = split_sign(exponent);
        if let Some(power) = leading_digits(rest) {
            let power = power.parse::<i32>().unwrap_or(i32::MAX);
            value *= 2.0_f64.powi(if negative { -power } else { power });
        }
    }

    Some(value)
}

fn hex_value(byte: u8) -> Option<f64> {
    char::from(byte).to_digit(16).map(f64::from)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
