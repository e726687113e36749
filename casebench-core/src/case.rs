//! ASCII case transforms.
//!
//! The transform is a pure per-byte map: only `a..=z` (upper mode) or
//! `A..=Z` (lower mode) change, by exactly `0x20`. Every other byte value,
//! including non-ASCII bytes, passes through untouched.

use std::fmt;

const CASE_BIT: u8 = 0x20;

/// Direction of the case conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMode {
    /// Map `a..=z` to `A..=Z`.
    #[default]
    Upper,
    /// Map `A..=Z` to `a..=z`.
    Lower,
}

impl CaseMode {
    /// Interprets a command-line mode name.
    ///
    /// Only the exact string `"lower"` selects [`CaseMode::Lower`]; anything
    /// else falls back to [`CaseMode::Upper`].
    pub fn from_arg(value: &str) -> Self {
        if value == "lower" {
            CaseMode::Lower
        } else {
            CaseMode::Upper
        }
    }

    /// Name used in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            CaseMode::Upper => "upper",
            CaseMode::Lower => "lower",
        }
    }

    /// Applies the mode to a single byte.
    #[inline]
    pub fn apply(self, byte: u8) -> u8 {
        match self {
            CaseMode::Upper => to_upper(byte),
            CaseMode::Lower => to_lower(byte),
        }
    }
}

impl fmt::Display for CaseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upper-cases an ASCII letter, leaving every other byte unchanged.
#[inline]
pub fn to_upper(byte: u8) -> u8 {
    if byte.is_ascii_lowercase() {
        byte - CASE_BIT
    } else {
        byte
    }
}

/// Lower-cases an ASCII letter, leaving every other byte unchanged.
#[inline]
pub fn to_lower(byte: u8) -> u8 {
    if byte.is_ascii_uppercase() {
        byte + CASE_BIT
    } else {
        byte
    }
}

/// Converts `bytes` in place, one position at a time.
pub fn convert_in_place(bytes: &mut [u8], mode: CaseMode) {
    match mode {
        CaseMode::Upper => bytes.iter_mut().for_each(|b| *b = to_upper(*b)),
        CaseMode::Lower => bytes.iter_mut().for_each(|b| *b = to_lower(*b)),
    }
}
