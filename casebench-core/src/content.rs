//! Symbol model for synthetic ASCII text.
//!
//! Each byte is produced by up to two draws from the engine:
//!
//! 1. A percentage draw in `0..100` decides between a letter (below `alpha`)
//!    and another symbol.
//! 2. A letter is one of 52 (`A..=Z`, `a..=z`); another symbol is one of 32,
//!    split into bands of 10 digits, 10 code points starting at space, and
//!    12 entries of [`PUNCTUATION`].
//!
//! The draw order is part of the output format: changing it changes every
//! corpus generated from a given seed.

use rand::RngCore;

use crate::rng::uniform_below;

/// Number of distinct letters (`A..=Z` then `a..=z`).
pub const LETTER_COUNT: u64 = 52;

/// Number of equally likely non-letter outcomes.
pub const OTHER_COUNT: u64 = 32;

/// Punctuation table indexed by the third band of non-letter symbols.
///
/// Only the first twelve entries are reachable, so the twelfth symbol of the
/// band is a space and the trailing `]` is never emitted.
pub const PUNCTUATION: &[u8; 13] = b".,;:-_!?()[ ]";

const DIGIT_BAND: u8 = 10;
const SPACE_BAND: u8 = 20;

/// Per-byte content distribution for a given alphabetic ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentModel {
    alpha: u8,
}

impl ContentModel {
    /// Creates a model emitting letters with probability `alpha / 100`.
    ///
    /// Values above 100 behave like 100.
    pub fn new(alpha: u8) -> Self {
        Self {
            alpha: alpha.min(100),
        }
    }

    /// Alphabetic ratio in percent.
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Draws the next byte from `rng`.
    pub fn next_byte<R: RngCore + ?Sized>(&self, rng: &mut R) -> u8 {
        if uniform_below(rng, 100) < u64::from(self.alpha) {
            letter(draw_index(rng, LETTER_COUNT))
        } else {
            other_symbol(draw_index(rng, OTHER_COUNT))
        }
    }

    /// Overwrites every byte of `dst`, front to back.
    pub fn fill<R: RngCore + ?Sized>(&self, rng: &mut R, dst: &mut [u8]) {
        for byte in dst.iter_mut() {
            *byte = self.next_byte(rng);
        }
    }
}

fn draw_index<R: RngCore + ?Sized>(rng: &mut R, count: u64) -> u8 {
    // `count` never exceeds 52, so the draw always fits.
    u8::try_from(uniform_below(rng, count)).unwrap_or(0)
}

/// Maps a letter index in `0..52` to `A..=Z` then `a..=z`.
pub fn letter(index: u8) -> u8 {
    if index < 26 {
        b'A' + index
    } else {
        b'a' + (index - 26)
    }
}

/// Maps a symbol index in `0..32` to a digit, a low printable code point, or
/// punctuation.
pub fn other_symbol(index: u8) -> u8 {
    if index < DIGIT_BAND {
        b'0' + index
    } else if index < SPACE_BAND {
        b' ' + (index - DIGIT_BAND)
    } else {
        PUNCTUATION[usize::from(index - SPACE_BAND)]
    }
}

/// Returns `true` for bytes the model counts as letters.
pub fn is_letter(byte: u8) -> bool {
    byte.is_ascii_alphabetic()
}

/// Fraction of letters in `bytes`, or `0.0` for an empty slice.
pub fn letter_fraction(bytes: &[u8]) -> f64 {
    if bytes.is_empty() {
        return 0.0;
    }
    let letters = bytes.iter().filter(|&&b| is_letter(b)).count();
    letters as f64 / bytes.len() as f64
}
