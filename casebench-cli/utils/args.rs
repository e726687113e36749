//! Command-line pre-filtering ahead of `clap`.
//!
//! The benchmark tools silently ignore flags they do not know, yet still treat
//! a known flag without a value as a fatal error. `clap` rejects unknown
//! arguments outright, so the raw argument list is reduced to the recognized
//! flags (and their values) before it is handed over.

use std::ffi::OsString;

use clap::Parser;

use crate::error::{Error, Result};

/// The flags an entrypoint recognizes.
#[derive(Debug, Clone, Copy)]
pub struct KnownFlags<'a> {
    /// Flags that consume the following argument as their value.
    pub with_value: &'a [&'a str],
    /// Flags that take no value.
    pub switches: &'a [&'a str],
    /// Flags that stop argument processing (help and version).
    pub terminal: &'a [&'a str],
}

/// Keeps the program name plus every recognized flag and its value.
///
/// Processing is left to right, like a hand-written argument loop:
///
/// - a value flag always takes the next argument, even when it starts with `-`
/// - a terminal flag ends processing and is returned on its own
/// - anything else is dropped
///
/// # Errors
///
/// Returns [`Error::MissingValue`] if a value flag is the last argument.
pub fn retain_known_args<I, T>(args: I, known: &KnownFlags<'_>) -> Result<Vec<OsString>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut kept: Vec<OsString> = args.next().into_iter().collect();

    while let Some(arg) = args.next() {
        let Some(flag) = arg.to_str() else {
            continue;
        };

        if known.terminal.contains(&flag) {
            kept.truncate(1);
            kept.push(arg);
            break;
        }

        if known.with_value.contains(&flag) {
            let value = args.next().ok_or_else(|| Error::MissingValue {
                flag: flag.to_string(),
            })?;
            kept.push(arg);
            kept.push(value);
        } else if known.switches.contains(&flag) {
            kept.push(arg);
        }
    }

    Ok(kept)
}

/// Filters `args` with [`retain_known_args`] and parses the result with `clap`.
///
/// Help and version requests make `clap` print and exit the process with
/// status 0.
///
/// # Errors
///
/// Returns [`Error::MissingValue`] if a value flag is the last argument.
pub fn parse_filtered<P, I, T>(args: I, known: &KnownFlags<'_>) -> Result<P>
where
    P: Parser,
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let filtered = retain_known_args(args, known)?;
    Ok(P::parse_from(filtered))
}
