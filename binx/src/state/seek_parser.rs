// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Parse what the user typed at the "Seek to offset" prompt.
//!
//! The grammar is the usual one for integer literals in source code:
//!
//! | Input     | Base                 |
//! | --------- | -------------------- |
//! | `0x1f`    | 16 (also `0X`)       |
//! | `0o17`    | 8 (also `0O`)        |
//! | `017`     | 8 (leading zero)     |
//! | `0b101`   | 2 (also `0B`)        |
//! | `42`      | 10                   |
//!
//! An optional `+` or `-` sign may come first, and `_` may be used to separate digits
//! (eg: `0x_ff_ff`, `1_000`).

use std::num::IntErrorKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeekParseError {
    #[error("empty offset")]
    Empty,

    #[error("invalid offset: {0}")]
    InvalidLiteral(String),

    #[error("offset out of range: {0}")]
    OutOfRange(String),

    #[error("negative offset: {0}")]
    Negative(i64),
}

/// Parse `input` as a signed 64 bit integer literal. Surrounding whitespace is ignored.
///
/// # Errors
///
/// - [`SeekParseError::Empty`] if there is nothing but whitespace.
/// - [`SeekParseError::InvalidLiteral`] for bad digits, a dangling prefix or sign, or
///   misplaced underscores.
/// - [`SeekParseError::OutOfRange`] if the value doesn't fit in an `i64`.
pub fn parse_offset_literal(input: &str) -> Result<i64, SeekParseError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(SeekParseError::Empty);
    }

    let (is_negative, unsigned) = split_sign(text);
    let (radix, digits, has_prefix) = split_radix(unsigned);

    let invalid = || SeekParseError::InvalidLiteral(text.to_string());

    if !underscores_ok(digits, has_prefix) {
        return Err(invalid());
    }

    let digits: String = digits.chars().filter(|ch| *ch != '_').collect();

    // `from_str_radix` accepts a leading sign, which would let "--5" or "0x-5" through.
    if digits.is_empty() || !digits.chars().all(|ch| ch.is_ascii_alphanumeric()) {
        return Err(invalid());
    }

    let magnitude = u64::from_str_radix(&digits, radix).map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow => SeekParseError::OutOfRange(text.to_string()),
        _ => invalid(),
    })?;

    if is_negative {
        0_i64
            .checked_sub_unsigned(magnitude)
            .ok_or_else(|| SeekParseError::OutOfRange(text.to_string()))
    } else {
        i64::try_from(magnitude).map_err(|_| SeekParseError::OutOfRange(text.to_string()))
    }
}

/// Same as [`parse_offset_literal`], but only offsets that can point into a file are
/// accepted.
///
/// # Errors
///
/// Everything [`parse_offset_literal`] returns, plus [`SeekParseError::Negative`].
pub fn parse_seek_offset(input: &str) -> Result<i64, SeekParseError> {
    match parse_offset_literal(input)? {
        it if it < 0 => Err(SeekParseError::Negative(it)),
        it => Ok(it),
    }
}

fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else {
        (false, text)
    }
}

/// Returns `(radix, digits, has_prefix)`.
fn split_radix(unsigned: &str) -> (u32, &str, bool) {
    let bytes = unsigned.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'0' {
        match bytes[1].to_ascii_lowercase() {
            b'x' => return (16, &unsigned[2..], true),
            b'o' => return (8, &unsigned[2..], true),
            b'b' => return (2, &unsigned[2..], true),
            _ => return (8, &unsigned[1..], true),
        }
    }
    (10, unsigned, false)
}

/// An underscore has to follow a digit (or the base prefix) and be followed by a digit.
fn underscores_ok(digits: &str, has_prefix: bool) -> bool {
    let mut prev_is_digit = has_prefix;
    let mut prev_is_underscore = false;
    for ch in digits.chars() {
        if ch == '_' {
            if !prev_is_digit {
                return false;
            }
            prev_is_digit = false;
            prev_is_underscore = true;
        } else {
            prev_is_digit = true;
            prev_is_underscore = false;
        }
    }
    !prev_is_underscore
}
