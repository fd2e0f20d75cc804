// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::ByteBuffer;

/// Why a search didn't produce a match. The two cases are reported differently to the
/// user: one means "fix what you typed", the other means "it's not in this file".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("pattern not found")]
    NotFound,
}

/// Location of a match in the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMatch {
    pub offset: usize,
    pub len: usize,
}

/// Decode a hex string (eg: `"deadBEEF"`) into the bytes to search for. Leading and
/// trailing whitespace is ignored.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPattern`] if the string is empty, has an odd number of
/// digits, or contains a non hex character.
pub fn decode_pattern(hex_pattern: &str) -> Result<Vec<u8>, SearchError> {
    let trimmed = hex_pattern.trim();
    if trimmed.is_empty() {
        return Err(SearchError::InvalidPattern("empty pattern".into()));
    }
    hex::decode(trimmed).map_err(|err| SearchError::InvalidPattern(err.to_string()))
}

/// First occurrence of the hex encoded pattern in `buffer`.
///
/// # Errors
///
/// See [`find_match`].
pub fn find(hex_pattern: &str, buffer: &ByteBuffer) -> Result<usize, SearchError> {
    find_match(hex_pattern, buffer).map(|it| it.offset)
}

/// Like [`find`], but also returns the length of the decoded pattern.
///
/// # Errors
///
/// - [`SearchError::InvalidPattern`] if `hex_pattern` can't be decoded.
/// - [`SearchError::NotFound`] if the decoded pattern doesn't occur in `buffer`.
pub fn find_match(hex_pattern: &str, buffer: &ByteBuffer) -> Result<SearchMatch, SearchError> {
    let pattern = decode_pattern(hex_pattern)?;
    find_bytes(&pattern, buffer.as_bytes())
        .map(|offset| SearchMatch {
            offset,
            len: pattern.len(),
        })
        .ok_or(SearchError::NotFound)
}

/// First index at which `needle` occurs in `haystack`. An empty needle never matches.
#[must_use]
pub fn find_bytes(needle: &[u8], haystack: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
