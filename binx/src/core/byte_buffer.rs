// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{path::Path, sync::Arc};

use super::clamp_start;
use crate::BinxError;

/// Immutable, in-memory view of the bytes of a file.
///
/// Cloning is cheap (the bytes live behind an [`Arc`]), which is how the renderer and
/// the reducer share a single copy of the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteBuffer {
    bytes: Arc<[u8]>,
}

impl ByteBuffer {
    /// Read the whole file at `path` into memory.
    ///
    /// # Errors
    ///
    /// Returns [`BinxError::FileRead`] if the file is missing or can't be read.
    pub async fn try_load(path: impl AsRef<Path>) -> Result<Self, BinxError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| BinxError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::info!(
            message = "ByteBuffer::try_load",
            path = %path.display(),
            len = bytes.len()
        );
        Ok(Self::from(bytes))
    }

    #[must_use]
    pub fn len(&self) -> usize { self.bytes.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.bytes.is_empty() }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] { &self.bytes }

    /// The byte at `offset`, or [`None`] if `offset` is negative or past the end.
    #[must_use]
    pub fn get(&self, offset: i64) -> Option<u8> {
        let index = usize::try_from(offset).ok()?;
        self.bytes.get(index).copied()
    }

    /// Up to `count` bytes starting at `start`. The range is clamped to the buffer, so
    /// this returns a short (or empty) slice near the end of the file instead of failing.
    #[must_use]
    pub fn slice(&self, start: i64, count: usize) -> &[u8] {
        let len = self.len();
        let count = i64::try_from(count).unwrap_or(i64::MAX);
        let begin = clamp_start(start, len);
        let end = clamp_start(start.saturating_add(count), len).max(begin);
        // Both are within 0..=len after clamping.
        let begin = usize::try_from(begin).unwrap_or(len);
        let end = usize::try_from(end).unwrap_or(len);
        &self.bytes[begin..end]
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self {
            bytes: Arc::from(bytes),
        }
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self {
            bytes: Arc::from(bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    fn ten_bytes() -> ByteBuffer { ByteBuffer::from((0..10).collect::<Vec<u8>>()) }

    #[test_case(0, 3, &[0, 1, 2] ; "from the start")]
    #[test_case(8, 5, &[8, 9] ; "clamped at the end")]
    #[test_case(10, 5, &[] ; "start at len")]
    #[test_case(42, 1, &[] ; "start past len")]
    #[test_case(-3, 5, &[0, 1] ; "negative start")]
    #[test_case(4, 0, &[] ; "zero count")]
    #[test_case(0, usize::MAX, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9] ; "huge count")]
    fn test_slice(start: i64, count: usize, expected: &[u8]) {
        assert_eq2!(ten_bytes().slice(start, count), expected);
    }

    #[test]
    fn test_get() {
        let buffer = ten_bytes();
        assert_eq2!(buffer.get(0), Some(0));
        assert_eq2!(buffer.get(9), Some(9));
        assert_eq2!(buffer.get(10), None);
        assert_eq2!(buffer.get(-1), None);
    }

    #[test]
    fn test_clone_shares_bytes() {
        let buffer = ten_bytes();
        let other = buffer.clone();
        assert!(std::ptr::eq(buffer.as_bytes(), other.as_bytes()));
    }

    #[tokio::test]
    async fn test_try_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xde, 0xad, 0xbe, 0xef]).unwrap();

        let buffer = ByteBuffer::try_load(file.path()).await.unwrap();
        assert_eq2!(buffer.as_bytes(), &[0xde, 0xad, 0xbe, 0xef]);
        assert_eq2!(buffer.len(), 4);
        assert!(!buffer.is_empty());
    }

    #[tokio::test]
    async fn test_try_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ByteBuffer::try_load(dir.path().join("missing.bin")).await;
        assert!(matches!(result, Err(BinxError::FileRead { .. })));
    }
}
