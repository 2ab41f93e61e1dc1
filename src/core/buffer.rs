//! Annotated output buffer
//!
//! One `OutBuf` is reused for every source in a run: `clear` resets the
//! length while keeping the capacity, so later sources reuse the largest
//! backing allocation reached so far. Growth is explicit doubling and every
//! append is fallible, so an out-of-memory condition surfaces as a
//! per-source error instead of an abort.

use thiserror::Error;

/// Buffer growth could not acquire memory (or the doubled capacity would
/// not fit in `usize`).
#[derive(Debug, Error)]
#[error("failed to grow output buffer to {requested} bytes")]
pub struct AllocError {
    /// Capacity the buffer was trying to reach.
    pub requested: usize,
}

/// Append-only byte buffer with doubling growth.
///
/// Invariants:
/// - `len() <= capacity()` at all times.
/// - Bytes are appended only after capacity is confirmed, so a failed
///   growth leaves length and content untouched.
/// - Capacity never shrinks; `clear` and `truncate` only move the length.
#[derive(Debug, Default)]
pub struct OutBuf {
    data: Vec<u8>,
}

impl OutBuf {
    /// Create a buffer with the given initial capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Ensure room for `additional` more bytes, doubling capacity as needed.
    ///
    /// New capacity is `max(1, 2 * old)`, applied repeatedly until the
    /// required length fits.
    fn reserve_for(&mut self, additional: usize) -> Result<(), AllocError> {
        let needed = self
            .data
            .len()
            .checked_add(additional)
            .ok_or(AllocError {
                requested: usize::MAX,
            })?;
        if needed <= self.data.capacity() {
            return Ok(());
        }

        let mut target = self.data.capacity().max(1);
        while target < needed {
            target = target.checked_mul(2).ok_or(AllocError { requested: needed })?;
        }

        self.data
            .try_reserve_exact(target - self.data.len())
            .map_err(|_| AllocError { requested: target })?;
        Ok(())
    }

    /// Append a byte range.
    pub fn push_bytes(&mut self, bytes: &[u8]) -> Result<(), AllocError> {
        self.reserve_for(bytes.len())?;
        self.data.extend_from_slice(bytes);
        Ok(())
    }

    /// Append a string.
    pub fn push_str(&mut self, s: &str) -> Result<(), AllocError> {
        self.push_bytes(s.as_bytes())
    }

    /// Drop everything appended after `len` bytes. No-op if `len` is not
    /// smaller than the current length. Never reallocates.
    pub fn truncate(&mut self, len: usize) {
        self.data.truncate(len);
    }

    /// Reset the length to zero, keeping the capacity for reuse.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Number of bytes appended so far.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether nothing has been appended since creation or the last `clear`.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current backing capacity.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// The appended bytes, valid for `[0, len())`.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_bytes_and_str() {
        let mut buf = OutBuf::with_capacity(8);
        buf.push_bytes(b"hello").unwrap();
        buf.push_str(" world").unwrap();
        assert_eq!(buf.as_bytes(), b"hello world");
        assert_eq!(buf.len(), 11);
        assert!(!buf.is_empty());
    }

    #[test]
    fn test_growth_preserves_content_across_doublings() {
        // Start at capacity 1 and force many doubling steps.
        let mut buf = OutBuf::with_capacity(1);
        let mut expected = Vec::new();
        for i in 0..1000u32 {
            let chunk = format!("{};", i % 10);
            buf.push_str(&chunk).unwrap();
            expected.extend_from_slice(chunk.as_bytes());
        }
        assert_eq!(buf.as_bytes(), expected.as_slice());
    }

    #[test]
    fn test_capacity_doubles() {
        let mut buf = OutBuf::with_capacity(2);
        buf.push_bytes(b"ab").unwrap();
        assert_eq!(buf.capacity(), 2);
        buf.push_bytes(b"c").unwrap();
        // 2 -> 4 via one doubling step.
        assert_eq!(buf.capacity(), 4);
        buf.push_bytes(b"defgh").unwrap();
        // 4 -> 8 covers len 8.
        assert_eq!(buf.capacity(), 8);
    }

    #[test]
    fn test_zero_capacity_starts_doubling_at_one() {
        let mut buf = OutBuf::with_capacity(0);
        buf.push_bytes(b"x").unwrap();
        assert_eq!(buf.capacity(), 1);
        buf.push_bytes(b"y").unwrap();
        assert_eq!(buf.capacity(), 2);
    }

    #[test]
    fn test_clear_retains_capacity() {
        let mut buf = OutBuf::with_capacity(1);
        buf.push_bytes(&[7u8; 100]).unwrap();
        let cap = buf.capacity();
        buf.clear();
        assert_eq!(buf.len(), 0);
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), cap);

        // A refit append must not grow.
        buf.push_bytes(&[9u8; 100]).unwrap();
        assert_eq!(buf.capacity(), cap);
        assert_eq!(buf.as_bytes(), &[9u8; 100]);
    }

    #[test]
    fn test_truncate_restores_prior_length() {
        let mut buf = OutBuf::with_capacity(4);
        buf.push_str("kept").unwrap();
        let mark = buf.len();
        let cap_before = buf.capacity();
        buf.push_str(" discarded").unwrap();
        buf.truncate(mark);
        assert_eq!(buf.as_bytes(), b"kept");
        assert!(buf.capacity() >= cap_before);

        // Truncate past the end is a no-op.
        buf.truncate(1000);
        assert_eq!(buf.as_bytes(), b"kept");
    }

    #[test]
    fn test_empty_append_is_noop() {
        let mut buf = OutBuf::with_capacity(0);
        buf.push_bytes(b"").unwrap();
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), 0);
    }

    #[test]
    fn test_alloc_error_reports_requested_capacity() {
        let err = AllocError { requested: 4096 };
        assert!(err.to_string().contains("4096"));
    }
}
