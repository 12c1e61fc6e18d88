//! Signed character offsets.

/// Resolves `offset` against `len`, counting from the end when negative and
/// clamping into `0..=len`.
pub(crate) fn clamp_offset(offset: isize, len: usize) -> usize {
    if offset < 0 {
        len.saturating_sub(offset.unsigned_abs())
    } else {
        offset.unsigned_abs().min(len)
    }
}

/// Resolves a span length against the `available` characters. A negative
/// length leaves that many characters out at the end.
pub(crate) fn clamp_length(length: isize, available: usize) -> usize {
    if length < 0 {
        available.saturating_sub(length.unsigned_abs())
    } else {
        length.unsigned_abs().min(available)
    }
}
