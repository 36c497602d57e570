//! Fixed framing shared by the bit extractor and the bit packer.
//!
//! A sequence is cut into consecutive, non-overlapping windows of exactly
//! `group_size` elements. A trailing remainder shorter than a window is
//! dropped: there is no padding and no incompleteness signal.

use std::slice::ChunksExact;

use crate::utils::errors::DecodeError;

/// Rejects group sizes that cannot frame anything.
pub fn check_group_size(group_size: usize) -> Result<(), DecodeError> {
    if group_size == 0 {
        return Err(DecodeError::InvalidGroupSize {
            size: group_size,
            reason: "group size must be at least 1",
        });
    }

    Ok(())
}

/// Returns the complete windows of `items`, left to right.
pub fn windows<T>(items: &[T], group_size: usize) -> Result<ChunksExact<'_, T>, DecodeError> {
    check_group_size(group_size)?;
    Ok(items.chunks_exact(group_size))
}

/// Number of complete windows `windows` would yield.
#[inline(always)]
pub const fn window_count(len: usize, group_size: usize) -> usize {
    if group_size == 0 { 0 } else { len / group_size }
}
