use crate::utils::errors::DecodeError;
use crate::utils::framing::{check_group_size, windows};

/// Widest window that still fits a packed `u32`.
pub const MAX_BINARY_GROUP_SIZE: usize = u32::BITS as usize;

pub(crate) fn check_binary_group_size(group_size: usize) -> Result<(), DecodeError> {
    check_group_size(group_size)?;

    if group_size > MAX_BINARY_GROUP_SIZE {
        return Err(DecodeError::InvalidGroupSize {
            size: group_size,
            reason: "binary groups wider than 32 bits do not fit a packed id",
        });
    }

    Ok(())
}

/// Packs each complete window of `group_size` bits into an integer, first
/// bit most significant. Any non-zero bit counts as 1.
///
/// A trailing partial window is dropped.
pub fn pack_bits(bits: &[u8], group_size: usize) -> Result<Vec<u32>, DecodeError> {
    check_binary_group_size(group_size)?;

    let ids = windows(bits, group_size)?
        .map(|window| {
            window
                .iter()
                .fold(0u32, |acc, &bit| (acc << 1) | u32::from(bit != 0))
        })
        .collect();

    Ok(ids)
}

/// Expands ids back into their MSB-first bit pattern, `group_size` bits each.
///
/// This is the parity pattern a carrier text has to produce for `ids`.
pub fn unpack_integers(ids: &[u32], group_size: usize) -> Result<Vec<u8>, DecodeError> {
    check_binary_group_size(group_size)?;

    let mut bits = Vec::with_capacity(ids.len() * group_size);
    for (position, &id) in ids.iter().enumerate() {
        if group_size < MAX_BINARY_GROUP_SIZE && id >> group_size != 0 {
            return Err(DecodeError::IdTooWide {
                id,
                position,
                group_size,
            });
        }

        bits.extend((0..group_size).rev().map(|shift| ((id >> shift) & 1) as u8));
    }

    Ok(bits)
}
