use crate::utils::errors::DecodeError;
use crate::utils::framing::{window_count, windows};

/// Collapses the syllable sum of one window into a single bit.
///
/// Implemented by [`Parity`] (the default), [`Threshold`], and any
/// `Fn(u64) -> u8` closure. Implementations must return 0 or 1.
pub trait Reducer: Send + Sync {
    fn reduce(&self, sum: u64) -> u8;
}

/// Even sum → 0, odd sum → 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Parity;

impl Reducer for Parity {
    #[inline(always)]
    fn reduce(&self, sum: u64) -> u8 {
        (sum & 1) as u8
    }
}

/// 1 when the sum reaches `at_least`, otherwise 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threshold {
    pub at_least: u64,
}

impl Reducer for Threshold {
    fn reduce(&self, sum: u64) -> u8 {
        u8::from(sum >= self.at_least)
    }
}

impl<F> Reducer for F
where
    F: Fn(u64) -> u8 + Send + Sync,
{
    fn reduce(&self, sum: u64) -> u8 {
        self(sum)
    }
}

/// Reduces each complete window of `group_size` syllable counts to a bit.
///
/// A trailing partial window contributes nothing, so the output holds
/// exactly `counts.len() / group_size` bits.
pub fn extract_bits<R: Reducer + ?Sized>(
    counts: &[u32],
    group_size: usize,
    reducer: &R,
) -> Result<Vec<u8>, DecodeError> {
    let bits = windows(counts, group_size)?
        .map(|window| {
            let sum = window.iter().map(|&count| u64::from(count)).sum::<u64>();
            reducer.reduce(sum)
        })
        .collect::<Vec<_>>();

    log::debug!(
        "Extracted {} bits from {} syllable counts ({} dropped)",
        bits.len(),
        counts.len(),
        counts.len() - window_count(counts.len(), group_size) * group_size
    );

    Ok(bits)
}
