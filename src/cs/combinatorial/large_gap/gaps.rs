//! Transition-gap analysis of cyclic Gray codes.
//!
//! For every bit position the analyzer lists the indices at which the bit differs from the
//! previous word (index 0 is compared with the last word) and measures the cyclic distance
//! between consecutive flips, the last flip wrapping around to the first.

use std::fmt;

use crate::cs::combinatorial::large_gap::code::Code;
use crate::cs::error::{Error, Result};
use log::trace;

/// Flip positions and gaps of one bit position of a code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GapRecord {
    /// Bit position the record describes.
    pub position: usize,
    /// Ascending indices `i` where word `i` differs from word `i - 1` in this bit.
    pub flips: Vec<usize>,
    /// `gaps[k]` is the cyclic distance from `flips[k]` to the next flip.
    pub gaps: Vec<usize>,
}

impl GapRecord {
    pub fn min_gap(&self) -> Option<usize> {
        self.gaps.iter().copied().min()
    }

    pub fn max_gap(&self) -> Option<usize> {
        self.gaps.iter().copied().max()
    }
}

/// Gap statistics of one code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Statistics {
    /// Code width in bits
    pub width: usize,
    /// Number of codewords, `2^width`
    pub length: usize,
    /// Smallest gap over all bit positions
    pub min_gap: usize,
    /// Largest gap over all bit positions
    pub max_gap: usize,
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>5} {:>9} {:>7} {:>7}",
            self.width, self.length, self.min_gap, self.max_gap
        )
    }
}

/// Computes the [`GapRecord`] of bit `position`.
///
/// A bit that never flips fails with [`Error::DegenerateCode`].
pub fn gap_record(code: &Code, position: usize) -> Result<GapRecord> {
    if position >= code.width() {
        return Err(Error::degenerate(format!(
            "bit {} is outside a {}-bit code",
            position,
            code.width()
        )));
    }

    let length = code.len();
    let mut flips = Vec::new();
    let mut previous = code.bit(length - 1, position);
    for index in 0..length {
        let current = code.bit(index, position);
        if current != previous {
            flips.push(index);
        }
        previous = current;
    }

    if flips.is_empty() {
        return Err(Error::degenerate(format!("bit {} never flips", position)));
    }

    // A lone flip is one full turn away from itself.
    let gaps = flips
        .iter()
        .zip(flips.iter().cycle().skip(1))
        .map(|(&from, &to)| match (to + length - from) % length {
            0 => length,
            gap => gap,
        })
        .collect();

    Ok(GapRecord {
        position,
        flips,
        gaps,
    })
}

/// Computes the [`GapRecord`] of every bit position, lowest first.
pub fn gap_records(code: &Code) -> Result<Vec<GapRecord>> {
    (0..code.width())
        .map(|position| gap_record(code, position))
        .collect()
}

/// Reduces the gaps of every bit position to the minimum and maximum gap of the code.
///
/// # Example
/// ```
/// use lggc::large_gap::{compute_gaps, Code};
///
/// let code = Code::from_values(2, &[0, 1, 3, 2]).unwrap();
/// let stats = compute_gaps(&code).unwrap();
/// assert_eq!((stats.width, stats.length, stats.min_gap, stats.max_gap), (2, 4, 2, 2));
/// ```
pub fn compute_gaps(code: &Code) -> Result<Statistics> {
    let mut min_gap = usize::MAX;
    let mut max_gap = 0;
    for record in gap_records(code)? {
        // Records are never empty, a bit without flips is rejected above.
        min_gap = min_gap.min(record.min_gap().unwrap_or(usize::MAX));
        max_gap = max_gap.max(record.max_gap().unwrap_or(0));
    }

    let stats = Statistics {
        width: code.width(),
        length: code.len(),
        min_gap,
        max_gap,
    };
    trace!("gap statistics {:?}", stats);
    Ok(stats)
}

/// Measures `code` as a code of `width` bits.
///
/// Fails with [`Error::InvalidWidth`] when `width` is not the width of the code.
pub fn statistics_at(code: &Code, width: usize) -> Result<Statistics> {
    if width != code.width() {
        return Err(Error::width_mismatch(width, code.width()));
    }
    compute_gaps(code)
}
