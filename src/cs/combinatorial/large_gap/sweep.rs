//! Gap statistics over a range of widths.

use std::ops::RangeInclusive;

use crate::cs::combinatorial::large_gap::builder::CodeBuilder;
use crate::cs::combinatorial::large_gap::config::MAX_SUPPORTED_WIDTH;
use crate::cs::combinatorial::large_gap::gaps::{compute_gaps, Statistics};
use crate::cs::error::{Error, Result};

/// A closed range of code widths, checked against a maximum width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidthRange {
    min: usize,
    max: usize,
}

impl WidthRange {
    pub fn new(min: usize, max: usize, max_supported_width: usize) -> Result<Self> {
        for width in [min, max] {
            if width == 0 || width > max_supported_width {
                return Err(Error::unsupported_width(width, max_supported_width));
            }
        }
        if min > max {
            return Err(Error::InvalidRange { min, max });
        }
        Ok(WidthRange { min, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// Number of widths in the range, never zero.
    pub fn len(&self) -> usize {
        self.max - self.min + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn widths(&self) -> RangeInclusive<usize> {
        self.min..=self.max
    }
}

/// Lazy sequence of canonical-code statistics, one per width in ascending order.
///
/// Each item builds the canonical code of the next width and measures it. A clone continues
/// independently from the same width; [`compute_all_statistics`] starts a fresh pass.
#[derive(Debug, Clone)]
pub struct StatisticsSweep {
    widths: RangeInclusive<usize>,
    builder: CodeBuilder,
}

impl StatisticsSweep {
    pub fn new(range: WidthRange, builder: CodeBuilder) -> Result<Self> {
        builder.check_width(range.max())?;
        Ok(StatisticsSweep {
            widths: range.widths(),
            builder,
        })
    }
}

impl Iterator for StatisticsSweep {
    type Item = Result<Statistics>;

    fn next(&mut self) -> Option<Self::Item> {
        let width = self.widths.next()?;
        Some(self.builder.canonical(width).and_then(compute_gaps))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.widths.size_hint()
    }
}

/// Statistics of the canonical codes of every width in `min_width..=max_width`.
///
/// The range is checked up front: a bound outside `1..=MAX_SUPPORTED_WIDTH` fails with
/// [`Error::InvalidWidth`] and `min_width > max_width` with [`Error::InvalidRange`].
///
/// # Example
/// ```
/// use lggc::large_gap::compute_all_statistics;
///
/// let rows = compute_all_statistics(3, 8)
///     .unwrap()
///     .collect::<lggc::Result<Vec<_>>>()
///     .unwrap();
/// assert_eq!(rows.len(), 6);
/// assert_eq!(rows[0].width, 3);
/// assert_eq!(rows[5].length, 256);
/// ```
pub fn compute_all_statistics(min_width: usize, max_width: usize) -> Result<StatisticsSweep> {
    let range = WidthRange::new(min_width, max_width, MAX_SUPPORTED_WIDTH)?;
    StatisticsSweep::new(range, CodeBuilder::new())
}

/// Same records as [`compute_all_statistics`], each width built on its own rayon task.
#[cfg(feature = "parallel")]
pub fn par_compute_all_statistics(min_width: usize, max_width: usize) -> Result<Vec<Statistics>> {
    let range = WidthRange::new(min_width, max_width, MAX_SUPPORTED_WIDTH)?;
    par_statistics(range, &CodeBuilder::new())
}

/// Statistics of every width in `range`, built in parallel by copies of `builder`.
///
/// Widths are limited by the builder, not by [`MAX_SUPPORTED_WIDTH`], so this accepts the
/// same ranges as a [`StatisticsSweep`] over the same builder.
#[cfg(feature = "parallel")]
pub fn par_statistics(range: WidthRange, builder: &CodeBuilder) -> Result<Vec<Statistics>> {
    use rayon::prelude::*;

    builder.check_width(range.max())?;
    range
        .widths()
        .into_par_iter()
        .map(|width| {
            let mut builder = builder.clone();
            builder.canonical(width).and_then(compute_gaps)
        })
        .collect()
}
