//! Canonical and parameterized construction of large-gap Gray codes.

use crate::cs::combinatorial::gray_code::reflected_code;
use crate::cs::combinatorial::large_gap::code::Code;
use crate::cs::combinatorial::large_gap::config::{MAX_SUPPORTED_WIDTH, WIDTH_CEILING};
use crate::cs::combinatorial::large_gap::gaps::compute_gaps;
use crate::cs::combinatorial::large_gap::params::ShapeParameters;
use crate::cs::error::{Error, Result};
use bitvec::prelude::*;
use log::{debug, trace};

/// Narrowest width built by the product construction. Narrower canonical codes are base codes.
pub const FIRST_PRODUCT_WIDTH: usize = 7;

/// Transition sequences of the base codes for widths 3 through 6.
///
/// Each has the largest minimum gap possible at its width (2, 2, 4 and 4) and, among those,
/// the smallest maximum gap (4, 6, 8 and 8).
const BASE_TRANSITIONS: [&[usize]; FIRST_PRODUCT_WIDTH - 3] = [
    &[0, 1, 0, 2, 0, 1, 0, 2],
    &[0, 1, 0, 2, 0, 3, 2, 1, 2, 3, 0, 3, 1, 2, 1, 3],
    &[
        0, 1, 2, 3, 0, 1, 2, 4, 0, 3, 2, 1, 0, 3, 2, 4, 0, 1, 2, 3, 0, 1, 2, 4, 0, 3, 2, 1, 0, 3,
        2, 4,
    ],
    &[
        0, 1, 2, 3, 0, 1, 4, 5, 0, 1, 2, 3, 0, 4, 2, 5, 1, 0, 4, 3, 1, 0, 2, 5, 1, 0, 4, 3, 1, 2,
        4, 5, 0, 1, 2, 3, 0, 1, 4, 5, 0, 1, 2, 3, 0, 4, 2, 5, 1, 0, 4, 3, 1, 0, 2, 5, 1, 0, 4, 3,
        1, 2, 4, 5,
    ],
];

/// Canonical construction for widths 7 through 24, indexed by `width - 7`.
///
/// Each entry maximizes the minimum gap over the tuples built from narrower canonical codes,
/// ties going to the smaller maximum gap.
const CANONICAL_TABLE: [ShapeParameters; MAX_SUPPORTED_WIDTH + 1 - FIRST_PRODUCT_WIDTH] = [
    ShapeParameters::new(5, 2, 3, 1),
    ShapeParameters::new(6, 2, 3, 1),
    ShapeParameters::new(7, 2, 3, 1),
    ShapeParameters::new(5, 5, 15, 17),
    ShapeParameters::new(9, 2, 3, 1),
    ShapeParameters::new(7, 5, 19, 13),
    ShapeParameters::new(8, 5, 19, 13),
    ShapeParameters::new(7, 7, 63, 65),
    ShapeParameters::new(10, 5, 21, 11),
    ShapeParameters::new(11, 5, 23, 9),
    ShapeParameters::new(12, 5, 23, 9),
    ShapeParameters::new(11, 7, 81, 47),
    ShapeParameters::new(14, 5, 23, 9),
    ShapeParameters::new(11, 9, 285, 227),
    ShapeParameters::new(16, 5, 25, 7),
    ShapeParameters::new(11, 11, 957, 1091),
    ShapeParameters::new(18, 5, 25, 7),
    ShapeParameters::new(21, 3, 7, 1),
];

/// Transition sequence of the canonical base code of `width`, for widths 3 through 6.
pub fn base_transitions(width: usize) -> Option<&'static [usize]> {
    match width {
        3..=6 => Some(BASE_TRANSITIONS[width - 3]),
        _ => None,
    }
}

/// The tuple the canonical family uses for `width`, or `None` below [`FIRST_PRODUCT_WIDTH`].
///
/// Widths past the table split off a quarter of the bits as the high code and pick the odd
/// `r` closest to the share of low bits.
pub fn canonical_parameters(width: usize) -> Option<ShapeParameters> {
    match width {
        0..=6 => None,
        FIRST_PRODUCT_WIDTH..=MAX_SUPPORTED_WIDTH => {
            Some(CANONICAL_TABLE[width - FIRST_PRODUCT_WIDTH])
        }
        _ => {
            let q = (width / 4).max(1);
            let p = width - q;
            let period = 1 << q;
            let r = (period * p / width) | 1;
            Some(ShapeParameters::new(p, q, r, period - r))
        }
    }
}

/// Builds the product of `low` (width `p`) and `high` (width `q`) selected by `params`.
///
/// The product interleaves the transition sequences of the two codes: step `t` takes the next
/// transition of `low` when bit `t mod 2^q` of the step word is set and the next transition of
/// `high`, moved up by `p` bit positions, otherwise. The walk starts from the first word of each
/// code, the low word in bits `0..p` and the high word in bits `p..p + q`.
///
/// # Example
/// ```
/// use lggc::gray_code::reflected_code;
/// use lggc::large_gap::{product_code, ShapeParameters};
///
/// let low = reflected_code(2).unwrap();
/// let high = reflected_code(1).unwrap();
/// let code = product_code(&low, &high, ShapeParameters::new(2, 1, 1, 1)).unwrap();
/// assert_eq!(code.values().collect::<Vec<_>>(), vec![0, 4, 5, 1, 3, 7, 6, 2]);
/// ```
pub fn product_code(low: &Code, high: &Code, params: ShapeParameters) -> Result<Code> {
    params.validate(WIDTH_CEILING)?;
    if low.width() != params.p || high.width() != params.q {
        return Err(Error::invalid_parameters(
            params,
            format!(
                "component codes have widths {} and {}",
                low.width(),
                high.width()
            ),
        ));
    }

    let low_steps = low.transitions()?;
    let high_steps = high.transitions()?;
    let pattern = params.step_word();
    let period = pattern.len();
    let width = params.width();
    let length = low.len() * high.len();

    let mut word = BitVec::<usize, Lsb0>::with_capacity(width);
    word.extend_from_bitslice(low.word(0));
    word.extend_from_bitslice(high.word(0));
    let start = word.clone();

    let mut bits = BitVec::with_capacity(length * width);
    let (mut x, mut y) = (0, 0);
    for t in 0..length {
        bits.extend_from_bitslice(word.as_bitslice());
        let position = if pattern[t % period] {
            let position = low_steps[x];
            x = (x + 1) % low_steps.len();
            position
        } else {
            let position = params.p + high_steps[y];
            y = (y + 1) % high_steps.len();
            position
        };
        let flipped = !word[position];
        word.set(position, flipped);
    }

    // Both transition sequences run out together on every valid tuple.
    if (x, y) != (0, 0) || word != start {
        return Err(Error::degenerate(format!(
            "walk for {} ended at ({}, {})",
            params, x, y
        )));
    }

    debug!("built {}-bit product code {}", width, params);
    Ok(Code::from_bits(width, bits))
}

/// Builds canonical and parameterized codes, keeping every canonical code it has built so
/// that wider codes reuse their components.
///
/// # Example
/// ```
/// use lggc::large_gap::{CodeBuilder, ShapeParameters};
///
/// let mut builder = CodeBuilder::new();
/// let code = builder.build_canonical(16).unwrap();
/// let same = builder
///     .build_from_parameters(ShapeParameters::new(11, 5, 23, 9))
///     .unwrap();
/// assert_eq!(code, same);
/// assert!(builder.build_canonical(0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    max_width: usize,
    canonical: Vec<Option<Code>>,
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeBuilder {
    /// A builder for widths up to [`MAX_SUPPORTED_WIDTH`].
    pub fn new() -> Self {
        CodeBuilder {
            max_width: MAX_SUPPORTED_WIDTH,
            canonical: vec![None; MAX_SUPPORTED_WIDTH + 1],
        }
    }

    /// A builder for widths up to `max_width`.
    pub fn with_max_width(max_width: usize) -> Result<Self> {
        if max_width == 0 || max_width > WIDTH_CEILING {
            return Err(Error::unsupported_width(max_width, WIDTH_CEILING));
        }
        Ok(CodeBuilder {
            max_width,
            canonical: vec![None; max_width + 1],
        })
    }

    pub fn max_width(&self) -> usize {
        self.max_width
    }

    /// Fails with [`Error::InvalidWidth`] unless `1 <= width <= max_width`.
    pub fn check_width(&self, width: usize) -> Result<()> {
        if width == 0 || width > self.max_width {
            return Err(Error::unsupported_width(width, self.max_width));
        }
        Ok(())
    }

    /// Borrows the canonical code of `width`, building it on first use.
    pub fn canonical(&mut self, width: usize) -> Result<&Code> {
        self.check_width(width)?;
        if self.canonical[width].is_none() {
            let code = match (base_transitions(width), canonical_parameters(width)) {
                (Some(transitions), _) => Code::from_transitions(width, transitions)?,
                (None, Some(params)) => self.product(params)?,
                (None, None) => reflected_code(width)?,
            };
            code.validate()?;
            debug!("canonical {}-bit code ready", width);
            self.canonical[width] = Some(code);
        } else {
            trace!("canonical {}-bit code reused", width);
        }
        self.cached(width)
    }

    /// Builds the canonical code of `width`.
    pub fn build_canonical(&mut self, width: usize) -> Result<Code> {
        self.canonical(width).cloned()
    }

    /// Builds the product code selected by `params` from the canonical codes of widths `p`
    /// and `q`.
    pub fn build_from_parameters(&mut self, params: ShapeParameters) -> Result<Code> {
        let code = self.product(params)?;
        code.validate()?;
        Ok(code)
    }

    /// The `(min_gap, max_gap)` bounds guaranteed for the code built from `params`.
    pub fn gap_bounds(&mut self, params: ShapeParameters) -> Result<(usize, usize)> {
        params.validate(self.max_width)?;
        let low = compute_gaps(self.canonical(params.p)?)?;
        let high = compute_gaps(self.canonical(params.q)?)?;
        Ok((
            params.min_gap_bound(&low, &high),
            params.max_gap_bound(&low, &high),
        ))
    }

    fn product(&mut self, params: ShapeParameters) -> Result<Code> {
        params.validate(self.max_width)?;
        self.canonical(params.p)?;
        self.canonical(params.q)?;
        product_code(self.cached(params.p)?, self.cached(params.q)?, params)
    }

    fn cached(&self, width: usize) -> Result<&Code> {
        self.canonical
            .get(width)
            .and_then(Option::as_ref)
            .ok_or_else(|| Error::degenerate(format!("no canonical {}-bit code", width)))
    }
}
