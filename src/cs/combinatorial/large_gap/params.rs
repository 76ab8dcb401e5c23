//! Shape parameters of the product construction.

use std::fmt;
use std::str::FromStr;

use crate::cs::combinatorial::large_gap::gaps::Statistics;
use crate::cs::error::{Error, Result};
use bitvec::prelude::*;

/// The `(p, q, r, s)` tuple selecting one product code.
///
/// * `p` - width of the low component code
/// * `q` - width of the high component code, `1 <= q <= p`
/// * `r` - low steps per period of `2^q` steps, odd
/// * `s` - high steps per period, odd, `r + s = 2^q`
///
/// The resulting code has width `p + q`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeParameters {
    pub p: usize,
    pub q: usize,
    pub r: usize,
    pub s: usize,
}

impl ShapeParameters {
    pub const fn new(p: usize, q: usize, r: usize, s: usize) -> Self {
        ShapeParameters { p, q, r, s }
    }

    /// Width of the code these parameters build.
    pub fn width(&self) -> usize {
        self.p.saturating_add(self.q)
    }

    /// Length of one period of the step word, `2^q`.
    pub fn period(&self) -> usize {
        1 << self.q
    }

    /// Checks the tuple against the domain of the construction for codes of at most
    /// `max_width` bits.
    pub fn validate(&self, max_width: usize) -> Result<()> {
        if self.q == 0 {
            return Err(Error::invalid_parameters(*self, "q must be at least 1"));
        }
        if self.q > self.p {
            return Err(Error::invalid_parameters(*self, "q must not exceed p"));
        }
        if self.width() > max_width {
            return Err(Error::invalid_parameters(
                *self,
                format!("p + q must not exceed {}", max_width),
            ));
        }
        if self.r % 2 == 0 || self.s % 2 == 0 {
            return Err(Error::invalid_parameters(*self, "r and s must be odd"));
        }
        if self.r.checked_add(self.s) != Some(self.period()) {
            return Err(Error::invalid_parameters(
                *self,
                format!("r + s must equal 2^q = {}", self.period()),
            ));
        }
        Ok(())
    }

    /// One period of the step word: bit `i` is set when step `i` advances the low code.
    ///
    /// The `r` low steps are spread evenly over the period, step `i` being low exactly when
    /// `floor((i + 1) * r / 2^q) - floor(i * r / 2^q) == 1`.
    ///
    /// # Example
    /// ```
    /// use lggc::large_gap::ShapeParameters;
    ///
    /// let word = ShapeParameters::new(4, 3, 5, 3).step_word();
    /// let steps: String = word.iter().map(|low| if *low { 'L' } else { 'H' }).collect();
    /// assert_eq!(steps, "HLHLLHLL");
    /// ```
    pub fn step_word(&self) -> BitVec<usize, Lsb0> {
        let period = self.period();
        (0..period)
            .map(|i| ((i + 1) * self.r) / period - (i * self.r) / period == 1)
            .collect()
    }

    /// Lower bound on the minimum gap of the product of codes with the given statistics.
    pub fn min_gap_bound(&self, low: &Statistics, high: &Statistics) -> usize {
        let period = self.period();
        (low.min_gap * period / self.r).min(high.min_gap * period / self.s)
    }

    /// Upper bound on the maximum gap of the product of codes with the given statistics.
    pub fn max_gap_bound(&self, low: &Statistics, high: &Statistics) -> usize {
        let period = self.period();
        (low.max_gap * period)
            .div_ceil(self.r)
            .max((high.max_gap * period).div_ceil(self.s))
    }
}

impl fmt::Display for ShapeParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.p, self.q, self.r, self.s)
    }
}

impl FromStr for ShapeParameters {
    type Err = Error;

    /// Parses `"p,q,r,s"`; surrounding parentheses and spaces are accepted.
    fn from_str(s: &str) -> Result<Self> {
        let inner = s.trim().trim_start_matches('(').trim_end_matches(')');
        let fields = inner
            .split(',')
            .map(|field| field.trim().parse::<usize>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| Error::ParseParameters(s.to_string()))?;

        match fields.as_slice() {
            &[p, q, r, s] => Ok(ShapeParameters::new(p, q, r, s)),
            _ => Err(Error::ParseParameters(s.to_string())),
        }
    }
}
