//! Cyclic Gray code storage.
//!
//! A [`Code`] keeps all of its words in one flat bit vector, word `i` occupying bits
//! `i * width .. (i + 1) * width`. Bit `j` of a word is bit position `j` of the codeword,
//! least significant first.

use crate::cs::error::{Error, Result};
use bitvec::prelude::*;

/// A single codeword, borrowed from the storage of its [`Code`].
pub type Codeword = BitSlice<usize, Lsb0>;

/// Widest code whose words still fit in a `u64` and whose length fits in a `usize`.
const MAX_VALUE_WIDTH: usize = 63;

/// An ordered cyclic sequence of `2^width` codewords of `width` bits each.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    width: usize,
    bits: BitVec<usize, Lsb0>,
}

impl Code {
    /// Wraps raw storage produced by a builder.
    pub(crate) fn from_bits(width: usize, bits: BitVec<usize, Lsb0>) -> Self {
        debug_assert!(width >= 1 && width <= MAX_VALUE_WIDTH);
        debug_assert_eq!(bits.len(), width << width);
        Code { width, bits }
    }

    /// Creates a code from integer codewords.
    ///
    /// Exactly `2^width` values are required and none may have bits set at or above
    /// `width`. The sequence is not checked for the Gray property; see [`Code::validate`].
    ///
    /// # Example
    /// ```
    /// use lggc::large_gap::Code;
    ///
    /// let code = Code::from_values(2, &[0, 1, 3, 2]).unwrap();
    /// assert_eq!(code.values().collect::<Vec<_>>(), vec![0, 1, 3, 2]);
    /// assert!(Code::from_values(2, &[0, 1, 3]).is_err());
    /// ```
    pub fn from_values(width: usize, values: &[u64]) -> Result<Self> {
        if width == 0 || width > MAX_VALUE_WIDTH {
            return Err(Error::unsupported_width(width, MAX_VALUE_WIDTH));
        }
        let length = 1usize << width;
        if values.len() != length {
            return Err(Error::degenerate(format!(
                "a {}-bit code needs {} words, got {}",
                width,
                length,
                values.len()
            )));
        }

        let mut bits = BitVec::with_capacity(length * width);
        for (index, &value) in values.iter().enumerate() {
            if value >> width != 0 {
                return Err(Error::degenerate(format!(
                    "word {} ({:#x}) does not fit in {} bits",
                    index, value, width
                )));
            }
            bits.extend_from_bitslice(&value.view_bits::<Lsb0>()[..width]);
        }

        Ok(Code { width, bits })
    }

    /// Creates the code that starts at the all-zero word and flips bit `transitions[i]` to go
    /// from word `i` to word `i + 1`.
    ///
    /// The sequence must hold `2^width` positions below `width` and lead back to zero. Like
    /// [`Code::from_values`], the words are not checked for repeats.
    ///
    /// # Example
    /// ```
    /// use lggc::large_gap::Code;
    ///
    /// let code = Code::from_transitions(2, &[0, 1, 0, 1]).unwrap();
    /// assert_eq!(code.values().collect::<Vec<_>>(), vec![0, 1, 3, 2]);
    /// assert_eq!(code.transitions().unwrap(), vec![0, 1, 0, 1]);
    /// ```
    pub fn from_transitions(width: usize, transitions: &[usize]) -> Result<Self> {
        if width == 0 || width > MAX_VALUE_WIDTH {
            return Err(Error::unsupported_width(width, MAX_VALUE_WIDTH));
        }
        let length = 1usize << width;
        if transitions.len() != length {
            return Err(Error::degenerate(format!(
                "a {}-bit code needs {} transitions, got {}",
                width,
                length,
                transitions.len()
            )));
        }

        let mut word = bitvec![usize, Lsb0; 0; width];
        let mut bits = BitVec::with_capacity(length * width);
        for (index, &position) in transitions.iter().enumerate() {
            if position >= width {
                return Err(Error::degenerate(format!(
                    "transition {} flips bit {} of a {}-bit code",
                    index, position, width
                )));
            }
            bits.extend_from_bitslice(word.as_bitslice());
            let flipped = !word[position];
            word.set(position, flipped);
        }
        if word.any() {
            return Err(Error::degenerate("transitions do not lead back to zero"));
        }

        Ok(Code { width, bits })
    }

    /// The transition sequence: entry `i` is the bit that differs between word `i` and its
    /// cyclic successor.
    ///
    /// Fails with [`Error::DegenerateCode`] on a pair that does not differ in exactly one bit.
    pub fn transitions(&self) -> Result<Vec<usize>> {
        let length = self.len();
        (0..length)
            .map(|index| {
                let next = (index + 1) % length;
                let mut changed = self
                    .word(index)
                    .iter()
                    .by_vals()
                    .zip(self.word(next).iter().by_vals())
                    .enumerate()
                    .filter(|(_, (a, b))| a != b)
                    .map(|(position, _)| position);
                match (changed.next(), changed.next()) {
                    (Some(position), None) => Ok(position),
                    _ => Err(Error::degenerate(format!(
                        "words {} and {} do not differ in one bit",
                        index, next
                    ))),
                }
            })
            .collect()
    }

    /// Bit width of every codeword.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of codewords, `2^width`.
    pub fn len(&self) -> usize {
        self.bits.len() / self.width
    }

    /// Always false: a code holds at least the two words of width 1.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Borrows codeword `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn word(&self, index: usize) -> &Codeword {
        &self.bits[index * self.width..(index + 1) * self.width]
    }

    /// Value of bit `position` in codeword `index`.
    pub fn bit(&self, index: usize, position: usize) -> bool {
        debug_assert!(position < self.width);
        self.bits[index * self.width + position]
    }

    /// Codeword `index` as an integer.
    pub fn value(&self, index: usize) -> u64 {
        self.word(index).load_le::<u64>()
    }

    /// Iterates over the codewords in sequence order.
    pub fn words(&self) -> impl Iterator<Item = &Codeword> + '_ {
        self.bits.chunks_exact(self.width)
    }

    /// Iterates over the codewords as integers.
    pub fn values(&self) -> impl Iterator<Item = u64> + '_ {
        self.words().map(|word| word.load_le::<u64>())
    }

    /// The same cycle started `shift` words later.
    pub fn rotated(&self, shift: usize) -> Code {
        let mut bits = self.bits.clone();
        bits.rotate_left((shift % self.len()) * self.width);
        Code {
            width: self.width,
            bits,
        }
    }

    /// Checks that the code is a cyclic Gray code: every value of the width appears exactly
    /// once and each word differs from its successor (the last from the first) in one bit.
    pub fn validate(&self) -> Result<()> {
        let length = self.len();
        if length != 1 << self.width {
            return Err(Error::degenerate(format!(
                "a {}-bit code needs {} words, got {}",
                self.width,
                1usize << self.width,
                length
            )));
        }

        let mut seen = bitvec![0; length];
        for (index, word) in self.words().enumerate() {
            let value = word.load_le::<usize>();
            if seen.replace(value, true) {
                return Err(Error::degenerate(format!(
                    "value {:#x} repeats at word {}",
                    value, index
                )));
            }

            let next = self.word((index + 1) % length);
            let changed = word
                .iter()
                .by_vals()
                .zip(next.iter().by_vals())
                .filter(|(a, b)| a != b)
                .count();
            if changed != 1 {
                return Err(Error::degenerate(format!(
                    "words {} and {} differ in {} bits",
                    index,
                    (index + 1) % length,
                    changed
                )));
            }
        }

        Ok(())
    }
}
