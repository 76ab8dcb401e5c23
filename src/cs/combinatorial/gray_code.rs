//! Binary-reflected Gray code, the seed of the large-gap family.
//!
//! # Example
//! ```
//! use lggc::gray_code::{reflected_code, reflected_values};
//!
//! // For n=2, the sequence is [0, 1, 3, 2].
//! assert_eq!(reflected_values(2), vec![0, 1, 3, 2]);
//!
//! let code = reflected_code(3).unwrap();
//! assert_eq!(code.values().collect::<Vec<_>>(), vec![0, 1, 3, 2, 6, 7, 5, 4]);
//! ```

use crate::cs::combinatorial::large_gap::Code;
use crate::cs::error::{Error, Result};

/// Returns the 2^n reflected Gray code values, `i ^ (i >> 1)` for i in [0 .. 2^n).
pub fn reflected_values(n: usize) -> Vec<u64> {
    let size = 1u64 << n;
    (0..size).map(|i| i ^ (i >> 1)).collect()
}

/// Returns the reflected Gray code of width `n` as a [`Code`].
pub fn reflected_code(n: usize) -> Result<Code> {
    if n == 0 || n >= u64::BITS as usize {
        return Err(Error::unsupported_width(n, u64::BITS as usize - 1));
    }
    Code::from_values(n, &reflected_values(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflected_n2() {
        assert_eq!(reflected_values(2), vec![0, 1, 3, 2]);
    }

    #[test]
    fn test_reflected_n3() {
        // The classic n=3 sequence: 0,1,3,2,6,7,5,4
        assert_eq!(reflected_values(3), vec![0, 1, 3, 2, 6, 7, 5, 4]);
    }

    #[test]
    fn test_reflected_n0() {
        // 2^0 = 1 code: [0]
        assert_eq!(reflected_values(0), vec![0]);
        assert!(matches!(reflected_code(0), Err(Error::InvalidWidth { .. })));
    }

    #[test]
    fn test_reflected_code_is_gray() {
        for n in 1..=10 {
            let code = reflected_code(n).unwrap();
            assert_eq!(code.width(), n);
            assert_eq!(code.len(), 1 << n);
            assert!(code.validate().is_ok());
        }
    }
}
