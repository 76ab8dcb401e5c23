//! # Large-Gap Gray Codes
//!
//! A cyclic binary Gray code orders all `2^w` words of width `w` so that neighbours
//! (including the last and first word) differ in exactly one bit. A **large-gap** Gray code
//! additionally keeps every bit position from flipping often: the *gap* of a bit is the
//! number of steps between two consecutive flips of that bit, and the quality of a code is
//! measured by its minimum gap (higher is better) and maximum gap over all bit positions.
//!
//! ## Product construction
//! Wide codes are built from two smaller codes: a *low* code `A` of width `p` and a *high*
//! code `B` of width `q`, with `1 <= q <= p`. Write `M = 2^q` and pick odd `r + s = M`. The
//! transition sequence of the new code interleaves those of `A` and `B`, following a periodic
//! word of length `M` that holds `r` low steps and `s` high steps spread as evenly as
//! possible. Every pair of an `A` word and a `B` word is visited exactly once, so the result
//! is a `(p + q)`-bit Gray code. Its gaps obey
//!
//! ```text
//! min_gap >= min(floor(gA * M / r), floor(gB * M / s))
//! max_gap <= max(ceil(GA * M / r), ceil(GB * M / s))
//! ```
//!
//! where `gA`, `GA` and `gB`, `GB` are the minimum and maximum gaps of `A` and `B`.
//!
//! The canonical family uses the binary-reflected code for widths 1 and 2 and fixed base codes
//! with the best possible minimum gap for widths 3 to 6. Every wider width is the product of
//! narrower canonical codes, chosen from a table of `(p, q, r, s)` tuples.
//!
//! ## Example Usage
//! ```rust
//! use lggc::large_gap::{compute_gaps, CodeBuilder, ShapeParameters};
//!
//! let mut builder = CodeBuilder::new();
//! let code = builder.build_canonical(7).unwrap();
//! assert_eq!(code.len(), 128);
//! assert!(code.validate().is_ok());
//!
//! let stats = compute_gaps(&code).unwrap();
//! assert_eq!((stats.min_gap, stats.max_gap), (5, 11));
//!
//! let code = builder
//!     .build_from_parameters(ShapeParameters::new(4, 3, 5, 3))
//!     .unwrap();
//! let stats = compute_gaps(&code).unwrap();
//! assert_eq!((stats.width, stats.min_gap, stats.max_gap), (7, 3, 11));
//! ```

pub mod builder;
pub mod code;
pub mod config;
pub mod gaps;
pub mod params;
pub mod render;
pub mod sweep;

pub use builder::{
    base_transitions, canonical_parameters, product_code, CodeBuilder, FIRST_PRODUCT_WIDTH,
};
pub use code::{Code, Codeword};
pub use config::{LggcConfig, DEFAULT_MAX_WIDTH, DEFAULT_MIN_WIDTH, MAX_SUPPORTED_WIDTH};
pub use gaps::{compute_gaps, gap_record, gap_records, statistics_at, GapRecord, Statistics};
pub use params::ShapeParameters;
pub use render::Layout;
#[cfg(feature = "parallel")]
pub use sweep::{par_compute_all_statistics, par_statistics};
pub use sweep::{compute_all_statistics, StatisticsSweep, WidthRange};
