//! Property checks over random shapes and rotations.

use lggc::large_gap::{compute_gaps, gap_records, CodeBuilder, ShapeParameters};
use proptest::prelude::*;

/// Valid shapes up to 12 bits: `r` odd, `s = 2^q - r`.
fn shape() -> impl Strategy<Value = ShapeParameters> {
    (1usize..=4).prop_flat_map(|q| {
        (q..=8usize, 0..(1usize << (q - 1))).prop_map(move |(p, k)| {
            let r = 2 * k + 1;
            ShapeParameters::new(p, q, r, (1 << q) - r)
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn product_codes_are_gray_codes(params in shape()) {
        let mut builder = CodeBuilder::new();
        let code = builder.build_from_parameters(params).unwrap();
        prop_assert_eq!(code.width(), params.width());
        prop_assert_eq!(code.len(), 1 << params.width());
        prop_assert!(code.validate().is_ok());
        prop_assert_eq!(code.value(0), 0);
    }

    #[test]
    fn product_codes_meet_their_bounds(params in shape()) {
        let mut builder = CodeBuilder::new();
        let code = builder.build_from_parameters(params).unwrap();
        let stats = compute_gaps(&code).unwrap();
        let (min_bound, max_bound) = builder.gap_bounds(params).unwrap();
        prop_assert!(stats.min_gap >= min_bound, "{} min {} < {}", params, stats.min_gap, min_bound);
        prop_assert!(stats.max_gap <= max_bound, "{} max {} > {}", params, stats.max_gap, max_bound);
    }

    #[test]
    fn statistics_survive_rotation(width in 1usize..=10, shift in 0usize..1024) {
        let mut builder = CodeBuilder::new();
        let code = builder.build_canonical(width).unwrap();
        let rotated = code.rotated(shift % code.len());
        prop_assert!(rotated.validate().is_ok());
        prop_assert_eq!(compute_gaps(&rotated).unwrap(), compute_gaps(&code).unwrap());
    }

    #[test]
    fn canonical_builds_repeat(width in 1usize..=12) {
        let first = CodeBuilder::new().build_canonical(width).unwrap();
        let second = CodeBuilder::new().build_canonical(width).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(gap_records(&first).unwrap(), gap_records(&second).unwrap());
    }

    #[test]
    fn parameters_parse_back(params in shape()) {
        let parsed: ShapeParameters = params.to_string().parse().unwrap();
        prop_assert_eq!(parsed, params);
    }
}
