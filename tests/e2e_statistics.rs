//! End-to-end checks of the canonical family and the parameterized 16-bit codes.

use lggc::large_gap::render::{self, Layout};
use lggc::large_gap::{
    compute_all_statistics, compute_gaps, statistics_at, CodeBuilder, ShapeParameters,
    Statistics,
};
use lggc::Error;

/// (width, min gap, max gap) of the canonical codes.
const CANONICAL_GAPS: [(usize, usize, usize); 18] = [
    (3, 2, 4),
    (4, 2, 6),
    (5, 4, 8),
    (6, 4, 8),
    (7, 5, 11),
    (8, 5, 11),
    (9, 6, 15),
    (10, 7, 18),
    (11, 8, 20),
    (12, 8, 20),
    (13, 8, 20),
    (14, 9, 23),
    (15, 10, 28),
    (16, 11, 29),
    (17, 11, 29),
    (18, 12, 32),
    (19, 12, 32),
    (20, 13, 36),
];

#[test]
fn full_range_report() {
    let rows: Vec<Statistics> = compute_all_statistics(3, 20)
        .unwrap()
        .collect::<lggc::Result<_>>()
        .unwrap();

    assert_eq!(rows.len(), 18);
    for (row, &(width, min_gap, max_gap)) in rows.iter().zip(CANONICAL_GAPS.iter()) {
        assert_eq!(row.width, width);
        assert_eq!(row.length, 1 << width);
        assert_eq!((row.min_gap, row.max_gap), (min_gap, max_gap), "width {}", width);
    }
    assert!(rows.windows(2).all(|pair| pair[0].width < pair[1].width));

    let mut table = Vec::new();
    render::write_statistics_table(&mut table, rows).unwrap();
    let table = String::from_utf8(table).unwrap();
    assert_eq!(table.lines().count(), 19);
    assert_eq!(table.lines().nth(14), Some("   16     65536      11      29"));
}

#[test]
fn sixteen_bit_parameter_sets() {
    let mut builder = CodeBuilder::new();
    let canonical = compute_gaps(builder.canonical(16).unwrap()).unwrap();

    let expected = [
        (ShapeParameters::new(14, 2, 3, 1), 8, 31),
        (ShapeParameters::new(8, 8, 129, 127), 9, 23),
        (ShapeParameters::new(9, 7, 65, 63), 10, 30),
        (ShapeParameters::new(11, 5, 21, 11), 11, 31),
    ];
    for (params, min_gap, max_gap) in expected {
        let code = builder.build_from_parameters(params).unwrap();
        assert_eq!(code.width(), 16);
        assert_eq!(code.len(), 65536);

        let stats = statistics_at(&code, 16).unwrap();
        assert_eq!((stats.min_gap, stats.max_gap), (min_gap, max_gap), "{}", params);

        // These tuples meet both bounds exactly.
        assert_eq!(builder.gap_bounds(params).unwrap(), (min_gap, max_gap));

        assert!(matches!(
            statistics_at(&code, 13),
            Err(Error::InvalidWidth { width: 13, .. })
        ));
    }

    // (11, 5, 23, 9) is how the canonical 16-bit code is made.
    let code = builder
        .build_from_parameters(ShapeParameters::new(11, 5, 23, 9))
        .unwrap();
    assert_eq!(statistics_at(&code, 16).unwrap(), canonical);
    assert_eq!(&code, builder.canonical(16).unwrap());

    let thirteen = compute_gaps(builder.canonical(13).unwrap()).unwrap();
    assert_eq!((thirteen.min_gap, thirteen.max_gap), (8, 20));
}

#[test]
fn shown_seven_bit_code() {
    let mut builder = CodeBuilder::new();
    let code = builder.build_canonical(7).unwrap();
    let stats = compute_gaps(&code).unwrap();
    assert_eq!((stats.min_gap, stats.max_gap), (5, 11));
    let text = render::render(&code, Layout::Horizontal);

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 8);
    assert!(lines[..7].iter().all(|line| line.len() == 128));
    assert_eq!(lines[7], "");
    assert_eq!(render::transpose(&text), render::vertical(&code));

    // Every bit run in the printout is between 5 and 11 characters long.
    for line in &lines[..7] {
        let doubled = format!("{}{}", line, line);
        let bytes = doubled.as_bytes();
        let start = (1..=line.len())
            .find(|&i| bytes[i] != bytes[i - 1])
            .unwrap();
        let mut run = 1;
        for i in start + 1..start + line.len() {
            if bytes[i] == bytes[i - 1] {
                run += 1;
            } else {
                assert!((5..=11).contains(&run), "run of {}", run);
                run = 1;
            }
        }
    }
}

#[test]
fn code_files() {
    let dir = std::env::temp_dir().join(format!("lggc_e2e_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let mut builder = CodeBuilder::new();
    let code = builder.build_canonical(13).unwrap();
    for layout in [Layout::Vertical, Layout::CArray] {
        let path = dir.join(layout.file_name(13));
        render::write_to_file(&path, &code, layout).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render::render(&code, layout));
    }

    let c_file = std::fs::read_to_string(dir.join("large_gap_gray_code_13bit.c")).unwrap();
    assert!(c_file.starts_with("unsigned int lggc_13[8192] = {\n\t0x0000,\n"));
    assert_eq!(c_file.lines().count(), 8192 + 2);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn errors_surface_unchanged() {
    let mut builder = CodeBuilder::new();
    assert!(matches!(
        builder.build_canonical(25),
        Err(Error::InvalidWidth { width: 25, .. })
    ));
    assert!(matches!(
        builder.build_from_parameters(ShapeParameters::new(14, 2, 1, 1)),
        Err(Error::InvalidParameters { .. })
    ));
    assert!(matches!(
        compute_all_statistics(0, 20),
        Err(Error::InvalidWidth { width: 0, .. })
    ));
    assert!(matches!(
        compute_all_statistics(12, 3),
        Err(Error::InvalidRange { min: 12, max: 3 })
    ));
}
