//! Connected component regression test
//!
//! Small hand-drawn shapes with known component counts, sizes and boxes.
//!
//! Run with:
//! ```
//! cargo test -p bwlabel-region --test conncomp_reg
//! ```

use bwlabel_core::{BinaryGrid, BoundingBox};
use bwlabel_region::{Labeling, label_components};
use bwlabel_test::{RegParams, init_test_logging, parse_grid};

fn label(text: &str) -> Labeling {
    let grid = parse_grid(text).expect("parse fixture");
    label_components(&grid).expect("label fixture")
}

#[test]
fn conncomp_reg() {
    init_test_logging();
    let mut rp = RegParams::new("conncomp");

    // --- Plus shape: one component filling its 3x3 box ---
    let plus = label(
        "
        .#.
        ###
        .#.
        ",
    );
    rp.compare_values(1.0, plus.component_count() as f64, 0.0);
    let c = plus.components[0];
    rp.compare_values(5.0, c.pixel_count as f64, 0.0);
    rp.check(c.top_left() == (0, 0), "plus top-left is (0, 0)");
    rp.check(c.bottom_right() == (2, 2), "plus bottom-right is (2, 2)");

    // --- Two disjoint single pixels ---
    let corners = label(
        "
        #..
        ...
        ..#
        ",
    );
    rp.compare_values(2.0, corners.component_count() as f64, 0.0);
    for c in &corners.components {
        rp.compare_values(1.0, c.pixel_count as f64, 0.0);
    }
    rp.check(
        corners.components[0].bounds == BoundingBox::from_point(0, 0),
        "first corner at (0, 0)",
    );
    rp.check(
        corners.components[1].bounds == BoundingBox::from_point(2, 2),
        "second corner at (2, 2)",
    );

    // --- Diagonal pair: 4-connectivity keeps them apart ---
    let diagonal = label(
        "
        #.
        .#
        ",
    );
    rp.compare_values(2.0, diagonal.component_count() as f64, 0.0);
    rp.check(
        diagonal.components.iter().all(|c| c.pixel_count == 1),
        "diagonal components are single pixels",
    );

    // --- Checkerboard: every foreground pixel is its own component ---
    let checker = label(
        "
        #.#.#
        .#.#.
        #.#.#
        ",
    );
    rp.compare_values(8.0, checker.component_count() as f64, 0.0);

    // --- Ring with a hole: the hole is background, not a component ---
    let ring = label(
        "
        #####
        #...#
        #.#.#
        #...#
        #####
        ",
    );
    rp.compare_values(2.0, ring.component_count() as f64, 0.0);
    rp.compare_values(16.0, ring.components[0].pixel_count as f64, 0.0);
    rp.check(
        ring.components[1].bounds == BoundingBox::from_point(2, 2),
        "island inside the ring",
    );
    rp.compare_values(0.0, ring.labels.get(1, 1).unwrap_or(9) as f64, 0.0);

    // --- U shape: arms meet only on the last row ---
    let u = label(
        "
        #...#
        #...#
        #####
        ",
    );
    rp.compare_values(1.0, u.component_count() as f64, 0.0);
    rp.check(
        u.labels.as_slice().iter().all(|&l| l <= 1),
        "U shape relabeled to a single id",
    );

    // --- Comb: teeth joined by a spine on the bottom row ---
    let comb = label(
        "
        #.#.#.#.#
        #.#.#.#.#
        #########
        ",
    );
    rp.compare_values(1.0, comb.component_count() as f64, 0.0);
    rp.compare_values(19.0, comb.components[0].pixel_count as f64, 0.0);

    assert!(rp.cleanup(), "conncomp regression test failed");
}

#[test]
fn conncomp_boundaries_reg() {
    let mut rp = RegParams::new("conncomp_boundaries");

    for (rows, cols) in [(0, 0), (0, 7), (7, 0)] {
        let grid = BinaryGrid::new(rows, cols).expect("empty grid");
        let labeling = label_components(&grid).expect("label empty grid");
        rp.compare_values(0.0, labeling.component_count() as f64, 0.0);
        rp.check(labeling.components.is_empty(), "no records for empty grid");
        rp.compare_values(rows as f64, labeling.labels.rows() as f64, 0.0);
        rp.compare_values(cols as f64, labeling.labels.cols() as f64, 0.0);
    }

    let background = BinaryGrid::new(6, 9).expect("background grid");
    let labeling = label_components(&background).expect("label background");
    rp.compare_values(0.0, labeling.component_count() as f64, 0.0);
    rp.compare_values(0.0, labeling.labels.max_label() as f64, 0.0);

    let full = BinaryGrid::from_vec(4, 5, vec![true; 20]).expect("full grid");
    let labeling = label_components(&full).expect("label full grid");
    rp.compare_values(1.0, labeling.component_count() as f64, 0.0);
    rp.compare_values(20.0, labeling.components[0].pixel_count as f64, 0.0);
    rp.check(
        labeling.components[0].bounds == BoundingBox::new(0, 0, 3, 4),
        "full grid box covers everything",
    );

    let single_row = parse_grid("##.###.#").expect("row fixture");
    let labeling = label_components(&single_row).expect("label row");
    rp.compare_values(3.0, labeling.component_count() as f64, 0.0);

    let single_col = BinaryGrid::from_rows(&[[true], [false], [true], [true]]).expect("column");
    let labeling = label_components(&single_col).expect("label column");
    rp.compare_values(2.0, labeling.component_count() as f64, 0.0);
    rp.compare_values(2.0, labeling.components[1].pixel_count as f64, 0.0);

    assert!(rp.cleanup(), "conncomp_boundaries regression test failed");
}

#[test]
fn conncomp_ragged_input_reg() {
    let rows = vec![vec![true, true], vec![true]];
    let err = BinaryGrid::from_rows(&rows).unwrap_err();
    assert!(matches!(err, bwlabel_core::Error::InvalidGrid(_)));
}
