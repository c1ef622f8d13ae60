//! Deterministic and randomized visit orders over grid cells.
//!
//! A traversal is a permutation of the flat indices `[0, width*height)`
//! of a rectangular grid. Every pattern except
//! [`TraversalPattern::RandomWalk`] is a pure function of the
//! dimensions; random-walk draws a uniform permutation from an injected
//! random source so callers control seeding.

use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// A named strategy for ordering visits to all cells of a grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TraversalPattern {
    /// Rows ascending, columns ascending within a row.
    #[default]
    RowMajor,
    /// Columns ascending, rows ascending within a column.
    ColumnMajor,
    /// Ring peeling from the outside in, clockwise from the top-left.
    SpiralClockwise,
    /// Ring peeling from the outside in, counter-clockwise from the
    /// top-left.
    SpiralCounter,
    /// Anti-diagonal sweeps starting at the top-left corner.
    Diagonal,
    /// Non-overlapping 2x2 blocks, block rows before block columns.
    Block2x2,
    /// Every even-parity cell in row-major order, then every odd one.
    Checkerboard,
    /// A uniformly random permutation.
    RandomWalk,
}

impl TraversalPattern {
    /// All patterns, in the order the selection UI lists them.
    pub const ALL: [TraversalPattern; 8] = [
        TraversalPattern::RowMajor,
        TraversalPattern::ColumnMajor,
        TraversalPattern::SpiralClockwise,
        TraversalPattern::SpiralCounter,
        TraversalPattern::Diagonal,
        TraversalPattern::Block2x2,
        TraversalPattern::Checkerboard,
        TraversalPattern::RandomWalk,
    ];

    /// The pattern's canonical name.
    pub fn name(self) -> &'static str {
        match self {
            Self::RowMajor => "row-major",
            Self::ColumnMajor => "column-major",
            Self::SpiralClockwise => "spiral-clockwise",
            Self::SpiralCounter => "spiral-counter",
            Self::Diagonal => "diagonal",
            Self::Block2x2 => "block-2x2",
            Self::Checkerboard => "checkerboard",
            Self::RandomWalk => "random-walk",
        }
    }

    /// Parse a pattern name.
    ///
    /// Unrecognized names fall back to [`RowMajor`](Self::RowMajor)
    /// rather than failing; pattern names arrive from UI strings.
    pub fn from_name(name: &str) -> Self {
        match name {
            "row-major" => Self::RowMajor,
            "column-major" => Self::ColumnMajor,
            "spiral-clockwise" => Self::SpiralClockwise,
            "spiral-counter" => Self::SpiralCounter,
            "diagonal" => Self::Diagonal,
            "block-2x2" => Self::Block2x2,
            "checkerboard" => Self::Checkerboard,
            "random-walk" => Self::RandomWalk,
            _ => Self::RowMajor,
        }
    }
}

impl fmt::Display for TraversalPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Visit order for every cell of a `width * height` grid.
///
/// Returns a permutation of the flat row-major indices
/// `[0, width * height)`. Deterministic patterns never touch `rng`;
/// [`TraversalPattern::RandomWalk`] shuffles with it, so a fixed seed
/// reproduces the same walk. Zero `width` or `height` yields an empty
/// sequence.
///
/// # Examples
///
/// ```
/// use tessera_grid::{generate_sequence, TraversalPattern};
///
/// let mut rng = rand::thread_rng();
/// let seq = generate_sequence(TraversalPattern::SpiralClockwise, 3, 3, &mut rng);
/// assert_eq!(seq, vec![0, 1, 2, 5, 8, 7, 6, 3, 4]);
/// ```
pub fn generate_sequence<R: Rng + ?Sized>(
    pattern: TraversalPattern,
    width: u32,
    height: u32,
    rng: &mut R,
) -> Vec<usize> {
    if width == 0 || height == 0 {
        return Vec::new();
    }
    match pattern {
        TraversalPattern::RowMajor => row_major(width, height),
        TraversalPattern::ColumnMajor => column_major(width, height),
        TraversalPattern::SpiralClockwise => spiral_clockwise(width, height),
        TraversalPattern::SpiralCounter => spiral_counter(width, height),
        TraversalPattern::Diagonal => diagonal(width, height),
        TraversalPattern::Block2x2 => block_2x2(width, height),
        TraversalPattern::Checkerboard => checkerboard(width, height),
        TraversalPattern::RandomWalk => random_walk(width, height, rng),
    }
}

fn row_major(width: u32, height: u32) -> Vec<usize> {
    (0..width as usize * height as usize).collect()
}

fn column_major(width: u32, height: u32) -> Vec<usize> {
    let w = width as usize;
    let h = height as usize;
    let mut seq = Vec::with_capacity(w * h);
    for col in 0..w {
        for row in 0..h {
            seq.push(row * w + col);
        }
    }
    seq
}

/// Peel rings from the outside in. Signed bounds: the inner rectangle
/// collapses by driving `bottom` or `right` below zero on 1-wide grids.
fn spiral_clockwise(width: u32, height: u32) -> Vec<usize> {
    let w = i64::from(width);
    let h = i64::from(height);
    let mut seq = Vec::with_capacity((w * h) as usize);
    let (mut top, mut bottom, mut left, mut right) = (0i64, h - 1, 0i64, w - 1);
    while top <= bottom && left <= right {
        for col in left..=right {
            seq.push((top * w + col) as usize);
        }
        for row in (top + 1)..=bottom {
            seq.push((row * w + right) as usize);
        }
        // Skip the return legs when the ring is a single row or column.
        if top < bottom {
            for col in (left..right).rev() {
                seq.push((bottom * w + col) as usize);
            }
        }
        if left < right {
            for row in ((top + 1)..bottom).rev() {
                seq.push((row * w + left) as usize);
            }
        }
        top += 1;
        bottom -= 1;
        left += 1;
        right -= 1;
    }
    seq
}

/// Same ring peeling as [`spiral_clockwise`], lap order reversed: left
/// column down, bottom row right, right column up, top row left.
fn spiral_counter(width: u32, height: u32) -> Vec<usize> {
    let w = i64::from(width);
    let h = i64::from(height);
    let mut seq = Vec::with_capacity((w * h) as usize);
    let (mut top, mut bottom, mut left, mut right) = (0i64, h - 1, 0i64, w - 1);
    while top <= bottom && left <= right {
        for row in top..=bottom {
            seq.push((row * w + left) as usize);
        }
        for col in (left + 1)..=right {
            seq.push((bottom * w + col) as usize);
        }
        if left < right {
            for row in (top..bottom).rev() {
                seq.push((row * w + right) as usize);
            }
        }
        if top < bottom {
            for col in ((left + 1)..right).rev() {
                seq.push((top * w + col) as usize);
            }
        }
        top += 1;
        bottom -= 1;
        left += 1;
        right -= 1;
    }
    seq
}

fn diagonal(width: u32, height: u32) -> Vec<usize> {
    let w = width as usize;
    let h = height as usize;
    let mut seq = Vec::with_capacity(w * h);
    for d in 0..(w + h - 1) {
        for row in 0..h {
            if d >= row {
                let col = d - row;
                if col < w {
                    seq.push(row * w + col);
                }
            }
        }
    }
    seq
}

/// Block emit order is top-left, bottom-left, bottom-right, top-right;
/// partial blocks at the grid edge emit only the cells that exist.
fn block_2x2(width: u32, height: u32) -> Vec<usize> {
    let w = width as usize;
    let h = height as usize;
    let mut seq = Vec::with_capacity(w * h);
    let mut row = 0;
    while row < h {
        let mut col = 0;
        while col < w {
            seq.push(row * w + col);
            if row + 1 < h {
                seq.push((row + 1) * w + col);
            }
            if row + 1 < h && col + 1 < w {
                seq.push((row + 1) * w + col + 1);
            }
            if col + 1 < w {
                seq.push(row * w + col + 1);
            }
            col += 2;
        }
        row += 2;
    }
    seq
}

fn checkerboard(width: u32, height: u32) -> Vec<usize> {
    let w = width as usize;
    let h = height as usize;
    let mut seq = Vec::with_capacity(w * h);
    for parity in [0, 1] {
        for row in 0..h {
            for col in 0..w {
                if (row + col) % 2 == parity {
                    seq.push(row * w + col);
                }
            }
        }
    }
    seq
}

fn random_walk<R: Rng + ?Sized>(width: u32, height: u32, rng: &mut R) -> Vec<usize> {
    let mut seq = row_major(width, height);
    seq.shuffle(rng);
    seq
}
