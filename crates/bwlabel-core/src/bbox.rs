//! BoundingBox - Axis-aligned component extents
//!
//! Corners are inclusive and computed independently per axis, so neither
//! corner needs to be a foreground pixel.

/// An inclusive axis-aligned box in `(row, col)` coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    /// Smallest row
    pub min_row: u32,
    /// Smallest column
    pub min_col: u32,
    /// Largest row
    pub max_row: u32,
    /// Largest column
    pub max_col: u32,
}

impl BoundingBox {
    /// Create a box from its corners
    ///
    /// Corners are reordered per axis if given backwards.
    pub fn new(row1: u32, col1: u32, row2: u32, col2: u32) -> Self {
        Self {
            min_row: row1.min(row2),
            min_col: col1.min(col2),
            max_row: row1.max(row2),
            max_col: col1.max(col2),
        }
    }

    /// A one-pixel box
    #[inline]
    pub const fn from_point(row: u32, col: u32) -> Self {
        Self {
            min_row: row,
            min_col: col,
            max_row: row,
            max_col: col,
        }
    }

    /// Widen the box to include `(row, col)`
    #[inline]
    pub fn include(&mut self, row: u32, col: u32) {
        self.min_row = self.min_row.min(row);
        self.min_col = self.min_col.min(col);
        self.max_row = self.max_row.max(row);
        self.max_col = self.max_col.max(col);
    }

    /// `(min_row, min_col)`
    #[inline]
    pub fn top_left(&self) -> (u32, u32) {
        (self.min_row, self.min_col)
    }

    /// `(max_row, max_col)`
    #[inline]
    pub fn bottom_right(&self) -> (u32, u32) {
        (self.max_row, self.max_col)
    }

    /// Number of columns covered
    #[inline]
    pub fn width(&self) -> u32 {
        self.max_col - self.min_col + 1
    }

    /// Number of rows covered
    #[inline]
    pub fn height(&self) -> u32 {
        self.max_row - self.min_row + 1
    }

    /// Number of cells covered
    #[inline]
    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Check if a cell lies inside the box
    #[inline]
    pub fn contains(&self, row: u32, col: u32) -> bool {
        (self.min_row..=self.max_row).contains(&row)
            && (self.min_col..=self.max_col).contains(&col)
    }
}
