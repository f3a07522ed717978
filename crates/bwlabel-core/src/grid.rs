//! BinaryGrid, LabelGrid - Rectangular rasters
//!
//! Both grids store their cells row-major in a flat `Vec`, so cell
//! `(row, col)` lives at `row * cols + col`.
//!
//! # Ownership model
//!
//! A `BinaryGrid` is the immutable input of a labeling run. A `LabelGrid`
//! is owned by exactly one labeling run while it is being written and is
//! handed to the caller once the run completes.

use crate::error::{Error, Result};

/// Number of cells in a `rows x cols` grid, rejecting products that overflow.
fn cell_count(rows: u32, cols: u32) -> Result<usize> {
    (rows as usize)
        .checked_mul(cols as usize)
        .ok_or_else(|| Error::InvalidGrid(format!("{}x{} grid is too large", rows, cols)))
}

/// Convert a row length to the `u32` column count used by the grids.
fn dimension(len: usize, what: &str) -> Result<u32> {
    u32::try_from(len).map_err(|_| Error::InvalidGrid(format!("{} {} exceeds u32", what, len)))
}

/// A binary raster: each cell is foreground (`true`) or background (`false`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BinaryGrid {
    rows: u32,
    cols: u32,
    data: Vec<bool>,
}

impl BinaryGrid {
    /// Create an all-background grid
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGrid`] if `rows * cols` overflows `usize`.
    pub fn new(rows: u32, cols: u32) -> Result<Self> {
        let len = cell_count(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![false; len],
        })
    }

    /// Create a grid from a row-major buffer
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGrid`] if `data.len() != rows * cols`.
    pub fn from_vec(rows: u32, cols: u32, data: Vec<bool>) -> Result<Self> {
        let len = cell_count(rows, cols)?;
        if data.len() != len {
            return Err(Error::InvalidGrid(format!(
                "buffer holds {} cells but {}x{} needs {}",
                data.len(),
                rows,
                cols,
                len
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Create a grid from a slice of rows
    ///
    /// Every row must have the same length as the first one. An empty
    /// slice yields a `0x0` grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGrid`] naming the first row whose length
    /// differs from row 0.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * width);

        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(Error::InvalidGrid(format!(
                    "row {} has {} cells, expected {}",
                    i,
                    row.len(),
                    width
                )));
            }
            data.extend_from_slice(row);
        }

        Self::from_vec(
            dimension(rows.len(), "row count")?,
            dimension(width, "row length")?,
            data,
        )
    }

    /// Create a grid from a row-major byte mask
    ///
    /// Any non-zero byte is foreground, so both `0/1` and `0/255` masks
    /// produced by a thresholding step are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGrid`] if `bytes.len() != rows * cols`.
    pub fn from_bytes(rows: u32, cols: u32, bytes: &[u8]) -> Result<Self> {
        Self::from_vec(rows, cols, bytes.iter().map(|&b| b != 0).collect())
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// True if the grid has no cells
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a cell, or `None` if out of bounds
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> Option<bool> {
        if row < self.rows && col < self.cols {
            Some(self.data[row as usize * self.cols as usize + col as usize])
        } else {
            None
        }
    }

    /// True if the cell is foreground; out-of-bounds cells are background
    #[inline]
    pub fn is_foreground(&self, row: u32, col: u32) -> bool {
        self.get(row, col).unwrap_or(false)
    }

    /// Set a cell
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the cell is outside the grid.
    pub fn set(&mut self, row: u32, col: u32, value: bool) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.data[row as usize * self.cols as usize + col as usize] = value;
        Ok(())
    }

    /// Number of foreground cells
    pub fn foreground_count(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    /// Raw row-major cells
    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.data
    }
}

/// A label raster of the same shape as its source grid
///
/// `0` is background; positive values are component labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct LabelGrid {
    rows: u32,
    cols: u32,
    data: Vec<u32>,
}

impl LabelGrid {
    /// Create an all-background label grid
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGrid`] if `rows * cols` overflows `usize`.
    pub fn new(rows: u32, cols: u32) -> Result<Self> {
        let len = cell_count(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![0; len],
        })
    }

    /// Create a label grid from a row-major buffer
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGrid`] if `data.len() != rows * cols`.
    pub fn from_vec(rows: u32, cols: u32, data: Vec<u32>) -> Result<Self> {
        let len = cell_count(rows, cols)?;
        if data.len() != len {
            return Err(Error::InvalidGrid(format!(
                "buffer holds {} labels but {}x{} needs {}",
                data.len(),
                rows,
                cols,
                len
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// True if the grid has no cells
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a label, or `None` if out of bounds
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> Option<u32> {
        if row < self.rows && col < self.cols {
            Some(self.data[row as usize * self.cols as usize + col as usize])
        } else {
            None
        }
    }

    /// Set a label
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the cell is outside the grid.
    pub fn set(&mut self, row: u32, col: u32, label: u32) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.data[row as usize * self.cols as usize + col as usize] = label;
        Ok(())
    }

    /// Raw row-major labels
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.data
    }

    /// Raw row-major labels, mutable
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u32] {
        &mut self.data
    }

    /// Largest label present, `0` for an all-background grid
    pub fn max_label(&self) -> u32 {
        self.data.iter().copied().max().unwrap_or(0)
    }

    /// Iterate over `(row, col, label)` for every labeled cell in row-major order
    pub fn iter_labeled(&self) -> impl Iterator<Item = (u32, u32, u32)> + '_ {
        let cols = self.cols as usize;
        self.data
            .iter()
            .enumerate()
            .filter(|&(_, &label)| label > 0)
            .map(move |(i, &label)| ((i / cols) as u32, (i % cols) as u32, label))
    }
}
