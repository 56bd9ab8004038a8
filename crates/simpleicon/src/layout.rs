//! # Pixel layouts
//!
//! The flat bit sequence of a record is expanded into a [`Grid`] in one of
//! two ways, selected by the format version:
//!
//! - Version 1 ([`Layout::RowMajor`]) stores one row after the other.
//! - Every other version ([`Layout::Banded`]) splits the image into vertical
//!   bands of [`BAND_WIDTH`] columns. The bands are stored left to right,
//!   and within a band the rows are stored top to bottom. The last band is
//!   narrower if the width is not a multiple of [`BAND_WIDTH`].

use displaydoc::Display;
use thiserror::Error;

use crate::{header::FormatVersion, raster::Grid};

/// The number of columns in a band of the banded layout
pub const BAND_WIDTH: usize = 8;

/// Error when laying out the pixels of an icon
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Pixel data is too short: need {needed} bits, found {available}
    DataTooShort {
        /// The number of bits required by the dimensions
        needed: usize,
        /// The number of bits in the record
        available: usize,
    },
    /// Icon of {width}x{height} pixels has rows or columns, but no cells
    NoCells {
        /// The number of columns
        width: usize,
        /// The number of rows
        height: usize,
    },
}

/// The order of the pixels in the flat bit sequence
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Layout {
    /// Rows stored one after the other
    RowMajor,
    /// Vertical bands of 8 columns, each stored row by row
    Banded,
}

impl Layout {
    /// Select the layout for a format version
    pub fn for_version(version: FormatVersion) -> Self {
        if version == FormatVersion::ROW_MAJOR {
            Self::RowMajor
        } else {
            Self::Banded
        }
    }

    /// Expand a flat bit sequence into a `width` by `height` grid
    ///
    /// Bits beyond `width * height` are ignored. A grid where exactly one of
    /// the dimensions is zero is rejected, since it would still draw lines.
    pub fn decode(self, width: usize, height: usize, bits: &[u8]) -> Result<Grid, LayoutError> {
        if (width == 0) != (height == 0) {
            return Err(LayoutError::NoCells { width, height });
        }
        let needed = width.saturating_mul(height);
        let available = bits.len();
        if available < needed {
            return Err(LayoutError::DataTooShort { needed, available });
        }
        if available > needed {
            log::debug!("Ignoring {} trailing bits", available - needed);
        }

        match self {
            Self::RowMajor => Ok(row_major(width, height, &bits[..needed])),
            Self::Banded => banded(width, height, bits),
        }
    }
}

fn row_major(width: usize, height: usize, bits: &[u8]) -> Grid {
    let mut grid = Grid::new(width, height);
    for (y, row) in bits.chunks_exact(width.max(1)).take(height).enumerate() {
        for (x, bit) in row.iter().copied().enumerate() {
            grid.set(x, y, bit);
        }
    }
    grid
}

fn banded(width: usize, height: usize, bits: &[u8]) -> Result<Grid, LayoutError> {
    let mut grid = Grid::new(width, height);
    let mut iter = bits.iter().copied();
    let mut next = || {
        iter.next().ok_or(LayoutError::DataTooShort {
            needed: width * height,
            available: bits.len(),
        })
    };

    for band in (0..width).step_by(BAND_WIDTH) {
        let end = (band + BAND_WIDTH).min(width);
        for y in 0..height {
            for x in band..end {
                grid.set(x, y, next()?);
            }
        }
    }
    Ok(grid)
}
