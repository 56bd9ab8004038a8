//! # Decoded pixel grids

/// A grid of pixels in row-major order
///
/// Every cell is one byte, where `1` is a set pixel (ink) and any other
/// value is an unset one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Create an empty (all unset) grid with the given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    /// Create a grid from cells in row-major order
    ///
    /// Returns `None` if the number of cells does not match the dimensions.
    pub fn from_cells(width: usize, height: usize, cells: Vec<u8>) -> Option<Self> {
        (width.checked_mul(height) == Some(cells.len())).then_some(Self {
            width,
            height,
            cells,
        })
    }

    /// The number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at column `x` in row `y`
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, value: u8) {
        self.cells[y * self.width + x] = value;
    }

    /// Get a single row
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        let start = y.checked_mul(self.width)?;
        (y < self.height).then(|| &self.cells[start..start + self.width])
    }

    /// Iterate over all rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.height).map(move |y| &self.cells[y * self.width..(y + 1) * self.width])
    }

    /// The cells in row-major order
    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }

    /// Flatten the grid back into a row-major sequence
    pub fn into_cells(self) -> Vec<u8> {
        self.cells
    }
}
