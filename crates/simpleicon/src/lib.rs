#![warn(missing_docs)]
//! # SimpleIcon bitmaps
//!
//! This crate decodes the *SimpleIcon* text format, a single line of the form
//!
//! ```text
//! <name>;;<version>;;<width>x<height>;;<bits>
//! ```
//!
//! and draws the result as ascii-art. Version `1` stores the pixels in
//! row-major order, every other version stores them in vertical bands that
//! are 8 columns wide (see [`layout::Layout`]).
//!
//! At the moment, only reading the files is supported.
//!
//! ```
//! let icon = simpleicon::decode("Smile;;1;;2x2;;1001").unwrap();
//! assert_eq!(icon.to_string(), "Smile (2x2)\nVersion: 1\nx \n x\n");
//! ```

use displaydoc::Display;
use thiserror::Error;

pub mod header;
pub mod layout;
pub mod raster;
pub mod render;

pub use header::{parse_header, FormatVersion, Header, HeaderError, Record};
pub use layout::{Layout, LayoutError};
pub use raster::Grid;
pub use render::{render, Frame, RenderOptions};

/// Error when decoding an icon
#[derive(Debug, Display, Error)]
pub enum Error {
    /// {0}
    Header(#[from] HeaderError),
    /// {0}
    Layout(#[from] LayoutError),
}

/// A fully decoded icon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    /// The header fields
    pub header: Header,
    /// The pixels
    pub grid: Grid,
}

impl Icon {
    /// Lay out the bits of a record according to its format version
    pub fn from_record(record: Record) -> Result<Self, LayoutError> {
        let Record { header, bits } = record;
        let layout = Layout::for_version(header.version);
        log::debug!(
            "Decoding {:?} ({}x{}) with {:?} layout",
            header.name,
            header.width,
            header.height,
            layout
        );
        let grid = layout.decode(header.grid_width(), header.grid_height(), &bits)?;
        Ok(Self { header, grid })
    }
}

/// Decode a single line of a SimpleIcon file
pub fn decode(line: &str) -> Result<Icon, Error> {
    let record = parse_header(line)?;
    let icon = Icon::from_record(record)?;
    Ok(icon)
}
