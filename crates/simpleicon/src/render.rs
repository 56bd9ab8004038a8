//! # Draw icons as ascii-art
use std::fmt;

use crate::{raster::Grid, Icon};

/// Characters for a horizontal border
#[derive(Debug)]
pub struct BorderDrawing {
    /// The left corner
    pub left: char,
    /// The edge
    pub middle: char,
    /// The right corner
    pub right: char,
}

/// Characters for a frame around the pixels
#[derive(Debug)]
pub struct BoxDrawing {
    /// The top border
    pub top: BorderDrawing,
    /// The left edge
    pub left: char,
    /// The right edge
    pub right: char,
    /// The bottom border
    pub bottom: BorderDrawing,
}

const ASCII_BORDER: BorderDrawing = BorderDrawing {
    left: '+',
    middle: '-',
    right: '+',
};

/// A frame drawn with `+`, `-` and `|`
pub const ASCII: &BoxDrawing = &BoxDrawing {
    top: ASCII_BORDER,
    left: '|',
    right: '|',
    bottom: ASCII_BORDER,
};

/// A frame drawn with double box-drawing characters
pub const UNICODE: &BoxDrawing = &BoxDrawing {
    top: BorderDrawing {
        left: '╔',
        middle: '═',
        right: '╗',
    },
    left: '║',
    right: '║',
    bottom: BorderDrawing {
        left: '╚',
        middle: '═',
        right: '╝',
    },
};

/// The frame around the pixel rows
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Frame {
    /// No frame
    #[default]
    None,
    /// See [`ASCII`]
    Ascii,
    /// See [`UNICODE`]
    Unicode,
}

impl Frame {
    fn drawing(self) -> Option<&'static BoxDrawing> {
        match self {
            Self::None => None,
            Self::Ascii => Some(ASCII),
            Self::Unicode => Some(UNICODE),
        }
    }
}

/// Options for drawing an icon
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// The glyph for a set pixel
    pub ink: char,
    /// The glyph for an unset pixel
    pub no_ink: char,
    /// Swap set and unset pixels
    pub invert: bool,
    /// The frame around the pixels
    pub frame: Frame,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            ink: 'x',
            no_ink: ' ',
            invert: false,
            frame: Frame::None,
        }
    }
}

impl RenderOptions {
    /// The glyph for a single cell
    pub fn glyph(&self, cell: u8) -> char {
        if (cell == 1) ^ self.invert {
            self.ink
        } else {
            self.no_ink
        }
    }
}

fn draw_border<W: fmt::Write>(w: &mut W, border: &BorderDrawing, width: usize) -> fmt::Result {
    w.write_char(border.left)?;
    for _ in 0..width {
        w.write_char(border.middle)?;
    }
    w.write_char(border.right)?;
    w.write_char('\n')
}

/// Draw the pixels of a grid, one line per row
pub fn draw_grid<W: fmt::Write>(w: &mut W, grid: &Grid, options: &RenderOptions) -> fmt::Result {
    let frame = options.frame.drawing();
    if let Some(b) = frame {
        draw_border(w, &b.top, grid.width())?;
    }
    for row in grid.rows() {
        if let Some(b) = frame {
            w.write_char(b.left)?;
        }
        for &cell in row {
            w.write_char(options.glyph(cell))?;
        }
        if let Some(b) = frame {
            w.write_char(b.right)?;
        }
        w.write_char('\n')?;
    }
    if let Some(b) = frame {
        draw_border(w, &b.bottom, grid.width())?;
    }
    Ok(())
}

/// Draw the title, version and pixels of an icon
pub fn write_icon<W: fmt::Write>(w: &mut W, icon: &Icon, options: &RenderOptions) -> fmt::Result {
    let header = &icon.header;
    writeln!(w, "{} ({}x{})", header.name, header.width, header.height)?;
    writeln!(w, "Version: {}", header.version)?;
    draw_grid(w, &icon.grid, options)
}

/// Draw an icon into a new string
pub fn render(icon: &Icon, options: &RenderOptions) -> String {
    let mut out = String::new();
    write_icon(&mut out, icon, options).expect("writing to a String");
    out
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_icon(f, self, &RenderOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::{draw_grid, render, Frame, RenderOptions};
    use crate::{decode, raster::Grid};

    #[test]
    fn test_glyph() {
        let options = RenderOptions::default();
        assert_eq!(options.glyph(1), 'x');
        assert_eq!(options.glyph(0), ' ');
        assert_eq!(options.glyph(2), ' ');
        assert_eq!(options.glyph(255), ' ');

        let inverted = RenderOptions {
            invert: true,
            ..RenderOptions::default()
        };
        assert_eq!(inverted.glyph(1), ' ');
        assert_eq!(inverted.glyph(0), 'x');
    }

    #[test]
    fn test_other_cell_values() {
        let grid = Grid::from_cells(4, 1, vec![1, 0, 7, 1]).unwrap();
        let mut out = String::new();
        draw_grid(&mut out, &grid, &RenderOptions::default()).unwrap();
        assert_eq!(out, "x  x\n");
    }

    #[test]
    fn test_display() {
        let icon = decode("Smile;;1;;2x2;;1001").unwrap();
        assert_eq!(icon.to_string(), "Smile (2x2)\nVersion: 1\nx \n x\n");
        assert_eq!(render(&icon, &RenderOptions::default()), icon.to_string());
    }

    #[test]
    fn test_frame() {
        let icon = decode("Dot;;2;;3x1;;010").unwrap();
        let ascii = RenderOptions {
            frame: Frame::Ascii,
            ..RenderOptions::default()
        };
        assert_eq!(
            render(&icon, &ascii),
            "Dot (3x1)\nVersion: 2\n+---+\n| x |\n+---+\n"
        );
        let unicode = RenderOptions {
            frame: Frame::Unicode,
            ink: '█',
            ..RenderOptions::default()
        };
        assert_eq!(
            render(&icon, &unicode),
            "Dot (3x1)\nVersion: 2\n╔═══╗\n║ █ ║\n╚═══╝\n"
        );
    }

    #[test]
    fn test_empty_icon() {
        let icon = decode("Nothing;;1;;0x0;;").unwrap();
        assert_eq!(icon.to_string(), "Nothing (0x0)\nVersion: 1\n");
    }
}
