use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use simpleicon::{Frame, RenderOptions};

/// The frame to draw around the pixels
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum FrameStyle {
    /// No frame
    #[default]
    None,
    /// `+`, `-` and `|`
    Ascii,
    /// Box-drawing characters
    Unicode,
}

impl From<FrameStyle> for Frame {
    fn from(style: FrameStyle) -> Self {
        match style {
            FrameStyle::None => Frame::None,
            FrameStyle::Ascii => Frame::Ascii,
            FrameStyle::Unicode => Frame::Unicode,
        }
    }
}

#[derive(Debug, Parser)]
#[command(version)]
/// Print a SimpleIcon file as ascii-art
pub struct Options {
    /// The icon file, e.g. `smile.txt`
    pub file: PathBuf,
    /// Swap set and unset pixels
    #[arg(long, short = 'i')]
    pub invert: bool,
    /// Draw a frame around the pixels
    #[arg(long, short = 'f', value_enum, default_value_t)]
    pub frame: FrameStyle,
}

impl Options {
    /// The options for the renderer
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            invert: self.invert,
            frame: self.frame.into(),
            ..RenderOptions::default()
        }
    }
}
