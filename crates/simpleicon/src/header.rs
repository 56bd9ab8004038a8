//! # The icon header
//!
//! A SimpleIcon file starts with a single line of four fields, separated by
//! [`DELIMITER`]: the name, the format version, the dimensions and the pixel
//! bits.

use std::{fmt, num::ParseIntError};

use displaydoc::Display;
use nom::{
    bytes::complete::take_till, character::complete::char, sequence::separated_pair, Finish,
    IResult,
};
use thiserror::Error;

/// Delimiter between the fields of the header line
pub const DELIMITER: &str = ";;";

/// The number of fields in a header line
pub const FIELD_COUNT: usize = 4;

/// The version of the file format, which selects the pixel layout
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FormatVersion(pub i32);

impl FormatVersion {
    /// The only version that stores pixels in row-major order
    pub const ROW_MAJOR: FormatVersion = FormatVersion(1);
}

impl fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A numeric field of the header
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq)]
pub enum Field {
    /// format version
    Version,
    /// width
    Width,
    /// height
    Height,
}

/// Error when parsing the header line
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum HeaderError {
    /// Cannot parse empty input
    Empty,
    /// Expected 4 fields separated by `;;`, found {0}
    FieldCount(usize),
    /// Dimensions {0:?} are not of the form `<width>x<height>`
    Dimensions(String),
    /// Invalid {field} {text:?}: {source}
    Numeric {
        /// The field that failed to parse
        field: Field,
        /// The text of that field
        text: String,
        /// The underlying error
        source: ParseIntError,
    },
}

/// The header fields of an icon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// The name, verbatim from the first field
    pub name: String,
    /// The format version
    pub version: FormatVersion,
    /// The width in pixels
    pub width: i32,
    /// The height in pixels
    pub height: i32,
}

impl Header {
    /// The number of columns in the decoded grid
    ///
    /// A negative width is treated as zero. Laying out an icon with zero
    /// columns but some rows fails with [`crate::LayoutError::NoCells`].
    pub fn grid_width(&self) -> usize {
        usize::try_from(self.width).unwrap_or(0)
    }

    /// The number of rows in the decoded grid
    ///
    /// A negative height is treated as zero.
    pub fn grid_height(&self) -> usize {
        usize::try_from(self.height).unwrap_or(0)
    }
}

/// A parsed, but not yet laid out icon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// The header fields
    pub header: Header,
    /// The flat bit sequence, one byte (0 or 1) per pixel
    pub bits: Vec<u8>,
}

fn is_x(c: char) -> bool {
    c == 'x'
}

/// Split `<width>x<height>` at the first `x`
pub fn p_dimensions(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(take_till(is_x), char('x'), take_till(is_x))(input)
}

fn parse_number(field: Field, text: &str) -> Result<i32, HeaderError> {
    text.parse().map_err(|source| HeaderError::Numeric {
        field,
        text: text.to_owned(),
        source,
    })
}

/// Parse the dimension field into `(width, height)`
pub fn parse_dimensions(text: &str) -> Result<(i32, i32), HeaderError> {
    let (rest, (width, height)) = p_dimensions(text)
        .finish()
        .map_err(|_| HeaderError::Dimensions(text.to_owned()))?;
    if !rest.is_empty() {
        log::warn!("Unparsed rest after dimensions: {:?}", rest);
    }
    let width = parse_number(Field::Width, width)?;
    let height = parse_number(Field::Height, height)?;
    Ok((width, height))
}

/// Turn the pixel text into a flat bit sequence
///
/// Every `'1'` is a set pixel, any other character is an unset one.
pub fn decode_bits(text: &str) -> Vec<u8> {
    let bits: Vec<u8> = text.chars().map(|c| u8::from(c == '1')).collect();
    if let Some(c) = text.chars().find(|&c| c != '0' && c != '1') {
        log::debug!("Pixel text contains {:?}, treating it as unset", c);
    }
    bits
}

/// Parse a header line into a [`Record`]
pub fn parse_header(line: &str) -> Result<Record, HeaderError> {
    let line = line.trim_end_matches(|c| c == '\r' || c == '\n');
    if line.is_empty() {
        return Err(HeaderError::Empty);
    }

    let fields: Vec<&str> = line.split(DELIMITER).collect();
    let [name, version, dimensions, bits]: [&str; FIELD_COUNT] = fields
        .as_slice()
        .try_into()
        .map_err(|_| HeaderError::FieldCount(fields.len()))?;

    let version = FormatVersion(parse_number(Field::Version, version)?);
    let (width, height) = parse_dimensions(dimensions)?;

    Ok(Record {
        header: Header {
            name: name.to_owned(),
            version,
            width,
            height,
        },
        bits: decode_bits(bits),
    })
}

#[cfg(test)]
mod tests {
    use super::{
        decode_bits, p_dimensions, parse_dimensions, parse_header, Field, FormatVersion,
        HeaderError, FIELD_COUNT,
    };

    fn format_line(name: &str, version: i32, width: i32, height: i32, bits: &str) -> String {
        format!("{};;{};;{}x{};;{}", name, version, width, height, bits)
    }

    #[test]
    fn test_round_trip() {
        let cases = [
            ("Smile", 1, 2, 2, "1001"),
            ("Sword", 2, 10, 1, "1111100000"),
            ("with spaces", -3, 1, 3, "1a1"),
            ("", 0, 0, 0, ""),
        ];
        for (name, version, width, height, bits) in cases {
            let line = format_line(name, version, width, height, bits);
            let record = parse_header(&line).unwrap();
            assert_eq!(record.header.name, name);
            assert_eq!(record.header.version, FormatVersion(version));
            assert_eq!(record.header.width, width);
            assert_eq!(record.header.height, height);
            assert_eq!(record.bits, decode_bits(bits));
        }
    }

    #[test]
    fn test_decode_bits() {
        assert_eq!(decode_bits("1001"), vec![1, 0, 0, 1]);
        assert_eq!(decode_bits("1 x0#1"), vec![1, 0, 0, 0, 0, 1]);
        assert_eq!(decode_bits("ü1").len(), 2);
        assert!(decode_bits("").is_empty());
    }

    #[test]
    fn test_empty() {
        assert_eq!(parse_header(""), Err(HeaderError::Empty));
        assert_eq!(parse_header("\r\n"), Err(HeaderError::Empty));
    }

    #[test]
    fn test_field_count() {
        assert_eq!(parse_header("a;;1;;2x2"), Err(HeaderError::FieldCount(3)));
        assert_eq!(
            parse_header("a;;1;;2x2;;1001;;extra"),
            Err(HeaderError::FieldCount(5))
        );
        assert_eq!(parse_header("no delimiter"), Err(HeaderError::FieldCount(1)));
        assert_eq!(
            parse_header(";;;;;;;;;;;;"),
            Err(HeaderError::FieldCount(FIELD_COUNT + 3))
        );
    }

    #[test]
    fn test_numeric() {
        match parse_header("a;;one;;2x2;;1001") {
            Err(HeaderError::Numeric { field, text, .. }) => {
                assert_eq!(field, Field::Version);
                assert_eq!(text, "one");
            }
            other => panic!("unexpected {:?}", other),
        }
        match parse_header("a;;1;;2xb;;1001") {
            Err(HeaderError::Numeric { field, .. }) => assert_eq!(field, Field::Height),
            other => panic!("unexpected {:?}", other),
        }
        match parse_header("a;;1;;x2;;1001") {
            Err(HeaderError::Numeric { field, .. }) => assert_eq!(field, Field::Width),
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(
            parse_header("a;;99999999999;;2x2;;1001"),
            Err(HeaderError::Numeric { .. })
        ));
    }

    #[test]
    fn test_dimensions() {
        assert_eq!(p_dimensions("12x34"), Ok(("", ("12", "34"))));
        assert_eq!(p_dimensions("3x4x5"), Ok(("x5", ("3", "4"))));
        assert_eq!(parse_dimensions("3x4x5"), Ok((3, 4)));
        assert_eq!(parse_dimensions("-1x+2"), Ok((-1, 2)));
        assert_eq!(
            parse_dimensions("12"),
            Err(HeaderError::Dimensions("12".to_owned()))
        );
        assert!(parse_dimensions("12X3").is_err());
    }

    #[test]
    fn test_line_terminator() {
        let record = parse_header("Smile;;1;;2x2;;1001\r\n").unwrap();
        assert_eq!(record.bits, vec![1, 0, 0, 1]);
    }

    #[test]
    fn test_grid_dimensions() {
        let record = parse_header("neg;;1;;-4x3;;").unwrap();
        assert_eq!(record.header.grid_width(), 0);
        assert_eq!(record.header.grid_height(), 3);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            HeaderError::FieldCount(3).to_string(),
            "Expected 4 fields separated by `;;`, found 3"
        );
        let err = parse_header("a;;one;;2x2;;1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid format version \"one\": invalid digit found in string"
        );
    }
}
