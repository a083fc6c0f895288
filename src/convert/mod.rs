//! Colour format detection and conversion.
//!
//! Every conversion goes through the canonical RGBA tuple: the input is
//! parsed under its (declared or detected) format, then serialised to the
//! target format. Supported formats:
//! - `hex` — `#RRGGBB` string, alpha dropped
//! - `hexa` — `#RRGGBBAA` string
//! - `named` — a name from the built-in table (e.g. `"red"`)
//! - `rgb` — 3-tuple, alpha defaults to 255
//! - `rgba` — 4-tuple, identity with canonical
//! - `direct` — raw passthrough of the canonical tuple

mod names;

use std::fmt;

use crate::error::{HueError, Result};

pub use names::{lookup, reverse_lookup};

/// Canonical colour: four channels, each an integer in `[0, 255]`.
pub(crate) type Canonical = (u8, u8, u8, u8);

/// Identifies one of the supported colour representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Hex,
    Hexa,
    Named,
    Rgb,
    Rgba,
    Direct,
}

impl Format {
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Hex => "hex",
            Format::Hexa => "hexa",
            Format::Named => "named",
            Format::Rgb => "rgb",
            Format::Rgba => "rgba",
            Format::Direct => "direct",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An input or output colour representation: a string or an integer tuple.
///
/// Tuple channels are `i32` so out-of-range input is representable and can
/// be rejected with a proper error instead of wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Repr {
    Text(String),
    Rgb(i32, i32, i32),
    Rgba(i32, i32, i32, i32),
}

impl From<&str> for Repr {
    fn from(s: &str) -> Self {
        Repr::Text(s.to_string())
    }
}

impl From<String> for Repr {
    fn from(s: String) -> Self {
        Repr::Text(s)
    }
}

impl From<(i32, i32, i32)> for Repr {
    fn from((r, g, b): (i32, i32, i32)) -> Self {
        Repr::Rgb(r, g, b)
    }
}

impl From<(i32, i32, i32, i32)> for Repr {
    fn from((r, g, b, a): (i32, i32, i32, i32)) -> Self {
        Repr::Rgba(r, g, b, a)
    }
}

/// Detect the format of a representation by structural inspection.
///
/// Strings are matched as hex first (optional `#`, exactly 6 or 8 hex
/// digits), then as named colours; a 6-character string with a non-hex
/// digit therefore resolves to its name, never misparses as hex. Tuples
/// match by arity.
pub fn detect(value: &Repr) -> Result<Format> {
    match value {
        Repr::Rgb(..) => Ok(Format::Rgb),
        Repr::Rgba(..) => Ok(Format::Rgba),
        Repr::Text(s) => {
            let s = s.trim();
            let stripped = s.strip_prefix('#');
            let body = stripped.unwrap_or(s);

            if body.len() == 6 && is_hex(body) {
                return Ok(Format::Hex);
            }
            if body.len() == 8 && is_hex(body) {
                return Ok(Format::Hexa);
            }
            // A leading '#' commits the string to being hex.
            if stripped.is_none() && names::lookup(s).is_some() {
                return Ok(Format::Named);
            }

            Err(HueError::InvalidFormat {
                message: format!("Cannot detect colour format of {:?}", s),
                help: Some(
                    "Use #RRGGBB, #RRGGBBAA, or a known colour name".to_string(),
                ),
            })
        }
    }
}

/// Convert a representation from one explicit format to another.
pub fn convert(value: &Repr, from: Format, to: Format) -> Result<Repr> {
    serialise(parse(value, from)?, to)
}

/// Convert a representation to the target format, detecting its format.
pub fn convert_auto(value: &Repr, to: Format) -> Result<Repr> {
    convert(value, detect(value)?, to)
}

/// Parse a representation under the declared format into canonical RGBA.
pub(crate) fn parse(value: &Repr, format: Format) -> Result<Canonical> {
    match (format, value) {
        (Format::Hex, Repr::Text(s)) => parse_hex(s),
        (Format::Hexa, Repr::Text(s)) => parse_hexa(s),
        (Format::Named, Repr::Text(s)) => {
            let (r, g, b) = names::lookup(s.trim()).ok_or_else(|| HueError::InvalidFormat {
                message: format!("Unknown colour name: {:?}", s.trim()),
                help: None,
            })?;
            Ok((r, g, b, 255))
        }
        (Format::Rgb, Repr::Rgb(r, g, b)) => {
            Ok((check_channel(*r)?, check_channel(*g)?, check_channel(*b)?, 255))
        }
        (Format::Rgba | Format::Direct, Repr::Rgba(r, g, b, a)) => Ok((
            check_channel(*r)?,
            check_channel(*g)?,
            check_channel(*b)?,
            check_channel(*a)?,
        )),
        (format, value) => Err(HueError::InvalidFormat {
            message: format!("Value {:?} is not a valid {} colour", value, format),
            help: None,
        }),
    }
}

/// Serialise a canonical RGBA into the target format.
pub(crate) fn serialise(rgba: Canonical, to: Format) -> Result<Repr> {
    let (r, g, b, a) = rgba;

    match to {
        Format::Hex => Ok(Repr::Text(format!("#{:02X}{:02X}{:02X}", r, g, b))),
        Format::Hexa => Ok(Repr::Text(format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a))),
        Format::Rgb => Ok(Repr::Rgb(i32::from(r), i32::from(g), i32::from(b))),
        Format::Rgba | Format::Direct => Ok(Repr::Rgba(
            i32::from(r),
            i32::from(g),
            i32::from(b),
            i32::from(a),
        )),
        Format::Named => {
            if a != 255 {
                return Err(HueError::UnsupportedConversion {
                    message: format!("No colour name for translucent value {:?}", rgba),
                });
            }
            names::reverse_lookup((r, g, b))
                .map(|name| Repr::Text(name.to_string()))
                .ok_or_else(|| HueError::UnsupportedConversion {
                    message: format!("No colour name for value {:?}", rgba),
                })
        }
    }
}

/// Parse a `#RRGGBB` string; alpha defaults to 255.
fn parse_hex(s: &str) -> Result<Canonical> {
    let s = s.trim();
    let hex = s.strip_prefix('#').unwrap_or(s);

    if hex.len() != 6 {
        return Err(hex_error(s, "Use exactly 6 hex digits: #RRGGBB"));
    }

    let r = parse_hex_byte(&hex[0..2], s)?;
    let g = parse_hex_byte(&hex[2..4], s)?;
    let b = parse_hex_byte(&hex[4..6], s)?;
    Ok((r, g, b, 255))
}

/// Parse a `#RRGGBBAA` string.
fn parse_hexa(s: &str) -> Result<Canonical> {
    let s = s.trim();
    let hex = s.strip_prefix('#').unwrap_or(s);

    if hex.len() != 8 {
        return Err(hex_error(s, "Use exactly 8 hex digits: #RRGGBBAA"));
    }

    let r = parse_hex_byte(&hex[0..2], s)?;
    let g = parse_hex_byte(&hex[2..4], s)?;
    let b = parse_hex_byte(&hex[4..6], s)?;
    let a = parse_hex_byte(&hex[6..8], s)?;
    Ok((r, g, b, a))
}

fn is_hex(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_hexdigit())
}

/// Parse a two-character hex byte.
fn parse_hex_byte(pair: &str, source: &str) -> Result<u8> {
    u8::from_str_radix(pair, 16).map_err(|_| hex_error(source, "Only 0-9 and A-F are hex digits"))
}

fn hex_error(source: &str, help: &str) -> HueError {
    HueError::InvalidFormat {
        message: format!("Invalid hex colour: {:?}", source),
        help: Some(help.to_string()),
    }
}

/// Validate that a tuple channel is in `[0, 255]`.
fn check_channel(c: i32) -> Result<u8> {
    u8::try_from(c).map_err(|_| HueError::InvalidFormat {
        message: format!("Channel value {} is outside [0, 255]", c),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_hex() {
        assert_eq!(detect(&Repr::from("#FF00AA")).unwrap(), Format::Hex);
        assert_eq!(detect(&Repr::from("ff00aa")).unwrap(), Format::Hex);
    }

    #[test]
    fn test_detect_hexa() {
        assert_eq!(detect(&Repr::from("#FF00AA80")).unwrap(), Format::Hexa);
        assert_eq!(detect(&Repr::from("ff00aa80")).unwrap(), Format::Hexa);
    }

    #[test]
    fn test_detect_named() {
        assert_eq!(detect(&Repr::from("red")).unwrap(), Format::Named);
        // 6 characters, but 'v'/'i'/'o' are not hex digits: this is a name.
        assert_eq!(detect(&Repr::from("violet")).unwrap(), Format::Named);
    }

    #[test]
    fn test_detect_tuples_by_arity() {
        assert_eq!(detect(&Repr::Rgb(1, 2, 3)).unwrap(), Format::Rgb);
        assert_eq!(detect(&Repr::Rgba(1, 2, 3, 4)).unwrap(), Format::Rgba);
    }

    #[test]
    fn test_detect_rejects_hash_prefixed_name() {
        assert!(detect(&Repr::from("#violet")).is_err());
    }

    #[test]
    fn test_detect_rejects_garbage() {
        assert!(detect(&Repr::from("")).is_err());
        assert!(detect(&Repr::from("#12345")).is_err());
        assert!(detect(&Repr::from("not a colour")).is_err());
    }

    #[test]
    fn test_convert_hex_to_rgba_defaults_alpha() {
        let out = convert(&Repr::from("#FFAA00"), Format::Hex, Format::Rgba).unwrap();
        assert_eq!(out, Repr::Rgba(255, 170, 0, 255));
    }

    #[test]
    fn test_convert_hexa_roundtrip_identity() {
        let rgba = Repr::Rgba(12, 99, 201, 77);
        let hexa = convert(&rgba, Format::Rgba, Format::Hexa).unwrap();
        assert_eq!(hexa, Repr::from("#0C63C94D"));
        assert_eq!(convert(&hexa, Format::Hexa, Format::Rgba).unwrap(), rgba);
    }

    #[test]
    fn test_convert_hex_roundtrip_drops_alpha() {
        let rgba = Repr::Rgba(12, 99, 201, 77);
        let hex = convert(&rgba, Format::Rgba, Format::Hex).unwrap();
        assert_eq!(
            convert(&hex, Format::Hex, Format::Rgba).unwrap(),
            Repr::Rgba(12, 99, 201, 255)
        );
    }

    #[test]
    fn test_convert_rgb_to_hex() {
        let out = convert(&Repr::Rgb(255, 0, 128), Format::Rgb, Format::Hex).unwrap();
        assert_eq!(out, Repr::from("#FF0080"));
    }

    #[test]
    fn test_convert_named_to_rgba() {
        let out = convert(&Repr::from("Orange"), Format::Named, Format::Rgba).unwrap();
        assert_eq!(out, Repr::Rgba(255, 165, 0, 255));
    }

    #[test]
    fn test_convert_rgba_to_named() {
        let out = convert(&Repr::Rgba(255, 0, 0, 255), Format::Rgba, Format::Named).unwrap();
        assert_eq!(out, Repr::from("red"));
    }

    #[test]
    fn test_convert_to_named_without_match() {
        let result = convert(&Repr::Rgba(1, 2, 3, 255), Format::Rgba, Format::Named);
        assert!(matches!(
            result,
            Err(HueError::UnsupportedConversion { .. })
        ));
        // Alpha must be exactly 255 for a name to apply.
        let result = convert(&Repr::Rgba(255, 0, 0, 254), Format::Rgba, Format::Named);
        assert!(matches!(
            result,
            Err(HueError::UnsupportedConversion { .. })
        ));
    }

    #[test]
    fn test_convert_direct_is_passthrough() {
        let rgba = Repr::Rgba(1, 2, 3, 4);
        assert_eq!(convert(&rgba, Format::Direct, Format::Direct).unwrap(), rgba);
        assert_eq!(convert(&rgba, Format::Rgba, Format::Direct).unwrap(), rgba);
    }

    #[test]
    fn test_convert_rejects_malformed_hex() {
        assert!(convert(&Repr::from("#GG0000"), Format::Hex, Format::Rgba).is_err());
        assert!(convert(&Repr::from("#FFAA0"), Format::Hex, Format::Rgba).is_err());
        assert!(convert(&Repr::from("#FFAA00FF"), Format::Hex, Format::Rgba).is_err());
    }

    #[test]
    fn test_convert_rejects_wrong_shape() {
        assert!(convert(&Repr::Rgb(1, 2, 3), Format::Hex, Format::Rgba).is_err());
        assert!(convert(&Repr::from("#FFAA00"), Format::Rgb, Format::Rgba).is_err());
        assert!(convert(&Repr::Rgb(1, 2, 3), Format::Rgba, Format::Hex).is_err());
    }

    #[test]
    fn test_convert_rejects_out_of_range_channel() {
        assert!(convert(&Repr::Rgb(256, 0, 0), Format::Rgb, Format::Hex).is_err());
        assert!(convert(&Repr::Rgba(0, -1, 0, 255), Format::Rgba, Format::Hex).is_err());
    }

    #[test]
    fn test_convert_unknown_name() {
        let result = convert(&Repr::from("notacolour"), Format::Named, Format::Rgba);
        assert!(matches!(result, Err(HueError::InvalidFormat { .. })));
    }

    #[test]
    fn test_convert_auto() {
        assert_eq!(
            convert_auto(&Repr::from("red"), Format::Hex).unwrap(),
            Repr::from("#FF0000")
        );
        assert_eq!(
            convert_auto(&Repr::Rgb(0, 255, 255), Format::Named).unwrap(),
            Repr::from("cyan")
        );
    }

    #[test]
    fn test_hex_parse_accepts_lowercase() {
        assert_eq!(
            convert(&Repr::from("ffaa00"), Format::Hex, Format::Rgb).unwrap(),
            Repr::Rgb(255, 170, 0)
        );
    }
}
