//! The immutable `Colour` value type.
//!
//! `Colour` binds a canonical RGBA value to the conversion and adjustment
//! modules: it holds the channels and delegates every conversion and every
//! piece of adjustment math. All adjustment and arithmetic methods return a
//! new `Colour`.

use std::fmt;
use std::ops;
use std::str::FromStr;

use crate::adjust::{self, Rgba};
use crate::convert::{self, Format, Repr};
use crate::error::{HueError, Result};
use crate::patch::patch_channels;

/// An immutable RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// A channel selector for the arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    R,
    G,
    B,
    A,
}

impl Channel {
    fn index(self) -> usize {
        match self {
            Channel::R => 0,
            Channel::G => 1,
            Channel::B => 2,
            Channel::A => 3,
        }
    }
}

/// Channels the arithmetic shorthands operate on: alpha is excluded.
pub const DEFAULT_CHANNELS: &[Channel] = &[Channel::R, Channel::G, Channel::B];

/// A per-channel binary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl ChannelOp {
    fn eval(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            ChannelOp::Add => lhs + rhs,
            ChannelOp::Subtract => lhs - rhs,
            ChannelOp::Multiply => lhs * rhs,
            ChannelOp::Divide => lhs / rhs,
        }
    }
}

/// A mini-language adjustment, keyed by its single-letter identifier.
#[derive(Debug, Clone, Copy)]
enum QueryOp {
    Brightness,
    Contrast,
    Saturation,
    Hue,
}

impl QueryOp {
    fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "b" => Some(QueryOp::Brightness),
            "c" => Some(QueryOp::Contrast),
            "s" => Some(QueryOp::Saturation),
            "h" => Some(QueryOp::Hue),
            _ => None,
        }
    }
}

impl Colour {
    /// Create a colour from RGBA components.
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque colour from RGB components.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::from_rgba(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);

    /// Construct from any supported representation, detecting its format.
    pub fn new(value: &Repr) -> Result<Self> {
        Self::with_format(value, convert::detect(value)?)
    }

    /// Construct from a representation with an explicit format tag,
    /// skipping auto-detection.
    pub fn with_format(value: &Repr, format: Format) -> Result<Self> {
        let (r, g, b, a) = convert::parse(value, format)?;
        Ok(Self { r, g, b, a })
    }

    /// Convert to any supported representation.
    pub fn convert(&self, to: Format) -> Result<Repr> {
        convert::serialise(self.rgba(), to)
    }

    /// The `#RRGGBB` encoding; alpha is dropped.
    pub fn hex(&self) -> String {
        self.text(Format::Hex)
    }

    /// The `#RRGGBBAA` encoding.
    pub fn hexa(&self) -> String {
        self.text(Format::Hexa)
    }

    /// The RGB tuple; alpha is dropped.
    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// The canonical RGBA tuple.
    pub fn rgba(&self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, self.a)
    }

    /// Raw passthrough of the canonical tuple.
    pub fn direct(&self) -> (u8, u8, u8, u8) {
        self.rgba()
    }

    /// The colour's name, if the table has an exact match.
    pub fn name(&self) -> Result<String> {
        match self.convert(Format::Named)? {
            Repr::Text(name) => Ok(name),
            repr => Err(HueError::UnsupportedConversion {
                message: format!("Named conversion produced a tuple: {:?}", repr),
            }),
        }
    }

    fn text(&self, format: Format) -> String {
        match convert::serialise(self.rgba(), format) {
            Ok(Repr::Text(s)) => s,
            // Hex serialisation of an in-range colour cannot fail.
            _ => unreachable!("hex serialisation is infallible"),
        }
    }

    fn raw(&self) -> Rgba {
        (
            i32::from(self.r),
            i32::from(self.g),
            i32::from(self.b),
            i32::from(self.a),
        )
    }

    /// Wrap an algebra result whose channels have already been patched.
    fn from_patched((r, g, b, a): Rgba) -> Self {
        Self {
            r: r as u8,
            g: g as u8,
            b: b as u8,
            a: a as u8,
        }
    }

    /// Scale brightness by a signed percentage.
    pub fn increase_brightness(&self, percentage: f64) -> Self {
        Self::from_patched(adjust::increase_brightness(self.raw(), percentage))
    }

    /// Adjust contrast around mid-grey by a signed percentage.
    pub fn increase_contrast(&self, percentage: f64) -> Self {
        Self::from_patched(adjust::increase_contrast(self.raw(), percentage))
    }

    /// Adjust saturation around the channel mean by a signed percentage.
    pub fn increase_saturation(&self, percentage: f64) -> Self {
        Self::from_patched(adjust::increase_saturation(self.raw(), percentage))
    }

    /// Rotate hue by the given degrees.
    pub fn increase_hue(&self, degrees: f64) -> Self {
        Self::from_patched(adjust::increase_hue(self.raw(), degrees))
    }

    pub fn decrease_brightness(&self, percentage: f64) -> Self {
        self.increase_brightness(-percentage)
    }

    pub fn decrease_contrast(&self, percentage: f64) -> Self {
        self.increase_contrast(-percentage)
    }

    pub fn decrease_saturation(&self, percentage: f64) -> Self {
        self.increase_saturation(-percentage)
    }

    pub fn decrease_hue(&self, degrees: f64) -> Self {
        self.increase_hue(-degrees)
    }

    /// Apply a binary operation with `by` to the selected channels.
    ///
    /// Every computed channel is patched back into range, so extreme
    /// operands saturate at the boundaries rather than wrapping.
    pub fn apply(&self, op: ChannelOp, by: f64, channels: &[Channel]) -> Self {
        let mut values = [
            f64::from(self.r),
            f64::from(self.g),
            f64::from(self.b),
            f64::from(self.a),
        ];

        for channel in channels {
            let i = channel.index();
            values[i] = op.eval(values[i], by);
        }

        Self::from_patched(patch_channels(values[0], values[1], values[2], values[3]))
    }

    /// Add `by` to r, g, b.
    pub fn add(&self, by: f64) -> Self {
        self.apply(ChannelOp::Add, by, DEFAULT_CHANNELS)
    }

    /// Subtract `by` from r, g, b.
    pub fn subtract(&self, by: f64) -> Self {
        self.apply(ChannelOp::Subtract, by, DEFAULT_CHANNELS)
    }

    /// Multiply r, g, b by `by`.
    pub fn multiply(&self, by: f64) -> Self {
        self.apply(ChannelOp::Multiply, by, DEFAULT_CHANNELS)
    }

    /// Divide r, g, b by `by`.
    pub fn divide(&self, by: f64) -> Self {
        self.apply(ChannelOp::Divide, by, DEFAULT_CHANNELS)
    }

    /// Apply a chained adjustment query.
    ///
    /// Tokens of the form `<letter>:<value>` are joined with `||` and
    /// applied left to right; spaces are ignored. Letters: `b` brightness,
    /// `c` contrast, `s` saturation, `h` hue.
    pub fn process(&self, query: &str) -> Result<Self> {
        let query: String = query.chars().filter(|c| !c.is_whitespace()).collect();
        let mut result = *self;

        for token in query.split("||") {
            let (letter, value) = token.split_once(':').ok_or_else(|| {
                HueError::MalformedQuery {
                    token: token.to_string(),
                    help: Some("Tokens look like b:10, joined with ||".to_string()),
                }
            })?;

            let op = QueryOp::from_letter(letter).ok_or_else(|| HueError::UnknownOperation {
                op: letter.to_string(),
                help: Some("Known operations: b, c, s, h".to_string()),
            })?;

            let value: f64 = value.parse().map_err(|_| HueError::MalformedQuery {
                token: token.to_string(),
                help: Some("The value after ':' must be numeric".to_string()),
            })?;

            result = match op {
                QueryOp::Brightness => result.increase_brightness(value),
                QueryOp::Contrast => result.increase_contrast(value),
                QueryOp::Saturation => result.increase_saturation(value),
                QueryOp::Hue => result.increase_hue(value),
            };
        }

        Ok(result)
    }
}

impl FromStr for Colour {
    type Err = HueError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(&Repr::from(s))
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Colour({})", self.hex())
    }
}

impl ops::Add<f64> for Colour {
    type Output = Colour;

    fn add(self, by: f64) -> Colour {
        Colour::add(&self, by)
    }
}

impl ops::Sub<f64> for Colour {
    type Output = Colour;

    fn sub(self, by: f64) -> Colour {
        self.subtract(by)
    }
}

impl ops::Mul<f64> for Colour {
    type Output = Colour;

    fn mul(self, by: f64) -> Colour {
        self.multiply(by)
    }
}

impl ops::Div<f64> for Colour {
    type Output = Colour;

    fn div(self, by: f64) -> Colour {
        self.divide(by)
    }
}
