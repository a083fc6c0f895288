//! huekit - Colour representation and adjustment toolkit
//!
//! A library for storing colours in a canonical RGBA form, converting
//! between textual and tuple encodings (hex, hex-with-alpha, RGB, RGBA,
//! named colours), and applying parameterised adjustments: brightness,
//! contrast, saturation, hue rotation, blending, gradients, inversion,
//! and temperature shifts.

pub mod adjust;
pub mod colour;
pub mod convert;
pub mod error;
pub mod patch;

pub use adjust::{
    blend, gradient, increase_brightness, increase_contrast, increase_hue, increase_saturation,
    invert, temperature, temperature_with, Rgba, COOL, WARM,
};
pub use colour::{Channel, ChannelOp, Colour, DEFAULT_CHANNELS};
pub use convert::{convert, convert_auto, detect, Format, Repr};
pub use error::{HueError, Result};
pub use patch::{clamp_channel, patch, patch_channels, percentage_to_factor, truncate};
