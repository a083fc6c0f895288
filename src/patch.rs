//! Channel arithmetic primitives.
//!
//! Every computed channel value funnels through [`patch`] (clamp then
//! truncate) before it becomes part of a canonical colour. Truncation is
//! toward zero, not round-to-nearest; adjustment outputs depend on this
//! exactly.

use crate::adjust::Rgba;

/// Clamp a channel value to the `[0, 255]` range.
pub fn clamp_channel(x: f64) -> f64 {
    x.clamp(0.0, 255.0)
}

/// Truncate a fractional channel value toward zero.
pub fn truncate(x: f64) -> i32 {
    x as i32
}

/// Clamp then truncate a channel value.
pub fn patch(x: f64) -> i32 {
    truncate(clamp_channel(x))
}

/// Patch all four channels of a computed quad into a valid tuple.
pub fn patch_channels(r: f64, g: f64, b: f64, a: f64) -> Rgba {
    (patch(r), patch(g), patch(b), patch(a))
}

/// Map a signed percentage to a multiplicative factor.
///
/// `0` is identity (factor `1.0`), `-100` zeroes the contribution, `+100`
/// doubles it. The percentage itself is never clamped; extreme factors are
/// brought back into range by [`patch`] at the channel level.
pub fn percentage_to_factor(percentage: f64) -> f64 {
    (percentage + 100.0) / 100.0
}
