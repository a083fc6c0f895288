//! Colour adjustment algebra.
//!
//! Pure functions over raw 4-channel integer tuples, usable without the
//! [`Colour`](crate::Colour) façade. Brightness, contrast, and saturation
//! pass alpha through untouched; blend, invert, temperature, and gradient
//! let alpha participate.

use crate::error::{HueError, Result};
use crate::patch::{patch, percentage_to_factor, truncate};

/// A raw 4-channel colour tuple.
///
/// Channels are `i32` rather than `u8` because [`blend`] intentionally
/// returns squared channel values that can exceed 255 (see its docs).
pub type Rgba = (i32, i32, i32, i32);

/// Warm reference colour used by [`temperature`].
pub const WARM: (i32, i32, i32) = (255, 67, 0);

/// Cool reference colour used by [`temperature`].
pub const COOL: (i32, i32, i32) = (181, 205, 255);

/// Scale r, g, b by a percentage-derived factor.
///
/// `0` is identity, `-100` is black, values beyond `±100` are allowed and
/// clamp at the channel boundary. Alpha is untouched.
pub fn increase_brightness(rgba: Rgba, percentage: f64) -> Rgba {
    let factor = percentage_to_factor(percentage);
    let (r, g, b, a) = rgba;
    let f = |channel: i32| patch(f64::from(channel) * factor);

    (f(r), f(g), f(b), a)
}

/// Push r, g, b away from (or toward) mid-grey 128.
///
/// A percentage of `-100` collapses every channel to flat grey. Alpha is
/// untouched.
pub fn increase_contrast(rgba: Rgba, percentage: f64) -> Rgba {
    let factor = percentage_to_factor(percentage);
    let (r, g, b, a) = rgba;
    let f = |channel: i32| patch(128.0 + (f64::from(channel) - 128.0) * factor);

    (f(r), f(g), f(b), a)
}

/// Push r, g, b away from (or toward) their own mean.
///
/// A percentage of `-100` desaturates fully to the average grey. Alpha is
/// untouched.
pub fn increase_saturation(rgba: Rgba, percentage: f64) -> Rgba {
    let factor = percentage_to_factor(percentage);
    let (r, g, b, a) = rgba;
    let grey = f64::from(r + g + b) / 3.0;
    let f = |channel: i32| patch(grey + (f64::from(channel) - grey) * factor);

    (f(r), f(g), f(b), a)
}

/// Rotate hue in HSV space by the given degrees, wrapping modulo 360.
///
/// Saturation, value, and alpha are preserved.
pub fn increase_hue(rgba: Rgba, degrees: f64) -> Rgba {
    use palette::{Hsv, IntoColor, ShiftHue, Srgb};

    let (r, g, b, a) = rgba;

    let srgb: Srgb<f32> = Srgb::new(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
    );

    let hsv: Hsv = srgb.into_color();
    let hsv = hsv.shift_hue(degrees as f32);
    let out: Srgb<f32> = hsv.into_color();

    (
        patch(f64::from(out.red) * 255.0),
        patch(f64::from(out.green) * 255.0),
        patch(f64::from(out.blue) * 255.0),
        a,
    )
}

/// Blend two colours with strength `delta` in `[0, 100]`.
///
/// Each channel is linearly interpolated and truncated, then r, g, b are
/// squared. The squaring is deliberate (it biases blends brighter than a
/// naive linear mix) and is NOT clamped, so results above 255 are possible;
/// `blend(c1, c2, 0.0)` yields the squared `c1`, not `c1` itself.
pub fn blend(rgba1: Rgba, rgba2: Rgba, delta: f64) -> Rgba {
    let delta = delta.clamp(0.0, 100.0);
    let factor = delta / 100.0;

    let (r1, g1, b1, a1) = rgba1;
    let (r2, g2, b2, a2) = rgba2;

    let lerp =
        |c1: i32, c2: i32| truncate(f64::from(c1) * (1.0 - factor) + f64::from(c2) * factor);

    let r = lerp(r1, r2);
    let g = lerp(g1, g2);
    let b = lerp(b1, b2);

    (r * r, g * g, b * b, lerp(a1, a2))
}

/// Invert r, g, b; alpha is patched but numerically untouched.
pub fn invert(rgba: Rgba) -> Rgba {
    let (r, g, b, a) = rgba;
    let f = |c: i32| patch(255.0 - f64::from(c));

    (f(r), f(g), f(b), patch(f64::from(a)))
}

/// Shift colour temperature: positive `delta` blends toward [`WARM`],
/// non-positive toward [`COOL`] with strength `-delta`.
pub fn temperature(rgba: Rgba, delta: f64) -> Rgba {
    temperature_with(rgba, delta, WARM, COOL)
}

/// [`temperature`] with caller-supplied warm and cool reference colours.
///
/// The references inherit the input's alpha before blending.
pub fn temperature_with(
    rgba: Rgba,
    delta: f64,
    warm: (i32, i32, i32),
    cool: (i32, i32, i32),
) -> Rgba {
    let a = rgba.3;

    if delta > 0.0 {
        blend(rgba, (warm.0, warm.1, warm.2, a), delta)
    } else {
        blend(rgba, (cool.0, cool.1, cool.2, a), -delta)
    }
}

/// Produce `steps` colours evenly interpolated from `rgba1` to `rgba2`.
///
/// Endpoints follow [`blend`]'s boundary behaviour: the first entry is
/// `blend(rgba1, rgba2, 0.0)` (squared `rgba1`), the last
/// `blend(rgba1, rgba2, 100.0)`. Fails if `steps <= 1`.
pub fn gradient(rgba1: Rgba, rgba2: Rgba, steps: u32) -> Result<Vec<Rgba>> {
    if steps <= 1 {
        return Err(HueError::InvalidArgument {
            message: format!("gradient requires at least 2 steps, got {}", steps),
        });
    }

    let last = f64::from(steps - 1);

    Ok((0..steps)
        .map(|i| blend(rgba1, rgba2, f64::from(i) / last * 100.0))
        .collect())
}
