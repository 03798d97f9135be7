// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turns what the iterator found out about a point into a color.
//!
//! This combines three classic techniques: the distance estimate sets
//! the brightness, the dwell picks a position on a color wheel, and the
//! escape angle (binary decomposition) splits every dwell band into
//! "squares" so the external rays show.  The mapping follows Robert
//! Munafo's coloring pseudocode from http://mrob.com/pub/muency/color.html
//! and every constant in here is load-bearing for the final look.

use image::Rgb;

use estimator::{Escape, Orbit};
use planes::PlaneMapper;

/// A color in the hue/saturation/value model.  Hue is in degrees,
/// `[0, 360)`; saturation and value are in `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsv {
    /// Degrees around the color wheel.
    pub hue: f64,
    /// Distance from the white center of the wheel.
    pub saturation: f64,
    /// Brightness.
    pub value: f64,
}

/// A normalized RGB color, every channel in `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    /// Red.
    pub r: f64,
    /// Green.
    pub g: f64,
    /// Blue.
    pub b: f64,
}

impl Color {
    /// The color of points inside the set.
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Converts to 8 bits per channel: truncate to 16-bit fixed point,
    /// then keep the high byte.
    pub fn to_rgb8(&self) -> Rgb<u8> {
        let f = |v: f64| (((v * 65535.0) as u16) >> 8) as u8;
        Rgb([f(self.r), f(self.g), f(self.b)])
    }
}

impl Hsv {
    /// The usual six-sector conversion.  Hues outside `[0, 360)` come
    /// out as a gray of the given value.
    pub fn to_rgb(&self) -> Color {
        let sector = self.hue / 60.0;
        let chroma = self.value * self.saturation;
        let x = chroma * (1.0 - ((sector % 2.0) - 1.0).abs());
        let m = self.value - chroma;

        let (r, g, b) = if 0.0 <= sector && sector < 1.0 {
            (chroma, x, 0.0)
        } else if 1.0 <= sector && sector < 2.0 {
            (x, chroma, 0.0)
        } else if 2.0 <= sector && sector < 3.0 {
            (0.0, chroma, x)
        } else if 3.0 <= sector && sector < 4.0 {
            (0.0, x, chroma)
        } else if 4.0 <= sector && sector < 5.0 {
            (x, 0.0, chroma)
        } else if 5.0 <= sector && sector < 6.0 {
            (chroma, 0.0, x)
        } else {
            (0.0, 0.0, 0.0)
        };

        Color {
            r: m + r,
            g: m + g,
            b: m + b,
        }
    }
}

/// Number of distance octaves the dark shell around the set fades over.
const SHELL_OCTAVES: f64 = 8.0;

/// The dwell at which the color wheel has been traversed once, more or less.
const DWELL_RANGE: f64 = 100_000.0;

/// Converts the distance estimate, already in log2 screen units, to a
/// brightness.  Anything more than two pixels away is fully lit; the
/// next eight octaves inward fade to black.
pub fn shell_brightness(octaves: f64) -> f64 {
    if octaves > 0.0 {
        1.0
    } else if octaves > -SHELL_OCTAVES {
        (SHELL_OCTAVES + octaves) / SHELL_OCTAVES
    } else {
        0.0
    }
}

/// Maps a dwell onto an (angle, radius) pair on a color wheel with
/// white in the center, pastels near it and vivid colors at the rim.
/// The square root spreads successive points evenly over the area of
/// the wheel.  The angle gets multiplied later, so we go around the
/// wheel several times.
pub fn wheel_position(dwell: f64) -> (f64, f64) {
    let p = dwell.ln() / DWELL_RANGE.ln();
    if p < 0.5 {
        let p = 1.0 - 1.5 * p;
        (1.0 - p, p.sqrt())
    } else {
        let p = 1.5 * p - 0.5;
        (p, p.sqrt())
    }
}

/// Colors an escaping point.  `plane` supplies the on-screen scale
/// for the distance estimate.
pub fn shade(escape: &Escape, plane: &PlaneMapper) -> Hsv {
    let stripe = escape.dwell.floor();
    let fraction = escape.dwell - stripe;

    let mut value = shell_brightness(plane.distance_octaves(escape.distance));
    let (mut angle, mut radius) = wheel_position(escape.dwell);

    // Every other dwell band is a bit darker and paler.
    if stripe % 2.0 != 0.0 {
        value *= 0.85;
        radius *= 0.667;
    }

    // Break the bands into squares along the branch cut.
    if escape.phase < 0.0 {
        angle += 0.02;
    }

    angle += 0.0001 * fraction;
    let hue = angle * 5.0;
    let hue = (hue - hue.floor()) * 359.0;

    Hsv {
        hue,
        saturation: radius - radius.floor(),
        value,
    }
}

/// The color for any point: white inside the set, `shade`d outside.
pub fn colorize(orbit: &Orbit, plane: &PlaneMapper) -> Color {
    match *orbit {
        Orbit::Bounded { .. } => Color::WHITE,
        Orbit::Escaped(ref escape) => shade(escape, plane).to_rgb(),
    }
}
