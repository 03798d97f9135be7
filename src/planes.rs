// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a square on the integral plane with an origin at 0,0, and
//! a square window on the complex plane described by its center and
//! the length of its sides.
use num::Complex;

use errors::RenderError;

/// Describes the x, y of a pixel on the integral plane.  `y` grows
/// upward, the same direction as the imaginary axis; flipping it into
/// image rows is the raster's business.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub u32, pub u32);

/// The square region of the complex plane we're looking at.  The
/// span is the full width (and height) of the window in plane units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewWindow {
    center: Complex<f64>,
    span: f64,
}

impl ViewWindow {
    /// The whole set, more or less centered.
    pub fn whole_set() -> Self {
        ViewWindow {
            center: Complex::new(-0.75, 0.0),
            span: 3.5,
        }
    }

    /// Constructor.  The span must be positive; zooming past the
    /// precision of an f64 is the caller's problem.
    pub fn new(center: Complex<f64>, span: f64) -> Result<ViewWindow, RenderError> {
        if !(span.is_finite() && span > 0.0) {
            return Err(RenderError::InvalidSpan(span));
        }
        if !(center.re.is_finite() && center.im.is_finite()) {
            return Err(RenderError::InvalidCenter(center.re, center.im));
        }
        Ok(ViewWindow { center, span })
    }

    /// The point in the middle of the window.
    pub fn center(&self) -> Complex<f64> {
        self.center
    }

    /// The width and height of the window.
    pub fn span(&self) -> f64 {
        self.span
    }

    /// The lower-left corner of the window.
    pub fn leftlower(&self) -> Complex<f64> {
        let half = self.span / 2.0;
        Complex::new(self.center.re - half, self.center.im - half)
    }
}

impl Default for ViewWindow {
    fn default() -> Self {
        ViewWindow::whole_set()
    }
}

/// Maps the pixels of a `size` x `size` image onto a view window, and
/// back again.
#[derive(Debug, Clone)]
pub struct PlaneMapper {
    size: u32,
    window: ViewWindow,
    leftlower: Complex<f64>,
}

impl PlaneMapper {
    /// Constructor.  Takes the side of the square image in pixels and
    /// the window on the complex plane it shows.
    pub fn new(size: u32, window: ViewWindow) -> Result<PlaneMapper, RenderError> {
        if size == 0 {
            return Err(RenderError::EmptyImage);
        }
        Ok(PlaneMapper {
            size,
            window,
            leftlower: window.leftlower(),
        })
    }

    /// The side of the square image.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// The window on the complex plane.
    pub fn window(&self) -> &ViewWindow {
        &self.window
    }

    /// Given a pixel on the integral cartesian plane, map it to the
    /// point on the complex plane at its lower-left corner.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        let span = self.window.span;
        let size = f64::from(self.size);
        Complex::new(
            f64::from(pixel.0) * span / size + self.leftlower.re,
            f64::from(pixel.1) * span / size + self.leftlower.im,
        )
    }

    /// Given a complex number inside the window, map it as closely as
    /// possible to a pixel.  Points outside the window have no pixel.
    pub fn point_to_pixel(&self, point: &Complex<f64>) -> Option<Pixel> {
        let size = f64::from(self.size);
        let left = ((point.re - self.leftlower.re) * size / self.window.span).floor();
        let top = ((point.im - self.leftlower.im) * size / self.window.span).floor();
        if left < 0.0 || left >= size || top < 0.0 || top >= size {
            return None;
        }
        Some(Pixel(left as u32, top as u32))
    }

    /// Converts a distance on the complex plane into log2 of that
    /// distance measured on screen in two-pixel steps.  Zero means two
    /// pixels; each unit below that halves it.
    pub fn distance_octaves(&self, distance: f64) -> f64 {
        (distance / self.window.span * (f64::from(self.size) / 2.0)).log2()
    }
}
