// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong before (or, for a worker panic, while)
//! a render runs.  Every configuration problem is caught before the
//! first pixel is computed, so a failed render never hands back a
//! partially filled raster.

/// The error type for the renderer.
#[derive(Debug, Fail, PartialEq)]
pub enum RenderError {
    /// The view window must cover a positive, finite width of the plane.
    #[fail(display = "View span must be a positive, finite number, got {}", _0)]
    InvalidSpan(f64),

    /// The view window's center must be a finite point.
    #[fail(display = "View center must be a finite point, got {}{:+}i", _0, _1)]
    InvalidCenter(f64, f64),

    /// Images must be at least one pixel on a side.
    #[fail(display = "Image size must be at least one pixel")]
    EmptyImage,

    /// At least one iteration is needed to classify a point.
    #[fail(display = "Iteration budget must be at least one")]
    NoIterations,

    /// The smooth dwell takes log2(log2(radius)), which needs radius > 1.
    #[fail(display = "Escape radius must be finite and greater than 1, got {}", _0)]
    InvalidEscapeRadius(f64),

    /// A threaded render needs somebody to do the work.
    #[fail(display = "Thread count must be at least one")]
    NoThreads,

    /// A render thread died before finishing its rows.
    #[fail(display = "A render worker panicked")]
    WorkerPanicked,
}
