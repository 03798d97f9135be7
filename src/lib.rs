#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Distance-estimated Mandelbrot renderer
//!
//! The Mandelbrot set is the set of points `c` on the complex plane
//! for which repeatedly squaring and adding `c` never runs off to
//! infinity.  The classic picture colors the points outside the set
//! by how quickly they run away.  This renderer does that too, but
//! with a few refinements:
//!
//! * The escape count is smoothed into a fractional "dwell", so there
//!   are no hard bands between one count and the next.
//! * Tracking the derivative of the orbit gives an estimate of how far
//!   each point is from the set.  Points close to the set are drawn
//!   dark, which brings out the filaments that a plain escape-time
//!   image loses between its pixels.
//! * The angle at which the orbit escapes splits each dwell band into
//!   squares, which makes the external rays visible.
//! * Orbits that fall into a cycle are caught early, so the inside of
//!   the set (drawn in white) is cheap.
//!
//! `render` is the entry point: give it a window on the plane, an
//! image size and an iteration budget, and it hands back a raster.
//! Every pixel is independent of every other, so the work is spread
//! across threads one image row at a time.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate image;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;
extern crate num_cpus;

#[cfg(test)]
extern crate rand;
#[cfg(test)]
extern crate tempfile;

pub mod colors;
pub mod errors;
pub mod estimator;
pub mod output;
pub mod planes;
pub mod raster;
pub mod render;

pub use colors::{colorize, Color, Hsv};
pub use errors::RenderError;
pub use estimator::{estimate, Escape, Orbit, DEFAULT_ESCAPE_RADIUS};
pub use planes::{Pixel, PlaneMapper, ViewWindow};
pub use raster::Raster;
pub use render::{render, Renderer};
