// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Drives the whole pipeline: every pixel is mapped to a point,
//! iterated, colored and written to the raster.  No pixel depends on
//! any other, so the threaded renderer simply hands out image rows to
//! whichever thread is free.  Rows near the set take far longer than
//! rows far from it, which is why rows are handed out one at a time
//! rather than in fixed bands.

extern crate crossbeam;

use itertools::iproduct;
use num::Complex;
use std::iter::Enumerate;
use std::slice::ChunksMut;
use std::sync::Mutex;
use std::time::Instant;

use colors::colorize;
use errors::RenderError;
use estimator::{estimate, DEFAULT_ESCAPE_RADIUS};
use planes::{Pixel, PlaneMapper, ViewWindow};
use raster::{put_in_row, Raster};

type RowQueue<'a> = Mutex<Enumerate<ChunksMut<'a, u8>>>;

/// Holds everything needed to render a view: the mapping between
/// pixels and the plane, and the knobs on the iterator.  Once built,
/// a renderer is immutable and can be shared between threads.
#[derive(Debug, Clone)]
pub struct Renderer {
    plane: PlaneMapper,
    max_iterations: usize,
    escape_radius: f64,
}

impl Renderer {
    /// Requires the window on the complex plane, the side of the
    /// square image, and the most iterations to spend on any one
    /// point.
    pub fn new(
        window: ViewWindow,
        size: u32,
        max_iterations: usize,
    ) -> Result<Renderer, RenderError> {
        let plane = PlaneMapper::new(size, window)?;
        if max_iterations == 0 {
            return Err(RenderError::NoIterations);
        }
        Ok(Renderer {
            plane,
            max_iterations,
            escape_radius: DEFAULT_ESCAPE_RADIUS,
        })
    }

    /// Replaces the escape radius, which must exceed 1.
    pub fn with_escape_radius(self, escape_radius: f64) -> Result<Renderer, RenderError> {
        if !(escape_radius.is_finite() && escape_radius > 1.0) {
            return Err(RenderError::InvalidEscapeRadius(escape_radius));
        }
        Ok(Renderer {
            escape_radius,
            ..self
        })
    }

    /// The pixel/plane mapping.
    pub fn plane(&self) -> &PlaneMapper {
        &self.plane
    }

    /// The iteration budget per point.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// The escape radius.
    pub fn escape_radius(&self) -> f64 {
        self.escape_radius
    }

    /// The point under a pixel.
    pub fn point(&self, pixel: &Pixel) -> Complex<f64> {
        self.plane.pixel_to_point(pixel)
    }

    /// Fills one image row.  `y` is the pixel row on the plane, which
    /// runs the other way from image rows.
    fn render_row(&self, y: u32, row: &mut [u8]) {
        for x in 0..self.plane.size() {
            let c = self.plane.pixel_to_point(&Pixel(x, y));
            let orbit = estimate(c, self.max_iterations, self.escape_radius);
            put_in_row(row, x, &colorize(&orbit, &self.plane));
        }
    }

    /// The main function for single-threaded renders.
    pub fn render_single(&self) -> Raster {
        let started = Instant::now();
        let size = self.plane.size();
        let mut raster = Raster::new(size);
        for (x, y) in iproduct!(0..size, 0..size) {
            let c = self.plane.pixel_to_point(&Pixel(x, y));
            let orbit = estimate(c, self.max_iterations, self.escape_radius);
            let row = raster.row_of(y);
            raster.put(x, row, &colorize(&orbit, &self.plane));
        }
        info!("Rendered {0}x{0} on one thread in {1:?}", size, started.elapsed());
        raster
    }

    /// A multi-threaded version of the render function that takes a
    /// thread count.  The result is identical to `render_single`.
    pub fn render(&self, threads: usize) -> Result<Raster, RenderError> {
        if threads == 0 {
            return Err(RenderError::NoThreads);
        }
        let started = Instant::now();
        let size = self.plane.size();
        let mut raster = Raster::new(size);
        info!(
            "Rendering {0}x{0} of {1:?} with {2} iterations on {3} threads",
            size,
            self.plane.window(),
            self.max_iterations,
            threads
        );

        {
            let queue: RowQueue = Mutex::new(raster.rows_mut().enumerate());
            let queue = &queue;
            crossbeam::scope(|spawner| {
                for worker in 0..threads {
                    spawner.spawn(move |_| {
                        let mut done = 0;
                        loop {
                            let next = queue.lock().ok().and_then(|mut rows| rows.next());
                            match next {
                                Some((index, row)) => {
                                    self.render_row(size - 1 - index as u32, row);
                                    done += 1;
                                }
                                None => {
                                    break;
                                }
                            }
                        }
                        debug!("Worker {} rendered {} rows", worker, done);
                    });
                }
            })
            .map_err(|_| RenderError::WorkerPanicked)?;
        }

        info!("Rendered in {:?}", started.elapsed());
        Ok(raster)
    }
}

/// Renders `window` into a `size` x `size` raster, spending at most
/// `max_iterations` on each point, on every available CPU.
pub fn render(
    window: ViewWindow,
    size: u32,
    max_iterations: usize,
) -> Result<Raster, RenderError> {
    Renderer::new(window, size, max_iterations)?.render(num_cpus::get())
}
