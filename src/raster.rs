// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The output buffer.  It's allocated once at full size and every
//! pixel in it is written exactly once by the renderer; nothing reads
//! it back until the render is over.
//!
//! Rows are stored top to bottom, as image files expect, while the
//! complex plane's imaginary axis points up.  `row_of` does the flip.

use image::{Rgb, RgbImage};
use std::slice::ChunksMut;

use colors::Color;

/// Bytes per pixel: red, green, blue.
pub const CHANNELS: usize = 3;

/// A square, 8-bit RGB image under construction.
#[derive(Clone, Debug)]
pub struct Raster {
    image: RgbImage,
}

impl Raster {
    /// A black raster, `size` pixels on a side.
    pub fn new(size: u32) -> Raster {
        Raster {
            image: RgbImage::new(size, size),
        }
    }

    /// The side of the raster.
    pub fn size(&self) -> u32 {
        self.image.width()
    }

    /// The image row that a pixel with plane coordinate `y` lands in.
    pub fn row_of(&self, y: u32) -> u32 {
        self.size() - 1 - y
    }

    /// Stores a color at column `x`, image row `row`.
    pub fn put(&mut self, x: u32, row: u32, color: &Color) {
        self.image.put_pixel(x, row, color.to_rgb8());
    }

    /// The pixel at column `x`, image row `row`.
    pub fn pixel(&self, x: u32, row: u32) -> Rgb<u8> {
        *self.image.get_pixel(x, row)
    }

    /// The image rows as disjoint mutable slices, top to bottom, so
    /// each can be handed to a different thread.
    pub fn rows_mut(&mut self) -> ChunksMut<u8> {
        let stride = self.size() as usize * CHANNELS;
        self.image.chunks_mut(stride)
    }

    /// The raw RGB bytes, row by row.
    pub fn as_bytes(&self) -> &[u8] {
        &self.image
    }

    /// Gives up the finished image.
    pub fn into_image(self) -> RgbImage {
        self.image
    }
}

/// Stores a color at column `x` of a row slice handed out by `rows_mut`.
pub fn put_in_row(row: &mut [u8], x: u32, color: &Color) {
    let offset = x as usize * CHANNELS;
    let rgb = color.to_rgb8();
    row[offset..offset + CHANNELS].copy_from_slice(&rgb.0);
}
