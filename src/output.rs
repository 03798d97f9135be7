// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Getting a finished raster out of the program.  Rendering at twice
//! the final size and shrinking the result with a good filter is a
//! cheap way to get an anti-aliased image.

use failure::Error;
use image::imageops::{self, FilterType};
use image::RgbImage;
use std::path::Path;

/// Shrinks an image by an integer factor with a Lanczos filter.  A
/// factor of one (or zero) returns a copy.  Never shrinks below one
/// pixel.
pub fn downsample(image: &RgbImage, factor: u32) -> RgbImage {
    if factor <= 1 {
        return image.clone();
    }
    let (width, height) = image.dimensions();
    let width = (width / factor).max(1);
    let height = (height / factor).max(1);
    imageops::resize(image, width, height, FilterType::Lanczos3)
}

/// Writes an image to disk; the format comes from the file extension.
pub fn save<P: AsRef<Path>>(image: &RgbImage, path: P) -> Result<(), Error> {
    let path = path.as_ref();
    image.save(path)?;
    info!("Wrote {}x{} image to {}", image.width(), image.height(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn downsample_halves_the_image() {
        let image = RgbImage::from_pixel(16, 16, Rgb([255, 255, 255]));
        let small = downsample(&image, 2);
        assert_eq!(small.dimensions(), (8, 8));
        // A flat image stays (nearly) flat through the filter.
        assert!(small.pixels().all(|p| p.0.iter().all(|&c| c >= 250)));
    }

    #[test]
    fn downsample_never_vanishes() {
        let image = RgbImage::new(1, 1);
        assert_eq!(downsample(&image, 2).dimensions(), (1, 1));
        assert_eq!(downsample(&image, 1).dimensions(), (1, 1));
    }

    #[test]
    fn save_writes_a_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let image = RgbImage::from_pixel(4, 4, Rgb([10, 20, 30]));
        save(&image, &path).unwrap();
        let back = image::open(&path).unwrap().to_rgb();
        assert_eq!(back.dimensions(), (4, 4));
        assert_eq!(*back.get_pixel(3, 3), Rgb([10, 20, 30]));
    }

    #[test]
    fn save_reports_unwritable_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");
        let image = RgbImage::new(2, 2);
        assert!(save(&image, &path).is_err());
    }
}
