use std::path::Path;

use image::{GrayImage, ImageFormat, Luma, Rgb, RgbImage};

use crate::consts::OVERLAY_BOX_COLOR;
use crate::detection::BoundingBox;
use crate::error::{Result, ShipScanError};
use crate::raster::Raster;

/// Load band 1 of an image as a water-index raster on the 0-255 scale.
///
/// Band 1 is the gray channel of a grayscale image and the red channel of a
/// color image; the other channels are ignored.
pub fn load_index_raster(path: &Path) -> Result<Raster<f32>> {
    let img = image::open(path)?;
    let band: GrayImage = if img.color().has_color() {
        let rgb = img.to_rgb8();
        GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| Luma([rgb.get_pixel(x, y).0[0]]))
    } else {
        img.to_luma8()
    };

    let (w, h) = band.dimensions();
    let mut index = Raster::zeros(h as usize, w as usize);
    for (col, row, pixel) in band.enumerate_pixels() {
        index.set(row as usize, col as usize, pixel.0[0] as f32)?;
    }

    Ok(index)
}

/// Load a true-color image used as the overlay background.
pub fn load_rgb(path: &Path) -> Result<RgbImage> {
    Ok(image::open(path)?.to_rgb8())
}

/// Fail unless `rgb` has the same `rows x columns` as `index`.
pub fn check_rgb_dims(index: &Raster<f32>, rgb: &RgbImage) -> Result<()> {
    let found = (rgb.height() as usize, rgb.width() as usize);
    if index.dim() != found {
        return Err(ShipScanError::DimensionMismatch {
            expected: index.dim(),
            found,
        });
    }
    Ok(())
}

/// Save a boolean mask as an 8-bit PNG (white = true).
pub fn save_mask_png(mask: &Raster<bool>, path: &Path) -> Result<()> {
    let (h, w) = mask.dim();
    let data = mask.as_array();

    let mut img = GrayImage::new(w as u32, h as u32);
    for row in 0..h {
        for col in 0..w {
            let val = if data[[row, col]] { 255 } else { 0 };
            img.put_pixel(col as u32, row as u32, Luma([val]));
        }
    }

    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Draw a 1-pixel outline for each box onto a copy of `rgb`.
///
/// Outlines use the nominal side anchored at the box's top-left corner and
/// are clipped to the image.
pub fn render_overlay(rgb: &RgbImage, boxes: &[BoundingBox]) -> RgbImage {
    let mut out = rgb.clone();
    let (w, h) = (out.width() as usize, out.height() as usize);
    let color = Rgb(OVERLAY_BOX_COLOR);

    for b in boxes {
        let top = b.row_start;
        let left = b.col_start;
        let bottom = top + b.side.saturating_sub(1);
        let right = left + b.side.saturating_sub(1);

        for col in left..=right.min(w.saturating_sub(1)) {
            for row in [top, bottom] {
                if row < h && col < w {
                    out.put_pixel(col as u32, row as u32, color);
                }
            }
        }
        for row in top..=bottom.min(h.saturating_sub(1)) {
            for col in [left, right] {
                if row < h && col < w {
                    out.put_pixel(col as u32, row as u32, color);
                }
            }
        }
    }

    out
}

/// Render the box overlay and save it as an 8-bit RGB PNG.
pub fn save_overlay_png(rgb: &RgbImage, boxes: &[BoundingBox], path: &Path) -> Result<()> {
    render_overlay(rgb, boxes).save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
