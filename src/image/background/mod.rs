//! Remove flat backgrounds from generated artwork.
//!
//! The background color is sampled from the top-left pixel (or given
//! explicitly) and cleared by a flood fill seeded from the four corners.
//! Only pixels connected to a corner are touched, so background-colored
//! areas enclosed by the subject survive.

mod color;
mod floodfill;

use image::RgbaImage;

use floodfill::erase_corner_connected;

/// Parameters of the background flood fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloodOptions {
    /// Euclidean RGB distance below which a pixel counts as background.
    pub tolerance: f32,
    /// Background color. `None` samples the pixel at `(0, 0)`.
    pub background: Option<[u8; 3]>,
}

impl FloodOptions {
    pub const fn with_tolerance(tolerance: f32) -> Self {
        Self {
            tolerance,
            background: None,
        }
    }
}

/// Clear the corner-connected background in place.
///
/// Returns the number of pixels made transparent.
pub fn erase_background(output: &mut RgbaImage, options: &FloodOptions) -> usize {
    let Some(background) = sample_background(output, options) else {
        return 0;
    };
    erase_corner_connected(output, background, options.tolerance)
}

/// Background color to match against: the explicit override, else `(0, 0)`.
fn sample_background(img: &RgbaImage, options: &FloodOptions) -> Option<[u8; 3]> {
    if let Some(color) = options.background {
        return Some(color);
    }
    if img.width() == 0 || img.height() == 0 {
        return None;
    }
    let p = img.get_pixel(0, 0);
    Some([p[0], p[1], p[2]])
}

#[cfg(test)]
mod tests {
    use image::{DynamicImage, Rgba, RgbaImage};

    use super::{FloodOptions, erase_background};

    fn remove_background_flood(img: &DynamicImage, options: &FloodOptions) -> RgbaImage {
        let mut output = img.to_rgba8();
        erase_background(&mut output, options);
        output
    }

    const BG: Rgba<u8> = Rgba([250, 250, 250, 255]);
    const FG: Rgba<u8> = Rgba([200, 40, 40, 255]);

    fn subject_on_background() -> RgbaImage {
        let mut img = RgbaImage::from_pixel(9, 9, BG);
        for y in 3..6 {
            for x in 3..6 {
                img.put_pixel(x, y, FG);
            }
        }
        img
    }

    #[test]
    fn uniform_image_becomes_transparent() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, BG));
        let out = remove_background_flood(&img, &FloodOptions::with_tolerance(30.0));
        assert!(out.pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn subject_pixels_untouched() {
        let img = subject_on_background();
        let out = remove_background_flood(
            &DynamicImage::ImageRgba8(img.clone()),
            &FloodOptions::with_tolerance(30.0),
        );

        for (x, y, p) in out.enumerate_pixels() {
            if (3..6).contains(&x) && (3..6).contains(&y) {
                assert_eq!(*p, FG, "subject pixel ({x},{y}) changed");
            } else {
                assert_eq!(*p, Rgba([0, 0, 0, 0]), "background pixel ({x},{y}) kept");
            }
        }
    }

    #[test]
    fn preserves_enclosed_background_island() {
        let mut img = RgbaImage::from_pixel(7, 7, BG);
        for x in 1..=5 {
            img.put_pixel(x, 1, FG);
            img.put_pixel(x, 5, FG);
        }
        for y in 1..=5 {
            img.put_pixel(1, y, FG);
            img.put_pixel(5, y, FG);
        }

        let count = erase_background(&mut img, &FloodOptions::with_tolerance(30.0));

        // Outer ring only: 49 - 25
        assert_eq!(count, 24);
        assert_eq!(img.get_pixel(0, 0)[3], 0);
        assert_eq!(*img.get_pixel(3, 3), BG);
        assert_eq!(*img.get_pixel(1, 1), FG);
    }

    #[test]
    fn samples_top_left_only() {
        // Top-left is red; the other corners are background-white.
        let mut img = RgbaImage::from_pixel(5, 5, BG);
        img.put_pixel(0, 0, FG);

        let count = erase_background(&mut img, &FloodOptions::with_tolerance(30.0));

        // Only the red corner itself matches the red sample.
        assert_eq!(count, 1);
        assert_eq!(img.get_pixel(0, 0)[3], 0);
        assert_eq!(*img.get_pixel(4, 4), BG);
    }

    #[test]
    fn explicit_background_overrides_sample() {
        let mut img = RgbaImage::from_pixel(5, 5, BG);
        img.put_pixel(0, 0, FG);

        let options = FloodOptions {
            tolerance: 30.0,
            background: Some([250, 250, 250]),
        };
        let count = erase_background(&mut img, &options);

        // Red corner is skipped, the remaining white area is still reached
        assert_eq!(count, 24);
        assert_eq!(*img.get_pixel(0, 0), FG);
    }

    #[test]
    fn handles_single_row_and_column() {
        let mut row = RgbaImage::from_pixel(3, 1, BG);
        assert_eq!(erase_background(&mut row, &FloodOptions::with_tolerance(30.0)), 3);

        let mut col = RgbaImage::from_pixel(1, 3, BG);
        assert_eq!(erase_background(&mut col, &FloodOptions::with_tolerance(30.0)), 3);
    }

    #[test]
    fn empty_image_is_noop() {
        let mut img = RgbaImage::new(0, 0);
        assert_eq!(erase_background(&mut img, &FloodOptions::with_tolerance(30.0)), 0);
    }

    #[test]
    fn converts_rgb_input_to_rgba() {
        let rgb = image::RgbImage::from_pixel(2, 2, image::Rgb([250, 250, 250]));
        let out = remove_background_flood(
            &DynamicImage::ImageRgb8(rgb),
            &FloodOptions::with_tolerance(30.0),
        );
        assert_eq!(out.dimensions(), (2, 2));
        assert!(out.pixels().all(|p| p[3] == 0));
    }
}
