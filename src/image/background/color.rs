use image::Rgba;

/// Euclidean distance between the RGB channels of a pixel and a color.
///
/// Alpha is ignored.
#[inline]
pub(super) fn color_distance(pixel: &Rgba<u8>, color: &[u8; 3]) -> f32 {
    color_distance_sq(pixel, color).sqrt()
}

#[inline]
fn color_distance_sq(pixel: &Rgba<u8>, color: &[u8; 3]) -> f32 {
    pixel.0[..3]
        .iter()
        .zip(color)
        .map(|(&a, &b)| {
            let d = f32::from(a) - f32::from(b);
            d * d
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::color_distance;

    #[test]
    fn distance_ignores_alpha() {
        let a = color_distance(&Rgba([10, 20, 30, 0]), &[10, 20, 30]);
        let b = color_distance(&Rgba([10, 20, 30, 255]), &[10, 20, 30]);
        assert_eq!(a, 0.0);
        assert_eq!(b, 0.0);
    }

    #[test]
    fn distance_is_euclidean() {
        // 3-4-0 triangle
        let d = color_distance(&Rgba([3, 4, 0, 255]), &[0, 0, 0]);
        assert!((d - 5.0).abs() < f32::EPSILON);

        let d = color_distance(&Rgba([0, 0, 0, 255]), &[255, 255, 255]);
        assert!((d - 441.672_94).abs() < 1e-3);
    }
}
