use std::collections::VecDeque;

use image::{Rgba, RgbaImage};

use crate::image::background::color::color_distance;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Clear every corner-connected pixel close to `background`.
///
/// Breadth-first over 4-connected neighbours. Every candidate is compared
/// against `background` itself, never against the neighbour it was reached
/// from, so gradients cannot walk the fill into the subject.
///
/// Returns the number of cleared pixels.
pub(super) fn erase_corner_connected(
    output: &mut RgbaImage,
    background: [u8; 3],
    tolerance: f32,
) -> usize {
    let (width, height) = output.dimensions();
    if width == 0 || height == 0 {
        return 0;
    }

    let len = width as usize * height as usize;
    let mut visited = vec![false; len];
    let mut queue = VecDeque::with_capacity((width as usize + height as usize) * 2);

    let corners = [
        (0, 0),
        (width - 1, 0),
        (0, height - 1),
        (width - 1, height - 1),
    ];
    for (x, y) in corners {
        enqueue(&mut queue, &mut visited, output, background, tolerance, x, y);
    }

    let mut cleared = 0;
    while let Some((x, y)) = queue.pop_front() {
        output.put_pixel(x, y, TRANSPARENT);
        cleared += 1;

        if x > 0 {
            enqueue(&mut queue, &mut visited, output, background, tolerance, x - 1, y);
        }
        if x + 1 < width {
            enqueue(&mut queue, &mut visited, output, background, tolerance, x + 1, y);
        }
        if y > 0 {
            enqueue(&mut queue, &mut visited, output, background, tolerance, x, y - 1);
        }
        if y + 1 < height {
            enqueue(&mut queue, &mut visited, output, background, tolerance, x, y + 1);
        }
    }

    cleared
}

/// Mark and enqueue `(x, y)` if it is unvisited and matches the background.
///
/// Visited pixels are never re-tested, so a pixel cleared earlier in the
/// fill cannot be mistaken for a background match.
#[inline]
fn enqueue(
    queue: &mut VecDeque<(u32, u32)>,
    visited: &mut [bool],
    img: &RgbaImage,
    background: [u8; 3],
    tolerance: f32,
    x: u32,
    y: u32,
) {
    let idx = pixel_index(img.width(), x, y);
    if visited[idx] {
        return;
    }
    if color_distance(img.get_pixel(x, y), &background) < tolerance {
        visited[idx] = true;
        queue.push_back((x, y));
    }
}

#[inline]
fn pixel_index(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}
