//! Separable box blur.
//!
//! Each iteration runs a horizontal then a vertical pass. A pass is an
//! O(n) sliding accumulator per row/column, not an O(n·window)
//! convolution: the running sum adds the sample entering the window and
//! subtracts the one leaving it as the window slides along the axis.
//!
//! Near the grid edges the window is truncated rather than zero-padded,
//! so the output is the running sum divided by the *current* hit count
//! (between 1 and `2 * radius + 1` samples), never the nominal window
//! length.

// Sliding-window arithmetic mixes signed window offsets with unsigned
// grid coordinates
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use depth_types::DepthGrid;
use tracing::debug;

/// Smooth a depth grid in place with an iterated separable box blur.
///
/// The effective window length is `2 * radius + 1`. Averaged values are
/// clamped to `[0, 1]` when written back, absorbing floating-point drift
/// from the running sum. A `radius` or `iterations` of 0 leaves the grid
/// untouched.
///
/// # Example
///
/// ```
/// use depth_types::DepthGrid;
/// use depth_field::box_blur;
///
/// let mut grid = DepthGrid::new(3, 1);
/// grid.set(1, 0, 1.0);
/// box_blur(&mut grid, 1, 1);
///
/// // Every cell now averages its truncated 3-wide window.
/// assert!((grid.get(0, 0) - 0.5).abs() < 1e-6);
/// assert!((grid.get(1, 0) - 1.0 / 3.0).abs() < 1e-6);
/// ```
pub fn box_blur(grid: &mut DepthGrid, radius: u32, iterations: u32) {
    if radius == 0 || iterations == 0 {
        return;
    }

    debug!(
        "box blur: radius {}, {} iterations on {}x{} grid",
        radius,
        iterations,
        grid.width(),
        grid.height()
    );

    let half = radius as isize;
    for _ in 0..iterations {
        blur_horizontal(grid, half);
        blur_vertical(grid, half);
    }
}

/// One horizontal sliding-window pass.
fn blur_horizontal(grid: &mut DepthGrid, half: isize) {
    let w = grid.width() as isize;
    let h = grid.height() as isize;
    let mut row = vec![0.0_f32; grid.width()];

    for y in 0..h {
        let mut hits = 0_i32;
        let mut sum = 0.0_f32;

        for x in -half..w {
            let leaving = x - half - 1;
            if leaving >= 0 {
                sum -= grid.get(leaving as usize, y as usize);
                hits -= 1;
            }

            let entering = x + half;
            if entering < w {
                sum += grid.get(entering as usize, y as usize);
                hits += 1;
            }

            if x >= 0 {
                row[x as usize] = sum / hits as f32;
            }
        }

        for x in 0..w {
            // Clamp due to numerical inaccuracies
            grid.set(x as usize, y as usize, row[x as usize].clamp(0.0, 1.0));
        }
    }
}

/// One vertical sliding-window pass.
fn blur_vertical(grid: &mut DepthGrid, half: isize) {
    let w = grid.width() as isize;
    let h = grid.height() as isize;
    let mut column = vec![0.0_f32; grid.height()];

    for x in 0..w {
        let mut hits = 0_i32;
        let mut sum = 0.0_f32;

        for y in -half..h {
            let leaving = y - half - 1;
            if leaving >= 0 {
                sum -= grid.get(x as usize, leaving as usize);
                hits -= 1;
            }

            let entering = y + half;
            if entering < h {
                sum += grid.get(x as usize, entering as usize);
                hits += 1;
            }

            if y >= 0 {
                column[y as usize] = sum / hits as f32;
            }
        }

        for y in 0..h {
            // Clamp due to numerical inaccuracies
            grid.set(x as usize, y as usize, column[y as usize].clamp(0.0, 1.0));
        }
    }
}
