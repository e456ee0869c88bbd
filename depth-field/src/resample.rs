//! Nearest-neighbor grid resampling.
//!
//! Maps an arbitrarily sized source grid onto a target grid whose long
//! axis is a power of two, preserving aspect ratio at integer-pixel
//! granularity. Truncation error from the integer division is absorbed
//! into the shorter axis, which may legally collapse to zero at small
//! subdivision exponents.

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use depth_types::DepthGrid;
use tracing::debug;

/// Compute the target grid size for a subdivision exponent.
///
/// The long axis gets `2^sub_divisions` cells; the short axis is scaled
/// by the source aspect ratio with truncating integer division. An empty
/// source yields an empty target.
///
/// # Example
///
/// ```
/// use depth_field::target_size;
///
/// assert_eq!(target_size(512, 256, 6), (64, 32));
/// assert_eq!(target_size(256, 512, 6), (32, 64));
/// // Truncation can collapse the short axis entirely.
/// assert_eq!(target_size(2, 2, 0), (1, 1));
/// assert_eq!(target_size(3, 2, 0), (1, 0));
/// ```
#[must_use]
pub fn target_size(source_w: usize, source_h: usize, sub_divisions: u32) -> (usize, usize) {
    if source_w == 0 || source_h == 0 {
        return (0, 0);
    }

    let long = 1_usize << sub_divisions;
    if source_w >= source_h {
        (long, long * source_h / source_w)
    } else {
        (long * source_w / source_h, long)
    }
}

/// Resample a source grid onto a `target_w` x `target_h` grid.
///
/// Each target cell `(x, y)` takes the nearest-neighbor source sample at
/// `(floor(x * sx), floor(y * sy))` with `sx = source_w / target_w` and
/// `sy = source_h / target_h` as real scale factors. No interpolation.
/// The output grid is always `target_w` x `target_h`; an empty source
/// yields it zero-filled.
///
/// The sampled coordinate is clamped to the full source dimension rather
/// than `dimension - 1`. `floor(x * sx)` stays strictly below the source
/// dimension for every in-range `x`, so the upper bound is never
/// reached; the bound is kept as-is because tightening it would change
/// the pixel mapping contract at the grid edge.
///
/// # Example
///
/// ```
/// use depth_types::DepthGrid;
/// use depth_field::resample;
///
/// let mut source = DepthGrid::new(4, 4);
/// source.set(3, 3, 1.0);
///
/// let half = resample(&source, 2, 2);
/// assert_eq!(half.get(1, 1), 0.0); // samples source (2, 2)
/// ```
#[must_use]
pub fn resample(source: &DepthGrid, target_w: usize, target_h: usize) -> DepthGrid {
    if source.is_empty() {
        // No samples to draw from; hand back a zero-filled grid of the
        // requested size so the output dimensions always match the
        // arguments.
        return DepthGrid::new(target_w, target_h);
    }

    debug!(
        "resampling {}x{} depth field to {}x{}",
        source.width(),
        source.height(),
        target_w,
        target_h
    );

    let scale_x = source.width() as f32 / target_w as f32;
    let scale_y = source.height() as f32 / target_h as f32;

    let mut target = DepthGrid::new(target_w, target_h);
    for y in 0..target_h {
        for x in 0..target_w {
            let sx = ((x as f32 * scale_x) as usize).min(source.width());
            let sy = ((y as f32 * scale_y) as usize).min(source.height());
            target.set(x, y, source.get(sx, sy));
        }
    }

    target
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn ramp_grid(width: usize, height: usize) -> DepthGrid {
        let data = (0..width * height)
            .map(|i| i as f32 / (width * height) as f32)
            .collect();
        DepthGrid::from_raw(width, height, data).unwrap()
    }

    #[test]
    fn target_size_wide_source() {
        // Long axis is the width; height scales by aspect ratio.
        assert_eq!(target_size(1024, 512, 6), (64, 32));
        assert_eq!(target_size(100, 30, 4), (16, 4)); // 16 * 30 / 100 truncates
    }

    #[test]
    fn target_size_tall_source() {
        assert_eq!(target_size(512, 1024, 6), (32, 64));
    }

    #[test]
    fn target_size_square_source() {
        // Width wins the >= tie-break.
        assert_eq!(target_size(300, 300, 5), (32, 32));
    }

    #[test]
    fn target_size_can_collapse_short_axis() {
        assert_eq!(target_size(3, 2, 0), (1, 0));
        assert_eq!(target_size(2, 3, 0), (0, 1));
    }

    #[test]
    fn target_size_empty_source() {
        assert_eq!(target_size(0, 16, 4), (0, 0));
        assert_eq!(target_size(16, 0, 4), (0, 0));
    }

    #[test]
    fn identity_resample_is_unchanged() {
        let source = ramp_grid(8, 6);
        let resampled = resample(&source, 8, 6);
        assert_eq!(source, resampled);
    }

    #[test]
    fn downsample_picks_nearest_neighbor() {
        let mut source = DepthGrid::new(4, 4);
        source.set(0, 0, 0.1);
        source.set(2, 0, 0.2);
        source.set(0, 2, 0.3);
        source.set(2, 2, 0.4);

        let half = resample(&source, 2, 2);
        assert_eq!(half.get(0, 0), 0.1);
        assert_eq!(half.get(1, 0), 0.2);
        assert_eq!(half.get(0, 1), 0.3);
        assert_eq!(half.get(1, 1), 0.4);
    }

    #[test]
    fn upsample_repeats_source_cells() {
        let source = DepthGrid::from_raw(2, 1, vec![0.25, 0.75]).unwrap();
        let doubled = resample(&source, 4, 1);
        assert_eq!(doubled.get(0, 0), 0.25);
        assert_eq!(doubled.get(1, 0), 0.25);
        assert_eq!(doubled.get(2, 0), 0.75);
        assert_eq!(doubled.get(3, 0), 0.75);
    }

    #[test]
    fn clamp_bound_is_never_reached() {
        // The clamp upper bound is the full source dimension, one past the
        // last valid index. For any target x in [0, tw) and scale sw/tw,
        // floor(x * sw / tw) <= (tw - 1) * sw / tw < sw, so the sampled
        // coordinate stays in range. Exercise a spread of shapes to pin
        // that boundary behavior down.
        for &(sw, sh, tw, th) in &[
            (7_usize, 5_usize, 3_usize, 2_usize),
            (5, 7, 2, 3),
            (16, 16, 16, 16),
            (9, 3, 8, 2),
            (2, 2, 5, 5),
        ] {
            let source = ramp_grid(sw, sh);
            let target = resample(&source, tw, th);
            assert_eq!(target.width(), tw);
            assert_eq!(target.height(), th);
        }
    }

    #[test]
    fn resample_to_empty_target() {
        let source = ramp_grid(4, 4);
        let target = resample(&source, 1, 0);
        assert!(target.is_empty());
        assert_eq!(target.width(), 1);
    }

    #[test]
    fn empty_source_fills_the_requested_target() {
        // The output dimensions follow the arguments even when there is
        // nothing to sample.
        let source = DepthGrid::new(0, 0);
        let target = resample(&source, 3, 2);
        assert_eq!(target.width(), 3);
        assert_eq!(target.height(), 2);
        assert!(target.as_slice().iter().all(|&v| v == 0.0));

        let source = DepthGrid::new(0, 5);
        let target = resample(&source, 0, 0);
        assert!(target.is_empty());
    }
}
