//! Dense 2D depth grid.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A dense 2D grid of depth samples.
///
/// Values are nominally in `[0, 1]` with 0 near and 1 far. Storage is a
/// flat row-major buffer with the index function `idx(x, y) = y * width + x`,
/// keeping the `(x, y)` access contract explicit without per-cell nested
/// array overhead.
///
/// Zero-sized dimensions are legal; such grids hold no samples.
///
/// # Example
///
/// ```
/// use depth_types::DepthGrid;
///
/// let mut grid = DepthGrid::new(3, 2);
/// grid.set(2, 1, 0.25);
/// assert_eq!(grid.get(2, 1), 0.25);
/// assert_eq!(grid.get(0, 0), 0.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DepthGrid {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl DepthGrid {
    /// Create a zero-filled grid of the given size.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    /// Create a grid from an existing row-major sample buffer.
    ///
    /// Returns `None` when `data.len() != width * height`.
    ///
    /// # Example
    ///
    /// ```
    /// use depth_types::DepthGrid;
    ///
    /// let grid = DepthGrid::from_raw(2, 2, vec![0.0, 0.1, 0.2, 0.3]);
    /// assert!(grid.is_some());
    ///
    /// let bad = DepthGrid::from_raw(2, 2, vec![0.0]);
    /// assert!(bad.is_none());
    /// ```
    #[must_use]
    pub fn from_raw(width: usize, height: usize, data: Vec<f32>) -> Option<Self> {
        if data.len() != width * height {
            return None;
        }
        Some(Self {
            width,
            height,
            data,
        })
    }

    /// Grid width (number of columns).
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height (number of rows).
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Whether the grid holds no samples.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Row-major flat index for cell `(x, y)`.
    #[inline]
    #[must_use]
    pub const fn idx(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Sample at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics when `(x, y)` is outside the grid.
    #[inline]
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }

    /// Write the sample at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics when `(x, y)` is outside the grid.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        let i = self.idx(x, y);
        self.data[i] = value;
    }

    /// The full sample buffer in row-major order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Mutable access to the full sample buffer in row-major order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Set every sample to `value`.
    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    /// Apply `f` to every sample in place.
    pub fn map_in_place<F: FnMut(f32) -> f32>(&mut self, mut f: F) {
        for v in &mut self.data {
            *v = f(*v);
        }
    }
}
