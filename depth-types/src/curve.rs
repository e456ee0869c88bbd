//! Sampled depth remapping curve.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single control point of a [`DepthCurve`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurveKey {
    /// Input depth this key is anchored at.
    pub t: f32,
    /// Output depth at `t`.
    pub value: f32,
}

impl CurveKey {
    /// Create a new key.
    #[inline]
    #[must_use]
    pub const fn new(t: f32, value: f32) -> Self {
        Self { t, value }
    }
}

/// A sampled depth→depth remapping function.
///
/// Evaluation is piecewise-linear between keys, clamped to the first and
/// last key outside their range. The function is not required to be
/// monotonic. Mesh generation applies a curve only when it carries at
/// least two keys; with fewer keys the depth passes through unchanged.
///
/// # Example
///
/// ```
/// use depth_types::{CurveKey, DepthCurve};
///
/// // Push the near half of the depth range flat, keep the far half.
/// let curve = DepthCurve::from_keys(vec![
///     CurveKey::new(0.0, 0.0),
///     CurveKey::new(0.5, 0.0),
///     CurveKey::new(1.0, 1.0),
/// ]);
///
/// assert_eq!(curve.evaluate(0.25), 0.0);
/// assert_eq!(curve.evaluate(0.75), 0.5);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DepthCurve {
    keys: Vec<CurveKey>,
}

impl DepthCurve {
    /// Create a curve from keys, sorting them by `t`.
    #[must_use]
    pub fn from_keys(mut keys: Vec<CurveKey>) -> Self {
        keys.sort_by(|a, b| a.t.total_cmp(&b.t));
        Self { keys }
    }

    /// Create a curve from `(t, value)` pairs.
    #[must_use]
    pub fn from_pairs(pairs: &[(f32, f32)]) -> Self {
        Self::from_keys(pairs.iter().map(|&(t, v)| CurveKey::new(t, v)).collect())
    }

    /// The identity curve over `[0, 1]`.
    #[must_use]
    pub fn identity() -> Self {
        Self::from_pairs(&[(0.0, 0.0), (1.0, 1.0)])
    }

    /// Number of keys.
    #[inline]
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// The keys, sorted by `t`.
    #[inline]
    #[must_use]
    pub fn keys(&self) -> &[CurveKey] {
        &self.keys
    }

    /// Whether this curve takes effect during mesh generation.
    ///
    /// Curves with fewer than two keys are treated as absent.
    #[inline]
    #[must_use]
    pub fn is_effective(&self) -> bool {
        self.keys.len() >= 2
    }

    /// Evaluate the curve at `t`.
    ///
    /// Inputs before the first or after the last key clamp to that key's
    /// value. An empty curve is the identity.
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let Some(first) = self.keys.first() else {
            return t;
        };
        if t <= first.t {
            return first.value;
        }
        // keys is non-empty here, so last() always yields a key
        let Some(last) = self.keys.last() else {
            return t;
        };
        if t >= last.t {
            return last.value;
        }

        for pair in self.keys.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.t {
                let span = b.t - a.t;
                if span <= f32::EPSILON {
                    return b.value;
                }
                let alpha = (t - a.t) / span;
                return a.value + (b.value - a.value) * alpha;
            }
        }

        last.value
    }
}
