//! Piecewise-linear mapping of an input scalar through ordered breakpoints.
//!
//! This is rendering-layer math: malformed configuration is repaired (stable
//! sort, duplicate-input coalescing) instead of rejected, and sampling always
//! returns a finite value.

use glam::{Vec2, Vec3, Vec4};
use smallvec::SmallVec;

/// One knot of a piecewise-linear mapping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breakpoint<T> {
    pub input: f32,
    pub output: T,
}

/// Component-wise linear blend, implemented for every output type a range
/// map can produce.
pub trait Lerp: Copy {
    fn lerp(a: Self, b: Self, t: f32) -> Self;
    /// True when every component is finite; non-finite knots are dropped
    /// at construction so sampling always yields a finite value.
    fn is_finite(self) -> bool;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        a + (b - a) * t
    }

    #[inline]
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
}

impl Lerp for Vec2 {
    #[inline]
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        a.lerp(b, t)
    }

    #[inline]
    fn is_finite(self) -> bool {
        Vec2::is_finite(self)
    }
}

impl Lerp for Vec3 {
    #[inline]
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        a.lerp(b, t)
    }

    #[inline]
    fn is_finite(self) -> bool {
        Vec3::is_finite(self)
    }
}

impl Lerp for Vec4 {
    #[inline]
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        a.lerp(b, t)
    }

    #[inline]
    fn is_finite(self) -> bool {
        Vec4::is_finite(self)
    }
}

/// Ordered breakpoint list with optional endpoint clamping.
///
/// With `clamp` set, inputs outside the knot range return the nearest
/// endpoint output. Without it, the end segments extrapolate linearly.
#[derive(Clone, Debug)]
pub struct RangeMap<T> {
    points: SmallVec<[Breakpoint<T>; 8]>,
    clamp: bool,
}

impl<T: Lerp + Default> RangeMap<T> {
    /// Build a map from `(input, output)` pairs, normalizing as needed.
    ///
    /// Descending or duplicate inputs are repaired: points are stable-sorted
    /// by input and later duplicates dropped, so the first output listed for
    /// a given input wins deterministically.
    pub fn new(pairs: impl IntoIterator<Item = (f32, T)>, clamp: bool) -> Self {
        let mut points: SmallVec<[Breakpoint<T>; 8]> = pairs
            .into_iter()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|(input, output)| Breakpoint { input, output })
            .collect();
        let sorted = points.windows(2).all(|w| w[0].input < w[1].input);
        if !sorted {
            log::debug!("repairing breakpoint list ({} knots)", points.len());
            points.sort_by(|a, b| a.input.partial_cmp(&b.input).unwrap_or(std::cmp::Ordering::Equal));
            points.dedup_by(|b, a| b.input == a.input);
        }
        Self { points, clamp }
    }

    pub fn clamped(pairs: impl IntoIterator<Item = (f32, T)>) -> Self {
        Self::new(pairs, true)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Piecewise-linear sample at `x`. Always finite for finite `x`.
    pub fn sample(&self, x: f32) -> T {
        match self.points.len() {
            0 => T::default(),
            1 => self.points[0].output,
            _ => self.sample_segments(x),
        }
    }

    fn sample_segments(&self, x: f32) -> T {
        let first = &self.points[0];
        let last = &self.points[self.points.len() - 1];
        if self.clamp {
            if x <= first.input {
                return first.output;
            }
            if x >= last.input {
                return last.output;
            }
        }
        // Pick the segment containing x; outside the range (unclamped) the
        // end segments extend linearly.
        let mut hi = self.points.len() - 1;
        for (i, p) in self.points.iter().enumerate().skip(1) {
            if x <= p.input || i == self.points.len() - 1 {
                hi = i;
                break;
            }
        }
        let a = &self.points[hi - 1];
        let b = &self.points[hi];
        let span = b.input - a.input;
        if span <= f32::EPSILON {
            return a.output;
        }
        let t = (x - a.input) / span;
        T::lerp(a.output, b.output, t)
    }
}
