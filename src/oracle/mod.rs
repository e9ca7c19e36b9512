//! Collaborator traits for the weighted distance transform.
//!
//! The transform is polymorphic over a capability set rather than concrete
//! types: a foreground predicate, an exclusion mask, and a per-direction
//! cost oracle. Stock implementations cover the common daemon cases; any
//! `Fn(usize) -> bool` closure also works as a predicate.

pub mod cost;
pub mod predicate;

pub use cost::{GradientCost, GradientCostParams, MetricCost, UnitCost};
pub use predicate::{BitmapForeground, BitmapMask, FullCompute, ThresholdForeground};

use crate::util::CostScalar;

/// Foreground partition of the frame.
///
/// Foreground pixels are the zero-cost sources of the transform.
pub trait ForegroundMap {
    /// Returns true when the pixel at linear index `idx` is foreground.
    fn is_foreground(&self, idx: usize) -> bool;
}

/// Exclusion mask over the frame.
///
/// Pixels where `is_compute` is false are skipped entirely and keep an
/// infinite output value.
pub trait ComputeMask {
    /// Returns true when the pixel at linear index `idx` participates in
    /// the transform.
    fn is_compute(&self, idx: usize) -> bool;
}

/// Per-pixel, per-direction edge weight function.
///
/// `cost::<DX, DY>(idx)` is the weight of the step that leaves the pixel at
/// `idx` and enters its neighbor in direction `(DX, DY)`. The driver only
/// evaluates in-bounds directions, and both transform phases evaluate the
/// oracle at the step's source pixel: during seeding that is the foreground
/// neighbor (with the direction pointing at the pixel being seeded), during
/// relaxation the popped pixel (with the direction pointing at the neighbor
/// being relaxed). Weights must be non-negative.
///
/// The direction is a compile-time parameter so each of the eight call
/// sites monomorphizes to a specialized cost expression.
pub trait CostOracle {
    /// Scalar cost type produced by this oracle.
    type Cost: CostScalar;

    /// Returns the cost of stepping from `idx` to its `(DX, DY)` neighbor.
    fn cost<const DX: i8, const DY: i8>(&self, idx: usize) -> Self::Cost;
}

impl<F: Fn(usize) -> bool> ForegroundMap for F {
    fn is_foreground(&self, idx: usize) -> bool {
        self(idx)
    }
}

impl<F: Fn(usize) -> bool> ComputeMask for F {
    fn is_compute(&self, idx: usize) -> bool {
        self(idx)
    }
}
