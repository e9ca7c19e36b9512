//! Parallel batch transforms (feature-gated).
//!
//! A single transform is strictly sequential, but distinct `(out, queue)`
//! pairs are independent, so a batch of frames (the daemon catching up on a
//! backlog, or a replay tool chewing through a dump) can run one rayon task
//! per frame.

use rayon::prelude::*;

use crate::image::Image;
use crate::oracle::{ComputeMask, CostOracle, ForegroundMap};
use crate::queue::CostQueue;
use crate::util::CostScalar;
use crate::wdt::{weighted_distance_transform, TransformParams};

/// One frame's worth of transform state.
///
/// The output image and queue are exclusive to the task; the predicates and
/// oracle may be shared across tasks.
pub struct FrameTask<'a, T: CostScalar, F, M, C> {
    /// Output image, pre-sized to the frame.
    pub out: &'a mut Image<T>,
    /// Foreground partition of this frame.
    pub foreground: &'a F,
    /// Exclusion mask for this frame.
    pub mask: &'a M,
    /// Cost oracle for this frame.
    pub oracle: &'a C,
    /// Scratch queue, empty on entry.
    pub queue: &'a mut CostQueue<T>,
}

/// Transforms every frame in the batch, in parallel.
///
/// Equivalent to running [`weighted_distance_transform`] on each task in
/// order; outputs are bit-identical to the sequential runs.
pub fn transform_batch_par<T, F, M, C>(
    tasks: &mut [FrameTask<'_, T, F, M, C>],
    params: TransformParams<T>,
) where
    T: CostScalar + Send + Sync,
    F: ForegroundMap + Sync,
    M: ComputeMask + Sync,
    C: CostOracle<Cost = T> + Sync,
{
    tasks.par_iter_mut().for_each(|task| {
        weighted_distance_transform(task.out, task.foreground, task.mask, task.oracle, task.queue, params);
    });
}
