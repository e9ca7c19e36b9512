//! Weighted distance transform driver.
//!
//! Two phases over a caller-owned output image: a boundary-stratified seed
//! pass that fixes foreground pixels at zero and enqueues their background
//! neighbors with one-hop costs, then a Dijkstra relaxation that pops the
//! cheapest frontier entry, commits it, and relaxes its neighbors. Stale
//! queue entries stand in for decrease-key and are discarded at pop time.

use crate::image::Image;
use crate::oracle::{ComputeMask, CostOracle, ForegroundMap};
use crate::queue::{CostQueue, QueueEntry};
use crate::util::CostScalar;

mod seed;

/// Neighborhood connectivity for the transform.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connectivity {
    /// Axis-aligned neighbors only: left, right, up, down.
    Four,
    /// Axis-aligned neighbors plus the four diagonals.
    Eight,
}

/// Call-site parameters for the transform.
#[derive(Copy, Clone, Debug)]
pub struct TransformParams<T> {
    /// Neighborhood used for propagation.
    pub connectivity: Connectivity,
    /// Hard cost cutoff: a pixel whose best cost would reach this value is
    /// never enqueued and ends infinite.
    pub limit: T,
}

impl<T: CostScalar> Default for TransformParams<T> {
    fn default() -> Self {
        Self {
            connectivity: Connectivity::Eight,
            limit: T::INFINITE,
        }
    }
}

/// Computes the weighted distance transform of a frame in place.
///
/// After the call, `out[i]` is zero for foreground pixels, infinite for
/// masked or unreachable pixels, and otherwise the minimum accumulated cost
/// over all paths to the nearest foreground pixel whose every prefix stays
/// under `params.limit`. The queue must be passed in empty and is returned
/// empty; reserving it to a few multiples of the frame's pixel count keeps
/// the call allocation-free.
///
/// The frame must be at least 3x3.
pub fn weighted_distance_transform<T, F, M, C>(
    out: &mut Image<T>,
    foreground: &F,
    mask: &M,
    oracle: &C,
    queue: &mut CostQueue<T>,
    params: TransformParams<T>,
) where
    T: CostScalar,
    F: ForegroundMap,
    M: ComputeMask,
    C: CostOracle<Cost = T>,
{
    // Instrumentation is compiled in only with the `tracing` feature; the
    // hot path stays bare otherwise.
    #[cfg(feature = "tracing")]
    let _guard =
        tracing::info_span!("wdt", width = out.width(), height = out.height()).entered();

    let seeded;
    let settled;
    match params.connectivity {
        Connectivity::Four => {
            seed::seed::<4, _, _, _, _>(out, foreground, mask, oracle, queue, params.limit);
            seeded = queue.len();
            settled = relax_loop::<4, _, _, _, _>(out, foreground, mask, oracle, queue, params.limit);
        }
        Connectivity::Eight => {
            seed::seed::<8, _, _, _, _>(out, foreground, mask, oracle, queue, params.limit);
            seeded = queue.len();
            settled = relax_loop::<8, _, _, _, _>(out, foreground, mask, oracle, queue, params.limit);
        }
    }

    #[cfg(feature = "tracing")]
    tracing::info!(seeded, settled, "transform settled");
    #[cfg(not(feature = "tracing"))]
    let _ = (seeded, settled);
}

/// Runs only the seed pass: initializes `out` and fills `queue` with the
/// one-hop frontier.
pub fn seed_frontier<T, F, M, C>(
    out: &mut Image<T>,
    foreground: &F,
    mask: &M,
    oracle: &C,
    queue: &mut CostQueue<T>,
    params: TransformParams<T>,
) where
    T: CostScalar,
    F: ForegroundMap,
    M: ComputeMask,
    C: CostOracle<Cost = T>,
{
    match params.connectivity {
        Connectivity::Four => {
            seed::seed::<4, _, _, _, _>(out, foreground, mask, oracle, queue, params.limit)
        }
        Connectivity::Eight => {
            seed::seed::<8, _, _, _, _>(out, foreground, mask, oracle, queue, params.limit)
        }
    }
}

/// Runs only the relaxation phase, draining `queue` into `out`.
///
/// Returns the number of pixels whose final cost was committed. On a
/// converged field with an empty queue this is a no-op.
pub fn propagate<T, F, M, C>(
    out: &mut Image<T>,
    foreground: &F,
    mask: &M,
    oracle: &C,
    queue: &mut CostQueue<T>,
    params: TransformParams<T>,
) -> usize
where
    T: CostScalar,
    F: ForegroundMap,
    M: ComputeMask,
    C: CostOracle<Cost = T>,
{
    match params.connectivity {
        Connectivity::Four => {
            relax_loop::<4, _, _, _, _>(out, foreground, mask, oracle, queue, params.limit)
        }
        Connectivity::Eight => {
            relax_loop::<8, _, _, _, _>(out, foreground, mask, oracle, queue, params.limit)
        }
    }
}

/// Proposes a relaxation of `dst` through the edge leaving `src`.
///
/// `(DX, DY)` is the step direction from `src` toward `dst`, and the oracle
/// is evaluated at `src`. The output is not written here; the pop-time
/// stale check admits or rejects the proposal.
#[inline]
#[allow(clippy::too_many_arguments)]
fn relax_edge<const DX: i8, const DY: i8, T, F, M, C>(
    out: &Image<T>,
    foreground: &F,
    mask: &M,
    oracle: &C,
    queue: &mut CostQueue<T>,
    src: usize,
    dst: usize,
    base: T,
    limit: T,
) where
    T: CostScalar,
    F: ForegroundMap,
    M: ComputeMask,
    C: CostOracle<Cost = T>,
{
    if foreground.is_foreground(dst) || !mask.is_compute(dst) {
        return;
    }

    let c = base + oracle.cost::<DX, DY>(src);
    if c < out[dst] && c < limit {
        queue.push(QueueEntry { idx: dst, cost: c });
    }
}

fn relax_loop<const N: usize, T, F, M, C>(
    out: &mut Image<T>,
    foreground: &F,
    mask: &M,
    oracle: &C,
    queue: &mut CostQueue<T>,
    limit: T,
) -> usize
where
    T: CostScalar,
    F: ForegroundMap,
    M: ComputeMask,
    C: CostOracle<Cost = T>,
{
    assert!(N == 4 || N == 8, "neighborhood must be 4- or 8-connected");

    let width = out.width();
    let height = out.height();
    let stride = out.stride();
    let mut settled = 0usize;

    while let Some(QueueEntry { idx, cost }) = queue.pop() {
        // Stale entry: a cheaper path already settled this pixel.
        if out[idx] <= cost {
            continue;
        }

        // First pop for this pixel is the cheapest path to it.
        out[idx] = cost;
        settled += 1;

        let (x, y) = Image::<T>::unravel(width, idx);

        if x > 0 {
            relax_edge::<{ -1 }, 0, _, _, _, _>(
                out, foreground, mask, oracle, queue, idx, idx - 1, cost, limit,
            );
        }
        if x < width - 1 {
            relax_edge::<1, 0, _, _, _, _>(
                out, foreground, mask, oracle, queue, idx, idx + 1, cost, limit,
            );
        }

        if y > 0 {
            if N == 8 && x > 0 {
                relax_edge::<{ -1 }, { -1 }, _, _, _, _>(
                    out,
                    foreground,
                    mask,
                    oracle,
                    queue,
                    idx,
                    idx - stride - 1,
                    cost,
                    limit,
                );
            }
            relax_edge::<0, { -1 }, _, _, _, _>(
                out,
                foreground,
                mask,
                oracle,
                queue,
                idx,
                idx - stride,
                cost,
                limit,
            );
            if N == 8 && x < width - 1 {
                relax_edge::<1, { -1 }, _, _, _, _>(
                    out,
                    foreground,
                    mask,
                    oracle,
                    queue,
                    idx,
                    idx - stride + 1,
                    cost,
                    limit,
                );
            }
        }

        if y < height - 1 {
            if N == 8 && x > 0 {
                relax_edge::<{ -1 }, 1, _, _, _, _>(
                    out,
                    foreground,
                    mask,
                    oracle,
                    queue,
                    idx,
                    idx + stride - 1,
                    cost,
                    limit,
                );
            }
            relax_edge::<0, 1, _, _, _, _>(
                out,
                foreground,
                mask,
                oracle,
                queue,
                idx,
                idx + stride,
                cost,
                limit,
            );
            if N == 8 && x < width - 1 {
                relax_edge::<1, 1, _, _, _, _>(
                    out,
                    foreground,
                    mask,
                    oracle,
                    queue,
                    idx,
                    idx + stride + 1,
                    cost,
                    limit,
                );
            }
        }
    }

    settled
}
