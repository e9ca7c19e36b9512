//! Seed pass of the weighted distance transform.
//!
//! One linear sweep over the frame, stratified into nine boundary regions
//! (four corners, four edges, interior) so neighbor probes never need a
//! per-pixel bounds check. Every background pixel adjacent to foreground
//! leaves the pass enqueued with its best one-hop cost; every other
//! background pixel holds the infinite sentinel.

use crate::image::Image;
use crate::oracle::{ComputeMask, CostOracle, ForegroundMap};
use crate::queue::{CostQueue, QueueEntry};
use crate::util::CostScalar;

/// Probes one neighbor: if it is foreground, folds the cost of stepping
/// from it onto the current pixel into the running minimum.
///
/// `(DX, DY)` is the step direction from the neighbor toward the current
/// pixel, and the oracle is evaluated at the neighbor.
#[inline]
fn probe<const DX: i8, const DY: i8, T, F, C>(
    foreground: &F,
    oracle: &C,
    neighbor: usize,
    best: T,
) -> T
where
    T: CostScalar,
    F: ForegroundMap,
    C: CostOracle<Cost = T>,
{
    if !foreground.is_foreground(neighbor) {
        return best;
    }
    let c = oracle.cost::<DX, DY>(neighbor);
    if c < best {
        c
    } else {
        best
    }
}

/// Seeds a single pixel: foreground pixels are fixed at zero, masked pixels
/// stay infinite, and background pixels enter the queue when some foreground
/// neighbor offers a one-hop cost under the limit.
#[inline]
fn seed_one<T, F, M>(
    out: &mut Image<T>,
    foreground: &F,
    mask: &M,
    queue: &mut CostQueue<T>,
    idx: usize,
    limit: T,
    one_hop: impl FnOnce() -> T,
) where
    T: CostScalar,
    F: ForegroundMap,
    M: ComputeMask,
{
    if foreground.is_foreground(idx) {
        out[idx] = T::ZERO;
        return;
    }

    out[idx] = T::INFINITE;

    if !mask.is_compute(idx) {
        return;
    }

    let c = one_hop();
    if c < limit {
        queue.push(QueueEntry { idx, cost: c });
    }
}

/// Runs the seed pass over the whole frame.
pub(crate) fn seed<const N: usize, T, F, M, C>(
    out: &mut Image<T>,
    foreground: &F,
    mask: &M,
    oracle: &C,
    queue: &mut CostQueue<T>,
    limit: T,
) where
    T: CostScalar,
    F: ForegroundMap,
    M: ComputeMask,
    C: CostOracle<Cost = T>,
{
    assert!(N == 4 || N == 8, "neighborhood must be 4- or 8-connected");
    debug_assert!(
        out.width() >= 3 && out.height() >= 3,
        "frame must be at least 3x3"
    );

    let width = out.width();
    let height = out.height();
    let stride = out.stride();
    let span = out.span();

    let mut i = 0usize;

    // Top-left corner.
    seed_one(out, foreground, mask, queue, i, limit, || {
        let mut c = T::INFINITE;
        c = probe::<{ -1 }, 0, _, _, _>(foreground, oracle, i + 1, c);
        c = probe::<0, { -1 }, _, _, _>(foreground, oracle, i + stride, c);
        if N == 8 {
            c = probe::<{ -1 }, { -1 }, _, _, _>(foreground, oracle, i + stride + 1, c);
        }
        c
    });
    i += 1;

    // Top edge.
    while i < width - 1 {
        seed_one(out, foreground, mask, queue, i, limit, || {
            let mut c = T::INFINITE;
            c = probe::<1, 0, _, _, _>(foreground, oracle, i - 1, c);
            c = probe::<{ -1 }, 0, _, _, _>(foreground, oracle, i + 1, c);
            if N == 8 {
                c = probe::<1, { -1 }, _, _, _>(foreground, oracle, i + stride - 1, c);
            }
            c = probe::<0, { -1 }, _, _, _>(foreground, oracle, i + stride, c);
            if N == 8 {
                c = probe::<{ -1 }, { -1 }, _, _, _>(foreground, oracle, i + stride + 1, c);
            }
            c
        });
        i += 1;
    }

    // Top-right corner.
    seed_one(out, foreground, mask, queue, i, limit, || {
        let mut c = T::INFINITE;
        c = probe::<1, 0, _, _, _>(foreground, oracle, i - 1, c);
        if N == 8 {
            c = probe::<1, { -1 }, _, _, _>(foreground, oracle, i + stride - 1, c);
        }
        c = probe::<0, { -1 }, _, _, _>(foreground, oracle, i + stride, c);
        c
    });
    i += 1;

    // Interior rows.
    while i < stride * (height - 1) {
        // Left edge.
        seed_one(out, foreground, mask, queue, i, limit, || {
            let mut c = T::INFINITE;
            c = probe::<{ -1 }, 0, _, _, _>(foreground, oracle, i + 1, c);
            c = probe::<0, 1, _, _, _>(foreground, oracle, i - stride, c);
            if N == 8 {
                c = probe::<{ -1 }, 1, _, _, _>(foreground, oracle, i - stride + 1, c);
            }
            c = probe::<0, { -1 }, _, _, _>(foreground, oracle, i + stride, c);
            if N == 8 {
                c = probe::<{ -1 }, { -1 }, _, _, _>(foreground, oracle, i + stride + 1, c);
            }
            c
        });
        i += 1;

        // Interior pixels of the row.
        let row_end = i + width - 2;
        while i < row_end {
            seed_one(out, foreground, mask, queue, i, limit, || {
                let mut c = T::INFINITE;
                c = probe::<1, 0, _, _, _>(foreground, oracle, i - 1, c);
                c = probe::<{ -1 }, 0, _, _, _>(foreground, oracle, i + 1, c);
                if N == 8 {
                    c = probe::<1, 1, _, _, _>(foreground, oracle, i - stride - 1, c);
                }
                c = probe::<0, 1, _, _, _>(foreground, oracle, i - stride, c);
                if N == 8 {
                    c = probe::<{ -1 }, 1, _, _, _>(foreground, oracle, i - stride + 1, c);
                }
                if N == 8 {
                    c = probe::<1, { -1 }, _, _, _>(foreground, oracle, i + stride - 1, c);
                }
                c = probe::<0, { -1 }, _, _, _>(foreground, oracle, i + stride, c);
                if N == 8 {
                    c = probe::<{ -1 }, { -1 }, _, _, _>(foreground, oracle, i + stride + 1, c);
                }
                c
            });
            i += 1;
        }

        // Right edge.
        seed_one(out, foreground, mask, queue, i, limit, || {
            let mut c = T::INFINITE;
            c = probe::<1, 0, _, _, _>(foreground, oracle, i - 1, c);
            if N == 8 {
                c = probe::<1, 1, _, _, _>(foreground, oracle, i - stride - 1, c);
            }
            c = probe::<0, 1, _, _, _>(foreground, oracle, i - stride, c);
            if N == 8 {
                c = probe::<1, { -1 }, _, _, _>(foreground, oracle, i + stride - 1, c);
            }
            c = probe::<0, { -1 }, _, _, _>(foreground, oracle, i + stride, c);
            c
        });
        i += 1;
    }

    // Bottom-left corner.
    seed_one(out, foreground, mask, queue, i, limit, || {
        let mut c = T::INFINITE;
        c = probe::<{ -1 }, 0, _, _, _>(foreground, oracle, i + 1, c);
        c = probe::<0, 1, _, _, _>(foreground, oracle, i - stride, c);
        if N == 8 {
            c = probe::<{ -1 }, 1, _, _, _>(foreground, oracle, i - stride + 1, c);
        }
        c
    });
    i += 1;

    // Bottom edge.
    while i < span - 1 {
        seed_one(out, foreground, mask, queue, i, limit, || {
            let mut c = T::INFINITE;
            c = probe::<1, 0, _, _, _>(foreground, oracle, i - 1, c);
            c = probe::<{ -1 }, 0, _, _, _>(foreground, oracle, i + 1, c);
            if N == 8 {
                c = probe::<1, 1, _, _, _>(foreground, oracle, i - stride - 1, c);
            }
            c = probe::<0, 1, _, _, _>(foreground, oracle, i - stride, c);
            if N == 8 {
                c = probe::<{ -1 }, 1, _, _, _>(foreground, oracle, i - stride + 1, c);
            }
            c
        });
        i += 1;
    }

    // Bottom-right corner.
    seed_one(out, foreground, mask, queue, i, limit, || {
        let mut c = T::INFINITE;
        c = probe::<1, 0, _, _, _>(foreground, oracle, i - 1, c);
        if N == 8 {
            c = probe::<1, 1, _, _, _>(foreground, oracle, i - stride - 1, c);
        }
        c = probe::<0, 1, _, _, _>(foreground, oracle, i - stride, c);
        c
    });
}
