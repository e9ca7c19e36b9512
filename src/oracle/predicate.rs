//! Stock foreground and mask implementations.

use crate::image::ImageView;
use crate::oracle::{ComputeMask, ForegroundMap};
use crate::util::{DistFieldError, DistFieldResult};

/// Foreground map backed by a byte-per-pixel bitmap; nonzero is foreground.
#[derive(Copy, Clone, Debug)]
pub struct BitmapForeground<'a> {
    bits: &'a [u8],
}

impl<'a> BitmapForeground<'a> {
    /// Wraps a bitmap covering `span` pixels.
    pub fn new(bits: &'a [u8], span: usize) -> DistFieldResult<Self> {
        if bits.len() < span {
            return Err(DistFieldError::BufferTooSmall {
                needed: span,
                got: bits.len(),
            });
        }
        Ok(Self { bits })
    }
}

impl ForegroundMap for BitmapForeground<'_> {
    fn is_foreground(&self, idx: usize) -> bool {
        self.bits[idx] != 0
    }
}

/// Foreground map produced by thresholding a heatmap in place.
///
/// Pixels at or above `threshold` are foreground. This is how the daemon
/// derives the contact sources from a normalized sensor frame without
/// materializing a bitmap.
#[derive(Copy, Clone, Debug)]
pub struct ThresholdForeground<'a, T> {
    heatmap: ImageView<'a, T>,
    threshold: T,
}

impl<'a, T: Copy + PartialOrd> ThresholdForeground<'a, T> {
    /// Wraps a packed heatmap view with an activation threshold.
    ///
    /// The view must be packed so its linear indices line up with the
    /// transform output.
    pub fn new(heatmap: ImageView<'a, T>, threshold: T) -> DistFieldResult<Self> {
        if !heatmap.is_packed() {
            return Err(DistFieldError::InvalidStride {
                width: heatmap.width(),
                stride: heatmap.stride(),
            });
        }
        Ok(Self { heatmap, threshold })
    }
}

impl<T: Copy + PartialOrd> ForegroundMap for ThresholdForeground<'_, T> {
    fn is_foreground(&self, idx: usize) -> bool {
        self.heatmap.as_slice()[idx] >= self.threshold
    }
}

/// Exclusion mask backed by a byte-per-pixel bitmap; nonzero means compute.
#[derive(Copy, Clone, Debug)]
pub struct BitmapMask<'a> {
    bits: &'a [u8],
}

impl<'a> BitmapMask<'a> {
    /// Wraps a mask bitmap covering `span` pixels.
    pub fn new(bits: &'a [u8], span: usize) -> DistFieldResult<Self> {
        if bits.len() < span {
            return Err(DistFieldError::BufferTooSmall {
                needed: span,
                got: bits.len(),
            });
        }
        Ok(Self { bits })
    }
}

impl ComputeMask for BitmapMask<'_> {
    fn is_compute(&self, idx: usize) -> bool {
        self.bits[idx] != 0
    }
}

/// Mask that excludes nothing.
#[derive(Copy, Clone, Debug, Default)]
pub struct FullCompute;

impl ComputeMask for FullCompute {
    fn is_compute(&self, _idx: usize) -> bool {
        true
    }
}
