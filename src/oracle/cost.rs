//! Stock cost oracles.

use std::marker::PhantomData;

use crate::image::ImageView;
use crate::oracle::CostOracle;
use crate::util::{CostScalar, DistFieldError, DistFieldResult};

/// Oracle charging one unit per step regardless of direction.
///
/// With 4-connectivity the transform then produces L1 (Manhattan) distances;
/// with 8-connectivity, Chebyshev distances.
#[derive(Copy, Clone, Debug, Default)]
pub struct UnitCost<T> {
    _marker: PhantomData<T>,
}

impl<T> UnitCost<T> {
    /// Creates the unit oracle.
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T: CostScalar> CostOracle for UnitCost<T> {
    type Cost = T;

    fn cost<const DX: i8, const DY: i8>(&self, _idx: usize) -> T {
        T::ONE
    }
}

/// Oracle with separate axial and diagonal step weights.
#[derive(Copy, Clone, Debug)]
pub struct MetricCost<T> {
    /// Weight of horizontal and vertical steps.
    pub axial: T,
    /// Weight of diagonal steps.
    pub diagonal: T,
}

impl<T> MetricCost<T> {
    /// Creates an oracle from explicit step weights.
    pub fn new(axial: T, diagonal: T) -> Self {
        Self { axial, diagonal }
    }
}

impl MetricCost<f32> {
    /// Chamfer approximation of Euclidean distance: 1 per axial step,
    /// sqrt(2) per diagonal step.
    pub fn euclidean() -> Self {
        Self {
            axial: 1.0,
            diagonal: std::f32::consts::SQRT_2,
        }
    }
}

impl<T: CostScalar> CostOracle for MetricCost<T> {
    type Cost = T;

    fn cost<const DX: i8, const DY: i8>(&self, _idx: usize) -> T {
        if DX != 0 && DY != 0 {
            self.diagonal
        } else {
            self.axial
        }
    }
}

/// Parameters for [`GradientCost`].
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientCostParams {
    /// Base weight of horizontal and vertical steps.
    pub axial: f32,
    /// Base weight of diagonal steps.
    pub diagonal: f32,
    /// Penalty factor applied to the heatmap rise along a step.
    pub rise_gain: f32,
}

impl Default for GradientCostParams {
    fn default() -> Self {
        Self {
            axial: 1.0,
            diagonal: std::f32::consts::SQRT_2,
            rise_gain: 8.0,
        }
    }
}

/// Anisotropic, heatmap-aware oracle for contact segmentation.
///
/// A step pays its base metric weight, scaled up in proportion to the rise
/// of the heatmap along the step. Paths that climb the ridge between two
/// touching contacts become expensive, so the distance field hugs each
/// contact instead of bleeding across the saddle.
#[derive(Copy, Clone, Debug)]
pub struct GradientCost<'a> {
    heatmap: ImageView<'a, f32>,
    params: GradientCostParams,
}

impl<'a> GradientCost<'a> {
    /// Wraps a packed heatmap view.
    ///
    /// The view must be packed so its linear indices line up with the
    /// transform output.
    pub fn new(heatmap: ImageView<'a, f32>, params: GradientCostParams) -> DistFieldResult<Self> {
        if !heatmap.is_packed() {
            return Err(DistFieldError::InvalidStride {
                width: heatmap.width(),
                stride: heatmap.stride(),
            });
        }
        Ok(Self { heatmap, params })
    }
}

impl CostOracle for GradientCost<'_> {
    type Cost = f32;

    fn cost<const DX: i8, const DY: i8>(&self, idx: usize) -> f32 {
        let stride = self.heatmap.stride() as isize;
        let step = DY as isize * stride + DX as isize;
        let data = self.heatmap.as_slice();

        // The driver only evaluates in-bounds directions.
        let here = data[idx];
        let ahead = data[(idx as isize + step) as usize];

        let base = if DX != 0 && DY != 0 {
            self.params.diagonal
        } else {
            self.params.axial
        };
        let rise = (ahead - here).max(0.0);

        base * (1.0 + self.params.rise_gain * rise)
    }
}

#[cfg(test)]
mod tests {
    use super::{GradientCost, GradientCostParams, MetricCost, UnitCost};
    use crate::image::ImageView;
    use crate::oracle::CostOracle;

    #[test]
    fn unit_cost_ignores_direction_and_index() {
        let oracle = UnitCost::<f32>::new();
        assert_eq!(oracle.cost::<1, 0>(0), 1.0);
        assert_eq!(oracle.cost::<{ -1 }, { -1 }>(17), 1.0);
    }

    #[test]
    fn metric_cost_selects_weight_by_direction() {
        let oracle = MetricCost::euclidean();
        assert_eq!(oracle.cost::<0, 1>(3), 1.0);
        assert_eq!(oracle.cost::<{ -1 }, 0>(3), 1.0);
        assert!((oracle.cost::<1, 1>(3) - std::f32::consts::SQRT_2).abs() < 1e-6);
    }

    #[test]
    fn gradient_cost_penalizes_uphill_steps_only() {
        let heatmap = [0.0f32, 0.5, 0.0, 0.0, 0.0, 0.0];
        let view = ImageView::from_slice(&heatmap, 3, 2).unwrap();
        let params = GradientCostParams {
            axial: 1.0,
            diagonal: 1.5,
            rise_gain: 2.0,
        };
        let oracle = GradientCost::new(view, params).unwrap();

        // Stepping from index 0 up onto the 0.5 peak at index 1.
        assert!((oracle.cost::<1, 0>(0) - 2.0).abs() < 1e-6);
        // Stepping off the peak is flat-rate.
        assert!((oracle.cost::<1, 0>(1) - 1.0).abs() < 1e-6);
        // Diagonal step from the peak down to index 5.
        assert!((oracle.cost::<1, 1>(1) - 1.5).abs() < 1e-6);
    }
}
