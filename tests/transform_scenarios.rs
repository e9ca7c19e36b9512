//! Scenario tests for the weighted distance transform on small frames with
//! hand-computed expected fields.

use distfield::{
    weighted_distance_transform, BitmapForeground, BitmapMask, Connectivity, CostOracle,
    CostQueue, FullCompute, Image, TransformParams, UnitCost,
};

const INF: f32 = f32::INFINITY;

fn unit_transform(
    width: usize,
    height: usize,
    fg_bits: &[u8],
    mask_bits: Option<&[u8]>,
    connectivity: Connectivity,
    limit: f32,
) -> Vec<f32> {
    let span = width * height;
    let mut out = Image::filled(width, height, 0.0f32).unwrap();
    let mut queue = CostQueue::new();
    let foreground = BitmapForeground::new(fg_bits, span).unwrap();
    let oracle = UnitCost::<f32>::new();
    let params = TransformParams { connectivity, limit };

    match mask_bits {
        Some(bits) => {
            let mask = BitmapMask::new(bits, span).unwrap();
            weighted_distance_transform(&mut out, &foreground, &mask, &oracle, &mut queue, params);
        }
        None => {
            weighted_distance_transform(
                &mut out,
                &foreground,
                &FullCompute,
                &oracle,
                &mut queue,
                params,
            );
        }
    }

    assert!(queue.is_empty(), "queue must be drained on return");
    out.as_slice().to_vec()
}

#[test]
fn single_source_four_connected_is_manhattan() {
    let fg = [0u8, 0, 0, 0, 1, 0, 0, 0, 0];
    let out = unit_transform(3, 3, &fg, None, Connectivity::Four, INF);
    assert_eq!(out, vec![2.0, 1.0, 2.0, 1.0, 0.0, 1.0, 2.0, 1.0, 2.0]);
}

#[test]
fn single_source_eight_connected_is_chebyshev() {
    let fg = [0u8, 0, 0, 0, 1, 0, 0, 0, 0];
    let out = unit_transform(3, 3, &fg, None, Connectivity::Eight, INF);
    assert_eq!(out, vec![1.0, 1.0, 1.0, 1.0, 0.0, 1.0, 1.0, 1.0, 1.0]);
}

// The line scenarios run on 5x3 frames whose outer rows are mask-excluded,
// which leaves a 1-D propagation along the middle row.

#[test]
fn line_with_source_at_left_counts_up() {
    let fg = [
        0u8, 0, 0, 0, 0, //
        1, 0, 0, 0, 0, //
        0, 0, 0, 0, 0,
    ];
    let mask = [
        0u8, 0, 0, 0, 0, //
        1, 1, 1, 1, 1, //
        0, 0, 0, 0, 0,
    ];
    let out = unit_transform(5, 3, &fg, Some(&mask), Connectivity::Four, INF);
    assert_eq!(out[5..10], [0.0, 1.0, 2.0, 3.0, 4.0]);
    assert!(out[..5].iter().chain(out[10..].iter()).all(|&v| v == INF));
}

#[test]
fn mask_wall_blocks_propagation() {
    let fg = [
        0u8, 0, 0, 0, 0, //
        1, 0, 0, 0, 1, //
        0, 0, 0, 0, 0,
    ];
    let mask = [
        0u8, 0, 0, 0, 0, //
        1, 1, 0, 1, 1, //
        0, 0, 0, 0, 0,
    ];
    let out = unit_transform(5, 3, &fg, Some(&mask), Connectivity::Four, INF);
    assert_eq!(out[5..10], [0.0, 1.0, INF, 1.0, 0.0]);
}

#[test]
fn limit_cuts_off_at_or_above_the_bound() {
    let fg = [
        0u8, 0, 0, 0, 0, //
        1, 0, 0, 0, 0, //
        0, 0, 0, 0, 0,
    ];
    let mask = [
        0u8, 0, 0, 0, 0, //
        1, 1, 1, 1, 1, //
        0, 0, 0, 0, 0,
    ];
    let out = unit_transform(5, 3, &fg, Some(&mask), Connectivity::Four, 3.0);
    assert_eq!(out[5..10], [0.0, 1.0, 2.0, INF, INF]);
}

/// Oracle charging 1 for horizontal steps and 10 for vertical ones.
struct AxisCost;

impl CostOracle for AxisCost {
    type Cost = f32;

    fn cost<const DX: i8, const DY: i8>(&self, _idx: usize) -> f32 {
        if DY == 0 {
            1.0
        } else {
            10.0
        }
    }
}

#[test]
fn anisotropic_costs_route_around_the_expensive_axis() {
    let fg = [0u8, 0, 0, 0, 1, 0, 0, 0, 0];
    let mut out = Image::filled(3, 3, 0.0f32).unwrap();
    let mut queue = CostQueue::new();
    let foreground = BitmapForeground::new(&fg, 9).unwrap();

    weighted_distance_transform(
        &mut out,
        &foreground,
        &FullCompute,
        &AxisCost,
        &mut queue,
        TransformParams {
            connectivity: Connectivity::Four,
            limit: INF,
        },
    );

    assert_eq!(
        out.as_slice(),
        &[11.0, 10.0, 11.0, 1.0, 0.0, 1.0, 11.0, 10.0, 11.0]
    );
}

#[test]
fn foreground_pixels_are_never_enqueued_even_under_mask() {
    // A foreground pixel under an excluding mask still reads zero; the mask
    // only affects background pixels.
    let fg = [0u8, 0, 0, 0, 1, 0, 0, 0, 0];
    let mask = [1u8, 1, 1, 1, 0, 1, 1, 1, 1];
    let out = unit_transform(3, 3, &fg, Some(&mask), Connectivity::Four, INF);
    assert_eq!(out[4], 0.0);
    assert_eq!(out[1], 1.0);
}
