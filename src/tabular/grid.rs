//! Grid lookups over node vectors.
//! - `find_nearest_index` : closest node to a point
//! - `approximate_step`   : uniform spacing, if any
//! - `five_point_stencil` : 5-node window around a point, shifted at the edges


use crate::errors::DataError;
use crate::tabular::TabularFunction;

pub const STENCIL_SIZE: usize = 5;


/// Index of the node closest to `point`.
///
/// Linear scan; on ties the lowest index wins.
pub fn find_nearest_index(x: &[f64], point: f64) -> Result<usize, DataError> {
    if x.is_empty() {
        return Err(DataError::EmptyNodes);
    }

    let mut best = 0;
    let mut best_dist = (x[0] - point).abs();
    for (i, &xi) in x.iter().enumerate().skip(1) {
        let dist = (xi - point).abs();
        if dist < best_dist {
            best = i;
            best_dist = dist;
        }
    }

    Ok(best)
}


/// Mean spacing `h` of `x` if every spacing is within `tolerance` of it.
///
/// Returns `None` for fewer than 2 nodes or a non-uniform grid.
pub fn approximate_step(x: &[f64], tolerance: f64) -> Option<f64> {
    let n = x.len();
    if n < 2 {
        return None;
    }

    let h = x.windows(2).map(|w| w[1] - w[0]).sum::<f64>() / (n - 1) as f64;
    let uniform = x.windows(2).all(|w| ((w[1] - w[0]) - h).abs() <= tolerance);

    if uniform { Some(h) } else { None }
}


/// Indices of the 5-node stencil used around `point`.
///
/// The window is centred on the nearest node and shifted, never truncated,
/// when it would run past either end: clamped to `0` first, then to `n - 5`.
pub fn five_point_stencil(
    table: &TabularFunction,
    point: f64,
) -> Result<[usize; STENCIL_SIZE], DataError> {
    let n = table.len();
    if n < STENCIL_SIZE {
        return Err(DataError::InsufficientPoints { got: n, need: STENCIL_SIZE });
    }

    let nearest = find_nearest_index(table.x(), point)?;

    let mut start = nearest.saturating_sub(STENCIL_SIZE / 2);
    if start > n - STENCIL_SIZE {
        start = n - STENCIL_SIZE;
    }

    tracing::trace!(point, nearest, start, "five-point stencil");
    Ok(std::array::from_fn(|k| start + k))
}
