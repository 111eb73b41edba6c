//! Cartesian-product grids and uniform axes
//!
//! The grid convention throughout the crate: a grid is a
//! `(n_points × n_coords)` matrix, one evaluation point per row.
//! `cart_prod` enumerates points in "ij" order — the first axis varies
//! slowest, exactly like nested loops with the first axis outermost.

use nalgebra::{DMatrix, DVector};

/// Cartesian product of one or more coordinate axes.
///
/// Given `k` axes of lengths `n1..nk`, returns a `(n1*…*nk) × k`
/// matrix whose rows enumerate every combination of axis values, with
/// the first axis varying slowest.
///
/// # Example
///
/// ```rust
/// use pdeplot::grid::cart_prod;
///
/// let grid = cart_prod(&[&[1.0, 2.0], &[10.0, 20.0]]);
/// assert_eq!(grid.nrows(), 4);
/// assert_eq!(grid.row(0).iter().copied().collect::<Vec<_>>(), vec![1.0, 10.0]);
/// assert_eq!(grid.row(1).iter().copied().collect::<Vec<_>>(), vec![1.0, 20.0]);
/// assert_eq!(grid.row(2).iter().copied().collect::<Vec<_>>(), vec![2.0, 10.0]);
/// ```
///
/// Behavior with zero axes or an empty axis is unspecified (the result
/// is an empty matrix; no panic).
pub fn cart_prod(axes: &[&[f64]]) -> DMatrix<f64> {
    let k = axes.len();
    let total: usize = axes.iter().map(|axis| axis.len()).product();

    if k == 0 || total == 0 {
        return DMatrix::zeros(0, k);
    }

    let mut grid = DMatrix::zeros(total, k);
    for (j, axis) in axes.iter().enumerate() {
        // Each value of axis j repeats once per combination of the
        // axes to its right.
        let inner: usize = axes[j + 1..].iter().map(|a| a.len()).product();
        for row in 0..total {
            grid[(row, j)] = axis[(row / inner) % axis.len()];
        }
    }

    grid
}

/// Uniform inclusive sequence of `n` values from `start` to `stop`.
///
/// Both endpoints are included; `n` must be at least 2.
///
/// # Panics
///
/// Panics when `n < 2` (a one-point "axis" has no well-defined step).
pub fn linspace(start: f64, stop: f64, n: usize) -> DVector<f64> {
    assert!(n >= 2, "linspace needs at least 2 points");

    let step = (stop - start) / (n - 1) as f64;
    DVector::from_fn(n, |i, _| start + step * i as f64)
}

/// Append a constant coordinate column to a grid.
///
/// Used to pin the time coordinate when evaluating an evolution
/// solution at a fixed timestamp: a `(n × k)` spatial grid becomes the
/// `(n × k+1)` grid `[spatial | t]`.
pub fn append_column(grid: &DMatrix<f64>, value: f64) -> DMatrix<f64> {
    let mut out = DMatrix::zeros(grid.nrows(), grid.ncols() + 1);
    out.view_mut((0, 0), (grid.nrows(), grid.ncols())).copy_from(grid);
    out.column_mut(grid.ncols()).fill(value);
    out
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn row(grid: &DMatrix<f64>, i: usize) -> Vec<f64> {
        grid.row(i).iter().copied().collect()
    }

    #[test]
    fn test_cart_prod_shape() {
        let grid = cart_prod(&[&[0.0, 1.0, 2.0], &[0.0, 1.0], &[5.0, 6.0, 7.0, 8.0]]);
        assert_eq!(grid.nrows(), 3 * 2 * 4);
        assert_eq!(grid.ncols(), 3);
    }

    #[test]
    fn test_cart_prod_ordering_first_axis_slowest() {
        let grid = cart_prod(&[&[1.0, 2.0], &[10.0, 20.0]]);
        assert_eq!(row(&grid, 0), vec![1.0, 10.0]);
        assert_eq!(row(&grid, 1), vec![1.0, 20.0]);
        assert_eq!(row(&grid, 2), vec![2.0, 10.0]);
        assert_eq!(row(&grid, 3), vec![2.0, 20.0]);
    }

    #[test]
    fn test_cart_prod_matches_nested_loops() {
        let xs = [0.0, 0.5, 1.0];
        let ys = [-1.0, 1.0];
        let zs = [3.0, 4.0];
        let grid = cart_prod(&[&xs, &ys, &zs]);

        let mut expected = Vec::new();
        for &x in &xs {
            for &y in &ys {
                for &z in &zs {
                    expected.push(vec![x, y, z]);
                }
            }
        }

        for (i, point) in expected.iter().enumerate() {
            assert_eq!(&row(&grid, i), point, "row {i}");
        }
    }

    #[test]
    fn test_cart_prod_single_axis_is_column() {
        let axis = [3.0, 1.0, 4.0, 1.5];
        let grid = cart_prod(&[&axis]);
        assert_eq!(grid.nrows(), 4);
        assert_eq!(grid.ncols(), 1);
        for (i, &v) in axis.iter().enumerate() {
            assert_eq!(grid[(i, 0)], v);
        }
    }

    #[test]
    fn test_cart_prod_deterministic() {
        let axes: [&[f64]; 2] = [&[0.0, 0.25, 0.5], &[1.0, 2.0]];
        assert_eq!(cart_prod(&axes), cart_prod(&axes));
    }

    #[test]
    fn test_cart_prod_no_axes_is_empty() {
        let grid = cart_prod(&[]);
        assert_eq!(grid.nrows(), 0);
        assert_eq!(grid.ncols(), 0);
    }

    #[test]
    fn test_linspace_endpoints() {
        let axis = linspace(0.0, 1.0, 5);
        assert_eq!(axis.len(), 5);
        assert_eq!(axis[0], 0.0);
        assert_eq!(axis[4], 1.0);
        assert!((axis[2] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_linspace_descending() {
        let axis = linspace(1.0, 0.0, 3);
        assert_eq!(axis[0], 1.0);
        assert!((axis[1] - 0.5).abs() < 1e-12);
        assert_eq!(axis[2], 0.0);
    }

    #[test]
    #[should_panic(expected = "at least 2 points")]
    fn test_linspace_single_point_panics() {
        linspace(0.0, 1.0, 1);
    }

    #[test]
    fn test_append_column() {
        let grid = cart_prod(&[&[0.0, 1.0], &[2.0, 3.0]]);
        let pinned = append_column(&grid, 0.7);
        assert_eq!(pinned.ncols(), 3);
        assert_eq!(pinned.nrows(), 4);
        for i in 0..4 {
            assert_eq!(pinned[(i, 0)], grid[(i, 0)]);
            assert_eq!(pinned[(i, 1)], grid[(i, 1)]);
            assert_eq!(pinned[(i, 2)], 0.7);
        }
    }

    #[test]
    fn test_append_column_to_single_column_grid() {
        let points = DMatrix::from_column_slice(3, 1, &[0.0, 0.5, 1.0]);
        let pinned = append_column(&points, 0.0);
        assert_eq!(pinned.ncols(), 2);
        assert_eq!(pinned[(1, 0)], 0.5);
        assert_eq!(pinned[(1, 1)], 0.0);
    }
}
