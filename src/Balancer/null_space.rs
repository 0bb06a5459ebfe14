/// Exact null space of an integer matrix.
///
/// Gauss-Jordan elimination is carried out over arbitrary precision rationals, so atom counts
/// cancel exactly and no rounding error can leak into the coefficients.
use log::debug;
use nalgebra::DMatrix;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

/// reduced row echelon form of the matrix and the pivot column of every non-zero row
pub fn reduced_row_echelon(matrix: &DMatrix<i64>) -> (Vec<Vec<BigRational>>, Vec<usize>) {
    let (nrows, ncols) = matrix.shape();
    let mut rows: Vec<Vec<BigRational>> = (0..nrows)
        .map(|i| {
            (0..ncols)
                .map(|j| BigRational::from_integer(BigInt::from(matrix[(i, j)])))
                .collect()
        })
        .collect();
    let mut pivots = Vec::new();
    let mut row = 0;
    for col in 0..ncols {
        if row == nrows {
            break;
        }
        let Some(pivot_row) = (row..nrows).find(|&r| !rows[r][col].is_zero()) else {
            continue;
        };
        rows.swap(row, pivot_row);
        let pivot = rows[row][col].clone();
        for entry in rows[row].iter_mut() {
            *entry = &*entry / &pivot;
        }
        for r in 0..nrows {
            if r == row || rows[r][col].is_zero() {
                continue;
            }
            let factor = rows[r][col].clone();
            for j in col..ncols {
                let delta = &factor * &rows[row][j];
                rows[r][j] -= delta;
            }
        }
        pivots.push(col);
        row += 1;
    }
    (rows, pivots)
}

/// basis of the null space, one vector per free column in increasing column order.
/// The free variable of each vector is set to 1, the other free variables to 0.
/// An empty result means the null space is trivial.
pub fn null_space(matrix: &DMatrix<i64>) -> Vec<Vec<BigRational>> {
    let ncols = matrix.ncols();
    let (rref, pivots) = reduced_row_echelon(matrix);
    let free_columns: Vec<usize> = (0..ncols).filter(|c| !pivots.contains(c)).collect();
    let mut basis = Vec::with_capacity(free_columns.len());
    for &free in free_columns.iter() {
        let mut vector = vec![BigRational::zero(); ncols];
        vector[free] = BigRational::one();
        for (r, &pivot_col) in pivots.iter().enumerate() {
            vector[pivot_col] = -rref[r][free].clone();
        }
        basis.push(vector);
    }
    debug!(
        "rank {}, null space dimension {}",
        pivots.len(),
        basis.len()
    );
    basis
}
