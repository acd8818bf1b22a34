//! Dense row-major matrix helpers for small `d × d` systems.

/// Pivots with absolute value below this are treated as zero.
pub const SINGULAR_EPSILON: f64 = 1e-12;

pub fn identity(dim: usize) -> Vec<f64> {
    let mut m = vec![0.0; dim * dim];
    for i in 0..dim {
        m[i * dim + i] = 1.0;
    }
    m
}

/// Inverts `a` by Gauss-Jordan elimination with partial pivoting.
///
/// Returns `None` if the matrix is singular (or numerically so) or contains non-finite values.
pub fn invert(a: &[f64], dim: usize) -> Option<Vec<f64>> {
    if a.len() != dim * dim || a.iter().any(|v| !v.is_finite()) {
        return None;
    }

    let mut work = a.to_vec();
    let mut inv = identity(dim);

    for col in 0..dim {
        let pivot_row = (col..dim).max_by(|&i, &j| {
            work[i * dim + col]
                .abs()
                .total_cmp(&work[j * dim + col].abs())
        })?;

        let pivot = work[pivot_row * dim + col];
        if pivot.abs() < SINGULAR_EPSILON {
            return None;
        }

        if pivot_row != col {
            swap_rows(&mut work, dim, pivot_row, col);
            swap_rows(&mut inv, dim, pivot_row, col);
        }

        let scale = 1.0 / pivot;
        for k in 0..dim {
            work[col * dim + k] *= scale;
            inv[col * dim + k] *= scale;
        }

        for row in 0..dim {
            if row == col {
                continue;
            }
            let factor = work[row * dim + col];
            if factor == 0.0 {
                continue;
            }
            for k in 0..dim {
                work[row * dim + k] -= factor * work[col * dim + k];
                inv[row * dim + k] -= factor * inv[col * dim + k];
            }
        }
    }

    inv.iter().all(|v| v.is_finite()).then_some(inv)
}

fn swap_rows(m: &mut [f64], dim: usize, r1: usize, r2: usize) {
    for k in 0..dim {
        m.swap(r1 * dim + k, r2 * dim + k);
    }
}

/// `m · x`.
pub fn mat_vec(m: &[f64], x: &[f64], dim: usize) -> Vec<f64> {
    (0..dim)
        .map(|i| dot(&m[i * dim..(i + 1) * dim], x))
        .collect()
}

#[inline]
pub fn dot(x: &[f64], y: &[f64]) -> f64 {
    x.iter().zip(y).map(|(a, b)| a * b).sum()
}

/// `m += x xᵀ`.
pub fn add_outer(m: &mut [f64], x: &[f64], dim: usize) {
    for i in 0..dim {
        for j in 0..dim {
            m[i * dim + j] += x[i] * x[j];
        }
    }
}
