//! Column-major 3×3 and 4×4 matrices.
//!
//! Element `(row, col)` of an `N×N` matrix lives at index `col * N + row`, the
//! layout GPU uniform uploads expect. Matrices act on column vectors, so the
//! translation of an affine matrix sits in its last column (indices 6,7 for
//! 3×3 and 12,13,14 for 4×4). Read row by row, the same nine or sixteen floats
//! are the transposed matrix acting on row vectors (`p' = p·M`), with the
//! translation in the last row.
//!
//! Composition helpers take their arguments in application order:
//! `multiply3(a, b)` is the transform that applies `a` first and `b` second.

/// 3×3 column-major matrix, used for 2D homogeneous transforms and normals.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Matrix3(pub [f32; 9]);

/// 4×4 column-major matrix, used for 3D homogeneous transforms.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Matrix4(pub [f32; 16]);

impl Matrix3 {
    /// The identity transform.
    pub const IDENTITY: Self = Self([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);

    /// Element at `(row, col)`.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.0[col * 3 + row]
    }

    /// Flat column-major values.
    pub fn as_array(&self) -> &[f32; 9] {
        &self.0
    }

    /// Map a 2D point (implicit `w = 1`) through an affine matrix.
    pub fn transform_point(&self, p: [f32; 2]) -> [f32; 2] {
        let m = &self.0;
        [
            m[0] * p[0] + m[3] * p[1] + m[6],
            m[1] * p[0] + m[4] * p[1] + m[7],
        ]
    }

    /// Full 3×3 product with a column vector, e.g. to carry a normal.
    pub fn transform_vector(&self, v: [f32; 3]) -> [f32; 3] {
        let m = &self.0;
        let mut out = [0.0; 3];
        for (r, o) in out.iter_mut().enumerate() {
            *o = m[r] * v[0] + m[3 + r] * v[1] + m[6 + r] * v[2];
        }
        out
    }

    /// Swap rows and columns.
    pub fn transpose(&self) -> Self {
        let mut out = [0.0; 9];
        transpose_into(3, &self.0, &mut out);
        Self(out)
    }

    /// Inverse, or `None` when the matrix is singular.
    pub fn inverse(&self) -> Option<Self> {
        let mut out = [0.0; 9];
        invert_into::<3>(&self.0, &mut out)?;
        Some(Self(out))
    }
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix4 {
    /// The identity transform.
    pub const IDENTITY: Self = Self([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);

    /// Element at `(row, col)`.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.0[col * 4 + row]
    }

    /// Flat column-major values.
    pub fn as_array(&self) -> &[f32; 16] {
        &self.0
    }

    /// Map a 3D point (implicit `w = 1`) to homogeneous coordinates.
    ///
    /// No perspective divide is applied.
    pub fn transform_point(&self, p: [f32; 3]) -> [f32; 4] {
        let m = &self.0;
        let mut out = [0.0; 4];
        for (r, o) in out.iter_mut().enumerate() {
            *o = m[r] * p[0] + m[4 + r] * p[1] + m[8 + r] * p[2] + m[12 + r];
        }
        out
    }

    /// The upper-left 3×3 block (rotation and scale, without translation).
    pub fn upper_left3(&self) -> Matrix3 {
        let mut out = [0.0; 9];
        for c in 0..3 {
            for r in 0..3 {
                out[c * 3 + r] = self.0[c * 4 + r];
            }
        }
        Matrix3(out)
    }

    /// Swap rows and columns.
    pub fn transpose(&self) -> Self {
        let mut out = [0.0; 16];
        transpose_into(4, &self.0, &mut out);
        Self(out)
    }

    /// Inverse, or `None` when the matrix is singular.
    pub fn inverse(&self) -> Option<Self> {
        let mut out = [0.0; 16];
        invert_into::<4>(&self.0, &mut out)?;
        Some(Self(out))
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Compose two 3×3 transforms: the result applies `first`, then `then`.
///
/// In column-vector terms this is the product `then · first`.
pub fn multiply3(first: &Matrix3, then: &Matrix3) -> Matrix3 {
    let mut out = [0.0; 9];
    product_into(3, &first.0, &then.0, &mut out);
    Matrix3(out)
}

/// Compose two 4×4 transforms: the result applies `first`, then `then`.
///
/// In column-vector terms this is the product `then · first`.
pub fn multiply4(first: &Matrix4, then: &Matrix4) -> Matrix4 {
    let mut out = [0.0; 16];
    product_into(4, &first.0, &then.0, &mut out);
    Matrix4(out)
}

// out = then · first, all column-major n×n.
fn product_into(n: usize, first: &[f32], then: &[f32], out: &mut [f32]) {
    for col in 0..n {
        for row in 0..n {
            out[col * n + row] = (0..n).map(|k| then[k * n + row] * first[col * n + k]).sum();
        }
    }
}

fn transpose_into(n: usize, m: &[f32], out: &mut [f32]) {
    for col in 0..n {
        for row in 0..n {
            out[row * n + col] = m[col * n + row];
        }
    }
}

const SINGULAR_PIVOT: f64 = 1e-12;

/// Gauss-Jordan elimination with partial pivoting, carried out in f64.
fn invert_into<const N: usize>(m: &[f32], out: &mut [f32]) -> Option<()> {
    let mut a = [[0.0f64; N]; N];
    let mut inv = [[0.0f64; N]; N];
    for r in 0..N {
        for c in 0..N {
            a[r][c] = f64::from(m[c * N + r]);
        }
        inv[r][r] = 1.0;
    }

    for col in 0..N {
        let mut pivot = col;
        for r in (col + 1)..N {
            if a[r][col].abs() > a[pivot][col].abs() {
                pivot = r;
            }
        }
        if a[pivot][col].abs() < SINGULAR_PIVOT {
            return None;
        }
        a.swap(col, pivot);
        inv.swap(col, pivot);

        let p = a[col][col];
        for c in 0..N {
            a[col][c] /= p;
            inv[col][c] /= p;
        }
        let (pivot_row, pivot_inv) = (a[col], inv[col]);
        for r in 0..N {
            if r == col {
                continue;
            }
            let factor = a[r][col];
            if factor == 0.0 {
                continue;
            }
            for c in 0..N {
                a[r][c] -= factor * pivot_row[c];
                inv[r][c] -= factor * pivot_inv[c];
            }
        }
    }

    for r in 0..N {
        for c in 0..N {
            out[c * N + r] = inv[r][c] as f32;
        }
    }
    Some(())
}

#[cfg(test)]
#[path = "../../tests/unit/transform/matrix.rs"]
mod tests;
