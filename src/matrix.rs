//! Dense 2-D matrix used for weights, node activations and deltas.
//!
//! Storage is a single row-major `Vec<f64>`. Element accessors take the
//! column first: `at(x, y)` reads column `x` of row `y`. Activations and
//! deltas are row vectors (`1 × width`), so `x` is simply the node index.
//!
//! Shapes are always reported as `(rows, cols)`.

use std::fmt;
use std::ops::Mul;

use rand::Rng;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Zero-filled `rows × cols` matrix.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(
            rows > 0 && cols > 0,
            "matrix dimensions must be non-zero, got {rows}x{cols}"
        );
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Single-row matrix holding `values`.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn from_row(values: &[f64]) -> Self {
        let mut m = Self::new(1, values.len());
        m.data.copy_from_slice(values);
        m
    }

    /// Matrix built from a list of equally sized rows.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let first = rows.first().map_or(0, Vec::len);
        if rows.is_empty() || first == 0 {
            return Err(Error::DimensionMismatch {
                op: "from_rows",
                left: (rows.len(), first),
                right: (1, 1),
            });
        }
        let mut data = Vec::with_capacity(rows.len() * first);
        for row in rows {
            if row.len() != first {
                return Err(Error::DimensionMismatch {
                    op: "from_rows",
                    left: (1, first),
                    right: (1, row.len()),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols: first,
            data,
        })
    }

    /// Matrix whose elements are drawn independently and uniformly from `[0, 1)`.
    ///
    /// This is the naive weight initialization scheme; no variance scaling is
    /// applied. See [`crate::utils::init::Init`] for alternatives.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Self {
        let mut m = Self::new(rows, cols);
        m.map_in_place(|_, _, _| rng.gen::<f64>());
        m
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value at column `x`, row `y`.
    #[inline]
    pub fn at(&self, x: usize, y: usize) -> f64 {
        debug_assert!(x < self.cols && y < self.rows);
        self.data[y * self.cols + x]
    }

    /// Sets the value at column `x`, row `y`.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: f64) {
        debug_assert!(x < self.cols && y < self.rows);
        self.data[y * self.cols + x] = value;
    }

    /// Row `y` as a slice.
    pub fn row(&self, y: usize) -> &[f64] {
        &self.data[y * self.cols..(y + 1) * self.cols]
    }

    /// All elements in row-major order.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn flatten(&self) -> Vec<f64> {
        self.data.clone()
    }

    /// Replaces every element with `f(value, x, y)`.
    pub fn map_in_place<F>(&mut self, mut f: F)
    where
        F: FnMut(f64, usize, usize) -> f64,
    {
        let cols = self.cols;
        for (i, value) in self.data.iter_mut().enumerate() {
            *value = f(*value, i % cols, i / cols);
        }
    }

    /// Like [`Matrix::map_in_place`] but leaves `self` untouched.
    pub fn map<F>(&self, f: F) -> Matrix
    where
        F: FnMut(f64, usize, usize) -> f64,
    {
        let mut out = self.clone();
        out.map_in_place(f);
        out
    }

    /// Checked matrix product `self × rhs`.
    ///
    /// Returns [`Error::DimensionMismatch`] unless `self.cols() == rhs.rows()`.
    /// The result has shape `self.rows() × rhs.cols()`.
    pub fn dot(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.cols != rhs.rows {
            return Err(Error::DimensionMismatch {
                op: "dot",
                left: self.dims(),
                right: rhs.dims(),
            });
        }
        let mut out = Matrix::new(self.rows, rhs.cols);
        for i in 0..self.rows {
            let dst = &mut out.data[i * rhs.cols..(i + 1) * rhs.cols];
            for k in 0..self.cols {
                let a = self.data[i * self.cols + k];
                for (d, &b) in dst.iter_mut().zip(rhs.row(k)) {
                    *d += a * b;
                }
            }
        }
        Ok(out)
    }

    /// Matrix product that treats a shape mismatch as a fatal fault.
    ///
    /// # Panics
    ///
    /// Panics if `self.cols() != rhs.rows()`.
    pub fn mul(&self, rhs: &Matrix) -> Matrix {
        match self.dot(rhs) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }

    pub fn transpose(&self) -> Matrix {
        let mut out = Matrix::new(self.cols, self.rows);
        for y in 0..self.rows {
            for x in 0..self.cols {
                out.set(y, x, self.at(x, y));
            }
        }
        out
    }

    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Renders one bracketed row per line with four decimal places.
    pub fn pretty(&self) -> String {
        let mut s = String::new();
        for y in 0..self.rows {
            s.push('[');
            for value in self.row(y) {
                s.push_str(&format!(" {value:.4}"));
            }
            s.push_str(" ]\n");
        }
        s
    }
}

impl Mul<&Matrix> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        Matrix::mul(self, rhs)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pretty())
    }
}
