use rand::Rng;
use std::ops::{Add, Mul, Sub};

use crate::error::MlpError;

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Independent uniform draws in [0, 1) from the caller's random source.
    ///
    /// Weight layers are seeded this way once at network construction; tests
    /// pass a seeded `StdRng` to make initialization reproducible.
    pub fn uniform<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen::<f64>();
            }
        }

        res
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        Matrix {
            rows: data.len(),
            cols: data[0].len(),
            data,
        }
    }

    /// Validated construction from caller-supplied rows: rejects empty input
    /// and rows that deviate from row 0's width.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Matrix, MlpError> {
        let first = rows.first().ok_or(MlpError::EmptyDataset)?;
        let cols = first.len();

        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MlpError::RaggedRow {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
        }

        Ok(Matrix {
            rows: rows.len(),
            cols,
            data: rows.to_vec(),
        })
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix::from_data(
            (self.data)
                .clone()
                .into_iter()
                .map(|row| row.into_iter().map(|x| functor(x)).collect())
                .collect(),
        )
    }

    /// Element-wise (Hadamard) product of two same-shape matrices.
    pub fn hadamard(&self, rhs: &Matrix) -> Matrix {
        assert_eq!(self.rows, rhs.rows);
        assert_eq!(self.cols, rhs.cols);
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(row_a, row_b)| {
                row_a.iter().zip(row_b.iter()).map(|(x, y)| x * y).collect()
            })
            .collect();
        Matrix::from_data(data)
    }

    /// Appends the constant bias feature (−1) to every row.
    ///
    /// The single place bias columns come from: applied at dataset
    /// construction, at early-stopping validation entry, and to the one-row
    /// matrix built for inference.
    pub fn augment_bias(&self) -> Matrix {
        let data = self
            .data
            .iter()
            .map(|row| {
                let mut augmented = row.clone();
                augmented.push(-1.0);
                augmented
            })
            .collect();
        Matrix {
            rows: self.rows,
            cols: self.cols + 1,
            data,
        }
    }

    /// Drops the trailing bias column, undoing `augment_bias`.
    pub fn strip_bias(&self) -> Matrix {
        let data = self
            .data
            .iter()
            .map(|row| row[..self.cols - 1].to_vec())
            .collect();
        Matrix {
            rows: self.rows,
            cols: self.cols - 1,
            data,
        }
    }

    /// New matrix whose row k is this matrix's row `indices[k]`.
    pub fn select_rows(&self, indices: &[usize]) -> Matrix {
        let data = indices.iter().map(|&i| self.data[i].clone()).collect();
        Matrix {
            rows: indices.len(),
            cols: self.cols,
            data,
        }
    }
}

impl Add for Matrix {
    type Output = Matrix;

    fn add(self, rhs: Self) -> Self::Output {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res = Matrix::zeros(self.rows, self.cols);

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] = self.data[i][j] + rhs.data[i][j];
            }
        }

        res
    }
}

impl Sub for Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Self) -> Self::Output {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res = Matrix::zeros(self.rows, self.cols);

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] = self.data[i][j] - rhs.data[i][j];
            }
        }

        res
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.cols != rhs.rows {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;

                for k in 0..self.cols {
                    sum += self.data[i][k] * rhs.data[k][j];
                }

                res.data[i][j] = sum;
            }
        }

        res
    }
}
