//! Triangular difference tables.
//!
//! Entry `[i][0] = y_i`; entry `[i][j]` is built from `[i][j-1]` and
//! `[i+1][j-1]`. Row `i` holds `order - i` entries, so the table is the
//! upper-left triangle of an `order x order` matrix with `order = D + 1`.

use crate::interpolation::samples::SampleSet;


#[derive(Debug, Clone, PartialEq)]
pub struct DifferenceTable {
    rows: Vec<Vec<f64>>,
}

impl DifferenceTable {
    /// Divided differences over the nodes of `samples`:
    /// `d[i][j] = (d[i+1][j-1] - d[i][j-1]) / (x[i+j] - x[i])`.
    pub fn divided(samples: &SampleSet) -> Self {
        let (x, y) = samples.nodes();
        Self::build(y, |i, j| x[i + j] - x[i])
    }

    /// Plain forward differences over the nodes of `samples`:
    /// `d[i][j] = d[i+1][j-1] - d[i][j-1]`.
    pub fn forward(samples: &SampleSet) -> Self {
        let (_, y) = samples.nodes();
        Self::build(y, |_, _| 1.0)
    }

    fn build<F>(y: &[f64], span: F) -> Self
    where
        F: Fn(usize, usize) -> f64,
    {
        let m = y.len();
        let mut rows: Vec<Vec<f64>> = (0..m)
            .map(|i| {
                let mut row = Vec::with_capacity(m - i);
                row.push(y[i]);
                row
            })
            .collect();

        for j in 1..m {
            for i in 0..m - j {
                let d = (rows[i + 1][j - 1] - rows[i][j - 1]) / span(i, j);
                rows[i].push(d);
            }
        }

        Self { rows }
    }

    /// Number of rows, `D + 1`.
    pub fn order(&self) -> usize { self.rows.len() }

    /// `d[i][j]`, `None` outside the triangle.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.rows.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Leading row `d[0][0..=D]`, the Newton coefficients.
    pub fn top_row(&self) -> &[f64] {
        &self.rows[0]
    }
}
