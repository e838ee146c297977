//! Pairwise two-sample Kolmogorov-Smirnov comparison.
//!
//! For two timing series of sizes n and m, the K-S statistic D is the
//! maximum difference between their empirical CDFs. We report the
//! normalized value
//!
//! ```text
//! Z = D / sqrt((n + m) / (n * m))
//! ```
//!
//! interpreted against the lookup thresholds in
//! [`KS_THRESHOLDS`](crate::constants::KS_THRESHOLDS). This is a relative
//! dissimilarity score, not a rigorous hypothesis test: the normalization
//! assumes independent samples, which bootstrap-resampled series are not.

use serde::Serialize;

/// Two-sample K-S statistic D: the maximum empirical-CDF difference.
///
/// Returns NaN when either sample is empty.
pub fn ks_statistic(a: &[f64], b: &[f64]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return f64::NAN;
    }

    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable_by(|x, y| x.total_cmp(y));
    b.sort_unstable_by(|x, y| x.total_cmp(y));

    let (n, m) = (a.len(), b.len());
    let (mut i, mut j) = (0, 0);
    let mut d: f64 = 0.0;
    while i < n && j < m {
        // Step both CDFs past the smaller value, including ties, then
        // compare the CDFs at that point.
        let x = a[i].min(b[j]);
        while i < n && a[i] <= x {
            i += 1;
        }
        while j < m && b[j] <= x {
            j += 1;
        }
        let fa = i as f64 / n as f64;
        let fb = j as f64 / m as f64;
        d = d.max((fa - fb).abs());
    }
    d
}

/// Normalized K-S distance `Z = D / sqrt((n + m) / (n * m))`.
///
/// Non-finite for degenerate input (either sample empty).
pub fn ks_z(a: &[f64], b: &[f64]) -> f64 {
    let (n, m) = (a.len() as f64, b.len() as f64);
    ks_statistic(a, b) / ((n + m) / (n * m)).sqrt()
}

/// Lower-triangular matrix of pairwise normalized K-S distances.
///
/// Cell `(i, j)` with `j < i` holds the Z value between function slots `i`
/// and `j`; the diagonal and upper triangle are absent. Non-finite Z values
/// are stored as `None` so output tables carry missing values instead of
/// NaN.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonMatrix {
    names: Vec<String>,
    // cells[i] has length i: Z against each earlier function slot.
    cells: Vec<Vec<Option<f64>>>,
}

impl ComparisonMatrix {
    /// Compute the matrix over one series per function slot.
    pub fn compute(names: &[String], series: &[Vec<f64>]) -> Self {
        debug_assert_eq!(names.len(), series.len());
        let cells = (0..series.len())
            .map(|i| {
                (0..i)
                    .map(|j| {
                        let z = ks_z(&series[i], &series[j]);
                        z.is_finite().then_some(z)
                    })
                    .collect()
            })
            .collect();
        Self {
            names: names.to_vec(),
            cells,
        }
    }

    /// Function names in slot order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of function slots.
    pub fn size(&self) -> usize {
        self.names.len()
    }

    /// Z value for the pair `(i, j)`.
    ///
    /// `None` on the diagonal, in the upper triangle, and where the value
    /// was degenerate.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if j < i && i < self.cells.len() {
            self.cells[i][j]
        } else {
            None
        }
    }

    /// Iterate over the populated half: `(i, j, z)` with `j < i`.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize, Option<f64>)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(i, row)| row.iter().enumerate().map(move |(j, &z)| (i, j, z)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_samples_have_zero_distance() {
        let xs = vec![1.0, 2.0, 3.0, 4.0];
        assert_eq!(ks_statistic(&xs, &xs), 0.0);
    }

    #[test]
    fn test_disjoint_samples_have_full_distance() {
        let a = vec![1.0, 1.1, 1.2];
        let b = vec![5.0, 5.1, 5.2];
        assert_eq!(ks_statistic(&a, &b), 1.0);
    }

    #[test]
    fn test_statistic_handles_ties() {
        // CDFs agree at the tie point, differ after it.
        let a = vec![1.0, 1.0, 2.0, 3.0];
        let b = vec![1.0, 1.0, 4.0, 5.0];
        let d = ks_statistic(&a, &b);
        assert!((d - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_z_normalization() {
        let a = vec![1.0; 20];
        let b = vec![2.0; 20];
        // D = 1, n = m = 20, so Z = 1 / sqrt(40 / 400) = sqrt(10).
        let z = ks_z(&a, &b);
        assert!((z - 10.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_empty_sample_gives_nan() {
        assert!(ks_statistic(&[], &[1.0]).is_nan());
        assert!(ks_z(&[], &[1.0]).is_nan());
    }

    #[test]
    fn test_matrix_triangle_shape() {
        let names: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        let series = vec![vec![1.0, 2.0], vec![1.5, 2.5], vec![10.0, 11.0]];
        let matrix = ComparisonMatrix::compute(&names, &series);

        assert!(matrix.get(1, 0).is_some());
        assert!(matrix.get(2, 0).is_some());
        assert!(matrix.get(2, 1).is_some());
        // Diagonal and upper triangle are absent.
        assert!(matrix.get(0, 0).is_none());
        assert!(matrix.get(0, 1).is_none());
        assert!(matrix.get(1, 1).is_none());
        assert_eq!(matrix.pairs().count(), 3);
    }

    #[test]
    fn test_matrix_cell_matches_direct_computation() {
        let names: Vec<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
        let series = vec![vec![1.0, 2.0, 3.0], vec![2.5, 3.5]];
        let matrix = ComparisonMatrix::compute(&names, &series);

        assert_eq!(matrix.get(1, 0), Some(ks_z(&series[1], &series[0])));
    }

    #[test]
    fn test_degenerate_cell_is_missing() {
        let names: Vec<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
        let series = vec![vec![1.0], vec![]];
        let matrix = ComparisonMatrix::compute(&names, &series);
        assert_eq!(matrix.get(1, 0), None);
    }
}
