use super::matrix::UserItemMatrix;

/// All-pairs user similarity matrix
///
/// Entry (i, j) is the cosine similarity between rows i and j of the
/// user-item matrix, indexed by the same row ordering. Symmetric by
/// construction: the upper triangle is computed and mirrored.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    values: Vec<Vec<f64>>,
}

impl SimilarityMatrix {
    /// Computes all-pairs cosine similarity over the dense matrix
    ///
    /// O(users² × movies); this is the crate's only expensive path and large
    /// datasets make it noticeable. A zero-norm row (user with no ratings)
    /// scores 0.0 against every row, itself included, so the division by a
    /// zero norm never happens. The diagonal is 1.0 for any row with at
    /// least one nonzero rating.
    pub fn compute(matrix: &UserItemMatrix) -> Self {
        let n = matrix.user_count();
        let norms: Vec<f64> = (0..n)
            .map(|i| matrix.row(i).iter().map(|v| v * v).sum::<f64>().sqrt())
            .collect();

        let mut values = vec![vec![0.0; n]; n];
        for i in 0..n {
            if norms[i] > 0.0 {
                values[i][i] = 1.0;
            }
            for j in (i + 1)..n {
                if norms[i] == 0.0 || norms[j] == 0.0 {
                    continue;
                }
                let dot: f64 = matrix
                    .row(i)
                    .iter()
                    .zip(matrix.row(j))
                    .map(|(a, b)| a * b)
                    .sum();
                let sim = dot / (norms[i] * norms[j]);
                values[i][j] = sim;
                values[j][i] = sim;
            }
        }

        tracing::info!(user_count = n, "Computed similarity matrix");
        Self { values }
    }

    /// Side length, equal to the user count of the source matrix
    pub fn side(&self) -> usize {
        self.values.len()
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i][j]
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rating;

    const TOL: f64 = 1e-9;

    fn fixture_matrix() -> UserItemMatrix {
        UserItemMatrix::build(&[
            Rating::new(1, 10, 5.0),
            Rating::new(1, 20, 3.0),
            Rating::new(2, 10, 4.0),
            Rating::new(2, 30, 5.0),
            Rating::new(3, 20, 1.0),
        ])
    }

    #[test]
    fn test_square_with_user_count_side() {
        let matrix = fixture_matrix();
        let sim = SimilarityMatrix::compute(&matrix);
        assert_eq!(sim.side(), matrix.user_count());
    }

    #[test]
    fn test_symmetric() {
        let sim = SimilarityMatrix::compute(&fixture_matrix());
        for i in 0..sim.side() {
            for j in 0..sim.side() {
                assert!((sim.get(i, j) - sim.get(j, i)).abs() < TOL);
            }
        }
    }

    #[test]
    fn test_diagonal_is_one_for_rated_users() {
        let sim = SimilarityMatrix::compute(&fixture_matrix());
        for i in 0..sim.side() {
            assert!((sim.get(i, i) - 1.0).abs() < TOL);
        }
    }

    #[test]
    fn test_known_cosine_value() {
        // Rows [5,3,0] and [4,0,5]: dot = 20, norms sqrt(34) and sqrt(41).
        let sim = SimilarityMatrix::compute(&fixture_matrix());
        let expected = 20.0 / (34.0f64.sqrt() * 41.0f64.sqrt());
        assert!((sim.get(0, 1) - expected).abs() < TOL);
    }

    #[test]
    fn test_orthogonal_users_score_zero() {
        let matrix = UserItemMatrix::build(&[
            Rating::new(1, 10, 5.0),
            Rating::new(2, 20, 4.0),
        ]);
        let sim = SimilarityMatrix::compute(&matrix);
        assert!(sim.get(0, 1).abs() < TOL);
    }

    #[test]
    fn test_zero_norm_row_scores_zero_everywhere() {
        // Rating bounds are not validated, so a 0.0 value yields a zero row.
        let matrix = UserItemMatrix::build(&[
            Rating::new(1, 10, 5.0),
            Rating::new(2, 10, 0.0),
        ]);
        let sim = SimilarityMatrix::compute(&matrix);
        assert_eq!(sim.get(1, 0), 0.0);
        assert_eq!(sim.get(0, 1), 0.0);
        // Zero-norm self-pair is 0.0, not 1.0.
        assert_eq!(sim.get(1, 1), 0.0);
        assert!((sim.get(0, 0) - 1.0).abs() < TOL);
    }
}
