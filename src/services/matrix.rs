use std::collections::{BTreeSet, HashMap};

use crate::models::Rating;

/// Dense user-item rating matrix
///
/// Rows are distinct user ids in ascending order, columns distinct movie ids
/// in ascending order, and 0.0 marks an unrated cell. The canonical row
/// mapping is "row index = position of the user id in the sorted distinct
/// id sequence"; every id-to-index conversion in the crate goes through
/// [`UserItemMatrix::user_index`] so the mapping cannot drift.
#[derive(Debug, Clone, PartialEq)]
pub struct UserItemMatrix {
    user_ids: Vec<u32>,
    movie_ids: Vec<u32>,
    rows: Vec<Vec<f64>>,
}

impl UserItemMatrix {
    /// Pivots raw ratings into the dense matrix
    ///
    /// Duplicate (user, movie) pairs resolve last-wins: a later record
    /// overwrites the cell written by an earlier one.
    pub fn build(ratings: &[Rating]) -> Self {
        let user_ids: Vec<u32> = ratings
            .iter()
            .map(|r| r.user_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let movie_ids: Vec<u32> = ratings
            .iter()
            .map(|r| r.movie_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let col_of: HashMap<u32, usize> = movie_ids.iter().enumerate().map(|(i, &m)| (m, i)).collect();
        let row_of: HashMap<u32, usize> = user_ids.iter().enumerate().map(|(i, &u)| (u, i)).collect();

        let mut rows = vec![vec![0.0; movie_ids.len()]; user_ids.len()];
        for rating in ratings {
            rows[row_of[&rating.user_id]][col_of[&rating.movie_id]] = rating.value;
        }

        tracing::info!(
            user_count = user_ids.len(),
            movie_count = movie_ids.len(),
            "Built user-item matrix"
        );

        Self {
            user_ids,
            movie_ids,
            rows,
        }
    }

    /// Resolves a user id to its row index, if the user has any ratings
    pub fn user_index(&self, user_id: u32) -> Option<usize> {
        self.user_ids.binary_search(&user_id).ok()
    }

    pub fn user_ids(&self) -> &[u32] {
        &self.user_ids
    }

    pub fn movie_ids(&self) -> &[u32] {
        &self.movie_ids
    }

    pub fn row(&self, index: usize) -> &[f64] {
        &self.rows[index]
    }

    pub fn user_count(&self) -> usize {
        self.user_ids.len()
    }

    pub fn movie_count(&self) -> usize {
        self.movie_ids.len()
    }
}
