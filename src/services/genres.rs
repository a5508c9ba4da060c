use std::collections::BTreeSet;

use crate::models::Movie;

/// Collects the distinct genre tokens across the catalog, sorted
/// lexicographically
pub fn all_genres(movies: &[Movie]) -> Vec<String> {
    movies
        .iter()
        .flat_map(|m| m.genres.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
