use std::cmp::Ordering;
use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::matrix::UserItemMatrix;
use super::similarity::SimilarityMatrix;
use crate::error::{EngineError, EngineResult};
use crate::store::RatingStore;

/// Sort key for recommendation output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Ascending lexicographic by movie title
    Title,
    /// Ascending lexicographic by the raw genre string
    Genre,
    /// Descending numeric by accumulated score
    Score,
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(SortBy::Title),
            "genre" => Ok(SortBy::Genre),
            "score" => Ok(SortBy::Score),
            other => Err(format!("unknown sort key {other:?} (expected title, genre or score)")),
        }
    }
}

/// A single ranked recommendation returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    /// Raw pipe-delimited genre string, e.g. `"Drama|Action"`
    pub genres: String,
    pub score: f64,
}

/// Ranks unwatched movies for a user from neighbor rating evidence
///
/// Scores accumulate as the raw sum of neighbor ratings, deliberately not
/// weighted by similarity; similarity only orders the neighbor scan. See
/// DESIGN.md for the rationale behind keeping the unweighted sum.
///
/// `neighbor_cap` limits the scan to the most similar N users; `None` scans
/// every neighbor. `top_n` is clamped to a minimum of 1.
#[allow(clippy::too_many_arguments)]
pub fn recommend(
    matrix: &UserItemMatrix,
    similarity: &SimilarityMatrix,
    store: &RatingStore,
    user_id: u32,
    top_n: usize,
    sort_by: SortBy,
    genre_filter: &[String],
    neighbor_cap: Option<usize>,
) -> EngineResult<Vec<Recommendation>> {
    let user_row = matrix
        .user_index(user_id)
        .ok_or(EngineError::UnknownUser(user_id))?;
    let own_ratings = matrix.row(user_row);

    // A user with no ratings gives the scan nothing to work with.
    if own_ratings.iter().all(|&v| v == 0.0) {
        return Ok(Vec::new());
    }

    // Neighbors ordered by descending similarity, ties by ascending row
    // index for determinism.
    let sims = similarity.row(user_row);
    let mut neighbors: Vec<usize> = (0..matrix.user_count()).filter(|&i| i != user_row).collect();
    neighbors.sort_by(|&a, &b| {
        sims[b]
            .partial_cmp(&sims[a])
            .unwrap_or(Ordering::Equal)
            .then(a.cmp(&b))
    });
    if let Some(cap) = neighbor_cap {
        neighbors.truncate(cap);
    }

    // Accumulate neighbor ratings for movies the target hasn't rated,
    // keeping first-encounter order so score ties stay deterministic.
    let mut scores: Vec<(u32, f64)> = Vec::new();
    let mut position: HashMap<u32, usize> = HashMap::new();
    for neighbor in neighbors {
        let neighbor_ratings = matrix.row(neighbor);
        for (col, (&own, &theirs)) in own_ratings.iter().zip(neighbor_ratings).enumerate() {
            if own != 0.0 || theirs <= 0.0 {
                continue;
            }
            let movie_id = matrix.movie_ids()[col];
            match position.get(&movie_id) {
                Some(&p) => scores[p].1 += theirs,
                None => {
                    position.insert(movie_id, scores.len());
                    scores.push((movie_id, theirs));
                }
            }
        }
    }

    let mut results: Vec<Recommendation> = scores
        .into_iter()
        .filter_map(|(movie_id, score)| match store.movie(movie_id) {
            Some(movie) => Some(Recommendation {
                title: movie.title.clone(),
                genres: movie.genre_string(),
                score,
            }),
            None => {
                tracing::debug!(movie_id, "Dropping candidate missing from catalog");
                None
            }
        })
        .filter(|rec| matches_genre_filter(&rec.genres, genre_filter))
        .collect();

    // Stable sorts, so score ties keep accumulation order.
    match sort_by {
        SortBy::Title => results.sort_by(|a, b| a.title.cmp(&b.title)),
        SortBy::Genre => results.sort_by(|a, b| a.genres.cmp(&b.genres)),
        SortBy::Score => {
            results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal))
        }
    }

    results.truncate(top_n.max(1));
    Ok(results)
}

/// AND semantics: every filter token must occur as a substring of the
/// lowercased genre string
fn matches_genre_filter(genres: &str, filter: &[String]) -> bool {
    let haystack = genres.to_lowercase();
    filter.iter().all(|token| haystack.contains(token.as_str()))
}
