use super::genres::all_genres;
use super::matrix::UserItemMatrix;
use super::recommender::{recommend, Recommendation, SortBy};
use super::similarity::SimilarityMatrix;
use crate::error::{EngineError, EngineResult};
use crate::store::RatingStore;

/// Collaborative-filtering recommendation engine
///
/// Owns the rating store and its derived matrices. Construct one explicitly
/// and populate it; there is no process-wide instance. The expected call
/// sequence is load, [`build_matrix`](Self::build_matrix) (optional,
/// `compute_similarity` builds it on demand), `compute_similarity`, then
/// `recommend`. Reloading data or rebuilding the matrix invalidates the
/// similarity matrix, and `recommend` refuses to run until it is recomputed.
#[derive(Debug, Default)]
pub struct RecommendationEngine {
    store: RatingStore,
    matrix: Option<UserItemMatrix>,
    similarity: Option<SimilarityMatrix>,
    neighbor_cap: Option<usize>,
}

impl RecommendationEngine {
    /// Creates an engine with an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits the neighbor scan to the most similar `cap` users
    ///
    /// The default is no cap: every neighbor contributes rating evidence.
    pub fn with_neighbor_cap(mut self, cap: Option<usize>) -> Self {
        self.neighbor_cap = cap;
        self
    }

    /// Replaces the store wholesale, invalidating derived state
    pub fn load(&mut self, store: RatingStore) {
        self.store = store;
        self.matrix = None;
        self.similarity = None;
    }

    /// Replaces the ratings from `::`-delimited record lines, keeping the
    /// current movie catalog
    pub fn load_ratings<'a, I>(&mut self, rating_lines: I) -> EngineResult<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let movies = self.store.movies().to_vec();
        let store = RatingStore::from_records(rating_lines, std::iter::empty())?;
        self.load(RatingStore::new(store.ratings().to_vec(), movies));
        Ok(())
    }

    /// Replaces the movie catalog from `::`-delimited record lines, keeping
    /// the current ratings
    pub fn load_movies<'a, I>(&mut self, movie_lines: I) -> EngineResult<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let ratings = self.store.ratings().to_vec();
        let store = RatingStore::from_records(std::iter::empty(), movie_lines)?;
        self.load(RatingStore::new(ratings, store.movies().to_vec()));
        Ok(())
    }

    /// Pivots the loaded ratings into the dense user-item matrix
    ///
    /// Any previously computed similarity matrix is invalidated.
    pub fn build_matrix(&mut self) -> &UserItemMatrix {
        self.similarity = None;
        self.matrix.insert(UserItemMatrix::build(self.store.ratings()))
    }

    /// Computes the all-pairs user similarity matrix
    ///
    /// Builds the user-item matrix first if it hasn't been built. This is
    /// O(users² × movies), the engine's only expensive call.
    pub fn compute_similarity(&mut self) -> &SimilarityMatrix {
        let store = &self.store;
        let matrix = self
            .matrix
            .get_or_insert_with(|| UserItemMatrix::build(store.ratings()));
        let sim = SimilarityMatrix::compute(matrix);
        self.similarity.insert(sim)
    }

    /// Ranks unwatched movies for `user_id`
    ///
    /// Fails with [`EngineError::SimilarityNotComputed`] until
    /// [`compute_similarity`](Self::compute_similarity) has run against the
    /// current ratings, and with [`EngineError::UnknownUser`] for an id with
    /// no matrix row. A user with no ratings gets an empty result, as does a
    /// genre filter that eliminates every candidate.
    pub fn recommend(
        &self,
        user_id: u32,
        top_n: usize,
        sort_by: SortBy,
        genre_filter: &[String],
    ) -> EngineResult<Vec<Recommendation>> {
        let (matrix, similarity) = match (&self.matrix, &self.similarity) {
            (Some(m), Some(s)) => (m, s),
            _ => return Err(EngineError::SimilarityNotComputed),
        };
        tracing::debug!(user_id, top_n, ?sort_by, "Generating recommendations");
        recommend(
            matrix,
            similarity,
            &self.store,
            user_id,
            top_n,
            sort_by,
            genre_filter,
            self.neighbor_cap,
        )
    }

    /// Distinct genres across the catalog, sorted
    pub fn list_genres(&self) -> Vec<String> {
        all_genres(self.store.movies())
    }

    pub fn store(&self) -> &RatingStore {
        &self.store
    }
}
