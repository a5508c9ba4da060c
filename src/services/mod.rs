mod engine;
mod genres;
mod matrix;
mod recommender;
mod similarity;

pub use engine::RecommendationEngine;
pub use genres::all_genres;
pub use matrix::UserItemMatrix;
pub use recommender::{recommend, Recommendation, SortBy};
pub use similarity::SimilarityMatrix;
