//! Collaborative-filtering movie recommendation engine.
//!
//! Pivots (user, movie, rating) records into a dense user-item matrix,
//! computes all-pairs user cosine similarity, and ranks a user's unwatched
//! movies from neighbor rating evidence, with genre filtering and selectable
//! sort keys. File parsing of the MovieLens-style `::`-delimited inputs lives
//! in [`store`]; everything downstream operates on in-memory records.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use config::Config;
pub use error::{EngineError, EngineResult};
pub use models::{Movie, Rating};
pub use services::{Recommendation, RecommendationEngine, SortBy};
pub use store::RatingStore;
