//! Batched k-nearest-neighbor queries.

mod brute_force;
mod searcher;
mod strategy;

pub use brute_force::BruteForceSelector;
pub use searcher::{knn_query, KnnSearcher};
pub use strategy::CandidateSelector;
