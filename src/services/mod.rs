//! Domain services.

pub mod similarity;

pub use similarity::SimilarityMatcher;
