// Scoring engine and ranking pipeline.
// Everything below `handlers` is pure, synchronous computation over an in-memory catalog.

pub mod export;
pub mod handlers;
pub mod level;
pub mod ranker;
pub mod scorers;
pub mod scoring;
pub mod title;
