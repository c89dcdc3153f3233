pub mod client;
pub mod models;

#[cfg(test)]
pub(crate) mod stub;

pub use client::ApiClient;
pub use models::{AuthorStat, GenreStat, RatingDistribution, Recommendation, StatsSnapshot};
