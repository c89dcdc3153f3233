use serde::Deserialize;

/// A single suggested book, in the order the server ranked it
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "book")]
    pub title: String,
    pub author: String,
    pub genres: String,
    pub avg_rating: f64,
    pub num_ratings: u64,
    #[serde(default = "default_url")]
    pub url: String,
}

fn default_url() -> String {
    "#".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthorStat {
    pub author: String,
    pub ratings: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenreStat {
    pub genre: String,
    pub count: u64,
}

/// Histogram of average ratings, as two parallel arrays
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RatingDistribution {
    #[serde(default)]
    pub ratings: Vec<f64>,
    #[serde(default)]
    pub counts: Vec<u64>,
}

impl RatingDistribution {
    /// Bucket/count pairs; a length mismatch is cut to the shorter side.
    pub fn buckets(&self) -> impl Iterator<Item = (f64, u64)> + '_ {
        self.ratings.iter().copied().zip(self.counts.iter().copied())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatsSnapshot {
    #[serde(default)]
    pub top_authors: Vec<AuthorStat>,
    #[serde(default)]
    pub top_genres: Vec<GenreStat>,
    #[serde(default)]
    pub rating_distribution: RatingDistribution,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}
