//! Turns decoded API payloads into what the screens display.
//!
//! Everything here is pure apart from the chart renderers, which swap the
//! chart held in a [`RenderState`] slot.

use crate::api::{AuthorStat, GenreStat, RatingDistribution, Recommendation};
use crate::format::{format_count, format_rating};
use crate::render_state::RenderState;
use crate::reports::genre_bar::GenreBarReport;
use crate::reports::rating_distribution::RatingDistributionReport;

pub const NO_RECOMMENDATIONS: &str = "No recommendations found.";

/// Placeholder the server sends for books without a detail page.
pub const MISSING_URL: &str = "#";

const MAX_VISIBLE_SUGGESTIONS: usize = 8;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestionList {
    options: Vec<String>,
    /// Lowercased `options`, index for index.
    keys: Vec<String>,
}

impl SuggestionList {
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Options containing `query` (case-insensitive), capped for display.
    /// Nothing is offered for a blank query or an exact match.
    pub fn matching<'a>(&'a self, query: &str) -> Vec<&'a str> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        if self.keys.iter().any(|key| *key == query) {
            return Vec::new();
        }

        self.keys
            .iter()
            .zip(&self.options)
            .filter(|(key, _)| key.contains(&query))
            .take(MAX_VISIBLE_SUGGESTIONS)
            .map(|(_, option)| option.as_str())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookCard {
    pub title: String,
    pub byline: String,
    pub genres: String,
    pub stats: String,
    pub url: String,
}

impl BookCard {
    pub fn has_link(&self) -> bool {
        !self.url.is_empty() && self.url != MISSING_URL
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum RecommendationsView {
    /// Nothing searched yet, or cleared for a new search
    #[default]
    Idle,
    Empty,
    Cards(Vec<BookCard>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthorEntry {
    pub author: String,
    pub ratings: String,
}

pub fn render_title_suggestions(titles: &[String]) -> SuggestionList {
    SuggestionList {
        options: titles.to_vec(),
        keys: titles.iter().map(|title| title.to_lowercase()).collect(),
    }
}

pub fn render_recommendations(books: &[Recommendation]) -> RecommendationsView {
    if books.is_empty() {
        return RecommendationsView::Empty;
    }

    let cards = books
        .iter()
        .map(|book| BookCard {
            title: book.title.clone(),
            byline: format!("by {}", book.author),
            genres: book.genres.clone(),
            stats: format!(
                "⭐ {} ({} ratings)",
                format_rating(book.avg_rating),
                format_count(book.num_ratings)
            ),
            url: book.url.clone(),
        })
        .collect();

    RecommendationsView::Cards(cards)
}

pub fn render_top_authors(authors: &[AuthorStat]) -> Vec<AuthorEntry> {
    authors
        .iter()
        .map(|stat| AuthorEntry {
            author: stat.author.clone(),
            ratings: format!("{} ratings", format_count(stat.ratings)),
        })
        .collect()
}

pub fn render_genre_chart(state: &mut RenderState, genres: &[GenreStat]) {
    state.genre_chart.replace(GenreBarReport::chart(genres));
}

pub fn render_rating_distribution(state: &mut RenderState, distribution: &RatingDistribution) {
    state
        .rating_chart
        .replace(RatingDistributionReport::chart(distribution));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, rating: f64, count: u64) -> Recommendation {
        Recommendation {
            title: title.to_string(),
            author: "Frank Herbert".to_string(),
            genres: "Science Fiction".to_string(),
            avg_rating: rating,
            num_ratings: count,
            url: format!("https://example.com/{}", title.to_lowercase()),
        }
    }

    #[test]
    fn suggestions_keep_every_title_in_order() {
        let titles = vec!["Dune".to_string(), "Foundation".to_string()];
        let list = render_title_suggestions(&titles);
        assert_eq!(list.len(), 2);
        assert_eq!(list.options(), ["Dune", "Foundation"]);
    }

    #[test]
    fn no_titles_means_no_suggestions() {
        assert!(render_title_suggestions(&[]).is_empty());
    }

    #[test]
    fn matching_is_case_insensitive_and_capped() {
        let titles: Vec<String> = (0..20).map(|i| format!("The Book {i}")).collect();
        let list = render_title_suggestions(&titles);
        assert_eq!(list.matching("book").len(), MAX_VISIBLE_SUGGESTIONS);
        assert_eq!(list.matching("BOOK 19"), vec!["The Book 19"]);
        assert!(list.matching("   ").is_empty());
    }

    #[test]
    fn mixed_case_titles_match_any_query_case() {
        let titles = vec!["The LORD of the Rings".to_string(), "Lord Jim".to_string()];
        let list = render_title_suggestions(&titles);
        assert_eq!(list.matching("lOrD"), vec!["The LORD of the Rings", "Lord Jim"]);
        assert_eq!(list.matching("THE lord"), vec!["The LORD of the Rings"]);
        assert!(list.matching("lord jim").is_empty());
        assert_eq!(list.options(), titles.as_slice());
    }

    #[test]
    fn exact_match_hides_suggestions() {
        let titles = vec!["Dune".to_string(), "Dune Messiah".to_string()];
        let list = render_title_suggestions(&titles);
        assert!(list.matching("dune").is_empty());
        assert_eq!(list.matching("dun"), vec!["Dune", "Dune Messiah"]);
    }

    #[test]
    fn cards_preserve_order_and_count() {
        let books = vec![
            book("Zebra", 3.1, 10),
            book("Alpha", 4.9, 20),
            book("Middle", 4.0, 30),
        ];
        let RecommendationsView::Cards(cards) = render_recommendations(&books) else {
            panic!("expected cards");
        };
        let titles: Vec<_> = cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Zebra", "Alpha", "Middle"]);
    }

    #[test]
    fn empty_recommendations_render_a_message() {
        assert_eq!(render_recommendations(&[]), RecommendationsView::Empty);
    }

    #[test]
    fn card_shows_rounded_rating_and_formatted_count() {
        let RecommendationsView::Cards(cards) = render_recommendations(&[book("Dune", 4.256, 1234567)])
        else {
            panic!("expected cards");
        };
        let card = &cards[0];
        assert_eq!(card.byline, "by Frank Herbert");
        assert_eq!(card.stats, "⭐ 4.26 (1,234,567 ratings)");
        assert!(card.has_link());
    }

    #[test]
    fn placeholder_url_is_not_a_link() {
        let mut placeholder = book("Emma", 4.0, 1);
        placeholder.url = MISSING_URL.to_string();
        let RecommendationsView::Cards(cards) = render_recommendations(&[placeholder]) else {
            panic!("expected cards");
        };
        assert!(!cards[0].has_link());
    }

    #[test]
    fn top_authors_use_locale_counts() {
        let entries = render_top_authors(&[AuthorStat {
            author: "A".to_string(),
            ratings: 1000,
        }]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].author, "A");
        assert_eq!(entries[0].ratings, "1,000 ratings");
    }

    #[test]
    fn chart_renderers_keep_one_chart_per_slot() {
        let mut state = RenderState::default();
        let genres = vec![GenreStat {
            genre: "Fiction".to_string(),
            count: 3,
        }];
        let distribution = RatingDistribution {
            ratings: vec![4.0],
            counts: vec![7],
        };

        render_genre_chart(&mut state, &genres);
        render_genre_chart(&mut state, &genres);
        render_rating_distribution(&mut state, &distribution);
        render_rating_distribution(&mut state, &distribution);

        let genre = state.genre_chart.get().unwrap();
        assert_eq!(genre.series().values.len(), 1);
        let rating = state.rating_chart.get().unwrap();
        assert_eq!(rating.series().values[0].label, "4");
    }
}
