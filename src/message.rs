use crate::api::{Recommendation, StatsSnapshot};
use crate::screens::Page;

#[derive(Debug, Clone)]
pub enum Message {
    ToggleSidebar,
    Navigate(Page),
    SearchInputChanged(String),
    SuggestionPicked(String),
    /// Search button clicked or Enter pressed in the search field
    Search,
    TitlesLoaded(Vec<String>),
    StatsLoaded(Result<StatsSnapshot, String>),
    RecommendationsLoaded {
        generation: u64,
        result: Result<Vec<Recommendation>, String>,
    },
    OpenLink(String),
}
