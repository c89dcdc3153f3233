use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length, Task, Theme};
use lucide_icons::iced::{icon_chart_line, icon_panel_left_close, icon_panel_left_open, icon_search};
use tracing::{debug, info, warn};

use crate::api::{ApiClient, Recommendation, StatsSnapshot};
use crate::config::Config;
use crate::message::Message;
use crate::render::{
    render_genre_chart, render_rating_distribution, render_recommendations,
    render_title_suggestions, render_top_authors, AuthorEntry, RecommendationsView,
    SuggestionList, MISSING_URL,
};
use crate::render_state::RenderState;
use crate::screens::insights::StatsStatus;
use crate::screens::Page;
use crate::theme::{sidebar_item_style, sidebar_text_color, sidebar_toggle_style, DRAWER_BG};

pub const EMPTY_SEARCH: &str = "Please enter a book title.";
pub const SEARCHING: &str = "Finding similar books…";
pub const STATS_UNAVAILABLE: &str =
    "Could not load literary insights. Is the backend server running?";

pub struct App {
    theme: Theme,
    current_page: Page,
    sidebar_collapsed: bool,
    client: ApiClient,
    search_input: String,
    status: Option<String>,
    suggestions: SuggestionList,
    recommendations: RecommendationsView,
    top_authors: Vec<AuthorEntry>,
    stats_status: StatsStatus,
    render_state: RenderState,
    /// Bumped per search attempt; responses from older attempts are dropped.
    search_generation: u64,
    open_link: LinkOpener,
}

/// Hands a URL to the desktop's default browser.
pub type LinkOpener = fn(&str) -> std::io::Result<()>;

impl App {
    /// Builds the window state and starts the two independent startup loads.
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let app = Self::with_client(ApiClient::from_config(&config));
        info!(api_url = app.client.base_url(), "Starting Book Lens");

        let titles = Task::perform(
            load_titles(app.client.clone()),
            Message::TitlesLoaded,
        );
        let stats = Task::perform(load_stats(app.client.clone()), Message::StatsLoaded);

        (app, Task::batch([titles, stats]))
    }

    fn with_client(client: ApiClient) -> Self {
        Self {
            theme: Theme::Dark,
            current_page: Page::Search,
            sidebar_collapsed: true,
            client,
            search_input: String::new(),
            status: None,
            suggestions: SuggestionList::default(),
            recommendations: RecommendationsView::Idle,
            top_authors: Vec::new(),
            stats_status: StatsStatus::Loading,
            render_state: RenderState::default(),
            search_generation: 0,
            open_link: |url| open::that_detached(url),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ToggleSidebar => {
                self.sidebar_collapsed = !self.sidebar_collapsed;
                Task::none()
            }
            Message::Navigate(page) => {
                self.current_page = page;
                Task::none()
            }
            Message::SearchInputChanged(value) => {
                self.search_input = value;
                Task::none()
            }
            Message::SuggestionPicked(title) => {
                self.search_input = title;
                Task::none()
            }
            Message::Search => match self.begin_search() {
                Some((generation, title)) => Task::perform(
                    load_recommendations(self.client.clone(), title),
                    move |result| Message::RecommendationsLoaded { generation, result },
                ),
                None => Task::none(),
            },
            Message::RecommendationsLoaded { generation, result } => {
                self.finish_search(generation, result);
                Task::none()
            }
            Message::TitlesLoaded(titles) => {
                self.suggestions = render_title_suggestions(&titles);
                Task::none()
            }
            Message::StatsLoaded(Ok(stats)) => {
                self.show_stats(&stats);
                Task::none()
            }
            Message::StatsLoaded(Err(err)) => {
                warn!(error = %err, "Failed to fetch stats");
                self.stats_status = StatsStatus::Failed(STATS_UNAVAILABLE.to_string());
                Task::none()
            }
            Message::OpenLink(url) => {
                if !url.is_empty() && url != MISSING_URL {
                    if let Err(err) = (self.open_link)(&url) {
                        warn!(%url, error = %err, "Failed to open link");
                    }
                }
                Task::none()
            }
        }
    }

    /// Validates the input and prepares the UI for a new search. Returns the
    /// generation and trimmed title to query, or `None` when there is nothing
    /// to search for.
    ///
    /// Every attempt, blank ones included, supersedes whatever search is
    /// still in flight.
    fn begin_search(&mut self) -> Option<(u64, String)> {
        self.search_generation += 1;

        let title = self.search_input.trim();
        if title.is_empty() {
            self.status = Some(EMPTY_SEARCH.to_string());
            return None;
        }

        let title = title.to_string();
        self.recommendations = RecommendationsView::Idle;
        self.status = Some(SEARCHING.to_string());

        info!(%title, generation = self.search_generation, "Searching for recommendations");
        Some((self.search_generation, title))
    }

    fn finish_search(&mut self, generation: u64, result: Result<Vec<Recommendation>, String>) {
        if generation != self.search_generation {
            debug!(
                generation,
                latest = self.search_generation,
                "Discarding stale recommendations"
            );
            return;
        }

        match result {
            Ok(books) => {
                info!(count = books.len(), "Loaded recommendations");
                self.status = None;
                self.recommendations = render_recommendations(&books);
            }
            Err(err) => {
                warn!(error = %err, "Recommendation search failed");
                self.status = Some(format!("Error: {err}"));
            }
        }
    }

    fn show_stats(&mut self, stats: &StatsSnapshot) {
        info!(
            authors = stats.top_authors.len(),
            genres = stats.top_genres.len(),
            "Loaded stats"
        );
        self.top_authors = render_top_authors(&stats.top_authors);
        render_genre_chart(&mut self.render_state, &stats.top_genres);
        render_rating_distribution(&mut self.render_state, &stats.rating_distribution);
        self.stats_status = StatsStatus::Ready;
    }

    pub fn view(&self) -> Element<'_, Message> {
        let sidebar = self.sidebar_view();
        let content = self.content_view();

        row![sidebar, content].height(Length::Fill).into()
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn sidebar_view(&self) -> Element<'_, Message> {
        let toggle_icon = if self.sidebar_collapsed {
            icon_panel_left_open()
        } else {
            icon_panel_left_close()
        };
        let toggle = button(toggle_icon.size(18))
            .on_press(Message::ToggleSidebar)
            .style(sidebar_toggle_style);

        let pages = [Page::Search, Page::Insights]
            .into_iter()
            .map(|page| self.sidebar_button(page));

        let width = if self.sidebar_collapsed { 64.0 } else { 200.0 };
        let content = column![toggle, Space::new().height(Length::Fixed(12.0))]
            .push(column(pages).spacing(6))
            .spacing(12)
            .padding(12)
            .width(Length::Fixed(width))
            .height(Length::Fill);

        container(content)
            .style(|_| container::background(DRAWER_BG))
            .into()
    }

    fn sidebar_button(&self, page: Page) -> Element<'_, Message> {
        let selected = self.current_page == page;
        let color = sidebar_text_color(selected);
        let icon = match page {
            Page::Search => icon_search(),
            Page::Insights => icon_chart_line(),
        }
        .size(18)
        .style(move |_| text::Style { color: Some(color) });

        // Collapsed: icon centred; expanded: icon followed by the page name.
        let row_content = if self.sidebar_collapsed {
            row![Space::new().width(Length::Fill), icon, Space::new().width(Length::Fill)]
        } else {
            row![
                icon,
                text(page.label()).style(move |_| text::Style { color: Some(color) })
            ]
            .spacing(12)
        };

        button(row_content.align_y(Alignment::Center))
            .on_press(Message::Navigate(page))
            .width(Length::Fill)
            .style(sidebar_item_style(selected))
            .padding(8)
            .into()
    }

    fn content_view(&self) -> Element<'_, Message> {
        match self.current_page {
            Page::Search => crate::screens::search::view(
                &self.search_input,
                self.suggestions.matching(&self.search_input),
                self.status.as_deref(),
                &self.recommendations,
            ),
            Page::Insights => crate::screens::insights::view(
                &self.stats_status,
                &self.top_authors,
                &self.render_state,
            ),
        }
    }
}

async fn load_titles(client: ApiClient) -> Vec<String> {
    client.fetch_titles().await
}

async fn load_stats(client: ApiClient) -> Result<StatsSnapshot, String> {
    client.fetch_stats().await.map_err(|err| err.to_string())
}

async fn load_recommendations(
    client: ApiClient,
    title: String,
) -> Result<Vec<Recommendation>, String> {
    client
        .fetch_recommendations(&title)
        .await
        .map_err(|err| err.to_string())
}
