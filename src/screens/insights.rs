use iced::widget::canvas::Canvas;
use iced::widget::{column, container, row, scrollable, text, Column, Space};
use iced::{Element, Fill, Length};

use crate::message::Message;
use crate::render::AuthorEntry;
use crate::render_state::RenderState;
use crate::reports::genre_bar::GenreBarReport;
use crate::reports::rating_distribution::RatingDistributionReport;
use crate::theme::MUTED_TEXT;

/// Progress of the one-off stats load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsStatus {
    Loading,
    Ready,
    Failed(String),
}

pub fn view<'a>(
    status: &'a StatsStatus,
    authors: &'a [AuthorEntry],
    render_state: &'a RenderState,
) -> Element<'a, Message> {
    let (loading, error) = match status {
        StatsStatus::Loading => (true, None),
        StatsStatus::Ready => (false, None),
        StatsStatus::Failed(message) => (false, Some(message.as_str())),
    };

    let mut content = column![text("Literary Insights").size(28)].spacing(24);

    content = content.push(section(
        "Top Authors",
        "Authors with the most ratings",
        author_list(authors),
        loading,
        error,
        authors.is_empty(),
    ));

    let genre_chart: Element<'a, Message> = match render_state.genre_chart.get() {
        Some(chart) => Canvas::new(chart).width(Fill).height(420).into(),
        None => Space::new().height(Length::Shrink).into(),
    };
    content = content.push(section(
        GenreBarReport::title(),
        GenreBarReport::subtitle(),
        genre_chart,
        loading,
        error,
        !render_state.genre_chart.is_live(),
    ));

    let rating_chart: Element<'a, Message> = match render_state.rating_chart.get() {
        Some(chart) => Canvas::new(chart).width(Fill).height(300).into(),
        None => Space::new().height(Length::Shrink).into(),
    };
    content = content.push(section(
        RatingDistributionReport::title(),
        RatingDistributionReport::subtitle(),
        rating_chart,
        loading,
        error,
        !render_state.rating_chart.is_live(),
    ));

    scrollable(container(content).padding(24)).height(Fill).into()
}

fn author_list<'a>(authors: &'a [AuthorEntry]) -> Element<'a, Message> {
    let entries = authors
        .iter()
        .enumerate()
        .map(|(rank, entry)| author_row(rank + 1, entry));

    Column::with_children(entries).spacing(6).into()
}

fn author_row(rank: usize, entry: &AuthorEntry) -> Element<'_, Message> {
    row![
        text(format!("{rank}.")).size(14).width(Length::Fixed(28.0)),
        text(&entry.author).size(14).width(Fill),
        text(&entry.ratings).size(13).style(|_| text::Style {
            color: Some(MUTED_TEXT)
        }),
    ]
    .spacing(8)
    .into()
}

fn section<'a>(
    title: &'static str,
    subtitle: &'static str,
    body: impl Into<Element<'a, Message>>,
    loading: bool,
    error: Option<&'a str>,
    empty: bool,
) -> Element<'a, Message> {
    let mut section = column![text(title).size(18), text(subtitle).size(14)]
        .spacing(8)
        .push(body);

    if loading {
        section = section.push(text("Loading data...").size(14));
    } else if let Some(message) = error {
        section = section.push(text(message).size(14));
    } else if empty {
        section = section.push(text("No data available yet.").size(14));
    }

    container(section)
        .padding(16)
        .width(Fill)
        .style(container::bordered_box)
        .into()
}
