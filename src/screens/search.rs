use iced::widget::{button, column, container, row, scrollable, text, text_input, Column, Row};
use iced::{Element, Fill, Length};

use crate::message::Message;
use crate::render::{BookCard, RecommendationsView, NO_RECOMMENDATIONS};
use crate::theme::{accent_button_style, card_style, suggestion_button_style, MUTED_TEXT};

pub fn view<'a>(
    input: &'a str,
    suggestions: Vec<&'a str>,
    status: Option<&'a str>,
    recommendations: &'a RecommendationsView,
) -> Element<'a, Message> {
    let search_bar = row![
        text_input("Enter a book title you like...", input)
            .on_input(Message::SearchInputChanged)
            .on_submit(Message::Search)
            .padding(10)
            .width(Fill),
        button(text("Recommend"))
            .style(accent_button_style)
            .padding([10, 18])
            .on_press(Message::Search),
    ]
    .spacing(12);

    let mut content = column![
        text("Find Your Next Read").size(28),
        text("Search a title to get five similar books.")
            .size(14)
            .style(|_| text::Style {
                color: Some(MUTED_TEXT)
            }),
        search_bar,
    ]
    .spacing(16);

    if !suggestions.is_empty() {
        let options = suggestions.into_iter().map(suggestion_row);
        content = content.push(
            container(Column::with_children(options).spacing(2))
                .style(card_style)
                .padding(4),
        );
    }

    if let Some(status) = status {
        content = content.push(text(status).size(15));
    }

    match recommendations {
        RecommendationsView::Idle => {}
        RecommendationsView::Empty => {
            content = content.push(text(NO_RECOMMENDATIONS).size(15));
        }
        RecommendationsView::Cards(cards) => {
            let cards = cards.iter().map(book_card);
            content = content.push(Row::with_children(cards).spacing(16).wrap());
        }
    }

    scrollable(container(content).padding(24)).height(Fill).into()
}

fn suggestion_row(title: &str) -> Element<'_, Message> {
    button(text(title).size(14))
        .style(suggestion_button_style)
        .width(Fill)
        .on_press(Message::SuggestionPicked(title.to_string()))
        .into()
}

fn book_card(card: &BookCard) -> Element<'_, Message> {
    let link = button(text("View Book").size(13))
        .style(accent_button_style)
        .padding([6, 12])
        .on_press_maybe(
            card.has_link()
                .then(|| Message::OpenLink(card.url.clone())),
        );

    let details = column![
        text(&card.title).size(18),
        text(&card.byline).size(14).style(|_| text::Style {
            color: Some(MUTED_TEXT)
        }),
        text(&card.genres).size(12),
    ]
    .spacing(6);

    container(
        column![details, text(&card.stats).size(14), link]
            .spacing(12)
            .height(Fill),
    )
    .style(card_style)
    .padding(16)
    .width(Length::Fixed(260.0))
    .height(Length::Fixed(220.0))
    .into()
}
