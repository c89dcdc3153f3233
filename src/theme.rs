use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

pub const ACCENT: Color = Color::from_rgb8(0x1d, 0x4e, 0x89);
pub const DRAWER_BG: Color = Color::from_rgb8(0x10, 0x14, 0x1c);
pub const DRAWER_ITEM_BG: Color = Color::from_rgb8(0x17, 0x1d, 0x29);
pub const DRAWER_TEXT_ACTIVE: Color = Color::from_rgb8(0xea, 0xf0, 0xf8);
pub const DRAWER_TEXT_INACTIVE: Color = Color::from_rgb8(0x9a, 0xa6, 0xb8);
pub const TEXT_ON_ACCENT: Color = Color::from_rgb8(0xf1, 0xf5, 0xfb);
pub const CARD_BG: Color = Color::from_rgb8(0x1a, 0x21, 0x2e);
pub const CARD_BORDER: Color = Color::from_rgb8(0x2a, 0x34, 0x46);
pub const MUTED_TEXT: Color = Color::from_rgb8(0x8e, 0x9b, 0xae);

fn fade(mut color: Color, status: button::Status) -> Color {
    if matches!(status, button::Status::Hovered) {
        color.a = 0.85;
    }
    if matches!(status, button::Status::Pressed) {
        color.a = 0.7;
    }
    if matches!(status, button::Status::Disabled) {
        color.a = 0.4;
    }
    color
}

pub fn accent_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(fade(ACCENT, status))),
        text_color: TEXT_ON_ACCENT,
        border: Border {
            radius: 6.0.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Flat row used for search suggestions.
pub fn suggestion_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => DRAWER_ITEM_BG,
        _ => Color::TRANSPARENT,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: DRAWER_TEXT_ACTIVE,
        ..Default::default()
    }
}

pub fn sidebar_toggle_style(_theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: fade(DRAWER_TEXT_ACTIVE, status),
        ..Default::default()
    }
}

/// Drawer entry; the current page sits on the accent colour.
pub fn sidebar_item_style(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    let base = if selected { ACCENT } else { DRAWER_ITEM_BG };
    move |_theme, status| button::Style {
        background: Some(Background::Color(fade(base, status))),
        text_color: sidebar_text_color(selected),
        border: Border {
            radius: 6.0.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

pub fn sidebar_text_color(selected: bool) -> Color {
    if selected {
        DRAWER_TEXT_ACTIVE
    } else {
        DRAWER_TEXT_INACTIVE
    }
}

pub fn card_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(CARD_BG)),
        border: Border {
            color: CARD_BORDER,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn background(style: &button::Style) -> Color {
        match style.background {
            Some(Background::Color(color)) => color,
            _ => panic!("expected a solid background"),
        }
    }

    #[test]
    fn selected_drawer_entry_uses_the_accent() {
        let theme = Theme::Dark;
        let selected = sidebar_item_style(true)(&theme, button::Status::Active);
        let other = sidebar_item_style(false)(&theme, button::Status::Active);

        assert_eq!(background(&selected), ACCENT);
        assert_eq!(background(&other), DRAWER_ITEM_BG);
        assert_eq!(selected.text_color, DRAWER_TEXT_ACTIVE);
        assert_eq!(other.text_color, DRAWER_TEXT_INACTIVE);
    }

    #[test]
    fn drawer_entries_fade_like_the_other_buttons() {
        let theme = Theme::Dark;
        let style = sidebar_item_style(false);

        assert_eq!(background(&style(&theme, button::Status::Hovered)).a, 0.85);
        assert_eq!(background(&style(&theme, button::Status::Pressed)).a, 0.7);
        assert_eq!(
            background(&accent_button_style(&theme, button::Status::Hovered)).a,
            0.85
        );
        assert_eq!(
            sidebar_toggle_style(&theme, button::Status::Pressed).text_color.a,
            0.7
        );
    }
}
