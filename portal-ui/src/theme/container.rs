use iced::widget::container::{transparent, Catalog, Style, StyleFn};
use iced::{Background, Border};

use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(transparent)
    }

    fn style(&self, class: &Self::Class<'_>) -> Style {
        class(self)
    }
}

pub fn background(theme: &Theme) -> Style {
    Style {
        background: Some(Background::Color(theme.colors.general.background)),
        ..Default::default()
    }
}

/// Thin line under a link, drawn with the link color.
pub fn underline(theme: &Theme) -> Style {
    Style {
        background: Some(Background::Color(iced::Color {
            a: 0.35,
            ..theme.colors.text.link
        })),
        border: Border::default(),
        ..Default::default()
    }
}
