use iced::{
    widget::text_input::{Catalog, Status, Style, StyleFn},
    Background, Border,
};

use super::{palette::TextInput, Theme};

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn primary(theme: &Theme, status: Status) -> Style {
    text_input(&theme.colors.text_inputs.primary, status)
}

pub fn invalid(theme: &Theme, status: Status) -> Style {
    text_input(&theme.colors.text_inputs.invalid, status)
}

fn text_input(c: &TextInput, status: Status) -> Style {
    let palette = match status {
        Status::Active | Status::Hovered | Status::Focused { .. } => &c.active,
        Status::Disabled => &c.disabled,
    };
    Style {
        background: Background::Color(palette.background),
        border: if let Some(color) = palette.border {
            Border {
                radius: 5.0.into(),
                width: 1.0,
                color,
            }
        } else {
            Border::default()
        },
        icon: palette.icon,
        placeholder: palette.placeholder,
        value: palette.value,
        selection: palette.selection,
    }
}
