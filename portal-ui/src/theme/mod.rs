pub mod button;
pub mod container;
pub mod palette;
pub mod text;
pub mod text_input;

use iced::Color;

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Theme {
    pub colors: palette::Palette,
}

impl Theme {
    /// Theme whose primary controls follow the site brand color.
    pub fn branded(brand: Option<Color>) -> Self {
        match brand {
            Some(color) => Self {
                colors: palette::Palette::default().with_brand(color),
            },
            None => Self::default(),
        }
    }
}

impl iced::application::DefaultStyle for Theme {
    fn default_style(&self) -> iced::application::Appearance {
        iced::application::Appearance {
            background_color: self.colors.general.background,
            text_color: self.colors.text.primary,
        }
    }
}
