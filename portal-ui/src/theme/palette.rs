use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub text_inputs: TextInputs,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub secondary: iced::Color,
    pub error: iced::Color,
    pub link: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
    pub foreground: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: Button,
    pub retry: Button,
    pub link: Button,
    pub close: Button,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
    pub active: ButtonPalette,
    pub hovered: ButtonPalette,
    pub pressed: Option<ButtonPalette>,
    pub disabled: Option<ButtonPalette>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputs {
    pub primary: TextInput,
    pub invalid: TextInput,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInput {
    pub active: TextInputPalette,
    pub disabled: TextInputPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputPalette {
    pub background: iced::Color,
    pub icon: iced::Color,
    pub placeholder: iced::Color,
    pub value: iced::Color,
    pub selection: iced::Color,
    pub border: Option<iced::Color>,
}

impl Palette {
    pub fn with_brand(mut self, brand: iced::Color) -> Self {
        let primary = &mut self.buttons.primary;
        primary.active.background = brand;
        primary.hovered.background = iced::Color { a: 0.9, ..brand };
        if let Some(pressed) = primary.pressed.as_mut() {
            pressed.background = iced::Color { a: 0.8, ..brand };
        }
        if let Some(disabled) = primary.disabled.as_mut() {
            disabled.background = iced::Color { a: 0.6, ..brand };
        }
        self.text.link = brand;
        self.buttons.link.active.text = brand;
        self.buttons.link.hovered.text = brand;
        self
    }
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self {
            general: General {
                background: color::WHITE,
                foreground: color::GREY_1,
            },
            text: Text {
                primary: color::BLACK,
                secondary: color::GREY_3,
                error: color::RED,
                link: color::ACCENT,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::ACCENT,
                        text: color::WHITE,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::GREY_4,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: None,
                    disabled: Some(ButtonPalette {
                        background: color::GREY_3,
                        text: color::WHITE,
                        border: None,
                    }),
                },
                retry: Button {
                    active: ButtonPalette {
                        background: color::WHITE,
                        text: color::RED,
                        border: Some(color::RED),
                    },
                    hovered: ButtonPalette {
                        background: color::GREY_1,
                        text: color::RED,
                        border: Some(color::RED),
                    },
                    pressed: None,
                    disabled: None,
                },
                link: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::ACCENT,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::ACCENT,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
                close: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_3,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::GREY_1,
                        text: color::BLACK,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: TextInputPalette {
                        background: color::WHITE,
                        icon: color::GREY_3,
                        placeholder: color::GREY_2,
                        value: color::BLACK,
                        selection: color::GREY_2,
                        border: Some(color::GREY_2),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_1,
                        icon: color::GREY_3,
                        placeholder: color::GREY_2,
                        value: color::GREY_3,
                        selection: color::GREY_2,
                        border: Some(color::GREY_2),
                    },
                },
                invalid: TextInput {
                    active: TextInputPalette {
                        background: color::WHITE,
                        icon: color::GREY_3,
                        placeholder: color::GREY_2,
                        value: color::BLACK,
                        selection: color::GREY_2,
                        border: Some(color::RED),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_1,
                        icon: color::GREY_3,
                        placeholder: color::GREY_2,
                        value: color::GREY_3,
                        selection: color::GREY_2,
                        border: Some(color::RED),
                    },
                },
            },
        }
    }
}
