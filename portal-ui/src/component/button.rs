use super::text::{p1_medium, p2_regular};
use crate::{theme, widget::*};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, row, Space};
use iced::Length;

/// Props of the form submit control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
    pub label: String,
    pub disabled: bool,
    pub retry: bool,
    pub running: bool,
}

impl ActionButton {
    /// Builds the button, `on_press` is only wired when the control is enabled.
    pub fn view<'a, T: 'a + Clone>(&self, on_press: T) -> Button<'a, T> {
        let label = p1_medium(self.label.clone())
            .align_y(Vertical::Center)
            .align_x(Horizontal::Center);
        let content: Element<'a, T> = if self.running {
            row![p1_medium("\u{25CC}"), label]
                .spacing(10)
                .align_y(Vertical::Center)
                .into()
        } else {
            label.into()
        };
        Button::new(
            container(content)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .width(Length::Fill)
                .padding(5),
        )
        .width(Length::Fill)
        .style(if self.retry {
            theme::button::retry
        } else {
            theme::button::primary
        })
        .on_press_maybe((!self.disabled).then_some(on_press))
    }
}

pub fn link<'a, T: 'a>(t: impl Into<String>, underline: bool) -> Button<'a, T> {
    let label = p2_regular(t.into()).style(theme::text::link);
    let content: Element<'a, T> = if underline {
        Column::new()
            .push(label)
            .push(
                Container::new(Space::with_height(1))
                    .width(Length::Fill)
                    .style(theme::container::underline),
            )
            .width(Length::Shrink)
            .into()
    } else {
        label.into()
    };
    Button::new(content).padding(0).style(theme::button::link)
}

pub fn close<'a, T: 'a>() -> Button<'a, T> {
    Button::new(p1_medium("\u{2715}")).style(theme::button::close)
}

