use iced::Length;

use crate::{component::text, theme, widget::*};

pub struct Form<'a, Message> {
    label: Option<String>,
    input: TextInput<'a, Message>,
    warning: Option<String>,
}

impl<'a, Message: 'a> Form<'a, Message>
where
    Message: Clone,
{
    /// Creates a new [`Form`] that trims input values before applying the `on_change` function.
    ///
    /// It expects:
    /// - a placeholder
    /// - the current value
    /// - a function that produces a message when the [`Form`] changes
    pub fn new_trimmed<F>(placeholder: &str, value: &str, on_change: F) -> Self
    where
        F: 'a + Fn(String) -> Message,
    {
        Self {
            label: None,
            input: TextInput::new(placeholder, value)
                .on_input(move |s| on_change(s.trim().to_string())),
            warning: None,
        }
    }

    /// Sets the label shown above the input.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the [`Form`] with a warning message, an empty message is no warning.
    pub fn maybe_warning(mut self, warning: Option<String>) -> Self {
        self.warning = warning.filter(|w| !w.is_empty());
        self
    }

    /// Message emitted when Enter is pressed inside the input.
    pub fn on_submit(mut self, message: Message) -> Self {
        self.input = self.input.on_submit(message);
        self
    }

    pub fn id(mut self, id: &'static str) -> Self {
        self.input = self.input.id(iced::widget::text_input::Id::new(id));
        self
    }

    pub fn padding(mut self, units: u16) -> Self {
        self.input = self.input.padding(units);
        self
    }

    pub fn size(mut self, size: u16) -> Self {
        self.input = self.input.size(size);
        self
    }
}

impl<'a, Message: 'a + Clone> From<Form<'a, Message>> for Element<'a, Message> {
    fn from(form: Form<'a, Message>) -> Element<'a, Message> {
        let invalid = form.warning.is_some();
        Container::new(
            Column::new()
                .push_maybe(
                    form.label
                        .map(|label| text::p2_regular(label).style(theme::text::secondary)),
                )
                .push(if invalid {
                    form.input.style(theme::text_input::invalid)
                } else {
                    form.input
                })
                .push_maybe(
                    form.warning
                        .map(|message| text::caption(message).style(theme::text::error)),
                )
                .width(Length::Fill)
                .spacing(5),
        )
        .width(Length::Fill)
        .into()
    }
}
