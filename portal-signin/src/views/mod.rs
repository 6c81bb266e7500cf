use iced::{
    widget::{image, row, Space},
    Alignment, Length,
};
use portal_ui::{
    color,
    component::{button, form, text},
    theme,
    widget::*,
};

use crate::{
    host::Host,
    project::project,
    state::{Key, Msg, SigninPage},
};

pub fn signin_view<H: Host>(page: &SigninPage<H>) -> Element<'_, Msg> {
    let content = Column::new()
        .push(row![
            Space::with_width(Length::Fill),
            button::close().on_press(Msg::Close)
        ])
        .push(header(page))
        .push(fields(page))
        .spacing(20);

    let footer = Column::new()
        .push(
            project(page.host().action(), page.translator())
                .view(Msg::Submit)
                .width(Length::Fill),
        )
        .push(signup_message(page))
        .spacing(15)
        .align_x(Alignment::Center);

    Container::new(
        Column::new()
            .push(content)
            .push(footer)
            .spacing(30)
            .max_width(500.0),
    )
    .padding(40)
    .center_x(Length::Fill)
    .style(theme::container::background)
    .into()
}

fn header<H: Host>(page: &SigninPage<H>) -> Element<'_, Msg> {
    let t = page.translator();
    let site = page.host().site();
    let title = site
        .title
        .as_deref()
        .filter(|title| !title.is_empty())
        .unwrap_or("Site Title");

    Column::new()
        .push_maybe(
            site.icon.as_deref().map(|icon| {
                image(image::Handle::from_path(icon)).width(Length::Fixed(60.0))
            }),
        )
        .push(text::h2(format!(
            "{} {}",
            t.translate("signin.login_to", "Log in to"),
            title
        )))
        .spacing(20)
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .into()
}

fn fields<H: Host>(page: &SigninPage<H>) -> Element<'_, Msg> {
    page.form()
        .fields(page.translator())
        .into_iter()
        .fold(Column::new().spacing(15), |col, field| {
            let name = field.name;
            col.push(
                form::Form::new_trimmed(&field.placeholder, &field.value, move |value| {
                    Msg::FieldChanged(name, value)
                })
                .label(field.label)
                .maybe_warning(Some(field.error_message))
                .on_submit(Msg::KeyDown(Key::Enter))
                .id(name)
                .size(16)
                .padding(10),
            )
        })
        .into()
}

fn signup_message<H: Host>(page: &SigninPage<H>) -> Element<'_, Msg> {
    let t = page.translator();
    let underline = page
        .host()
        .brand_color()
        .map(color::is_default_accent)
        .unwrap_or(false);

    row![
        text::p2_regular(t.translate("signin.dont_have_account", "Don't have an account?"))
            .style(theme::text::secondary),
        button::link(t.translate("submit_button.signup", "Sign up"), underline)
            .on_press(Msg::SwitchToSignup),
    ]
    .spacing(5)
    .align_y(Alignment::Center)
    .into()
}
