use iced::{widget::Space, Alignment, Length, Size, Task};
use portal_signin::{
    action::{Action, ActionName, Page},
    config::{Config, ConfigError, HostConfig, DEFAULT_FILE_NAME},
    host::{Host, LocalHost},
    i18n::{Catalog, Fallback, Translate},
    logger,
    state::{Msg, SigninPage},
    views,
};
use portal_ui::{component::text, theme, theme::Theme, widget::*};
use std::{path::PathBuf, time::Duration};
use tracing_subscriber::filter::LevelFilter;

fn main() -> iced::Result {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let log_level = match logger::parse_log_level() {
        Ok(Some(level)) => level,
        Ok(None) => config.log_level().unwrap_or(LevelFilter::INFO),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = logger::setup_logger(log_level, config.log_file.as_deref()) {
        eprintln!("Failed to setup logger: {}", e);
    }

    let portal = match Portal::new(&config) {
        Ok(portal) => portal,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    iced::application(Portal::title, Portal::update, Portal::view)
        .theme(Portal::theme)
        .window_size(Size::new(520.0, 640.0))
        .run_with(move || (portal, Task::none()))
}

/// Loads the file given as first argument, or `portal.toml` from the working
/// directory if there is one.
fn load_config() -> Result<Config, ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => Config::from_file(&PathBuf::from(path)),
        None => match Config::from_file(&PathBuf::from(DEFAULT_FILE_NAME)) {
            Err(ConfigError::NotFound) => Ok(Config::default()),
            res => res,
        },
    }
}

#[derive(Debug, Clone)]
enum Message {
    Page(Msg),
    SigninDone(bool),
}

struct Portal {
    page: SigninPage<LocalHost>,
    host_config: HostConfig,
    theme: Theme,
}

impl Portal {
    fn new(config: &Config) -> Result<Self, Box<dyn std::error::Error>> {
        let translator: Box<dyn Translate> = match &config.locale {
            Some(path) => match Catalog::from_file(path) {
                Ok(catalog) => Box::new(catalog),
                Err(e) => {
                    tracing::warn!("{}, falling back to default strings", e);
                    Box::new(Fallback)
                }
            },
            None => Box::new(Fallback),
        };
        Ok(Self {
            page: SigninPage::new(config.local_host(), translator)?,
            host_config: config.host.clone(),
            theme: Theme::branded(config.brand_color()?),
        })
    }

    fn title(&self) -> String {
        let t = self.page.translator();
        match &self.page.host().site().title {
            Some(title) => format!("{} {}", t.translate("signin.login_to", "Log in to"), title),
            None => t.translate("signin.title", "Sign in"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Page(msg) => {
                let sent = self.page.host().dispatched.len();
                self.page.update(msg);

                let host = self.page.host();
                if host.closed {
                    return iced::exit();
                }
                if host.dispatched[sent..]
                    .iter()
                    .any(|action| matches!(action, Action::Signin { .. }))
                {
                    let delay = Duration::from_millis(self.host_config.signin_delay_ms);
                    let success = !self.host_config.signin_fails;
                    return Task::perform(tokio::time::sleep(delay), move |_| {
                        Message::SigninDone(success)
                    });
                }
                Task::none()
            }
            Message::SigninDone(success) => {
                self.page.host_mut().complete(ActionName::Signin, success);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let host = self.page.host();
        let t = self.page.translator();
        let (title, message) = match host.page {
            Page::Signin => return views::signin_view(&self.page).map(Message::Page),
            Page::MagicLink => (
                t.translate("magiclink.title", "Now check your email!"),
                t.translate(
                    "magiclink.description",
                    "A login link has been sent to your inbox.",
                ),
            ),
            Page::AccountHome => (
                t.translate("account.title", "Your account"),
                host.member()
                    .map(|m| m.email.clone())
                    .unwrap_or_default(),
            ),
            Page::Signup => (
                t.translate("signup.title", "Sign up"),
                t.translate("signup.unavailable", "Sign up is handled by the site."),
            ),
        };

        Container::new(
            Column::new()
                .push(Space::with_height(Length::Fill))
                .push(text::h2(title))
                .push(text::p1_regular(message).style(theme::text::secondary))
                .push(Space::with_height(Length::Fill))
                .spacing(20)
                .align_x(Alignment::Center),
        )
        .padding(40)
        .center_x(Length::Fill)
        .height(Length::Fill)
        .style(theme::container::background)
        .into()
    }
}
