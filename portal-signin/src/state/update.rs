use super::{Entry, Key, Msg, SigninPage, SubmitOutcome};
use crate::{
    action::{Action, Page},
    host::Host,
    project::project,
    validate::{has_errors, validate_with},
};

impl<H: Host> SigninPage<H> {
    pub fn update(&mut self, msg: Msg) {
        match msg {
            // Form
            Msg::FieldChanged(name, value) => self.on_field_changed(name, value),
            Msg::KeyDown(key) => self.on_key_down(key),
            Msg::Submit => {
                self.submit();
            }

            // Navigation
            Msg::SwitchToSignup => self.dispatch(Action::SwitchPage { page: Page::Signup }),
            Msg::Close => self.dispatch(Action::ClosePopup),
        }
    }

    /// Entry action, runs once when the page is built.
    pub(super) fn enter(&mut self) {
        if self.host.member().is_some() {
            tracing::debug!("member already signed in, switching to account home");
            self.entry = Entry::RedirectedToAccount;
            self.dispatch(Action::SwitchPage {
                page: Page::AccountHome,
            });
        }
    }

    fn on_field_changed(&mut self, name: &'static str, value: String) {
        tracing::debug!("on_field_changed: field={}", name);
        self.form.on_field_change(name, value);
    }

    pub fn on_key_down(&mut self, key: Key) {
        if key == Key::Enter {
            self.submit();
        }
    }

    /// Validates the form and, if every field is valid, asks the host to send
    /// the login link.
    pub fn submit(&mut self) -> SubmitOutcome {
        if project(self.host.action(), self.translator.as_ref()).disabled {
            tracing::debug!("submit: skipped - signin is running");
            return SubmitOutcome::Blocked;
        }

        let fields = self.form.fields(self.translator.as_ref());
        let errors = validate_with(&fields, self.translator.as_ref());
        let invalid = has_errors(&errors);
        tracing::debug!("submit: errors={:?}", errors);
        self.form.set_errors(errors);
        if invalid {
            return SubmitOutcome::Invalid;
        }

        let email = self.form.value("email").trim().to_string();
        match self.host.on_action(Action::Signin { email }) {
            Ok(()) => SubmitOutcome::Dispatched,
            Err(e) => {
                tracing::warn!("submit: signin refused by host: {}", e);
                SubmitOutcome::Rejected(e)
            }
        }
    }

    fn dispatch(&mut self, action: Action) {
        tracing::debug!("dispatch: {:?}", action);
        if let Err(e) = self.host.on_action(action) {
            tracing::warn!("dispatch refused by host: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        action::{ActionName, ActionStatus},
        host::{DispatchError, Member, Site},
        i18n::Fallback,
    };

    /// Host refusing every action.
    struct ClosedHost {
        site: Site,
        status: ActionStatus,
    }

    impl Host for ClosedHost {
        fn member(&self) -> Option<&Member> {
            None
        }
        fn site(&self) -> &Site {
            &self.site
        }
        fn brand_color(&self) -> Option<&str> {
            None
        }
        fn action(&self) -> &ActionStatus {
            &self.status
        }
        fn on_action(&mut self, action: Action) -> Result<(), DispatchError> {
            Err(DispatchError::Unsupported(action.name()))
        }
    }

    #[test]
    fn refused_signin_is_reported() {
        let host = ClosedHost {
            site: Site::default(),
            status: ActionStatus::Idle,
        };
        let mut page = SigninPage::new(host, Box::new(Fallback)).unwrap();
        page.update(Msg::FieldChanged("email", "jamie@example.com".to_string()));
        assert_eq!(
            page.submit(),
            SubmitOutcome::Rejected(DispatchError::Unsupported(ActionName::Signin))
        );
        assert!(page.form().is_validated());

        // Navigation refusals are swallowed.
        page.update(Msg::SwitchToSignup);
        page.update(Msg::Close);
    }
}
