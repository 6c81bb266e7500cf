use crate::{
    action::{ActionName, Phase},
    form::{FormState, SchemaError, SIGNIN_FIELDS},
    host::{DispatchError, Host},
    i18n::Translate,
};
pub use message::{Key, Message, Msg};

pub mod message;
pub mod update;

/// Where the page stands in the submission flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Editing,
    EditingWithErrors,
    Submitting,
    SubmitFailed,
    Submitted,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The submit control is disabled, nothing was validated nor dispatched.
    Blocked,
    /// At least one field is invalid.
    Invalid,
    Dispatched,
    Rejected(DispatchError),
}

/// What the page did when it was built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    ShowForm,
    /// A member is already signed in, the host was asked to show the account.
    RedirectedToAccount,
}

/// Sign-in page state
pub struct SigninPage<H: Host> {
    host: H,
    form: FormState,
    translator: Box<dyn Translate>,
    entry: Entry,
}

impl<H: Host> SigninPage<H> {
    /// Builds the page. If the host already has a signed in member, the host is
    /// asked once to switch to the account page.
    pub fn new(host: H, translator: Box<dyn Translate>) -> Result<Self, SchemaError> {
        let mut page = Self {
            host,
            form: FormState::new(SIGNIN_FIELDS)?,
            translator,
            entry: Entry::ShowForm,
        };
        page.enter();
        Ok(page)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Access for the host side, e.g. to report action completion.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn translator(&self) -> &dyn Translate {
        self.translator.as_ref()
    }

    pub fn entry(&self) -> Entry {
        self.entry
    }

    pub fn submission(&self) -> Submission {
        let phase = self.host.action().phase_of(&ActionName::Signin);
        if phase == Some(Phase::Running) {
            Submission::Submitting
        } else if self.form.has_errors() {
            Submission::EditingWithErrors
        } else {
            match phase {
                Some(Phase::Failed) => Submission::SubmitFailed,
                Some(Phase::Succeeded) => Submission::Submitted,
                _ => Submission::Editing,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        action::{Action, ActionStatus, Page},
        host::{LocalHost, Member, Site},
        i18n::Fallback,
        project::project,
    };

    /// Host recording dispatches without ever changing its status on its own.
    #[derive(Default)]
    struct RecordingHost {
        member: Option<Member>,
        site: Site,
        status: ActionStatus,
        dispatched: Vec<Action>,
    }

    impl Host for RecordingHost {
        fn member(&self) -> Option<&Member> {
            self.member.as_ref()
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
            self.dispatched.push(action);
            Ok(())
        }
    }

    fn page(host: RecordingHost) -> SigninPage<RecordingHost> {
        SigninPage::new(host, Box::new(Fallback)).unwrap()
    }

    fn type_email(page: &mut SigninPage<RecordingHost>, email: &str) {
        page.update(Msg::FieldChanged("email", email.to_string()));
    }

    fn signin(email: &str) -> Action {
        Action::Signin {
            email: email.to_string(),
        }
    }

    #[test]
    fn empty_email_is_not_dispatched() {
        let mut page = page(RecordingHost::default());
        assert_eq!(page.submit(), SubmitOutcome::Invalid);
        assert_eq!(page.form().errors()["email"], "Enter your email address");
        assert!(page.host().dispatched.is_empty());
        assert_eq!(page.submission(), Submission::EditingWithErrors);
    }

    #[test]
    fn invalid_email_is_not_dispatched() {
        let mut page = page(RecordingHost::default());
        type_email(&mut page, "not-an-email");
        assert_eq!(page.submit(), SubmitOutcome::Invalid);
        assert_eq!(page.form().errors()["email"], "Invalid email address");
        assert!(page.host().dispatched.is_empty());
    }

    #[test]
    fn valid_email_is_dispatched_once() {
        let mut page = page(RecordingHost::default());
        type_email(&mut page, "jamie@example.com");
        assert_eq!(page.submit(), SubmitOutcome::Dispatched);
        assert_eq!(page.form().errors()["email"], "");
        assert_eq!(page.host().dispatched, vec![signin("jamie@example.com")]);
        assert_eq!(page.submission(), Submission::Editing);
    }

    #[test]
    fn dispatched_email_is_trimmed() {
        let mut page = page(RecordingHost::default());
        type_email(&mut page, " jamie@example.com  ");
        page.update(Msg::Submit);
        assert_eq!(page.host().dispatched, vec![signin("jamie@example.com")]);
    }

    #[test]
    fn no_dispatch_while_running() {
        let mut page = page(RecordingHost::default());
        type_email(&mut page, "jamie@example.com");
        page.host_mut().status = ActionStatus::new(ActionName::Signin, Phase::Running);
        assert_eq!(page.submission(), Submission::Submitting);

        // A submit delivered despite the disabled control.
        assert_eq!(page.submit(), SubmitOutcome::Blocked);
        page.update(Msg::KeyDown(Key::Enter));
        assert!(page.host().dispatched.is_empty());
        assert!(!page.form().is_validated());
    }

    #[test]
    fn retry_after_failure() {
        let mut page = page(RecordingHost::default());
        type_email(&mut page, "jamie@example.com");
        page.update(Msg::Submit);
        page.host_mut().status = ActionStatus::new(ActionName::Signin, Phase::Failed);
        assert_eq!(page.submission(), Submission::SubmitFailed);
        assert!(project(page.host().action(), page.translator()).retry);

        page.update(Msg::Submit);
        assert_eq!(
            page.host().dispatched,
            vec![signin("jamie@example.com"), signin("jamie@example.com")]
        );
    }

    #[test]
    fn other_action_running_does_not_block() {
        let mut page = page(RecordingHost::default());
        type_email(&mut page, "jamie@example.com");
        page.host_mut().status = ActionStatus::new(ActionName::Signup, Phase::Running);
        assert_eq!(page.submit(), SubmitOutcome::Dispatched);
    }

    #[test]
    fn stale_error_until_resubmit() {
        let mut page = page(RecordingHost::default());
        type_email(&mut page, "not-an-email");
        page.update(Msg::Submit);
        let errors = page.form().errors().clone();
        assert!(!errors["email"].is_empty());

        type_email(&mut page, "jamie@example.com");
        assert_eq!(page.form().value("email"), "jamie@example.com");
        assert_eq!(page.form().errors(), &errors);
        assert_eq!(page.submission(), Submission::EditingWithErrors);

        page.update(Msg::Submit);
        assert_eq!(page.form().errors()["email"], "");
        assert_eq!(page.host().dispatched, vec![signin("jamie@example.com")]);
    }

    #[test]
    fn member_redirects_once_on_entry() {
        let host = RecordingHost {
            member: Some(Member {
                email: "jamie@example.com".to_string(),
                name: None,
            }),
            ..Default::default()
        };
        let mut page = page(host);
        assert_eq!(page.entry(), Entry::RedirectedToAccount);
        assert_eq!(
            page.host().dispatched,
            vec![Action::SwitchPage {
                page: Page::AccountHome
            }]
        );

        // Later updates do not check the member again.
        type_email(&mut page, "");
        page.update(Msg::KeyDown(Key::Other));
        assert_eq!(page.host().dispatched.len(), 1);
    }

    #[test]
    fn no_member_no_redirect() {
        let page = page(RecordingHost::default());
        assert_eq!(page.entry(), Entry::ShowForm);
        assert!(page.host().dispatched.is_empty());
    }

    #[test]
    fn enter_is_a_submit() {
        for email in ["", "not-an-email", "jamie@example.com"] {
            let mut clicked = page(RecordingHost::default());
            type_email(&mut clicked, email);
            clicked.update(Msg::Submit);

            let mut entered = page(RecordingHost::default());
            type_email(&mut entered, email);
            entered.update(Msg::KeyDown(Key::Enter));

            assert_eq!(clicked.form(), entered.form());
            assert_eq!(clicked.host().dispatched, entered.host().dispatched);
        }
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut page = page(RecordingHost::default());
        type_email(&mut page, "jamie@example.com");
        page.update(Msg::KeyDown(Key::Other));
        assert!(!page.form().is_validated());
        assert!(page.host().dispatched.is_empty());
    }

    #[test]
    fn signup_link_and_close() {
        let mut page = page(RecordingHost::default());
        page.update(Msg::SwitchToSignup);
        page.update(Msg::Close);
        assert_eq!(
            page.host().dispatched,
            vec![
                Action::SwitchPage { page: Page::Signup },
                Action::ClosePopup
            ]
        );
    }

    #[test]
    fn local_host_signin_flow() {
        let host = LocalHost::new(Site::default(), None);
        let mut page = SigninPage::new(host, Box::new(Fallback)).unwrap();
        page.update(Msg::FieldChanged("email", "jamie@example.com".to_string()));
        assert_eq!(page.submit(), SubmitOutcome::Dispatched);
        assert_eq!(page.submission(), Submission::Submitting);
        assert_eq!(page.submit(), SubmitOutcome::Blocked);

        page.host_mut().complete(ActionName::Signin, true);
        assert_eq!(page.submission(), Submission::Submitted);
        assert_eq!(page.host().dispatched.len(), 1);
    }
}
