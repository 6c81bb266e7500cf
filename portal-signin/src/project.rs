use portal_ui::component::button::ActionButton;

use crate::action::{ActionName, ActionStatus, Phase};
use crate::i18n::Translate;

/// Submit control of the sign-in form for the given host status. Only the
/// `signin` action is taken into account.
pub fn project(status: &ActionStatus, t: &dyn Translate) -> ActionButton {
    match status.phase_of(&ActionName::Signin) {
        Some(Phase::Running) => ActionButton {
            label: format!(
                "{}...",
                t.translate("signin.sending_login_link", "Sending login link")
            ),
            disabled: true,
            retry: false,
            running: true,
        },
        Some(Phase::Failed) => ActionButton {
            label: t.translate("retry", "Retry"),
            disabled: false,
            retry: true,
            running: false,
        },
        Some(Phase::Succeeded) | None => ActionButton {
            label: t.translate("continue", "Continue"),
            disabled: false,
            retry: false,
            running: false,
        },
    }
}
