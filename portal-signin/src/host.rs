//! The context a portal page runs in. The host owns navigation, the signed in
//! member, site branding and the execution of dispatched actions.

use thiserror::Error;

use crate::action::{Action, ActionName, ActionStatus, Page, Phase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub email: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Site {
    pub title: Option<String>,
    /// Path of the site logo.
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("action '{0}' is already running")]
    AlreadyRunning(ActionName),
    #[error("action '{0}' is not supported by this host")]
    Unsupported(ActionName),
}

/// Host context injected into a page. Everything but `on_action` is read only
/// from the page point of view.
pub trait Host {
    fn member(&self) -> Option<&Member>;
    fn site(&self) -> &Site;
    fn brand_color(&self) -> Option<&str>;
    fn action(&self) -> &ActionStatus;
    /// Hands an action over to the host. Completion is reported later through
    /// `action()`.
    fn on_action(&mut self, action: Action) -> Result<(), DispatchError>;
}

/// In-process host keeping everything in memory.
#[derive(Debug, Clone)]
pub struct LocalHost {
    pub member: Option<Member>,
    pub site: Site,
    pub brand_color: Option<String>,
    pub status: ActionStatus,
    pub page: Page,
    pub dispatched: Vec<Action>,
    pub closed: bool,
}

impl LocalHost {
    pub fn new(site: Site, brand_color: Option<String>) -> Self {
        Self {
            member: None,
            site,
            brand_color,
            status: ActionStatus::Idle,
            page: Page::Signin,
            dispatched: Vec::new(),
            closed: false,
        }
    }

    pub fn with_member(mut self, member: Member) -> Self {
        self.member = Some(member);
        self
    }

    /// Reports the end of a running action.
    pub fn complete(&mut self, name: ActionName, success: bool) {
        if !self.status.is_running(&name) {
            tracing::debug!("ignoring completion of '{}', status is {}", name, self.status);
            return;
        }
        let phase = if success {
            Phase::Succeeded
        } else {
            Phase::Failed
        };
        tracing::debug!("action '{}' {}", name, phase.as_str());
        if success && name == ActionName::Signin {
            self.page = Page::MagicLink;
        }
        self.status = ActionStatus::new(name, phase);
    }
}

impl Host for LocalHost {
    fn member(&self) -> Option<&Member> {
        self.member.as_ref()
    }

    fn site(&self) -> &Site {
        &self.site
    }

    fn brand_color(&self) -> Option<&str> {
        self.brand_color.as_deref()
    }

    fn action(&self) -> &ActionStatus {
        &self.status
    }

    fn on_action(&mut self, action: Action) -> Result<(), DispatchError> {
        let name = action.name();
        match &action {
            Action::Signin { .. } => {
                if self.status.is_running(&name) {
                    return Err(DispatchError::AlreadyRunning(name));
                }
                self.status = ActionStatus::new(name, Phase::Running);
            }
            Action::SwitchPage { page } => {
                self.page = *page;
            }
            Action::ClosePopup => {
                self.closed = true;
            }
        }
        self.dispatched.push(action);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signin() -> Action {
        Action::Signin {
            email: "jamie@example.com".to_string(),
        }
    }

    #[test]
    fn signin_runs_until_completed() {
        let mut host = LocalHost::new(Site::default(), None);
        host.on_action(signin()).unwrap();
        assert!(host.action().is_running(&ActionName::Signin));

        assert_eq!(
            host.on_action(signin()),
            Err(DispatchError::AlreadyRunning(ActionName::Signin))
        );
        assert_eq!(host.dispatched.len(), 1);

        host.complete(ActionName::Signin, false);
        assert_eq!(host.action().phase_of(&ActionName::Signin), Some(Phase::Failed));

        assert_eq!(host.page, Page::Signin);

        host.on_action(signin()).unwrap();
        host.complete(ActionName::Signin, true);
        assert_eq!(
            host.action().phase_of(&ActionName::Signin),
            Some(Phase::Succeeded)
        );
        assert_eq!(host.page, Page::MagicLink);
        assert_eq!(host.dispatched.len(), 2);
    }

    #[test]
    fn completion_of_idle_action_is_ignored() {
        let mut host = LocalHost::new(Site::default(), None);
        host.complete(ActionName::Signin, true);
        assert_eq!(host.action(), &ActionStatus::Idle);
    }

    #[test]
    fn switch_page_and_close() {
        let mut host = LocalHost::new(Site::default(), None);
        host.on_action(Action::SwitchPage { page: Page::Signup }).unwrap();
        host.on_action(Action::ClosePopup).unwrap();
        assert_eq!(host.page, Page::Signup);
        assert!(host.closed);
        assert_eq!(host.action(), &ActionStatus::Idle);
    }
}
