use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Name of an action executed by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActionName {
    Signin,
    Signup,
    SwitchPage,
    ClosePopup,
    Other(String),
}

impl ActionName {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Signin => "signin",
            Self::Signup => "signup",
            Self::SwitchPage => "switchPage",
            Self::ClosePopup => "closePopup",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for ActionName {
    fn from(name: &str) -> Self {
        match name {
            "signin" => Self::Signin,
            "signup" => Self::Signup,
            "switchPage" => Self::SwitchPage,
            "closePopup" => Self::ClosePopup,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ActionName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Failed,
    Succeeded,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Failed => "failed",
            Self::Succeeded => "succeeded",
        }
    }
}

/// Progress of the last action the host executed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActionStatus {
    #[default]
    Idle,
    Active { action: ActionName, phase: Phase },
}

impl ActionStatus {
    pub fn new(action: ActionName, phase: Phase) -> Self {
        Self::Active { action, phase }
    }

    /// Phase of the given action, `None` if the status concerns another action.
    pub fn phase_of(&self, name: &ActionName) -> Option<Phase> {
        match self {
            Self::Active { action, phase } if action == name => Some(*phase),
            _ => None,
        }
    }

    pub fn is_running(&self, name: &ActionName) -> bool {
        self.phase_of(name) == Some(Phase::Running)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseStatusError {
    #[error("action status '{0}' has no phase")]
    MissingPhase(String),
    #[error("unknown action phase '{0}'")]
    UnknownPhase(String),
}

/// Parses the `<action>:<phase>` form hosts publish, `idle` or an empty string
/// being the idle status.
impl FromStr for ActionStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == "idle" {
            return Ok(Self::Idle);
        }
        let (action, phase) = s
            .rsplit_once(':')
            .ok_or_else(|| ParseStatusError::MissingPhase(s.to_string()))?;
        let phase = match phase {
            "running" => Phase::Running,
            "failed" => Phase::Failed,
            "succeeded" | "success" => Phase::Succeeded,
            other => return Err(ParseStatusError::UnknownPhase(other.to_string())),
        };
        Ok(Self::new(ActionName::from(action), phase))
    }
}

impl fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Active { action, phase } => write!(f, "{}:{}", action, phase.as_str()),
        }
    }
}

/// Pages of the portal the host can switch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Page {
    Signin,
    Signup,
    AccountHome,
    /// Shown once the login link has been sent.
    #[serde(rename = "magiclink")]
    MagicLink,
}

/// An action dispatched to the host with its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "payload", rename_all = "camelCase")]
pub enum Action {
    Signin { email: String },
    SwitchPage { page: Page },
    ClosePopup,
}

impl Action {
    pub fn name(&self) -> ActionName {
        match self {
            Self::Signin { .. } => ActionName::Signin,
            Self::SwitchPage { .. } => ActionName::SwitchPage,
            Self::ClosePopup => ActionName::ClosePopup,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_composite_status() {
        assert_eq!("idle".parse::<ActionStatus>(), Ok(ActionStatus::Idle));
        assert_eq!("".parse::<ActionStatus>(), Ok(ActionStatus::Idle));
        assert_eq!(
            "signin:running".parse::<ActionStatus>(),
            Ok(ActionStatus::new(ActionName::Signin, Phase::Running))
        );
        assert_eq!(
            "signin:failed".parse::<ActionStatus>(),
            Ok(ActionStatus::new(ActionName::Signin, Phase::Failed))
        );
        assert_eq!(
            "updateNewsletter:succeeded".parse::<ActionStatus>(),
            Ok(ActionStatus::new(
                ActionName::Other("updateNewsletter".to_string()),
                Phase::Succeeded
            ))
        );
        assert_eq!(
            "signin".parse::<ActionStatus>(),
            Err(ParseStatusError::MissingPhase("signin".to_string()))
        );
        assert_eq!(
            "signin:pending".parse::<ActionStatus>(),
            Err(ParseStatusError::UnknownPhase("pending".to_string()))
        );
    }

    #[test]
    fn status_display_matches_host_format() {
        let status = ActionStatus::new(ActionName::Signin, Phase::Running);
        assert_eq!(status.to_string(), "signin:running");
        assert_eq!(status.to_string().parse::<ActionStatus>(), Ok(status));
        assert_eq!(ActionStatus::Idle.to_string(), "idle");
    }

    #[test]
    fn phase_is_scoped_to_action_name() {
        let status = ActionStatus::new(ActionName::Signup, Phase::Running);
        assert!(!status.is_running(&ActionName::Signin));
        assert!(status.is_running(&ActionName::Signup));
        assert_eq!(ActionStatus::Idle.phase_of(&ActionName::Signin), None);
    }

    #[test]
    fn action_payloads() {
        let signin = Action::Signin {
            email: "jamie@example.com".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&signin).unwrap(),
            json!({"action": "signin", "payload": {"email": "jamie@example.com"}})
        );
        assert_eq!(
            serde_json::to_value(Action::SwitchPage {
                page: Page::AccountHome
            })
            .unwrap(),
            json!({"action": "switchPage", "payload": {"page": "accountHome"}})
        );
        assert_eq!(
            serde_json::to_value(Action::ClosePopup).unwrap(),
            json!({"action": "closePopup"})
        );
        assert_eq!(signin.name(), ActionName::Signin);
    }
}
