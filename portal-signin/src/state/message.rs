/// Keys the form reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other,
}

/// All sign-in page messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    // Form
    FieldChanged(&'static str, String),
    KeyDown(Key),
    Submit,

    // Navigation
    SwitchToSignup,
    Close,
}

/// Type alias for Msg (used in views)
pub type Message = Msg;
