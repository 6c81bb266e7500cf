pub mod action;
pub mod config;
pub mod form;
pub mod host;
pub mod i18n;
pub mod logger;
pub mod project;
pub mod state;
pub mod validate;
pub mod views;

pub use state::Msg as Message;
