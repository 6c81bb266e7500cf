pub mod button;
pub mod form;
pub mod text;
