pub mod chrome;
pub mod popup;
pub mod tables;
pub mod text_field;
