pub mod admin;
pub mod project;
pub mod token;
