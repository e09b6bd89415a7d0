pub mod admin;
pub mod project;
pub mod sqlx_repo;
