// Users module

pub mod controllers;
pub mod models;
pub mod repositories;

pub use models::User;
pub use repositories::UserRepository;
