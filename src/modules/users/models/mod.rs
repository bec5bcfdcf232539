mod user;

pub use user::{RegisterRequest, RegisterResponse, User};
