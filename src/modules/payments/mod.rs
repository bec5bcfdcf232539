// Payments module: the dispatcher routing create/status calls through
// the caller's active provider

pub mod controllers;
pub mod services;

pub use services::PaymentDispatcher;
