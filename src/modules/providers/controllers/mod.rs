mod provider_controller;

pub use provider_controller::configure;
