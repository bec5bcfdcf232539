// Providers module: per-gateway adapters, the adapter registry, and
// stored configuration management

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{ProviderConfig, ProviderSummary, ProviderType};
pub use repositories::ProviderRepository;
pub use services::{
    PaymentResult, PixProvider, ProviderContext, ProviderRegistry, RequestStamper, StatusResult,
    SystemClock,
};
