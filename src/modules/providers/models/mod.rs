mod provider_config;

pub use provider_config::{
    CreateProviderRequest, ProviderConfig, ProviderSummary, ProviderType, UnknownProviderType,
};
