use std::collections::HashMap;
use std::sync::Arc;

use super::adapter::PixProvider;
use super::ghostpay::GhostpayProvider;
use super::oasyfy::OasyfyProvider;
use super::pushinpay::PushinPayProvider;
use crate::config::ProviderEndpoints;
use crate::core::{AppError, Result};
use crate::modules::providers::models::ProviderType;

/// Registry mapping a provider type to its adapter.
///
/// Adding a gateway means registering a new adapter here, not growing
/// a branch chain in the dispatcher.
pub struct ProviderRegistry {
    adapters: HashMap<ProviderType, Arc<dyn PixProvider>>,
}

impl ProviderRegistry {
    /// Build the registry with all supported gateways
    pub fn new(endpoints: &ProviderEndpoints) -> Self {
        let mut registry = Self {
            adapters: HashMap::new(),
        };

        registry.register(Arc::new(OasyfyProvider::new(endpoints.oasyfy_base.clone())));
        registry.register(Arc::new(PushinPayProvider::new(
            endpoints.pushinpay_base.clone(),
            endpoints.status_base.clone(),
        )));
        registry.register(Arc::new(GhostpayProvider::new(
            endpoints.ghostpay_base.clone(),
            endpoints.status_base.clone(),
        )));

        registry
    }

    pub fn register(&mut self, adapter: Arc<dyn PixProvider>) {
        self.adapters.insert(adapter.provider_type(), adapter);
    }

    /// Resolve a stored type tag to its adapter
    pub fn resolve(&self, tag: &str) -> Result<Arc<dyn PixProvider>> {
        let provider_type: ProviderType = tag
            .parse()
            .map_err(|_| AppError::UnsupportedProvider(tag.to_string()))?;

        self.adapters
            .get(&provider_type)
            .cloned()
            .ok_or_else(|| AppError::UnsupportedProvider(tag.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> ProviderEndpoints {
        ProviderEndpoints {
            oasyfy_base: "https://app.oasyfy.com".to_string(),
            pushinpay_base: "https://api.pushinpay.com.br".to_string(),
            ghostpay_base: "https://example.com.br".to_string(),
            status_base: "https://example.com.br".to_string(),
        }
    }

    #[test]
    fn test_all_supported_tags_resolve() {
        let registry = ProviderRegistry::new(&endpoints());
        for tag in ["oasyfy", "pushinpay", "ghostpay"] {
            let adapter = registry.resolve(tag).unwrap();
            assert_eq!(adapter.name(), tag);
        }
    }

    #[test]
    fn test_unknown_tag_is_unsupported() {
        let registry = ProviderRegistry::new(&endpoints());
        let err = match registry.resolve("mercadopago") {
            Ok(_) => panic!("expected unsupported provider error"),
            Err(e) => e,
        };
        assert_eq!(err.kind(), "unsupported_provider");
    }
}
