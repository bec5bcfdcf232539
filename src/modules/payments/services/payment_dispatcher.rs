use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;
use tracing::{error, info};

use crate::config::OutboundConfig;
use crate::core::{AppError, Result};
use crate::modules::providers::repositories::ProviderRepository;
use crate::modules::providers::services::adapter::{
    OutboundRequest, PaymentResult, ProviderContext, StatusResult,
};
use crate::modules::providers::services::registry::ProviderRegistry;
use crate::modules::providers::services::request_stamp::RequestStamper;

/// Routes payment operations through the caller's active provider.
///
/// The only component aware of the active-configuration concept: it
/// re-reads the active configuration on every call, resolves the
/// adapter, performs exactly one outbound attempt, and normalizes the
/// result. No retries.
pub struct PaymentDispatcher {
    providers: ProviderRepository,
    registry: Arc<ProviderRegistry>,
    http: reqwest::Client,
    stamper: Arc<dyn RequestStamper>,
}

impl PaymentDispatcher {
    pub fn new(
        providers: ProviderRepository,
        registry: Arc<ProviderRegistry>,
        outbound: &OutboundConfig,
        stamper: Arc<dyn RequestStamper>,
    ) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = outbound.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            providers,
            registry,
            http,
            stamper,
        })
    }

    /// Create a PIX payment through the caller's active provider
    pub async fn create_payment(&self, user_id: i32, amount: Decimal) -> Result<PaymentResult> {
        let config = self
            .providers
            .find_active(user_id)
            .await?
            .ok_or(AppError::NoActiveProvider)?;
        let adapter = self.registry.resolve(&config.provider_type)?;

        let stamp = self.stamper.stamp();
        let ctx = ProviderContext::from_config(&config, &stamp);
        let request = adapter.build_create_request(amount, &ctx)?;

        info!(
            provider = adapter.name(),
            user_id,
            amount = %amount,
            "Creating PIX payment"
        );

        let body = self.send(adapter.name(), request).await?;
        let result = adapter.parse_create_response(&body)?;

        info!(
            provider = adapter.name(),
            user_id,
            transaction_id = result.transaction_id.as_deref().unwrap_or(""),
            "PIX payment created"
        );

        Ok(result)
    }

    /// Query the status of a payment through the caller's active provider
    pub async fn check_payment(
        &self,
        user_id: i32,
        transaction_id: Option<&str>,
    ) -> Result<StatusResult> {
        // Validated before any store read or outbound call
        let transaction_id = transaction_id
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::missing_parameter("transaction_id"))?;

        let config = self
            .providers
            .find_active(user_id)
            .await?
            .ok_or(AppError::NoActiveProvider)?;
        let adapter = self.registry.resolve(&config.provider_type)?;

        let stamp = self.stamper.stamp();
        let ctx = ProviderContext::from_config(&config, &stamp);
        let request = adapter.build_status_request(transaction_id, &ctx)?;

        info!(
            provider = adapter.name(),
            user_id, transaction_id, "Checking PIX payment status"
        );

        let body = self.send(adapter.name(), request).await?;
        adapter.parse_status_response(&body)
    }

    /// Perform the single outbound attempt for a built request
    async fn send(&self, provider: &str, request: OutboundRequest) -> Result<String> {
        let mut call = self.http.request(request.method, &request.url);
        for (name, value) in &request.headers {
            call = call.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            call = call.json(body);
        }

        let response = call.send().await.map_err(|e| {
            error!(provider, error = %e, "Gateway request failed");
            AppError::gateway(provider, e.to_string())
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::gateway(provider, format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            error!(provider, status = status.as_u16(), "Gateway returned non-success");
            return Err(AppError::gateway(
                provider,
                format!("HTTP {} ({})", status.as_u16(), body),
            ));
        }

        Ok(body)
    }
}
