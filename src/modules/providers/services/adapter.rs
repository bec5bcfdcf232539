use reqwest::Method;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};
use crate::modules::providers::models::{ProviderConfig, ProviderType};

/// Callback URL sent to every gateway on payment creation.
///
/// Static placeholder: no inbound confirmation endpoint exists, the
/// gateways simply require the field.
pub const CALLBACK_URL_PLACEHOLDER: &str = "https://example.com/webhooks/pix";

/// Per-call context handed to an adapter when building a request
///
/// Carries the active configuration's credentials plus the request
/// stamp used for synthesized identifiers. An adapter reads only the
/// credential fields its gateway consumes.
#[derive(Debug, Clone, Copy)]
pub struct ProviderContext<'a> {
    pub user_id: i32,
    pub stamp: &'a str,
    pub public_key: &'a str,
    pub secret_key: &'a str,
    pub token: &'a str,
}

impl<'a> ProviderContext<'a> {
    pub fn from_config(config: &'a ProviderConfig, stamp: &'a str) -> Self {
        Self {
            user_id: config.user_id,
            stamp,
            public_key: &config.public_key,
            secret_key: &config.secret_key,
            token: &config.token,
        }
    }
}

/// A fully built outbound gateway request, ready to be sent
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl OutboundRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Canonical payment-creation result
///
/// Either field may be null when the gateway response omits it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentResult {
    pub pix_code: Option<String>,
    pub transaction_id: Option<String>,
}

/// Canonical status-query result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResult {
    pub status: Option<String>,
}

/// Capability contract every PIX gateway adapter implements.
///
/// Adapters only translate between the canonical shapes and their
/// gateway's wire dialect; the dispatcher owns the transport.
pub trait PixProvider: Send + Sync {
    fn provider_type(&self) -> ProviderType;

    fn name(&self) -> &'static str {
        self.provider_type().as_str()
    }

    /// Build the payment-creation request for this gateway
    fn build_create_request(
        &self,
        amount: Decimal,
        ctx: &ProviderContext<'_>,
    ) -> Result<OutboundRequest>;

    /// Normalize the gateway's creation response
    fn parse_create_response(&self, raw: &str) -> Result<PaymentResult>;

    /// Build the status-query request for this gateway
    fn build_status_request(
        &self,
        transaction_id: &str,
        ctx: &ProviderContext<'_>,
    ) -> Result<OutboundRequest>;

    /// Normalize the gateway's status response
    fn parse_status_response(&self, raw: &str) -> Result<StatusResult>;
}

/// Convert a major-unit amount to integer minor units (cents)
pub fn to_minor_units(amount: Decimal) -> Result<i64> {
    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|minor| minor.round().to_i64())
        .ok_or_else(|| AppError::internal(format!("Amount {amount} out of range for minor units")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_minor_units_conversion() {
        assert_eq!(to_minor_units(dec!(10.00)).unwrap(), 1000);
        assert_eq!(to_minor_units(dec!(0.01)).unwrap(), 1);
        assert_eq!(to_minor_units(dec!(19.90)).unwrap(), 1990);
        assert_eq!(to_minor_units(dec!(0)).unwrap(), 0);
    }

    #[test]
    fn test_minor_units_out_of_range() {
        assert!(to_minor_units(Decimal::MAX).is_err());
    }

    #[test]
    fn test_header_lookup() {
        let request = OutboundRequest {
            method: Method::GET,
            url: "https://example.com".to_string(),
            headers: vec![("Authorization".to_string(), "tk_1".to_string())],
            body: None,
        };
        assert_eq!(request.header("Authorization"), Some("tk_1"));
        assert_eq!(request.header("x-public-key"), None);
    }
}
