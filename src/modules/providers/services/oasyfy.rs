use reqwest::Method;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::adapter::{
    OutboundRequest, PaymentResult, PixProvider, ProviderContext, StatusResult,
    CALLBACK_URL_PLACEHOLDER,
};
use crate::core::{AppError, Result};
use crate::modules::providers::models::ProviderType;

/// Oasyfy PIX gateway adapter
///
/// Authenticates with an `x-public-key`/`x-secret-key` header pair and
/// takes amounts in major currency units.
pub struct OasyfyProvider {
    base_url: String,
}

impl OasyfyProvider {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    fn key_headers(&self, ctx: &ProviderContext<'_>) -> Vec<(String, String)> {
        vec![
            ("x-public-key".to_string(), ctx.public_key.to_string()),
            ("x-secret-key".to_string(), ctx.secret_key.to_string()),
        ]
    }
}

impl PixProvider for OasyfyProvider {
    fn provider_type(&self) -> ProviderType {
        ProviderType::Oasyfy
    }

    fn build_create_request(
        &self,
        amount: Decimal,
        ctx: &ProviderContext<'_>,
    ) -> Result<OutboundRequest> {
        let request = PixReceiveRequest {
            identifier: format!("checkout-{}-{}", ctx.stamp, ctx.user_id),
            amount,
            client: ClientBlock {
                name: "Cliente Checkout",
                email: format!("checkout-{}@example.com", ctx.stamp),
                phone: "00000000000",
                document: "12345678900",
            },
            products: vec![ProductBlock {
                id: "1",
                name: "Produto",
                quantity: 1,
                price: amount,
            }],
            callback_url: CALLBACK_URL_PLACEHOLDER,
        };

        Ok(OutboundRequest {
            method: Method::POST,
            url: format!("{}/api/v1/gateway/pix/receive", self.base_url),
            headers: self.key_headers(ctx),
            body: Some(serde_json::to_value(&request).map_err(|e| {
                AppError::internal(format!("Failed to serialize oasyfy request: {e}"))
            })?),
        })
    }

    fn parse_create_response(&self, raw: &str) -> Result<PaymentResult> {
        let response: PixReceiveResponse = serde_json::from_str(raw).map_err(|e| {
            AppError::gateway(self.name(), format!("Failed to parse create response: {e}"))
        })?;

        Ok(PaymentResult {
            pix_code: response.pix.and_then(|p| p.code),
            transaction_id: response.id,
        })
    }

    fn build_status_request(
        &self,
        transaction_id: &str,
        ctx: &ProviderContext<'_>,
    ) -> Result<OutboundRequest> {
        Ok(OutboundRequest {
            method: Method::GET,
            url: format!("{}/api/v1/gateway/payments/{}", self.base_url, transaction_id),
            headers: self.key_headers(ctx),
            body: None,
        })
    }

    fn parse_status_response(&self, raw: &str) -> Result<StatusResult> {
        let response: PaymentStatusResponse = serde_json::from_str(raw).map_err(|e| {
            AppError::gateway(self.name(), format!("Failed to parse status response: {e}"))
        })?;

        Ok(StatusResult {
            status: response.status,
        })
    }
}

// Oasyfy wire structures

#[derive(Serialize)]
struct PixReceiveRequest<'a> {
    identifier: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    amount: Decimal,
    client: ClientBlock<'a>,
    products: Vec<ProductBlock<'a>>,
    #[serde(rename = "callbackUrl")]
    callback_url: &'a str,
}

#[derive(Serialize)]
struct ClientBlock<'a> {
    name: &'a str,
    email: String,
    phone: &'a str,
    document: &'a str,
}

#[derive(Serialize)]
struct ProductBlock<'a> {
    id: &'a str,
    name: &'a str,
    quantity: u32,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    price: Decimal,
}

#[derive(Deserialize)]
struct PixReceiveResponse {
    pix: Option<PixBlock>,
    id: Option<String>,
}

#[derive(Deserialize)]
struct PixBlock {
    code: Option<String>,
}

#[derive(Deserialize)]
struct PaymentStatusResponse {
    status: Option<String>,
}
