use reqwest::Method;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::adapter::{
    to_minor_units, OutboundRequest, PaymentResult, PixProvider, ProviderContext, StatusResult,
    CALLBACK_URL_PLACEHOLDER,
};
use crate::core::{AppError, Result};
use crate::modules::providers::models::ProviderType;

/// Pushin Pay PIX gateway adapter
///
/// Bearer-token auth, amounts in minor units. Status queries go to the
/// transaction host shared with Ghostpay.
pub struct PushinPayProvider {
    base_url: String,
    status_base: String,
}

impl PushinPayProvider {
    pub fn new(base_url: String, status_base: String) -> Self {
        Self {
            base_url,
            status_base,
        }
    }
}

impl PixProvider for PushinPayProvider {
    fn provider_type(&self) -> ProviderType {
        ProviderType::Pushinpay
    }

    fn build_create_request(
        &self,
        amount: Decimal,
        ctx: &ProviderContext<'_>,
    ) -> Result<OutboundRequest> {
        let minor = to_minor_units(amount)?;

        let request = CashinRequest {
            name: "Cliente Checkout",
            email: format!("checkout-{}@example.com", ctx.stamp),
            cpf: "12345678901",
            phone: "16977777777",
            payment_method: "PIX",
            amount: minor,
            traceable: true,
            items: vec![CashinItem {
                unit_price: minor,
                title: "Compra de Produto",
                quantity: 1,
                tangible: false,
            }],
            postback_url: CALLBACK_URL_PLACEHOLDER,
        };

        Ok(OutboundRequest {
            method: Method::POST,
            url: format!("{}/api/v1/pix/cashin", self.base_url),
            headers: vec![("Authorization".to_string(), ctx.token.to_string())],
            body: Some(serde_json::to_value(&request).map_err(|e| {
                AppError::internal(format!("Failed to serialize pushinpay request: {e}"))
            })?),
        })
    }

    fn parse_create_response(&self, raw: &str) -> Result<PaymentResult> {
        let response: CashinResponse = serde_json::from_str(raw).map_err(|e| {
            AppError::gateway(self.name(), format!("Failed to parse create response: {e}"))
        })?;

        Ok(PaymentResult {
            pix_code: response.qr_code,
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
            url: format!(
                "{}/api/v1/transaction.getPayment?id={}",
                self.status_base, transaction_id
            ),
            headers: vec![("Authorization".to_string(), ctx.token.to_string())],
            body: None,
        })
    }

    fn parse_status_response(&self, raw: &str) -> Result<StatusResult> {
        let response: TransactionStatusResponse = serde_json::from_str(raw).map_err(|e| {
            AppError::gateway(self.name(), format!("Failed to parse status response: {e}"))
        })?;

        Ok(StatusResult {
            status: response.status,
        })
    }
}

// Pushin Pay wire structures

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CashinRequest<'a> {
    name: &'a str,
    email: String,
    cpf: &'a str,
    phone: &'a str,
    payment_method: &'a str,
    amount: i64,
    traceable: bool,
    items: Vec<CashinItem<'a>>,
    postback_url: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CashinItem<'a> {
    unit_price: i64,
    title: &'a str,
    quantity: u32,
    tangible: bool,
}

#[derive(Deserialize)]
struct CashinResponse {
    qr_code: Option<String>,
    id: Option<String>,
}

#[derive(Deserialize)]
struct TransactionStatusResponse {
    status: Option<String>,
}
