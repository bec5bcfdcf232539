use reqwest::Method;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::adapter::{
    to_minor_units, OutboundRequest, PaymentResult, PixProvider, ProviderContext, StatusResult,
    CALLBACK_URL_PLACEHOLDER,
};
use crate::core::{AppError, Result};
use crate::modules::providers::models::ProviderType;

/// Ghostpay PIX gateway adapter
///
/// Same bearer-token dialect as Pushin Pay with different fixed
/// customer fields; create goes to the transaction.purchase endpoint
/// and status queries share Pushin Pay's transaction host.
pub struct GhostpayProvider {
    base_url: String,
    status_base: String,
}

impl GhostpayProvider {
    pub fn new(base_url: String, status_base: String) -> Self {
        Self {
            base_url,
            status_base,
        }
    }
}

impl PixProvider for GhostpayProvider {
    fn provider_type(&self) -> ProviderType {
        ProviderType::Ghostpay
    }

    fn build_create_request(
        &self,
        amount: Decimal,
        ctx: &ProviderContext<'_>,
    ) -> Result<OutboundRequest> {
        let minor = to_minor_units(amount)?;

        let request = PurchaseRequest {
            name: "Cliente Checkout",
            email: format!("checkout-{}@example.com", ctx.stamp),
            cpf: "12345678901",
            phone: "+5516999999999",
            payment_method: "PIX",
            amount: minor,
            traceable: true,
            items: vec![PurchaseItem {
                unit_price: minor,
                title: "Acesso a Curso Online",
                quantity: 1,
                tangible: false,
            }],
            postback_url: CALLBACK_URL_PLACEHOLDER,
        };

        Ok(OutboundRequest {
            method: Method::POST,
            url: format!("{}/api/v1/transaction.purchase", self.base_url),
            headers: vec![("Authorization".to_string(), ctx.token.to_string())],
            body: Some(serde_json::to_value(&request).map_err(|e| {
                AppError::internal(format!("Failed to serialize ghostpay request: {e}"))
            })?),
        })
    }

    fn parse_create_response(&self, raw: &str) -> Result<PaymentResult> {
        let response: PurchaseResponse = serde_json::from_str(raw).map_err(|e| {
            AppError::gateway(self.name(), format!("Failed to parse create response: {e}"))
        })?;

        Ok(PaymentResult {
            pix_code: response.pix_code,
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

// Ghostpay wire structures

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PurchaseRequest<'a> {
    name: &'a str,
    email: String,
    cpf: &'a str,
    phone: &'a str,
    payment_method: &'a str,
    amount: i64,
    traceable: bool,
    items: Vec<PurchaseItem<'a>>,
    postback_url: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PurchaseItem<'a> {
    unit_price: i64,
    title: &'a str,
    quantity: u32,
    tangible: bool,
}

#[derive(Deserialize)]
struct PurchaseResponse {
    #[serde(rename = "pixCode")]
    pix_code: Option<String>,
    id: Option<String>,
}

#[derive(Deserialize)]
struct TransactionStatusResponse {
    status: Option<String>,
}
