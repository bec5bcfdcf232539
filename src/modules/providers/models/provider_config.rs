use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;

/// Supported PIX gateway types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    Oasyfy,
    Pushinpay,
    Ghostpay,
}

impl ProviderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderType::Oasyfy => "oasyfy",
            ProviderType::Pushinpay => "pushinpay",
            ProviderType::Ghostpay => "ghostpay",
        }
    }
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The stored type tag is a free-form string; parsing happens at
/// dispatch time so an unknown tag surfaces as UnsupportedProvider
/// instead of a row-decode failure.
impl FromStr for ProviderType {
    type Err = UnknownProviderType;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "oasyfy" => Ok(ProviderType::Oasyfy),
            "pushinpay" => Ok(ProviderType::Pushinpay),
            "ghostpay" => Ok(ProviderType::Ghostpay),
            _ => Err(UnknownProviderType),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownProviderType;

/// Stored gateway configuration for one user
///
/// Which credential fields are populated depends on the provider type:
/// Oasyfy uses the public/secret key pair, Pushin Pay and Ghostpay use
/// the bearer token. Unused fields stay empty and are never validated.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProviderConfig {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub provider_type: String,
    pub public_key: String,
    pub secret_key: String,
    pub token: String,
    pub is_active: bool,
}

/// List item for the configuration listing endpoint
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ProviderSummary {
    pub id: i32,
    pub name: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

/// Payload for adding a configuration
///
/// Field names match the dashboard frontend contract.
#[derive(Debug, Deserialize)]
pub struct CreateProviderRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub provider_type: Option<String>,
    #[serde(rename = "publicKey", default)]
    pub public_key: String,
    #[serde(rename = "secretKey", default)]
    pub secret_key: String,
    #[serde(default)]
    pub token: String,
}
