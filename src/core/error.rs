use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Missing or invalid bearer token
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    /// Required input field absent or blank
    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    /// Uniqueness violation on username or configuration name
    #[error("Duplicate name: {0}")]
    DuplicateName(String),

    /// Resource not found or not owned by the caller
    #[error("Not found: {0}")]
    NotFound(String),

    /// Payment attempted with no active provider configuration
    #[error("No active payment provider. Activate one in your dashboard.")]
    NoActiveProvider,

    /// Stored provider type has no registered adapter
    #[error("Provider '{0}' is not supported")]
    UnsupportedProvider(String),

    /// Outbound gateway call failed or returned non-success
    #[error("{provider} gateway error: {message}")]
    Gateway { provider: String, message: String },

    /// Database operation errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable machine-readable discriminant for API consumers
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Unauthenticated(_) => "unauthenticated",
            AppError::MissingParameter(_) => "missing_parameter",
            AppError::DuplicateName(_) => "duplicate_name",
            AppError::NotFound(_) => "not_found",
            AppError::NoActiveProvider => "no_active_provider",
            AppError::UnsupportedProvider(_) => "unsupported_provider",
            AppError::Gateway { .. } => "gateway",
            AppError::Database(_) => "database",
            AppError::Configuration(_) => "configuration",
            AppError::Internal(_) => "internal",
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();

        HttpResponse::build(status_code).json(serde_json::json!({
            "error": {
                "kind": self.kind(),
                "message": self.to_string(),
                "code": status_code.as_u16(),
            }
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            AppError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            AppError::DuplicateName(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::NoActiveProvider => StatusCode::BAD_REQUEST,
            AppError::UnsupportedProvider(_) => StatusCode::BAD_REQUEST,
            AppError::Gateway { .. } => StatusCode::BAD_GATEWAY,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn unauthenticated(msg: impl Into<String>) -> Self {
        AppError::Unauthenticated(msg.into())
    }

    pub fn missing_parameter(field: impl Into<String>) -> Self {
        AppError::MissingParameter(field.into())
    }

    pub fn duplicate_name(msg: impl Into<String>) -> Self {
        AppError::DuplicateName(msg.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn gateway(provider: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Gateway {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
