use crate::core::AppError;
use actix_web::{
    dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse, Transform},
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use sqlx::PgPool;
use std::future::{ready, Ready};
use std::rc::Rc;

/// Bearer token authentication middleware
pub struct BearerAuth {
    pool: PgPool,
}

impl BearerAuth {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl<S, B> Transform<S, ServiceRequest> for BearerAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = BearerAuthMiddleware<S>;
    type Future = Ready<std::result::Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BearerAuthMiddleware {
            service: Rc::new(service),
            pool: self.pool.clone(),
        }))
    }
}

pub struct BearerAuthMiddleware<S> {
    service: Rc<S>,
    pool: PgPool,
}

impl<S, B> Service<ServiceRequest> for BearerAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, std::result::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let svc = self.service.clone();
        let pool = self.pool.clone();

        Box::pin(async move {
            // Registration and health probes are the only unauthenticated routes
            let path = req.path();
            if path == "/health" || path == "/" || path == "/users/register" {
                return svc.call(req).await;
            }

            let token = bearer_token(&req).map_err(Error::from)?;
            let user = resolve_token(&pool, &token).await.map_err(Error::from)?;

            // Store the authenticated identity for the AuthedUser extractor
            req.extensions_mut().insert(user);

            svc.call(req).await
        })
    }
}

fn bearer_token(req: &ServiceRequest) -> crate::core::Result<String> {
    let header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::unauthenticated("Missing authentication token"))?;

    header
        .strip_prefix("Bearer ")
        .map(|t| t.to_string())
        .ok_or_else(|| AppError::unauthenticated("Missing authentication token"))
}

async fn resolve_token(pool: &PgPool, token: &str) -> crate::core::Result<AuthedUser> {
    let row: Option<(i32,)> = sqlx::query_as("SELECT id FROM users WHERE auth_token = $1")
        .bind(token)
        .fetch_optional(pool)
        .await
        .map_err(AppError::Database)?;

    row.map(|(id,)| AuthedUser(id))
        .ok_or_else(|| AppError::unauthenticated("Invalid authentication token"))
}

/// Authenticated user identity, injected by [`BearerAuth`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthedUser(pub i32);

impl FromRequest for AuthedUser {
    type Error = AppError;
    type Future = Ready<std::result::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthedUser>()
                .copied()
                .ok_or_else(|| AppError::unauthenticated("Missing authentication token")),
        )
    }
}
