//! Extract the raw `:id` path segment, mapping path rejections into the envelope.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Raw id segment, not yet parsed. Segments axum cannot decode (e.g. invalid
/// UTF-8 after percent-decoding) cannot name a row, so they are reported as not found.
#[derive(Clone, Debug)]
pub struct IdParam(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for IdParam
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(IdParam(id)),
            Err(e) => {
                tracing::warn!(error = %e, "undecodable id segment");
                Err(AppError::NotFound)
            }
        }
    }
}
