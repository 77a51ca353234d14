//! Read the kurban fields from a form, multipart, or JSON body, merged over the query string.

use crate::error::AppError;
use crate::model::KurbanForm;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Multipart, Query, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};

/// Submitted fields, whatever encoding the client used. Body values win over
/// query values of the same field. Never rejects on shape: unreadable input
/// contributes nothing and fails the presence check later.
#[derive(Clone, Debug, Default)]
pub struct KurbanBody(pub KurbanForm);

#[async_trait]
impl<S> FromRequest<S> for KurbanBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_ascii_lowercase())
            .unwrap_or_default();
        let query = Query::<KurbanForm>::try_from_uri(req.uri())
            .map(|Query(form)| form)
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "unreadable query string");
                KurbanForm::default()
            });

        let body = if content_type.starts_with("application/json") {
            match Json::<KurbanForm>::from_request(req, state).await {
                Ok(Json(form)) => form,
                Err(e) => {
                    tracing::warn!(error = %e, "unreadable JSON body");
                    KurbanForm::default()
                }
            }
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            match Form::<KurbanForm>::from_request(req, state).await {
                Ok(Form(form)) => form,
                Err(e) => {
                    tracing::warn!(error = %e, "unreadable form body");
                    KurbanForm::default()
                }
            }
        } else if content_type.starts_with("multipart/form-data") {
            match Multipart::from_request(req, state).await {
                Ok(multipart) => read_multipart(multipart).await,
                Err(e) => {
                    tracing::warn!(error = %e, "unreadable multipart body");
                    KurbanForm::default()
                }
            }
        } else {
            KurbanForm::default()
        };
        Ok(KurbanBody(body.or(query)))
    }
}

/// Text parts with a known field name; file parts and unknown names are skipped.
async fn read_multipart(mut multipart: Multipart) -> KurbanForm {
    let mut form = KurbanForm::default();
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "malformed multipart body");
                break;
            }
        };
        if field.file_name().is_some() {
            continue;
        }
        let name = field.name().unwrap_or("").to_string();
        match field.text().await {
            Ok(value) => {
                form.set(&name, value);
            }
            Err(e) => {
                tracing::warn!(error = %e, field = %name, "unreadable multipart field");
                break;
            }
        }
    }
    form
}
