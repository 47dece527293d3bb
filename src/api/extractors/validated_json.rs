//! Validated JSON extractor - Deserialization plus `validator` rules.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::errors::AppError;

/// JSON body that has passed its `Validate` rules.
///
/// Malformed JSON, a wrong content type and rule violations all become a
/// 400 before the handler runs, so services only ever see well-formed
/// payloads.
///
/// ```rust,ignore
/// async fn create_room(ValidatedJson(room): ValidatedJson<CreateRoom>) { /* ... */ }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;

        value.validate().map_err(|errors| {
            let message = describe(&errors);
            tracing::debug!(%message, "Payload rejected");
            AppError::validation(message)
        })?;

        Ok(ValidatedJson(value))
    }
}

/// One message per failed rule, ordered by field name.
fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CreateRoom;
    use axum::body::Body;
    use axum::http::header::CONTENT_TYPE;

    fn request(body: &str) -> Request {
        axum::http::Request::builder()
            .method("POST")
            .uri("/rooms")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn rule_violations_become_validation_errors() {
        let body = r#"{"roomNumber":"","floor":1,"type":"single","capacity":0}"#;
        let err = ValidatedJson::<CreateRoom>::from_request(request(body), &())
            .await
            .err()
            .unwrap();

        assert_eq!(
            err,
            AppError::Validation(
                "Capacity must be greater than zero, Room number is required".to_string()
            )
        );
    }

    #[tokio::test]
    async fn malformed_json_is_rejected() {
        let err = ValidatedJson::<CreateRoom>::from_request(request("{"), &())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
