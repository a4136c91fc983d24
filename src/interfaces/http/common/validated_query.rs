//! Validated query-string extractor for Axum
//!
//! `ValidatedQuery<T>` works like `axum::extract::Query<T>`, but additionally
//! runs `validator::Validate::validate()` on the deserialized value.
//! Both malformed and out-of-range parameters produce a 422 response with
//! field-level details.

use axum::extract::rejection::QueryRejection;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::Validate;

use super::ErrorResponse;

/// An extractor that deserializes the query string and validates it.
///
/// # Usage
///
/// ```ignore
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct ListParams {
///     #[validate(range(min = 1, max = 100))]
///     page_size: u32,
/// }
///
/// async fn handler(ValidatedQuery(params): ValidatedQuery<ListParams>) {
///     // `params` is guaranteed to pass validation
/// }
/// ```
pub struct ValidatedQuery<T>(pub T);

/// Error type for `ValidatedQuery` extraction failures.
#[derive(Debug)]
pub enum ValidatedQueryRejection {
    /// The query string could not be deserialized into `T`.
    QueryError(QueryRejection),
    /// Deserialized parameters failed validation.
    ValidationError(validator::ValidationErrors),
}

impl ValidatedQueryRejection {
    /// Flatten the rejection into a single `field: reason; ...` message.
    pub fn detail(&self) -> String {
        match self {
            Self::QueryError(rejection) => rejection.body_text(),
            Self::ValidationError(errors) => {
                let mut field_errors: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errs)| {
                        errs.iter().map(move |e| {
                            let msg = e
                                .message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| e.code.to_string());
                            format!("{}: {}", field, msg)
                        })
                    })
                    .collect();
                field_errors.sort();

                if field_errors.is_empty() {
                    "Validation failed".to_string()
                } else {
                    field_errors.join("; ")
                }
            }
        }
    }
}

impl IntoResponse for ValidatedQueryRejection {
    fn into_response(self) -> Response {
        let detail = self.detail();
        debug!(%detail, "Rejected query parameters");
        ErrorResponse::new(detail).with_status(StatusCode::UNPROCESSABLE_ENTITY)
    }
}

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedQueryRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(ValidatedQueryRejection::QueryError)?;

        value
            .validate()
            .map_err(ValidatedQueryRejection::ValidationError)?;

        Ok(ValidatedQuery(value))
    }
}

// ── Tests ──────────────────────────────────────────────────────
