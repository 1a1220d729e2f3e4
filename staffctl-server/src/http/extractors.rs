//! Custom Axum extractors

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Extract an employee id from the path.
///
/// An unparseable id cannot match any stored row, so it is reported as
/// the same 404 a well-formed missing id would get, not as a 400.
pub struct EmployeeId(pub i64);

impl<S> FromRequestParts<S> for EmployeeId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound)?;

        let id = raw.parse::<i64>().map_err(|_| ApiError::NotFound)?;
        Ok(Self(id))
    }
}

/// JSON body extractor whose rejection keeps the `{error, details}`
/// response shape instead of axum's plain-text default.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| ApiError::InvalidBody(rejection.body_text()))?;

        Ok(Self(value))
    }
}
