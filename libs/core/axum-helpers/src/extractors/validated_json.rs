//! JSON extractor with automatic validation using the validator crate.

use axum::{
    extract::{FromRequest, Json, OriginalUri, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

/// JSON extractor with automatic validation.
///
/// Deserializes the body, runs the payload's `Validate` implementation, and
/// rejects with a translated 400 before the handler body runs. The rejection
/// carries the standard error body, path included.
///
/// # Example
/// ```ignore
/// use axum::{routing::post, Router};
/// use axum_helpers::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateProduct {
///     #[validate(length(min = 3, max = 80))]
///     name: String,
/// }
///
/// async fn create(ValidatedJson(payload): ValidatedJson<CreateProduct>) -> String {
///     format!("Creating: {}", payload.name)
/// }
///
/// let app = Router::new().route("/products", post(create));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // OriginalUri survives router nesting; the plain request URI is the
        // fallback outside a Router context (tests).
        let path = req
            .extensions()
            .get::<OriginalUri>()
            .map(|uri| uri.0.path().to_string())
            .unwrap_or_else(|| req.uri().path().to_string());

        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::from(rejection).at(path.clone()).into_response())?;

        data.validate()
            .map_err(|errors| AppError::from(errors).at(path).into_response())?;

        Ok(ValidatedJson(data))
    }
}
