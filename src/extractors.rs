use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::{ApiError, FieldError};

/// Request bodies that carry constraints serde alone can't express.
pub trait Validate {
    fn validate(&self) -> Result<(), Vec<FieldError>>;
}

/// JSON body that has been deserialized and validated before the handler runs.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                warn!(status = %rejection.status(), "json body rejected");
                ApiError::BadRequest {
                    status: rejection.status(),
                    message: rejection.body_text(),
                }
            })?;

        if let Err(errors) = value.validate() {
            warn!(count = errors.len(), "request validation failed");
            return Err(ApiError::Validation(errors));
        }
        Ok(ValidatedJson(value))
    }
}
