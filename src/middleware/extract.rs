use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::TriviaError;

/// JSON body whose rejections render as the trivia error envelope.
///
/// Well-formed JSON of the wrong shape is `UnprocessableEntity`; anything
/// that is not readable JSON is `BadRequest`.
pub struct TriviaJson<T>(pub T);

impl<T, S> FromRequest<S> for TriviaJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = TriviaError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(TriviaJson(value)),
            Err(rejection) => Err(json_rejection_to_error(rejection)),
        }
    }
}

fn json_rejection_to_error(rejection: JsonRejection) -> TriviaError {
    debug!(reason = %rejection.body_text(), "rejected request body");
    match rejection {
        JsonRejection::JsonDataError(e) => TriviaError::UnprocessableEntity(e.body_text()),
        other => TriviaError::BadRequest(other.body_text()),
    }
}

/// Path parameters; a segment that does not parse means the route names no
/// resource, so it is `NotFound`.
pub struct TriviaPath<T>(pub T);

impl<T, S> FromRequestParts<S> for TriviaPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = TriviaError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(TriviaPath(value)),
            Err(rejection) => Err(path_rejection_to_error(rejection)),
        }
    }
}

fn path_rejection_to_error(rejection: PathRejection) -> TriviaError {
    debug!(reason = %rejection.body_text(), "rejected path parameter");
    TriviaError::not_found("path parameter")
}
