//! Request extractors whose rejections surface as [`BookingError`].
//!
//! [`Submission`] accepts either an urlencoded form (repeated keys become
//! lists, so `genres=Jazz&genres=Reggae` works) or a JSON body.
//! [`RecordKey`] wraps [`Path`] so an unparseable id gets the usual error
//! envelope instead of a plain-text body.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use serde::de::DeserializeOwned;

use crate::error::BookingError;

/// A form body, urlencoded or JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct Submission<T>(pub T);

impl<S, T> FromRequest<S> for Submission<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = BookingError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_urlencoded(req.headers()) {
            let axum_extra::extract::Form(value) =
                axum_extra::extract::Form::<T>::from_request(req, state).await?;
            Ok(Self(value))
        } else {
            let axum::Json(value) = axum::Json::<T>::from_request(req, state).await?;
            Ok(Self(value))
        }
    }
}

fn is_urlencoded(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
}

/// A record key taken from the URL path.
#[derive(Debug, Clone, Copy)]
pub struct RecordKey<T>(pub T);

impl<S, T> FromRequestParts<S> for RecordKey<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = BookingError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}
