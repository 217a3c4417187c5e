use aide::{gen::GenContext, openapi::Operation, OperationInput};
use axum::{
    async_trait,
    body::Bytes,
    extract::{rejection::BytesRejection, FromRequest},
    http::{Request, StatusCode},
    Json,
};
use axum_derive_error::ErrorResponse;
use derive_more::{Display, Error};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use tracing::warn;

/// Errors related to JSON request body decoding.
#[derive(ErrorResponse, Display, Error)]
pub enum DecodedJsonRejection {
    /// Unable to read the request body.
    #[status(StatusCode::BAD_REQUEST)]
    BodyReadError(BytesRejection),

    /// Unable to parse a JSON value.
    #[status(StatusCode::BAD_REQUEST)]
    JsonParsingError(serde_json::Error),
}

/// JSON request body extractor.
///
/// Unlike [`axum`]'s [`Json`] struct, the `Content-Type` header is not
/// inspected, the body is always decoded as JSON. Every decoding failure
/// is reported as a `400 Bad Request` response.
///
/// [`Json`]: axum::extract::Json
pub struct DecodedJson<T>(pub T);

#[async_trait]
impl<T, S, B> FromRequest<S, B> for DecodedJson<T>
where
    T: DeserializeOwned,
    B: Send + 'static,
    S: Sync,
    Bytes: FromRequest<S, B, Rejection = BytesRejection>,
{
    type Rejection = DecodedJsonRejection;

    async fn from_request(req: Request<B>, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|err| {
            warn!(%err, "unable to read request body");
            DecodedJsonRejection::BodyReadError(err)
        })?;

        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(DecodedJson(value)),
            Err(err) => {
                warn!(%err, "unable to decode request body");
                Err(DecodedJsonRejection::JsonParsingError(err))
            }
        }
    }
}

impl<T: JsonSchema> OperationInput for DecodedJson<T> {
    fn operation_input(ctx: &mut GenContext, operation: &mut Operation) {
        Json::<T>::operation_input(ctx, operation);
    }
}
