//! JSON API handlers.
//!
//! Handlers take the already-read request body and return an [`ApiReply`];
//! the HTTP layer in [`crate::cli::serve`] owns sockets and headers.
//!
//! | Route               | Handler        |
//! |---------------------|----------------|
//! | `POST /api/publish` | [`publish`]    |
//! | `GET /api/posts`    | [`list_posts`] |

mod error;

pub use error::ApiError;

use serde_json::{Value, json};

use crate::{log, post::PublishRequest, store::PostStore};

/// Status code and JSON body of an API response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply {
    pub status: u16,
    pub body: Value,
}

impl ApiReply {
    pub fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }
}

impl From<ApiError> for ApiReply {
    fn from(error: ApiError) -> Self {
        Self {
            status: error.status(),
            body: json!({ "error": error.to_string() }),
        }
    }
}

/// `POST /api/publish`
pub fn publish(store: &PostStore, body: &[u8]) -> ApiReply {
    match try_publish(store, body) {
        Ok(url) => ApiReply::ok(json!({ "success": true, "url": url })),
        Err(error) => {
            if let ApiError::Internal(e) = &error {
                log!("error"; "publish failed: {:#}", e);
            }
            error.into()
        }
    }
}

fn try_publish(store: &PostStore, body: &[u8]) -> Result<String, ApiError> {
    let post = decode_request(body)?
        .validate()
        .ok_or(ApiError::MissingFields)?;
    store.publish(post).map_err(ApiError::Internal)
}

/// Decode a publish body into its named fields.
///
/// Only a JSON object carries fields. An empty body, an array or a scalar
/// decodes to no fields at all. A field of the wrong type inside an object
/// is a server error, not a client one.
fn decode_request(body: &[u8]) -> Result<PublishRequest, ApiError> {
    if body.trim_ascii().is_empty() {
        return Ok(PublishRequest::default());
    }

    match serde_json::from_slice::<Value>(body)? {
        fields @ Value::Object(_) => {
            serde_json::from_value(fields).map_err(|e| ApiError::Internal(e.into()))
        }
        _ => Ok(PublishRequest::default()),
    }
}

/// `GET /api/posts`
///
/// Always succeeds; an unreadable index lists as no posts.
pub fn list_posts(store: &PostStore) -> ApiReply {
    let posts = store.recent();
    let body = serde_json::to_value(posts).unwrap_or_else(|_| Value::Array(Vec::new()));
    ApiReply::ok(body)
}
