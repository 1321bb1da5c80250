//! Response checks and body decoding shared by every catalog request.

use crate::SourceRecord;
use crate::error::FetchError;

/// Return the response unchanged on success, [`FetchError::HttpStatus`] otherwise.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, FetchError> {
    if !resp.status().is_success() {
        return Err(FetchError::HttpStatus {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Decode a page body into source records.
///
/// Non-JSON is [`FetchError::MalformedBody`]; JSON that is not an array of
/// objects is [`FetchError::UnexpectedShape`].
pub fn parse_page(body: &str) -> Result<Vec<SourceRecord>, FetchError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| FetchError::MalformedBody(e.to_string()))?;

    let serde_json::Value::Array(items) = value else {
        return Err(FetchError::UnexpectedShape(format!(
            "expected a JSON array, got {}",
            kind_of(&value)
        )));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            serde_json::Value::Object(map) => Ok(map),
            other => Err(FetchError::UnexpectedShape(format!(
                "item {i} is {}, expected an object",
                kind_of(&other)
            ))),
        })
        .collect()
}

const fn kind_of(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
