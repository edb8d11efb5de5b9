use log::debug;
use reqwest::{Client, header::CONTENT_TYPE};
use serde_json::Value;

use crate::error::{FetchError, Result};

/// GETs `url` and parses the body as JSON.
///
/// A transport failure, a non-success status and a non-JSON body each map to
/// their own [`FetchError`] variant.
pub async fn make_request(client: &Client, url: &str) -> Result<Value> {
    debug!("GET {}", url);
    let res = client
        .get(url)
        .send()
        .await
        .map_err(|err| FetchError::transport(url, &err))?;

    let status = res.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let content_type = res
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_string();
    if !is_json_content_type(&content_type) {
        return Err(FetchError::content(
            url,
            format!("invalid content type '{}'", content_type),
        ));
    }

    let text = res
        .text()
        .await
        .map_err(|err| FetchError::transport(url, &err))?;

    serde_json::from_str::<Value>(&text)
        .map_err(|err| FetchError::content(url, format!("body is not valid JSON ({})", err)))
}

fn is_json_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || mime.ends_with("+json")
}
