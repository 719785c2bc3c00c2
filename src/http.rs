use crate::error::{BrandkitError, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub(crate) fn build_client(timeout: Option<Duration>) -> Result<Client> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| BrandkitError::Config(format!("Failed to create HTTP client: {}", e)))
}

/// Checks the status, then parses the body as JSON.
///
/// A non-2xx status is returned as `HttpStatus` with the raw body. An empty
/// body is a `Parse` error like any other non-JSON body.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = read_success_body(response).await?;
    parse_body(&body, &body)
}

/// Like [`read_json`], but an empty 2xx body (e.g. a 204) is treated as `{}`.
pub(crate) async fn read_json_or_empty<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = read_success_body(response).await?;
    let text: &str = if body.trim().is_empty() { "{}" } else { &body };
    parse_body(text, &body)
}

async fn read_success_body(response: Response) -> Result<String> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| BrandkitError::Connection(format!("Failed to read response: {}", e)))?;

    if !status.is_success() {
        return Err(BrandkitError::HttpStatus {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}

fn parse_body<T: DeserializeOwned>(text: &str, raw: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|e| BrandkitError::Parse {
        message: e.to_string(),
        body: raw.to_string(),
    })
}
