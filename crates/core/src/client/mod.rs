pub mod assets;
pub mod prices;

use serde::Deserialize;

use crate::errors::CoreError;

/// Error body the Financify API sends on failures: `{ "message": "..." }`.
#[derive(Deserialize)]
struct ApiMessage {
    message: String,
}

/// Turn a non-2xx response into a `CoreError::Api`, preferring the server's
/// own `message` field and falling back to a per-operation default.
async fn api_error(response: reqwest::Response, fallback: &str) -> CoreError {
    let status = response.status().as_u16();
    let message = match response.json::<ApiMessage>().await {
        Ok(body) if !body.message.trim().is_empty() => body.message,
        _ => fallback.to_string(),
    };
    CoreError::Api { status, message }
}

fn build_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
