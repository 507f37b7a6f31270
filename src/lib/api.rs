//! HTTP helper for the JSON API with a consistent timeout and error
//! handling. Feature clients go through [`get_json`] so request setup and
//! the abort-timeout policy live in one place. URL building and error-body
//! sanitization are plain string work and compile on every target; the
//! request path itself is browser-only.

use super::config::AppConfig;

/// Default request timeout (milliseconds) applied to all HTTP helpers.
#[cfg(target_arch = "wasm32")]
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Fetches JSON from the configured API base URL.
#[cfg(target_arch = "wasm32")]
pub async fn get_json<T: serde::de::DeserializeOwned>(
    path: &str,
) -> Result<T, super::errors::AppError> {
    use super::errors::AppError;
    use gloo_net::http::Request;

    let url = build_url(path);
    let response = send_with_timeout(|signal| {
        Request::get(&url)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Config(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Builds a URL from the configured API base URL and the provided path.
pub fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    build_url_with_base(&config.api_base_url, path)
}

/// Builds a URL from an explicit base URL and the provided path.
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
#[cfg(target_arch = "wasm32")]
fn map_request_error(err: gloo_net::Error) -> super::errors::AppError {
    use super::errors::AppError;

    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
#[cfg(target_arch = "wasm32")]
async fn send_with_timeout(
    build_request: impl FnOnce(
        &web_sys::AbortSignal,
    ) -> Result<gloo_net::http::Request, super::errors::AppError>,
) -> Result<gloo_net::http::Response, super::errors::AppError> {
    use super::errors::AppError;
    use gloo_timers::callback::Timeout;
    use web_sys::AbortController;

    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
#[cfg(target_arch = "wasm32")]
async fn handle_json_response<T: serde::de::DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, super::errors::AppError> {
    use super::errors::AppError;

    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status,
            message: sanitize_body(body),
        })
    }
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
pub fn sanitize_body(body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{build_url, build_url_with_base, sanitize_body};

    #[test]
    fn build_url_with_base_joins_with_single_slash() {
        assert_eq!(
            build_url_with_base("https://randomuser.me/api", "?results=5"),
            "https://randomuser.me/api/?results=5"
        );
        assert_eq!(
            build_url_with_base("https://randomuser.me/api/", "/?results=50"),
            "https://randomuser.me/api/?results=50"
        );
    }

    #[test]
    fn build_url_with_base_handles_empty_base() {
        assert_eq!(build_url_with_base("", "?results=5"), "?results=5");
        assert_eq!(build_url_with_base("   ", "?results=5"), "?results=5");
    }

    #[test]
    fn build_url_targets_the_demo_api() {
        assert_eq!(
            build_url("?results=5"),
            "https://randomuser.me/api/?results=5"
        );
    }

    #[test]
    fn sanitize_body_trims_and_truncates() {
        assert_eq!(sanitize_body(String::new()), "Request failed.");
        assert_eq!(sanitize_body("  ".to_string()), "Request failed.");
        assert_eq!(sanitize_body("  oops \n".to_string()), "oops");

        let long = "x".repeat(500);
        assert_eq!(sanitize_body(long).len(), 200);
    }
}
