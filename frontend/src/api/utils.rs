use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{error_message, ApiEnvelope, ApiError, Result};

fn with_json_header(req: RequestBuilder) -> RequestBuilder {
    req.header("Content-Type", "application/json")
}

/// GET declaring a JSON content type, as every roster call does
pub fn json_get(url: &str) -> RequestBuilder {
    with_json_header(Request::get(url))
}

pub fn json_post(url: &str) -> RequestBuilder {
    with_json_header(Request::post(url))
}

pub fn json_delete(url: &str) -> RequestBuilder {
    with_json_header(Request::delete(url))
}

pub fn transport_error(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

/// Turns a non-2xx response into `ApiError::Status`, otherwise hands it back.
pub async fn ensure_ok(response: Response) -> Result<Response> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(status_error(status, &body, &response.status_text()))
}

/// Reads the full body and parses it as JSON.
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text().await.map_err(transport_error)?;
    parse_json(&body)
}

pub fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T> {
    Ok(serde_json::from_str(body)?)
}

/// Builds the error for a failed status, preferring the API's own message.
pub fn status_error(status: u16, body: &str, status_text: &str) -> ApiError {
    let message = serde_json::from_str::<ApiEnvelope<Value>>(body)
        .ok()
        .and_then(|envelope| error_message(envelope.error.as_ref()))
        .unwrap_or_else(|| status_text.to_string());

    ApiError::Status { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn status_error_uses_envelope_message() {
        let body = r#"{"success":false,"error":{"name":"NotFound","message":"Player not found"},"data":null}"#;
        assert_eq!(
            status_error(404, body, "Not Found"),
            ApiError::Status {
                status: 404,
                message: "Player not found".to_string()
            }
        );
    }

    #[test]
    fn status_error_falls_back_to_status_text() {
        let error = status_error(502, "<html>Bad Gateway</html>", "Bad Gateway");
        assert_eq!(error.status(), Some(502));
        assert_eq!(error.to_string(), "HTTP 502: Bad Gateway");
    }

    #[test]
    fn parse_json_reports_malformed_bodies() {
        let parsed: Result<Value> = parse_json("{ not json");
        assert!(matches!(parsed, Err(ApiError::Parse(_))));
    }
}
