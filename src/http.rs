//! HTTP send/decode layer shared by the resource clients.
//!
//! One verb helper per HTTP method; each sends exactly one request and maps
//! the outcome through the error reconciliation rule: a transport failure
//! propagates immediately, a non-success status becomes [`Error::Api`], and
//! a success response never consults the error shape.

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::client::AtlasClient;
use crate::error::{ApiResponse, Error, ErrorPayload, Result};

/// Maximum length of response body to log (to avoid logging sensitive data).
const MAX_LOG_BODY_LENGTH: usize = 200;

pub(crate) async fn get<T: DeserializeOwned>(
    client: &AtlasClient,
    url: Url,
) -> Result<ApiResponse<T>> {
    tracing::debug!("GET {}", url);
    send_json(client.request(Method::GET, url)).await
}

pub(crate) async fn post<T, B>(client: &AtlasClient, url: Url, body: &B) -> Result<ApiResponse<T>>
where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
{
    tracing::debug!("POST {}", url);
    send_json(client.request(Method::POST, url).json(body)).await
}

pub(crate) async fn patch<T, B>(client: &AtlasClient, url: Url, body: &B) -> Result<ApiResponse<T>>
where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
{
    tracing::debug!("PATCH {}", url);
    send_json(client.request(Method::PATCH, url).json(body)).await
}

/// DELETE carries no typed success body; only the status is reported.
pub(crate) async fn delete(client: &AtlasClient, url: Url) -> Result<ApiResponse<()>> {
    tracing::debug!("DELETE {}", url);
    let response = client.request(Method::DELETE, url).send().await?;
    let (status, body) = read_body(response).await?;
    check_api_error(status, &body)?;
    Ok(ApiResponse { status, body: () })
}

async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<ApiResponse<T>> {
    let response = request.send().await?;
    let (status, body) = read_body(response).await?;
    check_api_error(status, &body)?;
    let decoded = serde_json::from_str(&body)?;
    Ok(ApiResponse {
        status,
        body: decoded,
    })
}

async fn read_body(response: Response) -> Result<(StatusCode, String)> {
    let status = response.status();
    let body = response.text().await?;
    Ok((status, body))
}

/// Map a non-success status to [`Error::Api`].
///
/// The payload comes from the decoded body; when the body is empty,
/// unparseable, or zero-valued, it is synthesized from the status alone so
/// the caller always sees a populated error.
fn check_api_error(status: StatusCode, body: &str) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }

    // Security: only log sanitized/truncated error bodies.
    tracing::error!("api error: {} - {}", status, sanitize_for_log(body));

    let payload = serde_json::from_str::<ErrorPayload>(body)
        .ok()
        .filter(|payload| !payload.is_zero())
        .unwrap_or_else(|| ErrorPayload::from_status(status));

    Err(Error::Api { status, payload })
}

/// Truncate a response body and strip non-printable characters before it
/// reaches a log line.
fn sanitize_for_log(body: &str) -> String {
    let cut = body
        .char_indices()
        .nth(MAX_LOG_BODY_LENGTH)
        .map(|(i, _)| i)
        .unwrap_or(body.len());

    let mut sanitized = body[..cut].replace(|c: char| !c.is_ascii_graphic() && c != ' ', "");
    if cut < body.len() {
        sanitized.push_str(&format!("... [truncated, {} bytes total]", body.len()));
    }
    sanitized
}
