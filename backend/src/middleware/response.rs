use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};

/// Builds the `{ success, data | error }` envelope for a finished response.
/// Bodies that already carry `success` are passed through untouched.
pub fn envelope(status: StatusCode, is_json: bool, bytes: &[u8]) -> Value {
    if is_json {
        let data: Value = serde_json::from_slice(bytes).unwrap_or(Value::Null);
        if data.get("success").is_some() {
            return data;
        }
        if status.is_success() {
            json!({ "success": true, "data": data })
        } else {
            let message = data
                .as_str()
                .or_else(|| data.get("error").and_then(Value::as_str))
                .map(str::to_string)
                .unwrap_or_else(|| status.to_string());
            json!({ "success": false, "error": message })
        }
    } else {
        let text = String::from_utf8_lossy(bytes).to_string();
        if status.is_success() {
            if text.is_empty() {
                json!({ "success": true, "data": null })
            } else {
                json!({ "success": true, "data": text })
            }
        } else {
            let message = if text.is_empty() { status.to_string() } else { text };
            json!({ "success": false, "error": message })
        }
    }
}

pub async fn wrap_response_middleware(req: Request, next: Next) -> Result<Response, StatusCode> {
    let wrap = req.uri().path().starts_with("/api");
    let res = next.run(req).await;
    if !wrap || res.status().is_redirection() {
        return Ok(res);
    }

    let status = res.status();
    let is_json = res
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|h| h.to_str().ok())
        .map_or(false, |ct| ct.contains("application/json"));

    let (mut parts, body) = res.into_parts();
    let bytes = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(_) => return Err(StatusCode::INTERNAL_SERVER_ERROR),
    };

    let wrapped = envelope(status, is_json, &bytes);
    let new_bytes =
        serde_json::to_vec(&wrapped).map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    parts.headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    parts.headers.insert(header::CONTENT_LENGTH, HeaderValue::from(new_bytes.len()));

    Ok(Response::from_parts(parts, Body::from(new_bytes)))
}
