//! HTTP handlers for the LexDraft API

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde_json::Value;
use shared_types::{ApiEnvelope, DocumentDraft, ExportRequest, Template};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// List the template catalog
pub async fn list_templates() -> Json<ApiEnvelope<Vec<Template>>> {
    Json(ApiEnvelope::ok(template_engine::list_templates()))
}

/// Get one catalog template by id
pub async fn get_template(
    Path(id): Path<String>,
) -> Result<Json<ApiEnvelope<Template>>, ApiError> {
    template_engine::get_template(&id)
        .map(|template| Json(ApiEnvelope::ok(template)))
        .ok_or_else(|| ApiError::NotFound(format!("Template not found: {}", id)))
}

/// List the user's documents
pub async fn list_documents(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<ApiEnvelope<Value>>, ApiError> {
    let token = bearer(&headers)?;
    let data = forward(&state, Method::GET, "/web/documents", &token, None).await?;
    Ok(Json(ApiEnvelope::ok(data)))
}

/// Get one document
pub async fn get_document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<ApiEnvelope<Value>>, ApiError> {
    let token = bearer(&headers)?;
    let path = format!("/web/documents/{}", id);
    let data = forward(&state, Method::GET, &path, &token, None).await?;
    Ok(Json(ApiEnvelope::ok(data)))
}

/// Create a document from a draft
pub async fn create_document(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(draft): Json<DocumentDraft>,
) -> Result<Json<ApiEnvelope<Value>>, ApiError> {
    let token = bearer(&headers)?;
    let body = serde_json::to_value(&draft).map_err(anyhow::Error::from)?;
    let data = forward(&state, Method::POST, "/web/documents", &token, Some(body)).await?;
    Ok(Json(ApiEnvelope::ok(data)))
}

/// Update a document; last write wins
pub async fn update_document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(draft): Json<DocumentDraft>,
) -> Result<Json<ApiEnvelope<Value>>, ApiError> {
    let token = bearer(&headers)?;
    let path = format!("/web/documents/{}", id);
    let body = serde_json::to_value(&draft).map_err(anyhow::Error::from)?;
    let data = forward(&state, Method::PUT, &path, &token, Some(body)).await?;
    Ok(Json(ApiEnvelope::ok(data)))
}

/// Delete a document
pub async fn delete_document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<ApiEnvelope<Value>>, ApiError> {
    let token = bearer(&headers)?;
    let path = format!("/web/documents/{}", id);
    let data = forward(&state, Method::DELETE, &path, &token, None).await?;
    Ok(Json(ApiEnvelope::ok(data)))
}

/// Request a format conversion upstream and stream the blob back
pub async fn export_document(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<ExportRequest>,
) -> Result<(StatusCode, [(String, String); 2], Vec<u8>), ApiError> {
    let token = bearer(&headers)?;
    let url = format!("{}/web/documents/export", state.upstream);

    let response = state
        .http
        .post(url)
        .bearer_auth(&token)
        .json(&request)
        .send()
        .await
        .map_err(|e| ApiError::Gateway(e.to_string()))?;

    let status = response.status();
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }
    if !status.is_success() {
        return Err(ApiError::Upstream {
            status: status.as_u16(),
        });
    }

    let mime_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| request.format.mime_type().to_string());
    let bytes = response
        .bytes()
        .await
        .map_err(|e| ApiError::Gateway(e.to_string()))?
        .to_vec();

    tracing::info!(
        template_id = %request.template_id,
        format = %request.format,
        size = bytes.len(),
        "export forwarded"
    );

    Ok((
        StatusCode::OK,
        [
            ("Content-Type".to_string(), mime_type),
            (
                "Content-Disposition".to_string(),
                format!(
                    "attachment; filename=\"{}.{}\"",
                    request.template_id,
                    request.format.extension()
                ),
            ),
        ],
        bytes,
    ))
}

/// Extract the bearer token from the Authorization header
fn bearer(headers: &HeaderMap) -> Result<String, ApiError> {
    headers
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .ok_or(ApiError::Unauthorized)
}

/// Forward a JSON request upstream with the caller's token and map the
/// upstream status into the normalized error taxonomy
async fn forward(
    state: &AppState,
    method: Method,
    path: &str,
    token: &str,
    body: Option<Value>,
) -> Result<Value, ApiError> {
    let request_id = Uuid::new_v4();
    let url = format!("{}{}", state.upstream, path);

    let mut request = state.http.request(method.clone(), url).bearer_auth(token);
    if let Some(body) = body {
        request = request.json(&body);
    }

    tracing::debug!(%request_id, %method, path, "forwarding to upstream");

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Gateway(e.to_string()))?;

    let status = response.status();
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound("Document not found".to_string()));
    }
    if !status.is_success() {
        tracing::warn!(%request_id, status = status.as_u16(), path, "upstream request failed");
        return Err(ApiError::Upstream {
            status: status.as_u16(),
        });
    }

    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Gateway(e.to_string()))?;
    if text.is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&text)
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("invalid upstream JSON: {}", e)))
}
