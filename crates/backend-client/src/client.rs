//! Document CRUD and export client

use std::sync::Mutex;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{ApiEnvelope, Document, DocumentDraft, ExportFormat, ExportRequest, Values};

use crate::cache::TtlCache;
use crate::error::{map_reqwest_error, ClientError};

const LIST_CACHE_KEY: &str = "documents";

/// A downloaded export blob plus the metadata needed to save it
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedFile {
    pub bytes: Vec<u8>,
    pub mime_type: String,
    pub filename: String,
}

/// Gateway to the document backend
pub struct BackendClient {
    http: Client,
    base_url: String,
    token: String,
    cache: Mutex<TtlCache>,
}

impl BackendClient {
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
    const CACHE_TTL: Duration = Duration::from_secs(60);

    /// Create a client for the given proxy base URL and bearer token
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
            cache: Mutex::new(TtlCache::new(Self::CACHE_TTL)),
        })
    }

    /// List the user's documents
    pub async fn list(&self) -> Result<Vec<Document>, ClientError> {
        if let Some(cached) = self.cached(LIST_CACHE_KEY) {
            return Ok(cached);
        }
        let documents: Vec<Document> = self.get_json("/web/documents").await?;
        self.store(LIST_CACHE_KEY, &documents);
        Ok(documents)
    }

    /// Fetch one document
    pub async fn get(&self, id: &str) -> Result<Document, ClientError> {
        let key = document_key(id);
        if let Some(cached) = self.cached(&key) {
            return Ok(cached);
        }
        let document: Document = self.get_json(&format!("/web/documents/{}", id)).await?;
        self.store(&key, &document);
        Ok(document)
    }

    /// Create a document from a draft
    pub async fn create(&self, draft: &DocumentDraft) -> Result<Document, ClientError> {
        let response = self
            .http
            .post(self.url("/web/documents"))
            .bearer_auth(&self.token)
            .json(draft)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let document: Document = decode(response).await?;
        self.invalidate(&[LIST_CACHE_KEY]);
        Ok(document)
    }

    /// Replace a document's draft fields; last write wins
    pub async fn update(&self, id: &str, draft: &DocumentDraft) -> Result<Document, ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/web/documents/{}", id)))
            .bearer_auth(&self.token)
            .json(draft)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let document: Document = decode(response).await?;
        self.invalidate(&[LIST_CACHE_KEY, &document_key(id)]);
        Ok(document)
    }

    /// Delete a document
    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/web/documents/{}", id)))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        expect_success(response).await?;
        self.invalidate(&[LIST_CACHE_KEY, &document_key(id)]);
        Ok(())
    }

    /// Request a format conversion and download the result
    ///
    /// No automatic retry: a failed export surfaces immediately as a
    /// [`ClientError`] for the caller to report.
    pub async fn export(
        &self,
        template_id: &str,
        values: &Values,
        format: ExportFormat,
    ) -> Result<ExportedFile, ClientError> {
        let body = ExportRequest {
            template_id: template_id.to_string(),
            values: values.clone(),
            format,
        };
        let response = self
            .http
            .post(self.url("/web/documents/export"))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        if !response.status().is_success() {
            return Err(failure(response).await);
        }

        let mime_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .unwrap_or_else(|| format.mime_type().to_string());
        let bytes = response.bytes().await.map_err(map_reqwest_error)?.to_vec();

        tracing::info!(template_id, %format, size = bytes.len(), "exported document");

        Ok(ExportedFile {
            bytes,
            mime_type,
            filename: format!("{}.{}", template_id, format.extension()),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self
            .http
            .get(self.url(path))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        decode(response).await
    }

    fn cached<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let mut cache = self.cache.lock().ok()?;
        let value = cache.get(key)?;
        serde_json::from_value(value).ok()
    }

    fn store<T: Serialize>(&self, key: &str, value: &T) {
        if let (Ok(mut cache), Ok(json)) = (self.cache.lock(), serde_json::to_value(value)) {
            cache.insert(key, json);
        }
    }

    fn invalidate(&self, keys: &[&str]) {
        if let Ok(mut cache) = self.cache.lock() {
            for key in keys {
                cache.invalidate(key);
            }
        }
    }
}

fn document_key(id: &str) -> String {
    format!("documents/{}", id)
}

/// Decode an envelope response, mapping failures into the error taxonomy
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(failure(response).await);
    }
    let envelope: ApiEnvelope<T> = response
        .json()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))?;
    match envelope.data {
        Some(data) if envelope.success => Ok(data),
        _ => Err(ClientError::Decode(
            envelope
                .error
                .unwrap_or_else(|| "envelope carried no data".to_string()),
        )),
    }
}

/// Accept any success status, discarding the body
async fn expect_success(response: Response) -> Result<(), ClientError> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(failure(response).await)
    }
}

async fn failure(response: Response) -> ClientError {
    let status = response.status();
    let message = envelope_error(response).await;
    match status {
        StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
        StatusCode::NOT_FOUND => {
            ClientError::NotFound(message.unwrap_or_else(|| "Document not found".to_string()))
        }
        other => ClientError::Http {
            status: other.as_u16(),
            message: message.unwrap_or_else(|| "Request failed".to_string()),
        },
    }
}

async fn envelope_error(response: Response) -> Option<String> {
    let envelope: ApiEnvelope<serde_json::Value> = response.json().await.ok()?;
    envelope.error
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_normalized() {
        let client = BackendClient::new("http://localhost:3001/", "token").unwrap();
        assert_eq!(client.url("/web/documents"), "http://localhost:3001/web/documents");
    }

    #[test]
    fn test_document_cache_key() {
        assert_eq!(document_key("abc"), "documents/abc");
    }

    #[test]
    fn test_export_request_wire_shape() {
        let body = ExportRequest {
            template_id: "employment_contract".to_string(),
            values: Values::new(),
            format: ExportFormat::Pdf,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "templateId": "employment_contract",
                "values": {},
                "format": "pdf",
            })
        );
    }
}
