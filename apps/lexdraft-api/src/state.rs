//! Application state for the LexDraft API

use std::time::Duration;

use anyhow::Result;

pub struct AppState {
    pub http: reqwest::Client,
    pub upstream: String,
}

impl AppState {
    const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new() -> Result<Self> {
        // Get upstream API base URL from env or use default
        let upstream = std::env::var("API_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_string())
            .trim_end_matches('/')
            .to_string();

        tracing::info!("Forwarding to upstream API: {}", upstream);

        let http = reqwest::Client::builder()
            .timeout(Self::UPSTREAM_TIMEOUT)
            .build()?;

        Ok(Self { http, upstream })
    }
}
