use crate::core::{Calculator, ConfigProvider, SpecificityInput, SpecificityOutput};
use crate::utils::error::{Result, SpecificityError};
use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;

/// Address of the hosted calculation service.
pub const DEFAULT_ENDPOINT: &str =
    "https://wkzduipt7e632vgm5v44nhyzcy0npalr.lambda-url.us-east-2.on.aws/";

/// Calls the calculation service with one JSON POST per submission. No retries.
#[derive(Debug, Clone)]
pub struct HttpCalculator {
    client: Client,
    endpoint: String,
    timeout: Option<Duration>,
    headers: HashMap<String, String>,
}

impl HttpCalculator {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            timeout: None,
            headers: HashMap::new(),
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::new(config.endpoint())
            .with_timeout(config.timeout())
            .with_headers(config.headers())
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Calculator for HttpCalculator {
    async fn calculate(&self, input: &SpecificityInput) -> Result<SpecificityOutput> {
        tracing::debug!("POST {} with {:?}", self.endpoint, input);

        // `json` also sets Content-Type: application/json
        let mut request = self.client.post(&self.endpoint).json(input);

        for (key, value) in &self.headers {
            request = request.header(key, value);
        }

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("Calculation service response status: {}", status);

        if !status.is_success() {
            let reason = status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.to_string());
            return Err(SpecificityError::ServiceStatus {
                status: status.as_u16(),
                reason,
            });
        }

        let body = response.text().await?;
        let output: SpecificityOutput = serde_json::from_str(&body).map_err(|e| {
            tracing::warn!("Unreadable response body: {}", body);
            SpecificityError::from(e)
        })?;

        Ok(output)
    }
}
