use reqwest::{Client, Response};
use thiserror::Error;
use tracing::trace;

/// HTTP transport errors
#[derive(Debug, Error)]
pub enum NetworkingError {
    #[error("HTTP request failed: {source}")]
    RequestFailed {
        #[from]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct NetworkingConfig {
    /// HTTP client timeout in seconds
    pub timeout_seconds: u64,
    /// Sent with every request
    pub user_agent: String,
    /// Enable request/response tracing
    pub trace_requests: bool,
}

impl Default for NetworkingConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: format!("mcswap/{}", env!("CARGO_PKG_VERSION")),
            trace_requests: false,
        }
    }
}

/// Shared HTTP client; one request at a time, no retries
pub struct NetworkingManager {
    client: Client,
    config: NetworkingConfig,
}

impl NetworkingManager {
    pub fn new(config: NetworkingConfig) -> Result<Self, NetworkingError> {
        trace!(timeout = config.timeout_seconds, "Initializing networking manager");

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client, config })
    }

    /// GET a URL, treating any non-2xx status as a failure
    pub async fn get_response(&self, url: &str) -> Result<Response, NetworkingError> {
        if self.config.trace_requests {
            trace!(url, "GET");
        }

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if self.config.trace_requests {
            trace!(url, status = status.as_u16(), "Response received");
        }

        if !status.is_success() {
            return Err(NetworkingError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    /// GET a URL and collect the whole body
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, NetworkingError> {
        let response = self.get_response(url).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
