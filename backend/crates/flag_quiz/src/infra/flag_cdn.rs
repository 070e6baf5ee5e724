//! Flag CDN Client
//!
//! Fetches flag PNGs and the upstream code list over HTTP.

use crate::application::config::QuizConfig;
use crate::domain::repository::{CodeListSource, FlagImageSource};
use crate::error::{QuizError, QuizResult};
use std::collections::BTreeMap;

/// HTTP client for the flag CDN
#[derive(Debug, Clone)]
pub struct FlagCdnClient {
    client: reqwest::Client,
    base_url: String,
    image_size: String,
}

impl FlagCdnClient {
    pub fn new(config: &QuizConfig) -> QuizResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.cdn_timeout)
            .build()
            .map_err(|e| QuizError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.cdn_base_url.trim_end_matches('/').to_string(),
            image_size: config.image_size.clone(),
        })
    }

    /// `{base}/{size}/{code}.png`; the CDN only serves lowercase codes
    pub fn image_url(&self, code: &str) -> String {
        format!(
            "{}/{}/{}.png",
            self.base_url,
            self.image_size,
            code.to_lowercase()
        )
    }

    pub fn codes_url(&self) -> String {
        format!("{}/en/codes.json", self.base_url)
    }
}

impl FlagImageSource for FlagCdnClient {
    async fn fetch_image(&self, code: &str) -> QuizResult<Vec<u8>> {
        let image_unavailable = |reason: String| QuizError::ImageUnavailable {
            code: code.to_string(),
            reason,
        };

        let response = self
            .client
            .get(self.image_url(code))
            .send()
            .await
            .map_err(|e| image_unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(image_unavailable(format!("Flag CDN returned {status}")));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| image_unavailable(e.to_string()))?;

        tracing::debug!(code, bytes = bytes.len(), "Fetched flag image");
        Ok(bytes.to_vec())
    }
}

impl CodeListSource for FlagCdnClient {
    async fn fetch_codes(&self) -> QuizResult<BTreeMap<String, String>> {
        let codes = self
            .client
            .get(self.codes_url())
            .send()
            .await?
            .error_for_status()?
            .json::<BTreeMap<String, String>>()
            .await?;
        Ok(codes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_url() {
        let client = FlagCdnClient::new(&QuizConfig::default()).unwrap();
        assert_eq!(client.image_url("FR"), "https://flagcdn.com/256x192/fr.png");
        assert_eq!(client.codes_url(), "https://flagcdn.com/en/codes.json");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = QuizConfig {
            cdn_base_url: "http://localhost:8080/".to_string(),
            image_size: "w320".to_string(),
            ..QuizConfig::default()
        };
        let client = FlagCdnClient::new(&config).unwrap();
        assert_eq!(client.image_url("de"), "http://localhost:8080/w320/de.png");
    }
}
