use crate::error::MiningError;
use log::debug;
use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, PRAGMA,
    UPGRADE_INSECURE_REQUESTS, USER_AGENT,
};
use reqwest::Client;
use std::time::Duration;

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Which set of browser headers to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderProfile {
    /// User-Agent, Accept and Accept-Language only
    Basic,
    /// Full top-level navigation emulation, including Sec-Fetch-* and cache headers
    Navigation,
}

impl HeaderProfile {
    pub fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static("en-US,en;q=0.9"),
        );

        match self {
            HeaderProfile::Basic => {
                headers.insert(
                    ACCEPT,
                    HeaderValue::from_static(
                        "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
                    ),
                );
            }
            HeaderProfile::Navigation => {
                headers.insert(
                    ACCEPT,
                    HeaderValue::from_static(
                        "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8",
                    ),
                );
                headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
                headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
                headers.insert(
                    "sec-ch-ua",
                    HeaderValue::from_static(
                        r#""Not_A Brand";v="8", "Chromium";v="120", "Google Chrome";v="120""#,
                    ),
                );
                headers.insert("sec-ch-ua-mobile", HeaderValue::from_static("?0"));
                headers.insert("sec-ch-ua-platform", HeaderValue::from_static(r#""Windows""#));
                headers.insert("sec-fetch-dest", HeaderValue::from_static("document"));
                headers.insert("sec-fetch-mode", HeaderValue::from_static("navigate"));
                headers.insert("sec-fetch-site", HeaderValue::from_static("none"));
                headers.insert("sec-fetch-user", HeaderValue::from_static("?1"));
                headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
            }
        }

        headers
    }
}

pub struct RequestFetcher {
    client: Client,
    timeout: Duration,
    profile: HeaderProfile,
}

impl RequestFetcher {
    pub fn new(timeout: Option<Duration>, profile: HeaderProfile) -> Self {
        Self {
            client: Client::new(),
            timeout: timeout.unwrap_or(Duration::from_secs(10)),
            profile,
        }
    }

    /// GET `url` and return the body. Non-2xx responses are errors.
    pub async fn fetch(&self, url: &str) -> Result<String, MiningError> {
        debug!("Fetching {} ({:?} headers)", url, self.profile);
        let response = self
            .client
            .get(url)
            .headers(self.profile.headers())
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MiningError::Status(status));
        }

        let html = response.text().await?;
        debug!("Fetched {} bytes from {}", html.len(), url);
        Ok(html)
    }
}
