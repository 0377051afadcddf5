//! Snapshot endpoint check.
//!
//! # Design Decisions
//! - One GET per cycle, bounded by the client timeout
//! - Only 2xx counts as streaming; redirects are not followed
//! - Connection errors, timeouts and bad URLs all collapse to `false`

use std::time::Duration;

use reqwest::redirect::Policy;
use reqwest::Client;
use url::Url;

/// HTTP probe for the camera's video feed.
#[derive(Debug, Clone)]
pub struct FeedProbe {
    client: Client,
    port: u16,
    path: String,
}

impl FeedProbe {
    pub fn new(port: u16, path: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(Policy::none())
            .user_agent(concat!("camera-watch/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            port,
            path: path.into(),
        })
    }

    /// Feed URL for `address`. IPv6 literals are bracketed.
    pub fn url_for(&self, address: &str) -> Result<Url, url::ParseError> {
        let host = if address.contains(':') && !address.starts_with('[') {
            format!("[{}]", address)
        } else {
            address.to_string()
        };
        Url::parse(&format!("http://{}:{}{}", host, self.port, self.path))
    }

    pub async fn check(&self, address: &str) -> bool {
        let url = match self.url_for(address) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!(address = %address, error = %e, "Invalid feed URL");
                return false;
            }
        };

        match self.client.get(url).send().await {
            Ok(response) => {
                let success = response.status().is_success();
                if !success {
                    tracing::debug!(address = %address, status = %response.status(), "Feed check failed: non-success status");
                }
                success
            }
            Err(e) if e.is_timeout() => {
                tracing::debug!(address = %address, "Feed check failed: timeout");
                false
            }
            Err(e) => {
                tracing::debug!(address = %address, error = %e, "Feed check failed: request error");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_ipv4_and_hostname() {
        let probe = FeedProbe::new(8080, "/shot.jpg", Duration::from_secs(5)).unwrap();
        assert_eq!(
            probe.url_for("192.168.192.65").unwrap().as_str(),
            "http://192.168.192.65:8080/shot.jpg"
        );
        assert_eq!(
            probe.url_for("cam.local").unwrap().as_str(),
            "http://cam.local:8080/shot.jpg"
        );
    }

    #[test]
    fn test_url_for_ipv6_is_bracketed() {
        let probe = FeedProbe::new(8080, "/shot.jpg", Duration::from_secs(5)).unwrap();
        assert_eq!(
            probe.url_for("fe80::1").unwrap().as_str(),
            "http://[fe80::1]:8080/shot.jpg"
        );
    }

    #[test]
    fn test_url_for_rejects_garbage() {
        let probe = FeedProbe::new(8080, "/shot.jpg", Duration::from_secs(5)).unwrap();
        assert!(probe.url_for("bad host").is_err());
    }
}
