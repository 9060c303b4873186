use reqwest::{Client, ClientBuilder};
use std::time::Duration;

use crate::error::{HuntError, Result};

/// Build the client used to fetch the target page.
///
/// Certificate validation is disabled on purpose: the pages worth looking at
/// are usually dev or staging deployments behind self-signed certificates.
pub fn create_fetch_client(timeout_secs: u64) -> Result<Client> {
    ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .use_rustls_tls()
        .tls_sni(true)
        .https_only(false)
        .redirect(reqwest::redirect::Policy::limited(5))
        .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36")
        .danger_accept_invalid_certs(true)
        .build()
        .map_err(HuntError::Client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        assert!(create_fetch_client(60).is_ok());
    }
}
