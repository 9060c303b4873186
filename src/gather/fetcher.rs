use reqwest::Client;

use crate::error::{HuntError, Result};

/// Raw page as served by the target.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub target: String,
    pub body: Vec<u8>,
}

/// Fetch the target once. No retries: any transport, timeout or body error ends the run.
///
/// A non-success status still yields a page; plenty of misconfigured hosts
/// serve the app shell behind a 404.
pub async fn fetch_target(client: &Client, target: &str) -> Result<FetchedPage> {
    if target.trim().is_empty() {
        return Err(HuntError::EmptyTarget);
    }

    let fetch_err = |source: reqwest::Error| HuntError::Fetch {
        target: target.to_string(),
        source,
    };

    let resp = client.get(target).send().await.map_err(fetch_err)?;
    let status = resp.status();
    let body = resp.bytes().await.map_err(fetch_err)?.to_vec();
    if status.is_success() {
        tracing::debug!(target = %target, status = status.as_u16(), bytes = body.len(), "fetched target");
    } else {
        tracing::warn!(target = %target, status = status.as_u16(), bytes = body.len(), "target answered with an error status, inspecting body anyway");
    }

    Ok(FetchedPage {
        target: target.to_string(),
        body,
    })
}
