//! fetch → detect → extract, then render once for every sink.
//!
//! Each stage consumes the previous stage's output and the first error ends the run.
//! Sinks are the exception: a failed file write is remembered and the page is still served.

use std::future::Future;
use std::io::Write;
use std::sync::Arc;

use reqwest::Client;

use crate::analyze::{detect_firebase, extract_config, ExtractedConfig};
use crate::config::Config;
use crate::error::{HuntError, Result};
use crate::gather::{fetch_target, FetchedPage};
use crate::output::{render_page, write_page, ServedPage};

pub async fn hunt(client: &Client, target: &str) -> Result<ExtractedConfig> {
    let page = fetch_target(client, target).await?;
    let detected = detect_firebase(page)?;
    extract_config(detected)
}

/// Parse stages without the network, for pages already in hand.
pub fn hunt_body(target: &str, body: Vec<u8>) -> Result<ExtractedConfig> {
    let page = FetchedPage {
        target: target.to_string(),
        body,
    };
    extract_config(detect_firebase(page)?)
}

pub fn render(config: &ExtractedConfig) -> Result<String> {
    render_page(&config.host, &config.fragment)
}

/// Feed one extracted config to the stdout, file and serve sinks.
///
/// `serve` is only called when `config.serve` is set; it gets the page every
/// request should see. Returns the first error in sink order: stdout, render,
/// file, serve.
pub async fn run_sinks<W, F, Fut>(
    config: &Config,
    extracted: &ExtractedConfig,
    stdout: &mut W,
    serve: F,
) -> Result<()>
where
    W: Write,
    F: FnOnce(Arc<ServedPage>) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    if config.print_config {
        writeln!(stdout, "{}", extracted.fragment).map_err(HuntError::Stdout)?;
    }

    let rendered = render(extracted);

    let mut first_err = None;
    match &rendered {
        Ok(page) => match write_page(&config.out_dir, &extracted.target, page) {
            Ok(path) => eprintln!("[+] Saved: {}", path.display()),
            Err(e) => {
                tracing::error!(error = %e, "failed to save dump page");
                first_err = Some(e);
            }
        },
        Err(e) => tracing::error!(error = %e, "failed to render dump page"),
    }

    let served = if config.serve {
        serve(Arc::new(ServedPage::from_render(&rendered))).await
    } else {
        Ok(())
    };

    rendered?;
    if let Some(e) = first_err {
        return Err(e);
    }
    served
}
