use once_cell::sync::Lazy;
use regex::bytes::Regex;

use crate::error::{HuntError, Result};
use crate::gather::FetchedPage;

/// Which kind of script tag gave the SDK away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderPattern {
    /// `firebase.js` pulled from gstatic with any version path.
    Hosted,
    /// `firebase.js` served from anywhere, attributes allowed before `src`.
    SelfHosted,
    /// `firebase.js` / `firebase-app.js` with attributes after `src` or single quotes.
    Modular,
}

impl LoaderPattern {
    pub fn name(&self) -> &str {
        match self {
            LoaderPattern::Hosted => "gstatic firebase.js",
            LoaderPattern::SelfHosted => "self-hosted firebase.js",
            LoaderPattern::Modular => "firebase loader script",
        }
    }
}

// Checked in order, most specific first.
static LOADER_PATTERNS: Lazy<Vec<(LoaderPattern, Regex)>> = Lazy::new(|| {
    [
        (
            LoaderPattern::Hosted,
            r#"<script src="https://www\.gstatic\.com/firebasejs/.*?/firebase\.js"></script>"#,
        ),
        (
            LoaderPattern::SelfHosted,
            r#"<script.*?src=".*?/firebase\.js"></script>"#,
        ),
        (
            LoaderPattern::Modular,
            r#"<script[^>]*?\ssrc=["'][^"']*?/firebase(?:-app)?(?:\.min)?\.js["'][^>]*>"#,
        ),
    ]
    .into_iter()
    .map(|(kind, re)| (kind, Regex::new(re).expect("loader pattern must compile")))
    .collect()
});

/// Return the first loader pattern found in `body`, if any.
pub fn find_loader(body: &[u8]) -> Option<LoaderPattern> {
    LOADER_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(body))
        .map(|(kind, _)| *kind)
}

/// Page confirmed to load the SDK.
#[derive(Debug, Clone)]
pub struct DetectedPage {
    pub target: String,
    pub body: Vec<u8>,
    pub loader: LoaderPattern,
}

/// Gate the pipeline on the presence of a firebase script tag.
pub fn detect_firebase(page: FetchedPage) -> Result<DetectedPage> {
    let loader = find_loader(&page.body).ok_or(HuntError::NotDetected)?;
    tracing::info!(target = %page.target, loader = loader.name(), "firebase sdk detected");
    Ok(DetectedPage {
        target: page.target,
        body: page.body,
        loader,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_patterns_compile() {
        assert_eq!(LOADER_PATTERNS.len(), 3);
    }

    #[test]
    fn test_loader_order() {
        let hosted = br#"<script src="https://www.gstatic.com/firebasejs/4.12.1/firebase.js"></script>"#;
        assert_eq!(find_loader(hosted), Some(LoaderPattern::Hosted));

        let self_hosted = br#"<script type="text/javascript" src="/vendor/firebase.js"></script>"#;
        assert_eq!(find_loader(self_hosted), Some(LoaderPattern::SelfHosted));

        let modular = br#"<script src='/__/firebase/8.2.1/firebase-app.js' defer></script>"#;
        assert_eq!(find_loader(modular), Some(LoaderPattern::Modular));
    }

    #[test]
    fn test_no_loader() {
        assert_eq!(find_loader(b"<script src=\"/app.js\"></script>"), None);
        assert_eq!(find_loader(b"firebase.js is mentioned but never loaded"), None);
        assert_eq!(find_loader(b""), None);
    }
}
