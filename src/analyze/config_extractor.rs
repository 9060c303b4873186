//! Pull the inline `firebase.initializeApp` config out of a page.
//!
//! This is plain substring slicing, not a JavaScript parser. It relies on the
//! page carrying the marker literals in the usual order.

use url::Url;

use super::sdk_detector::DetectedPage;
use crate::error::{HuntError, Result};

/// Appended to every extracted fragment so it runs standalone.
pub const INIT_CALL: &str = "firebase.initializeApp(config);";

const INIT_MARKER: &str = "firebase.initializeApp";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occurrence {
    First,
    Last,
}

/// A start literal and the end literal the slice stops in front of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerPair {
    pub start: &'static str,
    pub end: &'static str,
    pub end_occurrence: Occurrence,
}

/// Tried in order; the first pair that yields a slice wins.
pub const MARKER_PAIRS: &[MarkerPair] = &[
    MarkerPair {
        start: "var config = {",
        end: INIT_MARKER,
        end_occurrence: Occurrence::First,
    },
    MarkerPair {
        start: "// Initialize Firebase",
        end: INIT_MARKER,
        end_occurrence: Occurrence::Last,
    },
];

impl MarkerPair {
    /// Slice `body` from the start marker up to the end marker.
    /// `None` when either marker is missing or they are out of order.
    pub fn slice<'a>(&self, body: &'a str) -> Option<&'a str> {
        let s = body.find(self.start)?;
        let e = match self.end_occurrence {
            Occurrence::First => body.find(self.end)?,
            Occurrence::Last => body.rfind(self.end)?,
        };
        if s >= e {
            return None;
        }
        Some(&body[s..e])
    }
}

/// Config fragment ready to be dropped into a page.
#[derive(Debug, Clone)]
pub struct ExtractedConfig {
    pub target: String,
    pub host: String,
    pub fragment: String,
    pub markers: MarkerPair,
}

/// Try every marker pair against `body` and build the standalone fragment.
pub fn extract_fragment(body: &str) -> Option<(MarkerPair, String)> {
    MARKER_PAIRS.iter().find_map(|pair| {
        pair.slice(body)
            .map(|slice| (*pair, format!("{}{}", slice, INIT_CALL)))
    })
}

/// Host part of the target, or the target itself when it doesn't parse as a URL.
pub fn target_host(target: &str) -> String {
    Url::parse(target)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_string()))
        .unwrap_or_else(|| target.to_string())
}

pub fn extract_config(page: DetectedPage) -> Result<ExtractedConfig> {
    let body = String::from_utf8_lossy(&page.body);
    let (markers, fragment) = extract_fragment(&body).ok_or(HuntError::Extraction)?;
    tracing::info!(target = %page.target, start = markers.start, bytes = fragment.len(), "config extracted");
    Ok(ExtractedConfig {
        host: target_host(&page.target),
        target: page.target,
        fragment,
        markers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_pair_stops_at_first_init_call() {
        let body = "<script>var config = {a:1};\nfirebase.initializeApp(config);\nfirebase.initializeApp(other);</script>";
        let (pair, fragment) = extract_fragment(body).unwrap();
        assert_eq!(pair, MARKER_PAIRS[0]);
        assert_eq!(fragment, "var config = {a:1};\nfirebase.initializeApp(config);");
    }

    #[test]
    fn test_fallback_pair_uses_last_init_call() {
        let body = "// Initialize Firebase\nconst config = {b:2};\nfirebase.initializeApp(a);\nfirebase.initializeApp(config);";
        let (pair, fragment) = extract_fragment(body).unwrap();
        assert_eq!(pair, MARKER_PAIRS[1]);
        assert_eq!(
            fragment,
            "// Initialize Firebase\nconst config = {b:2};\nfirebase.initializeApp(a);\nfirebase.initializeApp(config);"
        );
    }

    #[test]
    fn test_out_of_order_markers() {
        let body = "firebase.initializeApp(config); var config = {a:1};";
        assert!(extract_fragment(body).is_none());
    }

    #[test]
    fn test_target_host() {
        assert_eq!(target_host("https://app.example.com/login?x=1"), "app.example.com");
        assert_eq!(target_host("not a url"), "not a url");
    }
}
