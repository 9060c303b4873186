use std::path::PathBuf;

/// Every way a hunt can stop. Each pipeline stage and sink maps its failure
/// onto exactly one variant.
#[derive(Debug, thiserror::Error)]
pub enum HuntError {
    #[error("target can't be empty")]
    EmptyTarget,

    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to fetch {target}: {source}")]
    Fetch {
        target: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("target doesn't load the firebase sdk")]
    NotDetected,

    #[error("target uses firebase, but the config markers were not found in the page")]
    Extraction,

    #[error("failed to render page: {0}")]
    Render(String),

    #[error("failed to write {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to print config: {0}")]
    Stdout(#[source] std::io::Error),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server stopped: {0}")]
    Serve(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HuntError>;
