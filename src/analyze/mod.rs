pub mod config_extractor;
pub mod sdk_detector;

pub use config_extractor::{extract_config, ExtractedConfig, MarkerPair, MARKER_PAIRS};
pub use sdk_detector::{detect_firebase, find_loader, DetectedPage, LoaderPattern};
