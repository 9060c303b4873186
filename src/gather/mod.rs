pub mod fetcher;

pub use fetcher::{fetch_target, FetchedPage};
