/// Public API for the key collection layer.
pub mod errors;
pub mod fetcher;

pub use errors::FetchError;
pub use fetcher::KeyFetcher;
