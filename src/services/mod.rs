pub mod fetch_service;
pub mod transcode_service;

pub use fetch_service::BlobFetcher;
pub use transcode_service::TranscodeService;
