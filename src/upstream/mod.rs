pub mod interface;
pub mod client;

pub use interface::{TranslationUpstream, UpstreamError};
pub use client::LibreTranslateClient;
