//! Translation relay: a small HTTP service that forwards language listing
//! and translation calls to a LibreTranslate-compatible API, plus the
//! controller behind its translator page.

pub mod config;
pub mod error;
pub mod frontend;
pub mod routes;
pub mod state;
pub mod translate;
pub mod upstream;

pub use config::Config;
pub use error::RelayError;
pub use routes::create_router;
pub use state::AppState;
