//! OpenMusic Server Library
//!
//! HTTP service for the album and song catalog: validation, services, and the
//! error-to-response translation.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod response;
pub mod services;
pub mod state;
pub mod validation;

// Re-export commonly used types for convenience
pub use api::create_router;
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use services::{AlbumService, SongService};
pub use state::AppState;
