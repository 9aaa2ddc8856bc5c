//! OpenMusic Core
//!
//! Storage-agnostic types, the storage port, and error handling for the
//! OpenMusic catalog service.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Album`, `Song`, `SongSummary` and their payloads
//! - **Storage Port**: the `CatalogStore` trait implemented by `openmusic-storage`
//! - **Row Mapping**: flat storage rows and their conversion into domain shapes
//! - **Error Handling**: the `CatalogError` taxonomy and `Result` alias
//!
//! # Example
//!
//! ```rust
//! use openmusic_core::types::{AlbumId, SongId};
//!
//! let album = AlbumId::generate();
//! let song = SongId::generate();
//! assert_ne!(album.as_str(), song.as_str());
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod mapping;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{CatalogError, ErrorKind, Result};
pub use storage::CatalogStore;

#[cfg(any(test, feature = "mocks"))]
pub use storage::MockCatalogStore;

pub use types::{
    Album, AlbumId, AlbumPayload, AlbumWithSongs, Song, SongId, SongPayload, SongQuery,
    SongSummary,
};
