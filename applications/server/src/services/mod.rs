/// Catalog services
pub mod albums;
pub mod songs;

pub use albums::AlbumService;
pub use songs::SongService;
