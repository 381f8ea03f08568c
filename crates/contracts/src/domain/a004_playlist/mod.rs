pub mod aggregate;
pub mod catalog;

pub use aggregate::Playlist;
pub use catalog::playlists_catalog;
