// Playlist module - M3U8 rendering and persistence

pub mod writer;

pub use writer::{playlist_name, write_playlist};
