// Media module - extension classification and duration probing

pub mod detection;
pub mod probe;

pub use detection::is_media_file;
pub use probe::MediaProber;
