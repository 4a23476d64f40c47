mod album;
mod artist;
mod catalog;
mod constraint;
mod song;

pub use album::AlbumRepository;
pub use artist::ArtistRepository;
pub use catalog::SongCatalog;
pub use song::SongRepository;
