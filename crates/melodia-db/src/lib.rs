//! Melodia catalog persistence
//!
//! Postgres repositories for artists, albums and songs, plus the [`SongCatalog`]
//! seam the song lifecycle coordinators depend on.

pub mod db;

pub use db::{AlbumRepository, ArtistRepository, SongCatalog, SongRepository};
