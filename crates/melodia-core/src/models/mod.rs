pub mod album;
pub mod artist;
pub mod song;

pub use album::{Album, AlbumListQuery, AlbumRequest};
pub use artist::{Artist, ArtistRequest};
pub use song::{
    NewSong, NewSongUpload, Song, SongFilter, SongListQuery, UpdateSongRequest,
    DEFAULT_SONG_CONTENT_TYPE,
};
