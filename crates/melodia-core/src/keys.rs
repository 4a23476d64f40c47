//! Object storage key derivation for song payloads.
//!
//! A song's blob key depends on its catalog identifier alone: `songs/{id}/song.mp3`.
//! No other code path may invent keys for song payloads.

/// File name every song object is stored under, inside its per-song prefix.
pub const SONG_OBJECT_NAME: &str = "song.mp3";

/// Prefix shared by all song objects.
pub const SONG_KEY_PREFIX: &str = "songs";

/// Derive the storage key for a song.
///
/// Total over `i64` and injective: the decimal rendering of the id is the only
/// variable segment, and distinct integers never render identically.
pub fn song_storage_key(song_id: i64) -> String {
    format!("{}/{}/{}", SONG_KEY_PREFIX, song_id, SONG_OBJECT_NAME)
}
