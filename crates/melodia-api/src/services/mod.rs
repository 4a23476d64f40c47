pub mod song_lifecycle;

pub use song_lifecycle::{SongLifecycleService, SongStream};
