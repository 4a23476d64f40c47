//! Application state and sub-state extractors.

use crate::services::SongLifecycleService;
use melodia_core::Config;
use melodia_db::{AlbumRepository, ArtistRepository, SongRepository};
use melodia_storage::Storage;
use sqlx::PgPool;
use std::sync::Arc;

/// Database pool and catalog repositories.
#[derive(Clone)]
pub struct CatalogState {
    pub pool: PgPool,
    pub artists: ArtistRepository,
    pub albums: AlbumRepository,
    pub songs: SongRepository,
}

/// Main application state, built once at startup and shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogState,
    pub storage: Arc<dyn Storage>,
    pub songs: SongLifecycleService,
    /// Whether error bodies omit `details` and `error_type`
    pub is_production: bool,
}

impl AppState {
    /// Wire repositories and the lifecycle service around an existing pool and store.
    pub fn new(config: &Config, pool: PgPool, storage: Arc<dyn Storage>) -> Self {
        let songs = SongRepository::new(pool.clone());
        let lifecycle = SongLifecycleService::new(Arc::new(songs.clone()), storage.clone());

        Self {
            catalog: CatalogState {
                artists: ArtistRepository::new(pool.clone()),
                albums: AlbumRepository::new(pool.clone()),
                songs,
                pool,
            },
            storage,
            songs: lifecycle,
            is_production: config.is_production(),
        }
    }
}

impl axum::extract::FromRef<Arc<AppState>> for CatalogState {
    fn from_ref(state: &Arc<AppState>) -> Self {
        state.catalog.clone()
    }
}

impl axum::extract::FromRef<Arc<AppState>> for SongLifecycleService {
    fn from_ref(state: &Arc<AppState>) -> Self {
        state.songs.clone()
    }
}
