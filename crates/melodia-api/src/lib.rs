//! Melodia API library
//!
//! HTTP handlers, the song lifecycle service, middleware and application setup.

mod api_doc;
pub mod constants;
pub mod error;
mod handlers;
pub mod middleware;
pub mod services;
pub mod setup;
pub mod state;
mod telemetry;

pub use error::{ErrorResponse, HttpAppError};
pub use services::{SongLifecycleService, SongStream};
pub use state::AppState;
