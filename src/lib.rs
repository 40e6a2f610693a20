//! Moodboard - a headless board state and manipulation engine.
//!
//! Users place, move, resize, and persist visual items (sticky notes,
//! images, embedded players) on a freeform 2D board. This crate owns the
//! entity model, the drag geometry, the named saved-board persistence, and
//! the background-removal routine; rendering, dialogs, and file pickers are
//! external collaborators reached through narrow seams (`BoardRenderer`,
//! `ToastManager`, the pointer entry points on `Moodboard`).

pub mod app;
pub mod background;
pub mod board;
pub mod constants;
pub mod embed;
pub mod error;
pub mod export;
pub mod imaging;
pub mod input;
pub mod library;
pub mod notifications;
pub mod storage;
pub mod types;

pub use app::{Moodboard, ResizeDirection};
pub use board::Board;
pub use error::{BoardError, BoardResult};

/// Initialize tracing with the standard env-filter setup
/// (`RUST_LOG=moodboard=debug` etc). Call once from the host binary.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}
