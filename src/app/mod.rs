//! The moodboard session - the aggregate the host application drives.
//!
//! This module is organized into several submodules:
//! - `state` - the `Moodboard` struct definition
//! - `lifecycle` - construction, canvas measurement, background job polling
//! - `board_management` - save/load/list/delete, clear, filter, export
//! - `items` - item creation actions, note editing, image actions, deletion
//!
//! Pointer handling lives in `crate::input` as further `impl Moodboard`
//! blocks.

mod board_management;
mod items;
mod lifecycle;
mod state;

pub use items::ResizeDirection;
pub use state::Moodboard;
