//! Session state - the `Moodboard` struct definition.

use crate::background::BackgroundExecutor;
use crate::board::Board;
use crate::input::{InputState, Rect};
use crate::library::BoardLibrary;
use crate::notifications::ToastManager;
use std::collections::HashSet;

/// One interactive editing session: the live board, the saved-board library,
/// the input state machine, and the seams to the presentation layer.
///
/// All mutation happens synchronously on the event thread; the only
/// off-thread work is background removal, whose results come back through
/// `poll_background_jobs`.
pub struct Moodboard {
    /// The live board being edited.
    pub board: Board,
    /// Named saved-board snapshots, loaded once at construction.
    pub library: BoardLibrary,
    /// Current pointer interaction.
    pub input: InputState,
    /// Items with an in-flight background-removal job. At most one job per
    /// item; a processing item is not grabbable.
    pub processing: HashSet<String>,
    /// Worker-thread executor for removal jobs.
    pub executor: BackgroundExecutor,
    /// Pending notifications for the presentation layer to drain.
    pub toasts: ToastManager,
    /// Measured bounding rect of the board container, set by the host.
    /// `None` until the container is mounted; placement is unavailable then.
    pub canvas_rect: Option<Rect>,
}
