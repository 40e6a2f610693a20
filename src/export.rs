//! Export boundary.
//!
//! Rasterization is an external collaborator: given the board and a
//! supersampling scale, it returns encoded PNG bytes. The engine's only
//! obligations are to clear the selection first (selection chrome must not
//! appear in the export) and to keep the board interactive afterward; see
//! `Moodboard::export_board`.

use crate::board::Board;
use crate::error::BoardResult;

/// Renders a board to an encoded PNG.
///
/// Implementations are expected to draw with a transparent background and
/// tolerate cross-origin images; `scale` is the supersampling factor.
pub trait BoardRenderer {
    fn render(&mut self, board: &Board, scale: f32) -> BoardResult<Vec<u8>>;
}
