//! Pointer input handling for the board.
//!
//! Implements the shared drag lifecycle every item variant follows: grab
//! (activate + capture offset), move (recompute board position), release.
//! Uses pointer capture with explicit move/up handling; the dragged item's
//! id is bound into the state machine at grab time.
//!
//! ## Modules
//!
//! - `coords` - pure viewport/board coordinate conversion
//! - `state` - input state machine (idle / dragging / editing)
//! - `mouse_down` - grab and selection handling
//! - `drag` - pointer move handling during a drag
//! - `mouse_up` - gesture release

pub mod coords;
mod drag;
mod mouse_down;
mod mouse_up;
mod state;

pub use coords::{CoordinateConverter, Point, Rect};
pub use state::InputState;
