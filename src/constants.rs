//! Shared constants for the moodboard engine.

// ============================================================================
// Board defaults
// ============================================================================

/// Placeholder name for a freshly created (or cleared) board.
pub const DEFAULT_BOARD_NAME: &str = "Untitled Board";

/// Starter text for a new sticky note.
pub const DEFAULT_NOTE_TEXT: &str = "Double click to edit this note";

/// Default width/height for a newly uploaded image, in board units.
pub const DEFAULT_IMAGE_SIZE: f32 = 250.0;

/// Default width/height for a new sticky note.
pub const DEFAULT_NOTE_SIZE: f32 = 200.0;

/// Minimum width/height an image can be resized down to.
pub const MIN_IMAGE_SIZE: f32 = 50.0;

/// Per-step scale factor when growing an image.
pub const RESIZE_GROW_FACTOR: f32 = 1.1;

/// Per-step scale factor when shrinking an image.
pub const RESIZE_SHRINK_FACTOR: f32 = 0.9;

/// Intrinsic size of an embedded player. Embeds are not resizable.
pub const EMBED_WIDTH: f32 = 300.0;
pub const EMBED_HEIGHT: f32 = 80.0;

// ============================================================================
// Background removal heuristic
// ============================================================================

/// Per-channel difference against a 4-connected neighbor that marks a pixel
/// as an edge (and therefore exempt from removal).
pub const EDGE_THRESHOLD: i16 = 50;

/// Pixels closer than this to any image boundary are removal candidates.
pub const BORDER_MARGIN: u32 = 10;

/// Per-channel tolerance when matching a pixel against the corner colors.
pub const CORNER_TOLERANCE: i16 = 30;

// ============================================================================
// Export
// ============================================================================

/// Supersampling factor for PNG export.
pub const EXPORT_SCALE: f32 = 2.0;

// ============================================================================
// Persistence keys
// ============================================================================

/// Blob-store key holding the named saved-board library.
pub const LIBRARY_KEY: &str = "moodboards";

/// Legacy single-board key, read once at startup as an import source.
pub const LEGACY_BOARD_KEY: &str = "moodboard";

/// Length of the random alphanumeric suffix in generated item ids.
pub const ID_SUFFIX_LEN: usize = 9;
