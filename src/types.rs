//! Core types for the moodboard item model.
//!
//! This module defines the placed-item entity (`MoodItem`), its variant tag
//! and style model, the board-wide filter enum, and the id generation policy.
//! Serialized shapes are pinned to the persisted JSON format: camelCase keys,
//! a `type` tag of `"note" | "image" | "spotify"`, and filter names like
//! `"filter-none"`.

use crate::constants::{DEFAULT_NOTE_SIZE, EMBED_HEIGHT, EMBED_WIDTH, ID_SUFFIX_LEN};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

// ============================================================================
// Item variants
// ============================================================================

/// Variant tag for a placed item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Editable sticky note carrying an HTML fragment.
    Note,
    /// Uploaded image carrying an inline data URL.
    Image,
    /// Spotify player embed carrying a validated embed URL.
    Spotify,
}

impl ItemKind {
    /// Prefix used when generating ids for this kind.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            ItemKind::Note => "note",
            ItemKind::Image => "image",
            ItemKind::Spotify => "spotify",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Note => "Sticky note",
            ItemKind::Image => "Image",
            ItemKind::Spotify => "Spotify player",
        }
    }
}

// ============================================================================
// Geometry payloads
// ============================================================================

/// Board-local position of an item's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Explicit width/height of an item. Absent for embeds, which render at a
/// fixed intrinsic size.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemSize {
    pub width: f32,
    pub height: f32,
}

impl ItemSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn square(side: f32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }
}

// ============================================================================
// Style model
// ============================================================================

/// Named palette for sticky notes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteColor {
    #[default]
    Yellow,
    Blue,
    Pink,
    Green,
    Purple,
    Peach,
}

impl NoteColor {
    pub fn label(&self) -> &'static str {
        match self {
            NoteColor::Yellow => "Yellow",
            NoteColor::Blue => "Blue",
            NoteColor::Pink => "Pink",
            NoteColor::Green => "Green",
            NoteColor::Purple => "Purple",
            NoteColor::Peach => "Peach",
        }
    }

    pub fn all() -> &'static [NoteColor] {
        &[
            NoteColor::Yellow,
            NoteColor::Blue,
            NoteColor::Pink,
            NoteColor::Green,
            NoteColor::Purple,
            NoteColor::Peach,
        ]
    }
}

/// Ruling pattern for sticky notes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotePattern {
    #[default]
    Plain,
    Lined,
    Grid,
}

impl NotePattern {
    pub fn label(&self) -> &'static str {
        match self {
            NotePattern::Plain => "Plain",
            NotePattern::Lined => "Lined",
            NotePattern::Grid => "Grid",
        }
    }

    pub fn all() -> &'static [NotePattern] {
        &[NotePattern::Plain, NotePattern::Lined, NotePattern::Grid]
    }
}

/// Open style bag for an item.
///
/// `color` and `pattern` are only meaningful for notes; `rotate` applies to
/// any kind and has no enforced range (it wraps visually). Unknown keys from
/// older or newer writers are preserved in `extra` and round-trip through
/// serialization untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<NoteColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<NotePattern>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate: Option<f32>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ItemStyle {
    pub fn rotated(degrees: f32) -> Self {
        Self {
            rotate: Some(degrees),
            ..Self::default()
        }
    }

    pub fn note(color: NoteColor, pattern: NotePattern, rotate: f32) -> Self {
        Self {
            color: Some(color),
            pattern: Some(pattern),
            rotate: Some(rotate),
            extra: serde_json::Map::new(),
        }
    }
}

// ============================================================================
// Board filters
// ============================================================================

/// Board-wide visual treatment, orthogonal to item data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardFilter {
    #[default]
    #[serde(rename = "filter-none")]
    None,
    #[serde(rename = "filter-vintage")]
    Vintage,
    #[serde(rename = "filter-cozy")]
    Cozy,
    #[serde(rename = "filter-pastel")]
    Pastel,
    #[serde(rename = "filter-mono")]
    Mono,
}

impl BoardFilter {
    pub fn label(&self) -> &'static str {
        match self {
            BoardFilter::None => "Default",
            BoardFilter::Vintage => "Vintage",
            BoardFilter::Cozy => "Cozy",
            BoardFilter::Pastel => "Pastel",
            BoardFilter::Mono => "Monochrome",
        }
    }

    pub fn all() -> &'static [BoardFilter] {
        &[
            BoardFilter::None,
            BoardFilter::Vintage,
            BoardFilter::Cozy,
            BoardFilter::Pastel,
            BoardFilter::Mono,
        ]
    }
}

// ============================================================================
// The placed item
// ============================================================================

/// A placed entity on the board.
///
/// `content` is variant-dependent: an HTML fragment for notes, an inline
/// image data URL for images, a validated player embed URL for Spotify
/// items. `original_image` is retained only for images so processed variants
/// (background removal) can be re-derived without compounding lossy edits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoodItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub content: String,
    pub position: Position,
    #[serde(
        rename = "originalImage",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub original_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<ItemSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ItemStyle>,
}

impl MoodItem {
    /// Create a sticky note with a fresh id.
    pub fn note(content: impl Into<String>, position: Position, style: ItemStyle) -> Self {
        Self {
            id: generate_item_id(ItemKind::Note),
            kind: ItemKind::Note,
            content: content.into(),
            position,
            original_image: None,
            size: Some(ItemSize::square(DEFAULT_NOTE_SIZE)),
            style: Some(style),
        }
    }

    /// Create an image item with a fresh id. The data URL is stored both as
    /// the displayed content and as the unprocessed original.
    pub fn image(data_url: impl Into<String>, position: Position, size: ItemSize) -> Self {
        let data_url = data_url.into();
        Self {
            id: generate_item_id(ItemKind::Image),
            kind: ItemKind::Image,
            content: data_url.clone(),
            position,
            original_image: Some(data_url),
            size: Some(size),
            style: Some(ItemStyle::default()),
        }
    }

    /// Create a Spotify embed with a fresh id. `embed_url` must already be a
    /// validated player URL, never a raw share URL.
    pub fn spotify(embed_url: impl Into<String>, position: Position, style: ItemStyle) -> Self {
        Self {
            id: generate_item_id(ItemKind::Spotify),
            kind: ItemKind::Spotify,
            content: embed_url.into(),
            position,
            original_image: None,
            size: None,
            style: Some(style),
        }
    }

    /// Rendered width/height: the explicit size, or the intrinsic embed size.
    pub fn bounds(&self) -> (f32, f32) {
        match self.size {
            Some(size) => (size.width, size.height),
            None => (EMBED_WIDTH, EMBED_HEIGHT),
        }
    }

    /// Whether a board-local point falls inside this item's rectangle.
    /// Rotation is cosmetic and ignored for hit testing.
    pub fn contains(&self, point: Position) -> bool {
        let (width, height) = self.bounds();
        point.x >= self.position.x
            && point.x <= self.position.x + width
            && point.y >= self.position.y
            && point.y <= self.position.y + height
    }

    pub fn rotation(&self) -> f32 {
        self.style
            .as_ref()
            .and_then(|style| style.rotate)
            .unwrap_or(0.0)
    }
}

// ============================================================================
// Partial updates
// ============================================================================

/// Fields to shallow-merge into an existing item via `Board::update_item`.
///
/// Unset fields retain their prior values. Setting `style` replaces the whole
/// style object; callers wanting to keep existing keys must read-modify-write.
#[derive(Clone, Debug, Default)]
pub struct ItemPatch {
    pub content: Option<String>,
    pub position: Option<Position>,
    pub size: Option<ItemSize>,
    pub style: Option<ItemStyle>,
}

impl ItemPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_size(mut self, size: ItemSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_style(mut self, style: ItemStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Apply the patch to an item in place.
    pub fn apply(self, item: &mut MoodItem) {
        if let Some(content) = self.content {
            item.content = content;
        }
        if let Some(position) = self.position {
            item.position = position;
        }
        if let Some(size) = self.size {
            item.size = Some(size);
        }
        if let Some(style) = self.style {
            item.style = Some(style);
        }
    }
}

// ============================================================================
// Id generation
// ============================================================================

/// Generate an opaque item id: `{kind}-{epoch_millis}-{random suffix}`.
///
/// The timestamp plus random suffix makes collisions a programming-error-class
/// event; `Board::add_item` still checks.
pub fn generate_item_id(kind: ItemKind) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| {
            const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
            ALPHABET[rng.gen_range(0..ALPHABET.len())] as char
        })
        .collect();
    format!("{}-{}-{}", kind.id_prefix(), epoch_millis(), suffix)
}

/// Milliseconds since the Unix epoch.
pub fn epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
