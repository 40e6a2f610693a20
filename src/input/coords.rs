//! Coordinate conversion between viewport and board space.
//!
//! Centralizes the placement formula so every drag path computes positions
//! the same way: `board = pointer - container_origin - grab_offset`. All
//! functions are pure; an unmeasured container yields `None`, never NaN.

use crate::types::Position;

/// A point in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Bounding rectangle of the board's container, in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            width,
            height,
        }
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a pointer position to a board-local point, without any grab
    /// offset. `None` when the container has not been measured yet.
    #[inline]
    pub fn viewport_to_board_point(pointer: Point, container: Option<Rect>) -> Option<Position> {
        let container = container?;
        Some(Position::new(
            pointer.x - container.origin.x,
            pointer.y - container.origin.y,
        ))
    }

    /// Compute the board-local placement for a dragged item: the pointer
    /// position shifted by the container origin and the offset captured at
    /// grab time, so the grabbed point stays under the pointer.
    #[inline]
    pub fn viewport_to_board(
        pointer: Point,
        container: Option<Rect>,
        grab_offset: Point,
    ) -> Option<Position> {
        let container = container?;
        Some(Position::new(
            pointer.x - container.origin.x - grab_offset.x,
            pointer.y - container.origin.y - grab_offset.y,
        ))
    }

    /// Offset between the pointer and an item's top-left corner, captured
    /// when a drag begins.
    #[inline]
    pub fn grab_offset(pointer: Point, container: Rect, item_position: Position) -> Point {
        Point::new(
            pointer.x - container.origin.x - item_position.x,
            pointer.y - container.origin.y - item_position.y,
        )
    }
}
