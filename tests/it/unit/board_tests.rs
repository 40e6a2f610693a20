//! Board state store tests - add/update/remove/selection semantics.

use crate::helpers::{TestBoardBuilder, item_ids};
use moodboard::BoardError;
use moodboard::board::Board;
use moodboard::types::{
    BoardFilter, ItemPatch, ItemSize, ItemStyle, MoodItem, NoteColor, NotePattern, Position,
};

fn note_at(pos: (f32, f32)) -> MoodItem {
    MoodItem::note("note", Position::new(pos.0, pos.1), ItemStyle::default())
}

#[test]
fn add_item_appends_and_activates() {
    let mut board = Board::new();
    for i in 0..5 {
        let note = note_at((i as f32 * 10.0, 0.0));
        let id = note.id.clone();
        board.add_item(note).unwrap();
        assert_eq!(board.items.len(), i + 1);
        assert_eq!(board.active_item_id.as_deref(), Some(id.as_str()));
    }
}

#[test]
fn add_item_rejects_duplicate_id() {
    let mut board = Board::new();
    let first = note_at((0.0, 0.0));
    let mut clone = note_at((50.0, 50.0));
    clone.id = first.id.clone();

    board.add_item(first).unwrap();
    let result = std::panic::catch_unwind(move || {
        let err = board.add_item(clone);
        (board, err)
    });

    // Debug builds assert; release builds reject with DuplicateId.
    if let Ok((board, err)) = result {
        assert!(matches!(err, Err(BoardError::DuplicateId(_))));
        assert_eq!(board.items.len(), 1);
    }
}

#[test]
fn update_item_changes_only_the_patched_field() {
    let mut board = TestBoardBuilder::new()
        .with_note("a", (0.0, 0.0))
        .with_note("b", (100.0, 0.0))
        .build();
    let ids = item_ids(&board);
    let before_first = board.get_item(&ids[0]).unwrap().clone();
    let before_second = board.get_item(&ids[1]).unwrap().clone();

    board.update_item(
        &ids[0],
        ItemPatch::new().with_position(Position::new(10.0, 20.0)),
    );

    let after_first = board.get_item(&ids[0]).unwrap();
    assert_eq!(after_first.position, Position::new(10.0, 20.0));
    assert_eq!(after_first.content, before_first.content);
    assert_eq!(after_first.size, before_first.size);
    assert_eq!(after_first.style, before_first.style);
    assert_eq!(board.get_item(&ids[1]).unwrap(), &before_second);
}

#[test]
fn update_item_unknown_id_is_a_silent_noop() {
    let mut board = TestBoardBuilder::new().with_note("a", (0.0, 0.0)).build();
    let snapshot = board.items.clone();
    board.update_item(
        "note-0-missing",
        ItemPatch::new().with_position(Position::new(1.0, 1.0)),
    );
    assert_eq!(board.items, snapshot);
}

#[test]
fn update_item_style_is_replaced_wholesale() {
    let mut board = Board::new();
    let note = MoodItem::note(
        "styled",
        Position::default(),
        ItemStyle::note(NoteColor::Blue, NotePattern::Lined, 2.0),
    );
    let id = note.id.clone();
    board.add_item(note).unwrap();

    // Patch carries only a rotation; color and pattern do not survive.
    board.update_item(&id, ItemPatch::new().with_style(ItemStyle::rotated(5.0)));

    let style = board.get_item(&id).unwrap().style.as_ref().unwrap();
    assert_eq!(style.rotate, Some(5.0));
    assert_eq!(style.color, None);
    assert_eq!(style.pattern, None);
}

#[test]
fn remove_active_item_clears_selection() {
    let mut board = TestBoardBuilder::new()
        .with_note("a", (0.0, 0.0))
        .with_note("b", (100.0, 0.0))
        .build();
    let ids = item_ids(&board);

    board.set_active_item(Some(&ids[0]));
    assert!(board.remove_item(&ids[0]));
    assert_eq!(board.active_item_id, None);
    assert_eq!(board.items.len(), 1);
}

#[test]
fn remove_inactive_item_keeps_selection() {
    let mut board = TestBoardBuilder::new()
        .with_note("a", (0.0, 0.0))
        .with_note("b", (100.0, 0.0))
        .build();
    let ids = item_ids(&board);

    board.set_active_item(Some(&ids[1]));
    assert!(board.remove_item(&ids[0]));
    assert_eq!(board.active_item_id.as_deref(), Some(ids[1].as_str()));
}

#[test]
fn selecting_unknown_id_clears_selection() {
    let mut board = TestBoardBuilder::new().with_note("a", (0.0, 0.0)).build();
    let ids = item_ids(&board);

    board.set_active_item(Some(&ids[0]));
    board.set_active_item(Some("note-0-missing"));
    assert_eq!(board.active_item_id, None);
}

#[test]
fn clear_resets_items_selection_and_name() {
    let mut board = TestBoardBuilder::new().with_note("a", (0.0, 0.0)).build();
    board.name = "Summer".to_string();
    let ids = item_ids(&board);
    board.set_active_item(Some(&ids[0]));

    board.clear();
    assert!(board.items.is_empty());
    assert_eq!(board.active_item_id, None);
    assert_eq!(board.name, "Untitled Board");
}

#[test]
fn set_filter_leaves_items_untouched() {
    let mut board = TestBoardBuilder::new().with_note("a", (0.0, 0.0)).build();
    let snapshot = board.items.clone();
    board.set_filter(BoardFilter::Vintage);
    assert_eq!(board.filter, BoardFilter::Vintage);
    assert_eq!(board.items, snapshot);
}

#[test]
fn paint_order_puts_active_item_last() {
    let mut board = TestBoardBuilder::new()
        .with_note("a", (0.0, 0.0))
        .with_note("b", (100.0, 0.0))
        .with_note("c", (200.0, 0.0))
        .build();
    let ids = item_ids(&board);

    board.set_active_item(Some(&ids[0]));
    let order: Vec<&str> = board
        .paint_order()
        .iter()
        .map(|item| item.id.as_str())
        .collect();
    assert_eq!(order, vec![ids[1].as_str(), ids[2].as_str(), ids[0].as_str()]);
}

#[test]
fn hit_test_prefers_the_active_item() {
    // Two overlapping notes; the active one wins even though it was placed
    // first (painted topmost).
    let mut board = TestBoardBuilder::new()
        .with_note("under", (0.0, 0.0))
        .with_note("over", (50.0, 50.0))
        .build();
    let ids = item_ids(&board);

    let point = Position::new(60.0, 60.0); // inside both
    assert_eq!(board.hit_test(point).unwrap().id, ids[1]);

    board.set_active_item(Some(&ids[0]));
    assert_eq!(board.hit_test(point).unwrap().id, ids[0]);
}

#[test]
fn hit_test_background_misses() {
    let board = TestBoardBuilder::new().with_note("a", (0.0, 0.0)).build();
    assert!(board.hit_test(Position::new(5000.0, 5000.0)).is_none());
}

#[test]
fn embeds_hit_test_at_intrinsic_size() {
    let board = TestBoardBuilder::new().with_spotify((100.0, 100.0)).build();
    // 300x80 intrinsic bounds
    assert!(board.hit_test(Position::new(399.0, 179.0)).is_some());
    assert!(board.hit_test(Position::new(401.0, 179.0)).is_none());
    assert!(board.hit_test(Position::new(399.0, 181.0)).is_none());
}

#[test]
fn generated_ids_are_unique_and_prefixed() {
    let mut board = Board::new();
    for _ in 0..100 {
        board.add_item(note_at((0.0, 0.0))).unwrap();
    }
    let mut ids = item_ids(&board);
    assert!(ids.iter().all(|id| id.starts_with("note-")));
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 100);
}

#[test]
fn note_image_carry_size_embed_does_not() {
    let note = MoodItem::note("n", Position::default(), ItemStyle::default());
    let image = MoodItem::image("data:;base64,", Position::default(), ItemSize::square(250.0));
    let embed = MoodItem::spotify(
        "https://open.spotify.com/embed/track/x",
        Position::default(),
        ItemStyle::default(),
    );
    assert!(note.size.is_some());
    assert!(image.size.is_some());
    assert!(embed.size.is_none());
    assert_eq!(embed.bounds(), (300.0, 80.0));
}
