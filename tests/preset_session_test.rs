//! Presets from disk into a drawn session.

use std::fs;

use clife::core::{next_generation, Session};
use clife::store::{scan_presets, PresetEntry, Preferences};
use clife::term::{FrameBuffer, GameView, Glyphs};
use clife::types::Cell;
use serde_json::json;

#[test]
fn test_preset_file_starts_a_paused_session_drawn_with_preferences() {
    let dir = tempfile::tempdir().unwrap();
    let doc = json!({
        "name": "Glider",
        "size": [20, 10],
        "pattern": [[0, 1, 0], [0, 0, 1], [1, 1, 1]]
    });
    fs::write(dir.path().join("glider.json"), doc.to_string()).unwrap();

    let entries = scan_presets(dir.path()).unwrap();
    let preset = entries[0].preset().unwrap().clone();
    let mut session = Session::new(preset.session_name(), preset.grid);
    assert!(session.paused());

    let prefs = Preferences {
        alive_cell_char: 'o',
        dead_cell_char: '.',
        ..Preferences::default()
    };
    let view = GameView::new(
        Glyphs::new(prefs.alive_cell_char, prefs.dead_cell_char),
        Default::default(),
        2,
    );
    let mut fb = FrameBuffer::new(0, 0);
    view.draw(&mut session, 30, 12, &mut fb);

    // Box at (1, 2); the first grid row is terminal row 3.
    assert!(fb.row_text(0).starts_with("Preset: Glider [26x6] 1x - i=0 - Paused"));
    assert_eq!(&fb.row_text(3)[..], " │.o........................│ ");
    assert_eq!(session.grid().get(0, 2), Some(Cell::Alive));
}

#[test]
fn test_malformed_and_corrupted_presets_are_tolerated() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("odd.json"),
        json!({"name": "Odd", "size": [3, 1], "pattern": [[1, 2, 1]]}).to_string(),
    )
    .unwrap();
    fs::write(
        dir.path().join("zero.json"),
        json!({"name": "Zero", "size": [0, 0], "pattern": []}).to_string(),
    )
    .unwrap();

    let entries = scan_presets(dir.path()).unwrap();
    assert_eq!(entries.len(), 2);

    let odd = entries[0].preset().unwrap();
    assert_eq!(odd.grid.get(1, 0), Some(Cell::Malformed));
    assert!(matches!(entries[1], PresetEntry::Corrupted { .. }));
    assert_eq!(entries[1].label(), "zero.json [CORRUPTED]");
}

#[test]
fn test_non_numeric_preset_cells_load_and_evolve() {
    let dir = tempfile::tempdir().unwrap();
    // A blinker in the middle row; the corners hold junk values.
    let doc = json!({
        "name": "Junk",
        "size": [5, 3],
        "pattern": [
            ["a", 0, 0, 0, null],
            [0, 1, 1, 1, 0],
            [1.5, 0, 0, 0, 0]
        ]
    });
    fs::write(dir.path().join("junk.json"), doc.to_string()).unwrap();

    let entries = scan_presets(dir.path()).unwrap();
    let preset = entries[0].preset().expect("junk cells must not corrupt the preset");
    assert_eq!(preset.grid.get(0, 0), Some(Cell::Malformed));
    assert_eq!(preset.grid.get(4, 0), Some(Cell::Malformed));
    assert_eq!(preset.grid.get(0, 2), Some(Cell::Malformed));

    let next = next_generation(&preset.grid);
    // Next to a malformed cell: left as is.
    assert_eq!(next.get(1, 1), Some(Cell::Alive));
    assert_eq!(next.get(3, 1), Some(Cell::Alive));
    assert_eq!(next.get(1, 0), Some(Cell::Dead));
    // The center column is clear of junk and follows the rules.
    assert_eq!(next.get(2, 0), Some(Cell::Alive));
    assert_eq!(next.get(2, 1), Some(Cell::Alive));
    assert_eq!(next.get(2, 2), Some(Cell::Alive));
    // The junk itself is untouched.
    assert_eq!(next.get(0, 0), Some(Cell::Malformed));
    assert_eq!(next.get(4, 0), Some(Cell::Malformed));
    assert_eq!(next.get(0, 2), Some(Cell::Malformed));
}
