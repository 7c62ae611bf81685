use std::path::Path;

use crossterm::event::KeyCode;
use space_garbage::canvas::*;
use space_garbage::frames::*;

fn frames_dir() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("animation_frames")
}

// ── Frame ─────────────────────────────────────────────────────────────────────

#[test]
fn frame_size_uses_widest_line() {
    assert_eq!(frame_size("ab\nabcd\n a").unwrap(), (3, 4));
    assert_eq!(frame_size("").unwrap(), (0, 0));
    assert_eq!(Frame::new("é\n").unwrap().size(), (1, 1));
}

#[test]
fn oversized_frame_is_rejected() {
    let wide = "x".repeat(u16::MAX as usize + 1);
    let err = frame_size(&wide).unwrap_err();
    assert!(format!("{err:#}").contains("65536 columns"));

    let tall = "x\n".repeat(u16::MAX as usize + 1);
    assert!(Frame::new(tall).is_err());

    let path = std::env::temp_dir().join(format!("space_garbage_wide_{}.txt", std::process::id()));
    std::fs::write(&path, &wide).expect("write temp frame");
    let err = Frame::load(&path).unwrap_err();
    let _ = std::fs::remove_file(&path);
    assert!(format!("{err:#}").contains("Bad frame"));
}

#[test]
fn bundled_assets_load() {
    let assets = Assets::load(&frames_dir()).expect("bundled frames load");
    assert_eq!(assets.rocket.len(), 2);
    assert_eq!(assets.rocket[0].size(), assets.rocket[1].size());
    assert!(!assets.garbage.is_empty());
    assert!(!assets.explosion.is_empty());
    assert!(assets.game_over.size().0 > 0);
}

#[test]
fn missing_directory_is_an_error() {
    let err = Assets::load(&frames_dir().join("nope")).unwrap_err();
    assert!(format!("{err:#}").contains("nope"));
}

#[test]
fn load_dir_is_sorted_by_name() {
    let frames = load_dir(&frames_dir().join("explosion")).expect("explosion frames");
    let first = Frame::load(&frames_dir().join("explosion").join("1.txt")).expect("first frame");
    assert_eq!(frames[0], first);
}

// ── Canvas ────────────────────────────────────────────────────────────────────

#[test]
fn draw_frame_skips_spaces_and_erases() {
    let mut canvas = Canvas::new(10, 10);
    canvas.draw_char(0, 1, 'x', Style::Normal);
    let frame = Frame::new("a b").unwrap();

    canvas.draw_frame(0.0, 0.0, &frame, false);
    assert_eq!(canvas.cell(0, 0).map(|c| c.glyph), Some('a'));
    assert_eq!(canvas.cell(0, 1).map(|c| c.glyph), Some('x'));
    assert_eq!(canvas.cell(0, 2).map(|c| c.glyph), Some('b'));

    canvas.draw_frame(0.0, 0.0, &frame, true);
    assert_eq!(canvas.cell(0, 0).map(|c| c.glyph), Some(' '));
    assert_eq!(canvas.cell(0, 1).map(|c| c.glyph), Some('x'));
}

#[test]
fn draw_frame_clips_outside_grid() {
    let mut canvas = Canvas::new(4, 4);
    canvas.draw_frame(-1.0, 2.0, &Frame::new("abc\ndef\nghi").unwrap(), false);
    assert_eq!(canvas.cell(0, 2).map(|c| c.glyph), Some('d'));
    assert_eq!(canvas.cell(0, 3).map(|c| c.glyph), Some('e'));
    assert_eq!(canvas.cell(1, 2).map(|c| c.glyph), Some('g'));
    assert_eq!(canvas.cell(0, 4), None);
}

#[test]
fn bottom_right_corner_is_never_drawn_by_frames() {
    let mut canvas = Canvas::new(3, 3);
    canvas.draw_frame(2.0, 2.0, &Frame::new("z").unwrap(), false);
    assert_eq!(canvas.cell(2, 2).map(|c| c.glyph), Some(' '));
}

#[test]
fn framed_canvas_protects_border() {
    let mut canvas = Canvas::framed(5, 6, 1);
    assert_eq!(canvas.cell(0, 0).map(|c| c.glyph), Some('┌'));
    assert_eq!(canvas.cell(4, 5).map(|c| c.glyph), Some('┘'));

    canvas.draw_char(0, 2, ' ', Style::Normal);
    canvas.draw_frame(0.0, 0.0, &Frame::new("####\n####").unwrap(), false);
    assert_eq!(canvas.cell(0, 2).map(|c| c.glyph), Some('─'));
    assert_eq!(canvas.cell(1, 0).map(|c| c.glyph), Some('│'));
    assert_eq!(canvas.cell(1, 1).map(|c| c.glyph), Some('#'));
}

#[test]
fn pending_keys_drain_in_order() {
    let mut canvas = Canvas::new(2, 2);
    canvas.push_keys([KeyCode::Up, KeyCode::Char(' ')]);
    assert_eq!(canvas.read_pending_keys(), vec![KeyCode::Up, KeyCode::Char(' ')]);
    assert!(canvas.read_pending_keys().is_empty());
}

#[test]
fn bell_is_taken_once() {
    let mut canvas = Canvas::new(2, 2);
    assert!(!canvas.take_bell());
    canvas.beep();
    assert!(canvas.take_bell());
    assert!(!canvas.take_bell());
}
