//! Tests for mouse press handling

use std::time::Instant;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;
use crate::autocomplete::Suggestion;
use crate::layout::Region;
use crate::test_utils::test_helpers::{key, ms, response, test_app, type_into_app};

use super::handle_press;

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Draw once so the layout regions are populated
fn draw(app: &mut App) {
    let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
}

#[test]
fn test_press_on_row_commits() {
    let now = Instant::now();
    let mut app = test_app(&["origin"]);
    app.apply_response(response(0, "wat", &["Waterloo", "Watford", "Wapping"]));

    handle_press(&mut app, Some(Region::DropdownRow { field: 0, row: 1 }), now);
    app.apply_selections();

    assert_eq!(app.fields[0].input.text(), "Watford");
    assert_eq!(app.fields[0].selection, Some(Suggestion::new("Watford")));
}

#[test]
fn test_press_on_other_input_moves_focus() {
    let mut app = test_app(&["origin", "home"]);
    handle_press(&mut app, Some(Region::Input(1)), Instant::now());
    assert_eq!(app.focus, 1);
}

#[test]
fn test_press_on_chrome_does_nothing() {
    let mut app = test_app(&["origin"]);
    app.apply_response(response(0, "wat", &["Waterloo"]));

    handle_press(&mut app, Some(Region::DropdownChrome(0)), Instant::now());

    assert!(app.fields[0].controller.is_open());
    assert!(app.fields[0].selection.is_none());
}

#[test]
fn test_mouse_down_on_rendered_row_commits() {
    let now = Instant::now();
    let mut app = test_app(&["origin"]);
    app.apply_response(response(0, "wat", &["Waterloo", "Watford"]));
    draw(&mut app);

    // Input occupies rows 0-2; dropdown border at row 3, first row at row 4
    app.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 10, 5), now);

    assert_eq!(app.fields[0].input.text(), "Watford");
    assert!(app.fields[0].selection.is_some());
}

#[test]
fn test_mouse_release_does_nothing() {
    let now = Instant::now();
    let mut app = test_app(&["origin"]);
    app.apply_response(response(0, "wat", &["Waterloo", "Watford"]));
    draw(&mut app);

    app.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 10, 4), now);

    assert!(app.fields[0].selection.is_none());
    assert!(app.fields[0].controller.is_open());
}

#[test]
fn test_press_on_blurred_dropdown_beats_grace_close() {
    let start = Instant::now();
    let mut app = test_app(&["origin", "home"]);
    app.apply_response(response(0, "wat", &["Waterloo", "Watford"]));

    app.focus_field(1, start);
    app.tick(start + ms(50));
    draw(&mut app);

    app.handle_mouse_event(
        mouse(MouseEventKind::Down(MouseButton::Left), 10, 4),
        start + ms(60),
    );
    app.tick(start + ms(200));

    assert_eq!(app.fields[0].input.text(), "Waterloo");
    assert_eq!(app.fields[0].selection, Some(Suggestion::new("Waterloo")));
    assert!(!app.fields[0].controller.is_open());
}

#[test]
fn test_slow_response_after_tab_does_not_cover_next_input() {
    let start = Instant::now();
    let mut app = test_app(&["origin", "home"]);

    type_into_app(&mut app, "Waterloo", start);
    app.tick(start + ms(300));
    app.handle_key_event(key(KeyCode::Tab), start + ms(310));
    app.tick(start + ms(600));

    app.apply_response(response(0, "Waterloo", &["Waterloo Station", "Waterloo Road"]));
    draw(&mut app);

    assert_eq!(app.focus, 1);
    assert!(!app.fields[0].controller.is_open());
    // home's input occupies rows 3-5
    assert_eq!(app.layout_regions.region_at(10, 4), Some(Region::Input(1)));

    let press = mouse(MouseEventKind::Down(MouseButton::Left), 10, 4);
    app.handle_mouse_event(press, start + ms(700));

    assert_eq!(app.fields[0].input.text(), "Waterloo");
    assert!(app.fields[0].selection.is_none());
}
