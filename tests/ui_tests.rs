// Rendering and key handling tests for the TUI, using ratatui's TestBackend

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use sortty::constants::{COUNTING_SORT_DEFAULT_INPUT, DEFAULT_INPUT, DEFAULT_PLAY_INTERVAL};
use sortty::playback::Playback;
use sortty::sorts::Algorithm;
use sortty::ui::App;
use sortty::ui::app::Mode;

fn app(algorithm: Algorithm) -> App {
    let playback = Playback::new(algorithm, algorithm.default_input(), DEFAULT_PLAY_INTERVAL)
        .expect("default input is valid");
    App::new(playback)
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn render(app: &mut App) -> String {
    let backend = TestBackend::new(140, 40);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal.draw(|f| app.render(f)).expect("draw");
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_renders_every_algorithm() {
    for algorithm in Algorithm::ALL {
        let mut app = app(algorithm);
        let screen = render(&mut app);
        assert!(screen.contains(algorithm.name()), "{} missing", algorithm);
        assert!(screen.contains("Step 1/"));

        press(&mut app, KeyCode::Enter);
        let screen = render(&mut app);
        assert!(screen.contains("Array is sorted"), "{} end caption", algorithm);
    }
}

#[test]
fn test_render_in_tiny_terminal() {
    let mut app = app(Algorithm::Merge);
    let mut terminal = Terminal::new(TestBackend::new(10, 4)).expect("test terminal");
    terminal.draw(|f| app.render(f)).expect("draw");
}

#[test]
fn test_navigation_keys() {
    let mut app = app(Algorithm::Insertion);

    press(&mut app, KeyCode::Right);
    assert_eq!(app.playback.position(), 1);
    press(&mut app, KeyCode::Left);
    assert_eq!(app.playback.position(), 0);
    press(&mut app, KeyCode::Left);
    assert_eq!(app.playback.position(), 0);
    assert!(app.status_message.contains("first step"));

    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.playback.position(), 3);

    press(&mut app, KeyCode::Enter);
    assert!(app.playback.is_at_end());
    press(&mut app, KeyCode::Backspace);
    assert!(app.playback.is_at_start());

    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[test]
fn test_space_toggles_playback() {
    let mut app = app(Algorithm::Bubble);
    press(&mut app, KeyCode::Char(' '));
    assert!(app.playback.is_playing());

    // Manual stepping cancels playback
    press(&mut app, KeyCode::Right);
    assert!(!app.playback.is_playing());
}

#[test]
fn test_tab_cycles_algorithms() {
    let mut app = app(Algorithm::Insertion);
    press(&mut app, KeyCode::Tab);
    assert_eq!(*app.playback.source(), Algorithm::Shell);
    press(&mut app, KeyCode::BackTab);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(*app.playback.source(), Algorithm::Selection);
    assert_eq!(app.input, DEFAULT_INPUT.to_vec());
}

#[test]
fn test_edit_input() {
    let mut app = app(Algorithm::Quick);
    press(&mut app, KeyCode::Char('i'));
    assert_eq!(app.mode, Mode::EditingInput);
    assert_eq!(app.input_buffer, "6,5,3,1,8,7,2,4");

    let screen = render(&mut app);
    assert!(screen.contains("6,5,3,1,8,7,2,4"));

    app.input_buffer.clear();
    type_text(&mut app, "9, 4, 7");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.mode, Mode::Normal);
    assert_eq!(app.input, vec![9, 4, 7]);
    assert_eq!(app.playback.trace().input(), &[9, 4, 7]);
    assert!(!app.status_is_error);
}

#[test]
fn test_edit_input_cancel_and_errors() {
    let mut app = app(Algorithm::Quick);
    press(&mut app, KeyCode::Char('i'));
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.mode, Mode::Normal);
    assert_eq!(app.input, DEFAULT_INPUT.to_vec());

    press(&mut app, KeyCode::Char('i'));
    app.input_buffer.clear();
    type_text(&mut app, ",,");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.mode, Mode::EditingInput);
    assert!(app.status_is_error);
    assert_eq!(app.input, DEFAULT_INPUT.to_vec());
}

#[test]
fn test_counting_sort_rejects_negative_input_in_place() {
    let mut app = app(Algorithm::Counting);
    press(&mut app, KeyCode::Char('i'));
    app.input_buffer.clear();
    type_text(&mut app, "3,-1");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.mode, Mode::EditingInput);
    assert!(app.status_is_error);
    assert_eq!(app.input, COUNTING_SORT_DEFAULT_INPUT.to_vec());
}

#[test]
fn test_switching_to_counting_sort_falls_back_to_default_input() {
    let mut app = app(Algorithm::Heap);
    press(&mut app, KeyCode::Char('i'));
    app.input_buffer.clear();
    type_text(&mut app, "-3,1,2");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.input, vec![-3, 1, 2]);

    press(&mut app, KeyCode::Tab);
    assert_eq!(*app.playback.source(), Algorithm::Counting);
    assert_eq!(app.input, COUNTING_SORT_DEFAULT_INPUT.to_vec());
    assert!(app.status_is_error);
}

#[test]
fn test_edit_input_skips_non_numeric_tokens() {
    let mut app = app(Algorithm::Insertion);
    press(&mut app, KeyCode::Char('i'));
    app.input_buffer.clear();
    type_text(&mut app, "3,-,1");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.mode, Mode::Normal);
    assert_eq!(app.input, vec![3, 1]);
    assert_eq!(app.playback.trace().input(), &[3, 1]);
    assert!(!app.status_is_error);
    assert!(
        app.status_message.contains("skipped: -"),
        "status was {:?}",
        app.status_message
    );
}
