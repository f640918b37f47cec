//! Main TUI application state and logic

use crate::constants::{EVENT_POLL_INTERVAL, PLAY_TOGGLE_DEBOUNCE};
use crate::input::{self, format_values, ParsedInput};
use crate::playback::{Direction, Playback};
use crate::sorts::Algorithm;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction as LayoutDirection, Layout},
};
use std::io;
use std::time::{Duration, Instant};

/// Whether keys drive playback or edit the input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    EditingInput,
}

/// The main application state
pub struct App {
    /// Playback over the active algorithm's trace
    pub playback: Playback<Algorithm>,

    /// Values the current trace was generated from
    pub input: Vec<i64>,

    /// Text being edited in input mode
    pub input_buffer: String,

    pub mode: Mode,

    /// Scroll offset of the detail pane
    pub detail_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports a failure
    pub status_is_error: bool,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app around an already loaded playback
    pub fn new(playback: Playback<Algorithm>) -> Self {
        let input = playback.trace().input().to_vec();
        App {
            playback,
            input,
            input_buffer: String::new(),
            mode: Mode::Normal,
            detail_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            let was_playing = self.playback.is_playing();
            if self.playback.tick(Instant::now()) {
                self.set_status("Playing...");
            }
            if was_playing && !self.playback.is_playing() {
                self.set_status("Playback complete");
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(EVENT_POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let mut constraints = vec![Constraint::Min(0)];
        if self.mode == Mode::EditingInput {
            constraints.push(Constraint::Length(3));
        }
        constraints.push(Constraint::Length(1));

        let main_chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints(constraints)
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[main_chunks.len() - 1];

        // Split into 2 columns: visualization | algorithm info
        let columns = Layout::default()
            .direction(LayoutDirection::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(pane_area);

        // Left column: Array (top) | State (bottom)
        let left_rows = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[0]);

        let snapshot = self.playback.current();
        let algorithm = *self.playback.source();

        super::panes::render_array_pane(
            frame,
            left_rows[0],
            &super::panes::ArrayRenderData {
                title: format!(" {} ", algorithm),
                snapshot,
                caption: snapshot.map(|s| s.describe()).unwrap_or_default(),
            },
            self.mode == Mode::Normal,
        );

        super::panes::render_detail_pane(
            frame,
            left_rows[1],
            snapshot,
            false,
            &mut self.detail_scroll,
        );

        super::panes::render_info_pane(frame, columns[1], algorithm, false);

        if self.mode == Mode::EditingInput {
            super::panes::render_input_pane(frame, main_chunks[1], &self.input_buffer);
        }

        super::panes::render_status_bar(
            frame,
            status_area,
            &super::panes::StatusRenderData {
                message: &self.status_message,
                current_step: self.playback.position(),
                total_steps: self.playback.len(),
                is_playing: self.playback.is_playing(),
                is_editing: self.mode == Mode::EditingInput,
                is_error: self.status_is_error,
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.mode == Mode::EditingInput {
            self.handle_input_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let stepped = self.playback.step_by(Direction::Forward, n);
                self.set_status(format!("Stepped forward {} step(s)", stepped));
            }
            KeyCode::Left => self.step(Direction::Backward),
            KeyCode::Right => self.step(Direction::Forward),
            KeyCode::Up => {
                self.detail_scroll = self.detail_scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                self.detail_scroll = self.detail_scroll.saturating_add(1);
            }
            KeyCode::Tab => {
                let next = self.playback.source().next();
                self.switch_algorithm(next);
            }
            KeyCode::BackTab => {
                let prev = self.playback.source().prev();
                self.switch_algorithm(prev);
            }
            KeyCode::Char('i') | KeyCode::Char('I') => {
                self.playback.pause();
                self.input_buffer = format_values(&self.input);
                self.mode = Mode::EditingInput;
                self.set_status("Editing input");
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= PLAY_TOGGLE_DEBOUNCE {
                    self.last_space_press = Instant::now();
                    if self.playback.toggle(Instant::now()) {
                        self.set_status("Playing...");
                    } else if self.playback.is_at_end() {
                        self.set_status("Already at the last step");
                    } else {
                        self.set_status("Paused");
                    }
                }
            }
            KeyCode::Enter => {
                self.playback.jump_to_end();
                self.set_status("Jumped to end");
            }
            KeyCode::Backspace => {
                self.playback.reset();
                self.set_status("Jumped to start");
            }
            _ => {}
        }
    }

    /// Keys while the input line is open
    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.mode = Mode::Normal;
                self.set_status("Input unchanged");
            }
            KeyCode::Enter => self.apply_input(),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() || matches!(c, ',' | '-' | ' ') => {
                self.input_buffer.push(c);
            }
            _ => {}
        }
    }

    /// Parse the input line and regenerate the trace from it
    fn apply_input(&mut self) {
        let ParsedInput { values, rejected } = match input::parse_values(&self.input_buffer) {
            Ok(parsed) => parsed,
            Err(e) => {
                self.set_error(format!("Invalid input: {}", e));
                return;
            }
        };

        match self.playback.set_input(&values) {
            Ok(()) => {
                let message = if rejected.is_empty() {
                    format!("Input set: {} values", values.len())
                } else {
                    format!("Input set, skipped: {}", rejected.join(" "))
                };
                self.input = values;
                self.mode = Mode::Normal;
                self.detail_scroll = 0;
                self.set_status(message);
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    /// Switch algorithms, keeping the current input when the new one accepts it
    fn switch_algorithm(&mut self, algorithm: Algorithm) {
        self.detail_scroll = 0;
        match self.playback.set_source(algorithm, &self.input) {
            Ok(()) => self.set_status(format!("Switched to {}", algorithm)),
            Err(e) => {
                let fallback = algorithm.default_input();
                match self.playback.set_source(algorithm, fallback) {
                    Ok(()) => {
                        self.input = fallback.to_vec();
                        self.set_error(format!("{}; using default input", e));
                    }
                    Err(e) => self.set_error(e.to_string()),
                }
            }
        }
    }

    /// Step in execution, reporting when already at a boundary
    fn step(&mut self, direction: Direction) {
        let moved = self.playback.step(direction);
        match (direction, moved) {
            (Direction::Forward, true) => self.set_status("Stepped forward"),
            (Direction::Backward, true) => self.set_status("Stepped backward"),
            (Direction::Forward, false) => {
                self.set_status("Cannot step forward: already at the last step")
            }
            (Direction::Backward, false) => {
                self.set_status("Cannot step backward: already at the first step")
            }
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = true;
    }
}
