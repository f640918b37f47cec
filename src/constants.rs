// Constants shared by the generators, the playback controller and the TUI

use std::time::Duration;

/// Interval between automatic steps while playing
pub const DEFAULT_PLAY_INTERVAL: Duration = Duration::from_millis(700);

/// Minimum time between two play/pause toggles (swallows key repeat)
pub const PLAY_TOGGLE_DEBOUNCE: Duration = Duration::from_millis(200);

/// How long the event loop waits for a key before checking the timer
pub const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Maximum number of values accepted from user input
pub const MAX_INPUT_LEN: usize = 64;

/// Largest value Counting Sort accepts
///
/// The count array has `max + 1` cells, every snapshot copies it, and the
/// cumulate pass records one snapshot per cell, so trace size grows with the
/// square of this value. 99 keeps the count row readable in the detail pane.
pub const COUNTING_SORT_MAX_VALUE: i64 = 99;

/// Default demo input for most algorithms
pub const DEFAULT_INPUT: [i64; 8] = [6, 5, 3, 1, 8, 7, 2, 4];

/// Default demo input for Shell Sort
pub const SHELL_SORT_DEFAULT_INPUT: [i64; 8] = [8, 3, 5, 4, 7, 6, 1, 2];

/// Default demo input for Counting Sort (small non-negative keys with duplicates)
pub const COUNTING_SORT_DEFAULT_INPUT: [i64; 8] = [4, 2, 1, 4, 1, 3, 2, 1];
