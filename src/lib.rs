//! # Introduction
//!
//! sortty records every comparison, swap and placement a sorting algorithm
//! makes as an immutable list of snapshots, then lets you step through that
//! list forward and backward (or play it on a timer) in a terminal UI built
//! with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input → Generator → Trace → Playback → TUI
//! ```
//!
//! 1. [`input`]: parses comma-separated integers typed by the user.
//! 2. [`sorts`]: one trace generator per [`sorts::Algorithm`]. Each sorts a
//!    private copy of its input and records a [`trace::Snapshot`] per step.
//! 3. [`trace`]: the snapshot data model, per-algorithm step details and
//!    the highlight [`trace::Mark`]s derived from them.
//! 4. [`playback`]: cursor over a trace with play/pause/step/reset and a
//!    single timer driven by caller-supplied instants.
//! 5. [`catalog`]: names, complexities and lookup for each algorithm.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported algorithms
//!
//! Bubble, Selection, Insertion, Shell, Merge, Quick, Heap and Counting sort.
//! Counting sort only accepts non-negative values up to
//! [`constants::COUNTING_SORT_MAX_VALUE`].

pub mod catalog;
pub mod config;
pub mod constants;
pub mod input;
pub mod playback;
pub mod sorts;
pub mod trace;
pub mod ui;
