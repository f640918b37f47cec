//! Playback controller: walks a [`Trace`] under user control
//!
//! [`Playback`] is generic over any [`TraceSource`], so the same controller
//! drives all eight algorithms. It owns exactly one trace at a time; a new
//! input regenerates the trace wholesale instead of patching it.
//!
//! # Timer
//!
//! Automatic playback is a single cooperative timer: the time of the last
//! automatic step, or `None` while paused. The caller's event loop calls
//! [`Playback::tick`] with the current time and the controller advances at
//! most one snapshot per elapsed interval. Starting playback while already
//! playing keeps the running timer, and every manual navigation cancels it.
//! Time is passed in rather than read, so tests control the clock.

use crate::sorts::TraceSource;
use crate::trace::{Snapshot, Trace, TraceError};
use std::time::{Duration, Instant};

/// Direction of a manual step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Stateful cursor over a trace
#[derive(Debug)]
pub struct Playback<S: TraceSource> {
    source: S,
    trace: Trace,
    position: usize,
    interval: Duration,
    /// Time of the last automatic step; `None` while paused
    timer: Option<Instant>,
}

impl<S: TraceSource> Playback<S> {
    /// Generate the first trace from `input` and start at its first snapshot
    pub fn new(source: S, input: &[i64], interval: Duration) -> Result<Self, TraceError> {
        let trace = source.generate(input)?;
        Ok(Playback {
            source,
            trace,
            position: 0,
            interval,
            timer: None,
        })
    }

    /// Start automatic playback
    ///
    /// Returns whether playback is running afterwards. Does nothing at the
    /// last snapshot, and keeps the existing timer if already playing.
    pub fn play(&mut self, now: Instant) -> bool {
        if self.timer.is_some() {
            return true;
        }
        if self.is_at_end() {
            return false;
        }
        tracing::trace!(position = self.position, "play");
        self.timer = Some(now);
        true
    }

    /// Stop automatic playback, keeping the current position
    pub fn pause(&mut self) {
        if self.timer.take().is_some() {
            tracing::trace!(position = self.position, "pause");
        }
    }

    /// Play if paused, pause if playing; returns whether playing afterwards
    pub fn toggle(&mut self, now: Instant) -> bool {
        if self.is_playing() {
            self.pause();
            false
        } else {
            self.play(now)
        }
    }

    /// Advance one snapshot if playing and a full interval has elapsed
    ///
    /// Returns true if the position changed. Playback stops by itself once
    /// the last snapshot is reached.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(last) = self.timer else {
            return false;
        };
        if now.saturating_duration_since(last) < self.interval {
            return false;
        }

        let advanced = self.advance();
        if self.is_at_end() {
            self.timer = None;
            tracing::debug!(snapshots = self.trace.len(), "playback complete");
        } else {
            self.timer = Some(now);
        }
        advanced
    }

    /// Move one snapshot, clamped to the trace; cancels automatic playback
    ///
    /// Returns true if the position changed.
    pub fn step(&mut self, direction: Direction) -> bool {
        self.pause();
        match direction {
            Direction::Forward => self.advance(),
            Direction::Backward => {
                if self.position == 0 {
                    false
                } else {
                    self.position -= 1;
                    true
                }
            }
        }
    }

    /// Step up to `count` times, returning how many steps were taken
    pub fn step_by(&mut self, direction: Direction, count: usize) -> usize {
        let mut stepped = 0;
        for _ in 0..count {
            if !self.step(direction) {
                break;
            }
            stepped += 1;
        }
        // A zero count still counts as manual navigation
        self.pause();
        stepped
    }

    /// Return to the first snapshot and stop playback
    pub fn reset(&mut self) {
        self.pause();
        self.position = 0;
    }

    /// Jump to the last snapshot and stop playback
    pub fn jump_to_end(&mut self) {
        self.pause();
        self.position = self.trace.len().saturating_sub(1);
    }

    /// Replace the trace with one generated from `input`
    ///
    /// On error the current trace, position and playback state are kept.
    pub fn set_input(&mut self, input: &[i64]) -> Result<(), TraceError> {
        let trace = self.source.generate(input)?;
        self.install(trace);
        Ok(())
    }

    /// Switch to another source and regenerate from `input`
    ///
    /// On error nothing changes, including the source.
    pub fn set_source(&mut self, source: S, input: &[i64]) -> Result<(), TraceError> {
        let trace = source.generate(input)?;
        self.source = source;
        self.install(trace);
        Ok(())
    }

    fn install(&mut self, trace: Trace) {
        tracing::debug!(
            algorithm = %trace.algorithm(),
            snapshots = trace.len(),
            "loaded trace"
        );
        self.trace = trace;
        self.position = 0;
        self.timer = None;
    }

    fn advance(&mut self) -> bool {
        if self.position + 1 < self.trace.len() {
            self.position += 1;
            true
        } else {
            false
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Snapshot at the current position
    pub fn current(&self) -> Option<&Snapshot> {
        self.trace.get(self.position)
    }

    /// Index of the current snapshot
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of snapshots in the current trace
    pub fn len(&self) -> usize {
        self.trace.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    pub fn is_playing(&self) -> bool {
        self.timer.is_some()
    }

    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.trace.len()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}
