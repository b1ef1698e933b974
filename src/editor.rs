//! Editor integration: debounced analysis and on-demand formatting.
//!
//! The core functions never touch an editor. This module wires them to one
//! through two narrow seams:
//!
//! - [`EditorSurface`] - read the current text, replace it with new text
//! - [`FindingsSink`] - receive the latest findings, replacing earlier ones
//!
//! [`Assistant`] owns both seams plus the debounce state. Every change
//! cancels the pending analysis and schedules a new one after the quiet
//! period, so at most one analysis is pending and it always sees the latest
//! text. [`run_events`] drives an assistant from a channel of
//! [`EditorEvent`]s on a single task.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use sql_query_helper::{
//!     editor::{Assistant, EditorSurface},
//!     rules::{Analyzer, Finding}
//! };
//! use tokio::time::Instant;
//!
//! let mut assistant = Assistant::new(
//!     String::from("select * from users"),
//!     Vec::<Vec<Finding>>::new(),
//!     Analyzer::new(),
//!     Default::default(),
//!     Duration::from_millis(500)
//! );
//!
//! let now = Instant::now();
//! assistant.on_change(now);
//! assert!(!assistant.poll(now + Duration::from_millis(100)));
//! assert!(assistant.poll(now + Duration::from_millis(500)));
//! assert_eq!(assistant.sink()[0][0].rule_id, "SQL002");
//!
//! assistant.format_document(now);
//! assert_eq!(assistant.surface().text(), "SELECT *\nFROM users");
//! ```

use std::time::Duration;

use tokio::{
    sync::mpsc::UnboundedReceiver,
    time::{Instant, sleep_until}
};

use crate::{
    format::Formatter,
    keywords::KeywordCorrector,
    rules::{Analyzer, Finding}
};

/// Editable text owned by the host editor.
pub trait EditorSurface {
    /// Snapshot of the whole document.
    fn text(&self) -> String;

    /// Replace the whole document.
    fn set_text(&mut self, text: String);
}

impl EditorSurface for String {
    fn text(&self) -> String {
        self.clone()
    }

    fn set_text(&mut self, text: String) {
        *self = text;
    }
}

/// Receiver of analysis results.
///
/// Each call supersedes whatever was rendered before; an empty slice means
/// the document has no issues.
pub trait FindingsSink {
    fn render(&mut self, findings: &[Finding]);
}

/// Keeps every rendered batch, newest last.
impl FindingsSink for Vec<Vec<Finding>> {
    fn render(&mut self, findings: &[Finding]) {
        self.push(findings.to_vec());
    }
}

/// Cancel-and-reschedule timer state.
#[derive(Debug, Clone)]
pub struct Debounce {
    quiet:    Duration,
    deadline: Option<Instant>
}

impl Debounce {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None
        }
    }

    pub fn quiet(&self) -> Duration {
        self.quiet
    }

    /// Drop any pending deadline and start a new quiet period at `now`.
    pub fn schedule(&mut self, now: Instant) {
        if self.deadline.is_some() {
            tracing::trace!("rescheduling pending analysis");
        }
        self.deadline = Some(now + self.quiet);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns true exactly once when the deadline has been reached.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false
        }
    }
}

/// Input from the host editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// Text appended at the end of the document
    Insert(String),
    /// Line appended below the last line, newline-terminated
    Line(String),
    /// Whole document replaced
    Replace(String),
    /// Explicit request to reformat the document
    Format
}

/// Controller binding the analyzer and formatter to an editor.
pub struct Assistant<S, R> {
    surface:   S,
    sink:      R,
    analyzer:  Analyzer,
    corrector: KeywordCorrector,
    debounce:  Debounce
}

impl<S: EditorSurface, R: FindingsSink> Assistant<S, R> {
    pub fn new(
        surface: S,
        sink: R,
        analyzer: Analyzer,
        corrector: KeywordCorrector,
        quiet: Duration
    ) -> Self {
        Self {
            surface,
            sink,
            analyzer,
            corrector,
            debounce: Debounce::new(quiet)
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }

    pub fn into_parts(self) -> (S, R) {
        (self.surface, self.sink)
    }

    /// When the pending analysis will run, if any.
    pub fn pending_deadline(&self) -> Option<Instant> {
        self.debounce.deadline()
    }

    /// Record a text change; analysis is (re)scheduled after the quiet period.
    pub fn on_change(&mut self, now: Instant) {
        self.debounce.schedule(now);
        tracing::trace!(quiet = ?self.debounce.quiet(), "analysis scheduled");
    }

    /// Run the pending analysis if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.debounce.fire(now) {
            return false;
        }
        self.run_analysis();
        true
    }

    /// Run the pending analysis immediately, if one is scheduled.
    pub fn flush(&mut self) -> bool {
        if self.debounce.deadline().is_none() {
            return false;
        }
        self.debounce.cancel();
        self.run_analysis();
        true
    }

    /// Format the whole document and write it back.
    ///
    /// A changed document schedules analysis like any other edit.
    pub fn format_document(&mut self, now: Instant) {
        let text = self.surface.text();
        let formatted = Formatter::new(&self.corrector).format(&text);
        if formatted != text {
            self.surface.set_text(formatted);
            self.on_change(now);
        }
    }

    /// Apply one editor event at `now`.
    pub fn handle(&mut self, event: EditorEvent, now: Instant) {
        match event {
            EditorEvent::Insert(chunk) => {
                let mut text = self.surface.text();
                text.push_str(&chunk);
                self.surface.set_text(text);
                self.on_change(now);
            }
            EditorEvent::Line(line) => {
                let mut text = self.surface.text();
                if !text.is_empty() && !text.ends_with('\n') {
                    text.push('\n');
                }
                text.push_str(&line);
                text.push('\n');
                self.surface.set_text(text);
                self.on_change(now);
            }
            EditorEvent::Replace(text) => {
                self.surface.set_text(text);
                self.on_change(now);
            }
            EditorEvent::Format => self.format_document(now)
        }
    }

    fn run_analysis(&mut self) {
        let findings = self.analyzer.analyze(&self.surface.text());
        tracing::debug!(findings = findings.len(), "rendering findings");
        self.sink.render(&findings);
    }
}

/// Drive an assistant from an event channel until the sender side closes.
///
/// Runs on the calling task only: events and the debounce deadline are
/// multiplexed with `select!`. A pending analysis is flushed on close.
pub async fn run_events<S, R>(
    mut assistant: Assistant<S, R>,
    mut events: UnboundedReceiver<EditorEvent>
) -> Assistant<S, R>
where
    S: EditorSurface,
    R: FindingsSink
{
    loop {
        let deadline = assistant.pending_deadline();
        tokio::select! {
            biased;
            event = events.recv() => match event {
                Some(event) => assistant.handle(event, Instant::now()),
                None => {
                    assistant.flush();
                    break;
                }
            },
            _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                assistant.poll(Instant::now());
            }
        }
    }
    assistant
}
