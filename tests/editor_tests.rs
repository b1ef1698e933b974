// SPDX-FileCopyrightText: 2025 RAprogramm
// SPDX-License-Identifier: MIT

use std::time::Duration;

use sql_query_helper::{
    editor::{Assistant, EditorEvent, EditorSurface, FindingsSink, run_events},
    keywords::KeywordCorrector,
    rules::{Analyzer, Finding}
};
use tokio::{sync::mpsc, time::Instant};

/// Surface that counts how often the document was rewritten.
#[derive(Default)]
struct CountingSurface {
    text:   String,
    writes: usize
}

impl EditorSurface for CountingSurface {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
        self.writes += 1;
    }
}

/// Sink that only keeps the latest batch, like a diagnostics panel.
#[derive(Default)]
struct Panel {
    current: Vec<String>,
    renders: usize
}

impl FindingsSink for Panel {
    fn render(&mut self, findings: &[Finding]) {
        self.current = findings.iter().map(|f| f.message.clone()).collect();
        self.renders += 1;
    }
}

fn assistant(quiet_ms: u64) -> Assistant<CountingSurface, Panel> {
    Assistant::new(
        CountingSurface::default(),
        Panel::default(),
        Analyzer::new(),
        KeywordCorrector::new(),
        Duration::from_millis(quiet_ms)
    )
}

#[test]
fn test_panel_replaces_previous_findings() {
    let mut assistant = assistant(100);
    let t0 = Instant::now();

    assistant.handle(EditorEvent::Replace("SELCT 1".into()), t0);
    assert!(assistant.poll(t0 + Duration::from_millis(100)));
    assert_eq!(assistant.sink().current.len(), 2);

    assistant.handle(EditorEvent::Replace("SELECT 1;".into()), t0);
    assert!(assistant.flush());
    assert!(assistant.sink().current.is_empty());
    assert_eq!(assistant.sink().renders, 2);
}

#[test]
fn test_format_writes_whole_document_once() {
    let mut assistant = assistant(100);
    let t0 = Instant::now();

    assistant.handle(EditorEvent::Replace("select a frm t wher a=1".into()), t0);
    assistant.handle(EditorEvent::Format, t0);

    assert_eq!(assistant.surface().text, "SELECT a\nFROM t\nWHERE a=1");
    assert_eq!(assistant.surface().writes, 2);
}

#[test]
fn test_no_analysis_without_changes() {
    let mut assistant = assistant(100);
    assert!(!assistant.poll(Instant::now() + Duration::from_secs(10)));
    assert!(!assistant.flush());
    assert_eq!(assistant.sink().renders, 0);
}

#[tokio::test(start_paused = true)]
async fn test_pauses_split_analysis_runs() {
    let (tx, rx) = mpsc::unbounded_channel();
    let driver = tokio::spawn(run_events(assistant(500), rx));

    tx.send(EditorEvent::Insert("SELECT 1".into())).unwrap();
    tokio::time::sleep(Duration::from_millis(600)).await;
    tx.send(EditorEvent::Insert(";".into())).unwrap();
    tokio::time::sleep(Duration::from_millis(600)).await;
    drop(tx);

    let (surface, panel) = driver.await.unwrap().into_parts();
    assert_eq!(surface.text, "SELECT 1;");
    assert_eq!(panel.renders, 2);
    assert!(panel.current.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_typing_faster_than_quiet_period_defers_analysis() {
    let (tx, rx) = mpsc::unbounded_channel();
    let driver = tokio::spawn(run_events(assistant(500), rx));

    for chunk in ["S", "E", "L", "C", "T", " 1"] {
        tx.send(EditorEvent::Insert(chunk.into())).unwrap();
        tokio::time::sleep(Duration::from_millis(400)).await;
    }
    drop(tx);

    let (surface, panel) = driver.await.unwrap().into_parts();
    assert_eq!(surface.text, "SELCT 1");
    assert_eq!(panel.renders, 1);
    assert_eq!(
        panel.current,
        [
            "Misspelled keyword: SELCT",
            "Missing semicolon at the end of the query"
        ]
    );
}
