//! Command execution logic.
//!
//! Each command takes its parsed parameters plus the loaded configuration and
//! returns what the entry point should print. Nothing here calls
//! `process::exit`, so every command is testable in-process.

use std::{fs, io::Write, time::Duration};

use rayon::prelude::*;
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    sync::mpsc
};

use super::{
    helpers::{calculate_exit_code, create_output_options, is_stdin, read_input, source_name},
    types::{CheckParams, CommandOutput, FormatParams, LiveParams}
};
use crate::{
    config::Config,
    editor::{Assistant, EditorEvent, run_events},
    error::{AppError, AppResult, file_read_error, file_write_error, usage_error},
    format::Formatter,
    output::{Report, TextSink, format_reports},
    rules::Analyzer
};

/// Live-mode line that reformats the buffer
pub const FORMAT_COMMAND: &str = "\\format";
/// Live-mode line that empties the buffer
pub const CLEAR_COMMAND: &str = "\\clear";

/// Analyze every input and render the reports.
///
/// Inputs are read and analyzed in parallel; reports keep argument order.
///
/// # Errors
///
/// Returns an error if any input cannot be read or the output cannot be
/// serialized.
pub fn run_check(params: CheckParams, config: Config) -> AppResult<CommandOutput> {
    let analyzer = Analyzer::with_config(config.rules, config.keywords.corrector());
    let reports = params
        .paths
        .par_iter()
        .map(|path| -> AppResult<Report> {
            let text = read_input(path)?;
            Ok(Report {
                source:   source_name(path),
                findings: analyzer.analyze(&text)
            })
        })
        .collect::<AppResult<Vec<_>>>()?;
    tracing::debug!(inputs = reports.len(), "check finished");
    let opts = create_output_options(params.output_format, params.no_color);
    Ok(CommandOutput {
        exit_code: calculate_exit_code(&reports),
        stdout:    Some(format_reports(&reports, &opts)?)
    })
}

/// Format one input, printing it or rewriting the file in place.
///
/// # Errors
///
/// Returns an error for `--write` combined with stdin, or on IO failure.
pub fn run_format(params: FormatParams, config: Config) -> AppResult<CommandOutput> {
    if params.write && is_stdin(&params.path) {
        return Err(usage_error("--write cannot be used when reading from stdin"));
    }
    let text = read_input(&params.path)?;
    let corrector = config.keywords.corrector();
    let formatted = Formatter::new(&corrector).format(&text);
    if !params.write {
        return Ok(CommandOutput {
            exit_code: 0,
            stdout:    Some(formatted)
        });
    }
    let path = params.path.display().to_string();
    // Keep a trailing newline so the file stays POSIX-friendly
    fs::write(&params.path, format!("{}\n", formatted)).map_err(|e| file_write_error(&path, e))?;
    tracing::info!(path = %path, "formatted file in place");
    Ok(CommandOutput {
        exit_code: 0,
        stdout:    None
    })
}

/// Map one line of live input to an editor event.
pub fn parse_live_line(line: String) -> EditorEvent {
    match line.trim() {
        FORMAT_COMMAND => EditorEvent::Format,
        CLEAR_COMMAND => EditorEvent::Replace(String::new()),
        _ => EditorEvent::Line(line)
    }
}

/// Feed input lines into a debounced assistant until EOF.
///
/// Reading and analysis share the current task. Findings are rendered to
/// `output` as text after each quiet period; a pending analysis runs at EOF.
/// Returns the final document and the output writer.
pub async fn run_live<I, W>(
    input: I,
    output: W,
    params: LiveParams,
    config: Config
) -> AppResult<(String, W)>
where
    I: AsyncBufRead + Unpin,
    W: Write
{
    let quiet = params
        .debounce_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.editor.debounce());
    let corrector = config.keywords.corrector();
    let assistant = Assistant::new(
        String::new(),
        TextSink::new(output, !params.no_color),
        Analyzer::with_config(config.rules, corrector.clone()),
        corrector,
        quiet
    );
    let (tx, rx) = mpsc::unbounded_channel();
    let feed = async move {
        let mut lines = input.lines();
        while let Some(line) = lines
            .next_line()
            .await
            .map_err(|e| file_read_error("stdin", e))?
        {
            if tx.send(parse_live_line(line)).is_err() {
                break;
            }
        }
        Ok::<(), AppError>(())
    };
    let (fed, assistant) = tokio::join!(feed, run_events(assistant, rx));
    fed?;
    let (document, sink) = assistant.into_parts();
    Ok((document, sink.into_inner()))
}
