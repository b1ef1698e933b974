//! Rendering of findings for terminals and tools.

use std::io::Write;

use colored::Colorize;
use serde::Serialize;

use crate::{
    editor::FindingsSink,
    error::{AppResult, serialization_error},
    rules::{Finding, Severity}
};

/// Output format for results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml
}

/// Output options
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format:  OutputFormat,
    pub colored: bool
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format:  OutputFormat::Text,
            colored: true
        }
    }
}

/// Findings for one input document
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// File path, or `<stdin>`
    pub source:   String,
    pub findings: Vec<Finding>
}

/// Render reports in the requested format
pub fn format_reports(reports: &[Report], opts: &OutputOptions) -> AppResult<String> {
    match opts.format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(reports).map_err(|e| serialization_error("JSON", e))
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(reports).map_err(|e| serialization_error("YAML", e))
        }
        OutputFormat::Text => Ok(reports
            .iter()
            .map(|report| format_text_report(report, opts.colored))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

fn format_text_report(report: &Report, colored: bool) -> String {
    let mut output = String::new();
    if report.findings.is_empty() {
        let line = format!("{}: No issues found!", report.source);
        output.push_str(&if colored { line.green().to_string() } else { line });
        output.push('\n');
        return output;
    }
    let header = format!("{}:", report.source);
    output.push_str(&if colored { header.bold().to_string() } else { header });
    output.push('\n');
    for finding in &report.findings {
        output.push_str("  ");
        output.push_str(&format_finding(finding, colored));
        output.push('\n');
    }
    output
}

/// Single-line rendering: `ERROR [SQL002] message - suggestion`
pub fn format_finding(finding: &Finding, colored: bool) -> String {
    let label = finding.severity.to_string();
    let label = if colored {
        match finding.severity {
            Severity::Error => label.red().bold().to_string(),
            Severity::Warning => label.yellow().bold().to_string(),
            Severity::Info => label.blue().to_string()
        }
    } else {
        label
    };
    format!(
        "{} [{}] {} - {}",
        label, finding.rule_id, finding.message, finding.suggestion
    )
}

/// Live sink printing each batch of findings to a writer.
pub struct TextSink<W> {
    writer:  W,
    colored: bool
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W, colored: bool) -> Self {
        Self {
            writer,
            colored
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> FindingsSink for TextSink<W> {
    fn render(&mut self, findings: &[Finding]) {
        let report = Report {
            source:   String::from("<live>"),
            findings: findings.to_vec()
        };
        let text = format_text_report(&report, self.colored);
        if let Err(e) = self.writer.write_all(text.as_bytes()).and_then(|_| self.writer.flush()) {
            tracing::warn!(error = %e, "failed to render findings");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::analyze;

    fn plain() -> OutputOptions {
        OutputOptions {
            format:  OutputFormat::Text,
            colored: false
        }
    }

    #[test]
    fn test_clean_report() {
        let reports = [Report {
            source:   "a.sql".into(),
            findings: vec![]
        }];
        let text = format_reports(&reports, &plain()).unwrap();
        assert_eq!(text, "a.sql: No issues found!\n");
    }

    #[test]
    fn test_text_report_lines() {
        let reports = [Report {
            source:   "a.sql".into(),
            findings: analyze("SELECT 1")
        }];
        let text = format_reports(&reports, &plain()).unwrap();
        assert_eq!(
            text,
            "a.sql:\n  ERROR [SQL002] Missing semicolon at the end of the query - Ensure your \
             query ends with a ';'\n"
        );
    }

    #[test]
    fn test_json_report() {
        let reports = [Report {
            source:   "<stdin>".into(),
            findings: analyze("SELCT 1;")
        }];
        let opts = OutputOptions {
            format:  OutputFormat::Json,
            colored: false
        };
        let json = format_reports(&reports, &opts).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["findings"][0]["rule_id"], "SQL001");
        assert_eq!(value[0]["findings"][0]["severity"], "error");
    }

    #[test]
    fn test_yaml_report() {
        let reports = [Report {
            source:   "q.sql".into(),
            findings: analyze("SELECT (1;")
        }];
        let opts = OutputOptions {
            format:  OutputFormat::Yaml,
            colored: false
        };
        let yaml = format_reports(&reports, &opts).unwrap();
        assert!(yaml.contains("rule_id: SQL004"));
    }

    #[test]
    fn test_text_sink_writes_batches() {
        let mut sink = TextSink::new(Vec::new(), false);
        sink.render(&analyze("SELECT 1"));
        sink.render(&[]);
        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert!(written.contains("[SQL002]"));
        assert!(written.ends_with("<live>: No issues found!\n"));
    }
}
