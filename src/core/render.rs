//! Renderer module
//!
//! Renders a Report to different output formats: jsonl, json, md

use crate::core::model::{Report, Status};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jsonl,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a report to a string
    pub fn render(&self, report: &Report) -> String {
        match self.config.format {
            OutputFormat::Jsonl => self.render_jsonl(report),
            OutputFormat::Json => self.render_json(report),
            OutputFormat::Markdown => self.render_markdown(report),
        }
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl(&self, report: &Report) -> String {
        report
            .items
            .iter()
            .filter_map(|item| {
                if self.config.pretty {
                    serde_json::to_string_pretty(item).ok()
                } else {
                    serde_json::to_string(item).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON array
    fn render_json(&self, report: &Report) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(&report.items).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(&report.items).unwrap_or_else(|_| "[]".to_string())
        }
    }

    /// Render as Markdown, one section per status
    fn render_markdown(&self, report: &Report) -> String {
        let mut output = String::new();

        if report.is_empty() {
            output.push_str("_No matching files._\n");
            return output;
        }

        for (status, title) in [
            (Status::Rewritten, "Rewritten"),
            (Status::Unchanged, "Unchanged"),
            (Status::Skipped, "Skipped"),
        ] {
            let section: Vec<_> = report.items.iter().filter(|i| i.status == status).collect();
            if section.is_empty() {
                continue;
            }

            output.push_str(&format!("## {}\n\n", title));
            for item in section {
                output.push_str(&format!("- `{}`", item.path));
                if item.replaced > 0 {
                    output.push_str(&format!(" ({} line endings)", item.replaced));
                }
                output.push('\n');
            }
            output.push('\n');
        }

        let summary = report.summary();
        output.push_str(&format!(
            "**Total:** {} rewritten, {} unchanged, {} skipped\n",
            summary.rewritten, summary.unchanged, summary.skipped
        ));

        output
    }
}
