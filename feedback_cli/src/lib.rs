//! Command-line surface over `output_diff`: renders grading responses, run-code responses and
//! ad-hoc diffs of two output files.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use output_diff::feedback::{FeedbackReport, render_run_html, render_run_text};
use output_diff::renderers::html::{HtmlRenderer, replace_new_lines};
use output_diff::renderers::plain::PlainRenderer;
use output_diff::renderers::terminal::TerminalRenderer;
use output_diff::renderers::{RenderedDiff, format_output_diff};
use output_diff::response::{GradingResponse, RunResponse};
use output_diff::traits::renderer::MarkRenderer;
use output_diff::truncate::truncate_to;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Text,
    Terminal,
}

#[derive(Parser, Debug)]
#[command(name = "judge-feedback", version, about)]
pub struct Args {
    /// Path to the .env file with configuration overrides
    #[arg(long, default_value = ".env")]
    pub env: String,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render feedback for a grading response ("-" reads stdin)
    Render {
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Terminal)]
        format: OutputFormat,
    },
    /// Show the first difference between two output files
    Diff {
        #[arg(long)]
        expected: PathBuf,
        /// Omit to treat the program as having produced no output
        #[arg(long)]
        actual: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Terminal)]
        format: OutputFormat,
    },
    /// Render the result of a run-code response ("-" reads stdin)
    Run {
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Terminal)]
        format: OutputFormat,
    },
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn text_renderer(format: OutputFormat) -> &'static dyn MarkRenderer {
    match format {
        OutputFormat::Html => &HtmlRenderer,
        OutputFormat::Text => &PlainRenderer,
        OutputFormat::Terminal => &TerminalRenderer,
    }
}

/// Renders a grading response in `format`, truncating streams to `max_output_len`.
pub fn render_response(json: &str, format: OutputFormat, max_output_len: usize) -> Result<String> {
    let response = GradingResponse::from_json(json).context("Invalid grading response")?;
    let report = FeedbackReport::from_response_with_limit(response, max_output_len);
    if report.unlocks_model_answer {
        log::info!("full score; model answer unlocked");
    }
    Ok(match format {
        OutputFormat::Html => report.render_html(),
        other => report.render_text(text_renderer(other)),
    })
}

pub fn render_run(json: &str, format: OutputFormat) -> Result<String> {
    let response = RunResponse::from_json(json).context("Invalid run response")?;
    let outcome = response.outcome();
    Ok(match format {
        OutputFormat::Html => render_run_html(&outcome),
        _ => render_run_text(&outcome),
    })
}

pub fn render_diff(
    expected: &str,
    actual: Option<&str>,
    format: OutputFormat,
    max_output_len: usize,
) -> String {
    let expected = truncate_to(expected, max_output_len);
    let actual = actual.map(|a| truncate_to(a, max_output_len));
    let rendered = format_output_diff(&expected, actual.as_deref(), text_renderer(format));

    let (actual, expected) = match rendered {
        RenderedDiff::NoOutput(label) => return label,
        RenderedDiff::Pair { actual, expected } => (actual, expected),
    };
    match format {
        OutputFormat::Html => format!(
            "<pre class=\"code-runner-output\">{}</pre>\n<pre class=\"code-runner-output\">{}</pre>",
            replace_new_lines(&actual),
            replace_new_lines(&expected)
        ),
        _ => format!("--- actual\n{actual}\n--- expected\n{expected}"),
    }
}

/// Executes one parsed command and returns what should be printed.
pub fn execute(command: &Command, max_output_len: usize) -> Result<String> {
    match command {
        Command::Render { file, format } => {
            render_response(&read_input(file)?, *format, max_output_len)
        }
        Command::Run { file, format } => render_run(&read_input(file)?, *format),
        Command::Diff {
            expected,
            actual,
            format,
        } => {
            let expected = read_input(expected)?;
            let actual = actual.as_deref().map(read_input).transpose()?;
            Ok(render_diff(&expected, actual.as_deref(), *format, max_output_len))
        }
    }
}
