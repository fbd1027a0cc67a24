//! Operation: the interactive prompt loop.

use std::io::Write;
use std::path::PathBuf;

use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};

use sanipro_core::pipeline::Pipeline;
use sanipro_util::errors::SaniproError;
use sanipro_util::progress;

/// One read from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    /// Ctrl-C: drop the current line and keep going.
    Interrupted,
    /// Ctrl-D or end of input.
    Eof,
}

/// Source of interactive input lines.
pub trait LineReader {
    fn read(&mut self, prompt: &str) -> miette::Result<ReadOutcome>;

    /// Record a processed line, e.g. in the history.
    fn remember(&mut self, _line: &str) {}

    /// Called once when the session ends, whether it succeeded or not.
    fn finish(&mut self) {}
}

/// Counts reported when the loop ends.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InteractiveSummary {
    pub processed: usize,
    pub failed: usize,
}

/// Line editor backed by rustyline, with history persisted to a file.
pub struct EditorReader {
    editor: Editor<(), DefaultHistory>,
    history: Option<PathBuf>,
}

impl EditorReader {
    pub fn new(history: Option<PathBuf>, history_size: usize) -> miette::Result<Self> {
        let config = Config::builder()
            .max_history_size(history_size)
            .map_err(readline_error)?
            .auto_add_history(false)
            .build();
        let mut editor: Editor<(), DefaultHistory> =
            Editor::with_config(config).map_err(readline_error)?;

        if let Some(path) = &history {
            if path.is_file() {
                if let Err(e) = editor.load_history(path) {
                    tracing::warn!("Failed to load history from {}: {e}", path.display());
                }
            }
        }

        Ok(Self { editor, history })
    }

    /// Write the history file, creating its directory if needed.
    pub fn save_history(&mut self) {
        let Some(path) = &self.history else {
            return;
        };
        if let Some(parent) = path.parent() {
            if let Err(e) = sanipro_util::fs::ensure_dir(parent) {
                tracing::warn!("Failed to create {}: {e}", parent.display());
                return;
            }
        }
        if let Err(e) = self.editor.save_history(path) {
            tracing::warn!("Failed to save history to {}: {e}", path.display());
        }
    }
}

impl LineReader for EditorReader {
    fn read(&mut self, prompt: &str) -> miette::Result<ReadOutcome> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadOutcome::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(e) => Err(readline_error(e)),
        }
    }

    fn remember(&mut self, line: &str) {
        if let Err(e) = self.editor.add_history_entry(line) {
            tracing::debug!("history entry skipped: {e}");
        }
    }

    fn finish(&mut self) {
        self.save_history();
    }
}

fn readline_error(e: ReadlineError) -> miette::Report {
    match e {
        ReadlineError::Io(io) => SaniproError::Io(io).into(),
        other => SaniproError::Generic {
            message: format!("line editor failed: {other}"),
        }
        .into(),
    }
}

/// Default location of the interactive history file.
pub fn default_history_path() -> PathBuf {
    sanipro_util::fs::data_dir().join("history")
}

/// Read prompts until end of input, printing each processed prompt.
///
/// A prompt that fails to parse is reported and skipped; the session goes on.
/// [`LineReader::finish`] runs on every exit, including read and write errors.
pub fn run_interactive<L: LineReader, W: Write>(
    pipeline: &mut Pipeline,
    reader: &mut L,
    ps1: &str,
    output: &mut W,
) -> miette::Result<InteractiveSummary> {
    let mut summary = InteractiveSummary::default();
    let result = session(pipeline, reader, ps1, output, &mut summary);
    reader.finish();

    tracing::debug!(
        processed = summary.processed,
        failed = summary.failed,
        "interactive session finished"
    );
    result.map(|()| summary)
}

fn session<L: LineReader, W: Write>(
    pipeline: &mut Pipeline,
    reader: &mut L,
    ps1: &str,
    output: &mut W,
    summary: &mut InteractiveSummary,
) -> miette::Result<()> {
    loop {
        let line = match reader.read(ps1)? {
            ReadOutcome::Line(line) => line,
            ReadOutcome::Interrupted => continue,
            ReadOutcome::Eof => return Ok(()),
        };
        if line.trim().is_empty() {
            continue;
        }
        reader.remember(&line);

        match pipeline.execute(&line) {
            Ok(rendered) => {
                writeln!(output, "{rendered}").map_err(SaniproError::Io)?;
                output.flush().map_err(SaniproError::Io)?;
                summary.processed += 1;
            }
            Err(e) => {
                progress::status_error("error", &e.to_string());
                summary.failed += 1;
            }
        }
    }
}
