//! Operation: process prompts read from a stream, one per line.

use std::io::{BufRead, Write};

use sanipro_core::pipeline::Pipeline;
use sanipro_util::errors::SaniproError;

/// Process every non-blank line of `input` and write one result line each.
///
/// Returns the number of prompts processed. Stops at the first error.
pub fn run_batch<R: BufRead, W: Write>(
    pipeline: &mut Pipeline,
    input: R,
    output: &mut W,
) -> miette::Result<usize> {
    let mut processed = 0;
    for line in input.lines() {
        let line = line.map_err(SaniproError::Io)?;
        if line.trim().is_empty() {
            continue;
        }
        let rendered = pipeline.execute(&line)?;
        writeln!(output, "{rendered}").map_err(SaniproError::Io)?;
        processed += 1;
    }
    output.flush().map_err(SaniproError::Io)?;
    tracing::debug!(processed, "batch finished");
    Ok(processed)
}
