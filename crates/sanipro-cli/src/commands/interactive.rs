//! Handler for `sanipro --interactive`.

use miette::Result;

use sanipro_ops::ops_interactive::{default_history_path, run_interactive, EditorReader};
use sanipro_ops::ops_pipeline::{build_pipeline, RunOptions};
use sanipro_util::progress;

pub fn exec(opts: &RunOptions) -> Result<()> {
    let mut pipeline = build_pipeline(opts)?;
    let mut reader = EditorReader::new(Some(default_history_path()), opts.history_size)?;

    progress::status_info("Interactive", "type a prompt, Ctrl-D to quit");
    let prompt = progress::styled_prompt(&opts.ps1);
    let summary = run_interactive(&mut pipeline, &mut reader, &prompt, &mut std::io::stdout())?;

    if summary.failed > 0 {
        progress::status_warn(
            "Finished",
            &format!(
                "{} prompt(s) processed, {} failed",
                summary.processed, summary.failed
            ),
        );
    }
    Ok(())
}
