//! Handler for batch mode: prompts come from stdin, one per line.

use miette::Result;

use sanipro_ops::ops_batch::run_batch;
use sanipro_ops::ops_pipeline::{build_pipeline, RunOptions};

pub fn exec(opts: &RunOptions) -> Result<()> {
    let mut pipeline = build_pipeline(opts)?;
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    run_batch(&mut pipeline, stdin.lock(), &mut stdout)?;
    Ok(())
}
