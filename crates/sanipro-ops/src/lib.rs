pub mod ops_batch;
pub mod ops_interactive;
pub mod ops_pipeline;
