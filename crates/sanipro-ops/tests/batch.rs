use std::io::Cursor;

use sanipro_filters::FilterSpec;
use sanipro_ops::ops_batch::run_batch;
use sanipro_ops::ops_pipeline::{build_pipeline, RunOptions};

#[test]
fn one_output_line_per_prompt() {
    let mut pipeline = build_pipeline(&RunOptions::default()).unwrap();
    let input = Cursor::new("a, (b:1.234)\n\n  \nc\n");
    let mut out = Vec::new();
    let processed = run_batch(&mut pipeline, input, &mut out).unwrap();
    assert_eq!(processed, 2);
    assert_eq!(String::from_utf8(out).unwrap(), "a, (b:1.23)\nc\n");
}

#[test]
fn empty_input_prints_nothing() {
    let mut pipeline = build_pipeline(&RunOptions::default()).unwrap();
    let mut out = Vec::new();
    let processed = run_batch(&mut pipeline, Cursor::new(""), &mut out).unwrap();
    assert_eq!(processed, 0);
    assert!(out.is_empty());
}

#[test]
fn parse_error_stops_the_batch() {
    let mut pipeline = build_pipeline(&RunOptions::default()).unwrap();
    let mut out = Vec::new();
    let result = run_batch(&mut pipeline, Cursor::new("a\n(b\nc\n"), &mut out);
    assert!(result.is_err());
    assert_eq!(String::from_utf8(out).unwrap(), "a\n");
}

#[test]
fn filter_runs_for_every_line() {
    let opts = RunOptions {
        filter: Some(FilterSpec::Unique { reverse: true }),
        ..RunOptions::default()
    };
    let mut pipeline = build_pipeline(&opts).unwrap();
    let mut out = Vec::new();
    run_batch(&mut pipeline, Cursor::new("a, (a:1.5)\nb, b\n"), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "(a:1.5)\nb\n");
}
