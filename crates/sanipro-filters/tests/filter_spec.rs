use sanipro_core::token::Token;
use sanipro_filters::{FilterSpec, SimilarMethod, SortAllMethod};

#[test]
fn built_filter_reports_its_name() {
    let specs = [
        FilterSpec::Mask {
            patterns: vec!["x".to_string()],
            replace_to: "%%%".to_string(),
        },
        FilterSpec::Random { seed: Some(1) },
        FilterSpec::Reset { value: 1.0 },
        FilterSpec::Similar {
            method: SimilarMethod::Prim,
            reverse: false,
        },
        FilterSpec::Sort { reverse: false },
        FilterSpec::SortAll {
            method: SortAllMethod::Length,
            reverse: true,
        },
        FilterSpec::Unique { reverse: false },
    ];
    for spec in specs {
        let name = spec.name();
        assert_eq!(spec.build().name(), name);
    }
}

#[test]
fn built_mask_applies() {
    let mut filter = FilterSpec::Mask {
        patterns: vec!["hair".to_string()],
        replace_to: "***".to_string(),
    }
    .build();
    let out = filter.apply(vec![Token::new("white hair", 1.0), Token::new("cat", 1.0)]);
    assert_eq!(out[0].name(), "***");
    assert_eq!(out[1].name(), "cat");
}
